//! Deterministic fixture data shared by the mock collaborators.

pub mod rates;
pub mod sources;
