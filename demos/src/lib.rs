//! Shared wiring for the sourcerate demo programs.

pub mod common;
