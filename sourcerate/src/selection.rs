use std::sync::Arc;

use sourcerate_core::{
    Capability, RateRequest, SourceRateError, SourceSelectionEntry, SourceSelectionService,
    StockResolver, build_allocation_request, extract_shippable_items,
};

use crate::collector::tag_err;

/// Runs source selection for a rate request.
///
/// Extracts the shippable items, resolves the website's stock, builds the
/// allocation request and hands it to the selection service. An order with
/// nothing to ship yields no rows and the selection service is not called.
#[derive(Clone)]
pub struct SourceSelectionProvider {
    selection: Arc<dyn SourceSelectionService>,
    stocks: Arc<dyn StockResolver>,
    algorithm_code: Option<String>,
}

impl SourceSelectionProvider {
    /// Create a provider that uses the selection service's default algorithm.
    #[must_use]
    pub fn new(selection: Arc<dyn SourceSelectionService>, stocks: Arc<dyn StockResolver>) -> Self {
        Self {
            selection,
            stocks,
            algorithm_code: None,
        }
    }

    /// Configure the algorithm used when `select` is not given one.
    #[must_use]
    pub fn with_algorithm_code(mut self, code: Option<String>) -> Self {
        self.algorithm_code = code;
        self
    }

    /// Algorithm code `select` would use: the explicit code, then the
    /// configured one, then the selection service default.
    #[must_use]
    pub fn resolve_algorithm(&self, explicit: Option<&str>) -> String {
        explicit
            .map(str::to_string)
            .or_else(|| self.algorithm_code.clone())
            .unwrap_or_else(|| self.selection.default_algorithm_code())
    }

    /// Allocate the shippable items of `request` to inventory sources.
    ///
    /// # Errors
    /// Returns the stock resolver's or selection service's error, attributed
    /// to the failing collaborator.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "sourcerate::selection::select",
            skip(self, request),
            fields(website = request.website_id, items = request.items.len()),
        )
    )]
    pub async fn select(
        &self,
        request: &RateRequest,
        algorithm_code: Option<&str>,
    ) -> Result<Vec<SourceSelectionEntry>, SourceRateError> {
        let items = extract_shippable_items(&request.items);
        if items.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("no shippable items; skipping source selection");
            return Ok(vec![]);
        }

        let stock_id = self
            .stocks
            .stock_for_website(request.website_id)
            .await
            .map_err(|e| tag_err(Capability::StockResolution.as_str(), e))?;

        let allocation = build_allocation_request(request, items, stock_id);
        let code = self.resolve_algorithm(algorithm_code);

        #[cfg(feature = "tracing")]
        tracing::debug!(stock_id, algorithm = %code, "allocating shippable items");

        self.selection
            .allocate(&allocation, &code)
            .await
            .map_err(|e| tag_err(Capability::SourceSelection.as_str(), e))
    }
}
