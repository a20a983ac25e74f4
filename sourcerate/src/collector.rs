use std::sync::Arc;

use async_trait::async_trait;
use sourcerate_core::{
    Capability, CarrierConfig, MethodReconciler, QuoteDispatch, RateCollector, RateRequest,
    RateResult, ScopeConfig, SourceAllocation, SourceQuote, SourceRateError, SourceRateRequest,
    SourceRepository, SourceSelectionService, SplitConfig, StockResolver, USE_SOURCE_ORIGIN_FLAG,
    merge_source_results,
};

use crate::layer::SourceSplitLayer;
use crate::selection::SourceSelectionProvider;

/// Rate collector that quotes an order once per inventory source and keeps
/// only the methods every source can honor.
///
/// Wraps an inner `RateCollector`; the scope flag [`USE_SOURCE_ORIGIN_FLAG`]
/// decides per call whether to split or delegate unchanged.
pub struct SourceSplitCollector {
    pub(crate) inner: Arc<dyn RateCollector>,
    pub(crate) parts: SplitParts,
}

/// Everything the split path needs apart from the wrapped collector.
#[derive(Clone)]
pub(crate) struct SplitParts {
    pub(crate) selection: SourceSelectionProvider,
    pub(crate) sources: Arc<dyn SourceRepository>,
    pub(crate) scope: Arc<dyn ScopeConfig>,
    pub(crate) carriers: Arc<dyn CarrierConfig>,
    pub(crate) cfg: SplitConfig,
}

/// Builder for a [`SourceSplitCollector`] or a [`SourceSplitLayer`].
pub struct SourceSplitBuilder {
    inner: Option<Arc<dyn RateCollector>>,
    selection: Option<Arc<dyn SourceSelectionService>>,
    stocks: Option<Arc<dyn StockResolver>>,
    sources: Option<Arc<dyn SourceRepository>>,
    scope: Option<Arc<dyn ScopeConfig>>,
    carriers: Option<Arc<dyn CarrierConfig>>,
    cfg: SplitConfig,
}

impl Default for SourceSplitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceSplitBuilder {
    /// Create an empty builder with default configuration.
    ///
    /// Every collaborator must be registered before `build`; the defaults are
    /// the selection service's own algorithm and sequential dispatch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: None,
            selection: None,
            stocks: None,
            sources: None,
            scope: None,
            carriers: None,
            cfg: SplitConfig::default(),
        }
    }

    /// Register the collector that quotes both the unsplit request and every
    /// source-specific sub-request.
    #[must_use]
    pub fn with_inner(mut self, inner: Arc<dyn RateCollector>) -> Self {
        self.inner = Some(inner);
        self
    }

    /// Register the source selection service.
    #[must_use]
    pub fn source_selection(mut self, selection: Arc<dyn SourceSelectionService>) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Register the website to stock resolver.
    #[must_use]
    pub fn stock_resolver(mut self, stocks: Arc<dyn StockResolver>) -> Self {
        self.stocks = Some(stocks);
        self
    }

    /// Register the inventory source repository.
    #[must_use]
    pub fn source_repository(mut self, sources: Arc<dyn SourceRepository>) -> Self {
        self.sources = Some(sources);
        self
    }

    /// Register the scope configuration holding the split flag.
    #[must_use]
    pub fn scope_config(mut self, scope: Arc<dyn ScopeConfig>) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Register the carrier configuration used to admit error entries.
    #[must_use]
    pub fn carrier_config(mut self, carriers: Arc<dyn CarrierConfig>) -> Self {
        self.carriers = Some(carriers);
        self
    }

    /// Replace the whole split configuration.
    #[must_use]
    pub fn config(mut self, cfg: SplitConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select a source selection algorithm instead of the service default.
    #[must_use]
    pub fn algorithm_code(mut self, code: impl Into<String>) -> Self {
        self.cfg.algorithm_code = Some(code.into());
        self
    }

    /// Select how sub-requests are dispatched to the inner collector.
    #[must_use]
    pub const fn dispatch(mut self, dispatch: QuoteDispatch) -> Self {
        self.cfg.dispatch = dispatch;
        self
    }

    fn parts(self) -> Result<(Option<Arc<dyn RateCollector>>, SplitParts), SourceRateError> {
        let missing = |cap: Capability| {
            SourceRateError::unsupported(cap.as_str())
        };
        let selection = self
            .selection
            .ok_or_else(|| missing(Capability::SourceSelection))?;
        let stocks = self
            .stocks
            .ok_or_else(|| missing(Capability::StockResolution))?;
        let sources = self.sources.ok_or_else(|| missing(Capability::SourceLookup))?;
        let scope = self.scope.ok_or_else(|| missing(Capability::ScopeConfig))?;
        let carriers = self
            .carriers
            .ok_or_else(|| missing(Capability::CarrierConfig))?;

        let selection = SourceSelectionProvider::new(selection, stocks)
            .with_algorithm_code(self.cfg.algorithm_code.clone());

        Ok((
            self.inner,
            SplitParts {
                selection,
                sources,
                scope,
                carriers,
                cfg: self.cfg,
            },
        ))
    }

    /// Build the collector.
    ///
    /// # Errors
    /// Returns `Unsupported` naming the capability of the first missing
    /// collaborator, including the inner collector.
    pub fn build(self) -> Result<SourceSplitCollector, SourceRateError> {
        let (inner, parts) = self.parts()?;
        let inner =
            inner.ok_or_else(|| SourceRateError::unsupported(Capability::CollectRates.as_str()))?;
        Ok(SourceSplitCollector { inner, parts })
    }

    /// Build a middleware layer that wraps whichever collector it is applied to.
    /// A collector registered via `with_inner` is ignored.
    ///
    /// # Errors
    /// Returns `Unsupported` naming the capability of the first missing collaborator.
    pub fn into_layer(self) -> Result<SourceSplitLayer, SourceRateError> {
        let (_, parts) = self.parts()?;
        Ok(SourceSplitLayer::new(parts))
    }
}

/// Attribute `e` to `collaborator`, keeping errors that already name their origin.
#[must_use]
pub fn tag_err(collaborator: &str, e: SourceRateError) -> SourceRateError {
    e.tag(collaborator)
}

impl SourceSplitCollector {
    /// Start building a new collector.
    #[must_use]
    pub fn builder() -> SourceSplitBuilder {
        SourceSplitBuilder::new()
    }

    /// The active split configuration.
    #[must_use]
    pub const fn config(&self) -> &SplitConfig {
        &self.parts.cfg
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "sourcerate::collector::collect_split",
            skip(self, request),
            fields(website = request.website_id, dispatch = ?self.parts.cfg.dispatch),
        )
    )]
    async fn collect_split(&self, request: &RateRequest) -> Result<RateResult, SourceRateError> {
        let rows = self.parts.selection.select(request, None).await?;
        let allocation = SourceAllocation::from_entries(rows);
        if allocation.is_empty() {
            return Ok(RateResult::new());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(groups = allocation.groups().len(), "order split by source");

        let mut sub_requests = Vec::with_capacity(allocation.groups().len());
        for group in allocation.groups() {
            let source = self
                .parts
                .sources
                .get(group.source_code())
                .await
                .map_err(|e| tag_err(Capability::SourceLookup.as_str(), e))?;
            sub_requests.push(SourceRateRequest::build(request, group, &source));
        }

        let results = self.quote_all(&sub_requests).await?;

        let mut reconciler = MethodReconciler::new(allocation.required().clone());
        let mut quotes = Vec::with_capacity(sub_requests.len());
        for (sub, result) in sub_requests.iter().zip(results) {
            let entries = result.into_entries();
            reconciler.observe(sub.group(), &entries);
            quotes.push(SourceQuote {
                source_code: sub.source_code().to_string(),
                entries,
            });
        }

        let completed = reconciler.finish();
        Ok(merge_source_results(
            quotes,
            &completed,
            self.parts.carriers.as_ref(),
        ))
    }

    async fn quote_all(
        &self,
        sub_requests: &[SourceRateRequest],
    ) -> Result<Vec<RateResult>, SourceRateError> {
        match self.parts.cfg.dispatch {
            QuoteDispatch::Concurrent => {
                let calls = sub_requests.iter().map(|sub| self.quote_source(sub));
                futures::future::try_join_all(calls).await
            }
            _ => {
                let mut out = Vec::with_capacity(sub_requests.len());
                for sub in sub_requests {
                    out.push(self.quote_source(sub).await?);
                }
                Ok(out)
            }
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "sourcerate::collector::quote_source",
            skip(self, sub),
            fields(source = %sub.source_code(), items = sub.request().items.len()),
        )
    )]
    async fn quote_source(&self, sub: &SourceRateRequest) -> Result<RateResult, SourceRateError> {
        self.inner
            .collect_rates(sub.request())
            .await
            .map_err(|e| tag_err(self.inner.name(), e))
    }
}

#[async_trait]
impl RateCollector for SourceSplitCollector {
    fn name(&self) -> &'static str {
        "source-split"
    }

    async fn collect_rates(&self, request: &RateRequest) -> Result<RateResult, SourceRateError> {
        if !self.parts.scope.is_set_flag(USE_SOURCE_ORIGIN_FLAG) {
            #[cfg(feature = "tracing")]
            tracing::debug!(inner = self.inner.name(), "source split disabled; delegating");
            return self.inner.collect_rates(request).await;
        }
        self.collect_split(request).await
    }
}
