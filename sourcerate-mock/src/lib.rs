use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sourcerate_core::{
    AllocationRequest, RateCollector, RateEntry, RateRequest, RateResult, Source, SourceRateError,
    SourceRepository, SourceSelectionEntry, SourceSelectionService, StockResolver,
};
use tokio::sync::Mutex;

pub mod fixtures;

/// Instruction for how a collaborator should answer a given input.
#[derive(Clone, Debug)]
pub enum MockBehavior<T> {
    /// Return the provided value.
    Return(T),
    /// Fail with the provided error.
    Fail(SourceRateError),
    /// Never resolve.
    Hang,
}

type QuoteFn = Arc<dyn Fn(&RateRequest) -> Vec<RateEntry> + Send + Sync>;

/// Rate collector that answers from per-source scripts and records every
/// request it receives.
///
/// Requests carrying a `selected_source_code` with a script get that script;
/// everything else falls back to the fixture pricing in
/// [`fixtures::rates::standard`] unless overridden via [`MockRateCollector::with_fallback`].
pub struct MockRateCollector {
    name: &'static str,
    by_source: HashMap<String, MockBehavior<Vec<RateEntry>>>,
    fallback: QuoteFn,
    seen: Mutex<Vec<RateRequest>>,
}

impl Default for MockRateCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRateCollector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "mock-rates",
            by_source: HashMap::new(),
            fallback: Arc::new(fixtures::rates::standard),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Answer sub-requests for `source_code` with `entries`.
    #[must_use]
    pub fn quote_for(mut self, source_code: &str, entries: Vec<RateEntry>) -> Self {
        self.by_source
            .insert(source_code.to_string(), MockBehavior::Return(entries));
        self
    }

    /// Never answer sub-requests for `source_code`.
    #[must_use]
    pub fn hang_for(mut self, source_code: &str) -> Self {
        self.by_source
            .insert(source_code.to_string(), MockBehavior::Hang);
        self
    }

    /// Fail sub-requests for `source_code` with `err`.
    #[must_use]
    pub fn fail_for(mut self, source_code: &str, err: SourceRateError) -> Self {
        self.by_source
            .insert(source_code.to_string(), MockBehavior::Fail(err));
        self
    }

    /// Replace the pricing used for unscripted requests.
    #[must_use]
    pub fn with_fallback<F>(mut self, f: F) -> Self
    where
        F: Fn(&RateRequest) -> Vec<RateEntry> + Send + Sync + 'static,
    {
        self.fallback = Arc::new(f);
        self
    }

    /// Requests received so far, in call order.
    pub async fn requests(&self) -> Vec<RateRequest> {
        self.seen.lock().await.clone()
    }

    /// Number of calls received so far.
    pub async fn calls(&self) -> usize {
        self.seen.lock().await.len()
    }
}

#[async_trait]
impl RateCollector for MockRateCollector {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn collect_rates(&self, request: &RateRequest) -> Result<RateResult, SourceRateError> {
        self.seen.lock().await.push(request.clone());

        let scripted = request
            .selected_source_code
            .as_deref()
            .and_then(|code| self.by_source.get(code));
        match scripted {
            Some(MockBehavior::Return(entries)) => Ok(RateResult::single(entries.clone())),
            Some(MockBehavior::Fail(e)) => Err(e.clone()),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Ok(RateResult::single((self.fallback)(request))),
        }
    }
}

/// Priority-order allocator over an in-memory stock table.
///
/// For each requested item, sources are visited in registration order and
/// each deducts as much as it holds until the item is covered. Every source
/// stocking the SKU gets a row, with zero once the item is already covered.
pub struct MockSourceSelection {
    sources: Vec<(String, HashMap<String, Decimal>)>,
    default_algorithm: String,
    calls: Mutex<Vec<(AllocationRequest, String)>>,
    behavior: Option<MockBehavior<Vec<SourceSelectionEntry>>>,
}

impl Default for MockSourceSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSourceSelection {
    pub const PRIORITY: &'static str = "priority";

    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            default_algorithm: Self::PRIORITY.to_string(),
            calls: Mutex::new(Vec::new()),
            behavior: None,
        }
    }

    /// Register `source_code` holding `qty` units of `sku`.
    #[must_use]
    pub fn stock(mut self, source_code: &str, sku: &str, qty: Decimal) -> Self {
        if let Some((_, items)) = self.sources.iter_mut().find(|(c, _)| c == source_code) {
            items.insert(sku.to_string(), qty);
        } else {
            let mut items = HashMap::new();
            items.insert(sku.to_string(), qty);
            self.sources.push((source_code.to_string(), items));
        }
        self
    }

    /// Ignore stock and always answer with `behavior`.
    #[must_use]
    pub fn respond(mut self, behavior: MockBehavior<Vec<SourceSelectionEntry>>) -> Self {
        self.behavior = Some(behavior);
        self
    }

    /// Allocation requests and algorithm codes received so far.
    pub async fn calls(&self) -> Vec<(AllocationRequest, String)> {
        self.calls.lock().await.clone()
    }

    fn priority(&self, request: &AllocationRequest) -> Vec<SourceSelectionEntry> {
        let mut out = Vec::new();
        for item in &request.items {
            let mut remaining = item.qty;
            for (code, stock) in &self.sources {
                let Some(available) = stock.get(&item.sku) else {
                    continue;
                };
                let take = remaining.min(*available).max(Decimal::ZERO);
                remaining -= take;
                out.push(SourceSelectionEntry::new(code.clone(), item.sku.clone(), take));
            }
        }
        out
    }
}

#[async_trait]
impl SourceSelectionService for MockSourceSelection {
    async fn allocate(
        &self,
        request: &AllocationRequest,
        algorithm_code: &str,
    ) -> Result<Vec<SourceSelectionEntry>, SourceRateError> {
        self.calls
            .lock()
            .await
            .push((request.clone(), algorithm_code.to_string()));

        match &self.behavior {
            Some(MockBehavior::Return(rows)) => return Ok(rows.clone()),
            Some(MockBehavior::Fail(e)) => return Err(e.clone()),
            Some(MockBehavior::Hang) => std::future::pending::<()>().await,
            None => {}
        }
        if algorithm_code != Self::PRIORITY {
            return Err(SourceRateError::InvalidArg(format!(
                "unknown source selection algorithm: {algorithm_code}"
            )));
        }
        Ok(self.priority(request))
    }

    fn default_algorithm_code(&self) -> String {
        self.default_algorithm.clone()
    }
}

/// Source repository backed by a map; unknown codes are `NotFound`.
pub struct MockSourceRepository {
    sources: HashMap<String, Source>,
}

impl Default for MockSourceRepository {
    fn default() -> Self {
        Self::from_sources(fixtures::sources::all())
    }
}

impl MockSourceRepository {
    #[must_use]
    pub fn from_sources<I: IntoIterator<Item = Source>>(sources: I) -> Self {
        Self {
            sources: sources
                .into_iter()
                .map(|s| (s.source_code.clone(), s))
                .collect(),
        }
    }
}

#[async_trait]
impl SourceRepository for MockSourceRepository {
    async fn get(&self, source_code: &str) -> Result<Source, SourceRateError> {
        self.sources
            .get(source_code)
            .cloned()
            .ok_or_else(|| SourceRateError::not_found(format!("source {source_code}")))
    }
}

/// Stock resolver backed by a map; unknown websites are `NotFound`.
pub struct MockStockResolver {
    stocks: HashMap<u32, i64>,
}

impl Default for MockStockResolver {
    fn default() -> Self {
        let mut stocks = HashMap::new();
        stocks.insert(1, 1);
        Self { stocks }
    }
}

impl MockStockResolver {
    /// Assign `stock_id` to `website_id`.
    #[must_use]
    pub fn with_stock(mut self, website_id: u32, stock_id: i64) -> Self {
        self.stocks.insert(website_id, stock_id);
        self
    }
}

#[async_trait]
impl StockResolver for MockStockResolver {
    async fn stock_for_website(&self, website_id: u32) -> Result<i64, SourceRateError> {
        self.stocks
            .get(&website_id)
            .copied()
            .ok_or_else(|| SourceRateError::not_found(format!("stock for website {website_id}")))
    }
}
