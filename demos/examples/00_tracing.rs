use std::sync::Arc;

use sourcerate::{QuoteDispatch, RateCollector};
use sourcerate_demos::common::{sample_request, split_collector};
use sourcerate_mock::MockRateCollector;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let collector = split_collector(Arc::new(MockRateCollector::new()), QuoteDispatch::Sequential)?;
    let _ = collector.collect_rates(&sample_request()).await?;

    Ok(())
}
