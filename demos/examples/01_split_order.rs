use std::sync::Arc;

use sourcerate::{QuoteDispatch, RateCollector};
use sourcerate_core::RateEntry;
use sourcerate_demos::common::{sample_request, split_collector};
use sourcerate_mock::{MockRateCollector, fixtures};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let request = sample_request();

    let healthy = split_collector(Arc::new(MockRateCollector::new()), QuoteDispatch::Concurrent)?;
    println!("== every source quotes both carriers ==");
    print_result(&healthy.collect_rates(&request).await?);

    // Table rate cannot ship from central: it drops out for the whole order.
    let inner = MockRateCollector::new().with_fallback(|req| {
        if req.selected_source_code.as_deref() == Some("central") {
            vec![
                fixtures::rates::flatrate(req),
                fixtures::rates::unavailable("tablerate", "Best Way"),
            ]
        } else {
            fixtures::rates::standard(req)
        }
    });
    let degraded = split_collector(Arc::new(inner), QuoteDispatch::Sequential)?;
    println!("== table rate unavailable from central ==");
    print_result(&degraded.collect_rates(&request).await?);

    Ok(())
}

fn print_result(result: &sourcerate::RateResult) {
    for pkg in &result.packages {
        println!("package from {}", pkg.source_code.as_deref().unwrap_or("-"));
        for entry in &pkg.entries {
            match entry {
                RateEntry::Rate(r) => {
                    println!("  {:<10} {:<8} {:>8}", r.carrier, r.method, r.price);
                }
                RateEntry::Error(e) => println!("  {:<10} error: {}", e.carrier, e.message),
            }
        }
    }
}
