use sourcerate_core::Source;

fn source(code: &str, name: &str, country: &str, postcode: &str, region: &str, city: &str) -> Source {
    Source {
        source_code: code.to_string(),
        name: name.to_string(),
        country_id: country.to_string(),
        postcode: postcode.to_string(),
        region_id: Some(region.to_string()),
        city: Some(city.to_string()),
    }
}

/// Fixture warehouses in priority order.
pub fn all() -> Vec<Source> {
    vec![
        source("east", "East Coast DC", "US", "07001", "NJ", "Avenel"),
        source("west", "West Coast DC", "US", "94607", "CA", "Oakland"),
        source("central", "Central DC", "US", "60601", "IL", "Chicago"),
    ]
}
