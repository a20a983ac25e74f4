use crate::split::allocation::SourceGroup;
use crate::types::{Origin, RateRequest, Source};

/// A rate request restricted to the items one source ships, with the origin
/// moved to that source's location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRateRequest {
    group: SourceGroup,
    request: RateRequest,
}

impl SourceRateRequest {
    /// Derive the request for `group` shipping from `source`.
    ///
    /// The derived request is built as a new value from `original`:
    /// - origin country, postcode, region and city come from `source`; the
    ///   region is also written as the region code,
    /// - `selected_source_code` is the group's source code,
    /// - items are the original rows whose SKU the group ships, each carrying
    ///   the allocated quantity instead of the cart quantity. Other rows are dropped.
    #[must_use]
    pub fn build(original: &RateRequest, group: &SourceGroup, source: &Source) -> Self {
        let items = original
            .items
            .iter()
            .filter_map(|item| group.qty(&item.sku).map(|qty| item.with_qty(qty)))
            .collect();

        let request = RateRequest {
            website_id: original.website_id,
            destination: original.destination.clone(),
            origin: Origin {
                country_id: Some(source.country_id.clone()),
                postcode: Some(source.postcode.clone()),
                region_id: source.region_id.clone(),
                region_code: source.region_id.clone(),
                city: source.city.clone(),
            },
            selected_source_code: Some(group.source_code().to_string()),
            items,
        };

        Self {
            group: group.clone(),
            request,
        }
    }

    /// Source code the request ships from.
    #[must_use]
    pub fn source_code(&self) -> &str {
        self.group.source_code()
    }

    /// The allocation group this request was built for.
    #[must_use]
    pub const fn group(&self) -> &SourceGroup {
        &self.group
    }

    /// The derived rate request handed to the rate collector.
    #[must_use]
    pub const fn request(&self) -> &RateRequest {
        &self.request
    }
}
