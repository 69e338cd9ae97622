use super::model::{LaunchDataset, LaunchRecord, SiteSelection};

// ---------------------------------------------------------------------------
// Payload range: closed interval in kilograms
// ---------------------------------------------------------------------------

/// Closed payload interval `[low, high]`. An inverted interval is allowed and
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// The full range of payloads present in the dataset.
    pub fn full(dataset: &LaunchDataset) -> Self {
        Self::new(dataset.min_payload, dataset.max_payload)
    }

    /// Records without a payload never fall inside a range.
    pub fn contains(&self, payload: Option<f64>) -> bool {
        payload.is_some_and(|p| self.low <= p && p <= self.high)
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

// ---------------------------------------------------------------------------
// Record selection
// ---------------------------------------------------------------------------

/// Records at the selected site (all records for `AllSites`), in dataset order.
pub fn records_at_site<'a>(
    dataset: &'a LaunchDataset,
    selection: &'a SiteSelection,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    dataset.records.iter().filter(move |r| selection.matches(r))
}

/// Return indices of records matching the site selection whose payload lies
/// inside `range`.
pub fn filtered_indices(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| selection.matches(r) && range.contains(r.payload_mass_kg))
        .map(|(i, _)| i)
        .collect()
}
