use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use serde::Serialize;

/// Dropdown value meaning "no site filter".
pub const ALL_SITES: &str = "All Sites";

// ---------------------------------------------------------------------------
// Outcome – the `class` column
// ---------------------------------------------------------------------------

/// Launch outcome. Class 0 is a failure, class 1 a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Both outcomes in class-value order.
    pub const ALL: [Outcome; 2] = [Outcome::Failure, Outcome::Success];

    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    /// `None` when the cell was empty; such records never match a payload range.
    pub payload_mass_kg: Option<f64>,
    pub booster_version_category: String,
    pub outcome: Outcome,
    /// Remaining columns, passed through untouched.
    pub extra: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// Site catalog
// ---------------------------------------------------------------------------

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

impl SiteOption {
    fn new(name: &str) -> Self {
        Self {
            label: name.to_string(),
            value: name.to_string(),
        }
    }
}

/// `All Sites` followed by every distinct site, busiest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteCatalog {
    options: Vec<SiteOption>,
}

impl SiteCatalog {
    /// Sites are ordered by descending record count; ties keep the order in
    /// which the sites first appear.
    pub fn from_records(records: &[LaunchRecord]) -> Self {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut slot: HashMap<&str, usize> = HashMap::new();
        for rec in records {
            match slot.get(rec.launch_site.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    slot.insert(rec.launch_site.as_str(), counts.len());
                    counts.push((rec.launch_site.as_str(), 1));
                }
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let mut options = Vec::with_capacity(counts.len() + 1);
        options.push(SiteOption::new(ALL_SITES));
        options.extend(counts.into_iter().map(|(site, _)| SiteOption::new(site)));
        SiteCatalog { options }
    }

    pub fn options(&self) -> &[SiteOption] {
        &self.options
    }
}

// ---------------------------------------------------------------------------
// SiteSelection – the dropdown value, parsed
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    AllSites,
    Site(String),
}

impl SiteSelection {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::AllSites
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SiteSelection::AllSites => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::AllSites => true,
            SiteSelection::Site(site) => record.launch_site == *site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with its derived summaries. Never mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    pub records: Vec<LaunchRecord>,
    pub min_payload: f64,
    pub max_payload: f64,
    pub catalog: SiteCatalog,
    /// Sorted distinct booster categories.
    pub booster_categories: BTreeSet<String>,
    /// Sorted distinct launch sites.
    pub sites: BTreeSet<String>,
}

impl LaunchDataset {
    /// Compute payload bounds, catalog and category indices.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let (min_payload, max_payload) = records
            .iter()
            .filter_map(|r| r.payload_mass_kg)
            .fold(None, |acc: Option<(f64, f64)>, p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
            })
            .unwrap_or((0.0, 0.0));

        let catalog = SiteCatalog::from_records(&records);
        let booster_categories = records
            .iter()
            .map(|r| r.booster_version_category.clone())
            .collect();
        let sites = records.iter().map(|r| r.launch_site.clone()).collect();

        LaunchDataset {
            records,
            min_payload,
            max_payload,
            catalog,
            booster_categories,
            sites,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn success_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == Outcome::Success)
            .count()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(site: &str, payload: Option<f64>, booster: &str, class: i64) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            booster_version_category: booster.to_string(),
            outcome: Outcome::from_class(class).expect("class must be 0 or 1"),
            extra: BTreeMap::new(),
        }
    }

    /// CCAFS: 3 failures, 2 successes. KSC: 1 failure, 4 successes.
    pub(crate) fn two_site_dataset() -> LaunchDataset {
        let records = vec![
            record("CCAFS", Some(500.0), "v1.0", 0),
            record("KSC", Some(2500.0), "FT", 1),
            record("CCAFS", Some(1200.0), "v1.1", 0),
            record("KSC", Some(4800.0), "FT", 1),
            record("CCAFS", Some(3100.0), "v1.1", 1),
            record("KSC", Some(5200.0), "B4", 0),
            record("CCAFS", None, "v1.0", 0),
            record("KSC", Some(9600.0), "B5", 1),
            record("CCAFS", Some(6000.0), "FT", 1),
            record("KSC", Some(3700.0), "B4", 1),
        ];
        LaunchDataset::from_records(records)
    }

    #[test]
    fn payload_bounds_ignore_missing_values() {
        let ds = two_site_dataset();
        assert_eq!(ds.min_payload, 500.0);
        assert_eq!(ds.max_payload, 9600.0);
    }

    #[test]
    fn payload_bounds_default_to_zero_without_payloads() {
        let ds = LaunchDataset::from_records(vec![record("A", None, "FT", 1)]);
        assert_eq!((ds.min_payload, ds.max_payload), (0.0, 0.0));
    }

    #[test]
    fn catalog_lists_all_sites_then_busiest_first() {
        let ds = LaunchDataset::from_records(vec![
            record("VAFB", Some(1.0), "FT", 1),
            record("KSC", Some(1.0), "FT", 1),
            record("KSC", Some(1.0), "FT", 0),
            record("CCAFS", Some(1.0), "FT", 1),
        ]);
        let values: Vec<&str> = ds.catalog.options().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec![ALL_SITES, "KSC", "VAFB", "CCAFS"]);
        assert!(ds.catalog.options().iter().all(|o| o.label == o.value));
    }

    #[test]
    fn selection_parses_sentinel() {
        assert_eq!(SiteSelection::from_value("All Sites"), SiteSelection::AllSites);
        assert_eq!(
            SiteSelection::from_value("KSC"),
            SiteSelection::Site("KSC".to_string())
        );
        assert_eq!(SiteSelection::Site("KSC".into()).to_string(), "KSC");
    }

    #[test]
    fn outcome_maps_class_values() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.class(), 1);
    }

    #[test]
    fn dataset_counts_successes() {
        assert_eq!(two_site_dataset().success_count(), 6);
    }
}
