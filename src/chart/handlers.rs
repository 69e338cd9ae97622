use std::collections::BTreeMap;

use crate::data::filter::{PayloadRange, filtered_indices, records_at_site};
use crate::data::model::{LaunchDataset, LaunchRecord, Outcome, SiteSelection};

use super::{OutcomeBreakdown, PieChart, PieGroup, PieGroupEntry, PieSlice, ScatterChart, ScatterSeries};

pub const SCATTER_X_LABEL: &str = "Payload Mass (kg)";
pub const SCATTER_Y_LABEL: &str = "class";

/// Failure and success counts, indexed by class value.
fn outcome_counts<'a>(records: impl Iterator<Item = &'a LaunchRecord>) -> [usize; 2] {
    let mut counts = [0usize; 2];
    for rec in records {
        counts[rec.outcome.class() as usize] += 1;
    }
    counts
}

/// Outcome counts per site, sites in name order.
fn counts_by_site(dataset: &LaunchDataset) -> BTreeMap<&str, [usize; 2]> {
    let mut by_site: BTreeMap<&str, [usize; 2]> = BTreeMap::new();
    for rec in &dataset.records {
        by_site.entry(rec.launch_site.as_str()).or_default()[rec.outcome.class() as usize] += 1;
    }
    by_site
}

/// One slice per outcome with a non-zero value, failure first.
fn outcome_slices(values: [f64; 2]) -> Vec<PieSlice> {
    Outcome::ALL
        .iter()
        .filter(|o| values[o.class() as usize] > 0.0)
        .map(|o| PieSlice::new(o.label(), values[o.class() as usize]))
        .collect()
}

// ---------------------------------------------------------------------------
// Chart 1: successes per site / outcome counts at one site
// ---------------------------------------------------------------------------

pub fn site_success_pie(dataset: &LaunchDataset, selection: &SiteSelection) -> PieChart {
    log::debug!("success pie: site={selection}");
    match selection {
        SiteSelection::AllSites => PieChart {
            title: "Total Success Launches by Site".to_string(),
            slices: counts_by_site(dataset)
                .into_iter()
                .map(|(site, counts)| PieSlice::new(site, counts[1] as f64))
                .collect(),
        },
        SiteSelection::Site(site) => {
            let counts = outcome_counts(records_at_site(dataset, selection));
            PieChart {
                title: format!("Total Success Launches for {site}"),
                slices: outcome_slices([counts[0] as f64, counts[1] as f64]),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Chart 2: failure/success split per site, or the ratio at one site
// ---------------------------------------------------------------------------

pub fn site_outcome_breakdown(dataset: &LaunchDataset, selection: &SiteSelection) -> OutcomeBreakdown {
    log::debug!("outcome breakdown: site={selection}");
    match selection {
        SiteSelection::AllSites => {
            let entries = counts_by_site(dataset)
                .into_iter()
                .map(|(site, counts)| PieGroupEntry {
                    site: site.to_string(),
                    chart: PieChart {
                        title: site.to_string(),
                        slices: Outcome::ALL
                            .iter()
                            .map(|o| PieSlice::new(o.label(), counts[o.class() as usize] as f64))
                            .collect(),
                    },
                })
                .collect();
            OutcomeBreakdown::PerSite(PieGroup {
                title: "Success / Failure Outcomes by Site".to_string(),
                entries,
            })
        }
        SiteSelection::Site(site) => {
            let title = format!("Success vs Failure Ratio for {site}");
            let counts = outcome_counts(records_at_site(dataset, selection));
            let total = (counts[0] + counts[1]) as f64;
            if total == 0.0 {
                return OutcomeBreakdown::Single(PieChart::empty(title));
            }
            OutcomeBreakdown::Single(PieChart {
                title,
                slices: outcome_slices([counts[0] as f64 / total, counts[1] as f64 / total]),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Chart 3: payload vs outcome, coloured by booster category
// ---------------------------------------------------------------------------

pub fn payload_scatter(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    log::debug!(
        "payload scatter: site={selection}, payload range=[{}, {}]",
        range.low,
        range.high
    );
    let mut by_category: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for i in filtered_indices(dataset, selection, range) {
        let rec = &dataset.records[i];
        let Some(payload) = rec.payload_mass_kg else {
            continue;
        };
        by_category
            .entry(rec.booster_version_category.as_str())
            .or_default()
            .push([payload, f64::from(rec.outcome.class())]);
    }

    ScatterChart {
        title: format!("Correlation between Payload and Success for {selection}"),
        x_label: SCATTER_X_LABEL.to_string(),
        y_label: SCATTER_Y_LABEL.to_string(),
        series: by_category
            .into_iter()
            .map(|(category, points)| ScatterSeries {
                category: category.to_string(),
                points,
            })
            .collect(),
    }
}
