use std::sync::Arc;

use crate::chart::handlers::{payload_scatter, site_outcome_breakdown, site_success_pie};
use crate::chart::{OutcomeBreakdown, PieChart, ScatterChart};
use crate::color::ColorMap;
use crate::data::filter::PayloadRange;
use crate::data::model::{LaunchDataset, SiteSelection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Widget values plus the chart descriptions derived from them.
///
/// Each chart is recomputed only by the event handler of a widget it depends
/// on: the site dropdown feeds all three charts, the payload range only the
/// scatter plot.
pub struct DashboardState {
    /// Shared, read-only for the whole process.
    pub dataset: Arc<LaunchDataset>,

    /// Site dropdown value.
    pub site: SiteSelection,

    /// Payload range slider value.
    pub payload_range: PayloadRange,

    pub success_pie: PieChart,
    pub breakdown: OutcomeBreakdown,
    pub scatter: ScatterChart,

    /// Which entry of a per-site pie group is visible. Resets to the first
    /// entry whenever the breakdown is recomputed.
    pub breakdown_active: usize,

    /// Free text narrowing the dropdown's option list.
    pub site_search: String,

    pub booster_colors: ColorMap,
    pub site_colors: ColorMap,
}

impl DashboardState {
    /// Initial widget values: `All Sites` and the full payload range.
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        let site = SiteSelection::AllSites;
        let payload_range = PayloadRange::full(&dataset);
        let booster_colors = ColorMap::new(&dataset.booster_categories, 0.0);
        let site_colors = ColorMap::new(&dataset.sites, 200.0);

        Self {
            success_pie: site_success_pie(&dataset, &site),
            breakdown: site_outcome_breakdown(&dataset, &site),
            scatter: payload_scatter(&dataset, &site, payload_range),
            breakdown_active: 0,
            site_search: String::new(),
            booster_colors,
            site_colors,
            dataset,
            site,
            payload_range,
        }
    }

    /// Dropdown changed: re-run every chart. A repeated value is a no-op.
    pub fn on_site_changed(&mut self, value: &str) {
        let site = SiteSelection::from_value(value);
        if site == self.site {
            return;
        }
        log::debug!("site changed to {site}");
        self.site = site;
        self.success_pie = site_success_pie(&self.dataset, &self.site);
        self.breakdown = site_outcome_breakdown(&self.dataset, &self.site);
        self.breakdown_active = 0;
        self.scatter = payload_scatter(&self.dataset, &self.site, self.payload_range);
    }

    /// Range sliders changed: only the scatter plot depends on them.
    pub fn on_payload_range_changed(&mut self, range: PayloadRange) {
        if range == self.payload_range {
            return;
        }
        self.payload_range = range;
        self.scatter = payload_scatter(&self.dataset, &self.site, self.payload_range);
    }

    /// Pie-group selector changed; out-of-range indices are ignored.
    pub fn on_breakdown_site_selected(&mut self, index: usize) {
        if let OutcomeBreakdown::PerSite(group) = &self.breakdown {
            if index < group.entries.len() {
                self.breakdown_active = index;
            }
        }
    }

    /// Slider bounds: the dataset's payload extremes.
    pub fn payload_bounds(&self) -> (f64, f64) {
        (self.dataset.min_payload, self.dataset.max_payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::two_site_dataset;

    fn state() -> DashboardState {
        DashboardState::new(Arc::new(two_site_dataset()))
    }

    #[test]
    fn starts_with_all_sites_and_full_range() {
        let st = state();
        assert_eq!(st.site, SiteSelection::AllSites);
        assert_eq!(st.payload_range, PayloadRange::new(500.0, 9600.0));
        assert_eq!(st.payload_bounds(), (500.0, 9600.0));
        assert_eq!(st.success_pie.title, "Total Success Launches by Site");
        assert!(matches!(st.breakdown, OutcomeBreakdown::PerSite(_)));
        assert_eq!(st.scatter.point_count(), 9);
    }

    #[test]
    fn site_change_recomputes_all_charts() {
        let mut st = state();
        st.breakdown_active = 1;
        st.on_site_changed("KSC");

        assert_eq!(st.site, SiteSelection::Site("KSC".to_string()));
        assert_eq!(st.success_pie.title, "Total Success Launches for KSC");
        assert_eq!(st.breakdown.title(), "Success vs Failure Ratio for KSC");
        assert_eq!(st.breakdown_active, 0);
        assert_eq!(st.scatter.point_count(), 5);
    }

    #[test]
    fn payload_change_only_touches_scatter() {
        let mut st = state();
        let pie_before = st.success_pie.clone();
        let breakdown_before = st.breakdown.clone();

        st.on_payload_range_changed(PayloadRange::new(0.0, 3000.0));

        assert_eq!(st.success_pie, pie_before);
        assert_eq!(st.breakdown, breakdown_before);
        assert_eq!(st.scatter.point_count(), 3);
    }

    #[test]
    fn returning_to_all_sites_restores_initial_charts() {
        let initial = state();
        let mut st = state();
        st.on_site_changed("CCAFS");
        st.on_site_changed("All Sites");
        assert_eq!(st.success_pie, initial.success_pie);
        assert_eq!(st.breakdown, initial.breakdown);
        assert_eq!(st.scatter, initial.scatter);
    }

    #[test]
    fn breakdown_selector_ignores_out_of_range_index() {
        let mut st = state();
        st.on_breakdown_site_selected(1);
        assert_eq!(st.breakdown_active, 1);
        st.on_breakdown_site_selected(7);
        assert_eq!(st.breakdown_active, 1);
    }
}
