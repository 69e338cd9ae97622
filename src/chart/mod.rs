/// Declarative chart descriptions produced by the handlers and consumed by
/// the painters in `ui::plot`. They say what to draw, never how.
pub mod handlers;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Pie charts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

impl PieSlice {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// A chart with no slices; rendered as a "no data" placeholder.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slices: Vec::new(),
        }
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.total() <= 0.0
    }
}

/// Several pies of which exactly one is shown at a time, picked by a selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieGroup {
    pub title: String,
    pub entries: Vec<PieGroupEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieGroupEntry {
    pub site: String,
    pub chart: PieChart,
}

/// Output of the per-site breakdown handler.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutcomeBreakdown {
    PerSite(PieGroup),
    Single(PieChart),
}

impl OutcomeBreakdown {
    pub fn title(&self) -> &str {
        match self {
            OutcomeBreakdown::PerSite(group) => &group.title,
            OutcomeBreakdown::Single(chart) => &chart.title,
        }
    }
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Points sharing one booster category (one colour).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub category: String,
    /// `[payload_mass_kg, class]`
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}
