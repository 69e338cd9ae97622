use std::path::PathBuf;

/// Dataset file read at startup, relative to the working directory.
pub const DATASET_FILE: &str = "spacex_launch_dash.csv";

/// Compiled-in dashboard settings.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    pub window_title: String,
    pub heading: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    /// Height of each chart panel in points.
    pub chart_height: f32,
    /// Labelled tick marks under the payload range sliders (kg).
    pub payload_marks: Vec<f64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DATASET_FILE),
            window_title: "Launch Dashboard – SpaceX Launch Records".to_string(),
            heading: "SpaceX Launch Records Dashboard".to_string(),
            inner_size: [1100.0, 900.0],
            min_inner_size: [600.0, 500.0],
            chart_height: 320.0,
            payload_marks: vec![2000.0, 5000.0, 8000.0],
        }
    }
}

impl DashboardConfig {
    /// Label drawn under a payload tick mark.
    pub fn mark_label(mark: f64) -> String {
        format!("{mark:.0} (Kg)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_fixed_dataset_file() {
        let config = DashboardConfig::default();
        assert_eq!(config.dataset_path, PathBuf::from("spacex_launch_dash.csv"));
        assert_eq!(config.payload_marks, vec![2000.0, 5000.0, 8000.0]);
    }

    #[test]
    fn mark_labels_use_kilogram_suffix() {
        assert_eq!(DashboardConfig::mark_label(5000.0), "5000 (Kg)");
    }
}
