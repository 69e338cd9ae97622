use eframe::egui;

use crate::config::DashboardConfig;
use crate::state::DashboardState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashboardApp {
    pub state: DashboardState,
    pub config: DashboardConfig,
}

impl LaunchDashboardApp {
    pub fn new(state: DashboardState, config: DashboardConfig) -> Self {
        Self { state, config }
    }
}

impl eframe::App for LaunchDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + dataset summary ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui, &self.state, &self.config);
        });

        // ---- Central panel: dropdown, charts, payload range ----
        let height = self.config.chart_height;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::site_dropdown(ui, &mut self.state);
                    ui.add_space(8.0);

                    plot::success_pie(ui, &self.state, height);
                    ui.separator();

                    plot::outcome_breakdown(ui, &mut self.state, height);
                    ui.separator();

                    panels::payload_range(ui, &mut self.state, &self.config);
                    ui.add_space(4.0);

                    plot::payload_scatter(ui, &self.state, height);
                });
        });
    }
}
