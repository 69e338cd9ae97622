use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui, vec2};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::chart::{OutcomeBreakdown, PieChart, ScatterChart};
use crate::color::ColorMap;
use crate::state::DashboardState;

/// Wedges wider than this are split so every polygon stays convex.
const MAX_WEDGE_ANGLE: f64 = FRAC_PI_2;
/// Arc resolution: vertices per full turn.
const ARC_STEPS: f64 = 180.0;
/// Slices below this share of the pie get no percentage label.
const MIN_LABEL_SHARE: f64 = 0.03;
/// Inner radius of the per-site donuts in chart 2.
const GROUP_PIE_HOLE: f64 = 0.3;

// ---------------------------------------------------------------------------
// Pie charts
// ---------------------------------------------------------------------------

/// Vertices of the wedge between two angles on the unit circle, centre first.
fn wedge_points(start: f64, end: f64) -> Vec<[f64; 2]> {
    let steps = (((end - start) / TAU) * ARC_STEPS).ceil().max(1.0) as usize;
    let mut pts = Vec::with_capacity(steps + 2);
    pts.push([0.0, 0.0]);
    for i in 0..=steps {
        let a = start + (end - start) * i as f64 / steps as f64;
        pts.push([a.cos(), a.sin()]);
    }
    pts
}

/// Quads covering the ring sector between two angles and radii `inner..1`.
/// A ring sector is not convex, so it is drawn as one quad per arc step.
fn ring_quads(start: f64, end: f64, inner: f64) -> Vec<Vec<[f64; 2]>> {
    let steps = (((end - start) / TAU) * ARC_STEPS).ceil().max(1.0) as usize;
    let angle = |i: usize| start + (end - start) * i as f64 / steps as f64;
    (0..steps)
        .map(|i| {
            let (a, b) = (angle(i), angle(i + 1));
            vec![
                [a.cos(), a.sin()],
                [b.cos(), b.sin()],
                [inner * b.cos(), inner * b.sin()],
                [inner * a.cos(), inner * a.sin()],
            ]
        })
        .collect()
}

/// Placeholder text for a pie with nothing to draw.
fn empty_pie_message(chart: &PieChart) -> &'static str {
    if chart.slices.is_empty() {
        "No launch records for this selection"
    } else {
        "No successful launches for this selection"
    }
}

/// Render a pie chart, or a donut when `hole > 0`. Slices start at twelve
/// o'clock and run clockwise.
fn pie_chart(ui: &mut Ui, id: &str, chart: &PieChart, colors: &ColorMap, height: f32, hole: f64) {
    ui.strong(chart.title.as_str());
    if chart.is_empty() {
        let size = vec2(ui.available_width(), height);
        ui.allocate_ui(size, |ui: &mut Ui| {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label(RichText::new(empty_pie_message(chart)).italics());
            });
        });
        return;
    }
    let label_radius = 0.62_f64.max((1.0 + hole) / 2.0);

    let total = chart.total();
    Plot::new(id)
        .height(height)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .show(ui, |plot_ui| {
            let mut angle = FRAC_PI_2;
            for slice in chart.slices.iter().filter(|s| s.value > 0.0) {
                let share = slice.value / total;
                let end = angle - share * TAU;
                let color = colors.color_for(&slice.label);

                if hole > 0.0 {
                    for quad in ring_quads(end, angle, hole) {
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::new(quad))
                                .name(&slice.label)
                                .fill_color(color)
                                .stroke(Stroke::NONE),
                        );
                    }
                }
                let mut from = if hole > 0.0 { end } else { angle };
                while from > end {
                    let to = (from - MAX_WEDGE_ANGLE).max(end);
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(wedge_points(to, from)))
                            .name(&slice.label)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, Color32::WHITE)),
                    );
                    from = to;
                }

                if share >= MIN_LABEL_SHARE {
                    let mid = (angle + end) / 2.0;
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(label_radius * mid.cos(), label_radius * mid.sin()),
                            RichText::new(format!("{:.1}%", share * 100.0)).color(Color32::WHITE),
                        )
                        .name(&slice.label),
                    );
                }
                angle = end;
            }
        });
}

/// Chart 1.
pub fn success_pie(ui: &mut Ui, state: &DashboardState, height: f32) {
    pie_chart(ui, "success_pie", &state.success_pie, &state.site_colors, height, 0.0);
}

/// Chart 2: a single ratio pie, or one pie per site behind a selector.
pub fn outcome_breakdown(ui: &mut Ui, state: &mut DashboardState, height: f32) {
    let mut selected = None;
    match &state.breakdown {
        OutcomeBreakdown::Single(chart) => {
            pie_chart(ui, "breakdown_pie", chart, &state.site_colors, height, 0.0);
        }
        OutcomeBreakdown::PerSite(group) => {
            ui.strong(state.breakdown.title());
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for (i, entry) in group.entries.iter().enumerate() {
                    if ui
                        .selectable_label(i == state.breakdown_active, entry.site.as_str())
                        .clicked()
                    {
                        selected = Some(i);
                    }
                }
            });
            if let Some(entry) = group.entries.get(state.breakdown_active) {
                pie_chart(
                    ui,
                    "breakdown_group_pie",
                    &entry.chart,
                    &state.site_colors,
                    height,
                    GROUP_PIE_HOLE,
                );
            }
        }
    }
    if let Some(i) = selected {
        state.on_breakdown_site_selected(i);
    }
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Chart 3: payload mass vs. outcome class, one colour per booster category.
pub fn payload_scatter(ui: &mut Ui, state: &DashboardState, height: f32) {
    let chart: &ScatterChart = &state.scatter;
    ui.strong(chart.title.as_str());
    if chart.is_empty() {
        ui.label(RichText::new("No launches in the selected payload range").italics());
    }

    let (min, max) = state.payload_bounds();
    Plot::new("payload_scatter")
        .height(height)
        .legend(Legend::default())
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .include_x(min)
        .include_x(max)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                plot_ui.points(
                    Points::new(PlotPoints::new(series.points.clone()))
                        .name(&series.category)
                        .color(state.booster_colors.color_for(&series.category))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}
