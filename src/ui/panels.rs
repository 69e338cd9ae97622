use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense, Ui, pos2, vec2};

use crate::config::DashboardConfig;
use crate::data::filter::PayloadRange;
use crate::state::DashboardState;

const HEADING_COLOR: Color32 = Color32::from_rgb(0x50, 0x3D, 0x36);

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Title plus a one-line dataset summary.
pub fn header(ui: &mut Ui, state: &DashboardState, config: &DashboardConfig) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(
            RichText::new(config.heading.as_str())
                .size(32.0)
                .color(HEADING_COLOR),
        );
    });

    let ds = &state.dataset;
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} launches at {} sites, {} successful",
            ds.len(),
            ds.sites.len(),
            ds.success_count()
        ));
        ui.separator();
        ui.label(format!(
            "payload {:.0} – {:.0} kg",
            ds.min_payload, ds.max_payload
        ));
    });
}

// ---------------------------------------------------------------------------
// Site dropdown
// ---------------------------------------------------------------------------

/// Searchable launch-site dropdown. Picking an entry fires
/// [`DashboardState::on_site_changed`].
pub fn site_dropdown(ui: &mut Ui, state: &mut DashboardState) {
    let options = state.dataset.catalog.options().to_vec();
    let mut chosen: Option<String> = None;

    egui::ComboBox::from_id_salt("site-dropdown")
        .selected_text(state.site.value())
        .width(ui.available_width().min(420.0))
        // Clicks inside the popup land on the search box.
        .close_behavior(egui::PopupCloseBehavior::CloseOnClickOutside)
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.site_search)
                    .hint_text("Select a Launch Site here"),
            );
            let needle = state.site_search.to_lowercase();
            for option in options
                .iter()
                .filter(|o| o.label.to_lowercase().contains(&needle))
            {
                let is_selected = state.site.value() == option.value;
                if ui
                    .selectable_label(is_selected, option.label.as_str())
                    .clicked()
                {
                    chosen = Some(option.value.clone());
                    ui.memory_mut(|m| m.close_popup());
                }
            }
        });

    if let Some(value) = chosen {
        state.site_search.clear();
        state.on_site_changed(&value);
    }
}

// ---------------------------------------------------------------------------
// Payload range
// ---------------------------------------------------------------------------

/// Low/high sliders bounded by the dataset's payload extremes, with labelled
/// tick marks underneath. Changes fire
/// [`DashboardState::on_payload_range_changed`].
pub fn payload_range(ui: &mut Ui, state: &mut DashboardState, config: &DashboardConfig) {
    ui.label("Payload range (Kg):");
    let (min, max) = state.payload_bounds();
    let mut range: PayloadRange = state.payload_range;

    ui.add(
        egui::Slider::new(&mut range.low, min..=max)
            .text("low")
            .suffix(" kg")
            .fixed_decimals(0),
    );
    ui.add(
        egui::Slider::new(&mut range.high, min..=max)
            .text("high")
            .suffix(" kg")
            .fixed_decimals(0),
    );
    tick_marks(ui, min, max, &config.payload_marks);

    if range.is_inverted() {
        ui.label(RichText::new("Low end is above high end; nothing matches.").italics());
    }
    state.on_payload_range_changed(range);
}

/// Paint `marks` on a strip aligned with the slider rails above it.
fn tick_marks(ui: &mut Ui, min: f64, max: f64, marks: &[f64]) {
    let width = ui.spacing().slider_width;
    // Slider handles travel inside the rail by their radius.
    let inset = ui.spacing().interact_size.y / 2.5;
    let (rect, _) = ui.allocate_exact_size(vec2(width, 24.0), Sense::hover());
    if max <= min {
        return;
    }

    let painter = ui.painter();
    let stroke = ui.visuals().widgets.noninteractive.fg_stroke;
    for &mark in marks.iter().filter(|&&m| m >= min && m <= max) {
        let t = ((mark - min) / (max - min)) as f32;
        let x = egui::lerp(rect.left() + inset..=rect.right() - inset, t);
        painter.line_segment([pos2(x, rect.top()), pos2(x, rect.top() + 5.0)], stroke);
        painter.text(
            pos2(x, rect.top() + 7.0),
            Align2::CENTER_TOP,
            DashboardConfig::mark_label(mark),
            FontId::proportional(11.0),
            stroke.color,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use eframe::egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect};

    use super::*;
    use crate::data::model::SiteSelection;
    use crate::data::model::tests::two_site_dataset;

    fn run_frame(ctx: &egui::Context, state: &mut DashboardState, events: Vec<Event>) {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| site_dropdown(ui, state));
        });
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    /// Press and release on separate frames, then let the UI settle.
    fn click(ctx: &egui::Context, state: &mut DashboardState, pos: Pos2) {
        run_frame(ctx, state, vec![Event::PointerMoved(pos), button(pos, true)]);
        run_frame(ctx, state, vec![button(pos, false)]);
        run_frame(ctx, state, Vec::new());
    }

    #[test]
    fn clicking_search_box_keeps_dropdown_open() {
        let ctx = egui::Context::default();
        let mut state = DashboardState::new(Arc::new(two_site_dataset()));
        run_frame(&ctx, &mut state, Vec::new());

        click(&ctx, &mut state, pos2(40.0, 18.0));
        assert!(ctx.memory(|m| m.any_popup_open()), "dropdown should open");

        click(&ctx, &mut state, pos2(60.0, 34.0));
        assert!(ctx.memory(|m| m.any_popup_open()), "dropdown closed on search click");
        assert_eq!(state.site, SiteSelection::AllSites);
    }
}
