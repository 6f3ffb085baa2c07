use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::chart::ChartDescription;
use crate::data::Dataset;
use crate::layout::Layout;
use crate::state::ControlState;

// ---------------------------------------------------------------------------
// Left side panel – control widgets
// ---------------------------------------------------------------------------

/// Render the chart selector, year slider and ship-mode checklist.
/// Returns true when any control changed this frame.
pub fn side_panel(ui: &mut Ui, layout: &Layout, dataset: &Dataset, controls: &mut ControlState) -> bool {
    let mut changed = false;

    ui.heading("Controls");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Chart selector ----
            let selector = &layout.chart_selector;
            ui.strong(selector.label);
            egui::ComboBox::from_id_salt("chart_kind")
                .selected_text(controls.kind.label())
                .width(ui.available_width())
                .show_ui(ui, |ui: &mut Ui| {
                    for option in &selector.options {
                        changed |= ui
                            .selectable_value(&mut controls.kind, option.value, option.label)
                            .changed();
                    }
                });
            ui.separator();

            // ---- Year slider ----
            let slider = &layout.year_slider;
            ui.strong(slider.label);
            changed |= ui
                .add(egui::Slider::new(&mut controls.year, slider.min..=slider.max).step_by(f64::from(slider.step)))
                .changed();
            ui.separator();

            // ---- Ship-mode checklist ----
            let checklist = &layout.ship_mode_selector;
            let header_text = format!(
                "{}  ({}/{})",
                checklist.label,
                controls.ship_modes.len(),
                checklist.options.len()
            );
            ui.label(RichText::new(header_text).strong());

            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    controls.select_all(dataset);
                    changed = true;
                }
                if ui.small_button("None").clicked() {
                    controls.select_none();
                    changed = true;
                }
            });

            for mode in &checklist.options {
                let mut checked = controls.ship_modes.contains(mode);
                if ui.checkbox(&mut checked, mode.as_str()).changed() {
                    controls.set_ship_mode(mode, checked);
                    changed = true;
                }
            }
        });

    changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the dashboard title and a row-count summary.
pub fn top_bar(ui: &mut Ui, layout: &Layout, total_orders: usize, chart: &ChartDescription) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(layout.title);
        ui.separator();
        ui.label(format!(
            "{total_orders} orders loaded, {} in view",
            chart.row_count
        ));
    });
}
