use std::f64::consts::TAU;

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points, Polygon};

use crate::chart::{Bar as SalesBar, ChartBody, ChartDescription, ScatterGroup, Slice};

/// Arc resolution of a full pie; partial slices get a proportional share.
const PIE_SEGMENTS: f64 = 180.0;

// ---------------------------------------------------------------------------
// Chart plot (central panel)
// ---------------------------------------------------------------------------

/// Draw the current chart description in the central panel.
pub fn chart_plot(ui: &mut Ui, chart: &ChartDescription) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(chart.title.as_str());
    });

    if chart.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No orders match the current selection.");
        });
        return;
    }

    match &chart.body {
        ChartBody::Bar(bars) => bar_plot(ui, bars),
        ChartBody::Pie(slices) => pie_plot(ui, slices),
        ChartBody::Scatter(groups) => scatter_plot(ui, groups),
    }
}

/// One single-bar chart per category so the legend names each colour.
fn bar_plot(ui: &mut Ui, bars: &[SalesBar]) {
    Plot::new("sales_by_category")
        .legend(Legend::default())
        .x_axis_label("Category")
        .y_axis_label("Sales")
        .show(ui, |plot_ui| {
            for (i, bar) in bars.iter().enumerate() {
                let chart = BarChart::new(vec![Bar::new(i as f64, bar.sales).width(0.7)])
                    .name(&bar.category)
                    .color(bar.color);
                plot_ui.bar_chart(chart);
            }
        });
}

fn pie_plot(ui: &mut Ui, slices: &[Slice]) {
    Plot::new("sales_by_region")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            let mut start = TAU / 4.0;
            for slice in slices {
                let sweep = slice.share * TAU;
                let points: PlotPoints = wedge(start, sweep).into_iter().collect();
                let name = format!("{} ({:.1}%)", slice.region, slice.share * 100.0);
                plot_ui.polygon(
                    Polygon::new(points)
                        .name(name)
                        .fill_color(Color32::from(slice.color))
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );
                start -= sweep;
            }
        });
}

/// Outline of a unit-circle slice, clockwise from `start` over `sweep` radians.
fn wedge(start: f64, sweep: f64) -> Vec<[f64; 2]> {
    let steps = (sweep / TAU * PIE_SEGMENTS).ceil().max(1.0) as usize;
    let mut outline = Vec::with_capacity(steps + 2);
    outline.push([0.0, 0.0]);
    outline.extend((0..=steps).map(|i| {
        let angle = start - sweep * i as f64 / steps as f64;
        [angle.cos(), angle.sin()]
    }));
    outline
}

fn scatter_plot(ui: &mut Ui, groups: &[ScatterGroup]) {
    Plot::new("sales_vs_profit")
        .legend(Legend::default())
        .x_axis_label("Sales")
        .y_axis_label("Profit")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for group in groups {
                let points: PlotPoints = group.points.iter().map(|p| [p.sales, p.profit]).collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&group.category)
                        .color(group.color)
                        .radius(3.0),
                );
            }
        });
}
