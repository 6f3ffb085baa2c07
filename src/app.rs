use std::sync::Arc;

use eframe::egui;

use crate::chart::ChartDescription;
use crate::dashboard::Dashboard;
use crate::layout::Layout;
use crate::state::ControlState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    dashboard: Arc<Dashboard>,
    layout: Layout,
    controls: ControlState,
    /// Chart for the current `controls`; rebuilt whenever a control changes.
    chart: ChartDescription,
}

impl DashboardApp {
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        let layout = Layout::for_dashboard(&dashboard);
        let controls = dashboard.initial_controls();
        let chart = dashboard.render(&controls);
        Self {
            dashboard,
            layout,
            controls,
            chart,
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.layout, self.dashboard.dataset().len(), &self.chart);
        });

        // ---- Left side panel: controls ----
        let changed = egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.layout, self.dashboard.dataset(), &mut self.controls)
            })
            .inner;

        if changed {
            self.chart = self.dashboard.render(&self.controls);
        }

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_plot(ui, &self.chart);
        });
    }
}
