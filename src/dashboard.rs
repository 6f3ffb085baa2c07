use std::collections::BTreeSet;
use std::path::Path;

use crate::chart::{self, ChartDescription, ChartKind};
use crate::color::ChartColors;
use crate::data::{self, Dataset, OrderFilter};
use crate::error::LoadError;
use crate::state::ControlState;

/// Everything the dashboard derives from the sales file at startup.
///
/// Built once, then shared read-only by every view (browser sessions and
/// the native viewer). Rendering never mutates it.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    colors: ChartColors,
}

impl Dashboard {
    pub fn new(dataset: Dataset) -> Self {
        let colors = ChartColors::for_dataset(&dataset);
        Self { dataset, colors }
    }

    /// Load the sales file and build the dashboard.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        data::load_file(path).map(Self::new)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn colors(&self) -> &ChartColors {
        &self.colors
    }

    /// Control values shown before the user touches anything.
    pub fn initial_controls(&self) -> ControlState {
        ControlState::initial(&self.dataset)
    }

    /// Build the chart for the given control values.
    pub fn render(&self, controls: &ControlState) -> ChartDescription {
        self.render_filtered(controls.kind, &controls.filter())
    }

    pub fn render_with(
        &self,
        kind: ChartKind,
        year: i32,
        ship_modes: &BTreeSet<String>,
    ) -> ChartDescription {
        self.render_filtered(kind, &OrderFilter::new(year, ship_modes))
    }

    fn render_filtered(&self, kind: ChartKind, filter: &OrderFilter<'_>) -> ChartDescription {
        let chart = chart::render_filtered(&self.dataset, &self.colors, kind, filter);
        log::debug!(
            "Rendered {kind} chart for {} ({} of {} orders, {} series)",
            filter.year,
            chart.row_count,
            self.dataset.len(),
            chart.series_len()
        );
        chart
    }
}
