use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::chart::ChartKind;
use crate::data::filter::OrderFilter;
use crate::data::Dataset;

// ---------------------------------------------------------------------------
// Control state
// ---------------------------------------------------------------------------

/// Current values of the three dashboard controls.
///
/// Owned by the view (a browser page or the native window) and handed to
/// the render pipeline by value on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    /// Chart selector.
    pub kind: ChartKind,
    /// Order year slider.
    pub year: i32,
    /// Ship modes ticked in the checklist.
    pub ship_modes: BTreeSet<String>,
}

impl ControlState {
    /// Bar chart, earliest order year, every ship mode ticked.
    pub fn initial(dataset: &Dataset) -> Self {
        Self {
            kind: ChartKind::default(),
            year: dataset.min_year(),
            ship_modes: dataset.ship_modes().iter().cloned().collect(),
        }
    }

    /// Tick or untick a single ship mode.
    pub fn set_ship_mode(&mut self, mode: &str, selected: bool) {
        if selected {
            self.ship_modes.insert(mode.to_string());
        } else {
            self.ship_modes.remove(mode);
        }
    }

    /// Tick every ship mode present in the data.
    pub fn select_all(&mut self, dataset: &Dataset) {
        self.ship_modes = dataset.ship_modes().iter().cloned().collect();
    }

    /// Untick every ship mode.
    pub fn select_none(&mut self) {
        self.ship_modes.clear();
    }

    /// The row predicate these controls select.
    pub fn filter(&self) -> OrderFilter<'_> {
        OrderFilter::new(self.year, &self.ship_modes)
    }
}
