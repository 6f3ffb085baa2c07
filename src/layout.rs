use serde::Serialize;

use crate::chart::ChartKind;
use crate::dashboard::Dashboard;

pub const DASHBOARD_TITLE: &str = "Superstore Sales Dashboard";

// ---------------------------------------------------------------------------
// Static control layout
// ---------------------------------------------------------------------------

/// Declaration of the dashboard's controls, derived once from the data.
///
/// The browser page builds its widgets from this; the native viewer reads
/// the same labels and ranges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: &'static str,
    pub chart_selector: Dropdown,
    pub year_slider: Slider,
    pub ship_mode_selector: Checklist,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: &'static str,
    pub value: ChartKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub label: &'static str,
    pub options: Vec<DropdownOption>,
    pub value: ChartKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slider {
    pub label: &'static str,
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub value: i32,
    pub marks: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Checklist {
    pub label: &'static str,
    pub options: Vec<String>,
    pub value: Vec<String>,
}

impl Layout {
    pub fn for_dashboard(dashboard: &Dashboard) -> Self {
        let dataset = dashboard.dataset();
        let years = dataset.year_range();
        let initial = dashboard.initial_controls();
        let ship_modes: Vec<String> = dataset.ship_modes().iter().cloned().collect();

        Layout {
            title: DASHBOARD_TITLE,
            chart_selector: Dropdown {
                label: "Chart:",
                options: ChartKind::ALL
                    .into_iter()
                    .map(|kind| DropdownOption {
                        label: kind.label(),
                        value: kind,
                    })
                    .collect(),
                value: initial.kind,
            },
            year_slider: Slider {
                label: "Select Order Year:",
                min: years.min,
                max: years.max,
                step: 1,
                value: initial.year,
                marks: years.years().collect(),
            },
            ship_mode_selector: Checklist {
                label: "Ship Mode:",
                // Source order for display; the control state itself is a set.
                value: ship_modes
                    .iter()
                    .filter(|m| initial.ship_modes.contains(*m))
                    .cloned()
                    .collect(),
                options: ship_modes,
            },
        }
    }
}
