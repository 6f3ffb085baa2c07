//! Superstore sales dashboard.
//!
//! Loads a sales table once, then renders bar, pie and scatter charts over
//! the orders selected by a year slider and a ship-mode checklist. The
//! default binary serves the dashboard over HTTP; `superstore-desktop`
//! shows the same controls and charts in a native window.

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod layout;
pub mod state;
pub mod ui;
pub mod web;

pub use chart::{ChartBody, ChartDescription, ChartKind};
pub use dashboard::Dashboard;
pub use error::{ConfigError, LoadError};
pub use state::ControlState;
