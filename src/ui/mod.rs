//! egui widgets for the native viewer.

pub mod panels;
pub mod plot;
