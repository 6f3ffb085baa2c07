use std::collections::BTreeSet;

use super::model::{Dataset, Order};

// ---------------------------------------------------------------------------
// Filter predicate: order year and selected ship modes
// ---------------------------------------------------------------------------

/// Row predicate shared by every chart kind.
///
/// An order passes when its order year equals `year` and its ship mode is
/// one of `ship_modes`. An empty ship-mode selection matches nothing.
#[derive(Debug, Clone, Copy)]
pub struct OrderFilter<'a> {
    pub year: i32,
    pub ship_modes: &'a BTreeSet<String>,
}

impl<'a> OrderFilter<'a> {
    pub fn new(year: i32, ship_modes: &'a BTreeSet<String>) -> Self {
        Self { year, ship_modes }
    }

    pub fn matches(&self, order: &Order) -> bool {
        order.order_year() == self.year && self.ship_modes.contains(&order.ship_mode)
    }
}

/// Borrow the orders that pass the filter, in source order.
pub fn filtered_orders<'d>(dataset: &'d Dataset, filter: &OrderFilter<'_>) -> Vec<&'d Order> {
    dataset
        .orders()
        .iter()
        .filter(|order| filter.matches(order))
        .collect()
}
