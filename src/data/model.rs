use chrono::{Datelike, NaiveDate};
use indexmap::IndexSet;

use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Order – one row of the sales table
// ---------------------------------------------------------------------------

/// A single order line (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub category: String,
    pub sales: f64,
    pub profit: f64,
    pub region: String,
    pub ship_mode: String,
    pub order_date: NaiveDate,
}

impl Order {
    pub fn new(
        category: impl Into<String>,
        sales: f64,
        profit: f64,
        region: impl Into<String>,
        ship_mode: impl Into<String>,
        order_date: NaiveDate,
    ) -> Self {
        Self {
            category: category.into(),
            sales,
            profit,
            region: region.into(),
            ship_mode: ship_mode.into(),
            order_date,
        }
    }

    /// Calendar year of the order date.
    pub fn order_year(&self) -> i32 {
        self.order_date.year()
    }
}

// ---------------------------------------------------------------------------
// YearRange – slider bounds derived from the full table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    /// Every year from `min` to `max`, inclusive.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.min..=self.max
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with pre-computed control ranges.
///
/// Built once at startup and never mutated afterwards, so it can be shared
/// between request handlers without locking.
#[derive(Debug, Clone)]
pub struct Dataset {
    orders: Vec<Order>,
    column_names: Vec<String>,
    year_range: YearRange,
    ship_modes: IndexSet<String>,
    categories: IndexSet<String>,
    regions: IndexSet<String>,
}

impl Dataset {
    /// Build the derived indices from the loaded orders.
    ///
    /// Distinct values keep the order in which they first appear in the
    /// source. An empty table has no year range and is rejected.
    pub fn from_orders(orders: Vec<Order>, column_names: Vec<String>) -> Result<Self, LoadError> {
        let mut years = orders.iter().map(Order::order_year);
        let first = years.next().ok_or(LoadError::Empty)?;
        let (min, max) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));

        let mut ship_modes = IndexSet::new();
        let mut categories = IndexSet::new();
        let mut regions = IndexSet::new();
        for order in &orders {
            if !ship_modes.contains(&order.ship_mode) {
                ship_modes.insert(order.ship_mode.clone());
            }
            if !categories.contains(&order.category) {
                categories.insert(order.category.clone());
            }
            if !regions.contains(&order.region) {
                regions.insert(order.region.clone());
            }
        }

        Ok(Dataset {
            orders,
            column_names,
            year_range: YearRange { min, max },
            ship_modes,
            categories,
            regions,
        })
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Column names detected in the source file, in file order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn year_range(&self) -> YearRange {
        self.year_range
    }

    pub fn min_year(&self) -> i32 {
        self.year_range.min
    }

    pub fn max_year(&self) -> i32 {
        self.year_range.max
    }

    /// Distinct ship modes in source order.
    pub fn ship_modes(&self) -> &IndexSet<String> {
        &self.ship_modes
    }

    pub fn categories(&self) -> &IndexSet<String> {
        &self.categories
    }

    pub fn regions(&self) -> &IndexSet<String> {
        &self.regions
    }

    /// Number of orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Always false for a successfully built dataset.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn derives_ranges_from_all_rows() {
        let orders = vec![
            Order::new("Technology", 1.0, 0.5, "West", "Second Class", date(2015, 3, 1)),
            Order::new("Furniture", 2.0, 0.1, "East", "Standard Class", date(2012, 7, 9)),
            Order::new("Technology", 3.0, -1.0, "West", "Second Class", date(2014, 1, 1)),
            Order::new("Office Supplies", 4.0, 2.0, "South", "First Class", date(2013, 12, 31)),
        ];
        let ds = Dataset::from_orders(orders, vec![]).unwrap();

        assert_eq!(ds.year_range(), YearRange { min: 2012, max: 2015 });
        assert_eq!(
            ds.ship_modes().iter().collect::<Vec<_>>(),
            ["Second Class", "Standard Class", "First Class"]
        );
        assert_eq!(
            ds.categories().iter().collect::<Vec<_>>(),
            ["Technology", "Furniture", "Office Supplies"]
        );
        assert_eq!(ds.regions().iter().collect::<Vec<_>>(), ["West", "East", "South"]);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn empty_table_is_rejected() {
        let err = Dataset::from_orders(Vec::new(), vec!["Sales".into()]).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn year_range_lists_every_year() {
        let range = YearRange { min: 2019, max: 2022 };
        assert_eq!(range.years().collect::<Vec<_>>(), [2019, 2020, 2021, 2022]);
    }
}
