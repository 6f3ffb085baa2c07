//! Chart kinds, chart descriptions, and the filter-and-render pipeline.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::{ChartColors, ColorMap, Rgb};
use crate::data::filter::{filtered_orders, OrderFilter};
use crate::data::{Dataset, Order};

pub mod figure;

// ---------------------------------------------------------------------------
// ChartKind
// ---------------------------------------------------------------------------

/// The three chart kinds offered by the chart selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Pie,
    Scatter,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Pie, ChartKind::Scatter];

    /// Wire value used by the selector.
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Scatter => "scatter",
        }
    }

    /// Label shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart: Sales by Category",
            ChartKind::Pie => "Pie Chart: Sales by Region",
            ChartKind::Scatter => "Scatter Plot: Sales vs Profit",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Bar => "Sales by Category",
            ChartKind::Pie => "Sales by Region",
            ChartKind::Scatter => "Sales vs Profit",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chart kind '{0}' (expected bar, pie or scatter)")]
pub struct UnknownChartKind(pub String);

impl FromStr for ChartKind {
    type Err = UnknownChartKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownChartKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Chart description
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub category: String,
    pub sales: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub region: String,
    pub sales: f64,
    /// Fraction of the total sales in the view, in `[0, 1]`.
    pub share: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub sales: f64,
    pub profit: f64,
}

/// All points of one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterGroup {
    pub category: String,
    pub color: Rgb,
    pub points: Vec<ScatterPoint>,
}

/// The data series of a chart. Series appear in the order their key
/// first occurs in the filtered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "series", rename_all = "lowercase")]
pub enum ChartBody {
    Bar(Vec<Bar>),
    Pie(Vec<Slice>),
    Scatter(Vec<ScatterGroup>),
}

/// A renderable chart, independent of how it is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescription {
    pub title: String,
    /// Number of filtered orders the chart was built from.
    pub row_count: usize,
    #[serde(flatten)]
    pub body: ChartBody,
}

impl ChartDescription {
    pub fn kind(&self) -> ChartKind {
        match self.body {
            ChartBody::Bar(_) => ChartKind::Bar,
            ChartBody::Pie(_) => ChartKind::Pie,
            ChartBody::Scatter(_) => ChartKind::Scatter,
        }
    }

    pub fn series_len(&self) -> usize {
        match &self.body {
            ChartBody::Bar(bars) => bars.len(),
            ChartBody::Pie(slices) => slices.len(),
            ChartBody::Scatter(groups) => groups.len(),
        }
    }

    /// True when no order matched the filter.
    pub fn is_empty(&self) -> bool {
        self.series_len() == 0
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Filter the dataset by order year and ship mode, then build the chart of
/// the requested kind over the remaining orders.
///
/// An empty view yields a chart with zero series.
pub fn render(
    dataset: &Dataset,
    colors: &ChartColors,
    kind: ChartKind,
    year: i32,
    ship_modes: &BTreeSet<String>,
) -> ChartDescription {
    render_filtered(dataset, colors, kind, &OrderFilter::new(year, ship_modes))
}

/// Build the chart of the requested kind over the orders `filter` accepts.
pub fn render_filtered(
    dataset: &Dataset,
    colors: &ChartColors,
    kind: ChartKind,
    filter: &OrderFilter<'_>,
) -> ChartDescription {
    let view = filtered_orders(dataset, filter);

    let body = match kind {
        ChartKind::Bar => ChartBody::Bar(sales_by_category(&view, &colors.categories)),
        ChartKind::Pie => ChartBody::Pie(sales_by_region(&view, &colors.regions)),
        ChartKind::Scatter => ChartBody::Scatter(sales_vs_profit(&view, &colors.categories)),
    };

    ChartDescription {
        title: kind.title().to_string(),
        row_count: view.len(),
        body,
    }
}

fn sum_sales_by<'o>(view: &[&'o Order], key: impl Fn(&'o Order) -> &'o str) -> IndexMap<&'o str, f64> {
    let mut totals: IndexMap<&str, f64> = IndexMap::new();
    for &order in view {
        *totals.entry(key(order)).or_insert(0.0) += order.sales;
    }
    totals
}

fn sales_by_category(view: &[&Order], colors: &ColorMap) -> Vec<Bar> {
    sum_sales_by(view, |o| o.category.as_str())
        .into_iter()
        .map(|(category, sales)| Bar {
            category: category.to_string(),
            sales,
            color: colors.color_for(category),
        })
        .collect()
}

fn sales_by_region(view: &[&Order], colors: &ColorMap) -> Vec<Slice> {
    let totals = sum_sales_by(view, |o| o.region.as_str());
    let grand_total: f64 = totals.values().sum();

    totals
        .into_iter()
        .map(|(region, sales)| Slice {
            region: region.to_string(),
            sales,
            share: if grand_total == 0.0 { 0.0 } else { sales / grand_total },
            color: colors.color_for(region),
        })
        .collect()
}

fn sales_vs_profit(view: &[&Order], colors: &ColorMap) -> Vec<ScatterGroup> {
    let mut groups: IndexMap<&str, Vec<ScatterPoint>> = IndexMap::new();
    for order in view {
        groups
            .entry(order.category.as_str())
            .or_default()
            .push(ScatterPoint {
                sales: order.sales,
                profit: order.profit,
            });
    }

    groups
        .into_iter()
        .map(|(category, points)| ScatterGroup {
            category: category.to_string(),
            color: colors.color_for(category),
            points,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    use super::*;

    fn fixture() -> (Dataset, ChartColors) {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let orders = vec![
            Order::new("A", 10.0, 2.0, "East", "Standard", date(2021, 5, 1)),
            Order::new("B", 20.0, 5.0, "West", "First", date(2021, 6, 1)),
            Order::new("A", 5.0, 1.0, "East", "Standard", date(2022, 1, 1)),
        ];
        let ds = Dataset::from_orders(orders, vec![]).unwrap();
        let colors = ChartColors::for_dataset(&ds);
        (ds, colors)
    }

    fn modes(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn bars(chart: &ChartDescription) -> Vec<(&str, f64)> {
        match &chart.body {
            ChartBody::Bar(bars) => bars.iter().map(|b| (b.category.as_str(), b.sales)).collect(),
            other => panic!("expected bars, got {other:?}"),
        }
    }

    #[test]
    fn bar_sums_sales_per_category() {
        let (ds, colors) = fixture();
        let chart = render(&ds, &colors, ChartKind::Bar, 2021, &modes(&["Standard", "First"]));
        assert_eq!(chart.title, "Sales by Category");
        assert_eq!(bars(&chart), [("A", 10.0), ("B", 20.0)]);

        let chart = render(&ds, &colors, ChartKind::Bar, 2021, &modes(&["Standard"]));
        assert_eq!(bars(&chart), [("A", 10.0)]);
    }

    #[test]
    fn pie_sums_sales_per_region() {
        let (ds, colors) = fixture();
        let chart = render(&ds, &colors, ChartKind::Pie, 2021, &modes(&["Standard", "First"]));
        assert_eq!(chart.title, "Sales by Region");

        let ChartBody::Pie(slices) = &chart.body else {
            panic!("expected a pie chart");
        };
        let got: Vec<_> = slices.iter().map(|s| (s.region.as_str(), s.sales)).collect();
        assert_eq!(got, [("East", 10.0), ("West", 20.0)]);
        assert_relative_eq!(slices[0].share, 1.0 / 3.0);
        assert_relative_eq!(slices.iter().map(|s| s.share).sum::<f64>(), 1.0);
    }

    #[test]
    fn scatter_has_one_point_per_row() {
        let (ds, colors) = fixture();
        let chart = render(&ds, &colors, ChartKind::Scatter, 2022, &modes(&["Standard", "First"]));
        assert_eq!(chart.title, "Sales vs Profit");
        assert_eq!(chart.row_count, 1);

        let ChartBody::Scatter(groups) = &chart.body else {
            panic!("expected a scatter chart");
        };
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, "A");
        assert_eq!(groups[0].color, colors.categories.color_for("A"));
        assert_eq!(groups[0].points, [ScatterPoint { sales: 5.0, profit: 1.0 }]);
    }

    #[test]
    fn scatter_points_match_filtered_rows() {
        let (ds, colors) = fixture();
        let chart = render(&ds, &colors, ChartKind::Scatter, 2021, &modes(&["Standard", "First"]));
        let ChartBody::Scatter(groups) = &chart.body else {
            panic!("expected a scatter chart");
        };
        let points: usize = groups.iter().map(|g| g.points.len()).sum();
        assert_eq!(points, chart.row_count);
        assert_eq!(groups[1].points, [ScatterPoint { sales: 20.0, profit: 5.0 }]);
    }

    #[test]
    fn empty_view_has_no_series() {
        let (ds, colors) = fixture();
        for kind in ChartKind::ALL {
            let chart = render(&ds, &colors, kind, 2022, &modes(&["First"]));
            assert!(chart.is_empty());
            assert_eq!(chart.row_count, 0);
            assert_eq!(chart.kind(), kind);
            assert_eq!(chart.title, kind.title());
        }
    }

    #[test]
    fn year_bounds_render() {
        let (ds, colors) = fixture();
        let all = modes(&["Standard", "First"]);
        for year in [ds.min_year(), ds.max_year()] {
            for kind in ChartKind::ALL {
                let chart = render(&ds, &colors, kind, year, &all);
                assert!(!chart.is_empty());
            }
        }
        let none = BTreeSet::new();
        assert!(render(&ds, &colors, ChartKind::Pie, ds.max_year(), &none).is_empty());
    }

    #[test]
    fn rendering_is_idempotent() {
        let (ds, colors) = fixture();
        let all = modes(&["Standard", "First"]);
        for kind in ChartKind::ALL {
            assert_eq!(
                render(&ds, &colors, kind, 2021, &all),
                render(&ds, &colors, kind, 2021, &all)
            );
        }
    }

    #[test]
    fn zero_sales_pie_has_zero_shares() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let ds = Dataset::from_orders(
            vec![Order::new("A", 0.0, 0.0, "North", "Standard", date)],
            vec![],
        )
        .unwrap();
        let colors = ChartColors::for_dataset(&ds);
        let chart = render(&ds, &colors, ChartKind::Pie, 2020, &modes(&["Standard"]));
        let ChartBody::Pie(slices) = chart.body else {
            panic!("expected a pie chart");
        };
        assert_eq!(slices[0].share, 0.0);
    }

    #[test]
    fn parses_kind_names() {
        assert_eq!("scatter".parse::<ChartKind>(), Ok(ChartKind::Scatter));
        assert_eq!(
            "line".parse::<ChartKind>(),
            Err(UnknownChartKind("line".to_string()))
        );
        assert_eq!(ChartKind::default(), ChartKind::Bar);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let (ds, colors) = fixture();
        let chart = render(&ds, &colors, ChartKind::Bar, 2021, &modes(&["Standard"]));
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["kind"], "bar");
        assert_eq!(json["row_count"], 1);
        assert_eq!(json["series"][0]["category"], "A");
        assert_eq!(json["series"][0]["sales"], 10.0);
    }
}
