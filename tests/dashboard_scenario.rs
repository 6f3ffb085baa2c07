use std::collections::BTreeSet;
use std::path::Path;

use superstore_dashboard::chart::ScatterPoint;
use superstore_dashboard::{ChartBody, ChartKind, ControlState, Dashboard};

fn fixture() -> Dashboard {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/three_orders.csv");
    Dashboard::load(&path).expect("fixture loads")
}

fn modes(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn totals(body: &ChartBody) -> Vec<(String, f64)> {
    match body {
        ChartBody::Bar(bars) => bars.iter().map(|b| (b.category.clone(), b.sales)).collect(),
        ChartBody::Pie(slices) => slices.iter().map(|s| (s.region.clone(), s.sales)).collect(),
        ChartBody::Scatter(_) => panic!("scatter charts have no totals"),
    }
}

#[test]
fn derives_controls_from_fixture() {
    let dashboard = fixture();
    let dataset = dashboard.dataset();
    assert_eq!((dataset.min_year(), dataset.max_year()), (2021, 2022));
    assert_eq!(
        dataset.ship_modes().iter().collect::<Vec<_>>(),
        ["Standard", "First"]
    );

    let initial = dashboard.initial_controls();
    assert_eq!(initial.kind, ChartKind::Bar);
    assert_eq!(initial.year, 2021);
    assert_eq!(initial.ship_modes, modes(&["Standard", "First"]));
}

#[test]
fn end_to_end_scenario() {
    let dashboard = fixture();

    let chart = dashboard.render_with(ChartKind::Bar, 2021, &modes(&["Standard", "First"]));
    assert_eq!(
        totals(&chart.body),
        [("A".to_string(), 10.0), ("B".to_string(), 20.0)]
    );

    let chart = dashboard.render_with(ChartKind::Bar, 2021, &modes(&["Standard"]));
    assert_eq!(totals(&chart.body), [("A".to_string(), 10.0)]);

    let chart = dashboard.render_with(ChartKind::Pie, 2021, &modes(&["Standard", "First"]));
    assert_eq!(
        totals(&chart.body),
        [("East".to_string(), 10.0), ("West".to_string(), 20.0)]
    );

    let chart = dashboard.render_with(ChartKind::Scatter, 2022, &modes(&["Standard", "First"]));
    let ChartBody::Scatter(groups) = &chart.body else {
        panic!("expected a scatter chart");
    };
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].category, "A");
    assert_eq!(groups[0].color, dashboard.colors().categories.color_for("A"));
    assert_eq!(groups[0].points, [ScatterPoint { sales: 5.0, profit: 1.0 }]);
}

#[test]
fn control_changes_only_affect_their_own_input() {
    let dashboard = fixture();
    let mut controls = dashboard.initial_controls();

    let bar = dashboard.render(&controls);
    controls.kind = ChartKind::Scatter;
    let scatter = dashboard.render(&controls);
    // Same predicate, different aggregation.
    assert_eq!(bar.row_count, scatter.row_count);

    controls.set_ship_mode("First", false);
    assert_eq!(dashboard.render(&controls).row_count, 1);

    controls = ControlState {
        year: 2022,
        ..controls
    };
    assert_eq!(dashboard.render(&controls).row_count, 1);
}

#[test]
fn empty_selection_renders_empty_chart() {
    let dashboard = fixture();
    for kind in ChartKind::ALL {
        let chart = dashboard.render_with(kind, 2022, &modes(&["First"]));
        assert!(chart.is_empty());
        assert_eq!(chart.title, kind.title());
    }
}

#[test]
fn control_state_predicate_drives_rendering() {
    let dashboard = fixture();
    let mut controls = dashboard.initial_controls();
    controls.kind = ChartKind::Pie;
    controls.set_ship_mode("Standard", false);

    let filtered = superstore_dashboard::data::filter::filtered_orders(
        dashboard.dataset(),
        &controls.filter(),
    );
    let chart = dashboard.render(&controls);
    assert_eq!(chart.row_count, filtered.len());
    assert_eq!(
        chart,
        dashboard.render_with(ChartKind::Pie, controls.year, &controls.ship_modes)
    );
}
