//! Plotly figure export.
//!
//! The dashboard page draws charts with Plotly.js, which takes a figure of
//! the form `{ "data": [trace, ...], "layout": {...} }`.

use serde_json::{json, Value};

use super::{ChartBody, ChartDescription};

/// Convert a chart description into a Plotly figure. An empty chart has an
/// empty `data` array.
pub fn to_plotly(chart: &ChartDescription) -> Value {
    let (data, layout) = match &chart.body {
        ChartBody::Bar(bars) if bars.is_empty() => (Vec::new(), axes_layout("Category", "Sales")),
        ChartBody::Bar(bars) => {
            let trace = json!({
                "type": "bar",
                "name": "Sales",
                "x": bars.iter().map(|b| b.category.as_str()).collect::<Vec<_>>(),
                "y": bars.iter().map(|b| b.sales).collect::<Vec<_>>(),
                "marker": { "color": bars.iter().map(|b| b.color.hex()).collect::<Vec<_>>() },
            });
            (vec![trace], axes_layout("Category", "Sales"))
        }
        ChartBody::Pie(slices) if slices.is_empty() => (Vec::new(), json!({})),
        ChartBody::Pie(slices) => {
            let trace = json!({
                "type": "pie",
                "labels": slices.iter().map(|s| s.region.as_str()).collect::<Vec<_>>(),
                "values": slices.iter().map(|s| s.sales).collect::<Vec<_>>(),
                "marker": { "colors": slices.iter().map(|s| s.color.hex()).collect::<Vec<_>>() },
            });
            (vec![trace], json!({}))
        }
        ChartBody::Scatter(groups) => {
            let traces = groups
                .iter()
                .map(|g| {
                    json!({
                        "type": "scatter",
                        "mode": "markers",
                        "name": g.category,
                        "x": g.points.iter().map(|p| p.sales).collect::<Vec<_>>(),
                        "y": g.points.iter().map(|p| p.profit).collect::<Vec<_>>(),
                        "marker": { "color": g.color.hex() },
                    })
                })
                .collect();
            let mut layout = axes_layout("Sales", "Profit");
            layout["legend"] = json!({ "title": { "text": "Category" } });
            (traces, layout)
        }
    };

    let mut layout = layout;
    layout["title"] = json!({ "text": chart.title });
    json!({ "data": data, "layout": layout })
}

fn axes_layout(x: &str, y: &str) -> Value {
    json!({
        "xaxis": { "title": { "text": x } },
        "yaxis": { "title": { "text": y } },
    })
}
