use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Date32Array, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::{Duration, NaiveDate};
use parquet::arrow::ArrowWriter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

const YEARS: std::ops::RangeInclusive<i32> = 2014..=2017;
const ORDERS_PER_YEAR: usize = 1200;

/// (ship mode, relative frequency)
const SHIP_MODES: [(&str, u32); 4] = [
    ("Standard Class", 60),
    ("Second Class", 19),
    ("First Class", 16),
    ("Same Day", 5),
];
const REGIONS: [&str; 4] = ["West", "East", "Central", "South"];
/// (category, typical sales, mean margin)
const CATEGORIES: [(&str, f64, f64); 3] = [
    ("Furniture", 350.0, 0.03),
    ("Office Supplies", 120.0, 0.17),
    ("Technology", 450.0, 0.17),
];

#[derive(Debug, Serialize)]
struct SampleOrder {
    #[serde(rename = "Row ID")]
    row_id: i64,
    #[serde(rename = "Order Date")]
    order_date: String,
    #[serde(rename = "Ship Mode")]
    ship_mode: &'static str,
    #[serde(rename = "Region")]
    region: &'static str,
    #[serde(rename = "Category")]
    category: &'static str,
    #[serde(rename = "Sales")]
    sales: f64,
    #[serde(rename = "Profit")]
    profit: f64,
    #[serde(skip)]
    date: NaiveDate,
}

fn pick_ship_mode(rng: &mut StdRng) -> &'static str {
    let total: u32 = SHIP_MODES.iter().map(|(_, w)| w).sum();
    let mut roll = rng.gen_range(0..total);
    for (mode, weight) in SHIP_MODES {
        if roll < weight {
            return mode;
        }
        roll -= weight;
    }
    SHIP_MODES[0].0
}

fn generate_orders(rng: &mut StdRng) -> Result<Vec<SampleOrder>> {
    let mut orders = Vec::new();
    for year in YEARS {
        let jan_first = NaiveDate::from_ymd_opt(year, 1, 1).context("invalid year")?;
        for _ in 0..ORDERS_PER_YEAR {
            let date = jan_first + Duration::days(rng.gen_range(0..365));
            let (category, typical, margin) = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
            // Log-uniform spread around the typical ticket size.
            let sales = (typical * rng.gen_range(-2.5f64..1.8).exp() * 100.0).round() / 100.0;
            let profit = (sales * (margin + rng.gen_range(-0.35..0.35)) * 100.0).round() / 100.0;

            orders.push(SampleOrder {
                row_id: orders.len() as i64 + 1,
                order_date: date.format("%m/%d/%Y").to_string(),
                ship_mode: pick_ship_mode(rng),
                region: REGIONS[rng.gen_range(0..REGIONS.len())],
                category,
                sales,
                profit,
                date,
            });
        }
    }
    orders.sort_by_key(|o| o.date);
    for (i, order) in orders.iter_mut().enumerate() {
        order.row_id = i as i64 + 1;
    }
    Ok(orders)
}

fn write_csv(path: &Path, orders: &[SampleOrder]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for order in orders {
        writer.serialize(order)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(path: &Path, orders: &[SampleOrder]) -> Result<()> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).context("invalid epoch")?;

    let schema = Arc::new(Schema::new(vec![
        Field::new("Row ID", DataType::Int64, false),
        Field::new("Order Date", DataType::Date32, false),
        Field::new("Ship Mode", DataType::Utf8, false),
        Field::new("Region", DataType::Utf8, false),
        Field::new("Category", DataType::Utf8, false),
        Field::new("Sales", DataType::Float64, false),
        Field::new("Profit", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(orders.iter().map(|o| o.row_id))),
            Arc::new(Date32Array::from_iter_values(
                orders.iter().map(|o| (o.date - epoch).num_days() as i32),
            )),
            Arc::new(StringArray::from_iter_values(orders.iter().map(|o| o.ship_mode))),
            Arc::new(StringArray::from_iter_values(orders.iter().map(|o| o.region))),
            Arc::new(StringArray::from_iter_values(orders.iter().map(|o| o.category))),
            Arc::new(Float64Array::from_iter_values(orders.iter().map(|o| o.sales))),
            Arc::new(Float64Array::from_iter_values(orders.iter().map(|o| o.profit))),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating Parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<()> {
    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("superstore.csv"));

    let mut rng = StdRng::seed_from_u64(42);
    let orders = generate_orders(&mut rng)?;

    let is_parquet = output_path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("parquet"));
    if is_parquet {
        write_parquet(&output_path, &orders)?;
    } else {
        write_csv(&output_path, &orders)?;
    }

    println!(
        "Wrote {} orders ({}..={}) to {}",
        orders.len(),
        YEARS.start(),
        YEARS.end(),
        output_path.display()
    );
    Ok(())
}
