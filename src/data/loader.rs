use std::fs::File;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Date32Type, Float64Type};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::model::{Dataset, Order};
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const CATEGORY: &str = "Category";
pub const SALES: &str = "Sales";
pub const PROFIT: &str = "Profit";
pub const REGION: &str = "Region";
pub const SHIP_MODE: &str = "Ship Mode";
pub const ORDER_DATE: &str = "Order Date";

/// Required columns and the alternative spellings accepted for each.
/// Exports of the Superstore data often use dots instead of spaces.
const REQUIRED_COLUMNS: [(&str, &[&str]); 6] = [
    (CATEGORY, &[]),
    (SALES, &[]),
    (PROFIT, &[]),
    (REGION, &[]),
    (SHIP_MODE, &["Ship.Mode"]),
    (ORDER_DATE, &["Order.Date"]),
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the sales table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.tsv` – header row, comma or tab delimited
/// * `.json`         – `[{ "Category": ..., "Sales": ..., ... }, ...]`
/// * `.parquet`      – one column per field; the date may be text or a date type
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_delimited(path, b',')?,
        "tsv" => load_delimited(path, b'\t')?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(LoadError::UnsupportedExtension(other.to_string())),
    };

    log::info!(
        "Loaded {} orders from {} (years {}..={}, ship modes {:?})",
        dataset.len(),
        path.display(),
        dataset.min_year(),
        dataset.max_year(),
        dataset.ship_modes()
    );
    Ok(dataset)
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Index of each required column in `names`, in `REQUIRED_COLUMNS` order.
fn resolve_columns(names: &[String]) -> Result<[usize; 6], LoadError> {
    let mut indices = [0; 6];
    for (slot, (canonical, aliases)) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = names
            .iter()
            .position(|n| n == canonical || aliases.contains(&n.as_str()))
            .ok_or_else(|| LoadError::MissingColumn(canonical.to_string()))?;
    }
    Ok(indices)
}

// ---------------------------------------------------------------------------
// Row-oriented formats (CSV, TSV, JSON)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawOrder {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Sales")]
    sales: f64,
    #[serde(rename = "Profit")]
    profit: f64,
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "Ship Mode", alias = "Ship.Mode")]
    ship_mode: String,
    #[serde(rename = "Order Date", alias = "Order.Date")]
    order_date: String,
}

impl RawOrder {
    fn into_order(self, row: usize) -> Result<Order, LoadError> {
        let order_date =
            parse_order_date(&self.order_date).ok_or_else(|| LoadError::InvalidDate {
                row,
                value: self.order_date.clone(),
            })?;
        Ok(Order {
            category: self.category,
            sales: self.sales,
            profit: self.profit,
            region: self.region,
            ship_mode: self.ship_mode,
            order_date,
        })
    }
}

fn load_delimited(path: &Path, delimiter: u8) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(open(path)?);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    log::info!("Detected columns: {headers:?}");
    resolve_columns(&headers)?;

    let mut orders = Vec::new();
    for (index, result) in reader.deserialize::<RawOrder>().enumerate() {
        orders.push(result?.into_order(index + 1)?);
    }

    Dataset::from_orders(orders, headers)
}

/// Records-oriented JSON, as written by `df.to_json(orient='records')`.
fn load_json(path: &Path) -> Result<Dataset, LoadError> {
    let records: Vec<JsonValue> = serde_json::from_reader(std::io::BufReader::new(open(path)?))?;

    let columns: Vec<String> = records
        .first()
        .and_then(JsonValue::as_object)
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default();
    log::info!("Detected columns: {columns:?}");

    let orders = records
        .into_iter()
        .enumerate()
        .map(|(index, rec)| serde_json::from_value::<RawOrder>(rec)?.into_order(index + 1))
        .collect::<Result<Vec<_>, LoadError>>()?;

    Dataset::from_orders(orders, columns)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Numeric columns may be any integer or float type, text columns any
/// string type. The order date may be text (parsed like CSV dates) or an
/// Arrow date/timestamp.
fn load_parquet(path: &Path) -> Result<Dataset, LoadError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?)?;
    let headers: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    log::info!("Detected columns: {headers:?}");

    let [category_idx, sales_idx, profit_idx, region_idx, ship_idx, date_idx] =
        resolve_columns(&headers)?;
    let reader = builder.build()?;

    let mut orders = Vec::new();
    for batch_result in reader {
        let batch = batch_result?;
        let offset = orders.len();

        let categories = text_values(batch.column(category_idx), offset, CATEGORY)?;
        let sales = number_values(batch.column(sales_idx), offset, SALES)?;
        let profits = number_values(batch.column(profit_idx), offset, PROFIT)?;
        let regions = text_values(batch.column(region_idx), offset, REGION)?;
        let ship_modes = text_values(batch.column(ship_idx), offset, SHIP_MODE)?;
        let dates = date_values(batch.column(date_idx), offset)?;

        for (row, order_date) in dates.into_iter().enumerate() {
            orders.push(Order {
                category: categories[row].clone(),
                sales: sales[row],
                profit: profits[row],
                region: regions[row].clone(),
                ship_mode: ship_modes[row].clone(),
                order_date,
            });
        }
    }

    Dataset::from_orders(orders, headers)
}

// -- Arrow helpers --
//
// `offset` is the number of rows in earlier batches; reported rows are 1-based.

fn null_error(offset: usize, index: usize, column: &str) -> LoadError {
    LoadError::NullValue {
        row: offset + index + 1,
        column: column.to_string(),
    }
}

fn text_values(col: &ArrayRef, offset: usize, column: &str) -> Result<Vec<String>, LoadError> {
    let utf8 = cast(col, &DataType::Utf8)?;
    let strings = utf8.as_string::<i32>();
    (0..strings.len())
        .map(|row| {
            if strings.is_null(row) {
                return Err(null_error(offset, row, column));
            }
            Ok(strings.value(row).to_string())
        })
        .collect()
}

fn number_values(col: &ArrayRef, offset: usize, column: &str) -> Result<Vec<f64>, LoadError> {
    let floats = cast(col, &DataType::Float64)?;
    let floats = floats.as_primitive::<Float64Type>();
    (0..floats.len())
        .map(|row| {
            if floats.is_null(row) {
                return Err(null_error(offset, row, column));
            }
            Ok(floats.value(row))
        })
        .collect()
}

fn date_values(col: &ArrayRef, offset: usize) -> Result<Vec<NaiveDate>, LoadError> {
    match col.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => {
            let texts = text_values(col, offset, ORDER_DATE)?;
            texts
                .into_iter()
                .enumerate()
                .map(|(index, text)| {
                    parse_order_date(&text).ok_or(LoadError::InvalidDate {
                        row: offset + index + 1,
                        value: text,
                    })
                })
                .collect()
        }
        _ => {
            let days = cast(col, &DataType::Date32)?;
            let days = days.as_primitive::<Date32Type>();
            (0..days.len())
                .map(|row| {
                    if days.is_null(row) {
                        return Err(null_error(offset, row, ORDER_DATE));
                    }
                    days.value_as_date(row).ok_or_else(|| LoadError::InvalidDate {
                        row: offset + row + 1,
                        value: days.value(row).to_string(),
                    })
                })
                .collect()
        }
    }
}

// ---------------------------------------------------------------------------
// Date parsing
// ---------------------------------------------------------------------------

/// Date-only layouts, tried in order. Month-first wins over day-first when
/// both would parse. `%y` takes exactly two digits, so four-digit years
/// fall through to the `%Y` layouts.
const DATE_FORMATS: &[&str] = &[
    "%m/%d/%y",
    "%m-%d-%y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M"];

/// Years below this come from a layout that misread a short field as the year.
const MIN_YEAR: i32 = 1000;

/// Parse an order date in any of the layouts seen in Superstore exports.
pub fn parse_order_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let plausible = |date: &NaiveDate| date.year() >= MIN_YEAR;
    DATE_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .find(plausible)
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .filter_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
                .find(plausible)
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.date_naive())
                .filter(plausible)
        })
}
