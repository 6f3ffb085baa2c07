/// Data layer: order records, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  Vec<Order>, year range, distinct ship modes
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  order year + ship mode → filtered view
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;

pub use filter::OrderFilter;
pub use loader::load_file;
pub use model::{Dataset, Order, YearRange};
