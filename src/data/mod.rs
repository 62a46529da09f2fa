/// Data layer: core types, loading, and merging.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawTable
///   └──────────┘
///        │
///        ▼
///   ConsumptionSeries          VisualStatSeries (from vision::scan)
///        │                            │
///        └──────────┬─────────────────┘
///                   ▼
///             ┌──────────┐
///             │  merge    │  nearest-preceding year join
///             └──────────┘
///                   │
///                   ▼
///           Vec<CombinedRecord>
/// ```

pub mod loader;
pub mod merge;
pub mod model;
