use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CellValue – a single cell of a loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed table cell mirroring common tabular dtypes.
/// All input formats decode into these before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl CellValue {
    /// Try to interpret the cell as an `f64`.  Numeric strings count.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Try to interpret the cell as a calendar year.  Floats must be
    /// integral; `1990.0` is a year, `1990.5` is not.
    pub fn as_year(&self) -> Option<i32> {
        let v = self.as_f64()?;
        if v.fract() != 0.0 || v < i32::MIN as f64 || v > i32::MAX as f64 {
            return None;
        }
        Some(v as i32)
    }
}

// ---------------------------------------------------------------------------
// RawTable – the common intermediate all input formats decode into
// ---------------------------------------------------------------------------

/// Ordered column names plus rows of cells.  Rows are positional; every
/// row has one cell per column.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

// ---------------------------------------------------------------------------
// ConsumptionSeries – normalized (year, value) pairs
// ---------------------------------------------------------------------------

/// Per-capita electricity consumption by year.  Unique year keys,
/// duplicate years collapsed by arithmetic mean, sorted ascending.
#[derive(Debug, Clone)]
pub struct ConsumptionSeries {
    points: Vec<(i32, f64)>,
}

impl ConsumptionSeries {
    /// Normalize a loaded table into the series.
    ///
    /// Column detection:
    /// * year – header equal to `year`, case-insensitive
    /// * value – first column whose name contains `electricity` or
    ///   `consumption`; otherwise the last column that is not the year
    ///
    /// Rows with a missing or non-numeric year or value are discarded.
    pub fn from_table(table: &RawTable) -> Result<Self> {
        let year_idx = table
            .columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case("year"))
            .context("input table has no 'year' column")?;

        let value_idx = table
            .columns
            .iter()
            .enumerate()
            .find(|(i, c)| {
                let name = c.to_ascii_lowercase();
                *i != year_idx && (name.contains("electricity") || name.contains("consumption"))
            })
            .map(|(i, _)| i)
            .or_else(|| (0..table.columns.len()).rev().find(|&i| i != year_idx))
            .context("input table has no candidate value column")?;

        let mut by_year: BTreeMap<i32, (f64, u32)> = BTreeMap::new();
        for row in &table.rows {
            let year = match row.get(year_idx).and_then(CellValue::as_year) {
                Some(y) => y,
                None => continue,
            };
            let value = match row.get(value_idx).and_then(CellValue::as_f64) {
                Some(v) => v,
                None => continue,
            };
            let entry = by_year.entry(year).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }

        if by_year.is_empty() {
            bail!("no usable (year, value) rows in input table");
        }

        Ok(ConsumptionSeries {
            points: by_year
                .into_iter()
                .map(|(year, (sum, n))| (year, sum / n as f64))
                .collect(),
        })
    }

    pub fn points(&self) -> &[(i32, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The entry with the greatest year not exceeding `year`, if any.
    pub fn value_at_or_before(&self, year: i32) -> Option<(i32, f64)> {
        let idx = self.points.partition_point(|&(y, _)| y <= year);
        (idx > 0).then(|| self.points[idx - 1])
    }
}

// ---------------------------------------------------------------------------
// VisualStatSeries – per-year mean saturation
// ---------------------------------------------------------------------------

/// Mean image saturation by year, one entry per non-empty image folder,
/// sorted ascending.  Saturation values lie in [0, 1].
#[derive(Debug, Clone)]
pub struct VisualStatSeries {
    points: Vec<(i32, f64)>,
}

impl VisualStatSeries {
    pub fn new(mut points: Vec<(i32, f64)>) -> Self {
        points.sort_by_key(|&(year, _)| year);
        VisualStatSeries { points }
    }

    pub fn points(&self) -> &[(i32, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ---------------------------------------------------------------------------
// CombinedRecord – one row of the merged output
// ---------------------------------------------------------------------------

/// One aligned row of the combined dataset, serialized as
/// `year,saturation,electricity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedRecord {
    pub year: i32,
    pub saturation: f64,
    pub electricity: f64,
}
