use std::path::Path;

use anyhow::{Context, Result};

use crate::data::model::CombinedRecord;

/// Write the combined records as a `year,saturation,electricity` CSV.
pub fn write_combined(path: &Path, records: &[CombinedRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for record in records {
        writer.serialize(record).context("writing combined row")?;
    }
    writer.flush().context("flushing combined CSV")?;
    Ok(())
}

/// Read back a combined CSV written by [`write_combined`].
pub fn read_combined(path: &Path) -> Result<Vec<CombinedRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize().enumerate() {
        let record: CombinedRecord =
            result.with_context(|| format!("combined CSV row {row_no}"))?;
        records.push(record);
    }
    Ok(records)
}
