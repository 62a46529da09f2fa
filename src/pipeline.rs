use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::info;

use crate::data::loader::load_table;
use crate::data::merge::merge_nearest_preceding;
use crate::data::model::ConsumptionSeries;
use crate::report::{chart, table};
use crate::vision::scan::aggregate_folders;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// File layout for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Tabular consumption series (`.csv` / `.json` / `.parquet`).
    pub electricity_path: PathBuf,
    /// Root directory of per-year image folders.
    pub colors_dir: PathBuf,
    /// Combined CSV output.
    pub combined_path: PathBuf,
    /// Rendered chart output.
    pub chart_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            electricity_path: PathBuf::from("data/electricity.csv"),
            colors_dir: PathBuf::from("data/colors"),
            combined_path: PathBuf::from("data/color_electricity_combined.csv"),
            chart_path: PathBuf::from("outputs/color_electricity.png"),
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level procedure
// ---------------------------------------------------------------------------

/// Run the whole pipeline: load, aggregate, merge, report.
pub fn run(config: &PipelineConfig) -> Result<()> {
    let raw = load_table(&config.electricity_path)
        .with_context(|| format!("loading {}", config.electricity_path.display()))?;
    let consumption = ConsumptionSeries::from_table(&raw)?;
    info!(
        "loaded {} consumption years from {}",
        consumption.len(),
        config.electricity_path.display()
    );

    let visual = aggregate_folders(&config.colors_dir)?;
    info!(
        "aggregated {} year folders under {}",
        visual.len(),
        config.colors_dir.display()
    );

    let combined = merge_nearest_preceding(&visual, &consumption);
    if combined.is_empty() {
        bail!("no visual year has a preceding consumption year; nothing to report");
    }
    info!("merged {} rows", combined.len());

    ensure_parent(&config.combined_path)?;
    table::write_combined(&config.combined_path, &combined)?;
    info!("wrote combined table to {}", config.combined_path.display());

    ensure_parent(&config.chart_path)?;
    chart::render_combined_chart(&combined, &config.chart_path)
        .with_context(|| format!("rendering chart to {}", config.chart_path.display()))?;
    info!("rendered chart to {}", config.chart_path.display());

    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
