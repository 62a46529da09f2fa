//! Dual-axis chart rendering for the combined series.
//!
//! Draws year against mean saturation (left axis) and per-capita
//! electricity consumption (right axis) using the [`plotters`] crate.
//! Charts are saved as PNG files with fixed 1200x800 resolution.

use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::color::series_palette;
use crate::data::model::CombinedRecord;

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, ChartError>;

/// Render the combined series as a dual-axis line chart.
///
/// # Chart Properties
/// * Resolution: 1200x800 pixels, PNG
/// * X-axis: year, shared by both series
/// * Left Y-axis: mean saturation
/// * Right Y-axis: electricity consumption per capita
/// * Legend: one entry per series
pub fn render_combined_chart(
    records: &[CombinedRecord],
    output_path: &Path,
) -> Result<()> {
    if records.is_empty() {
        return Err(ChartError::InvalidData("Data cannot be empty".to_string()));
    }

    let year_min = records.iter().map(|r| r.year).min().unwrap_or(0);
    let year_max = records.iter().map(|r| r.year).max().unwrap_or(0);
    // Pad one year so single-point series still have a valid range.
    let x_range = (year_min - 1)..(year_max + 1);

    let sat_max = records
        .iter()
        .map(|r| r.saturation)
        .fold(f64::NEG_INFINITY, f64::max);
    let sat_range = 0.0..(sat_max * 1.1).max(0.01);

    let elec_min = records
        .iter()
        .map(|r| r.electricity)
        .fold(f64::INFINITY, f64::min);
    let elec_max = records
        .iter()
        .map(|r| r.electricity)
        .fold(f64::NEG_INFINITY, f64::max);
    let elec_pad = ((elec_max - elec_min).abs()).max(1.0) * 0.05;
    let elec_range = (elec_min - elec_pad)..(elec_max + elec_pad);

    let root = BitMapBackend::new(output_path, (1200, 800));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    let palette = series_palette(2);
    let sat_color = palette[0];
    let elec_color = palette[1];

    let mut chart = ChartBuilder::on(&drawing_area)
        .caption(
            "Image saturation vs electricity consumption",
            ("sans-serif", 40),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .right_y_label_area_size(85)
        .build_cartesian_2d(x_range.clone(), sat_range)
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?
        .set_secondary_coord(x_range, elec_range);

    chart
        .configure_mesh()
        .x_desc("Year")
        .x_label_style(("sans-serif", 35))
        .y_desc("Mean saturation")
        .y_label_style(("sans-serif", 35))
        .label_style(("sans-serif", 25))
        .x_label_formatter(&|year| year.to_string())
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .configure_secondary_axes()
        .y_desc("Electricity per capita (kWh)")
        .label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            records.iter().map(|r| (r.year, r.saturation)),
            &sat_color,
        ))
        .map_err(|e| ChartError::Drawing(e.to_string()))?
        .label("Mean saturation")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], sat_color));

    chart
        .draw_secondary_series(LineSeries::new(
            records.iter().map(|r| (r.year, r.electricity)),
            &elec_color,
        ))
        .map_err(|e| ChartError::Drawing(e.to_string()))?
        .label("Electricity per capita")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], elec_color));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 25))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_records() -> Vec<CombinedRecord> {
        vec![
            CombinedRecord {
                year: 1950,
                saturation: 0.2,
                electricity: 120.0,
            },
            CombinedRecord {
                year: 1960,
                saturation: 0.3,
                electricity: 260.0,
            },
            CombinedRecord {
                year: 1970,
                saturation: 0.45,
                electricity: 410.0,
            },
        ]
    }

    #[test]
    fn empty_data_is_rejected() {
        let output_path = std::env::temp_dir().join("chroma_watt_chart_empty.png");
        let result = render_combined_chart(&[], &output_path);
        assert!(matches!(result, Err(ChartError::InvalidData(_))));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn renders_chart_to_png() {
        let output_path = std::env::temp_dir().join("chroma_watt_chart_render.png");
        let _ = fs::remove_file(&output_path);

        let result = render_combined_chart(&sample_records(), &output_path);
        assert!(result.is_ok());
        assert!(output_path.exists());

        let _ = fs::remove_file(&output_path);
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn renders_single_point_series() {
        let output_path = std::env::temp_dir().join("chroma_watt_chart_single.png");
        let _ = fs::remove_file(&output_path);

        let records = vec![CombinedRecord {
            year: 1950,
            saturation: 0.2,
            electricity: 120.0,
        }];
        assert!(render_combined_chart(&records, &output_path).is_ok());

        let _ = fs::remove_file(&output_path);
    }
}
