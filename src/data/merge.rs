use super::model::{CombinedRecord, ConsumptionSeries, VisualStatSeries};

// ---------------------------------------------------------------------------
// Nearest-preceding join
// ---------------------------------------------------------------------------

/// Align the visual series with the consumption series: each visual year is
/// paired with the greatest consumption year not exceeding it.  Visual years
/// older than the whole consumption series are dropped.  Output preserves
/// the visual series' ascending order.
pub fn merge_nearest_preceding(
    visual: &VisualStatSeries,
    consumption: &ConsumptionSeries,
) -> Vec<CombinedRecord> {
    visual
        .points()
        .iter()
        .filter_map(|&(year, saturation)| {
            consumption
                .value_at_or_before(year)
                .map(|(_, electricity)| CombinedRecord {
                    year,
                    saturation,
                    electricity,
                })
        })
        .collect()
}
