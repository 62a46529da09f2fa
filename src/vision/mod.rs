/// Visual statistics: per-image saturation and per-year folder aggregation.

pub mod saturation;
pub mod scan;
