/// Report layer: combined CSV table and dual-axis chart.

pub mod chart;
pub mod table;
