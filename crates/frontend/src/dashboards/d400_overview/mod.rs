pub mod chart;
pub mod ui;
