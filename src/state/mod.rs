pub mod chart_state;
pub mod color;
pub mod compare_config;
pub mod data_series;
