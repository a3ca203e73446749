pub mod bar_chart;

pub use bar_chart::build_bar_chart;
