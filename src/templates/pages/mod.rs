pub mod dashboard;
pub mod preview;

pub use dashboard::{dashboard_page, DashboardVm};
pub use preview::{preview_table, summary_table};
