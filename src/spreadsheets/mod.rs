pub mod export_xlsx;
pub mod listings_xlsx;

pub use export_xlsx::export_ranked_xlsx;
pub use listings_xlsx::{load_listings, COLUMNS};
