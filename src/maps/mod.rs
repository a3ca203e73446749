pub mod listing_map;

pub use listing_map::build_map;
