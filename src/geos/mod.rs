pub mod boundaries;

pub use boundaries::{load_boundaries, parse_boundaries, Boundary};
