pub mod buckets;
pub mod listing;
pub mod money;
pub mod ranking;
pub mod summary;

pub use buckets::{bucket_for, PriceBucket, PRICE_BUCKETS};
pub use listing::Listing;
pub use money::format_brl;
pub use ranking::rank_by_total_value;
pub use summary::ListingSummary;
