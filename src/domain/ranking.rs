use crate::domain::Listing;
use std::cmp::Ordering;

/// Listings by `total_value`, highest first. The sort is stable, so
/// equal prices keep their file order. NaN prices go last.
pub fn rank_by_total_value(listings: &[Listing]) -> Vec<&Listing> {
    let mut ranked: Vec<&Listing> = listings.iter().collect();
    ranked.sort_by(|a, b| descending(a.total_value, b.total_value));
    ranked
}

fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
