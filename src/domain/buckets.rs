// src/domain/buckets.rs

/// A half-open price range `[lower, upper)` drawn in one color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBucket {
    pub lower: f64,
    pub upper: f64,
    pub color: &'static str,
}

pub const PRICE_BUCKETS: [PriceBucket; 7] = [
    PriceBucket {
        lower: 0.0,
        upper: 300_000.0,
        color: "rgb(255, 0, 0)",
    },
    PriceBucket {
        lower: 300_000.0,
        upper: 500_000.0,
        color: "rgb(255, 165, 0)",
    },
    PriceBucket {
        lower: 500_000.0,
        upper: 700_000.0,
        color: "rgb(255, 255, 0)",
    },
    PriceBucket {
        lower: 700_000.0,
        upper: 1_000_000.0,
        color: "rgb(0, 255, 0)",
    },
    PriceBucket {
        lower: 1_000_000.0,
        upper: 2_000_000.0,
        color: "rgb(0, 255, 255)",
    },
    PriceBucket {
        lower: 2_000_000.0,
        upper: 4_000_000.0,
        color: "rgb(0, 0, 255)",
    },
    PriceBucket {
        lower: 4_000_000.0,
        upper: f64::INFINITY,
        color: "rgb(128, 0, 128)",
    },
];

impl PriceBucket {
    pub fn label(&self) -> String {
        if self.upper.is_infinite() {
            format!("{:.0}+", self.lower)
        } else {
            format!("{:.0}-{:.0}", self.lower, self.upper)
        }
    }
}

/// Index of the bucket holding `value`. Anything below the first lower
/// bound (or NaN) lands in the first bucket.
pub fn bucket_for(value: f64, buckets: &[PriceBucket]) -> usize {
    buckets
        .iter()
        .rposition(|b| value >= b.lower)
        .unwrap_or(0)
}
