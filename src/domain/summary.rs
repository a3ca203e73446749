use crate::domain::Listing;

/// `describe()`-style numbers for one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub column: &'static str,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingSummary {
    pub rows: usize,
    pub columns: Vec<ColumnStats>,
}

impl ListingSummary {
    pub fn from_listings(listings: &[Listing]) -> Self {
        let columns = vec![
            ColumnStats::from_values("valor_total", listings.iter().map(|l| Some(l.total_value))),
            ColumnStats::from_values("quartos", listings.iter().map(|l| Some(l.bedrooms as f64))),
            ColumnStats::from_values("lat", listings.iter().map(|l| l.latitude)),
            ColumnStats::from_values("lon", listings.iter().map(|l| l.longitude)),
        ];

        Self {
            rows: listings.len(),
            columns,
        }
    }

    #[cfg(test)]
    pub fn column(&self, name: &str) -> Option<&ColumnStats> {
        self.columns.iter().find(|c| c.column == name)
    }
}

impl ColumnStats {
    /// Missing and non-finite values are left out of every statistic.
    /// `std` is the sample deviation (n - 1), NaN below two values.
    fn from_values(column: &'static str, values: impl Iterator<Item = Option<f64>>) -> Self {
        let values: Vec<f64> = values.flatten().filter(|v| v.is_finite()).collect();
        let count = values.len();

        if count == 0 {
            return Self {
                column,
                count,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
            };
        }

        let mean = values.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            f64::NAN
        };

        Self {
            column,
            count,
            mean,
            std,
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}
