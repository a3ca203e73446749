/// One row of the listings spreadsheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub total_value: f64,
    pub neighborhood: String,
    pub bedrooms: u32,
    pub nearest_station: Option<String>,

    // Either may be absent in the sheet
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Listing {
    /// Coordinates usable as a map position, if the row has them.
    pub fn position(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.filter(|v| v.is_finite())?;
        let lon = self.longitude.filter(|v| v.is_finite())?;

        if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
            Some((lat, lon))
        } else {
            None
        }
    }

    pub fn station_label(&self) -> &str {
        match self.nearest_station.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => "-",
        }
    }
}
