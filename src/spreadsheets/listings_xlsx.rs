use crate::domain::Listing;
use crate::errors::ServerError;
use calamine::{
    deserialize_as_f64_or_none, open_workbook, RangeDeserializerBuilder, Reader, Xlsx,
};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Header names looked up in the first worksheet.
pub const COLUMNS: [&str; 6] = ["valor_total", "bairro", "quartos", "estacao_prox", "lat", "lon"];

#[derive(Debug, Deserialize)]
struct ListingRow {
    valor_total: f64,
    bairro: String,
    quartos: f64,
    #[serde(default)]
    estacao_prox: Option<String>,
    #[serde(default, deserialize_with = "deserialize_as_f64_or_none")]
    lat: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_as_f64_or_none")]
    lon: Option<f64>,
}

impl From<ListingRow> for Listing {
    fn from(row: ListingRow) -> Self {
        Listing {
            total_value: row.valor_total,
            neighborhood: row.bairro,
            bedrooms: row.quartos.max(0.0).round() as u32,
            nearest_station: row.estacao_prox.filter(|s| !s.trim().is_empty()),
            latitude: row.lat,
            longitude: row.lon,
        }
    }
}

/// Reads every row of the first worksheet, in file order.
pub fn load_listings(path: &Path) -> Result<Vec<Listing>, ServerError> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
        ServerError::SpreadsheetError(format!("Failed to open '{}': {e}", path.display()))
    })?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| {
            ServerError::SpreadsheetError(format!("'{}' has no worksheets", path.display()))
        })?;

    let range = workbook.worksheet_range(&sheet).map_err(|e| {
        ServerError::SpreadsheetError(format!("Failed to read sheet '{sheet}': {e}"))
    })?;

    let rows = RangeDeserializerBuilder::with_headers(COLUMNS.as_slice())
        .from_range(&range)
        .map_err(|e| ServerError::SpreadsheetError(format!("Bad header row: {e}")))?;

    let mut listings = Vec::new();
    for (i, result) in rows.enumerate() {
        // +2: one for the header, one for 1-based sheet rows
        let row: ListingRow = result
            .map_err(|e| ServerError::SpreadsheetError(format!("Row {}: {e}", i + 2)))?;
        listings.push(Listing::from(row));
    }

    debug!(sheet = %sheet, "Worksheet parsed");
    info!(rows = listings.len(), path = %path.display(), "Loaded listings");

    Ok(listings)
}
