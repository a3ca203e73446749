use crate::domain::{bucket_for, Listing, PRICE_BUCKETS};
use crate::errors::ServerError;
use crate::responses::{xlsx_response, ResultResp};
use rust_xlsxwriter::Workbook;

pub const EXPORT_FILENAME: &str = "listings_ranked.xlsx";

/// Workbook bytes for the ranked listings, one row each, plus the price
/// bucket every row was drawn with.
pub fn ranked_workbook(ranked: &[&Listing]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = [
        "Posição",
        "valor_total",
        "bairro",
        "quartos",
        "estacao_prox",
        "lat",
        "lon",
        "Faixa",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, listing) in ranked.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_number(r, 0, r as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write rank: {}", e)))?;

        worksheet
            .write_number(r, 1, listing.total_value)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write value: {}", e)))?;

        worksheet
            .write_string(r, 2, &listing.neighborhood)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write bairro: {}", e)))?;

        worksheet
            .write_number(r, 3, listing.bedrooms as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write quartos: {}", e)))?;

        let station = listing.nearest_station.as_deref().unwrap_or("");
        worksheet
            .write_string(r, 4, station)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write station: {}", e)))?;

        if let Some(lat) = listing.latitude {
            worksheet
                .write_number(r, 5, lat)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write lat: {}", e)))?;
        }

        if let Some(lon) = listing.longitude {
            worksheet
                .write_number(r, 6, lon)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write lon: {}", e)))?;
        }

        let bucket = &PRICE_BUCKETS[bucket_for(listing.total_value, &PRICE_BUCKETS)];
        worksheet
            .write_string(r, 7, bucket.label())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write bucket: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_ranked_xlsx(ranked: &[&Listing]) -> ResultResp {
    let buffer = ranked_workbook(ranked)?;
    xlsx_response(buffer, EXPORT_FILENAME)
}
