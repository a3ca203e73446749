// errors.rs
use std::fmt;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or the input files behind a render.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    SpreadsheetError(String),
    GeoError(String),
    XlsxError(String),
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            _ => 500,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::SpreadsheetError(msg) => write!(f, "Spreadsheet Error: {msg}"),
            ServerError::GeoError(msg) => write!(f, "Boundary File Error: {msg}"),
            ServerError::XlsxError(msg) => write!(f, "Export Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
