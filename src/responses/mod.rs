pub mod html;
pub mod xlsx;

use crate::errors::ServerError;
use astra::Response;

pub type ResultResp = Result<Response, ServerError>;

// Normal HTML response
pub use html::{html_response, text_response};
pub use xlsx::xlsx_response;
