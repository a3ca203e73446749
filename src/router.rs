use crate::config::Config;
use crate::dashboard::render_dashboard;
use crate::domain::rank_by_total_value;
use crate::errors::ServerError;
use crate::responses::{html_response, text_response, ResultResp};
use crate::spreadsheets::{export_ranked_xlsx, load_listings};
use astra::Request;

pub fn handle(req: Request, config: &Config) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => html_response(render_dashboard(config)?),
        ("GET", "/export") => {
            let listings = load_listings(&config.listings_path)?;
            export_ranked_xlsx(&rank_by_total_value(&listings))
        }
        ("GET", "/health") => text_response("ok"),
        _ => Err(ServerError::NotFound),
    }
}
