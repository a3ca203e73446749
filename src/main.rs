use crate::config::Config;
use crate::router::handle;
use astra::{Request, Server};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod charts;
mod config;
mod dashboard;
mod domain;
mod errors;
mod geos;
mod maps;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    init_logging();

    let config = Config::default();
    info!(
        listings = %config.listings_path.display(),
        boundaries = %config.boundaries_path.display(),
        "Starting server at http://{}",
        config.addr
    );

    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req: Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        match handle(req, &config) {
            Ok(resp) => resp,
            Err(err) => {
                error!(%method, %path, status = err.status(), "{err}");
                templates::html_error_response(err)
            }
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
        std::process::exit(1);
    }

    info!("Server shut down cleanly.");
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
