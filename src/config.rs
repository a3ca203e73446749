use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTINGS_FILE: &str = "dados_wgs.xlsx";
pub const BOUNDARIES_FILE: &str = "SAD69-96_SHP_distrito.geojson";

/// Everything the dashboard reads. There is no config file and no flags;
/// `Default` carries the literal values the service runs with.
#[derive(Debug, Clone)]
pub struct Config {
    pub listings_path: PathBuf,
    pub boundaries_path: PathBuf,
    pub addr: SocketAddr,
    pub max_workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listings_path: PathBuf::from(LISTINGS_FILE),
            boundaries_path: PathBuf::from(BOUNDARIES_FILE),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
        }
    }
}
