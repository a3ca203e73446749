use crate::config::Config;
use crate::domain::Listing;
use astra::{Body, Request, Response};
use rust_xlsxwriter::Workbook;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Fresh directory under the system temp dir, unique per call
pub fn temp_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);

    let dir = std::env::temp_dir().join(format!("imoveis_{tag}_{nanos}_{n}"));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn listing(value: f64, bairro: &str, quartos: u32, station: Option<&str>) -> Listing {
    Listing {
        total_value: value,
        neighborhood: bairro.to_string(),
        bedrooms: quartos,
        nearest_station: station.map(str::to_string),
        latitude: Some(-23.55),
        longitude: Some(-46.63),
    }
}

pub fn moema() -> Listing {
    Listing {
        latitude: Some(-23.60),
        longitude: Some(-46.66),
        ..listing(450_000.0, "Moema", 2, Some("Moema"))
    }
}

/// Writes `rows` under the given headers, the way the source sheet is laid out.
pub fn write_listings_with_headers(path: &Path, headers: &[&str], rows: &[Listing]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }

    for (i, l) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, header) in headers.iter().enumerate() {
            let col = col as u16;
            match *header {
                "valor_total" => {
                    sheet.write_number(r, col, l.total_value).unwrap();
                }
                "bairro" => {
                    sheet.write_string(r, col, &l.neighborhood).unwrap();
                }
                "quartos" => {
                    sheet.write_number(r, col, l.bedrooms as f64).unwrap();
                }
                "estacao_prox" => {
                    if let Some(s) = &l.nearest_station {
                        sheet.write_string(r, col, s).unwrap();
                    }
                }
                "lat" => {
                    if let Some(v) = l.latitude {
                        sheet.write_number(r, col, v).unwrap();
                    }
                }
                "lon" => {
                    if let Some(v) = l.longitude {
                        sheet.write_number(r, col, v).unwrap();
                    }
                }
                _ => {}
            }
        }
    }

    workbook.save(path).unwrap();
}

pub fn write_listings(path: &Path, rows: &[Listing]) {
    write_listings_with_headers(path, &crate::spreadsheets::COLUMNS, rows);
}

/// A FeatureCollection of `n` small triangles named D0..Dn
pub fn write_boundaries(path: &Path, n: usize) {
    let features: Vec<String> = (0..n)
        .map(|i| {
            let x = -46.8 + i as f64 * 0.004;
            format!(
                r#"{{"type":"Feature","properties":{{"ds_nome":"D{i}","ds_codigo":{i}}},"geometry":{{"type":"Polygon","coordinates":[[[{x},-23.5],[{x},-23.52],[-46.81,-23.52],[{x},-23.5]]]}}}}"#
            )
        })
        .collect();

    let text = format!(
        r#"{{"type":"FeatureCollection","features":[{}]}}"#,
        features.join(",")
    );
    std::fs::write(path, text).unwrap();
}

/// Config pointing at freshly written input files
pub fn fixture_config(rows: &[Listing], districts: usize) -> Config {
    let dir = temp_dir("fixture");
    let listings_path = dir.join(crate::config::LISTINGS_FILE);
    let boundaries_path = dir.join(crate::config::BOUNDARIES_FILE);

    write_listings(&listings_path, rows);
    write_boundaries(&boundaries_path, districts);

    Config {
        listings_path,
        boundaries_path,
        ..Config::default()
    }
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn body_bytes(mut resp: Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn body_string(resp: Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}
