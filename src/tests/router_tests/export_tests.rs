use crate::responses::xlsx::XLSX_CONTENT_TYPE;
use crate::router::handle;
use crate::spreadsheets::export_xlsx::EXPORT_FILENAME;
use crate::tests::utils::*;

#[test]
fn export_downloads_a_workbook() {
    let config = fixture_config(&[moema(), listing(1_000_000.0, "Vila Mariana", 3, None)], 1);

    let resp = handle(get("/export"), &config).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], XLSX_CONTENT_TYPE);
    let disposition = resp.headers()["Content-Disposition"].to_str().unwrap().to_string();
    assert!(disposition.contains(EXPORT_FILENAME));

    // xlsx is a zip archive
    let bytes = body_bytes(resp);
    assert_eq!(&bytes[..2], b"PK");
}
