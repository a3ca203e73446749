// src/tests/router_tests/dashboard_tests.rs

use crate::config::Config;
use crate::errors::ServerError;
use crate::router::handle;
use crate::templates::html_error_response;
use crate::tests::utils::*;

#[test]
fn dashboard_renders_chart_and_map() {
    let config = fixture_config(&[moema()], 3);

    let resp = handle(get("/"), &config).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Mapa Interativo de Imóveis"));
    assert!(body.contains(r#"id="chart""#));
    assert!(body.contains(r#"id="map""#));
    assert!(body.contains("width: 750px"));
    assert!(body.contains("R$ 450,000.00"));
    assert!(body.contains("Comparação de Valores Totais por Bairro"));
    assert!(body.contains("3 distritos, 1 imóveis no mapa"));
}

#[test]
fn popup_markup_cannot_close_the_script_block() {
    let config = fixture_config(&[moema()], 1);
    let body = body_string(handle(get("/"), &config).unwrap());

    let start = body.find(r#"id="map-data""#).unwrap();
    let end = start + body[start..].find("</script>").unwrap();
    assert!(body[start..end].contains(r"<\/div>"));
}

#[test]
fn unknown_path_is_404() {
    let config = fixture_config(&[], 1);

    let err = handle(get("/nope"), &config).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(html_error_response(err).status(), 404);
}

#[test]
fn missing_input_aborts_the_render() {
    let dir = temp_dir("missing");
    let config = Config {
        listings_path: dir.join("absent.xlsx"),
        boundaries_path: dir.join("absent.geojson"),
        ..Config::default()
    };

    let err = handle(get("/"), &config).unwrap_err();
    assert!(matches!(err, ServerError::SpreadsheetError(_)));

    let body = body_string(html_error_response(err));
    assert!(body.contains("Erro 500"));
    assert!(body.contains("absent.xlsx"));
}

#[test]
fn broken_boundary_file_aborts_the_render() {
    let config = fixture_config(&[moema()], 1);
    std::fs::write(&config.boundaries_path, "{ not geojson").unwrap();

    let err = handle(get("/"), &config).unwrap_err();
    assert!(matches!(err, ServerError::GeoError(_)));
}

#[test]
fn health_says_ok() {
    let config = Config::default();
    let resp = handle(get("/health"), &config).unwrap();
    assert_eq!(body_string(resp), "ok");
}
