use crate::domain::{Listing, ListingSummary};
use crate::templates::pages::{preview_table, summary_table};
use crate::templates::{card, desktop_layout};
use maud::{html, Markup, PreEscaped};

pub const PAGE_TITLE: &str = "Mapa Interativo de Imóveis";
pub const MAP_WIDTH_PX: u32 = 750;
pub const MAP_HEIGHT_PX: u32 = 700;

pub struct DashboardVm {
    pub chart: serde_json::Value,
    pub map: serde_json::Value,
    pub summary: ListingSummary,
    pub preview: Vec<Listing>,
    pub polygon_count: usize,
    pub marker_count: usize,
    pub skipped: usize,
}

// Drawn client side once the CDN scripts are in.
const DRAW_SCRIPT: &str = r#"
(function () {
  var fig = JSON.parse(document.getElementById('chart-data').textContent);
  var layout = Object.assign({}, fig.layout, { autosize: true });
  delete layout.width;
  Plotly.newPlot('chart', fig.data, layout, { responsive: true });

  var m = JSON.parse(document.getElementById('map-data').textContent);
  var map = L.map('map').setView(m.center, m.zoom);
  L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
    maxZoom: 19,
    attribution: '&copy; OpenStreetMap contributors'
  }).addTo(map);

  L.geoJSON(m.boundaries, {
    style: function () { return m.boundaryStyle; },
    onEachFeature: function (feature, layer) {
      layer.bindTooltip(feature.properties.name);
    }
  }).addTo(map);

  m.markers.forEach(function (mk) {
    L.circleMarker([mk.lat, mk.lon], m.markerStyle).bindPopup(mk.popup).addTo(map);
  });
})();
"#;

/// JSON for an inline `application/json` script block.
fn script_json(value: &serde_json::Value) -> PreEscaped<String> {
    PreEscaped(value.to_string().replace("</", "<\\/"))
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        PAGE_TITLE,
        html! {
            main class="container" {
                h1 { (PAGE_TITLE) }

                section class="card" id="chart-card" {
                    div id="chart" style="width: 100%; min-height: 1800px;" {}
                }

                section class="card" id="map-card" {
                    p {
                        (vm.polygon_count) " distritos, "
                        (vm.marker_count) " imóveis no mapa"
                        @if vm.skipped > 0 {
                            " (" (vm.skipped) " sem coordenadas válidas)"
                        }
                    }
                    div id="map" style=(format!("width: {MAP_WIDTH_PX}px; height: {MAP_HEIGHT_PX}px;")) {}
                }

                (card("Estatísticas", summary_table(&vm.summary)))
                (card("Primeiras linhas", preview_table(&vm.preview)))

                script type="application/json" id="chart-data" { (script_json(&vm.chart)) }
                script type="application/json" id="map-data" { (script_json(&vm.map)) }
                script { (PreEscaped(DRAW_SCRIPT)) }
            }
        },
    )
}
