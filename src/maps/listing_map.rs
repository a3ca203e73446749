use crate::domain::Listing;
use crate::errors::ServerError;
use crate::geos::Boundary;
use crate::templates::components::listing_popup;
use geojson::FeatureCollection;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, warn};

/// Praça da Sé, roughly.
pub const MAP_CENTER: (f64, f64) = (-23.5505, -46.6333);
pub const MAP_ZOOM: u8 = 11;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryStyle {
    pub fill_color: &'static str,
    pub color: &'static str,
    pub weight: u32,
    pub fill_opacity: f64,
}

impl Default for BoundaryStyle {
    fn default() -> Self {
        Self {
            fill_color: "green",
            color: "black",
            weight: 1,
            fill_opacity: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub radius: u32,
    pub color: &'static str,
    pub fill: bool,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub weight: u32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 2,
            color: "black",
            fill: true,
            fill_color: "green",
            fill_opacity: 1.0,
            weight: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub popup: String,
}

#[derive(Debug, Clone)]
pub struct ListingMap {
    pub center: (f64, f64),
    pub zoom: u8,
    pub boundary_style: BoundaryStyle,
    pub marker_style: MarkerStyle,
    pub boundaries: Vec<Boundary>,
    pub markers: Vec<Marker>,
    pub skipped: usize,
}

/// Every boundary becomes an overlay and every placeable listing a
/// marker, in table order. Rows without usable coordinates are left off
/// the map.
pub fn build_map(listings: &[Listing], boundaries: &[Boundary]) -> ListingMap {
    let mut markers = Vec::with_capacity(listings.len());
    let mut skipped = 0;

    for (row, listing) in listings.iter().enumerate() {
        match listing.position() {
            Some((lat, lon)) => markers.push(Marker {
                lat,
                lon,
                popup: listing_popup(listing).into_string(),
            }),
            None => {
                warn!(
                    row,
                    bairro = %listing.neighborhood,
                    lat = ?listing.latitude,
                    lon = ?listing.longitude,
                    "Listing has no usable coordinates, leaving it off the map"
                );
                skipped += 1;
            }
        }
    }

    info!(
        polygons = boundaries.len(),
        markers = markers.len(),
        skipped,
        "Map built"
    );

    ListingMap {
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
        boundary_style: BoundaryStyle::default(),
        marker_style: MarkerStyle::default(),
        boundaries: boundaries.to_vec(),
        markers,
        skipped,
    }
}

impl ListingMap {
    pub fn polygon_count(&self) -> usize {
        self.boundaries.len()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Payload read by the page script to draw the Leaflet map.
    pub fn to_leaflet(&self) -> Result<Value, ServerError> {
        let collection = FeatureCollection {
            bbox: None,
            features: self.boundaries.iter().map(Boundary::to_feature).collect(),
            foreign_members: None,
        };

        let boundaries = serde_json::to_value(&collection)
            .map_err(|e| ServerError::GeoError(format!("Failed to encode boundaries: {e}")))?;

        Ok(json!({
            "center": [self.center.0, self.center.1],
            "zoom": self.zoom,
            "boundaries": boundaries,
            "boundaryStyle": self.boundary_style,
            "markers": self.markers,
            "markerStyle": self.marker_style,
        }))
    }
}
