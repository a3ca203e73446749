use crate::errors::ServerError;
use geojson::{Feature, GeoJson, Geometry};
use std::fs;
use std::path::Path;
use tracing::info;

/// Property keys tried, in order, for a district's display name.
const NAME_KEYS: [&str; 4] = ["ds_nome", "name", "nome", "NOME_DIST"];
const UNNAMED: &str = "Sem nome";

/// One district outline from the boundary file.
#[derive(Debug, Clone)]
pub struct Boundary {
    pub name: String,
    pub geometry: Geometry,
}

impl Boundary {
    /// GeoJSON feature carrying the name, as handed to the map layer.
    pub fn to_feature(&self) -> Feature {
        let mut properties = serde_json::Map::new();
        properties.insert("name".into(), self.name.clone().into());

        Feature {
            bbox: None,
            geometry: Some(self.geometry.clone()),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

pub fn load_boundaries(path: &Path) -> Result<Vec<Boundary>, ServerError> {
    let text = fs::read_to_string(path).map_err(|e| {
        ServerError::GeoError(format!("Failed to read '{}': {e}", path.display()))
    })?;

    let boundaries = parse_boundaries(&text)?;
    info!(districts = boundaries.len(), path = %path.display(), "Loaded boundaries");
    Ok(boundaries)
}

pub fn parse_boundaries(text: &str) -> Result<Vec<Boundary>, ServerError> {
    let geo_json: GeoJson = text
        .parse()
        .map_err(|e| ServerError::GeoError(format!("Invalid GeoJSON: {e}")))?;

    let features: Vec<Feature> = match geo_json {
        GeoJson::FeatureCollection(v) => v.features,
        GeoJson::Feature(v) => vec![v],
        GeoJson::Geometry(v) => vec![Feature::from(v)],
    };

    features
        .into_iter()
        .enumerate()
        .map(|(i, feature)| {
            let name = feature_name(&feature);
            let geometry = feature.geometry.ok_or_else(|| {
                ServerError::GeoError(format!("Feature {i} ({name}) has no geometry"))
            })?;

            match geometry.value {
                geojson::Value::Polygon(_) | geojson::Value::MultiPolygon(_) => {
                    Ok(Boundary { name, geometry })
                }
                _ => Err(ServerError::GeoError(format!(
                    "Feature {i} ({name}) is not a polygon"
                ))),
            }
        })
        .collect()
}

fn feature_name(feature: &Feature) -> String {
    NAME_KEYS
        .iter()
        .find_map(|key| match feature.property(key) {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| UNNAMED.to_string())
}
