use serde::Deserialize;

/// Forward geocoding answer, a GeoJSON feature collection. Coordinates are `[longitude, latitude]`.
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub place_name: Option<String>,
    pub center: Option<Vec<f64>>,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub coordinates: Vec<f64>,
}

impl Feature {
    /// Returns the feature position as `(longitude, latitude)`.
    pub fn lon_lat(&self) -> Option<(f64, f64)> {
        let coordinates = self
            .center
            .as_deref()
            .or_else(|| self.geometry.as_ref().map(|geometry| geometry.coordinates.as_slice()))?;

        match coordinates {
            [longitude, latitude, ..] => Some((*longitude, *latitude)),
            _ => None,
        }
    }
}
