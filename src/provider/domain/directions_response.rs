use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    pub code: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
pub struct Route {
    /// In meters.
    pub distance: f64,
    /// In seconds.
    pub duration: f64,
}
