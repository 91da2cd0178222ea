use crate::domain::{AmbulanceCandidate, GeoPoint};
use serde::Deserialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tracing::{info, instrument};

const COMPLETED_COURSE_STATUS: &str = "completed";

#[derive(Debug, Deserialize)]
struct FleetRecord {
    id: String,
    #[serde(flatten)]
    location: GeoPoint,
    #[serde(default)]
    equipment: Option<EquipmentField>,
    #[serde(default)]
    course_status: Option<String>,
}

/// Equipment is either a list of tags or a single comma-separated string. Missing or `null` means none.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EquipmentField {
    List(Vec<String>),
    Joined(String),
}

impl EquipmentField {
    fn into_tags(self) -> Vec<String> {
        match self {
            EquipmentField::List(tags) => tags,
            EquipmentField::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        }
    }
}

impl From<FleetRecord> for AmbulanceCandidate {
    fn from(record: FleetRecord) -> Self {
        let has_active_course = record
            .course_status
            .as_deref()
            .is_some_and(|status| !status.trim().eq_ignore_ascii_case(COMPLETED_COURSE_STATUS));

        let equipment = record.equipment.map(EquipmentField::into_tags).unwrap_or_default();

        AmbulanceCandidate::new(record.id, record.location, equipment, has_active_course)
    }
}

#[instrument]
pub async fn load_fleet_from(path: &str) -> Result<Vec<AmbulanceCandidate>, FleetLoaderError> {
    info!("📁 Loading fleet...");
    let content = fs::read_to_string(path).await.map_err(|e| FleetLoaderError::Io {
        source: e,
        path: PathBuf::from(path),
    })?;

    let fleet = parse_fleet(content, PathBuf::from(path)).await?;
    info!("📁 Loading fleet... OK, {} ambulance(s) loaded", fleet.len());
    Ok(fleet)
}

async fn parse_fleet(content: String, path: PathBuf) -> Result<Vec<AmbulanceCandidate>, FleetLoaderError> {
    task::spawn_blocking(move || {
        serde_json::from_str::<Vec<FleetRecord>>(&content)
            .map(|records| records.into_iter().map(AmbulanceCandidate::from).collect())
            .map_err(|e| FleetLoaderError::Parse { source: e, path })
    })
    .await?
}

#[derive(Error, Debug)]
pub enum FleetLoaderError {
    #[error("failed to read fleet file '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("failed to parse fleet file '{}': {}", path.display(), source)]
    Parse { source: serde_json::Error, path: PathBuf },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}
