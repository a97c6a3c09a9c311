use crate::types::{ActorResolution, IdField};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

// Default value functions for serde
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

/// Dataset configuration: which files to load and how to interpret them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Event CSV paths. All of them are loaded; one failure fails the run.
    #[serde(default)]
    pub events: Vec<String>,
    /// Actor reference CSV path.
    pub actors: Option<String>,
    /// Optional GeoJSON paths for the map layer.
    #[serde(default)]
    pub geo: Vec<String>,
    /// Which event column holds the third-party id list.
    #[serde(default)]
    pub id_field: IdField,
    /// Actor metadata resolution strategy.
    #[serde(default)]
    pub resolution: ActorResolution,
    /// chrono format of the event_date column.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            actors: None,
            geo: Vec::new(),
            id_field: IdField::default(),
            resolution: ActorResolution::default(),
            date_format: default_date_format(),
        }
    }
}

impl DatasetConfig {
    /// Load from a YAML file. Unreadable or malformed files are errors;
    /// callers that want defaults instead decide that themselves and
    /// report which config they ended up with.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: DatasetConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}
