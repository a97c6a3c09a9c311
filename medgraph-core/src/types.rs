use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The schema version stamped on every graph output.
/// Bump this when the output shape changes.
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Group label assigned to actors with no classification in the reference table.
pub const DEFAULT_GROUP: &str = "actor";

// ===== INPUT RECORDS =====
// Field names mirror the source CSV headers exactly; every column is
// optional because the MEND and GLOPAD dataset exports carry different
// subsets of them.

/// One row of a mediation-event table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub conflict_country: Option<String>,
    /// Semicolon-delimited third-party actor ids (MEND export).
    #[serde(default, rename = "third_party_id_MEND")]
    pub third_party_id_mend: Option<String>,
    /// Semicolon-delimited third-party actor ids (GLOPAD export).
    #[serde(default, rename = "third_party_id_GLOPAD")]
    pub third_party_id_glopad: Option<String>,
}

impl EventRecord {
    /// Raw delimited id list for the selected dataset variant.
    pub fn participant_field(&self, field: IdField) -> Option<&str> {
        match field {
            IdField::Mend => self.third_party_id_mend.as_deref(),
            IdField::Glopad => self.third_party_id_glopad.as_deref(),
        }
    }

    /// Event date parsed with the given chrono format string.
    pub fn date(&self, format: &str) -> Option<NaiveDate> {
        self.event_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, format).ok())
    }
}

/// One row of the actor reference table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActorRecord {
    #[serde(rename = "GLOPAD_ID")]
    pub glopad_id: String,
    #[serde(default, rename = "ActorName")]
    pub actor_name: Option<String>,
    #[serde(default, rename = "actor_classification_glopad")]
    pub classification: Option<String>,
}

// ===== DATASET VARIANT SELECTION =====

/// Which event column holds the third-party id list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdField {
    #[default]
    Mend,
    Glopad,
}

/// How much actor metadata the builder resolves onto nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorResolution {
    /// Resolve both display name and classification from the reference table.
    #[default]
    Full,
    /// Resolve display name only; every node gets the default group.
    NameOnly,
}

// ===== DERIVED GRAPH ENTITIES =====

/// A deduplicated actor node. `name` falls back to the raw id and
/// `group` to [`DEFAULT_GROUP`] when the reference table has no match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorNode {
    pub id: String,
    pub name: String,
    pub group: String,
}

/// A weighted undirected link: `value` counts the events in which both
/// endpoint actors appeared. One link per unordered pair of distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoLink {
    pub source: String,
    pub target: String,
    pub value: u32,
}

impl CoLink {
    /// Canonical identity of the unordered pair — lexicographically sorted.
    pub fn pair_key(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }
}

/// Full build output: node sequence in first-seen order, link sequence
/// in first-created order, plus computed statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediationGraph {
    pub nodes: Vec<ActorNode>,
    pub links: Vec<CoLink>,
    pub profile: NetworkProfile,
}

/// The serialization-ready output format. Carries a schema version
/// so consumers can detect and handle shape changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortedMediationGraph {
    pub schema_version: String,
    pub nodes: Vec<ActorNode>,
    pub links: Vec<CoLink>,
    pub profile: NetworkProfile,
}

/// Bare `{nodes, links}` document for a force-directed renderer:
/// node `group` drives color encoding, link `value` stroke width.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct D3Document {
    pub format: String,
    pub nodes: Vec<ActorNode>,
    pub links: Vec<CoLink>,
}

/// Flat delimited edge rows (`source;target;value`) — minimal format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeListDocument {
    pub format: String,
    pub edges: Vec<String>,
}

// ===== NETWORK PROFILE =====

/// Quantitative measurement of graph shape — deterministic, mechanically
/// computed from the node and link sequences. Travels with graph.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkProfile {
    pub created_at: DateTime<Utc>,
    pub dataset_variant: IdField,
    pub total_nodes: usize,
    pub total_links: usize,
    /// Sum of all link values — total pairwise co-occurrences.
    pub total_weight: u64,
    pub group_distribution: GroupDistribution,
    pub degree_distribution: DegreeDistribution,
}

impl Default for NetworkProfile {
    fn default() -> Self {
        Self {
            created_at: Utc::now(),
            dataset_variant: IdField::default(),
            total_nodes: 0,
            total_links: 0,
            total_weight: 0,
            group_distribution: GroupDistribution::default(),
            degree_distribution: DegreeDistribution::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupDistribution {
    pub counts: HashMap<String, usize>,
    pub percentages: HashMap<String, f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DegreeDistribution {
    pub max_degree: usize,
    pub avg_degree: f32,
    /// degree → number of nodes with that degree
    pub degree_counts: HashMap<usize, usize>,
}
