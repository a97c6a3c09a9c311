use crate::types::*;
use std::collections::{HashMap, HashSet};

/// Builds an actor co-occurrence graph from event and actor tables.
///
/// Nodes are unique third-party actor ids in first-seen order; links are
/// unordered id pairs weighted by the number of events both appeared in.
/// This is a total function over its inputs: malformed or missing id
/// fields are treated as "no participants", never as errors.
pub struct GraphBuilder {
    id_field: IdField,
    resolution: ActorResolution,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(IdField::default(), ActorResolution::default())
    }
}

impl GraphBuilder {
    pub fn new(id_field: IdField, resolution: ActorResolution) -> Self {
        Self {
            id_field,
            resolution,
        }
    }

    pub fn id_field(&self) -> IdField {
        self.id_field
    }

    /// Build nodes and links from the full input. Deterministic given
    /// deterministic input order; does not mutate its inputs. The
    /// returned profile is empty until [`MediationGraph::compute_profile`]
    /// runs.
    pub fn build(&self, events: &[EventRecord], actors: &[ActorRecord]) -> MediationGraph {
        // id → reference row. Later duplicate ids overwrite earlier ones.
        let mut actor_index: HashMap<&str, &ActorRecord> = HashMap::new();
        for actor in actors {
            actor_index.insert(actor.glopad_id.as_str(), actor);
        }

        let mut nodes: Vec<ActorNode> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut links: Vec<CoLink> = Vec::new();
        let mut link_index: HashMap<(String, String), usize> = HashMap::new();

        for event in events {
            let Some(raw) = event.participant_field(self.id_field) else {
                continue;
            };

            let ids = Self::participant_list(raw);
            if ids.is_empty() {
                continue;
            }

            for &id in &ids {
                if seen.insert(id.to_string()) {
                    nodes.push(self.resolve_node(id, &actor_index));
                }
            }

            // Pairwise links. `ids` is already de-duplicated, so no pair
            // contains the same id twice and no pair is counted more than
            // once per event.
            for i in 0..ids.len() {
                for j in (i + 1)..ids.len() {
                    let key = CoLink::pair_key(ids[i], ids[j]);
                    if let Some(&idx) = link_index.get(&key) {
                        links[idx].value += 1;
                    } else {
                        link_index.insert(key, links.len());
                        links.push(CoLink {
                            source: ids[i].to_string(),
                            target: ids[j].to_string(),
                            value: 1,
                        });
                    }
                }
            }
        }

        MediationGraph {
            nodes,
            links,
            profile: NetworkProfile {
                dataset_variant: self.id_field,
                ..NetworkProfile::default()
            },
        }
    }

    /// Split the delimited id field, discarding empty tokens (leading,
    /// trailing, or doubled delimiters) and repeated ids. A repeated id
    /// within one event never pairs with itself and never double-counts
    /// its pairs with other participants.
    fn participant_list(raw: &str) -> Vec<&str> {
        let mut ids = Vec::new();
        let mut in_event: HashSet<&str> = HashSet::new();
        for token in raw.split(';') {
            if token.is_empty() {
                continue;
            }
            if in_event.insert(token) {
                ids.push(token);
            }
        }
        ids
    }

    fn resolve_node(&self, id: &str, actor_index: &HashMap<&str, &ActorRecord>) -> ActorNode {
        let actor = actor_index.get(id);

        let name = actor
            .and_then(|a| a.actor_name.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or(id)
            .to_string();

        let group = match self.resolution {
            ActorResolution::Full => actor
                .and_then(|a| a.classification.as_deref())
                .filter(|g| !g.is_empty())
                .unwrap_or(DEFAULT_GROUP)
                .to_string(),
            ActorResolution::NameOnly => DEFAULT_GROUP.to_string(),
        };

        ActorNode {
            id: id.to_string(),
            name,
            group,
        }
    }
}
