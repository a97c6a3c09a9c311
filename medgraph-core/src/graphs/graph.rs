use crate::types::*;
use anyhow::Result;

impl MediationGraph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
            profile: NetworkProfile::default(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&ActorNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn link(&self, a: &str, b: &str) -> Option<&CoLink> {
        let key = CoLink::pair_key(a, b);
        self.links
            .iter()
            .find(|l| CoLink::pair_key(&l.source, &l.target) == key)
    }

    /// Number of distinct partners an actor co-occurred with.
    pub fn degree(&self, id: &str) -> usize {
        self.links
            .iter()
            .filter(|l| l.source == id || l.target == id)
            .count()
    }

    /// Total co-occurrence count across all of an actor's links.
    pub fn weighted_degree(&self, id: &str) -> u64 {
        self.links
            .iter()
            .filter(|l| l.source == id || l.target == id)
            .map(|l| u64::from(l.value))
            .sum()
    }

    /// An actor's partners sorted by co-occurrence count, heaviest first.
    /// Ties keep link-creation order.
    pub fn top_partners(&self, id: &str, limit: usize) -> Vec<(&str, u32)> {
        let mut partners: Vec<(&str, u32)> = self
            .links
            .iter()
            .filter_map(|l| {
                if l.source == id {
                    Some((l.target.as_str(), l.value))
                } else if l.target == id {
                    Some((l.source.as_str(), l.value))
                } else {
                    None
                }
            })
            .collect();
        partners.sort_by(|a, b| b.1.cmp(&a.1));
        partners.truncate(limit);
        partners
    }

    pub fn save_to_json(&self, path: &str) -> Result<()> {
        let sorted_graph = self.to_sorted_graph();
        let json = serde_json::to_string_pretty(&sorted_graph)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn to_sorted_graph(&self) -> SortedMediationGraph {
        // Node and link sequences already carry first-seen / first-created
        // order; the output format only adds the schema stamp.
        SortedMediationGraph {
            schema_version: SCHEMA_VERSION.to_string(),
            nodes: self.nodes.clone(),
            links: self.links.clone(),
            profile: self.profile.clone(),
        }
    }
}

impl Default for MediationGraph {
    fn default() -> Self {
        Self::new()
    }
}
