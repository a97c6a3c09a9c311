use crate::types::*;
use anyhow::Result;

impl MediationGraph {
    /// Bare `{nodes, links}` shape for direct consumption by a
    /// force-directed renderer.
    pub fn to_d3_format(&self) -> D3Document {
        D3Document {
            format: "d3".to_string(),
            nodes: self.nodes.clone(),
            links: self.links.clone(),
        }
    }

    /// Flat `source;target;value` rows — minimal format.
    pub fn to_edge_list_format(&self) -> EdgeListDocument {
        let edges: Vec<String> = self
            .links
            .iter()
            .map(|l| format!("{};{};{}", l.source, l.target, l.value))
            .collect();

        EdgeListDocument {
            format: "edgelist".to_string(),
            edges,
        }
    }

    pub fn save_with_format(&self, path: &str, format: &str) -> Result<()> {
        match format {
            "d3" => {
                let d3 = self.to_d3_format();
                let json = serde_json::to_string_pretty(&d3)?;
                std::fs::write(path, json)?;
            }
            "edgelist" => {
                let edge_list = self.to_edge_list_format();
                let json = serde_json::to_string_pretty(&edge_list)?;
                std::fs::write(path, json)?;
            }
            _ => {
                self.save_to_json(path)?;
            }
        }
        Ok(())
    }
}
