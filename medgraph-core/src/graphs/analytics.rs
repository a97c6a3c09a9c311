use crate::types::*;
use std::collections::HashMap;

impl MediationGraph {
    /// Compute profile statistics for the whole graph.
    pub fn compute_profile(&mut self) {
        let analytics = NetworkAnalytics::compute(&self.nodes, &self.links);

        self.profile.total_nodes = self.nodes.len();
        self.profile.total_links = self.links.len();
        self.profile.total_weight = analytics.total_weight;
        self.profile.group_distribution = analytics.group_distribution;
        self.profile.degree_distribution = analytics.degree_distribution;
    }
}

/// Result of analytics computation for any subset of the graph
#[derive(Debug, Clone)]
pub struct NetworkAnalyticsResult {
    pub total_weight: u64,
    pub group_distribution: GroupDistribution,
    pub degree_distribution: DegreeDistribution,
}

/// Analytics computer over node and link sequences
pub struct NetworkAnalytics;

impl NetworkAnalytics {
    pub fn compute(nodes: &[ActorNode], links: &[CoLink]) -> NetworkAnalyticsResult {
        NetworkAnalyticsResult {
            total_weight: links.iter().map(|l| u64::from(l.value)).sum(),
            group_distribution: Self::compute_group_distribution(nodes),
            degree_distribution: Self::compute_degree_distribution(nodes, links),
        }
    }

    /// Group distribution with counts and percentages
    fn compute_group_distribution(nodes: &[ActorNode]) -> GroupDistribution {
        let mut counts = HashMap::new();
        let total_nodes = nodes.len();

        for node in nodes {
            *counts.entry(node.group.clone()).or_insert(0) += 1;
        }

        let mut percentages = HashMap::new();
        for (group, count) in &counts {
            let percentage = if total_nodes > 0 {
                (*count as f32 / total_nodes as f32) * 100.0
            } else {
                0.0
            };
            percentages.insert(group.clone(), percentage);
        }

        GroupDistribution {
            counts,
            percentages,
        }
    }

    /// Unweighted degree distribution and statistics
    fn compute_degree_distribution(nodes: &[ActorNode], links: &[CoLink]) -> DegreeDistribution {
        let mut degree_by_node: HashMap<&str, usize> = HashMap::new();
        for node in nodes {
            degree_by_node.insert(node.id.as_str(), 0);
        }
        for link in links {
            *degree_by_node.entry(link.source.as_str()).or_insert(0) += 1;
            *degree_by_node.entry(link.target.as_str()).or_insert(0) += 1;
        }

        let mut degree_counts: HashMap<usize, usize> = HashMap::new();
        let mut total_degree = 0usize;
        let mut max_degree = 0usize;

        for &degree in degree_by_node.values() {
            *degree_counts.entry(degree).or_insert(0) += 1;
            total_degree += degree;
            max_degree = max_degree.max(degree);
        }

        let avg_degree = if !degree_by_node.is_empty() {
            total_degree as f32 / degree_by_node.len() as f32
        } else {
            0.0
        };

        DegreeDistribution {
            max_degree,
            avg_degree,
            degree_counts,
        }
    }
}
