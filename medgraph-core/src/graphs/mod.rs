
pub mod analytics;
pub mod builder;
pub mod graph;
pub mod serialization;

// Re-export for easy access
pub use analytics::NetworkAnalytics;
pub use builder::GraphBuilder;
