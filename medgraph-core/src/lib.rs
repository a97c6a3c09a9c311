// Medgraph Core Library
//
// Turns mediation-event and actor-reference tables into a weighted
// actor co-occurrence graph, ready for a force-directed renderer.

pub mod config;
pub mod content;
pub mod error;
pub mod graphs;
pub mod loader;
pub mod processor;
pub mod selection;
pub mod types;

// Re-export main types and functions for easy use
pub use config::DatasetConfig;
pub use error::DataError;
pub use graphs::GraphBuilder;
pub use processor::DatasetProcessor;
pub use selection::{DateRange, SelectionStore};
pub use types::*;
