use crate::config::DatasetConfig;
use crate::graphs::builder::GraphBuilder;
use crate::loader;
use crate::selection::DateRange;
use crate::types::*;
use anyhow::Result;
use std::time::{Duration, Instant};

/// Simple profiler that collects timings for pipeline steps
pub struct StepProfiler {
    enabled: bool,
    timings: Vec<(String, Duration)>,
}

impl StepProfiler {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            timings: Vec::new(),
        }
    }

    pub fn time_step<F, R>(&mut self, step_name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if !self.enabled {
            return f();
        }

        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        self.timings.push((step_name.to_string(), elapsed));
        println!("⏱️  {}: {:.0}ms", step_name, elapsed.as_millis());

        result
    }

    pub fn print_summary(&self) {
        if !self.enabled || self.timings.is_empty() {
            return;
        }

        println!("\n📊 Performance Summary:");
        let total: Duration = self.timings.iter().map(|(_, d)| *d).sum();

        for (step, duration) in &self.timings {
            let percentage = (duration.as_secs_f64() / total.as_secs_f64()) * 100.0;
            println!(
                "   {:.<35} {:.0}ms ({:.1}%)",
                step,
                duration.as_millis(),
                percentage
            );
        }
        println!("   {:.<35} {:.0}ms", "Total", total.as_millis());
    }
}

/// Orchestrates the pipeline: load the configured tables, filter, build
/// the co-occurrence graph, compute its profile.
pub struct DatasetProcessor {
    config: DatasetConfig,
    builder: GraphBuilder,
}

impl DatasetProcessor {
    pub fn new(config: DatasetConfig) -> Self {
        let builder = GraphBuilder::new(config.id_field, config.resolution);
        Self { config, builder }
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Load everything and build the graph over the full timeline.
    pub fn build_graph(&self) -> Result<MediationGraph> {
        self.build_graph_filtered(&DateRange::default(), false)
    }

    /// Load everything and build the graph from events whose date falls
    /// inside `range`. Events with an unparseable or missing date are
    /// kept only when the range is unbounded.
    pub fn build_graph_filtered(&self, range: &DateRange, profile: bool) -> Result<MediationGraph> {
        let mut profiler = StepProfiler::new(profile);

        let event_batches = profiler.time_step("Load event tables", || {
            loader::load_events(&self.config.events)
        })?;

        let actors = profiler.time_step("Load actor table", || match &self.config.actors {
            Some(path) => loader::load_actors(path),
            None => Ok(Vec::new()),
        })?;

        if !self.config.geo.is_empty() {
            // Loaded for the same all-or-nothing guarantee as the tables;
            // the geometry itself goes straight to the renderer.
            profiler.time_step("Load geo layers", || {
                loader::load_geo_batch(&self.config.geo)
            })?;
        }

        let events: Vec<EventRecord> = event_batches.into_iter().flatten().collect();
        let events = self.filter_events(events, range);

        let mut graph = profiler.time_step("Build graph", || self.builder.build(&events, &actors));
        profiler.time_step("Compute profile", || graph.compute_profile());

        profiler.print_summary();
        Ok(graph)
    }

    fn filter_events(&self, events: Vec<EventRecord>, range: &DateRange) -> Vec<EventRecord> {
        if range.is_unbounded() {
            return events;
        }
        events
            .into_iter()
            .filter(|e| {
                e.date(&self.config.date_format)
                    .map(|d| range.contains(d))
                    .unwrap_or(false)
            })
            .collect()
    }
}
