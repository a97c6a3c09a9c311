//! Dataset boundary tests — loading, batch failure semantics, config,
//! and the end-to-end processor pipeline over `test_fixtures/`.

use medgraph_core::loader;
use medgraph_core::{
    ActorResolution, DataError, DatasetConfig, DatasetProcessor, DateRange, IdField,
};
use std::path::PathBuf;

// ============================================================================
// Fixture helpers
// ============================================================================

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
        .display()
        .to_string()
}

fn fixture_config() -> DatasetConfig {
    DatasetConfig {
        events: vec![fixture("events_mend.csv")],
        actors: Some(fixture("actors.csv")),
        ..Default::default()
    }
}

fn date(s: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// ============================================================================
// Loader
// ============================================================================

mod loading {
    use super::*;

    #[test]
    fn event_rows_keep_source_columns() {
        let events = loader::load_events(&[fixture("events_mend.csv")]).unwrap();
        assert_eq!(events.len(), 1);

        let rows = &events[0];
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].event_id.as_deref(), Some("E001"));
        assert_eq!(
            rows[0].third_party_id_mend.as_deref(),
            Some("RUS;CHN;USA")
        );
        // E004's empty id field comes back as None, which the builder
        // skips just like an empty string
        assert_eq!(rows[3].third_party_id_mend, None);
    }

    #[test]
    fn actor_rows_resolve_names_and_groups() {
        let actors = loader::load_actors(fixture("actors.csv")).unwrap();
        assert_eq!(actors.len(), 5);

        let unsmil = actors.iter().find(|a| a.glopad_id == "UNSMIL").unwrap();
        assert_eq!(
            unsmil.actor_name.as_deref(),
            Some("United Nations Support Mission in Libya")
        );
        assert_eq!(unsmil.classification.as_deref(), Some("organization"));
    }

    #[test]
    fn empty_delimited_field_loads_as_none_and_contributes_nothing() {
        let events = loader::load_events(&[fixture("events_mend.csv")]).unwrap();

        let row = &events[0][3];
        assert_eq!(row.event_id.as_deref(), Some("E004"));
        assert_eq!(row.third_party_id_mend, None);

        let graph =
            medgraph_core::GraphBuilder::default().build(std::slice::from_ref(row), &[]);
        assert!(graph.nodes.is_empty());
        assert!(graph.links.is_empty());
    }

    #[test]
    fn one_missing_path_fails_the_whole_batch() {
        let result = loader::load_events(&[
            fixture("events_mend.csv"),
            fixture("does_not_exist.csv"),
        ]);

        match result {
            Err(DataError::Fetch { path, .. }) => assert!(path.contains("does_not_exist")),
            other => panic!("Expected Fetch error, got: {other:?}"),
        }
    }

    #[test]
    fn malformed_rows_surface_as_parse_errors() {
        let result = loader::load_actors(fixture("bad_actors.csv"));

        match result {
            Err(DataError::Parse { path, .. }) => assert!(path.contains("bad_actors")),
            other => panic!("Expected Parse error, got: {other:?}"),
        }
    }

    #[test]
    fn data_errors_name_the_offending_path() {
        let fetch = loader::load_actors(fixture("does_not_exist.csv")).unwrap_err();
        assert!(fetch.path().contains("does_not_exist.csv"));

        let parse = loader::load_actors(fixture("bad_actors.csv")).unwrap_err();
        assert!(parse.path().contains("bad_actors.csv"));
    }

    #[test]
    fn geo_batch_loads_feature_collections() {
        let docs = loader::load_geo_batch(&[fixture("regions.geojson")]).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["type"], "FeatureCollection");
        assert!(docs[0]["features"].is_array());
    }

    #[test]
    fn broken_geo_fails_the_whole_batch() {
        let result =
            loader::load_geo_batch(&[fixture("regions.geojson"), fixture("broken.geojson")]);
        assert!(matches!(result, Err(DataError::Parse { .. })));
    }
}

// ============================================================================
// Config
// ============================================================================

mod config {
    use super::*;

    #[test]
    fn yaml_config_round_trips_variant_fields() {
        let config = DatasetConfig::load_from_file(&fixture("dataset.yaml")).unwrap();

        assert_eq!(config.events.len(), 1);
        assert_eq!(config.actors.as_deref(), Some("test_fixtures/actors.csv"));
        assert_eq!(config.id_field, IdField::Glopad);
        assert_eq!(config.resolution, ActorResolution::NameOnly);
        assert_eq!(config.date_format, "%Y-%m-%d");
    }

    #[test]
    fn missing_config_is_an_error_not_a_silent_default() {
        assert!(DatasetConfig::load_from_file("no/such/config.yaml").is_err());
    }

    #[test]
    fn malformed_yaml_is_an_error_not_a_silent_default() {
        assert!(DatasetConfig::load_from_file(&fixture("broken.yaml")).is_err());
    }

    #[test]
    fn defaults_cover_every_optional_field() {
        let config = DatasetConfig::default();
        assert!(config.events.is_empty());
        assert!(config.actors.is_none());
        assert_eq!(config.id_field, IdField::Mend);
        assert_eq!(config.resolution, ActorResolution::Full);
        assert_eq!(config.date_format, "%Y-%m-%d");
    }
}

// ============================================================================
// Processor pipeline
// ============================================================================

mod pipeline {
    use super::*;

    #[test]
    fn full_timeline_graph_from_fixtures() {
        let processor = DatasetProcessor::new(fixture_config());
        let graph = processor.build_graph().unwrap();

        // Distinct ids across E001, E002, E003, E005 (E004 is empty)
        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["RUS", "CHN", "USA", "EGY", "PAK", "IRN"]);

        // RUS–CHN co-occurs in E001, E003, E005
        let rus_chn = graph.link("RUS", "CHN").unwrap();
        assert_eq!(rus_chn.value, 3);

        // Reference table resolves known actors; USA is absent from it
        assert_eq!(graph.node("CHN").unwrap().name, "China");
        assert_eq!(graph.node("USA").unwrap().name, "USA");
        assert_eq!(graph.node("USA").unwrap().group, "actor");

        assert_eq!(graph.profile.total_nodes, 6);
        assert_eq!(graph.profile.dataset_variant, IdField::Mend);
    }

    #[test]
    fn date_filter_restricts_contributing_events() {
        let processor = DatasetProcessor::new(fixture_config());
        let range = DateRange::new(Some(date("2024-01-01")), Some(date("2024-07-31")));
        let graph = processor.build_graph_filtered(&range, false).unwrap();

        // Only E003 (2024-07-25) is in range
        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["RUS", "CHN"]);
        assert_eq!(graph.link("RUS", "CHN").unwrap().value, 1);
    }

    #[test]
    fn glopad_variant_reads_its_own_column() {
        let config = DatasetConfig {
            events: vec![fixture("events_glopad.csv")],
            actors: Some(fixture("actors.csv")),
            id_field: IdField::Glopad,
            ..Default::default()
        };
        let graph = DatasetProcessor::new(config).build_graph().unwrap();

        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["RUS", "TUR", "IRN"]);
        assert_eq!(graph.link("RUS", "TUR").unwrap().value, 2);
        assert_eq!(graph.link("TUR", "IRN").unwrap().value, 1);
    }

    #[test]
    fn missing_event_file_fails_the_run() {
        let config = DatasetConfig {
            events: vec![fixture("does_not_exist.csv")],
            ..Default::default()
        };
        let result = DatasetProcessor::new(config).build_graph();
        assert!(result.is_err());
    }

    #[test]
    fn no_actor_table_means_id_fallback_everywhere() {
        let config = DatasetConfig {
            events: vec![fixture("events_mend.csv")],
            ..Default::default()
        };
        let graph = DatasetProcessor::new(config).build_graph().unwrap();

        for node in &graph.nodes {
            assert_eq!(node.name, node.id);
            assert_eq!(node.group, "actor");
        }
    }
}
