use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::path::Path;

// Import from medgraph-core
use medgraph_core::{
    ActorResolution, DatasetConfig, DatasetProcessor, DateRange, IdField, MediationGraph,
};

#[derive(Parser)]
#[command(name = "medgraph")]
#[command(about = "Build actor co-occurrence graphs from mediation-event datasets")]
struct Args {
    /// Event CSV file(s) to process (repeatable)
    #[arg(short, long)]
    events: Vec<String>,

    /// Actor reference CSV file
    #[arg(short, long)]
    actors: Option<String>,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Which event column holds the third-party id list: mend or glopad
    #[arg(long, default_value = "mend")]
    id_field: String,

    /// Resolve display names only; every node gets the default group
    #[arg(long)]
    name_only: bool,

    /// Only include events on or after this date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<String>,

    /// Only include events on or before this date (YYYY-MM-DD)
    #[arg(long)]
    until: Option<String>,

    /// Output file path (if not specified, auto-generated based on input)
    #[arg(short, long)]
    output: Option<String>,

    /// Output format: graph, d3, or edgelist
    #[arg(short = 'f', long, default_value = "graph")]
    output_format: String,

    /// Print this actor's heaviest partners after building
    #[arg(long)]
    partners: Option<String>,

    /// Enable detailed profiling of all pipeline steps
    #[arg(long)]
    profile: bool,

    /// Show available config options and exit
    #[arg(long)]
    show_configs: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("🦀 Medgraph Network Builder");

    if args.show_configs {
        show_help();
        return Ok(());
    }

    // Load config, falling back to defaults, then apply CLI overrides
    let mut config = match args.config.as_deref() {
        Some(config_path) => match DatasetConfig::load_from_file(config_path) {
            Ok(config) => {
                println!("📋 Loaded config from: {}", config_path);
                config
            }
            Err(e) => {
                println!("⚠️  Could not load config from {}: {}", config_path, e);
                println!("📋 Using default config");
                DatasetConfig::default()
            }
        },
        None => {
            println!("📋 Using default config");
            DatasetConfig::default()
        }
    };

    if !args.events.is_empty() {
        config.events = args.events.clone();
    }
    if args.actors.is_some() {
        config.actors = args.actors.clone();
    }
    config.id_field = match args.id_field.as_str() {
        "glopad" => IdField::Glopad,
        "mend" => IdField::Mend,
        other => {
            eprintln!("❌ Unknown id field '{other}' (expected: mend, glopad)");
            std::process::exit(1);
        }
    };
    if args.name_only {
        config.resolution = ActorResolution::NameOnly;
    }

    if config.events.is_empty() {
        println!("⚠️  No event files given.");
        println!("   Pass --events <path> or list them in a config file.");
        return Ok(());
    }
    for path in &config.events {
        if !Path::new(path).exists() {
            println!("⚠️  Event file not found at: {}", path);
            println!("   Please check the file path.");
            return Ok(());
        }
    }

    let range = match parse_range(&args) {
        Ok(range) => range,
        Err(e) => {
            eprintln!("❌ Bad date filter: {e}");
            std::process::exit(1);
        }
    };

    println!("📄 Processing {} event table(s)", config.events.len());

    let processor = DatasetProcessor::new(config);
    match processor.build_graph_filtered(&range, args.profile) {
        Ok(graph) => {
            println!("✅ Successfully built co-occurrence graph");
            print_metrics(&graph);

            if let Some(actor_id) = &args.partners {
                print_partners(&graph, actor_id);
            }

            // Generate output path
            let output_path = if let Some(output) = &args.output {
                output.clone()
            } else {
                let input_name = processor
                    .config()
                    .events
                    .first()
                    .map(|p| Path::new(p))
                    .and_then(|p| p.file_stem())
                    .and_then(|s| s.to_str())
                    .unwrap_or("output");
                format!("{input_name}_medgraph.json")
            };

            save_graph(&graph, &output_path, &args.output_format)?;
        }
        Err(e) => {
            eprintln!("❌ Processing failed: {e}");
            if let Some(data_error) = e.downcast_ref::<medgraph_core::DataError>() {
                eprintln!("   Check the dataset file: {}", data_error.path());
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

fn parse_range(args: &Args) -> Result<DateRange> {
    let parse = |s: &str| -> Result<NaiveDate> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("'{s}' is not a YYYY-MM-DD date"))
    };
    let start = args.from.as_deref().map(parse).transpose()?;
    let end = args.until.as_deref().map(parse).transpose()?;
    Ok(DateRange::new(start, end))
}

fn print_metrics(graph: &MediationGraph) {
    println!("📊 Graph metrics:");
    println!("   - Nodes: {}", graph.nodes.len());
    println!("   - Links: {}", graph.links.len());
    println!("   - Total weight: {}", graph.profile.total_weight);

    let mut groups: Vec<(&String, &usize)> =
        graph.profile.group_distribution.counts.iter().collect();
    groups.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (group, count) in groups.iter().take(5) {
        println!("   - Group '{}': {} actors", group, count);
    }
}

fn print_partners(graph: &MediationGraph, actor_id: &str) {
    match graph.node(actor_id) {
        Some(node) => {
            println!("🤝 Top partners of {} ({}):", node.name, node.id);
            for (partner, value) in graph.top_partners(actor_id, 10) {
                let name = graph.node(partner).map(|n| n.name.as_str()).unwrap_or(partner);
                println!("   {:.<35} {} events", name, value);
            }
        }
        None => println!("⚠️  Actor '{}' not present in the graph", actor_id),
    }
}

fn show_help() {
    println!("\n📋 Available Configuration Options:");
    println!("  --config <path>         Load custom config file (YAML)");
    println!("  --events <path>         Event CSV file (repeat for multiple)");
    println!("  --actors <path>         Actor reference CSV file");
    println!("  --id-field <field>      Event id column: mend or glopad");
    println!("  --name-only             Skip group resolution (default group on every node)");
    println!("  --from / --until        Date filter (YYYY-MM-DD, inclusive)");
    println!("  --output <path>         Output file path (auto-generated if not specified)");
    println!("  --output-format <fmt>   Output format: graph, d3, or edgelist");

    println!("\n📄 Output Formats:");
    println!("  graph       - Nodes, links, and network profile (default)");
    println!("  d3          - Bare nodes/links for force-directed renderers");
    println!("  edgelist    - Flat source;target;value rows (minimal format)");

    println!("\n📝 Usage Examples:");
    println!("  cargo run -- -e events_2023.csv -e events_2024.csv -a actors.csv");
    println!("  cargo run -- -e events.csv -a actors.csv --id-field glopad -f d3");
    println!("  cargo run -- -c dataset.yaml --from 2023-10-01 --until 2023-11-30");
}

fn save_graph(graph: &MediationGraph, output_path: &str, format: &str) -> Result<()> {
    graph.save_with_format(output_path, format)?;

    match format {
        "d3" => println!("💾 D3 format results saved to: {}", output_path),
        "edgelist" => println!("💾 Edge list results saved to: {}", output_path),
        "graph" => println!("💾 Graph format results saved to: {}", output_path),
        _ => {
            println!("⚠️  Unknown output format '{}', using default graph format", format);
            println!("💾 Graph format results saved to: {}", output_path);
        }
    }

    Ok(())
}
