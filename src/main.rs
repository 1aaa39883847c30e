use anyhow::Result;
use clap::Parser;

use herd_network_analyzer::config::AnalysisConfig;
use herd_network_analyzer::data::csv::load_interaction_pairs;
use herd_network_analyzer::graph::builder::GraphBuilder;
use herd_network_analyzer::{metrics, sim, storage};

#[derive(Parser, Debug)]
#[clap(
    name = "herd-network-analyzer",
    about = "Social network analysis and removal simulation for herd interaction data"
)]
struct Cli {
    /// Path to a CSV of interaction records (member_a, member_b[, count])
    #[clap(long)]
    input: Option<String>,

    /// Path to a previously saved graph snapshot (JSON adjacency map)
    #[clap(long)]
    graph: Option<String>,

    /// Output directory for results
    #[clap(long, default_value = "herd_results")]
    output_dir: String,

    /// Edge distance for the most frequently interacting pair
    #[clap(long, default_value = "0.2")]
    min_length: f64,

    /// Edge distance for a pair observed a single time
    #[clap(long, default_value = "2.0")]
    max_length: f64,

    /// Member to remove in a what-if simulation
    #[clap(long)]
    remove: Option<String>,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    log::info!("Starting herd network analysis");

    // 1. Obtain the baseline graph, either built from interaction records
    //    or reloaded from a snapshot.
    let graph = match (&args.input, &args.graph) {
        (Some(input), _) => {
            let pairs = load_interaction_pairs(input)?;
            let config = AnalysisConfig::new(args.min_length, args.max_length);
            GraphBuilder::from_pairs(&pairs, &config)?
        }
        (None, Some(snapshot)) => storage::load_graph(snapshot)?,
        (None, None) => anyhow::bail!("either --input or --graph must be provided"),
    };

    log::info!(
        "Baseline graph has {} members and {} edges",
        graph.member_count(),
        graph.edge_count()
    );

    // 2. Run the metric pipeline.
    let analysis = metrics::analyze(&graph);

    // 3. Save baseline results.
    storage::save_results(&analysis, &graph, &args.output_dir)?;

    // 4. Optional what-if removal.
    if let Some(member_id) = &args.remove {
        let result = sim::simulate_removal(&graph, member_id)?;
        println!("{}", result.summary);
        storage::save_simulation(&result, &args.output_dir)?;
    }

    log::info!("Analysis complete. Results saved to {}", args.output_dir);

    Ok(())
}
