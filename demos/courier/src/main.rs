//! courier — list every route between two junctions of the delivery map.
//!
//! Prints the route catalog as JSON and, with `--execute N`, hands route N
//! to the vehicle.  No vehicle is attached in this demo, so execution runs
//! in simulation mode.
//!
//! `--edges`, `--edge KEY` and `--status` print the track segments or the
//! vehicle's reachability instead of the route catalog.
//!
//! ```text
//! RUST_LOG=debug courier --from A --to G --model angle --execute 1
//! courier --edge BE
//! ```

mod network;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use dr_core::{CostModel, RouteConfig, RouteId};
use dr_dispatch::{OfflineDispatcher, RouteCatalog, edge_summaries, find_edge, status};
use dr_graph::{RouteEnumerator, load_graph_json};

#[derive(Parser, Debug)]
#[command(name = "courier", about = "Enumerate and dispatch delivery routes")]
struct Args {
    /// Start junction.
    #[arg(long, default_value = "A")]
    from: String,

    /// Destination junction.
    #[arg(long, default_value = "G")]
    to: String,

    /// Cost model: distance, angle, or count.  Overrides the config file.
    #[arg(long)]
    model: Option<CostModel>,

    /// JSON file with a `RouteConfig` (`average_speed`, `cost_model`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON graph file to use instead of the built-in delivery map.
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Catalog number of a route to execute.
    #[arg(long)]
    execute: Option<u32>,

    /// Print the short list view instead of full route details.
    #[arg(long)]
    summary: bool,

    /// List every edge of the map and exit.
    #[arg(long, conflicts_with = "edge")]
    edges: bool,

    /// Show the edge with this key (e.g. `AB`) and exit.
    #[arg(long, value_name = "KEY")]
    edge: Option<String>,

    /// Report whether the vehicle is reachable and exit.
    #[arg(long)]
    status: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.status {
        println!("{}", serde_json::to_string_pretty(&status(&OfflineDispatcher))?);
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader::<_, RouteConfig>(BufReader::new(file))
                .with_context(|| format!("reading config {}", path.display()))?
        }
        None => RouteConfig::default(),
    };
    if let Some(model) = args.model {
        config.cost_model = model;
    }
    config.validate()?;

    let graph = match &args.graph {
        Some(path) => load_graph_json(path).with_context(|| format!("loading graph {}", path.display()))?,
        None => network::build_network()?,
    };
    log::info!(
        "map: {} junctions, {} edges; cost model {}",
        graph.node_count(),
        graph.edge_count(),
        config.cost_model
    );

    if args.edges {
        println!("{}", serde_json::to_string_pretty(&edge_summaries(&graph, RouteCatalog::DEFAULT_UNIT))?);
        return Ok(());
    }
    if let Some(key) = &args.edge {
        let Some(edge) = find_edge(&graph, key, RouteCatalog::DEFAULT_UNIT) else {
            bail!("no edge with key {key:?}");
        };
        println!("{}", serde_json::to_string_pretty(&edge)?);
        return Ok(());
    }

    graph.require(&args.from)?;
    graph.require(&args.to)?;

    let enumerator = RouteEnumerator::new(graph, config);
    let catalog = RouteCatalog::from_enumerator(&enumerator, &args.from, &args.to);
    if catalog.is_empty() {
        log::warn!("no routes from {} to {}", args.from, args.to);
    } else {
        log::info!("{} routes from {} to {}", catalog.len(), args.from, args.to);
    }
    if args.summary {
        println!("{}", serde_json::to_string_pretty(&catalog.summaries())?);
    } else {
        println!("{}", serde_json::to_string_pretty(catalog.details())?);
    }

    if let Some(n) = args.execute {
        let report = catalog.execute(RouteId(n), &mut OfflineDispatcher);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
