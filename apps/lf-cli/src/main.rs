use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use lf_analysis::{ConnectedComponents, CutPairs, FlowNetwork, MaxFlow, PrimMst, ShortestPaths};
use lf_core::VertexId;
use lf_graph::Medium;

mod error;
mod loader;

use error::AppResult;
use loader::load_topology;

#[derive(Parser)]
#[command(name = "lf-cli")]
#[command(about = "linkflow CLI - network topology analysis tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the lowest-latency path between two vertices
    Route {
        /// Path to the topology file
        topology: PathBuf,
        /// Starting vertex
        source: u32,
        /// Ending vertex
        dest: u32,
    },
    /// Determine whether the network is connected over copper alone
    Copper {
        /// Path to the topology file
        topology: PathBuf,
    },
    /// Compute the maximum flow and minimum cut between two vertices
    MaxFlow {
        /// Path to the topology file
        topology: PathBuf,
        /// Source vertex
        source: u32,
        /// Sink vertex
        sink: u32,
    },
    /// Compute the minimum-latency spanning tree
    Mst {
        /// Path to the topology file
        topology: PathBuf,
        /// Vertex to grow the tree from
        #[arg(long, default_value_t = 0)]
        start: u32,
    },
    /// List all vertex pairs whose removal disconnects the network
    CutPairs {
        /// Path to the topology file
        topology: PathBuf,
    },
    /// Show topology summary
    Info {
        /// Path to the topology file
        topology: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Route {
            topology,
            source,
            dest,
        } => cmd_route(&topology, source, dest),
        Commands::Copper { topology } => cmd_copper(&topology),
        Commands::MaxFlow {
            topology,
            source,
            sink,
        } => cmd_max_flow(&topology, source, sink),
        Commands::Mst { topology, start } => cmd_mst(&topology, start),
        Commands::CutPairs { topology } => cmd_cut_pairs(&topology),
        Commands::Info { topology } => cmd_info(&topology),
    }
}

fn vertex(i: u32) -> VertexId {
    VertexId::from_index(i)
}

/// Print a latency in engineering-friendly microseconds.
fn fmt_latency(seconds: f64) -> String {
    format!("{:.3} us", seconds * 1e6)
}

fn cmd_route(topology: &Path, source: u32, dest: u32) -> AppResult<()> {
    let graph = load_topology(topology)?;
    let sp = ShortestPaths::new(&graph, vertex(source))?;

    if !sp.has_path_to(vertex(dest))? {
        println!("{source} to {dest}: no path");
        return Ok(());
    }

    let path = sp.path_to(vertex(dest))?.unwrap_or_default();
    println!(
        "{source} to {dest} ({})",
        fmt_latency(sp.dist_to(vertex(dest))?)
    );

    let mut min_bandwidth = u32::MAX;
    for edge_id in &path {
        let edge = &graph.edges()[edge_id.index() as usize];
        min_bandwidth = min_bandwidth.min(edge.bandwidth());
        println!("  {edge}  ({})", fmt_latency(edge.latency().value));
    }
    if !path.is_empty() {
        println!("minimum bandwidth along path: {min_bandwidth}");
    }
    Ok(())
}

fn cmd_copper(topology: &Path) -> AppResult<()> {
    let graph = load_topology(topology)?;
    let cc = ConnectedComponents::by_medium(&graph, Medium::Copper);

    if cc.count() > 1 {
        println!("network is NOT copper-connected: {} components", cc.count());
    } else {
        println!("network is copper-connected");
    }

    // List the vertices of each component.
    let mut components: Vec<Vec<u32>> = vec![Vec::new(); cc.count() as usize];
    for i in 0..graph.vertex_count() as u32 {
        if let Some(id) = cc.id(vertex(i)) {
            components[id as usize].push(i);
        }
    }
    for (id, members) in components.iter().enumerate() {
        let rendered: Vec<String> = members.iter().map(u32::to_string).collect();
        println!("  component {id}: {}", rendered.join(" "));
    }
    Ok(())
}

fn cmd_max_flow(topology: &Path, source: u32, sink: u32) -> AppResult<()> {
    let graph = load_topology(topology)?;
    let flow = MaxFlow::new(FlowNetwork::from_graph(&graph), vertex(source), vertex(sink))?;

    println!("max flow from {source} to {sink}");
    for flow_edge in flow.network().edges() {
        if flow_edge.flow() > 0.0 {
            println!(
                "  {} -> {}: {} / {}",
                flow_edge.from(),
                flow_edge.to(),
                flow_edge.flow(),
                flow_edge.capacity()
            );
        }
    }

    let cut: Vec<String> = (0..graph.vertex_count() as u32)
        .filter(|&i| flow.in_cut(vertex(i)).unwrap_or(false))
        .map(|i| i.to_string())
        .collect();
    println!("min cut (source side): {}", cut.join(" "));
    println!("max flow value = {}", flow.value());
    Ok(())
}

fn cmd_mst(topology: &Path, start: u32) -> AppResult<()> {
    let graph = load_topology(topology)?;
    let mst = PrimMst::new(&graph, vertex(start))?;

    println!("minimum-latency spanning tree from {start}");
    for edge_id in mst.edges() {
        let edge = &graph.edges()[edge_id.index() as usize];
        println!("  {edge}  ({})", fmt_latency(edge.latency().value));
    }
    println!("total latency: {}", fmt_latency(mst.weight()));
    Ok(())
}

fn cmd_cut_pairs(topology: &Path) -> AppResult<()> {
    let graph = load_topology(topology)?;
    let cut = CutPairs::new(&graph);

    if cut.pairs().is_empty() {
        println!("no vertex pair disconnects the network");
        return Ok(());
    }
    println!("disconnecting vertex pairs:");
    for (a, b) in cut.pairs() {
        println!("  {a} {b}");
    }
    Ok(())
}

fn cmd_info(topology: &Path) -> AppResult<()> {
    let graph = load_topology(topology)?;

    let copper = graph
        .edges()
        .iter()
        .filter(|e| e.medium() == Medium::Copper)
        .count();
    let optical = graph.edge_count() - copper;

    println!("vertices: {}", graph.vertex_count());
    println!("edges:    {}", graph.edge_count());
    println!("  copper:  {copper}");
    println!("  optical: {optical}");
    Ok(())
}
