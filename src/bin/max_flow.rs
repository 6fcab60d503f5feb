//! Headless harness: reads a flow network, prints the maximum flow and the flow on every edge.

use anyhow::{Context, Result};
use clap::Parser;
use max_flow_trace::instance::{Format, Instance};
use max_flow_trace::{EdmondsKarp, FlowError, IterationRecord, MaxFlow, ResidualGraph};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "max-flow")]
#[command(about = "Maximum flow by Edmonds-Karp, with the augmenting path of every iteration")]
struct Args {
    /// Instance file
    input: PathBuf,

    /// Input format; inferred from the file extension when omitted
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Override the instance's source node
    #[arg(short, long)]
    source: Option<usize>,

    /// Override the instance's sink node
    #[arg(short = 't', long)]
    sink: Option<usize>,

    /// Stop after this many augmenting iterations
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Print every iteration record
    #[arg(long)]
    trace: bool,

    /// Print the source side of a minimum cut
    #[arg(long)]
    cut: bool,

    /// Print the whole result as JSON
    #[arg(long)]
    json: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct EdgeFlow {
    from: usize,
    to: usize,
    flow: i64,
    capacity: i64,
}

#[derive(Serialize)]
struct Report<'a> {
    source: usize,
    sink: usize,
    #[serde(flatten)]
    result: &'a MaxFlow<i64>,
    edges: Vec<EdgeFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cut: Option<Vec<usize>>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let format = args.format.unwrap_or_else(|| Format::from_path(&args.input));
    let instance = Instance::read(&args.input, format).with_context(|| format!("failed to load {}", args.input.display()))?;
    let source = args.source.unwrap_or(instance.source);
    let sink = args.sink.unwrap_or(instance.sink);

    let mut graph = instance.build_graph().context("invalid flow network")?;
    log::info!("loaded {} nodes and {} edges from {}", graph.num_nodes(), graph.num_edges(), args.input.display());

    let mut solver = match args.max_iterations {
        Some(limit) => EdmondsKarp::default().with_iteration_limit(limit),
        None => EdmondsKarp::default(),
    };
    let result = match solver.solve(source, sink, &mut graph) {
        Ok(result) => result,
        Err(FlowError::CapacityOverflow { iterations, partial }) => {
            anyhow::bail!("flow overflowed after {} iterations (partial flow {})", iterations, partial.flow);
        }
        Err(e) => return Err(e).context("cannot compute the maximum flow"),
    };

    let edges = edge_flows(&graph);
    let cut = args.cut.then(|| graph.minimum_cut(source));

    if args.json {
        let report = Report { source, sink, result: &result, edges, cut };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("maximum flow: {}", result.flow);
    println!("status: {:?}", result.status);
    if args.trace {
        println!("iterations:");
        for record in &result.trace {
            println!("  {}", describe(record));
        }
    }
    println!("edge flows:");
    for e in &edges {
        println!("  {} -> {}: {}/{}", e.from, e.to, e.flow, e.capacity);
    }
    if let Some(cut) = cut {
        let nodes: Vec<String> = cut.iter().map(usize::to_string).collect();
        println!("minimum cut source side: {{{}}}", nodes.join(", "));
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn edge_flows(graph: &ResidualGraph<i64>) -> Vec<EdgeFlow> {
    graph.actual_flows().into_iter().map(|(from, to, flow)| EdgeFlow { from, to, flow, capacity: graph.capacity(from, to) }).collect()
}

fn describe(record: &IterationRecord<i64>) -> String {
    if record.is_terminal() {
        return format!("{}: no augmenting path, total {}", record.iteration, record.cumulative_flow);
    }
    let nodes: Vec<String> = record.nodes().iter().map(usize::to_string).collect();
    format!("{}: {} (path flow {}, total {})", record.iteration, nodes.join(" -> "), record.path_flow, record.cumulative_flow)
}
