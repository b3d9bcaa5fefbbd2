use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vertex_cutsets::input::{self, LabelId, LabeledGraph};
use vertex_cutsets::{
    bfs_order, components_excluding, find_k_cutset, min_vertex_cutsets_within, par_find_k_cutset,
    par_min_vertex_cutsets_within, Cutset, MinimumCutsets, Result,
};

#[derive(Parser)]
#[command(
    name = "vertex-cutsets",
    version,
    about = "Find vertex cutsets of small undirected graphs"
)]
struct Cli {
    /// Edge list to analyse, one `a b` edge or `a` node per line
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,
    /// Analyse a random graph with this many nodes instead
    #[arg(long)]
    random: Option<usize>,
    /// Edge probability of the random graph
    #[arg(long, default_value_t = 0.3)]
    probability: f64,
    /// Seed of the random graph
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Report the first cutset of this size, may be repeated.
    /// Without it the vertex-connectivity and all minimum cutsets are reported
    #[arg(short = 'k', long = "size")]
    sizes: Vec<usize>,
    /// Largest cutset size the minimum search tries
    #[arg(long, conflicts_with = "sizes")]
    max_size: Option<usize>,
    /// Evaluate candidates on all cores
    #[arg(long)]
    parallel: bool,
    /// Candidates handed to the thread pool at once
    #[arg(long, default_value_t = 4096)]
    batch_size: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let graph = load_graph(cli)?;
    println!(
        "Graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    if let Some(order) = format_traversal(&graph)? {
        println!("{}", order);
    }

    if cli.sizes.is_empty() {
        let minimum = if cli.parallel {
            par_min_vertex_cutsets_within(graph.graph(), cli.max_size, cli.batch_size)?
        } else {
            min_vertex_cutsets_within(graph.graph(), cli.max_size)?
        };
        println!("{}", format_minimum(&graph, &minimum));
    } else {
        for &k in &cli.sizes {
            let cutset = if cli.parallel {
                par_find_k_cutset(graph.graph(), k, cli.batch_size)?
            } else {
                find_k_cutset(graph.graph(), k)?
            };
            println!("{}", format_k_cutset(&graph, k, cutset.as_ref()));
        }
    }
    Ok(())
}

fn load_graph(cli: &Cli) -> Result<LabeledGraph> {
    match (&cli.input, cli.random) {
        (Some(path), _) => {
            info!(path = %path.display(), "reading edge list");
            input::parse_edge_list(&fs::read_to_string(path)?)
        }
        (None, Some(nodes)) => input::random_graph(nodes, cli.probability, cli.seed),
        (None, None) => Ok(input::double_star()),
    }
}

/// Traversal order from the first node, `None` for an empty graph
fn format_traversal(graph: &LabeledGraph) -> Result<Option<String>> {
    let Some(start) = graph.graph().nodes().next() else {
        return Ok(None);
    };
    let order = bfs_order(graph.graph(), start)?;
    Ok(Some(format!(
        "Traversal order: {}",
        labels(graph, &order).join(" ")
    )))
}

fn format_k_cutset(graph: &LabeledGraph, k: usize, cutset: Option<&Cutset<LabelId>>) -> String {
    let Some(cutset) = cutset else {
        return format!(
            "No {k}-cutset exists\n  the graph cannot be disconnected by removing {k} nodes"
        );
    };

    let header = format!("Cutset found for k = {}: {}", k, format_cutset(graph, cutset));
    let components = components_excluding(graph.graph(), &cutset.exclusion_set());
    if components.is_empty() {
        return format!("{}\n  no nodes left after removal", header);
    }

    let parts: Vec<String> = components
        .iter()
        .map(|component| format!("[{}]", labels(graph, component).join(" ")))
        .collect();
    format!(
        "{}\n  removal leaves {} components: {}",
        header,
        components.len(),
        parts.join(" ")
    )
}

fn format_minimum(graph: &LabeledGraph, minimum: &MinimumCutsets<LabelId>) -> String {
    match (minimum.connectivity, minimum.capped_at) {
        (Some(k), _) => {
            let mut lines = vec![
                format!("Vertex-connectivity: {}", k),
                format!("Minimum cutsets ({}):", minimum.cutsets.len()),
            ];
            lines.extend(
                minimum
                    .cutsets
                    .iter()
                    .map(|cutset| format!("  {}", format_cutset(graph, cutset))),
            );
            lines.join("\n")
        }
        (None, Some(max)) => format!(
            "No cutset of size <= {} exists\n  larger sizes were not searched",
            max
        ),
        (None, None) => "No proper subset of the nodes disconnects the graph".to_string(),
    }
}

fn format_cutset(graph: &LabeledGraph, cutset: &Cutset<LabelId>) -> String {
    format!("{{{}}}", labels(graph, &cutset.nodes).join(", "))
}

fn labels<'a>(graph: &'a LabeledGraph, nodes: &[LabelId]) -> Vec<&'a str> {
    nodes.iter().map(|&node| graph.label(node)).collect()
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use vertex_cutsets::input::{double_star, parse_edge_list, LabeledGraph};
    use vertex_cutsets::{find_k_cutset, min_vertex_cutsets_within};

    use crate::{format_k_cutset, format_minimum, format_traversal, Cli};

    fn cycle() -> LabeledGraph {
        parse_edge_list("0 1\n1 2\n2 3\n3 0\n").unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn size_limit_conflicts_with_fixed_sizes() {
        let result = Cli::try_parse_from(["vertex-cutsets", "-k", "2", "--max-size", "3"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["vertex-cutsets", "--max-size", "3"]).unwrap();
        assert_eq!(Some(3), cli.max_size);
    }

    #[test]
    fn traversal_of_double_star() {
        let graph = double_star();
        assert_eq!(
            Some("Traversal order: A B C D E F".to_string()),
            format_traversal(&graph).unwrap()
        );
        assert_eq!(None, format_traversal(&LabeledGraph::new()).unwrap());
    }

    #[test]
    fn first_cutset_report() {
        let graph = double_star();
        let cutset = find_k_cutset(graph.graph(), 1).unwrap();
        assert_eq!(
            "Cutset found for k = 1: {A}\n  removal leaves 3 components: [B] [C] [D E F]",
            format_k_cutset(&graph, 1, cutset.as_ref())
        );
    }

    #[test]
    fn missing_cutset_report() {
        let graph = cycle();
        let cutset = find_k_cutset(graph.graph(), 1).unwrap();
        assert_eq!(
            "No 1-cutset exists\n  the graph cannot be disconnected by removing 1 nodes",
            format_k_cutset(&graph, 1, cutset.as_ref())
        );
    }

    #[test]
    fn full_removal_report() {
        let graph = cycle();
        let cutset = find_k_cutset(graph.graph(), 4).unwrap();
        assert_eq!(
            "Cutset found for k = 4: {0, 1, 2, 3}\n  no nodes left after removal",
            format_k_cutset(&graph, 4, cutset.as_ref())
        );
    }

    #[test]
    fn minimum_report_of_double_star() {
        let graph = double_star();
        let minimum = min_vertex_cutsets_within(graph.graph(), None).unwrap();
        assert_eq!(
            "Vertex-connectivity: 1\nMinimum cutsets (2):\n  {A}\n  {D}",
            format_minimum(&graph, &minimum)
        );
    }

    #[test]
    fn capped_minimum_report_does_not_claim_robustness() {
        let graph = cycle();
        let minimum = min_vertex_cutsets_within(graph.graph(), Some(1)).unwrap();
        assert_eq!(
            "No cutset of size <= 1 exists\n  larger sizes were not searched",
            format_minimum(&graph, &minimum)
        );

        let minimum = min_vertex_cutsets_within(graph.graph(), Some(2)).unwrap();
        assert_eq!(
            "Vertex-connectivity: 2\nMinimum cutsets (2):\n  {0, 2}\n  {1, 3}",
            format_minimum(&graph, &minimum)
        );
    }

    #[test]
    fn complete_graph_minimum_report() {
        let graph = parse_edge_list("A B\nB C\nC A\n").unwrap();
        let minimum = min_vertex_cutsets_within(graph.graph(), None).unwrap();
        assert_eq!(
            "No proper subset of the nodes disconnects the graph",
            format_minimum(&graph, &minimum)
        );
    }
}
