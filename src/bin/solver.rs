use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use eight_puzzle::branching::effective_branching_factor;
use eight_puzzle::engine::State;
use eight_puzzle::heuristics::Heuristic;
use eight_puzzle::report::outcome_lines;
use eight_puzzle::solver::{search, Strategy, DEFAULT_DEPTH_LIMIT, DEFAULT_MAX_NODES};
use eight_puzzle::utils::{format_moves, parse_state, state_from_tokens};
use std::fs;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Bfs,
    Dfs,
    Astar,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search strategy
    #[clap(short, long, value_enum, default_value_t = Algorithm::Bfs)]
    strategy: Algorithm,

    /// Heuristic for A* (h1 = misplaced tiles, h2 = Manhattan distance)
    #[clap(long, default_value = "h1")]
    heuristic: String,

    /// Maximum number of nodes the search may create
    #[clap(short, long, default_value_t = DEFAULT_MAX_NODES)]
    max_nodes: u64,

    /// Depth limit for DFS
    #[clap(short, long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    depth_limit: usize,

    /// File holding the 9 tiles of the initial state (whitespace or comma separated)
    #[clap(short, long, conflicts_with = "tiles")]
    file: Option<PathBuf>,

    /// The 9 tiles of the initial state in row-major order, 0 for the blank
    tiles: Vec<String>,
}

fn read_state(args: &Args) -> Result<State> {
    if let Some(path) = &args.file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read state file {}", path.display()))?;
        return parse_state(&content)
            .with_context(|| format!("Invalid state in {}", path.display()));
    }
    if args.tiles.is_empty() {
        bail!("No initial state given: pass 9 tiles or --file");
    }
    let tokens: Vec<&str> = args.tiles.iter().map(String::as_str).collect();
    state_from_tokens(&tokens).context("Invalid initial state")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let state = read_state(&args)?;

    let strategy = match args.strategy {
        Algorithm::Bfs => Strategy::BreadthFirst,
        Algorithm::Dfs => Strategy::DepthFirst {
            depth_limit: args.depth_limit,
        },
        Algorithm::Astar => Strategy::AStar(args.heuristic.parse::<Heuristic>()?),
    };

    println!("Initial state:\n{}\n", state);
    println!("Searching with {} (max nodes {})...\n", strategy, args.max_nodes);

    let outcome = search(strategy, &state, args.max_nodes)?;
    for line in outcome_lines(strategy, &outcome, args.max_nodes) {
        println!("{}", line);
    }

    match outcome.solution() {
        Some(solution) => {
            let b = effective_branching_factor(solution.nodes_created, solution.depth());
            println!("Effective branching factor: {}", b);
            println!("Moves: {}", format_moves(&solution.moves));
            Ok(())
        }
        None => {
            eprintln!(
                "[solver] gave up after creating {} nodes",
                outcome.nodes_created()
            );
            std::process::exit(2);
        }
    }
}
