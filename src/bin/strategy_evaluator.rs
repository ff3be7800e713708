use anyhow::Result;
use clap::Parser;
use eight_puzzle::comparison::{compare, CompareBudgets};
use eight_puzzle::engine::Puzzle;
use std::collections::BTreeMap;

const NUM_SCRAMBLES_FOR_EVALUATION: usize = 20;
const START_SEED: u64 = 0;
const SCRAMBLE_STEPS: usize = 30;
// Enough for BFS to visit every reachable state.
const MAX_NODES: u64 = 200_000;
const DFS_DEPTH_LIMIT: usize = 31;

/// Compares BFS, DFS, A*(h1) and A*(h2) over seeded scrambles.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of scrambled states to evaluate
    #[clap(short, long, default_value_t = NUM_SCRAMBLES_FOR_EVALUATION)]
    count: usize,

    /// Seed of the first scramble; later scrambles use consecutive seeds, wrapping at u64::MAX
    #[clap(long, default_value_t = START_SEED)]
    seed: u64,

    /// Random moves per scramble
    #[clap(long, default_value_t = SCRAMBLE_STEPS)]
    steps: usize,

    /// Node budget for every strategy
    #[clap(short, long, default_value_t = MAX_NODES)]
    max_nodes: u64,

    /// Depth limit for DFS
    #[clap(short, long, default_value_t = DFS_DEPTH_LIMIT)]
    depth_limit: usize,
}

#[derive(Default)]
struct Totals {
    solved: usize,
    nodes: u64,
    depth: usize,
    branching: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let budgets = CompareBudgets::uniform(args.max_nodes, args.depth_limit);

    // Keyed by report position so the summary keeps BFS, DFS, A*(h1), A*(h2) order.
    let mut totals: BTreeMap<usize, (String, Totals)> = BTreeMap::new();

    println!(
        "Starting strategy evaluation for {} scrambles of {} moves...",
        args.count, args.steps
    );

    for idx in 0..args.count {
        let seed = args.seed.wrapping_add(idx as u64);
        let mut puzzle = Puzzle::new();
        puzzle.set_seed(seed);
        puzzle.scramble(args.steps);

        println!("\nEvaluating Scramble {} (Seed: {})", idx, seed);
        println!("{}", puzzle.state());

        let rows = compare(puzzle.state(), &budgets)?;
        for (pos, row) in rows.iter().enumerate() {
            if row.solved {
                println!(
                    "  Strategy: {:<8} Nodes: {:<8} Depth: {:<4} b*: {}",
                    row.label(),
                    row.nodes_created,
                    row.depth,
                    row.branching_factor
                );
            } else {
                eprintln!(
                    "[strategy_evaluator] {} gave up on scramble {} (seed {})",
                    row.label(),
                    idx,
                    seed
                );
            }

            let (_, entry) = totals
                .entry(pos)
                .or_insert_with(|| (row.label(), Totals::default()));
            if row.solved {
                entry.solved += 1;
                entry.nodes += row.nodes_created;
                entry.depth += row.depth;
                entry.branching += row.branching_factor;
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of scrambles evaluated: {}", args.count);
    println!("\n--- Averages over solved scrambles ---");

    for (label, t) in totals.values() {
        if t.solved == 0 {
            println!("Strategy {:<8}: No solutions found.", label);
            continue;
        }
        let n = t.solved as f64;
        println!(
            "Strategy {:<8}: Solved = {}/{}, Avg Nodes = {:.1}, Avg Depth = {:.2}, Avg b* = {:.4}",
            label,
            t.solved,
            args.count,
            t.nodes as f64 / n,
            t.depth as f64 / n,
            t.branching / n
        );
    }
    Ok(())
}
