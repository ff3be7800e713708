//! Runs every strategy on the same state and collects comparable figures.
use crate::branching::effective_branching_factor;
use crate::engine::{Move, State};
use crate::error::Result;
use crate::heuristics::Heuristic;
use crate::solver::{search, Strategy};

/// Independent budgets for each strategy in a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompareBudgets {
    pub bfs_max_nodes: u64,
    pub dfs_max_nodes: u64,
    pub dfs_depth_limit: usize,
    pub astar_h1_max_nodes: u64,
    pub astar_h2_max_nodes: u64,
}

impl Default for CompareBudgets {
    fn default() -> Self {
        CompareBudgets {
            bfs_max_nodes: 10_000,
            dfs_max_nodes: 10_000_000_000,
            dfs_depth_limit: 20_000,
            astar_h1_max_nodes: 10_000,
            astar_h2_max_nodes: 10_000,
        }
    }
}

impl CompareBudgets {
    /// Uses the same node budget for every strategy.
    pub fn uniform(max_nodes: u64, dfs_depth_limit: usize) -> Self {
        CompareBudgets {
            bfs_max_nodes: max_nodes,
            dfs_max_nodes: max_nodes,
            dfs_depth_limit,
            astar_h1_max_nodes: max_nodes,
            astar_h2_max_nodes: max_nodes,
        }
    }

    /// The four runs of a comparison, in report order.
    pub fn runs(&self) -> [(Strategy, u64); 4] {
        [
            (Strategy::BreadthFirst, self.bfs_max_nodes),
            (
                Strategy::DepthFirst {
                    depth_limit: self.dfs_depth_limit,
                },
                self.dfs_max_nodes,
            ),
            (
                Strategy::AStar(Heuristic::MisplacedTiles),
                self.astar_h1_max_nodes,
            ),
            (
                Strategy::AStar(Heuristic::Manhattan),
                self.astar_h2_max_nodes,
            ),
        ]
    }
}

/// One line of a comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub strategy: Strategy,
    /// Zero when the search did not reach the goal.
    pub nodes_created: u64,
    /// Zero when the search did not reach the goal.
    pub depth: usize,
    pub branching_factor: f64,
    pub moves: Vec<Move>,
    pub solved: bool,
}

impl ComparisonRow {
    pub fn label(&self) -> String {
        self.strategy.label()
    }
}

/// Runs BFS, DFS, A*(h1) and A*(h2) from `initial` and returns one row per
/// strategy, in that order.
///
/// A strategy that exhausts its budget contributes a row with zero nodes,
/// zero depth and `b* = 0`; the other strategies still run.
///
/// # Errors
/// Only configuration errors (a zero node budget) are returned.
pub fn compare(initial: &State, budgets: &CompareBudgets) -> Result<Vec<ComparisonRow>> {
    budgets
        .runs()
        .into_iter()
        .map(|(strategy, max_nodes)| {
            let outcome = search(strategy, initial, max_nodes)?;
            let solved = outcome.is_solved();
            let (moves, nodes_created) = match outcome.into_solution() {
                Some(solution) => (solution.moves, solution.nodes_created),
                None => (Vec::new(), 0),
            };
            let depth = moves.len();
            Ok(ComparisonRow {
                strategy,
                nodes_created,
                depth,
                branching_factor: effective_branching_factor(nodes_created, depth),
                moves,
                solved,
            })
        })
        .collect()
}
