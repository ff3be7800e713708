//! Uninformed and heuristic search over puzzle states.
//!
//! Breadth-first, depth-limited depth-first and A* search all run the same
//! expansion loop (`run`) and differ only in the frontier they hand it:
//! a FIFO queue, a LIFO stack or a priority queue ordered by `f = g + h`.
//! Each invocation owns its frontier and visited set, so searches are
//! independent and repeatable.
use crate::engine::{Move, State};
use crate::error::{Error, Result};
use crate::heuristics::Heuristic;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

/// Node budget used by the command interpreter when none is given.
pub const DEFAULT_MAX_NODES: u64 = 1000;

/// Depth limit used by the command interpreter for DFS when none is given.
pub const DEFAULT_DEPTH_LIMIT: usize = 31;

/// A search strategy together with its strategy-specific options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    BreadthFirst,
    /// Nodes deeper than `depth_limit` moves are discarded without expansion.
    DepthFirst { depth_limit: usize },
    AStar(Heuristic),
}

impl Strategy {
    /// Label used in reports: `BFS`, `DFS`, `A*(h1)` or `A*(h2)`.
    pub fn label(&self) -> String {
        match self {
            Strategy::BreadthFirst => "BFS".to_string(),
            Strategy::DepthFirst { .. } => "DFS".to_string(),
            Strategy::AStar(h) => format!("A*({})", h),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    /// Parses `BFS`, `DFS` or `A*` with default options (depth limit 31, `h1`).
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "BFS" => Ok(Strategy::BreadthFirst),
            "DFS" => Ok(Strategy::DepthFirst {
                depth_limit: DEFAULT_DEPTH_LIMIT,
            }),
            "A*" => Ok(Strategy::AStar(Heuristic::MisplacedTiles)),
            other => Err(Error::UnknownStrategy {
                name: other.to_string(),
            }),
        }
    }
}

/// Represents a solution found by a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Moves of the blank tile leading from the initial state to the goal.
    pub moves: Vec<Move>,
    /// Distinct states accepted from the frontier, goal included.
    pub nodes_created: u64,
}

impl Solution {
    /// Solution depth, i.e. the number of moves.
    pub fn depth(&self) -> usize {
        self.moves.len()
    }
}

/// Why a search stopped without reaching the goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exhaustion {
    /// `max_nodes` states were created and unexplored nodes remained.
    NodeBudget,
    /// The frontier ran dry. For DFS this usually means the depth limit cut
    /// off every remaining branch.
    FrontierEmpty,
}

/// Result of one search invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(Solution),
    Exhausted {
        reason: Exhaustion,
        nodes_created: u64,
    },
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            SearchOutcome::Exhausted { .. } => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            SearchOutcome::Exhausted { .. } => None,
        }
    }

    pub fn nodes_created(&self) -> u64 {
        match self {
            SearchOutcome::Solved(solution) => solution.nodes_created,
            SearchOutcome::Exhausted { nodes_created, .. } => *nodes_created,
        }
    }
}

/// Searches from `initial` towards the goal state with the given strategy.
///
/// An initial state that already is the goal is solved with an empty move
/// sequence and `nodes_created == 1` whatever the strategy.
///
/// # Errors
/// Returns `Error::InvalidBudget` if `max_nodes` is zero. Running out of
/// budget is reported as `SearchOutcome::Exhausted`, not as an error.
///
/// # Examples
/// ```
/// use eight_puzzle::engine::{Move, State};
/// use eight_puzzle::solver::{search, Strategy};
///
/// let state = State::new([1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
/// let outcome = search(Strategy::BreadthFirst, &state, 1000).unwrap();
/// assert_eq!(outcome.solution().unwrap().moves, vec![Move::Left]);
/// ```
pub fn search(strategy: Strategy, initial: &State, max_nodes: u64) -> Result<SearchOutcome> {
    if max_nodes == 0 {
        return Err(Error::InvalidBudget);
    }
    if initial.is_goal() {
        return Ok(SearchOutcome::Solved(Solution {
            moves: Vec::new(),
            nodes_created: 1,
        }));
    }

    let outcome = match strategy {
        Strategy::BreadthFirst => run(Fifo::default(), initial, max_nodes, None),
        Strategy::DepthFirst { depth_limit } => {
            run(Lifo::default(), initial, max_nodes, Some(depth_limit))
        }
        Strategy::AStar(heuristic) => run(BestFirst::new(heuristic), initial, max_nodes, None),
    };
    Ok(outcome)
}

/// Breadth-first search. The first goal dequeued has a minimum-length path.
pub fn solve_bfs(initial: &State, max_nodes: u64) -> Result<SearchOutcome> {
    search(Strategy::BreadthFirst, initial, max_nodes)
}

/// Depth-first search that never expands nodes deeper than `depth_limit`.
pub fn solve_dfs(initial: &State, max_nodes: u64, depth_limit: usize) -> Result<SearchOutcome> {
    search(Strategy::DepthFirst { depth_limit }, initial, max_nodes)
}

/// A* search guided by `heuristic`.
pub fn solve_astar(initial: &State, heuristic: Heuristic, max_nodes: u64) -> Result<SearchOutcome> {
    search(Strategy::AStar(heuristic), initial, max_nodes)
}

/// A search node. `depth` is both the number of moves taken and the cost
/// so far; the moves themselves are recovered through `link`.
struct Node {
    state: State,
    depth: usize,
    link: Option<usize>,
}

/// The move that produced a node, and the link of the node it was made from.
struct Link {
    parent: Option<usize>,
    mv: Move,
}

fn path_to(links: &[Link], mut link: Option<usize>) -> Vec<Move> {
    let mut moves = Vec::new();
    while let Some(idx) = link {
        moves.push(links[idx].mv);
        link = links[idx].parent;
    }
    moves.reverse();
    moves
}

trait Frontier {
    fn push(&mut self, node: Node);
    fn pop(&mut self) -> Option<Node>;
}

#[derive(Default)]
struct Fifo(VecDeque<Node>);

impl Frontier for Fifo {
    fn push(&mut self, node: Node) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<Node> {
        self.0.pop_front()
    }
}

/// Successors are pushed in move order, so the last one (down) pops first.
#[derive(Default)]
struct Lifo(Vec<Node>);

impl Frontier for Lifo {
    fn push(&mut self, node: Node) {
        self.0.push(node);
    }

    fn pop(&mut self) -> Option<Node> {
        self.0.pop()
    }
}

/// Priority-queue entry. Ordered by `f`, then `g`, then the tile sequence,
/// then insertion order, all ascending, which makes A* fully deterministic.
struct Ranked {
    f: u32,
    g: u32,
    seq: u64,
    node: Node,
}

impl Ranked {
    fn key(&self) -> (u32, u32, &State, u64) {
        (self.f, self.g, &self.node.state, self.seq)
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

struct BestFirst {
    heap: BinaryHeap<Reverse<Ranked>>,
    heuristic: Heuristic,
    goal: State,
    seq: u64,
}

impl BestFirst {
    fn new(heuristic: Heuristic) -> Self {
        BestFirst {
            heap: BinaryHeap::new(),
            heuristic,
            goal: State::goal(),
            seq: 0,
        }
    }
}

impl Frontier for BestFirst {
    fn push(&mut self, node: Node) {
        let g = node.depth as u32;
        let f = g + self.heuristic.evaluate(&node.state, &self.goal);
        self.heap.push(Reverse(Ranked {
            f,
            g,
            seq: self.seq,
            node,
        }));
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<Node> {
        self.heap.pop().map(|Reverse(ranked)| ranked.node)
    }
}

/// The shared expansion loop.
///
/// A popped node is skipped if it is deeper than `depth_limit` or its state
/// was already visited; otherwise it is accepted, counted and marked
/// visited. Once a state is visited it is never reconsidered, even when
/// reached again by a shorter path.
fn run<F: Frontier>(
    mut frontier: F,
    initial: &State,
    max_nodes: u64,
    depth_limit: Option<usize>,
) -> SearchOutcome {
    let mut visited: HashSet<State> = HashSet::new();
    let mut links: Vec<Link> = Vec::new();
    let mut nodes_created: u64 = 0;

    frontier.push(Node {
        state: *initial,
        depth: 0,
        link: None,
    });

    while let Some(node) = frontier.pop() {
        if depth_limit.is_some_and(|limit| node.depth > limit) {
            continue;
        }
        if visited.contains(&node.state) {
            continue;
        }
        if nodes_created >= max_nodes {
            return SearchOutcome::Exhausted {
                reason: Exhaustion::NodeBudget,
                nodes_created,
            };
        }

        visited.insert(node.state);
        nodes_created += 1;

        if node.state.is_goal() {
            return SearchOutcome::Solved(Solution {
                moves: path_to(&links, node.link),
                nodes_created,
            });
        }

        for (mv, next) in node.state.successors() {
            if visited.contains(&next) {
                continue;
            }
            links.push(Link {
                parent: node.link,
                mv,
            });
            frontier.push(Node {
                state: next,
                depth: node.depth + 1,
                link: Some(links.len() - 1),
            });
        }
    }

    SearchOutcome::Exhausted {
        reason: Exhaustion::FrontierEmpty,
        nodes_created,
    }
}
