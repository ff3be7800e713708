//! Text rendering of search results for the binaries and the interpreter.
use crate::comparison::ComparisonRow;
use crate::solver::{Exhaustion, SearchOutcome, Solution, Strategy};

/// Lines printed for a successful search.
pub fn solution_lines(solution: &Solution) -> Vec<String> {
    let mut lines = vec![
        format!("Nodes created during search: {}", solution.nodes_created),
        format!("Solution length: {}", solution.depth()),
        "Move sequence:".to_string(),
    ];
    lines.extend(solution.moves.iter().map(|m| format!("move {}", m)));
    lines
}

/// Error line printed when a search stops without reaching the goal.
pub fn exhaustion_message(strategy: Strategy, reason: Exhaustion, max_nodes: u64) -> String {
    match (reason, strategy) {
        (Exhaustion::NodeBudget, _) => format!("Error: maxnodes limit ({}) reached", max_nodes),
        (Exhaustion::FrontierEmpty, Strategy::DepthFirst { depth_limit }) => format!(
            "Error: search space exhausted (depth limit {})",
            depth_limit
        ),
        (Exhaustion::FrontierEmpty, _) => {
            "Error: search space exhausted without reaching the goal".to_string()
        }
    }
}

/// Renders a whole outcome: the solution lines, or the exhaustion message.
pub fn outcome_lines(strategy: Strategy, outcome: &SearchOutcome, max_nodes: u64) -> Vec<String> {
    match outcome {
        SearchOutcome::Solved(solution) => solution_lines(solution),
        SearchOutcome::Exhausted { reason, .. } => {
            vec![exhaustion_message(strategy, *reason, max_nodes)]
        }
    }
}

/// Renders comparison rows as a grid table with one column per strategy and
/// the rows `d`, `Nodes Created` and `b*`.
///
/// # Examples
/// ```
/// use eight_puzzle::comparison::{compare, CompareBudgets};
/// use eight_puzzle::engine::State;
/// use eight_puzzle::report::comparison_table;
///
/// let rows = compare(&State::goal(), &CompareBudgets::default()).unwrap();
/// let table = comparison_table(&rows);
/// assert!(table.contains("| Metric "));
/// assert!(table.contains("A*(h2)"));
/// ```
pub fn comparison_table(rows: &[ComparisonRow]) -> String {
    let mut grid: Vec<Vec<String>> = Vec::with_capacity(4);
    let mut header = vec!["Metric".to_string()];
    header.extend(rows.iter().map(|r| r.label()));
    grid.push(header);

    let mut depth = vec!["d".to_string()];
    depth.extend(rows.iter().map(|r| r.depth.to_string()));
    grid.push(depth);

    let mut nodes = vec!["Nodes Created".to_string()];
    nodes.extend(rows.iter().map(|r| r.nodes_created.to_string()));
    grid.push(nodes);

    let mut branching = vec!["b*".to_string()];
    branching.extend(rows.iter().map(|r| r.branching_factor.to_string()));
    grid.push(branching);

    render_grid(&grid)
}

fn render_grid(grid: &[Vec<String>]) -> String {
    let columns = grid.iter().map(|row| row.len()).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            grid.iter()
                .filter_map(|row| row.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |fill: char| -> String {
        let mut line = String::from("+");
        for w in &widths {
            line.push_str(&fill.to_string().repeat(w + 2));
            line.push('+');
        }
        line
    };

    let mut lines = vec![rule('-')];
    for (r, row) in grid.iter().enumerate() {
        let mut line = String::from("|");
        for (c, w) in widths.iter().enumerate() {
            let cell = row.get(c).map(String::as_str).unwrap_or("");
            line.push_str(&format!(" {:<width$} |", cell, width = w));
        }
        lines.push(line);
        lines.push(rule(if r == 0 { '=' } else { '-' }));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Move;
    use crate::heuristics::Heuristic;

    fn row(strategy: Strategy, nodes: u64, moves: Vec<Move>, b: f64) -> ComparisonRow {
        ComparisonRow {
            strategy,
            nodes_created: nodes,
            depth: moves.len(),
            branching_factor: b,
            solved: nodes > 0,
            moves,
        }
    }

    #[test]
    fn test_solution_lines() {
        let solution = Solution {
            moves: vec![Move::Up, Move::Left],
            nodes_created: 5,
        };
        assert_eq!(
            solution_lines(&solution),
            vec![
                "Nodes created during search: 5",
                "Solution length: 2",
                "Move sequence:",
                "move up",
                "move left",
            ]
        );
    }

    #[test]
    fn test_exhaustion_messages() {
        assert_eq!(
            exhaustion_message(Strategy::BreadthFirst, Exhaustion::NodeBudget, 1000),
            "Error: maxnodes limit (1000) reached"
        );
        assert_eq!(
            exhaustion_message(
                Strategy::DepthFirst { depth_limit: 0 },
                Exhaustion::FrontierEmpty,
                1000
            ),
            "Error: search space exhausted (depth limit 0)"
        );
        let outcome = SearchOutcome::Exhausted {
            reason: Exhaustion::NodeBudget,
            nodes_created: 10,
        };
        assert_eq!(
            outcome_lines(Strategy::AStar(Heuristic::Manhattan), &outcome, 10),
            vec!["Error: maxnodes limit (10) reached"]
        );
    }

    #[test]
    fn test_comparison_table_layout() {
        let path = vec![Move::Up, Move::Left, Move::Left];
        let rows = vec![
            row(Strategy::BreadthFirst, 12, path.clone(), 1.8),
            row(Strategy::DepthFirst { depth_limit: 31 }, 0, vec![], 0.0),
            row(Strategy::AStar(Heuristic::MisplacedTiles), 4, path.clone(), 1.0),
            row(Strategy::AStar(Heuristic::Manhattan), 4, path, 1.0),
        ];
        let expected = "\
+---------------+-----+-----+--------+--------+
| Metric        | BFS | DFS | A*(h1) | A*(h2) |
+===============+=====+=====+========+========+
| d             | 3   | 0   | 3      | 3      |
+---------------+-----+-----+--------+--------+
| Nodes Created | 12  | 0   | 4      | 4      |
+---------------+-----+-----+--------+--------+
| b*            | 1.8 | 0   | 1      | 1      |
+---------------+-----+-----+--------+--------+";
        assert_eq!(comparison_table(&rows), expected);
    }
}
