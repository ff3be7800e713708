//! Cost estimates consumed by A* search.
//!
//! Both heuristics are admissible for the sliding-tile move model: they are
//! zero exactly at the goal and never exceed the true number of moves left.
use crate::engine::{State, CELL_COUNT, GRID_WIDTH};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Selects which estimate A* uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// `h1`: number of misplaced tiles.
    MisplacedTiles,
    /// `h2`: sum of Manhattan distances.
    Manhattan,
}

impl Heuristic {
    /// Evaluates the heuristic for `state` against `goal`.
    pub fn evaluate(&self, state: &State, goal: &State) -> u32 {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(state, goal),
            Heuristic::Manhattan => manhattan_distance(state, goal),
        }
    }

    /// Short name used in commands and reports (`h1` or `h2`).
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::MisplacedTiles => "h1",
            Heuristic::Manhattan => "h2",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = Error;

    /// Parses `h1` or `h2`. Any other name is a configuration error.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "h1" => Ok(Heuristic::MisplacedTiles),
            "h2" => Ok(Heuristic::Manhattan),
            other => Err(Error::UnknownHeuristic {
                name: other.to_string(),
            }),
        }
    }
}

/// Counts the non-blank positions whose tile differs from the goal's tile there.
///
/// # Examples
/// ```
/// use eight_puzzle::engine::State;
/// use eight_puzzle::heuristics::misplaced_tiles;
/// let state = State::new([1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
/// assert_eq!(misplaced_tiles(&state, &State::goal()), 1);
/// ```
pub fn misplaced_tiles(state: &State, goal: &State) -> u32 {
    state
        .tiles()
        .iter()
        .zip(goal.tiles())
        .filter(|&(&tile, &wanted)| tile != 0 && tile != wanted)
        .count() as u32
}

/// Sums, over every non-blank tile, the row plus column distance between
/// its current cell and its cell in `goal`.
///
/// # Examples
/// ```
/// use eight_puzzle::engine::State;
/// use eight_puzzle::heuristics::manhattan_distance;
/// let state = State::new([1, 2, 5, 3, 4, 0, 6, 7, 8]).unwrap();
/// assert_eq!(manhattan_distance(&state, &State::goal()), 3);
/// ```
pub fn manhattan_distance(state: &State, goal: &State) -> u32 {
    let mut goal_position = [0usize; CELL_COUNT];
    for (idx, &tile) in goal.tiles().iter().enumerate() {
        goal_position[tile as usize] = idx;
    }

    state
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(idx, &tile)| {
            let target = goal_position[tile as usize];
            let rows = (idx / GRID_WIDTH).abs_diff(target / GRID_WIDTH);
            let cols = (idx % GRID_WIDTH).abs_diff(target % GRID_WIDTH);
            (rows + cols) as u32
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Move, Puzzle};

    fn state(tiles: [u8; CELL_COUNT]) -> State {
        State::new(tiles).unwrap()
    }

    #[test]
    fn test_zero_at_goal() {
        let goal = State::goal();
        assert_eq!(misplaced_tiles(&goal, &goal), 0);
        assert_eq!(manhattan_distance(&goal, &goal), 0);
    }

    #[test]
    fn test_blank_is_ignored() {
        // Only the blank and tile 1 swapped: one misplaced tile, one step away.
        let s = state([1, 0, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(misplaced_tiles(&s, &State::goal()), 1);
        assert_eq!(manhattan_distance(&s, &State::goal()), 1);
    }

    #[test]
    fn test_known_values() {
        // 8 and 0 swapped across the grid: tile 8 is 4 steps from home.
        let s = state([8, 1, 2, 3, 4, 5, 6, 7, 0]);
        assert_eq!(misplaced_tiles(&s, &State::goal()), 1);
        assert_eq!(manhattan_distance(&s, &State::goal()), 4);

        let s = state([1, 2, 5, 3, 4, 0, 6, 7, 8]);
        assert_eq!(misplaced_tiles(&s, &State::goal()), 3);
        assert_eq!(manhattan_distance(&s, &State::goal()), 3);

        let s = state([8, 7, 6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(misplaced_tiles(&s, &State::goal()), 7);
        assert_eq!(manhattan_distance(&s, &State::goal()), 20);
    }

    #[test]
    fn test_against_non_canonical_goal() {
        let goal = state([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let s = state([1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert_eq!(misplaced_tiles(&s, &goal), 1);
        assert_eq!(manhattan_distance(&s, &goal), 1);
    }

    #[test]
    fn test_manhattan_dominates_misplaced() {
        let mut puzzle = Puzzle::new();
        puzzle.set_seed(3);
        for steps in 0..40 {
            puzzle.scramble(steps);
            let s = puzzle.state();
            assert!(manhattan_distance(s, &State::goal()) >= misplaced_tiles(s, &State::goal()));
        }
    }

    #[test]
    fn test_admissible_along_known_path() {
        // A state `k` moves from the goal can never be estimated above `k`.
        let path = [Move::Right, Move::Down, Move::Left, Move::Down, Move::Right, Move::Right];
        let mut s = State::goal();
        for (k, mv) in path.iter().enumerate() {
            s = s.apply(*mv).unwrap();
            let k = (k + 1) as u32;
            assert!(Heuristic::MisplacedTiles.evaluate(&s, &State::goal()) <= k);
            assert!(Heuristic::Manhattan.evaluate(&s, &State::goal()) <= k);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("h1".parse::<Heuristic>().unwrap(), Heuristic::MisplacedTiles);
        assert_eq!("h2".parse::<Heuristic>().unwrap(), Heuristic::Manhattan);
        assert_eq!(Heuristic::Manhattan.to_string(), "h2");
        let err = "h3".parse::<Heuristic>().unwrap_err();
        assert!(matches!(err, Error::UnknownHeuristic { name } if name == "h3"));
    }
}
