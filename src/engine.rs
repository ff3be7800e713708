//! Core puzzle model for the 3x3 sliding-tile puzzle.
//!
//! This module defines the fundamental components:
//! - `Move`: The four directions the blank tile can travel.
//! - `State`: An immutable 9-cell tile arrangement and its blank position,
//!   together with the move generator (`successors`).
//! - `Puzzle`: The current state of an interactive session plus the seeded
//!   random number generator used for scrambling.
use crate::error::{Error, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// Width and height of the grid.
pub const GRID_WIDTH: usize = 3;

/// Number of cells on the grid, blank included.
pub const CELL_COUNT: usize = GRID_WIDTH * GRID_WIDTH;

/// Tile arrangement of the solved puzzle. The blank (0) sits in the top-left corner.
pub const GOAL_TILES: [u8; CELL_COUNT] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

/// Direction in which the blank tile travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

/// The order in which successors are generated. Every search strategy
/// consults this list, so it decides which of several equal-cost
/// solutions gets reported.
pub const MOVE_ORDER: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

impl Move {
    /// Returns the lowercase name used by the command grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use eight_puzzle::engine::Move;
    /// assert_eq!(Move::Left.as_str(), "left");
    /// assert_eq!("down".parse::<Move>().unwrap(), Move::Down);
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Left => "left",
            Move::Right => "right",
            Move::Up => "up",
            Move::Down => "down",
        }
    }

    /// The move that undoes this one.
    pub fn opposite(&self) -> Move {
        match self {
            Move::Left => Move::Right,
            Move::Right => Move::Left,
            Move::Up => Move::Down,
            Move::Down => Move::Up,
        }
    }

    /// Index the blank lands on when it travels in this direction from
    /// `blank`, or `None` if that would leave the grid.
    fn target(&self, blank: usize) -> Option<usize> {
        match self {
            Move::Up if blank >= GRID_WIDTH => Some(blank - GRID_WIDTH),
            Move::Down if blank < CELL_COUNT - GRID_WIDTH => Some(blank + GRID_WIDTH),
            Move::Left if blank % GRID_WIDTH != 0 => Some(blank - 1),
            Move::Right if blank % GRID_WIDTH != GRID_WIDTH - 1 => Some(blank + 1),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(Move::Left),
            "right" => Ok(Move::Right),
            "up" => Ok(Move::Up),
            "down" => Ok(Move::Down),
            other => Err(Error::UnknownMove {
                name: other.to_string(),
            }),
        }
    }
}

/// A snapshot of the 9 cells, label 0 being the blank.
///
/// The tiles are always a permutation of `0..=8`. States are compared,
/// hashed and ordered by the tile sequence alone, so the derived `Ord` is
/// lexicographic order over the cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    tiles: [u8; CELL_COUNT],
    blank: usize,
}

impl State {
    /// The solved arrangement `[0, 1, 2, 3, 4, 5, 6, 7, 8]`.
    pub fn goal() -> Self {
        State {
            tiles: GOAL_TILES,
            blank: 0,
        }
    }

    /// Creates a state from a tile array, checking it is a permutation of `0..=8`.
    ///
    /// # Errors
    /// Returns `Error::TileOutOfRange` for a label above 8 and
    /// `Error::DuplicateTile` if a label occurs twice.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::State;
    /// let state = State::new([1, 2, 5, 3, 4, 0, 6, 7, 8]).unwrap();
    /// assert_eq!(state.blank_index(), 5);
    /// assert!(State::new([1, 1, 2, 3, 4, 5, 6, 7, 8]).is_err());
    /// ```
    pub fn new(tiles: [u8; CELL_COUNT]) -> Result<Self> {
        let mut seen = [false; CELL_COUNT];
        let mut blank = 0;
        for (idx, &tile) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(Error::TileOutOfRange { value: tile as u32 })?;
            if *slot {
                return Err(Error::DuplicateTile { value: tile });
            }
            *slot = true;
            if tile == 0 {
                blank = idx;
            }
        }
        Ok(State { tiles, blank })
    }

    /// Creates a state from a slice of any length, rejecting anything but 9 labels.
    pub fn from_slice(tiles: &[u8]) -> Result<Self> {
        let tiles: [u8; CELL_COUNT] = tiles
            .try_into()
            .map_err(|_| Error::InvalidStateLength { got: tiles.len() })?;
        State::new(tiles)
    }

    pub fn tiles(&self) -> &[u8; CELL_COUNT] {
        &self.tiles
    }

    /// Index (0-8) of the blank tile.
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    pub fn is_goal(&self) -> bool {
        self.tiles == GOAL_TILES
    }

    /// Whether `mv` keeps the blank on the grid.
    pub fn is_legal(&self, mv: Move) -> bool {
        mv.target(self.blank).is_some()
    }

    /// Returns the state reached by moving the blank in direction `mv`,
    /// or `None` if the move is illegal. `self` is never modified.
    pub fn apply(&self, mv: Move) -> Option<State> {
        let target = mv.target(self.blank)?;
        let mut tiles = self.tiles;
        tiles.swap(self.blank, target);
        Some(State {
            tiles,
            blank: target,
        })
    }

    /// Generates every state reachable with one legal move.
    ///
    /// Entries always follow `MOVE_ORDER` (left, right, up, down) with the
    /// illegal directions left out.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::{Move, State};
    /// let moves: Vec<Move> = State::goal().successors().into_iter().map(|(m, _)| m).collect();
    /// assert_eq!(moves, vec![Move::Right, Move::Down]);
    /// ```
    pub fn successors(&self) -> Vec<(Move, State)> {
        MOVE_ORDER
            .iter()
            .filter_map(|&mv| self.apply(mv).map(|next| (mv, next)))
            .collect()
    }

    /// Applies a whole move sequence, stopping at the first illegal move.
    pub fn apply_all(&self, moves: &[Move]) -> Option<State> {
        moves.iter().try_fold(*self, |state, &mv| state.apply(mv))
    }
}

impl Default for State {
    fn default() -> Self {
        State::goal()
    }
}

impl fmt::Display for State {
    /// Formats the state as a 3x3 grid with ` | ` between cells and a
    /// dashed line between rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.tiles.chunks(GRID_WIDTH).enumerate() {
            let cells: Vec<String> = row.iter().map(|t| t.to_string()).collect();
            write!(f, "{}", cells.join(" | "))?;
            if row_idx < GRID_WIDTH - 1 {
                write!(f, "\n{}\n", "-".repeat(9))?;
            }
        }
        Ok(())
    }
}

/// Number of random directions tried per scramble step before the step is skipped.
const SCRAMBLE_RETRIES: usize = 10;

/// Seed used when no explicit seed has been set.
const DEFAULT_SEED: u64 = 514514;

/// The puzzle as seen by an interactive session: the current state plus a
/// seeded random number generator for scrambling.
#[derive(Clone, Debug)]
pub struct Puzzle {
    state: State,
    rng: SmallRng,
}

impl Puzzle {
    /// Creates a puzzle in the goal state with the default seed.
    pub fn new() -> Self {
        Puzzle {
            state: State::goal(),
            rng: SmallRng::seed_from_u64(DEFAULT_SEED),
        }
    }

    pub fn with_state(state: State) -> Self {
        Puzzle {
            state,
            ..Puzzle::new()
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }

    /// Moves the blank tile.
    ///
    /// # Errors
    /// Returns `Error::IllegalMove` if the blank would leave the grid; the
    /// current state is left untouched in that case.
    pub fn apply_move(&mut self, mv: Move) -> Result<()> {
        let next = self.state.apply(mv).ok_or(Error::IllegalMove {
            direction: mv,
            blank: self.state.blank_index(),
        })?;
        self.state = next;
        Ok(())
    }

    /// Reseeds the scramble generator. The same seed always yields the same scrambles.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Resets to the goal state and then makes `steps` random moves.
    ///
    /// Each step draws up to `SCRAMBLE_RETRIES` random directions and takes
    /// the first legal one; a step with no legal draw is skipped. The result
    /// is always solvable because it is reached from the goal.
    pub fn scramble(&mut self, steps: usize) {
        self.state = State::goal();
        for _ in 0..steps {
            for _ in 0..SCRAMBLE_RETRIES {
                let mv = MOVE_ORDER[self.rng.gen_range(0..MOVE_ORDER.len())];
                if let Some(next) = self.state.apply(mv) {
                    self.state = next;
                    break;
                }
            }
        }
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Puzzle::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(tiles: [u8; CELL_COUNT]) -> State {
        State::new(tiles).unwrap()
    }

    #[test]
    fn test_goal_state() {
        let goal = State::goal();
        assert!(goal.is_goal());
        assert_eq!(goal.blank_index(), 0);
        assert_eq!(goal.tiles(), &GOAL_TILES);
        assert_eq!(State::default(), goal);
    }

    #[test]
    fn test_new_rejects_out_of_range_and_duplicates() {
        assert!(matches!(
            State::new([0, 1, 2, 3, 4, 5, 6, 7, 9]),
            Err(Error::TileOutOfRange { value: 9 })
        ));
        assert!(matches!(
            State::new([0, 1, 2, 3, 4, 5, 6, 7, 7]),
            Err(Error::DuplicateTile { value: 7 })
        ));
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        assert!(matches!(
            State::from_slice(&[0, 1, 2]),
            Err(Error::InvalidStateLength { got: 3 })
        ));
        assert!(matches!(
            State::from_slice(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
            Err(Error::InvalidStateLength { got: 10 })
        ));
        assert_eq!(
            State::from_slice(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap(),
            State::goal()
        );
    }

    #[test]
    fn test_move_legality_by_blank_index() {
        for blank in 0..CELL_COUNT {
            let mut tiles = GOAL_TILES;
            tiles.swap(0, blank);
            let s = state(tiles);
            assert_eq!(s.is_legal(Move::Up), blank >= 3, "up from {}", blank);
            assert_eq!(s.is_legal(Move::Down), blank <= 5, "down from {}", blank);
            assert_eq!(s.is_legal(Move::Left), blank % 3 != 0, "left from {}", blank);
            assert_eq!(s.is_legal(Move::Right), blank % 3 != 2, "right from {}", blank);
        }
    }

    #[test]
    fn test_apply_swaps_blank_and_leaves_original() {
        let s = state([1, 2, 5, 3, 4, 0, 6, 7, 8]);
        let up = s.apply(Move::Up).unwrap();
        assert_eq!(up.tiles(), &[1, 2, 0, 3, 4, 5, 6, 7, 8]);
        assert_eq!(up.blank_index(), 2);
        assert_eq!(s.tiles(), &[1, 2, 5, 3, 4, 0, 6, 7, 8]);
        assert!(s.apply(Move::Right).is_none());
    }

    #[test]
    fn test_successors_follow_fixed_order() {
        // Blank in the centre: all four moves, left first.
        let centre = state([1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let moves: Vec<Move> = centre.successors().iter().map(|(m, _)| *m).collect();
        assert_eq!(moves, vec![Move::Left, Move::Right, Move::Up, Move::Down]);

        // Blank bottom-right: only left and up.
        let corner = state([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let moves: Vec<Move> = corner.successors().iter().map(|(m, _)| *m).collect();
        assert_eq!(moves, vec![Move::Left, Move::Up]);

        // Blank on the top edge.
        let edge = state([1, 0, 2, 3, 4, 5, 6, 7, 8]);
        let moves: Vec<Move> = edge.successors().iter().map(|(m, _)| *m).collect();
        assert_eq!(moves, vec![Move::Left, Move::Right, Move::Down]);
    }

    #[test]
    fn test_successor_then_opposite_returns_to_start() {
        let mut puzzle = Puzzle::new();
        puzzle.set_seed(7);
        for n in [0, 3, 10, 25] {
            puzzle.scramble(n);
            let start = *puzzle.state();
            for (mv, next) in start.successors() {
                assert_eq!(next.apply(mv.opposite()), Some(start));
            }
        }
    }

    #[test]
    fn test_apply_all_stops_on_illegal_move() {
        let goal = State::goal();
        let there = goal.apply_all(&[Move::Right, Move::Down]).unwrap();
        assert_eq!(there.blank_index(), 4);
        assert_eq!(there.apply_all(&[Move::Up, Move::Left]), Some(goal));
        assert!(goal.apply_all(&[Move::Up]).is_none());
    }

    #[test]
    fn test_move_parse_and_display() {
        for mv in MOVE_ORDER {
            assert_eq!(mv.as_str().parse::<Move>().unwrap(), mv);
            assert_eq!(mv.to_string(), mv.as_str());
        }
        assert!(matches!(
            "diagonal".parse::<Move>(),
            Err(Error::UnknownMove { .. })
        ));
    }

    #[test]
    fn test_display_state_grid() {
        let expected = "0 | 1 | 2\n---------\n3 | 4 | 5\n---------\n6 | 7 | 8";
        assert_eq!(State::goal().to_string(), expected);
    }

    #[test]
    fn test_state_ordering_is_lexicographic() {
        let a = state([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let b = state([0, 1, 2, 3, 4, 5, 6, 8, 7]);
        let c = state([1, 0, 2, 3, 4, 5, 6, 7, 8]);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_puzzle_illegal_move_is_noop() {
        let mut puzzle = Puzzle::new();
        let err = puzzle.apply_move(Move::Up).unwrap_err();
        assert!(matches!(
            err,
            Error::IllegalMove {
                direction: Move::Up,
                blank: 0
            }
        ));
        assert!(puzzle.state().is_goal());

        puzzle.apply_move(Move::Right).unwrap();
        assert_eq!(puzzle.state().blank_index(), 1);
    }

    #[test]
    fn test_scramble_is_deterministic_per_seed() {
        let mut first = Puzzle::new();
        let mut second = Puzzle::new();
        first.set_seed(42);
        second.set_seed(42);
        first.scramble(30);
        second.scramble(30);
        assert_eq!(first.state(), second.state());
    }

    #[test]
    fn test_scramble_zero_resets_to_goal() {
        let mut puzzle = Puzzle::with_state(state([1, 2, 5, 3, 4, 0, 6, 7, 8]));
        puzzle.scramble(0);
        assert!(puzzle.state().is_goal());
    }
}
