use crate::engine::{Move, State, CELL_COUNT};
use crate::error::{Error, Result};

/// Parses tile tokens into a `State`.
///
/// Each token must be a decimal number. Exactly `CELL_COUNT` (9) tokens are
/// required, and together they must be a permutation of `0..=8`.
///
/// # Arguments
/// * `tokens`: The tile labels in row-major order, `"0"` being the blank.
///
/// # Returns
/// * `Ok(State)` if the tokens describe a valid state.
/// * `Err(Error)` if:
///     - a token is not a number (`Error::InvalidTileToken`),
///     - the token count is not 9 (`Error::InvalidStateLength`),
///     - a label is above 8 or repeated.
///
/// # Examples
/// ```
/// use eight_puzzle::utils::state_from_tokens;
///
/// let state = state_from_tokens(&["1", "2", "5", "3", "4", "0", "6", "7", "8"]).unwrap();
/// assert_eq!(state.blank_index(), 5);
///
/// assert!(state_from_tokens(&["1", "2", "3"]).is_err());
/// assert!(state_from_tokens(&["x", "2", "5", "3", "4", "0", "6", "7", "8"]).is_err());
/// ```
pub fn state_from_tokens(tokens: &[&str]) -> Result<State> {
    if tokens.len() != CELL_COUNT {
        return Err(Error::InvalidStateLength { got: tokens.len() });
    }

    let mut tiles = [0u8; CELL_COUNT];
    for (cell, token) in tiles.iter_mut().zip(tokens) {
        let value: u32 = token.parse().map_err(|_| Error::InvalidTileToken {
            token: token.to_string(),
        })?;
        *cell = u8::try_from(value).map_err(|_| Error::TileOutOfRange { value })?;
    }
    State::new(tiles)
}

/// Parses a state written on one line, tiles separated by whitespace and/or commas.
///
/// `"1 2 5 3 4 0 6 7 8"`, `"1,2,5,3,4,0,6,7,8"` and `"[1, 2, 5, 3, 4, 0, 6, 7, 8]"`
/// are all accepted.
pub fn parse_state(line: &str) -> Result<State> {
    let tokens: Vec<&str> = line
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    state_from_tokens(&tokens)
}

/// Joins moves with single spaces, e.g. `"up left left"`.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
