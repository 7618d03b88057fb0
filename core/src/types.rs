use core::fmt;
use serde::{Deserialize, Serialize};

use crate::BOARD_SIZE;

/// Single coordinate axis used for rows and columns.
///
/// Signed so that a step off the board is still representable.
pub type Coord = i8;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

/// Row/column pair on the board, `(0, 0)` is the top-left cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: Coord,
    col: Coord,
}

impl Position {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }

    pub const fn row(self) -> Coord {
        self.row
    }

    pub const fn col(self) -> Coord {
        self.col
    }

    pub const fn is_in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Neighbouring position in `direction`, which may lie off the board.
    pub const fn step(self, direction: Direction) -> Self {
        use Direction::*;
        match direction {
            Up => Self::new(self.row - 1, self.col),
            Down => Self::new(self.row + 1, self.col),
            Left => Self::new(self.row, self.col - 1),
            Right => Self::new(self.row, self.col + 1),
            Invalid => self,
        }
    }
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    // negative coordinates wrap to huge indexes and fail the ndarray bounds check
    fn to_nd_index(self) -> Self::Output {
        [self.row as usize, self.col as usize]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Invalid,
}

impl Direction {
    /// Maps a move token (`U`, `D`, `L` or `R`, any case) to a direction.
    pub fn parse(token: &str) -> Self {
        use Direction::*;
        match token.trim().to_ascii_uppercase().as_str() {
            "U" => Up,
            "D" => Down,
            "L" => Left,
            "R" => Right,
            _ => Invalid,
        }
    }

    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }

    pub const fn name(self) -> &'static str {
        use Direction::*;
        match self {
            Up => "up",
            Down => "down",
            Left => "left",
            Right => "right",
            Invalid => "nowhere",
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::Invalid
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a play-again answer to a decision, only `Y` (any case) means yes.
pub fn parse_play_again(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
