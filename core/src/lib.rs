use core::ops::Range;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use player::*;
pub use processor::*;
pub use types::*;
pub use ui::*;

mod board;
mod cell;
mod error;
mod generator;
mod player;
mod processor;
mod types;
mod ui;

/// Width and height of the square board.
pub const BOARD_SIZE: Coord = 8;

/// Where the player piece starts, bottom-left corner.
pub const START_POSITION: Position = Position::new(BOARD_SIZE - 1, 0);

/// How many mines a random board asks for.
pub const MINE_COUNT_RANGE: Range<u8> = 2..8;

/// Row and column range mines are drawn from, the last row and column never get one.
pub const MINE_COORD_RANGE: Range<Coord> = 0..BOARD_SIZE - 1;

pub const DEFAULT_LIVES: i32 = 2;

pub const DEFAULT_PLAYER_NAME: &str = "Player One";

pub const MAX_NAME_LEN: usize = 30;
