use core::fmt;
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::*;

/// Result of asking the board to move the player.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    /// The player left its cell for the neighbouring one.
    Moved(Direction),
    /// The target cell is off the board, nothing changed.
    Blocked(Direction),
    /// No direction was given, nothing changed.
    Ignored,
}

impl MoveOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            Moved(_) => true,
            Blocked(_) => false,
            Ignored => false,
        }
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use MoveOutcome::*;
        match self {
            Moved(direction) => write!(f, "You moved {direction}."),
            Blocked(direction) => write!(f, "You can't move {direction}, try again."),
            Ignored => f.write_str("You didn't move."),
        }
    }
}

/// The 8x8 grid and where the player stands on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<CellStatus>,
    player_position: Position,
}

impl Board {
    /// Board with a random set of hidden mines.
    pub fn new() -> Self {
        Self::with_generator(RandomMineGenerator::from_entropy())
    }

    /// Board whose mines are fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(RandomMineGenerator::new(seed))
    }

    pub fn with_generator(generator: impl MineGenerator) -> Self {
        let mut board = Self::empty();
        board.place_mines(generator.generate());
        log::info!(
            "New game board created with {} mines",
            board.count(CellStatus::HiddenMine)
        );
        board
    }

    /// Board without any mines, the player is already on its start cell.
    pub fn empty() -> Self {
        let size = BOARD_SIZE as usize;
        let mut board = Self {
            cells: Array2::default((size, size)),
            player_position: START_POSITION,
        };
        board.set_cell(START_POSITION, CellStatus::Player);
        board
    }

    fn place_mines(&mut self, mines: Vec<Position>) {
        for pos in mines {
            if !pos.is_in_bounds() {
                log::warn!("Mine at {} is off the board, skipped", pos);
                continue;
            }
            match self.cell_status(pos) {
                CellStatus::Empty => self.set_cell(pos, CellStatus::HiddenMine),
                status => log::warn!("Mine at {} collides with {:?}, skipped", pos, status),
            }
        }
    }

    pub fn cells(&self) -> &Array2<CellStatus> {
        &self.cells
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, CellStatus>> {
        self.cells.outer_iter()
    }

    pub fn count(&self, status: CellStatus) -> usize {
        self.cells.iter().filter(|&&cell| cell == status).count()
    }

    pub fn player_position(&self) -> Position {
        self.player_position
    }

    pub fn set_player_position(&mut self, pos: Position) {
        self.player_position = pos;
    }

    /// Whether the player currently stands on a mine that just went off.
    pub fn is_player_hit(&self) -> bool {
        self.cell_status(self.player_position) == CellStatus::PlayerIsHit
    }

    /// Panics when `pos` is off the board.
    pub fn set_cell(&mut self, pos: Position, status: CellStatus) {
        log::trace!("Set cell {} to {:?}", pos, status);
        self.cells[pos.to_nd_index()] = status;
    }

    pub fn set_cell_at(&mut self, row: Coord, col: Coord, status: CellStatus) {
        self.set_cell(Position::new(row, col), status);
    }

    pub fn cell_status(&self, pos: Position) -> CellStatus {
        self.cells[pos.to_nd_index()]
    }

    pub fn is_cell_mined(&self, pos: Position) -> bool {
        self.cell_status(pos) == CellStatus::HiddenMine
    }

    pub fn is_cell_in_top_row(&self, pos: Position) -> bool {
        pos.row() == 0
    }

    /// Sets off a hidden mine, other cells are left alone.
    pub fn explode(&mut self, pos: Position) {
        if self.is_cell_mined(pos) {
            log::info!("Mine at {} exploded", pos);
            self.set_cell(pos, CellStatus::PlayerIsHit);
        }
    }

    /// Vacates a cell, a mine that just went off stays behind as a visible mine.
    pub fn clear_cell(&mut self, pos: Position) {
        let status = match self.cell_status(pos) {
            CellStatus::PlayerIsHit => CellStatus::Mine,
            _ => CellStatus::Empty,
        };
        self.set_cell(pos, status);
    }

    /// Puts the player on a cell, entering an exploded or spent mine counts as a hit.
    pub fn move_to_cell(&mut self, pos: Position) {
        let status = match self.cell_status(pos) {
            CellStatus::PlayerIsHit | CellStatus::Mine => CellStatus::PlayerIsHit,
            _ => CellStatus::Player,
        };
        self.set_cell(pos, status);
    }

    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        if !direction.is_valid() {
            log::debug!("Ignoring invalid move");
            return MoveOutcome::Ignored;
        }

        let from = self.player_position;
        let to = from.step(direction);
        if !to.is_in_bounds() {
            log::debug!("Move {} from {} leaves the board", direction, from);
            return MoveOutcome::Blocked(direction);
        }

        if self.is_cell_mined(to) {
            self.explode(to);
        }
        self.clear_cell(from);
        self.move_to_cell(to);
        self.set_player_position(to);
        log::debug!("Player moved {} from {} to {}", direction, from, to);

        MoveOutcome::Moved(direction)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
