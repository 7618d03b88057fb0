use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use shuffle_core::{BOARD_SIZE, Board, CellStatus};

const FRAME_COLOR: Color = Color::DarkGrey;

#[derive(Copy, Clone, Debug, PartialEq)]
struct CellFormat {
    symbol: char,
    color: Color,
}

const fn cell_format(status: CellStatus) -> CellFormat {
    use CellStatus::*;
    match status {
        Empty | HiddenMine => CellFormat {
            symbol: ' ',
            color: Color::Black,
        },
        Mine => CellFormat {
            symbol: 'M',
            color: Color::Red,
        },
        Player => CellFormat {
            symbol: 'O',
            color: Color::Yellow,
        },
        PlayerIsHit => CellFormat {
            symbol: 'X',
            color: Color::Magenta,
        },
    }
}

/// Column letters across the top, row numbers down the side, one `[c]` per cell.
///
/// The last row is not followed by a line break.
pub fn draw_board<W: Write>(out: &mut W, board: &Board, styled: bool) -> io::Result<()> {
    if styled {
        queue!(out, SetForegroundColor(FRAME_COLOR))?;
    }
    write!(out, "   ")?;
    for col in 0..BOARD_SIZE as u8 {
        write!(out, "[{}]", char::from(b'A' + col))?;
    }

    for (row, cells) in board.rows().enumerate() {
        write!(out, "\n[{}]", row + 1)?;
        for &cell in cells.iter() {
            format_cell(out, cell.code(), styled)?;
        }
    }

    if styled {
        queue!(out, ResetColor)?;
    }
    log::debug!("Board drawn");
    Ok(())
}

/// Writes a single cell and hands its code back unchanged, unknown codes look like an empty cell.
pub fn format_cell<W: Write>(out: &mut W, code: u8, styled: bool) -> io::Result<u8> {
    let status = CellStatus::from_code(code).unwrap_or_default();
    let CellFormat { symbol, color } = cell_format(status);
    if styled {
        queue!(
            out,
            SetForegroundColor(FRAME_COLOR),
            Print('['),
            SetForegroundColor(color),
            Print(symbol),
            SetForegroundColor(FRAME_COLOR),
            Print(']')
        )?;
    } else {
        write!(out, "[{symbol}]")?;
    }
    Ok(code)
}
