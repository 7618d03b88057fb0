use std::io::{self, BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use shuffle_core::{Board, UserInterface};

use crate::render;

/// Line based terminal front end.
///
/// With `styled` off nothing but plain text is written, no colors and no screen clearing.
pub struct ConsoleUi<R, W> {
    input: R,
    output: W,
    styled: bool,
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    pub fn new(input: R, output: W, styled: bool) -> Self {
        Self {
            input,
            output,
            styled,
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> UserInterface for ConsoleUi<R, W> {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game ended",
            ));
        }
        let line = line.trim_end_matches(['\r', '\n']).to_owned();
        log::trace!("User typed {:?}", line);
        Ok(line)
    }

    fn render_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()
    }

    fn new_line(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        self.output.flush()
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        if self.styled {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn draw_board(&mut self, board: &Board) -> io::Result<()> {
        render::draw_board(&mut self.output, board, self.styled)?;
        self.output.flush()
    }
}
