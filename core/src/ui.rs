use std::io;

use crate::*;

/// Everything the game needs from whoever talks to the user.
///
/// Implementors provide the raw line input and output primitives, the prompts are built on
/// top of them.
pub trait UserInterface {
    /// Reads one line of input without its line terminator.
    fn read_line(&mut self) -> io::Result<String>;

    fn render_message(&mut self, message: &str) -> io::Result<()>;

    fn new_line(&mut self) -> io::Result<()>;

    fn clear_screen(&mut self) -> io::Result<()>;

    fn draw_board(&mut self, board: &Board) -> io::Result<()>;

    fn ask_for_move(&mut self) -> io::Result<String> {
        self.render_message("Make your move by typing 'U','D','L', or 'R' and pressing Enter")?;
        self.read_line()
    }

    /// Keeps asking until the answer passes [`Player::validate_name`].
    fn ask_for_player_name(&mut self) -> io::Result<String> {
        loop {
            self.render_message("What is your name?")?;
            let name = self.read_line()?;
            match Player::validate_name(&name) {
                Ok(()) => return Ok(name),
                Err(err) => {
                    log::debug!("Rejected player name: {}", err);
                    self.render_message(&format!("{err}. Please try again."))?;
                }
            }
        }
    }

    fn ask_to_play_again(&mut self) -> io::Result<String> {
        self.render_message("Would you like to play again? (Y/N)")?;
        self.read_line()
    }
}
