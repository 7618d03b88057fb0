use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    lives: i32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_PLAYER_NAME.to_owned(),
            lives: DEFAULT_LIVES,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Blank names fall back to [`DEFAULT_PLAYER_NAME`].
    pub fn set_name(&mut self, name: &str) {
        self.name = if name.trim().is_empty() {
            DEFAULT_PLAYER_NAME.to_owned()
        } else {
            name.to_owned()
        };
    }

    /// Checks a name typed by the user before it is accepted.
    pub fn validate_name(name: &str) -> Result<()> {
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            Err(GameError::NameTooLong {
                len,
                max: MAX_NAME_LEN,
            })
        } else {
            Ok(())
        }
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn set_lives(&mut self, lives: i32) {
        self.lives = lives;
    }

    pub fn reset_lives(&mut self) {
        self.set_lives(DEFAULT_LIVES);
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    pub fn lose_life(&mut self) {
        self.lives -= 1;
        log::info!("{} lost a life, {} left", self.name, self.lives);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
