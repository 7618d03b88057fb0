use serde::{Deserialize, Serialize};

use crate::GameError;

/// Content of a single board cell.
///
/// Serialized as its integer code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CellStatus {
    Empty,
    HiddenMine,
    /// A mine that already went off and stays visible.
    Mine,
    Player,
    /// The player standing on a mine that just went off.
    PlayerIsHit,
}

impl CellStatus {
    pub const ALL: [CellStatus; 5] = [
        CellStatus::Empty,
        CellStatus::HiddenMine,
        CellStatus::Mine,
        CellStatus::Player,
        CellStatus::PlayerIsHit,
    ];

    pub const fn code(self) -> u8 {
        use CellStatus::*;
        match self {
            Empty => 0,
            HiddenMine => 1,
            Mine => 2,
            Player => 3,
            PlayerIsHit => 4,
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        use CellStatus::*;
        match code {
            0 => Some(Empty),
            1 => Some(HiddenMine),
            2 => Some(Mine),
            3 => Some(Player),
            4 => Some(PlayerIsHit),
            _ => None,
        }
    }

    pub const fn is_player(self) -> bool {
        matches!(self, Self::Player | Self::PlayerIsHit)
    }
}

impl Default for CellStatus {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<CellStatus> for u8 {
    fn from(status: CellStatus) -> Self {
        status.code()
    }
}

impl TryFrom<u8> for CellStatus {
    type Error = GameError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(GameError::InvalidCellCode(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_declaration_order() {
        for (i, status) in CellStatus::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(status.code()), i);
            assert_eq!(CellStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(CellStatus::from_code(5), None);
    }

    #[test]
    fn serializes_as_integer_code() {
        assert_eq!(serde_json::to_string(&CellStatus::PlayerIsHit).unwrap(), "4");
        assert_eq!(
            serde_json::from_str::<CellStatus>("2").unwrap(),
            CellStatus::Mine
        );
        assert!(serde_json::from_str::<CellStatus>("9").is_err());
    }

    #[test]
    fn try_from_rejects_unknown_codes() {
        assert!(matches!(
            CellStatus::try_from(7),
            Err(GameError::InvalidCellCode(7))
        ));
    }
}
