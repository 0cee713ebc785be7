//! Move records.
//!
//! Each committed move leaves a `MoveRecord` in the game's history so a
//! caller can animate the last move or replay the whole game.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::square::Square;
use crate::board::RedirectKind;

/// One resolved, committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number the move was made on (starts at 1).
    pub turn: u32,
    /// Player who moved.
    pub player: PlayerId,
    /// Step count applied.
    pub steps: u64,
    /// Position before the move. `None` if the player had not started.
    pub from: Option<Square>,
    /// Square reached after overshoot, before any redirect.
    pub landed: Square,
    /// Final committed square.
    pub to: Square,
    /// The move ran past the goal and bounced back.
    pub bounced: bool,
    /// Snake or ladder taken on `landed`, if any.
    pub redirect: Option<RedirectKind>,
}

impl MoveRecord {
    /// True if this move reached the goal.
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.to.is_finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_winning() {
        let mut record = MoveRecord {
            turn: 12,
            player: PlayerId::FIRST,
            steps: 3,
            from: Square::new(97),
            landed: Square::FINISH,
            to: Square::FINISH,
            bounced: false,
            redirect: None,
        };
        assert!(record.is_winning());

        record.to = Square::new(99).unwrap();
        assert!(!record.is_winning());
    }

    #[test]
    fn test_serialization() {
        let record = MoveRecord {
            turn: 1,
            player: PlayerId::SECOND,
            steps: 3,
            from: None,
            landed: Square::new(3).unwrap(),
            to: Square::new(22).unwrap(),
            bounced: false,
            redirect: Some(RedirectKind::Ladder),
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
