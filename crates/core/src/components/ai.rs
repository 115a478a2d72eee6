use serde::{Deserialize, Serialize};

use crate::types::Pos;

/// Behavior driving a non-player actor on its turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ai {
    /// Chases the player while in sight and keeps following the last known path otherwise.
    Hostile { path: Vec<Pos> },
    /// Stumbles randomly, then hands control back to `previous`.
    Confused { previous: Box<Ai>, turns_remaining: u32 },
}

impl Ai {
    pub fn hostile() -> Self {
        Ai::Hostile { path: Vec::new() }
    }

    pub fn confused(self, turns: u32) -> Self {
        Ai::Confused { previous: Box::new(self), turns_remaining: turns }
    }

    pub fn is_confused(&self) -> bool {
        matches!(self, Ai::Confused { .. })
    }
}
