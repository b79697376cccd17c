//! A single addressable cell.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;
use crate::effects::Effect;

/// Occupant list. Four inline slots covers every seat of a Ludo game.
pub type Occupants = SmallVec<[PlayerId; 4]>;

/// One tile of a path.
///
/// Occupants are kept in arrival order; several players may share a
/// tile. The effect is fixed once the board is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    number: u32,
    effect: Option<Effect>,
    occupants: Occupants,
}

impl Tile {
    /// Empty tile with no effect.
    #[must_use]
    pub fn new(number: u32) -> Self {
        Self {
            number,
            effect: None,
            occupants: Occupants::new(),
        }
    }

    /// 1-based position on its path.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn effect(&self) -> Option<&Effect> {
        self.effect.as_ref()
    }

    /// Players on this tile, earliest arrival first.
    #[must_use]
    pub fn occupants(&self) -> &[PlayerId] {
        &self.occupants
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.occupants.contains(&player)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    pub(crate) fn set_effect(&mut self, effect: Effect) {
        self.effect = Some(effect);
    }

    pub(crate) fn push_occupant(&mut self, player: PlayerId) {
        self.occupants.push(player);
    }

    pub(crate) fn pop_first_occupant(&mut self) -> Option<PlayerId> {
        if self.occupants.is_empty() {
            None
        } else {
            Some(self.occupants.remove(0))
        }
    }

    pub(crate) fn remove_occupant(&mut self, player: PlayerId) -> bool {
        match self.occupants.iter().position(|&p| p == player) {
            Some(index) => {
                self.occupants.remove(index);
                true
            }
            None => false,
        }
    }
}
