//! Cyclic turn order.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::player::PlayerId;

/// Endless round-robin over the seats of a session.
///
/// Never runs dry: [`Iterator::next`] always returns `Some`. Seats cannot
/// be added or removed once the sequencer exists.
///
/// ```
/// use rust_boardgame::core::{PlayerId, TurnSequencer};
///
/// let mut turns = TurnSequencer::new(3).unwrap();
/// let order: Vec<_> = turns.by_ref().take(4).collect();
/// assert_eq!(order, vec![
///     PlayerId::new(0), PlayerId::new(1), PlayerId::new(2), PlayerId::new(0),
/// ]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSequencer {
    player_count: usize,
    cursor: usize,
}

impl TurnSequencer {
    /// Sequencer over `player_count` seats. Fails with `NoPlayers` on zero.
    pub fn new(player_count: usize) -> Result<Self> {
        if player_count == 0 {
            return Err(Error::NoPlayers);
        }
        Ok(Self {
            player_count,
            cursor: 0,
        })
    }

    /// Return the seat under the cursor and move the cursor on.
    pub fn advance(&mut self) -> PlayerId {
        let player = PlayerId::new(self.cursor as u8);
        self.cursor = (self.cursor + 1) % self.player_count;
        player
    }

    /// Seat the next call to [`advance`](Self::advance) will return.
    #[must_use]
    pub fn peek(&self) -> PlayerId {
        PlayerId::new(self.cursor as u8)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }
}

impl Iterator for TurnSequencer {
    type Item = PlayerId;

    fn next(&mut self) -> Option<PlayerId> {
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
