//! Ordered tile sequences and occupancy bookkeeping.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::effects::Effect;
use crate::error::{Error, Result};

use super::tile::Tile;

/// A fixed-length, 1-indexed sequence of tiles.
///
/// Used for the linear Snakes & Ladders path, the Ludo main loop, and
/// each Ludo home lane. The length never changes after construction;
/// only effects (while building) and occupants (while playing) do.
///
/// Controllers hand out `&Board` only, so once a session owns a board the
/// controller is the sole code that can move occupants around.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// `length` empty tiles numbered `1..=length`.
    #[must_use]
    pub fn new(length: u32) -> Self {
        Self {
            tiles: (1..=length).map(Tile::new).collect(),
        }
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> u32 {
        self.tiles.len() as u32
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles, tile 1 first.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn slot(&self, index: u32) -> Result<usize> {
        if index == 0 || index > self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                length: self.len(),
            });
        }
        Ok(index as usize - 1)
    }

    /// The tile at 1-based `index`.
    pub fn tile_at(&self, index: u32) -> Result<&Tile> {
        let slot = self.slot(index)?;
        Ok(&self.tiles[slot])
    }

    fn tile_at_mut(&mut self, index: u32) -> Result<&mut Tile> {
        let slot = self.slot(index)?;
        Ok(&mut self.tiles[slot])
    }

    /// Players on tile `index`, earliest arrival first.
    pub fn occupants(&self, index: u32) -> Result<&[PlayerId]> {
        Ok(self.tile_at(index)?.occupants())
    }

    /// Number of the first tile listing `player`, if any.
    #[must_use]
    pub fn locate(&self, player: PlayerId) -> Option<u32> {
        self.tiles
            .iter()
            .find(|tile| tile.contains(player))
            .map(Tile::number)
    }

    /// Append `player` to the occupants of tile `index`.
    pub fn add_occupant(&mut self, index: u32, player: PlayerId) -> Result<()> {
        self.tile_at_mut(index)?.push_occupant(player);
        Ok(())
    }

    /// Remove and return the earliest arrival on tile `index`.
    pub fn remove_first_occupant(&mut self, index: u32) -> Result<PlayerId> {
        self.tile_at_mut(index)?
            .pop_first_occupant()
            .ok_or(Error::EmptyTile { tile: index })
    }

    /// Remove `player` from tile `index`.
    ///
    /// Fails with `EmptyTile` if nobody is there, or `PlayerNotOnBoard` if
    /// others are but `player` is not.
    pub fn remove_occupant(&mut self, index: u32, player: PlayerId) -> Result<()> {
        let tile = self.tile_at_mut(index)?;
        if tile.is_empty() {
            return Err(Error::EmptyTile { tile: index });
        }
        if !tile.remove_occupant(player) {
            return Err(Error::PlayerNotOnBoard { player, tile: index });
        }
        Ok(())
    }

    /// Move `player` from tile `from` to tile `to`.
    ///
    /// Both indices are checked before anything changes. Removal from the
    /// old tile always happens before the add on the new one.
    pub fn relocate(&mut self, player: PlayerId, from: u32, to: u32) -> Result<()> {
        self.slot(to)?;
        self.remove_occupant(from, player)?;
        self.add_occupant(to, player)
    }

    pub(crate) fn set_effect(&mut self, index: u32, effect: Effect) -> Result<()> {
        self.tile_at_mut(index)?.set_effect(effect);
        Ok(())
    }

    /// Tiles whose effect is a ladder.
    pub fn tiles_with_ladders(&self) -> impl Iterator<Item = &Tile> {
        self.tiles
            .iter()
            .filter(|tile| matches!(tile.effect(), Some(Effect::Ladder { .. })))
    }

    /// Tiles whose effect is a snake.
    pub fn tiles_with_snakes(&self) -> impl Iterator<Item = &Tile> {
        self.tiles
            .iter()
            .filter(|tile| matches!(tile.effect(), Some(Effect::Snake { .. })))
    }

    /// Total occupant entries across all tiles.
    #[must_use]
    pub fn occupant_count(&self) -> usize {
        self.tiles.iter().map(|tile| tile.occupants().len()).sum()
    }
}
