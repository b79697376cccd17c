//! Board layout records and validation.
//!
//! A layout is the data contract a board loader produces: an ordered list
//! of `{tile, effect, target?}` records, as found in a board JSON file.
//!
//! ```
//! use rust_boardgame::board::BoardLayout;
//! use rust_boardgame::core::LinearConfig;
//!
//! let layout = BoardLayout::new()
//!     .with_ladder(6, 20)
//!     .with_snake(45, 12)
//!     .with_lose_turn(30);
//!
//! let board = layout.build(&LinearConfig::default()).unwrap();
//! assert_eq!(board.tiles_with_ladders().count(), 1);
//! assert!(board.tile_at(20).unwrap().effect().unwrap().is_placeholder());
//! ```

use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::LinearConfig;
use crate::effects::Effect;
use crate::error::{BoardConfigError, Error, Result};

use super::path::Board;

/// Effect names accepted in layout records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    Ladder,
    Snake,
    LoseTurn,
    Back,
}

impl EffectKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EffectKind::Ladder => "Ladder",
            EffectKind::Snake => "Snake",
            EffectKind::LoseTurn => "LoseTurn",
            EffectKind::Back => "Back",
        }
    }
}

impl FromStr for EffectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Ladder" => Ok(EffectKind::Ladder),
            "Snake" => Ok(EffectKind::Snake),
            "LoseTurn" => Ok(EffectKind::LoseTurn),
            "Back" => Ok(EffectKind::Back),
            other => Err(Error::UnknownEffectKind(other.to_string())),
        }
    }
}

/// One `{tile, effect, target?}` entry of a layout.
///
/// `effect` stays a string so an unknown kind is reported as
/// `UnknownEffectKind` during validation rather than as a parse failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileEffectRecord {
    pub tile: u32,
    pub effect: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
}

impl TileEffectRecord {
    pub fn new(tile: u32, kind: EffectKind, target: Option<u32>) -> Self {
        Self {
            tile,
            effect: kind.as_str().to_string(),
            target,
        }
    }

    /// Turn the record into an effect, checking it against a path of
    /// `path_length` tiles.
    pub fn to_effect(&self, path_length: u32) -> Result<Effect> {
        let kind: EffectKind = self.effect.parse()?;
        let tile = self.tile;

        if tile == 0 || tile > path_length {
            return Err(BoardConfigError::TileOutOfRange { tile, path_length }.into());
        }
        if tile == 1 || tile == path_length {
            return Err(BoardConfigError::ReservedTile { tile }.into());
        }

        let effect = match kind {
            EffectKind::Ladder | EffectKind::Snake => {
                let target = self.target.ok_or(BoardConfigError::MissingTarget {
                    tile,
                    kind: kind.as_str(),
                })?;
                if target == 0 || target > path_length {
                    return Err(BoardConfigError::TargetOutOfRange {
                        tile,
                        target,
                        path_length,
                    }
                    .into());
                }
                if kind == EffectKind::Ladder {
                    if target <= tile {
                        return Err(BoardConfigError::InvalidLadder { tile, target }.into());
                    }
                    Effect::ladder(tile, target)
                } else {
                    if target >= tile {
                        return Err(BoardConfigError::InvalidSnake { tile, target }.into());
                    }
                    Effect::snake(tile, target)
                }
            }
            EffectKind::LoseTurn => Effect::SkipTurn,
            EffectKind::Back => Effect::back_to_start(tile),
        };

        Ok(effect)
    }
}

/// Ordered list of effect records for a linear board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub tiles: Vec<TileEffectRecord>,
}

impl BoardLayout {
    /// Create an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_record(mut self, record: TileEffectRecord) -> Self {
        self.tiles.push(record);
        self
    }

    #[must_use]
    pub fn with_ladder(self, tile: u32, target: u32) -> Self {
        self.with_record(TileEffectRecord::new(tile, EffectKind::Ladder, Some(target)))
    }

    #[must_use]
    pub fn with_snake(self, tile: u32, target: u32) -> Self {
        self.with_record(TileEffectRecord::new(tile, EffectKind::Snake, Some(target)))
    }

    #[must_use]
    pub fn with_lose_turn(self, tile: u32) -> Self {
        self.with_record(TileEffectRecord::new(tile, EffectKind::LoseTurn, None))
    }

    #[must_use]
    pub fn with_back_to_start(self, tile: u32) -> Self {
        self.with_record(TileEffectRecord::new(tile, EffectKind::Back, None))
    }

    /// Validate every record and build the board.
    ///
    /// Checks, in order: the grid, each record on its own, one effect per
    /// tile, then landing tiles. A ladder or snake landing tile gets a
    /// `Placeholder` unless it is the first or last tile, which never carry
    /// effects. The result does not depend on record order.
    ///
    /// # Errors
    ///
    /// Besides the per-record and grid errors, a ladder or snake whose
    /// landing tile carries another record's effect fails with
    /// [`BoardConfigError::TargetCarriesEffect`], whichever record comes
    /// first.
    pub fn build(&self, config: &LinearConfig) -> Result<Board> {
        config.validate()?;
        let path_length = config.path_length();

        let mut placed: Vec<Effect> = Vec::with_capacity(self.tiles.len());
        let mut by_tile: FxHashMap<u32, Effect> = FxHashMap::default();

        for record in &self.tiles {
            let effect = record.to_effect(path_length)?;
            if by_tile.insert(record.tile, effect).is_some() {
                return Err(BoardConfigError::DuplicateEffect { tile: record.tile }.into());
            }
            placed.push(effect);
        }

        let mut placeholders = Vec::new();
        for effect in &placed {
            let (base, target) = match *effect {
                Effect::Ladder { base, target } | Effect::Snake { base, target } => (base, target),
                _ => continue,
            };
            if target == 1 || target == path_length {
                continue;
            }
            if by_tile.contains_key(&target) {
                return Err(BoardConfigError::TargetCarriesEffect { tile: base, target }.into());
            }
            placeholders.push(target);
        }

        let mut board = Board::new(path_length);
        for (tile, effect) in by_tile {
            board.set_effect(tile, effect)?;
        }
        for target in placeholders {
            board.set_effect(target, Effect::Placeholder)?;
        }

        Ok(board)
    }
}
