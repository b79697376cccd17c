//! The Ludo board: a shared loop plus one private home lane per color.

use serde::{Deserialize, Serialize};

use crate::core::CyclicConfig;
use crate::error::BoardConfigError;

use super::color::{Color, ColorMap};
use super::path::Board;

/// Shared cyclic path, four home lanes and the start tile of each color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclicBoard {
    main: Board,
    lanes: ColorMap<Board>,
    start_tiles: ColorMap<u32>,
}

impl CyclicBoard {
    /// Build an empty board from a validated configuration.
    pub fn new(config: &CyclicConfig) -> Result<Self, BoardConfigError> {
        config.validate()?;
        Ok(Self {
            main: Board::new(config.path_length),
            lanes: ColorMap::new(|_| Board::new(config.lane_length)),
            start_tiles: config.start_tiles.clone(),
        })
    }

    /// The shared loop.
    #[must_use]
    pub fn main(&self) -> &Board {
        &self.main
    }

    /// Home lane of `color`.
    #[must_use]
    pub fn lane(&self, color: Color) -> &Board {
        &self.lanes[color]
    }

    /// Tile on the shared loop where `color` enters play.
    #[must_use]
    pub fn start_tile(&self, color: Color) -> u32 {
        self.start_tiles[color]
    }

    #[must_use]
    pub fn start_tiles(&self) -> &ColorMap<u32> {
        &self.start_tiles
    }

    #[must_use]
    pub fn path_length(&self) -> u32 {
        self.main.len()
    }

    #[must_use]
    pub fn lane_length(&self) -> u32 {
        self.lanes[Color::Yellow].len()
    }

    pub(crate) fn main_mut(&mut self) -> &mut Board {
        &mut self.main
    }

    pub(crate) fn lane_mut(&mut self, color: Color) -> &mut Board {
        &mut self.lanes[color]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_shape() {
        let board = CyclicBoard::new(&CyclicConfig::default()).unwrap();

        assert_eq!(board.path_length(), 56);
        assert_eq!(board.lane_length(), 6);
        for color in Color::ALL {
            assert_eq!(board.lane(color).len(), 6);
            assert!(board.lane(color).tiles().iter().all(|t| t.effect().is_none()));
        }
        assert_eq!(board.start_tile(Color::Blue), 15);
        assert_eq!(board.start_tile(Color::Green), 29);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CyclicConfig::default().with_start_tile(Color::Red, 99);
        assert!(CyclicBoard::new(&config).is_err());
    }

    #[test]
    fn test_lanes_are_independent() {
        let mut board = CyclicBoard::new(&CyclicConfig::default()).unwrap();
        board
            .lane_mut(Color::Red)
            .add_occupant(2, crate::core::PlayerId::new(1))
            .unwrap();

        assert_eq!(board.lane(Color::Red).occupant_count(), 1);
        assert_eq!(board.lane(Color::Yellow).occupant_count(), 0);
        assert_eq!(board.main().occupant_count(), 0);
    }
}
