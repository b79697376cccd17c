//! Rule-set configuration.
//!
//! Sessions are configured at construction by providing:
//! - `LinearConfig`: grid dimensions of a Snakes & Ladders board
//! - `CyclicConfig`: main-path length, home-lane length, home-entry
//!   threshold and start tiles of a Ludo board
//!
//! Values that differ between published variants of these games (the
//! Ludo entry threshold, the color to start-tile mapping) are inputs
//! here rather than constants buried in the rules.

use serde::{Deserialize, Serialize};

use crate::board::{Color, ColorMap};
use crate::error::BoardConfigError;

/// Longest path or home lane a board may have.
pub const MAX_PATH_LENGTH: u32 = 10_000;

fn check_length(length: u64) -> Result<(), BoardConfigError> {
    if length < 2 {
        return Err(BoardConfigError::PathTooShort(length as u32));
    }
    if length > u64::from(MAX_PATH_LENGTH) {
        return Err(BoardConfigError::PathTooLong {
            length,
            max: MAX_PATH_LENGTH,
        });
    }
    Ok(())
}

/// Configuration for the linear-path (Snakes & Ladders) rules.
///
/// The path is laid out on a `width` x `height` grid for display; the
/// rules only care about `path_length()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearConfig {
    /// Tiles per row.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self { width: 10, height: 9 }
    }
}

impl LinearConfig {
    /// A `width` x `height` board.
    #[must_use]
    pub fn grid(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A single-row board of the given length.
    #[must_use]
    pub fn with_path_length(path_length: u32) -> Self {
        Self {
            width: path_length,
            height: 1,
        }
    }

    /// Number of tiles; the last one is the goal.
    ///
    /// Saturates on grids too large to count; `validate` rejects those.
    #[must_use]
    pub fn path_length(&self) -> u32 {
        self.width.saturating_mul(self.height)
    }

    /// Check the board has a start and a goal and fits `MAX_PATH_LENGTH`.
    pub fn validate(&self) -> Result<(), BoardConfigError> {
        check_length(u64::from(self.width) * u64::from(self.height))
    }
}

/// Configuration for the cyclic-path (Ludo) rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclicConfig {
    /// Tiles on the shared loop.
    pub path_length: u32,
    /// Tiles in each private home lane; the last one is the goal.
    pub lane_length: u32,
    /// Main-path steps a player walks before further steps go into
    /// their home lane.
    pub home_entry_threshold: u32,
    /// Tile on the shared loop where each color starts.
    pub start_tiles: ColorMap<u32>,
}

impl Default for CyclicConfig {
    fn default() -> Self {
        Self {
            path_length: 56,
            lane_length: 6,
            home_entry_threshold: 53,
            start_tiles: ColorMap::new(|color| match color {
                Color::Yellow => 43,
                Color::Red => 1,
                Color::Blue => 15,
                Color::Green => 29,
            }),
        }
    }
}

impl CyclicConfig {
    #[must_use]
    pub fn with_home_entry_threshold(mut self, threshold: u32) -> Self {
        self.home_entry_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_lane_length(mut self, lane_length: u32) -> Self {
        self.lane_length = lane_length;
        self
    }

    #[must_use]
    pub fn with_start_tile(mut self, color: Color, tile: u32) -> Self {
        self.start_tiles[color] = tile;
        self
    }

    /// Reject layouts the rules cannot play on.
    pub fn validate(&self) -> Result<(), BoardConfigError> {
        check_length(u64::from(self.path_length))?;
        if self.lane_length == 0 {
            return Err(BoardConfigError::InvalidLaneLength);
        }
        if self.lane_length > MAX_PATH_LENGTH {
            return Err(BoardConfigError::PathTooLong {
                length: u64::from(self.lane_length),
                max: MAX_PATH_LENGTH,
            });
        }
        if self.home_entry_threshold == 0 {
            return Err(BoardConfigError::InvalidThreshold);
        }
        for (_, &tile) in self.start_tiles.iter() {
            if tile == 0 || tile > self.path_length {
                return Err(BoardConfigError::InvalidStartTile {
                    tile,
                    path_length: self.path_length,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_defaults() {
        let config = LinearConfig::default();
        assert_eq!(config.path_length(), 90);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_linear_too_short() {
        let config = LinearConfig::with_path_length(1);
        assert_eq!(config.validate(), Err(BoardConfigError::PathTooShort(1)));
    }

    #[test]
    fn test_linear_huge_grid_is_rejected() {
        let config = LinearConfig::grid(70_000, 70_000);
        assert_eq!(config.path_length(), u32::MAX);
        assert_eq!(
            config.validate(),
            Err(BoardConfigError::PathTooLong {
                length: 4_900_000_000,
                max: MAX_PATH_LENGTH,
            })
        );

        let config = LinearConfig::with_path_length(MAX_PATH_LENGTH + 1);
        assert!(matches!(config.validate(), Err(BoardConfigError::PathTooLong { .. })));
        assert!(LinearConfig::with_path_length(MAX_PATH_LENGTH).validate().is_ok());
    }

    #[test]
    fn test_cyclic_rejects_oversized_board() {
        let mut config = CyclicConfig::default();
        config.path_length = u32::MAX;
        assert!(matches!(config.validate(), Err(BoardConfigError::PathTooLong { .. })));

        let config = CyclicConfig::default().with_lane_length(MAX_PATH_LENGTH + 1);
        assert!(matches!(config.validate(), Err(BoardConfigError::PathTooLong { .. })));
    }

    #[test]
    fn test_cyclic_defaults() {
        let config = CyclicConfig::default();
        assert_eq!(config.path_length, 56);
        assert_eq!(config.lane_length, 6);
        assert_eq!(config.home_entry_threshold, 53);
        assert_eq!(config.start_tiles[Color::Yellow], 43);
        assert_eq!(config.start_tiles[Color::Red], 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cyclic_builders() {
        let config = CyclicConfig::default()
            .with_home_entry_threshold(52)
            .with_lane_length(5)
            .with_start_tile(Color::Green, 30);

        assert_eq!(config.home_entry_threshold, 52);
        assert_eq!(config.lane_length, 5);
        assert_eq!(config.start_tiles[Color::Green], 30);
    }

    #[test]
    fn test_cyclic_rejects_bad_start_tile() {
        let config = CyclicConfig::default().with_start_tile(Color::Blue, 57);
        assert_eq!(
            config.validate(),
            Err(BoardConfigError::InvalidStartTile { tile: 57, path_length: 56 })
        );

        let config = CyclicConfig::default().with_start_tile(Color::Blue, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cyclic_rejects_empty_lane_and_threshold() {
        let config = CyclicConfig::default().with_lane_length(0);
        assert_eq!(config.validate(), Err(BoardConfigError::InvalidLaneLength));

        let config = CyclicConfig::default().with_home_entry_threshold(0);
        assert_eq!(config.validate(), Err(BoardConfigError::InvalidThreshold));
    }

    #[test]
    fn test_config_serde() {
        let config = CyclicConfig::default().with_home_entry_threshold(52);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CyclicConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
