//! Error types for board construction and game control.
//!
//! Two layers:
//! - [`BoardConfigError`]: a board or rule configuration is malformed. Raised
//!   eagerly while a session is being built, so a session is either fully
//!   valid or never starts.
//! - [`Error`]: everything a controller operation can report, including
//!   configuration errors via `#[from]`.

use thiserror::Error as ThisError;

use crate::core::PlayerId;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Malformed or out-of-range board setup.
    #[error("board configuration error: {0}")]
    BoardConfiguration(#[from] BoardConfigError),

    /// An effect string in a layout record is not recognised.
    #[error("unknown effect kind `{0}`")]
    UnknownEffectKind(String),

    /// A tile lookup fell outside `1..=length`.
    #[error("tile index {index} out of range 1..={length}")]
    IndexOutOfRange { index: u32, length: u32 },

    /// Tried to remove an occupant from a tile that has none.
    #[error("tile {tile} has no occupants")]
    EmptyTile { tile: u32 },

    /// The player is not listed on the tile the controller expected.
    #[error("{player} is not an occupant of tile {tile}")]
    PlayerNotOnBoard { player: PlayerId, tile: u32 },

    /// `start()` was called on a session that is already running.
    #[error("game already started")]
    AlreadyStarted,

    /// A move was requested before `start()`.
    #[error("game not started")]
    NotStarted,

    /// A move was requested after the session was won.
    #[error("game already finished")]
    GameFinished,

    /// A controller or turn sequencer was built from an empty player list.
    #[error("at least one player is required")]
    NoPlayers,

    /// More players than the rule set has seats for.
    #[error("{count} players given but at most {max} are supported")]
    TooManyPlayers { count: usize, max: usize },

    /// A player was registered with a blank name.
    #[error("player name cannot be empty")]
    EmptyPlayerName,

    /// A `PlayerId` that does not belong to this session.
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    /// Dice must be built from at least one die.
    #[error("dice count must be at least 1, got {0}")]
    InvalidDiceCount(usize),
}

/// Board and rule configuration errors.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum BoardConfigError {
    #[error("path length {0} is too short, need at least 2 tiles")]
    PathTooShort(u32),

    #[error("path length {length} exceeds the maximum of {max} tiles")]
    PathTooLong { length: u64, max: u32 },

    #[error("tile {tile} is outside 1..={path_length}")]
    TileOutOfRange { tile: u32, path_length: u32 },

    #[error("tile {tile} is the first or last tile and cannot carry an effect")]
    ReservedTile { tile: u32 },

    #[error("{kind} on tile {tile} has no target")]
    MissingTarget { tile: u32, kind: &'static str },

    #[error("target {target} of tile {tile} is outside 1..={path_length}")]
    TargetOutOfRange { tile: u32, target: u32, path_length: u32 },

    #[error("ladder on tile {tile} must lead upward, got target {target}")]
    InvalidLadder { tile: u32, target: u32 },

    #[error("snake on tile {tile} must lead downward, got target {target}")]
    InvalidSnake { tile: u32, target: u32 },

    #[error("tile {tile} already carries an effect")]
    DuplicateEffect { tile: u32 },

    #[error("tile {tile} targets tile {target}, which carries its own effect")]
    TargetCarriesEffect { tile: u32, target: u32 },

    #[error("start tile {tile} is outside 1..={path_length}")]
    InvalidStartTile { tile: u32, path_length: u32 },

    #[error("home lane length must be at least 1")]
    InvalidLaneLength,

    #[error("home entry threshold must be at least 1")]
    InvalidThreshold,
}
