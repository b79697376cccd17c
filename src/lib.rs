//! # rust-boardgame
//!
//! Rules engine for two dice-driven race games: Snakes & Ladders and Ludo.
//!
//! ## Design Principles
//!
//! 1. **Explicit Ownership**: each session is one controller value. There
//!    is no global game or turn state.
//!
//! 2. **Closed Effects**: tile effects are a sum type resolved by an
//!    exhaustive match, never an open trait.
//!
//! 3. **Configuration Over Constants**: board sizes, the Ludo home-entry
//!    threshold and the color to start-tile mapping are inputs.
//!
//! 4. **Injected Observer**: controllers report relocations through a
//!    [`GameObserver`] passed at construction and never wait on it.
//!
//! ## Modules
//!
//! - `core`: players, dice, turn sequencer, RNG, configuration
//! - `board`: tiles, linear and cyclic boards, layout validation
//! - `effects`: tile effects and their resolution
//! - `observer`: notification trait, event log
//! - `rules`: controller core and the `GameController` trait
//! - `games`: Snakes & Ladders and Ludo rule sets
//!
//! ## Example
//!
//! ```
//! use rust_boardgame::{
//!     BoardLayout, Dice, GameController, GameStatus, LinearConfig, NoopObserver, Player,
//!     SnakesAndLadders,
//! };
//!
//! let layout = BoardLayout::new().with_ladder(3, 40).with_snake(70, 12);
//! let players = vec![Player::new("Ada", "red.png"), Player::new("Bo", "blue.png")];
//! let mut game =
//!     SnakesAndLadders::from_layout(&LinearConfig::default(), &layout, players, NoopObserver)
//!         .unwrap();
//! game.start().unwrap();
//!
//! let mut dice = Dice::seeded(1, 7).unwrap();
//! while !matches!(game.status(), GameStatus::Finished { .. }) {
//!     game.take_turn(&mut dice).unwrap();
//! }
//! assert!(game.winner().is_some());
//! ```

pub mod board;
pub mod core;
pub mod effects;
pub mod error;
pub mod games;
pub mod observer;
pub mod rules;

// Re-export commonly used types
pub use crate::error::{BoardConfigError, Error, Result};

pub use crate::core::{
    CyclicConfig, Dice, Die, GameRng, LinearConfig, LoadedDice, Player, PlayerId, PlayerMap, Roll,
    TurnSequencer, DIE_SIDES,
};

pub use crate::board::{
    Board, BoardLayout, Color, ColorMap, CyclicBoard, EffectKind, Occupants, Tile, TileEffectRecord,
};

pub use crate::effects::{Effect, EffectHost, EffectResolver, MovementEffect, Resolution};

pub use crate::observer::{EventLog, GameEvent, GameObserver, Location, MovementKind, NoopObserver};

pub use crate::rules::{ControllerCore, GameController, GameStatus, TurnOutcome};

pub use crate::games::{Game, GameKind, GameSetup, Ludo, SnakesAndLadders};
