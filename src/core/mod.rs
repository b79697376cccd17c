//! Core types shared by both rule sets: players, dice, turn order, RNG,
//! configuration.
//!
//! Nothing in here knows about tiles or effects. Rule sets combine these
//! with a board from `crate::board`.

pub mod config;
pub mod dice;
pub mod player;
pub mod rng;
pub mod turn;

pub use config::{CyclicConfig, LinearConfig, MAX_PATH_LENGTH};
pub use dice::{Dice, Die, LoadedDice, Roll, DIE_SIDES};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use turn::TurnSequencer;
