//! Ludo on a shared loop with four private home lanes.
//!
//! - Players take colors in seat order and start on that color's tile
//! - Loop moves wrap past the last tile
//! - After `home_entry_threshold` main-path steps, the rest of a roll goes
//!   into the player's home lane; overshoot stops on the last lane tile
//! - Reaching the last lane tile completes the player; the session keeps
//!   going for everyone else

mod game;

pub use game::{Ludo, MAX_PLAYERS};
