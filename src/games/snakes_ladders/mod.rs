//! Snakes & Ladders on a single linear path.
//!
//! - Everyone starts on tile 1
//! - A roll moves the current player forward by the dice total
//! - Landing on a ladder, snake or back-to-start tile teleports the player;
//!   landing on a lose-turn tile costs their next turn
//! - Reaching or passing the last tile wins and ends the session

mod game;

pub use game::{SnakesAndLadders, MAX_PLAYERS};
