//! Board and tile model.
//!
//! - `Tile`: one cell, an optional effect and an arrival-ordered
//!   occupant list
//! - `Board`: fixed-length 1-indexed tile sequence with occupancy
//!   operations
//! - `BoardLayout`: effect records plus the validation that turns them
//!   into a linear board
//! - `CyclicBoard`: shared loop, four home lanes and per-color start tiles
//!
//! ## Occupancy Invariant
//!
//! A player is listed on at most one tile of a session at any time. The
//! controllers keep this by removing a player from their previous tile
//! before adding them to the next one.

mod color;
mod cyclic;
mod layout;
mod path;
mod tile;

pub use color::{Color, ColorMap};
pub use cyclic::CyclicBoard;
pub use layout::{BoardLayout, EffectKind, TileEffectRecord};
pub use path::Board;
pub use tile::{Occupants, Tile};
