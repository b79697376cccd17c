//! Tile effect system.
//!
//! - `Effect`: closed set of effects a tile can carry
//! - `EffectResolver`: executes an effect through an `EffectHost`
//!
//! ## Chain Bound
//!
//! A movement effect calls back into the controller, which looks up the
//! landing tile's effect in turn. Board construction seeds every ladder
//! and snake landing tile with `Placeholder`, so such a chain resolves at
//! most one relocation per arrival.

mod effect;
mod resolver;

pub use effect::{Effect, MovementEffect};
pub use resolver::{EffectHost, EffectResolver, Resolution};
