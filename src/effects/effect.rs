//! Effect definitions.
//!
//! Effects are bound to tiles and fire when a player arrives. The set is
//! closed: adding a kind means adding a variant here and handling it in
//! the resolver's exhaustive match.

use serde::{Deserialize, Serialize};

/// An effect bound to a tile.
///
/// ## Movement Effects
///
/// Relocate the arriving player from `base` to `target`:
/// - `Ladder`: `target > base`
/// - `Snake`: `target < base`
/// - `BackToStart`: `target` is tile 1
///
/// ## Turn Effects
///
/// - `SkipTurn`: the arriving player loses their next turn
///
/// ## Markers
///
/// - `Placeholder`: does nothing. Seeded on the landing tile of every
///   ladder and snake so a relocation can never land on another
///   movement effect and chain further.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    Ladder { base: u32, target: u32 },
    Snake { base: u32, target: u32 },
    BackToStart { base: u32, target: u32 },
    SkipTurn,
    Placeholder,
}

/// The `base -> target` pair shared by every movement effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovementEffect {
    pub base: u32,
    pub target: u32,
}

impl Effect {
    /// Ladder from `base` up to `target`.
    #[must_use]
    pub fn ladder(base: u32, target: u32) -> Self {
        Self::Ladder { base, target }
    }

    /// Snake from `base` down to `target`.
    #[must_use]
    pub fn snake(base: u32, target: u32) -> Self {
        Self::Snake { base, target }
    }

    /// Send a player on `base` back to tile 1.
    #[must_use]
    pub fn back_to_start(base: u32) -> Self {
        Self::BackToStart { base, target: 1 }
    }

    /// The relocation this effect performs, if it is a movement effect.
    #[must_use]
    pub fn movement(&self) -> Option<MovementEffect> {
        match *self {
            Effect::Ladder { base, target }
            | Effect::Snake { base, target }
            | Effect::BackToStart { base, target } => Some(MovementEffect { base, target }),
            Effect::SkipTurn | Effect::Placeholder => None,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Effect::Placeholder)
    }

    /// Short name, matching the layout record vocabulary where one exists.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Effect::Ladder { .. } => "Ladder",
            Effect::Snake { .. } => "Snake",
            Effect::BackToStart { .. } => "Back",
            Effect::SkipTurn => "LoseTurn",
            Effect::Placeholder => "Placeholder",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_effects() {
        assert_eq!(
            Effect::ladder(6, 20).movement(),
            Some(MovementEffect { base: 6, target: 20 })
        );
        assert_eq!(
            Effect::snake(40, 12).movement(),
            Some(MovementEffect { base: 40, target: 12 })
        );
        assert_eq!(
            Effect::back_to_start(33).movement(),
            Some(MovementEffect { base: 33, target: 1 })
        );
    }

    #[test]
    fn test_non_movement_effects() {
        assert_eq!(Effect::SkipTurn.movement(), None);
        assert_eq!(Effect::Placeholder.movement(), None);
        assert!(Effect::Placeholder.is_placeholder());
        assert!(!Effect::SkipTurn.is_placeholder());
    }

    #[test]
    fn test_names() {
        assert_eq!(Effect::ladder(2, 3).name(), "Ladder");
        assert_eq!(Effect::back_to_start(5).name(), "Back");
        assert_eq!(Effect::SkipTurn.name(), "LoseTurn");
    }

    #[test]
    fn test_effect_serialization() {
        let effect = Effect::snake(50, 7);
        let json = serde_json::to_string(&effect).unwrap();
        let deserialized: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, deserialized);
    }
}
