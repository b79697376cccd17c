//! Effect resolution - executing tile effects against a controller.
//!
//! The resolver never touches the board itself. Movement effects ask the
//! host to move the player, turn effects ask it to mark a skip, so the
//! rule set stays the only code that mutates occupancy.

use crate::core::PlayerId;
use crate::error::Result;
use crate::observer::MovementKind;

use super::Effect;

/// The controller surface an effect can act through.
pub trait EffectHost {
    /// Relocate `player` to `tile` on the path the rule set moves along.
    fn move_player(&mut self, player: PlayerId, tile: u32, kind: MovementKind) -> Result<()>;

    /// Make `player` lose their next turn.
    fn mark_player_to_skip(&mut self, player: PlayerId) -> Result<()>;
}

/// Result of resolving an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The player was moved to `to`.
    Relocated { to: u32 },
    /// The player will miss their next turn.
    SkipMarked,
    /// Nothing happened.
    NoOp,
}

/// Resolves tile effects.
pub struct EffectResolver;

impl EffectResolver {
    /// Execute `effect` for the player who just arrived on its tile.
    ///
    /// Movement effects are teleports, reported as
    /// [`MovementKind::Instant`].
    pub fn resolve<H>(effect: &Effect, player: PlayerId, host: &mut H) -> Result<Resolution>
    where
        H: EffectHost + ?Sized,
    {
        match *effect {
            Effect::Ladder { target, .. }
            | Effect::Snake { target, .. }
            | Effect::BackToStart { target, .. } => {
                host.move_player(player, target, MovementKind::Instant)?;
                Ok(Resolution::Relocated { to: target })
            }

            Effect::SkipTurn => {
                host.mark_player_to_skip(player)?;
                Ok(Resolution::SkipMarked)
            }

            Effect::Placeholder => Ok(Resolution::NoOp),
        }
    }
}

impl Effect {
    /// Shorthand for [`EffectResolver::resolve`].
    pub fn execute<H>(&self, player: PlayerId, host: &mut H) -> Result<Resolution>
    where
        H: EffectHost + ?Sized,
    {
        EffectResolver::resolve(self, player, host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Default)]
    struct RecordingHost {
        moves: Vec<(PlayerId, u32, MovementKind)>,
        skips: Vec<PlayerId>,
        fail_moves: bool,
    }

    impl EffectHost for RecordingHost {
        fn move_player(&mut self, player: PlayerId, tile: u32, kind: MovementKind) -> Result<()> {
            if self.fail_moves {
                return Err(Error::IndexOutOfRange { index: tile, length: 0 });
            }
            self.moves.push((player, tile, kind));
            Ok(())
        }

        fn mark_player_to_skip(&mut self, player: PlayerId) -> Result<()> {
            self.skips.push(player);
            Ok(())
        }
    }

    #[test]
    fn test_ladder_relocates_instantly() {
        let mut host = RecordingHost::default();
        let p = PlayerId::new(1);

        let result = Effect::ladder(6, 20).execute(p, &mut host).unwrap();

        assert_eq!(result, Resolution::Relocated { to: 20 });
        assert_eq!(host.moves, vec![(p, 20, MovementKind::Instant)]);
        assert!(host.skips.is_empty());
    }

    #[test]
    fn test_snake_and_back_to_start() {
        let mut host = RecordingHost::default();
        let p = PlayerId::new(0);

        EffectResolver::resolve(&Effect::snake(40, 12), p, &mut host).unwrap();
        EffectResolver::resolve(&Effect::back_to_start(33), p, &mut host).unwrap();

        let targets: Vec<_> = host.moves.iter().map(|&(_, t, _)| t).collect();
        assert_eq!(targets, vec![12, 1]);
    }

    #[test]
    fn test_skip_turn_marks_without_moving() {
        let mut host = RecordingHost::default();
        let p = PlayerId::new(2);

        let result = Effect::SkipTurn.execute(p, &mut host).unwrap();

        assert_eq!(result, Resolution::SkipMarked);
        assert_eq!(host.skips, vec![p]);
        assert!(host.moves.is_empty());
    }

    #[test]
    fn test_placeholder_is_noop() {
        let mut host = RecordingHost::default();

        let result = Effect::Placeholder.execute(PlayerId::new(0), &mut host).unwrap();

        assert_eq!(result, Resolution::NoOp);
        assert!(host.moves.is_empty());
        assert!(host.skips.is_empty());
    }

    #[test]
    fn test_host_error_propagates() {
        let mut host = RecordingHost {
            fail_moves: true,
            ..Default::default()
        };

        let result = Effect::ladder(2, 9).execute(PlayerId::new(0), &mut host);
        assert!(result.is_err());
    }
}
