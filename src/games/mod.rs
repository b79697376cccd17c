//! Concrete rule sets.
//!
//! - `snakes_ladders`: linear path, effects on arrival, first to the end wins
//! - `ludo`: cyclic path with per-color home lanes
//!
//! [`Game`] wraps either controller so a caller can create and drive a
//! session by [`GameKind`] without naming the concrete type.

pub mod ludo;
pub mod snakes_ladders;

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardLayout};
use crate::core::{CyclicConfig, LinearConfig, Player, PlayerId, Roll};
use crate::error::Result;
use crate::observer::{GameObserver, NoopObserver};
use crate::rules::{GameController, GameStatus, TurnOutcome};

pub use ludo::Ludo;
pub use snakes_ladders::SnakesAndLadders;

/// The supported rule sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    SnakesAndLadders,
    Ludo,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::SnakesAndLadders, GameKind::Ludo];

    /// Most players the rule set seats.
    #[must_use]
    pub fn max_players(self) -> usize {
        match self {
            GameKind::SnakesAndLadders => snakes_ladders::MAX_PLAYERS,
            GameKind::Ludo => ludo::MAX_PLAYERS,
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameKind::SnakesAndLadders => write!(f, "Snakes & Ladders"),
            GameKind::Ludo => write!(f, "Ludo"),
        }
    }
}

/// Everything besides players and observer needed to create a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameSetup {
    SnakesAndLadders {
        config: LinearConfig,
        layout: BoardLayout,
    },
    Ludo(CyclicConfig),
}

impl GameSetup {
    /// Default board of `kind`; the linear one has no effects.
    #[must_use]
    pub fn for_kind(kind: GameKind) -> Self {
        match kind {
            GameKind::SnakesAndLadders => GameSetup::SnakesAndLadders {
                config: LinearConfig::default(),
                layout: BoardLayout::default(),
            },
            GameKind::Ludo => GameSetup::Ludo(CyclicConfig::default()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> GameKind {
        match self {
            GameSetup::SnakesAndLadders { .. } => GameKind::SnakesAndLadders,
            GameSetup::Ludo(_) => GameKind::Ludo,
        }
    }
}

/// A session of either rule set.
#[derive(Debug)]
pub enum Game<O = NoopObserver> {
    SnakesAndLadders(SnakesAndLadders<O>),
    Ludo(Ludo<O>),
}

macro_rules! dispatch {
    ($self:expr, $game:ident => $body:expr) => {
        match $self {
            Game::SnakesAndLadders($game) => $body,
            Game::Ludo($game) => $body,
        }
    };
}

impl<O: GameObserver> Game<O> {
    /// Validate `setup` and create an unstarted session.
    pub fn new(setup: &GameSetup, players: Vec<Player>, observer: O) -> Result<Self> {
        match setup {
            GameSetup::SnakesAndLadders { config, layout } => Ok(Game::SnakesAndLadders(
                SnakesAndLadders::from_layout(config, layout, players, observer)?,
            )),
            GameSetup::Ludo(config) => Ok(Game::Ludo(Ludo::new(config, players, observer)?)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> GameKind {
        match self {
            Game::SnakesAndLadders(_) => GameKind::SnakesAndLadders,
            Game::Ludo(_) => GameKind::Ludo,
        }
    }

    pub fn start(&mut self) -> Result<()> {
        dispatch!(self, game => game.start())
    }

    pub fn take_turn<R: Roll + ?Sized>(&mut self, dice: &mut R) -> Result<TurnOutcome> {
        dispatch!(self, game => game.take_turn(dice))
    }

    pub fn move_by(&mut self, player: PlayerId, steps: u32) -> Result<()> {
        dispatch!(self, game => game.move_by(player, steps))
    }

    pub fn advance_turn(&mut self) -> Result<PlayerId> {
        dispatch!(self, game => game.advance_turn())
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        dispatch!(self, game => game.status())
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        dispatch!(self, game => game.current_player())
    }

    #[must_use]
    pub fn upcoming_player(&self) -> PlayerId {
        dispatch!(self, game => game.upcoming_player())
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        dispatch!(self, game => game.players())
    }

    /// The shared path.
    #[must_use]
    pub fn board(&self) -> &Board {
        dispatch!(self, game => game.board())
    }

    /// Whether the driver should stop: someone won the linear game, or
    /// every Ludo player is home.
    #[must_use]
    pub fn is_over(&self) -> bool {
        match self {
            Game::SnakesAndLadders(game) => game.is_finished(),
            Game::Ludo(game) => game.all_home(),
        }
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        dispatch!(self, game => game.observer())
    }

    pub fn into_observer(self) -> O {
        dispatch!(self, game => game.into_observer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoadedDice;
    use crate::observer::EventLog;

    fn players(count: usize) -> Vec<Player> {
        (0..count).map(|i| Player::new(format!("P{}", i + 1), "pawn.png")).collect()
    }

    #[test]
    fn test_create_by_kind() {
        for kind in GameKind::ALL {
            let setup = GameSetup::for_kind(kind);
            assert_eq!(setup.kind(), kind);

            let mut game = Game::new(&setup, players(2), NoopObserver).unwrap();
            assert_eq!(game.kind(), kind);
            assert_eq!(game.status(), GameStatus::NotStarted);

            game.start().unwrap();
            assert_eq!(game.status(), GameStatus::InProgress);
            assert_eq!(game.players().len(), 2);
        }
    }

    #[test]
    fn test_dispatch_take_turn() {
        let setup = GameSetup::for_kind(GameKind::Ludo);
        let mut game = Game::new(&setup, players(2), EventLog::new()).unwrap();
        game.start().unwrap();

        let mut dice = LoadedDice::new([3]);
        let outcome = game.take_turn(&mut dice).unwrap();
        assert_eq!(outcome.player, PlayerId::new(0));
        assert_eq!(outcome.roll, 3);
        assert_eq!(game.current_player(), PlayerId::new(1));
        assert_eq!(game.upcoming_player(), PlayerId::new(0));
        assert_eq!(game.board().occupants(46).unwrap(), &[PlayerId::new(0)]);
        assert!(!game.is_over());
        assert_eq!(game.into_observer().len(), 3);
    }

    #[test]
    fn test_player_limits() {
        assert_eq!(GameKind::Ludo.max_players(), 4);
        let setup = GameSetup::for_kind(GameKind::Ludo);
        assert!(Game::new(&setup, players(5), NoopObserver).is_err());
    }

    #[test]
    fn test_oversized_setup_is_an_error() {
        let json = r#"{"SnakesAndLadders":{"config":{"width":70000,"height":70000},"layout":{"tiles":[]}}}"#;
        let setup: GameSetup = serde_json::from_str(json).unwrap();

        let err = Game::new(&setup, players(2), NoopObserver).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::BoardConfiguration(crate::error::BoardConfigError::PathTooLong { .. })
        ));
    }

    #[test]
    fn test_setup_serialization() {
        let setup = GameSetup::SnakesAndLadders {
            config: LinearConfig::default(),
            layout: BoardLayout::new().with_ladder(4, 14),
        };
        let json = serde_json::to_string(&setup).unwrap();
        let deserialized: GameSetup = serde_json::from_str(&json).unwrap();
        assert_eq!(setup, deserialized);
    }
}
