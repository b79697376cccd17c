//! Snakes & Ladders controller.

use crate::board::{Board, BoardLayout, Tile};
use crate::core::{LinearConfig, Player, PlayerId};
use crate::effects::{EffectHost, EffectResolver};
use crate::error::Result;
use crate::observer::{GameObserver, Location, MovementKind, NoopObserver};
use crate::rules::{ControllerCore, GameController};

/// Most seats a linear session supports.
pub const MAX_PLAYERS: usize = 8;

/// One Snakes & Ladders session.
///
/// Everyone starts on tile 1; the first player to reach the last tile
/// wins and the session ends.
#[derive(Debug)]
pub struct SnakesAndLadders<O = NoopObserver> {
    board: Board,
    core: ControllerCore<O>,
}

impl<O: GameObserver> SnakesAndLadders<O> {
    /// Session over an already validated board.
    pub fn new(board: Board, players: Vec<Player>, observer: O) -> Result<Self> {
        let core = ControllerCore::new(players, MAX_PLAYERS, observer)?;
        Ok(Self { board, core })
    }

    /// Validate `layout` against `config` and build a session on it.
    pub fn from_layout(
        config: &LinearConfig,
        layout: &BoardLayout,
        players: Vec<Player>,
        observer: O,
    ) -> Result<Self> {
        let board = layout.build(config)?;
        Self::new(board, players, observer)
    }

    /// Number of tiles; reaching the last one wins.
    #[must_use]
    pub fn path_length(&self) -> u32 {
        self.board.len()
    }

    /// Whether someone has won.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.core.status().is_finished()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.core.status().winner()
    }

    #[must_use]
    pub fn player_to_skip(&self) -> Option<PlayerId> {
        self.core.player_to_skip()
    }

    pub fn tiles_with_ladders(&self) -> impl Iterator<Item = &Tile> {
        self.board.tiles_with_ladders()
    }

    pub fn tiles_with_snakes(&self) -> impl Iterator<Item = &Tile> {
        self.board.tiles_with_snakes()
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        self.core.observer()
    }

    pub fn into_observer(self) -> O {
        self.core.into_observer()
    }
}

impl<O: GameObserver> EffectHost for SnakesAndLadders<O> {
    /// Move `player` to `tile`, then resolve the tile's effect.
    ///
    /// Any tile at or past the end clamps to the last tile and wins;
    /// nothing else is evaluated for that move.
    fn move_player(&mut self, player: PlayerId, tile: u32, kind: MovementKind) -> Result<()> {
        self.core.ensure_in_progress()?;
        let from = self.core.player(player)?.position();
        let goal = self.board.len();

        if tile >= goal {
            self.board.relocate(player, from, goal)?;
            self.core.player_mut(player)?.set_position(goal);
            self.core.notify_moved(player, Location::Main(goal), kind);
            self.core.finish(player);
            return Ok(());
        }

        self.board.relocate(player, from, tile)?;
        self.core.player_mut(player)?.set_position(tile);
        self.core.notify_moved(player, Location::Main(tile), kind);

        // Ladder and snake targets hold placeholders, so this recurses at most once.
        if let Some(effect) = self.board.tile_at(tile)?.effect().copied() {
            EffectResolver::resolve(&effect, player, self)?;
        }
        Ok(())
    }

    fn mark_player_to_skip(&mut self, player: PlayerId) -> Result<()> {
        self.core.mark_player_to_skip(player)
    }
}

impl<O: GameObserver> GameController for SnakesAndLadders<O> {
    type Observer = O;

    fn core(&self) -> &ControllerCore<O> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ControllerCore<O> {
        &mut self.core
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn start(&mut self) -> Result<()> {
        self.core.begin()?;
        for index in 0..self.core.player_count() {
            let id = PlayerId::new(index as u8);
            self.board.add_occupant(1, id)?;
            self.core.player_mut(id)?.set_position(1);
            self.core.notify_moved(id, Location::Main(1), MovementKind::Instant);
        }
        Ok(())
    }

    fn move_by(&mut self, player: PlayerId, steps: u32) -> Result<()> {
        let position = self.core.player(player)?.position();
        self.move_player(player, position.saturating_add(steps), MovementKind::Path)
    }

    fn has_finished(&self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }
}
