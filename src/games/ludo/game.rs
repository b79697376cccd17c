//! Ludo controller.

use crate::board::{Board, Color, ColorMap, CyclicBoard};
use crate::core::{CyclicConfig, Player, PlayerId, PlayerMap};
use crate::effects::EffectHost;
use crate::error::{Error, Result};
use crate::observer::{GameObserver, Location, MovementKind, NoopObserver};
use crate::rules::{ControllerCore, GameController};

/// One seat per color.
pub const MAX_PLAYERS: usize = 4;

/// One Ludo session.
///
/// Players walk the shared loop from their color's start tile. Once
/// they have covered `home_entry_threshold` main-path steps, further
/// steps go into their private home lane, clamped at its last tile.
#[derive(Debug)]
pub struct Ludo<O = NoopObserver> {
    board: CyclicBoard,
    home_entry_threshold: u32,
    colors: PlayerMap<Color>,
    finish_order: Vec<PlayerId>,
    core: ControllerCore<O>,
}

impl<O: GameObserver> Ludo<O> {
    /// Build the board from `config` and seat `players` in color order
    /// (yellow, red, blue, green).
    pub fn new(config: &CyclicConfig, players: Vec<Player>, observer: O) -> Result<Self> {
        let board = CyclicBoard::new(config)?;
        let core = ControllerCore::new(players, MAX_PLAYERS, observer)?;
        let colors = PlayerMap::new(core.player_count(), |id| Color::ALL[id.index()]);

        Ok(Self {
            board,
            home_entry_threshold: config.home_entry_threshold,
            colors,
            finish_order: Vec::new(),
            core,
        })
    }

    #[must_use]
    pub fn cyclic_board(&self) -> &CyclicBoard {
        &self.board
    }

    /// Private lane of `color`.
    #[must_use]
    pub fn home_lane(&self, color: Color) -> &Board {
        self.board.lane(color)
    }

    #[must_use]
    pub fn start_tiles(&self) -> &ColorMap<u32> {
        self.board.start_tiles()
    }

    #[must_use]
    pub fn home_entry_threshold(&self) -> u32 {
        self.home_entry_threshold
    }

    pub fn player_color(&self, player: PlayerId) -> Result<Color> {
        self.colors.get(player).copied().ok_or(Error::UnknownPlayer(player))
    }

    #[must_use]
    pub fn player_colors(&self) -> &PlayerMap<Color> {
        &self.colors
    }

    /// Players who completed their lane, first finisher first.
    #[must_use]
    pub fn finish_order(&self) -> &[PlayerId] {
        &self.finish_order
    }

    /// Whether every player has completed their lane.
    #[must_use]
    pub fn all_home(&self) -> bool {
        self.finish_order.len() == self.core.player_count()
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        self.core.observer()
    }

    pub fn into_observer(self) -> O {
        self.core.into_observer()
    }

    /// Take `player` off the shared loop without placing them anywhere.
    pub fn disable_player_on_board(&mut self, player: PlayerId) -> Result<()> {
        self.core.ensure_in_progress()?;
        let position = self.core.player(player)?.position();
        self.board.main_mut().remove_occupant(position, player)
    }

    /// Put `player` on tile `lane_index` of their home lane.
    ///
    /// The first lane move takes the player off the shared loop. Reaching
    /// the last lane tile completes the player.
    pub fn move_player_through_home(&mut self, player: PlayerId, lane_index: u32) -> Result<()> {
        self.core.ensure_in_progress()?;
        let color = self.player_color(player)?;
        let current = self.core.player(player)?.home_lane();
        self.board.lane(color).tile_at(lane_index)?;

        if current == 0 {
            self.disable_player_on_board(player)?;
        } else {
            self.board.lane_mut(color).remove_occupant(current, player)?;
        }
        self.board.lane_mut(color).add_occupant(lane_index, player)?;
        self.core.player_mut(player)?.set_home_lane(lane_index);
        self.core.notify_moved(
            player,
            Location::HomeLane { color, index: lane_index },
            MovementKind::Path,
        );

        if lane_index == self.board.lane_length() && !self.finish_order.contains(&player) {
            self.finish_order.push(player);
            self.core.notify_home(player);
        }
        Ok(())
    }

    /// Relocate on the loop, wrapping once, and record `distance` before
    /// observers hear about the move.
    fn move_on_loop(
        &mut self,
        player: PlayerId,
        tile: u32,
        kind: MovementKind,
        distance: Option<u32>,
    ) -> Result<()> {
        self.core.ensure_in_progress()?;
        let length = self.board.path_length();
        let tile = if tile > length { tile - length } else { tile };
        let from = self.core.player(player)?.position();

        self.board.main_mut().relocate(player, from, tile)?;
        let state = self.core.player_mut(player)?;
        state.set_position(tile);
        if let Some(distance) = distance {
            state.set_distance_traveled(distance);
        }
        self.core.notify_moved(player, Location::Main(tile), kind);
        Ok(())
    }

    /// Advance `player` along their lane, stopping at the last tile.
    pub fn move_player_through_home_by(&mut self, player: PlayerId, steps: u32) -> Result<()> {
        let current = self.core.player(player)?.home_lane();
        let target = current.saturating_add(steps).min(self.board.lane_length());
        self.move_player_through_home(player, target)
    }
}

impl<O: GameObserver> EffectHost for Ludo<O> {
    /// Move `player` to `tile` on the shared loop.
    ///
    /// Tiles past the end wrap once. Loop tiles carry no effects.
    fn move_player(&mut self, player: PlayerId, tile: u32, kind: MovementKind) -> Result<()> {
        self.move_on_loop(player, tile, kind, None)
    }

    fn mark_player_to_skip(&mut self, player: PlayerId) -> Result<()> {
        self.core.mark_player_to_skip(player)
    }
}

impl<O: GameObserver> GameController for Ludo<O> {
    type Observer = O;

    fn core(&self) -> &ControllerCore<O> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ControllerCore<O> {
        &mut self.core
    }

    fn board(&self) -> &Board {
        self.board.main()
    }

    fn start(&mut self) -> Result<()> {
        self.core.begin()?;
        for (id, &color) in self.colors.iter() {
            let tile = self.board.start_tile(color);
            self.board.main_mut().add_occupant(tile, id)?;
            self.core.player_mut(id)?.set_position(tile);
            self.core.notify_moved(id, Location::Main(tile), MovementKind::Instant);
        }
        Ok(())
    }

    /// Walk the loop until the entry threshold is met, then the lane.
    fn move_by(&mut self, player: PlayerId, steps: u32) -> Result<()> {
        self.core.ensure_in_progress()?;
        if self.has_finished(player) {
            return Ok(());
        }

        let (position, distance) = {
            let p = self.core.player(player)?;
            (p.position(), p.distance_traveled())
        };
        let threshold = self.home_entry_threshold;

        if distance >= threshold {
            self.move_player_through_home_by(player, steps)
        } else if distance.saturating_add(steps) > threshold {
            let walk = threshold - distance;
            self.move_on_loop(player, position.saturating_add(walk), MovementKind::Path, Some(threshold))?;
            self.move_player_through_home_by(player, steps - walk)
        } else {
            let target = position.saturating_add(steps);
            self.move_on_loop(player, target, MovementKind::Path, Some(distance + steps))
        }
    }

    fn has_finished(&self, player: PlayerId) -> bool {
        self.core
            .player(player)
            .map(|p| p.home_lane() >= self.board.lane_length())
            .unwrap_or(false)
    }
}
