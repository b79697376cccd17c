//! Player identification, per-player storage, and the player record.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. The controller hands out ids in
//! construction order, so `PlayerId(0)` is always the first seat.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Name, icon and board progress. Only the game controller mutates a
//! `Player` once a session has been created.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_boardgame::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use rust_boardgame::core::{PlayerId, PlayerMap};
///
/// let mut laps: PlayerMap<u32> = PlayerMap::new(4, |_| 0);
/// laps[PlayerId::new(1)] += 1;
/// assert_eq!(laps[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, if the id belongs to this map.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A participant in one game session.
///
/// `position` is the 1-based tile on whichever path the active rule set
/// moves players along. `home_lane` and `distance_traveled` are only
/// advanced by the cyclic (Ludo) rules:
/// - `home_lane`: 0 until the player enters their private lane, then the
///   lane index; the lane length marks the goal.
/// - `distance_traveled`: main-path steps walked so far. Unlike `position`
///   it never wraps, which is what gates entry into the home lane.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    icon: String,
    position: u32,
    home_lane: u32,
    distance_traveled: u32,
}

impl Player {
    /// Create a player standing on tile 1.
    ///
    /// The id is assigned when the player is handed to a controller.
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: PlayerId::default(),
            name: name.into(),
            icon: icon.into(),
            position: 1,
            home_lane: 0,
            distance_traveled: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque icon reference for the visual layer.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Index inside the home lane (0 = not entered).
    #[must_use]
    pub fn home_lane(&self) -> u32 {
        self.home_lane
    }

    #[must_use]
    pub fn distance_traveled(&self) -> u32 {
        self.distance_traveled
    }

    pub(crate) fn assign_id(&mut self, id: PlayerId) {
        self.id = id;
    }

    pub(crate) fn set_position(&mut self, position: u32) {
        self.position = position;
    }

    pub(crate) fn set_home_lane(&mut self, index: u32) {
        self.home_lane = index;
    }

    pub(crate) fn set_distance_traveled(&mut self, distance: u32) {
        self.distance_traveled = distance;
    }
}
