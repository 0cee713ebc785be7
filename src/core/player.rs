//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two seats. Index 0 moves first.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`, so per-player data can
//! never be shorter or longer than the seat count.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats in a game.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier, either `PlayerId(0)` or `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Both seats, in turn order.
    pub const ALL: [PlayerId; PLAYER_COUNT] = [PlayerId::FIRST, PlayerId::SECOND];

    /// Create a player ID from an index, returning `None` if the seat does not exist.
    ///
    /// Accepts any signed integer so raw caller input can be checked without
    /// a lossy cast first.
    ///
    /// ```
    /// use snakes_ladders::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::from_index(1), Some(PlayerId::SECOND));
    /// assert_eq!(PlayerId::from_index(2), None);
    /// assert_eq!(PlayerId::from_index(-1), None);
    /// ```
    #[must_use]
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(PlayerId::FIRST),
            1 => Some(PlayerId::SECOND),
            _ => None,
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opponent.
    #[must_use]
    pub const fn other(self) -> Self {
        PlayerId(1 - self.0)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        PlayerId::from_index(i64::from(index)).ok_or_else(|| format!("no player with index {}", index))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use snakes_ladders::core::{PlayerId, PlayerMap};
///
/// let mut positions: PlayerMap<Option<u8>> = PlayerMap::with_default();
/// positions[PlayerId::SECOND] = Some(12);
///
/// assert_eq!(positions[PlayerId::FIRST], None);
/// assert_eq!(positions[PlayerId::SECOND], Some(12));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::ALL.map(factory),
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Copy the values out in seat order.
    #[must_use]
    pub fn to_array(&self) -> [T; PLAYER_COUNT]
    where
        T: Copy,
    {
        self.data
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
