//! Board topology: which squares redirect a player and where to.
//!
//! Snakes and ladders are the same thing to the engine, an origin square
//! that sends the player somewhere else. The kind is only kept for display
//! and is derived from the direction of travel.
//!
//! ## Invariants
//!
//! Every `BoardTopology` value satisfies, by construction:
//! - origins lie in `2..=99` (never the first or the goal square)
//! - no redirect maps a square to itself
//! - each origin has exactly one redirect
//! - no destination is itself an origin, so `resolve` is a single lookup

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::core::config::BoardLayout;
use crate::core::error::TopologyError;
use crate::core::rng::GameRng;
use crate::core::square::{Square, BOARD_SIZE};

/// Upper bound on disjoint redirects: each uses two of the squares 1..=99.
const MAX_REDIRECTS: usize = (BOARD_SIZE as usize - 1) / 2;

/// Snakes on the classic board, as (head, tail).
pub const CLASSIC_SNAKES: [(u8, u8); 8] = [
    (17, 4),
    (54, 34),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 79),
];

/// Ladders on the classic board, as (bottom, top).
pub const CLASSIC_LADDERS: [(u8, u8); 9] = [
    (3, 22),
    (5, 8),
    (11, 26),
    (20, 29),
    (27, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 99),
];

/// Whether a redirect moves the player back or forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedirectKind {
    /// Slides the player down.
    Snake,
    /// Climbs the player up.
    Ladder,
}

/// Where landing on an origin square sends the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Redirect {
    /// Destination square.
    pub to: Square,
    /// Snake or ladder, derived from direction.
    pub kind: RedirectKind,
}

impl Redirect {
    fn between(from: Square, to: Square) -> Self {
        let kind = if to < from {
            RedirectKind::Snake
        } else {
            RedirectKind::Ladder
        };
        Self { to, kind }
    }
}

/// Mapping from origin squares to redirects.
///
/// Serialized as a list of `(origin, destination)` pairs; deserializing
/// re-checks every invariant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(u8, u8)>", into = "Vec<(u8, u8)>")]
pub struct BoardTopology {
    redirects: FxHashMap<Square, Redirect>,
}

impl BoardTopology {
    /// A board with no snakes or ladders.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The fixed curated board.
    ///
    /// ```
    /// use snakes_ladders::board::BoardTopology;
    /// use snakes_ladders::core::Square;
    ///
    /// let board = BoardTopology::classic();
    /// let head = Square::new(17).unwrap();
    /// assert_eq!(board.resolve(head).get(), 4);
    /// ```
    #[must_use]
    pub fn classic() -> Self {
        let redirects = CLASSIC_SNAKES
            .iter()
            .chain(CLASSIC_LADDERS.iter())
            .filter_map(|&(from, to)| {
                let from = Square::new(from)?;
                let to = Square::new(to)?;
                Some((from, Redirect::between(from, to)))
            })
            .collect();
        Self { redirects }
    }

    /// Build a board from explicit `(origin, destination)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, TopologyError>
    where
        I: IntoIterator<Item = (u8, u8)>,
    {
        let mut redirects = FxHashMap::default();

        for (from, to) in pairs {
            if from < 2 || from >= BOARD_SIZE {
                return Err(TopologyError::OriginOutOfRange(from));
            }
            let to_square = Square::new(to).ok_or(TopologyError::DestinationOutOfRange(to))?;
            if from == to {
                return Err(TopologyError::SelfLoop(from));
            }
            let from_square = Square::new(from).ok_or(TopologyError::OriginOutOfRange(from))?;
            if redirects.contains_key(&from_square) {
                return Err(TopologyError::DuplicateOrigin(from));
            }
            redirects.insert(from_square, Redirect::between(from_square, to_square));
        }

        let topology = Self { redirects };
        topology.check_no_chaining()?;
        Ok(topology)
    }

    /// Randomly place `snakes` snakes and `ladders` ladders.
    ///
    /// Every square is used by at most one redirect, as origin or
    /// destination. Ladders top out at 99 so no ladder wins the game outright.
    pub fn generate(rng: &mut GameRng, snakes: usize, ladders: usize) -> Result<Self, TopologyError> {
        let requested = snakes.saturating_add(ladders);
        if requested > MAX_REDIRECTS {
            return Err(TopologyError::PlacementExhausted { requested, placed: 0 });
        }

        let mut kinds = Vec::with_capacity(requested);
        kinds.extend(std::iter::repeat(RedirectKind::Snake).take(snakes));
        kinds.extend(std::iter::repeat(RedirectKind::Ladder).take(ladders));
        rng.shuffle(&mut kinds);

        let mut origins: Vec<u8> = (2..BOARD_SIZE).collect();
        rng.shuffle(&mut origins);

        let mut used: FxHashSet<u8> = FxHashSet::default();
        let mut pairs = Vec::with_capacity(requested);

        for kind in kinds {
            let placed = origins.iter().copied().filter(|o| !used.contains(o)).find_map(|origin| {
                let range = match kind {
                    RedirectKind::Snake => 1..origin,
                    RedirectKind::Ladder => origin + 1..BOARD_SIZE,
                };
                let free: Vec<u8> = range.filter(|d| !used.contains(d)).collect();
                if free.is_empty() {
                    None
                } else {
                    let pick = usize::from(rng.gen_range(0..free.len() as u8));
                    Some((origin, free[pick]))
                }
            });

            match placed {
                Some((origin, dest)) => {
                    used.insert(origin);
                    used.insert(dest);
                    pairs.push((origin, dest));
                }
                None => {
                    return Err(TopologyError::PlacementExhausted {
                        requested,
                        placed: pairs.len(),
                    })
                }
            }
        }

        Self::from_pairs(pairs)
    }

    /// Build the board described by a layout.
    ///
    /// Only `BoardLayout::Random` consumes randomness.
    pub fn from_layout(layout: &BoardLayout, rng: &mut GameRng) -> Result<Self, TopologyError> {
        match layout {
            BoardLayout::Classic => Ok(Self::classic()),
            BoardLayout::Random { snakes, ladders } => {
                Self::generate(rng, usize::from(*snakes), usize::from(*ladders))
            }
            BoardLayout::Custom(pairs) => Self::from_pairs(pairs.iter().copied()),
        }
    }

    /// Where a player standing on `square` ends up. Squares without a
    /// redirect map to themselves.
    #[must_use]
    pub fn resolve(&self, square: Square) -> Square {
        self.redirects.get(&square).map_or(square, |r| r.to)
    }

    /// The redirect starting at `square`, if any.
    #[must_use]
    pub fn redirect_at(&self, square: Square) -> Option<&Redirect> {
        self.redirects.get(&square)
    }

    /// Number of redirects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.redirects.len()
    }

    /// True when the board has no snakes or ladders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.redirects.is_empty()
    }

    /// All redirects sorted by origin.
    #[must_use]
    pub fn redirects(&self) -> Vec<(Square, Redirect)> {
        let mut all: Vec<_> = self.redirects.iter().map(|(&from, &r)| (from, r)).collect();
        all.sort_unstable_by_key(|(from, _)| *from);
        all
    }

    /// `(origin, destination)` pairs sorted by origin, for rendering.
    #[must_use]
    pub fn pairs(&self) -> Vec<(u8, u8)> {
        self.redirects()
            .into_iter()
            .map(|(from, r)| (from.get(), r.to.get()))
            .collect()
    }

    /// Count redirects of one kind.
    #[must_use]
    pub fn count(&self, kind: RedirectKind) -> usize {
        self.redirects.values().filter(|r| r.kind == kind).count()
    }

    fn check_no_chaining(&self) -> Result<(), TopologyError> {
        // Sorted so the reported pair does not depend on hash order.
        for (from, redirect) in self.redirects() {
            if self.redirects.contains_key(&redirect.to) {
                return Err(TopologyError::ChainedRedirect {
                    from: from.get(),
                    to: redirect.to.get(),
                });
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<(u8, u8)>> for BoardTopology {
    type Error = TopologyError;

    fn try_from(pairs: Vec<(u8, u8)>) -> Result<Self, Self::Error> {
        Self::from_pairs(pairs)
    }
}

impl From<BoardTopology> for Vec<(u8, u8)> {
    fn from(topology: BoardTopology) -> Self {
        topology.pairs()
    }
}
