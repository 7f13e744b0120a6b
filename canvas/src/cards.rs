//! Card model and the ordered in-memory card store.
//!
//! Cards are plain word labels placed in world coordinates. Every card has the
//! same fixed size ([`CARD_WIDTH`] × [`CARD_HEIGHT`]), so only the top-left
//! corner is stored. The store keeps cards in insertion order, which is also
//! the paint order: later cards are drawn on top and win hit tests.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{CARD_HEIGHT, CARD_WIDTH};

/// Position of a card inside the store.
pub type CardIndex = usize;

/// A single word card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// The word printed on the card.
    pub text: String,
    /// Left edge in world coordinates.
    pub x: f64,
    /// Top edge in world coordinates.
    pub y: f64,
    /// Grid cell the card was dealt into (`row * columns + col`).
    pub stack: usize,
    /// Order within its stack at deal time; 0 is the bottom card.
    ///
    /// Informational only. Paint and hit order come from the store sequence.
    pub stack_index: usize,
}

impl Card {
    /// Top-left corner as a point.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether `world` lies inside the card, edges included.
    #[must_use]
    pub fn contains(&self, world: Point) -> bool {
        world.x >= self.x && world.x <= self.x + CARD_WIDTH && world.y >= self.y && world.y <= self.y + CARD_HEIGHT
    }
}

/// Ordered store of all live cards.
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in paint order (bottom first).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards in paint order as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Place `index` so that the point grabbed at `grab` (relative to the
    /// card origin) sits under `world`. No clamping. Returns `false` when
    /// `index` is out of range.
    pub fn move_card(&mut self, index: CardIndex, world: Point, grab: Point) -> bool {
        let Some(card) = self.cards.get_mut(index) else {
            return false;
        };
        card.x = world.x - grab.x;
        card.y = world.y - grab.y;
        true
    }
}

/// A fresh deck in paint order (bottom first).
impl From<Vec<Card>> for CardStore {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
