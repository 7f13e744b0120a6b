//! Initial deal: shuffle the word list and lay it out as a grid of stacks.
//!
//! The grid is centered in the canvas as a block. Every card of a stack shares
//! the stack's anchor, so a fresh board shows one visible card per cell. Each
//! stack's slice of words is reversed before dealing so that the first word of
//! the slice ends up on top.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use rand::Rng;

use crate::camera::Point;
use crate::cards::Card;
use crate::consts::{CARD_HEIGHT, CARD_WIDTH, STACK_SPACING};

/// Grid geometry for the initial deal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub columns: usize,
    pub rows: usize,
    pub cards_per_stack: usize,
    pub card_width: f64,
    pub card_height: f64,
    pub spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            rows: 3,
            cards_per_stack: 28,
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
            spacing: STACK_SPACING,
        }
    }
}

impl LayoutConfig {
    /// Number of stacks in the grid.
    #[must_use]
    pub fn stacks(&self) -> usize {
        self.columns * self.rows
    }

    /// Number of words the grid can hold; extra words are dropped.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.stacks() * self.cards_per_stack
    }

    /// Width and height of the whole grid block.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn block_size(&self) -> (f64, f64) {
        let cols = self.columns as f64;
        let rows = self.rows as f64;
        let width = cols * self.card_width + (cols - 1.0).max(0.0) * self.spacing;
        let height = rows * self.card_height + (rows - 1.0).max(0.0) * self.spacing;
        (width, height)
    }

    /// Top-left corner of the stack at `(col, row)` for a canvas of the given size.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn anchor(&self, col: usize, row: usize, canvas_width: f64, canvas_height: f64) -> Point {
        let (block_w, block_h) = self.block_size();
        let offset_x = (canvas_width - block_w) / 2.0;
        let offset_y = (canvas_height - block_h) / 2.0;
        Point::new(
            offset_x + col as f64 * (self.card_width + self.spacing),
            offset_y + row as f64 * (self.card_height + self.spacing),
        )
    }
}

/// Unbiased in-place Fisher–Yates shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Deal `words` (already shuffled) into the grid.
///
/// Stack `row * columns + col` takes the slice starting at
/// `stack * cards_per_stack`; slices that run past the end are truncated and
/// words past [`LayoutConfig::capacity`] are dropped. Cards come out column by
/// column, bottom card of each stack first.
#[must_use]
pub fn deal(words: &[String], config: &LayoutConfig, canvas_width: f64, canvas_height: f64) -> Vec<Card> {
    let mut cards = Vec::with_capacity(words.len().min(config.capacity()));

    for col in 0..config.columns {
        for row in 0..config.rows {
            let stack = row * config.columns + col;
            let start = stack * config.cards_per_stack;
            if start >= words.len() {
                continue;
            }
            let end = (start + config.cards_per_stack).min(words.len());
            let anchor = config.anchor(col, row, canvas_width, canvas_height);

            for (stack_index, word) in words[start..end].iter().rev().enumerate() {
                cards.push(Card { text: word.clone(), x: anchor.x, y: anchor.y, stack, stack_index });
            }
        }
    }

    cards
}

/// Shuffle `words` and deal them, consuming the list.
#[must_use]
pub fn shuffle_and_deal<R: Rng + ?Sized>(
    mut words: Vec<String>,
    rng: &mut R,
    config: &LayoutConfig,
    canvas_width: f64,
    canvas_height: f64,
) -> Vec<Card> {
    shuffle(&mut words, rng);
    deal(&words, config, canvas_width, canvas_height)
}
