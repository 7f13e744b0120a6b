#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::cards::{CardIndex, CardStore};

/// Return the topmost card under `world_pt`.
///
/// Scans from the last-inserted card backwards, so a card that is painted
/// over another always wins.
#[must_use]
pub fn hit_test(world_pt: Point, cards: &CardStore) -> Option<CardIndex> {
    cards
        .as_slice()
        .iter()
        .rposition(|card| card.contains(world_pt))
}

/// Screen-space convenience wrapper around [`hit_test`].
#[must_use]
pub fn hit_test_screen(screen_pt: Point, camera: &Camera, cards: &CardStore) -> Option<CardIndex> {
    hit_test(camera.screen_to_world(screen_pt), cards)
}
