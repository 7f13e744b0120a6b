#![allow(clippy::float_cmp)]

use super::*;

fn card(text: &str, x: f64, y: f64) -> Card {
    Card { text: text.into(), x, y, stack: 0, stack_index: 0 }
}

// =============================================================
// Card
// =============================================================

#[test]
fn contains_interior_point() {
    let c = card("Haus", 400.0, 300.0);
    assert!(c.contains(Point::new(450.0, 310.0)));
}

#[test]
fn contains_is_inclusive_on_all_edges() {
    let c = card("Haus", 0.0, 0.0);
    assert!(c.contains(Point::new(0.0, 0.0)));
    assert!(c.contains(Point::new(100.0, 0.0)));
    assert!(c.contains(Point::new(0.0, 50.0)));
    assert!(c.contains(Point::new(100.0, 50.0)));
}

#[test]
fn contains_rejects_points_just_outside() {
    let c = card("Haus", 0.0, 0.0);
    assert!(!c.contains(Point::new(-0.001, 25.0)));
    assert!(!c.contains(Point::new(100.001, 25.0)));
    assert!(!c.contains(Point::new(50.0, -0.001)));
    assert!(!c.contains(Point::new(50.0, 50.001)));
}

#[test]
fn origin_matches_fields() {
    let c = card("Baum", -3.0, 7.5);
    assert_eq!(c.origin(), Point::new(-3.0, 7.5));
}

#[test]
fn card_serializes_with_snake_case_fields() {
    let c = Card { text: "Tisch".into(), x: 1.0, y: 2.0, stack: 4, stack_index: 3 };
    let v = serde_json::to_value(&c).unwrap_or_default();
    assert_eq!(v["text"], "Tisch");
    assert_eq!(v["stack"], 4);
    assert_eq!(v["stack_index"], 3);
}

// =============================================================
// CardStore
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = CardStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.get(0).is_none());
}

#[test]
fn from_vec_keeps_paint_order() {
    let store = CardStore::from(vec![card("a", 0.0, 0.0), card("b", 0.0, 0.0), card("c", 0.0, 0.0)]);
    assert_eq!(store.len(), 3);
    let texts: Vec<_> = store.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["a", "b", "c"]);
    assert_eq!(store.as_slice().len(), 3);
}

#[test]
fn move_card_keeps_grab_point_under_pointer() {
    let mut store = CardStore::from(vec![card("a", 400.0, 300.0)]);
    assert!(store.move_card(0, Point::new(600.0, 100.0), Point::new(50.0, 10.0)));
    assert_eq!(store.get(0).map(Card::origin), Some(Point::new(550.0, 90.0)));
}

#[test]
fn move_card_allows_any_coordinate() {
    let mut store = CardStore::from(vec![card("a", 0.0, 0.0)]);
    assert!(store.move_card(0, Point::new(-1e6, 1e6), Point::new(0.0, 0.0)));
    assert_eq!(store.get(0).map(Card::origin), Some(Point::new(-1e6, 1e6)));
}

#[test]
fn move_card_out_of_range_is_rejected() {
    let mut store = CardStore::from(vec![card("a", 0.0, 0.0)]);
    assert!(!store.move_card(5, Point::new(1.0, 1.0), Point::new(0.0, 0.0)));
    assert_eq!(store.get(0).map(Card::origin), Some(Point::new(0.0, 0.0)));
}
