//! Canvas engine for the flashcard board.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the board: dealing the shuffled word list into a grid of
//! stacks, translating raw DOM input into card drags and pan/zoom, hit-testing
//! cards in paint order, and drawing the scene. The page only loads the module
//! and calls [`host::mount`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`cards`] | Card records and the ordered card store |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Normalized input events and the gesture state machine |
//! | [`hit`] | Topmost-card hit testing |
//! | [`layout`] | Shuffle and grid-of-stacks deal |
//! | [`reset`] | Press-and-hold reset button |
//! | [`render`] | Scene rendering |
//! | [`words`] | Word list decoding |
//! | [`host`] | wasm-bindgen entry points and DOM wiring |
//! | [`consts`] | Shared numeric constants (card size, zoom step, etc.) |

pub mod camera;
pub mod cards;
pub mod consts;
pub mod engine;
pub mod hit;
pub mod host;
pub mod input;
pub mod layout;
pub mod render;
pub mod reset;
pub mod words;
