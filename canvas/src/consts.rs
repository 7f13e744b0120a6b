//! Shared numeric constants for the canvas crate.

// ── Cards ───────────────────────────────────────────────────────

/// Width of every card in world units.
pub const CARD_WIDTH: f64 = 100.0;

/// Height of every card in world units.
pub const CARD_HEIGHT: f64 = 50.0;

/// Gap between neighbouring stacks in the initial grid.
pub const STACK_SPACING: f64 = 10.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Multiplicative zoom step for one wheel notch.
pub const ZOOM_STEP: f64 = 1.1;

/// Lower zoom bound. Keeps the screen-to-world division well away from zero.
pub const MIN_ZOOM: f64 = 0.01;

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 100.0;

// ── Card text ───────────────────────────────────────────────────

/// Starting font size for card labels, in pixels.
pub const FONT_SIZE_MAX: f64 = 16.0;

/// Smallest font size a label may shrink to.
pub const FONT_SIZE_MIN: f64 = 8.0;

/// Widest a label may be before it starts shrinking.
pub const TEXT_MAX_WIDTH: f64 = 90.0;

// ── Reset ───────────────────────────────────────────────────────

/// How long the reset button must be held before the board reloads.
pub const RESET_HOLD_MS: f64 = 3000.0;
