//! Rendering: draws the board to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the card store and camera and produces
//! pixels; it does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::camera::Camera;
use crate::cards::{Card, CardStore};
use crate::consts::{CARD_HEIGHT, CARD_WIDTH, FONT_SIZE_MAX, FONT_SIZE_MIN, TEXT_MAX_WIDTH};

const CARD_FILL: &str = "lightblue";
const CARD_TEXT: &str = "black";
const CARD_FONT_FAMILY: &str = "Arial";

/// Draw the full scene: background, then cards in store order.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    background: Option<&HtmlImageElement>,
    cards: &CardStore,
    camera: &Camera,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    // Layer 1: background at identity, stretched to the canvas.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    if let Some(image) = background.filter(|img| img.complete() && img.natural_width() > 0) {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, viewport_w, viewport_h)?;
    }

    // Layer 2: cards under pan/zoom, bottom first.
    let [a, b, c, d, e, f] = card_layer_transform(camera, dpr);
    ctx.set_transform(a, b, c, d, e, f)?;
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    for card in cards.iter() {
        draw_card(ctx, card)?;
    }

    Ok(())
}

/// Canvas transform `[a, b, c, d, e, f]` for the card layer.
///
/// Translate by pan, then scale by zoom, all pre-multiplied by `dpr`. This is
/// the forward map that [`Camera::screen_to_world`] inverts.
#[must_use]
pub fn card_layer_transform(camera: &Camera, dpr: f64) -> [f64; 6] {
    let scale = camera.zoom * dpr;
    [scale, 0.0, 0.0, scale, camera.pan_x * dpr, camera.pan_y * dpr]
}

fn draw_card(ctx: &CanvasRenderingContext2d, card: &Card) -> Result<(), JsValue> {
    ctx.set_fill_style_str(CARD_FILL);
    ctx.fill_rect(card.x, card.y, CARD_WIDTH, CARD_HEIGHT);

    let mut measure_err = None;
    let size = fit_font_size(|size| {
        ctx.set_font(&font(size));
        match ctx.measure_text(&card.text) {
            Ok(metrics) => metrics.width(),
            Err(err) => {
                measure_err = Some(err);
                0.0
            }
        }
    });
    if let Some(err) = measure_err {
        return Err(err);
    }

    ctx.set_font(&font(size));
    ctx.set_fill_style_str(CARD_TEXT);
    ctx.fill_text(&card.text, card.x + CARD_WIDTH / 2.0, card.y + CARD_HEIGHT / 2.0)
}

fn font(size: f64) -> String {
    format!("{size}px {CARD_FONT_FAMILY}")
}

/// Largest font size, stepping down by 1 from 16 to a floor of 8, at which
/// `measure(size)` fits within the label width.
pub fn fit_font_size<F: FnMut(f64) -> f64>(mut measure: F) -> f64 {
    let mut size = FONT_SIZE_MAX;
    while size > FONT_SIZE_MIN && measure(size) > TEXT_MAX_WIDTH {
        size -= 1.0;
    }
    size
}
