use rand::Rng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::camera::{Camera, Point, wheel_zoom_factor};
use crate::cards::CardStore;
use crate::hit::hit_test_screen;
use crate::input::{InputEvent, InputState, Source};
use crate::layout::{LayoutConfig, shuffle_and_deal};
use crate::render;
use crate::reset::ResetButton;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Visible state changed; paint a new frame.
    RenderNeeded,
    /// The reset hold completed; reinitialize the whole session.
    ReloadRequested,
}

/// Core engine state: all logic that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug)]
pub struct EngineCore {
    pub cards: CardStore,
    pub camera: Camera,
    pub input: InputState,
    pub reset: ResetButton,
    pub layout: LayoutConfig,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    dealt: bool,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            cards: CardStore::new(),
            camera: Camera::default(),
            input: InputState::default(),
            reset: ResetButton::default(),
            layout: LayoutConfig::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            dealt: false,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width: f64, height: f64, dpr: f64) -> Vec<Action> {
        self.viewport_width = width;
        self.viewport_height = height;
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        vec![Action::RenderNeeded]
    }

    /// Shuffle and deal the word list into the grid, centered in the current
    /// viewport. Only the first call per session deals; later calls are ignored.
    pub fn load_words<R: Rng + ?Sized>(&mut self, words: Vec<String>, rng: &mut R) -> Vec<Action> {
        if self.dealt {
            log::warn!("word list already dealt; ignoring {} words", words.len());
            return Vec::new();
        }
        let total = words.len();
        let cards = shuffle_and_deal(words, rng, &self.layout, self.viewport_width, self.viewport_height);
        let capacity = self.layout.capacity();
        if total > capacity {
            log::info!("dropping {} words beyond grid capacity {capacity}", total - capacity);
        }
        log::info!("dealt {} cards into {} stacks", cards.len(), self.layout.stacks());
        self.cards = CardStore::from(cards);
        self.dealt = true;
        vec![Action::RenderNeeded]
    }

    // --- Input events ---

    /// Feed one normalized input event through the state machine.
    pub fn handle(&mut self, event: InputEvent) -> Vec<Action> {
        match event {
            InputEvent::PointerDown { at, source } => self.on_pointer_down(at, source),
            InputEvent::PointerMove { at, source } => self.on_pointer_move(at, source),
            InputEvent::PointerUp => self.on_pointer_up(),
            InputEvent::PointerLeave => self.on_pointer_leave(),
            InputEvent::Wheel { at, delta_y } => self.on_wheel(at, delta_y),
        }
    }

    /// Start dragging the card under the pointer, or start panning.
    pub fn on_pointer_down(&mut self, screen_pt: Point, source: Source) -> Vec<Action> {
        if !source.is_single() {
            return Vec::new();
        }
        let hit = hit_test_screen(screen_pt, &self.camera, &self.cards)
            .and_then(|i| self.cards.get(i).map(|card| (i, card.origin())));
        self.input = match hit {
            Some((index, origin)) => {
                InputState::DraggingCard { index, grab: self.camera.screen_to_world(screen_pt) - origin }
            }
            None => InputState::PanningCanvas { grab: screen_pt - self.camera.pan() },
        };
        log::debug!("pointer down at {screen_pt:?}: {:?}", self.input);
        Vec::new()
    }

    /// Follow the pointer with the active gesture.
    pub fn on_pointer_move(&mut self, screen_pt: Point, source: Source) -> Vec<Action> {
        if !source.is_single() {
            return Vec::new();
        }
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::DraggingCard { index, grab } => {
                let world = self.camera.screen_to_world(screen_pt);
                if self.cards.move_card(index, world, grab) {
                    vec![Action::RenderNeeded]
                } else {
                    self.input = InputState::Idle;
                    Vec::new()
                }
            }
            InputState::PanningCanvas { grab } => {
                self.camera.pan_to(screen_pt - grab);
                vec![Action::RenderNeeded]
            }
        }
    }

    /// End any gesture.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        Vec::new()
    }

    /// End any gesture when the pointer leaves the canvas.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    /// Zoom around the pointer. The current gesture is left as is.
    pub fn on_wheel(&mut self, screen_pt: Point, delta_y: f64) -> Vec<Action> {
        if self.camera.zoom_at(screen_pt, wheel_zoom_factor(delta_y)) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // --- Reset button ---

    pub fn on_reset_press(&mut self, now_ms: f64) {
        self.reset.press(now_ms);
    }

    pub fn on_reset_release(&mut self) {
        self.reset.release();
    }

    /// Check the reset hold; emits [`Action::ReloadRequested`] when it completes.
    pub fn on_reset_poll(&mut self, now_ms: f64) -> Vec<Action> {
        if self.reset.poll(now_ms) {
            log::info!("reset hold complete; reloading");
            vec![Action::ReloadRequested]
        } else {
            Vec::new()
        }
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    background: Option<HtmlImageElement>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, background: None, core: EngineCore::new() })
    }

    /// Resize the backing store to the CSS size times `dpr`, keeping the
    /// element's CSS size at `width_css` × `height_css`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        let actions = self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((width_css * self.core.dpr).round().max(0.0) as u32);
        self.canvas.set_height((height_css * self.core.dpr).round().max(0.0) as u32);

        let style = self.canvas.style();
        for (prop, value) in [("width", width_css), ("height", height_css)] {
            if let Err(err) = style.set_property(prop, &format!("{value}px")) {
                log::warn!("canvas {prop} style update failed: {err:?}");
            }
        }
        actions
    }

    /// Install the loaded background image.
    pub fn set_background(&mut self, image: HtmlImageElement) -> Vec<Action> {
        self.background = Some(image);
        vec![Action::RenderNeeded]
    }

    pub fn load_words<R: Rng + ?Sized>(&mut self, words: Vec<String>, rng: &mut R) -> Vec<Action> {
        self.core.load_words(words, rng)
    }

    pub fn handle(&mut self, event: InputEvent) -> Vec<Action> {
        self.core.handle(event)
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(
            &self.ctx,
            self.background.as_ref(),
            &self.core.cards,
            &self.core.camera,
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }
}
