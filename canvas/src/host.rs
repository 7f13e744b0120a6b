//! Browser host: mounts the engine on a page and adapts DOM events.
//!
//! ARCHITECTURE
//! ============
//! The page calls [`mount`] once with element ids and asset URLs. From then on
//! the host owns the [`Engine`] behind an `Rc<RefCell<_>>` shared by the DOM
//! closures. Each closure turns its raw mouse/touch/wheel event into an
//! [`InputEvent`] with canvas-relative coordinates, feeds it to the engine and
//! processes the returned [`Action`]s synchronously.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Event, EventTarget, HtmlCanvasElement, HtmlElement, HtmlImageElement,
    MouseEvent, TouchEvent, WheelEvent, Window,
};

use crate::camera::Point;
use crate::engine::{Action, Engine};
use crate::input::{InputEvent, Source, canvas_relative};
use crate::words::{WordListError, parse_word_list};

type SharedEngine = Rc<RefCell<Engine>>;

/// How often the reset button is polled while held, in milliseconds.
const RESET_POLL_MS: u32 = 50;

/// CSS class applied to the reset button while it is held.
const HOLDING_CLASS: &str = "holding";

/// Module initialisation: panic hook and console logger.
///
/// # Errors
///
/// Returns `Err` if a logger is already installed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Mount the board on the page.
///
/// `canvas_id` names the `<canvas>` element and `reset_id` the hold-to-reset
/// button. The word list is fetched from `words_url`; the background image is
/// loaded from `background_url`.
///
/// # Errors
///
/// Returns `Err` if there is no window/document, the canvas is missing or has
/// no 2D context, or an event listener cannot be attached.
#[wasm_bindgen]
pub fn mount(canvas_id: &str, reset_id: &str, words_url: &str, background_url: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = element_by_id::<HtmlCanvasElement>(&document, canvas_id)?;

    let engine: SharedEngine = Rc::new(RefCell::new(Engine::new(canvas.clone())?));
    fit_to_window(&engine, &window);

    attach_canvas_listeners(&canvas, &engine)?;
    attach_resize_listener(&window, &engine)?;
    match element_by_id::<HtmlElement>(&document, reset_id) {
        Ok(button) => attach_reset_listeners(&button, &engine)?,
        Err(err) => log::warn!("reset button unavailable: {err:?}"),
    }

    load_background(&engine, background_url)?;
    spawn_word_fetch(Rc::clone(&engine), words_url.to_owned());
    log::info!("board mounted on #{canvas_id}");
    Ok(())
}

// =============================================================
// Action processing
// =============================================================

fn process_actions(engine: &Engine, actions: &[Action]) {
    if actions.contains(&Action::ReloadRequested) {
        reload();
        return;
    }
    if actions.contains(&Action::RenderNeeded) {
        if let Err(err) = engine.render() {
            log::error!("render failed: {err:?}");
        }
    }
}

fn dispatch(engine: &SharedEngine, event: InputEvent) {
    let Ok(mut engine) = engine.try_borrow_mut() else {
        log::warn!("engine busy; dropping {event:?}");
        return;
    };
    let actions = engine.handle(event);
    process_actions(&engine, &actions);
}

fn reload() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().reload() {
        log::error!("reload failed: {err:?}");
    }
}

// =============================================================
// DOM helpers
// =============================================================

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has the wrong type")))
}

/// Attach a typed listener that lives for the rest of the page.
fn listen<E, F>(target: &EventTarget, kind: &str, passive: bool, mut handler: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    });
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// `clientX` / `clientY` read as JS numbers. The typed `client_x()` getters
/// return whole pixels and drop sub-pixel positions.
fn client_position(event: &JsValue, fallback_x: i32, fallback_y: i32) -> (f64, f64) {
    let read = |key: &str, fallback: i32| {
        js_sys::Reflect::get(event, &JsValue::from_str(key))
            .map_or(f64::from(fallback), |v| v.as_f64().unwrap_or(f64::from(fallback)))
    };
    (read("clientX", fallback_x), read("clientY", fallback_y))
}

fn canvas_point(canvas: &HtmlCanvasElement, (client_x, client_y): (f64, f64)) -> Point {
    let rect = canvas.get_bounding_client_rect();
    canvas_relative(client_x, client_y, rect.left(), rect.top())
}

fn mouse_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Point {
    canvas_point(canvas, client_position(ev.as_ref(), ev.client_x(), ev.client_y()))
}

/// First touch point and the number of fingers down.
fn touch_point(canvas: &HtmlCanvasElement, ev: &TouchEvent) -> Option<(Point, Source)> {
    let touches = ev.touches();
    let first = touches.get(0)?;
    let client = client_position(first.as_ref(), first.client_x(), first.client_y());
    Some((canvas_point(canvas, client), Source::Touch { count: touches.length() }))
}

fn window_size(window: &Window) -> (f64, f64) {
    let width = window.inner_width().map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
    let height = window.inner_height().map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
    (width, height)
}

fn fit_to_window(engine: &SharedEngine, window: &Window) {
    let (width, height) = window_size(window);
    let Ok(mut engine) = engine.try_borrow_mut() else {
        return;
    };
    let actions = engine.set_viewport(width, height, window.device_pixel_ratio());
    process_actions(&engine, &actions);
}

// =============================================================
// Canvas input
// =============================================================

fn attach_canvas_listeners(canvas: &HtmlCanvasElement, engine: &SharedEngine) -> Result<(), JsValue> {
    {
        let (canvas_ref, engine) = (canvas.clone(), Rc::clone(engine));
        listen(canvas, "mousedown", true, move |ev: MouseEvent| {
            let at = mouse_point(&canvas_ref, &ev);
            dispatch(&engine, InputEvent::PointerDown { at, source: Source::Mouse });
        })?;
    }
    {
        let (canvas_ref, engine) = (canvas.clone(), Rc::clone(engine));
        listen(canvas, "mousemove", true, move |ev: MouseEvent| {
            let at = mouse_point(&canvas_ref, &ev);
            dispatch(&engine, InputEvent::PointerMove { at, source: Source::Mouse });
        })?;
    }
    {
        let engine = Rc::clone(engine);
        listen(canvas, "mouseup", true, move |_: MouseEvent| dispatch(&engine, InputEvent::PointerUp))?;
    }
    {
        let engine = Rc::clone(engine);
        listen(canvas, "mouseleave", true, move |_: MouseEvent| dispatch(&engine, InputEvent::PointerLeave))?;
    }
    {
        let (canvas_ref, engine) = (canvas.clone(), Rc::clone(engine));
        listen(canvas, "wheel", false, move |ev: WheelEvent| {
            ev.prevent_default();
            let at = mouse_point(&canvas_ref, &ev);
            dispatch(&engine, InputEvent::Wheel { at, delta_y: ev.delta_y() });
        })?;
    }
    {
        let (canvas_ref, engine) = (canvas.clone(), Rc::clone(engine));
        listen(canvas, "touchstart", false, move |ev: TouchEvent| {
            ev.prevent_default();
            if let Some((at, source)) = touch_point(&canvas_ref, &ev) {
                dispatch(&engine, InputEvent::PointerDown { at, source });
            }
        })?;
    }
    {
        let (canvas_ref, engine) = (canvas.clone(), Rc::clone(engine));
        listen(canvas, "touchmove", false, move |ev: TouchEvent| {
            ev.prevent_default();
            if let Some((at, source)) = touch_point(&canvas_ref, &ev) {
                dispatch(&engine, InputEvent::PointerMove { at, source });
            }
        })?;
    }
    for kind in ["touchend", "touchcancel"] {
        let engine = Rc::clone(engine);
        listen(canvas, kind, true, move |_: TouchEvent| dispatch(&engine, InputEvent::PointerUp))?;
    }
    Ok(())
}

fn attach_resize_listener(window: &Window, engine: &SharedEngine) -> Result<(), JsValue> {
    let (window_ref, engine) = (window.clone(), Rc::clone(engine));
    listen(window, "resize", true, move |_: Event| fit_to_window(&engine, &window_ref))
}

// =============================================================
// Reset button
// =============================================================

fn set_holding(button: &HtmlElement, holding: bool) {
    if let Err(err) = button.class_list().toggle_with_force(HOLDING_CLASS, holding) {
        log::warn!("reset button class update failed: {err:?}");
    }
}

fn attach_reset_listeners(button: &HtmlElement, engine: &SharedEngine) -> Result<(), JsValue> {
    let poller: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

    for kind in ["mousedown", "touchstart"] {
        let (button_ref, engine, poller) = (button.clone(), Rc::clone(engine), Rc::clone(&poller));
        listen(button, kind, true, move |_: Event| {
            let holding = match engine.try_borrow_mut() {
                Ok(mut engine) => {
                    engine.core.on_reset_press(js_sys::Date::now());
                    engine.core.reset.holding()
                }
                Err(err) => {
                    log::warn!("engine busy; reset press dropped: {err}");
                    return;
                }
            };
            set_holding(&button_ref, holding);

            let (engine, button_ref) = (Rc::clone(&engine), button_ref.clone());
            let interval = Interval::new(RESET_POLL_MS, move || {
                let Ok(mut engine) = engine.try_borrow_mut() else {
                    return;
                };
                let actions = engine.core.on_reset_poll(js_sys::Date::now());
                set_holding(&button_ref, engine.core.reset.holding());
                process_actions(&engine, &actions);
            });
            if let Ok(mut slot) = poller.try_borrow_mut() {
                *slot = Some(interval);
            }
        })?;
    }

    for kind in ["mouseup", "mouseleave", "touchend", "touchcancel"] {
        let (button_ref, engine, poller) = (button.clone(), Rc::clone(engine), Rc::clone(&poller));
        listen(button, kind, true, move |_: Event| {
            if let Ok(mut slot) = poller.try_borrow_mut() {
                slot.take();
            }
            let Ok(mut engine) = engine.try_borrow_mut() else {
                set_holding(&button_ref, false);
                return;
            };
            engine.core.on_reset_release();
            set_holding(&button_ref, engine.core.reset.holding());
        })?;
    }
    Ok(())
}

// =============================================================
// Asset loading
// =============================================================

fn load_background(engine: &SharedEngine, url: &str) -> Result<(), JsValue> {
    let image = HtmlImageElement::new()?;

    let (engine_ref, image_ref) = (Rc::clone(engine), image.clone());
    let onload = Closure::<dyn FnMut()>::new(move || {
        let Ok(mut engine) = engine_ref.try_borrow_mut() else {
            return;
        };
        let actions = engine.set_background(image_ref.clone());
        process_actions(&engine, &actions);
    });
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let src = url.to_owned();
    let onerror = Closure::<dyn FnMut()>::new(move || {
        log::warn!("background image {src} failed to load");
    });
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    image.set_src(url);
    Ok(())
}

fn spawn_word_fetch(engine: SharedEngine, url: String) {
    wasm_bindgen_futures::spawn_local(async move {
        let words = match fetch_words(&url).await {
            Ok(words) => words,
            Err(err) => {
                log::error!("{err} ({url})");
                return;
            }
        };
        let Ok(mut engine) = engine.try_borrow_mut() else {
            log::error!("engine busy; word list from {url} discarded");
            return;
        };
        let mut rng = session_rng();
        let actions = engine.load_words(words, &mut rng);
        process_actions(&engine, &actions);
    });
}

async fn fetch_words(url: &str) -> Result<Vec<String>, WordListError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|err| WordListError::Fetch(err.to_string()))?;
    let status = resp.status();
    if !(200..300).contains(&status) {
        return Err(WordListError::Fetch(format!("status {status}")));
    }
    let body = resp
        .text()
        .await
        .map_err(|err| WordListError::Fetch(err.to_string()))?;
    parse_word_list(&body)
}

/// Fresh RNG per page load; every reload reshuffles.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn session_rng() -> StdRng {
    let seed = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    StdRng::seed_from_u64(seed)
}
