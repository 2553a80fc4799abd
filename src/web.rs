//! Browser host: binds the renderer to a `<canvas>` and drives it with
//! `requestAnimationFrame`
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement};

use crate::{
    ExplorerError,
    body::{PlanetId, Record, Star},
    config::ExplorerConfig,
    renderer::{CancelToken, CanvasSurface, RenderState, Renderer},
};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Only fails when a logger is already installed, which then receives this warning
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::warn!("Console logger not installed: {e}");
    }
}

struct WebState {
    renderer: Renderer,
    surface: CanvasSurface,
    container: HtmlElement,
}

impl WebState {
    fn determine_size(&mut self) {
        let width = self.container.client_width().max(0) as u32;
        let height = self.container.client_height().max(0) as u32;
        self.surface.resize(width, height);
        self.renderer.determine_size(width, height);
    }
}

/// Entry point for the page's interaction layer
#[wasm_bindgen]
pub struct WebExplorer {
    state: Rc<RefCell<WebState>>,
}

#[wasm_bindgen]
impl WebExplorer {
    /// Attach to the canvas `canvas_id`, sized to the element `container_id`
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, container_id: &str) -> Result<WebExplorer, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{canvas_id}")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("#{canvas_id} is not a canvas")))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{container_id}")))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str(&format!("#{container_id} is not an HTML element")))?;

        let surface = CanvasSurface::new(canvas).map_err(to_js)?;
        let mut state = WebState {
            renderer: Renderer::from_config(&ExplorerConfig::default()),
            surface,
            container,
        };
        state.determine_size();

        log::info!("Exoplanet explorer attached to #{canvas_id}");
        Ok(Self {
            state: Rc::new(RefCell::new(state)),
        })
    }

    /// Show the star system described by `records_json`, a JSON array of result rows for
    /// one star, optionally focusing one of its planets
    pub fn show_system(&self, records_json: &str, focus: Option<f64>) -> Result<(), JsValue> {
        let records = Record::parse_many(records_json).map_err(to_js)?;
        let star = Star::from_result_set(&records).map_err(to_js)?;

        let (started, token) = {
            let mut state = self.state.borrow_mut();
            match focus {
                Some(koi) => state.renderer.set_focus(PlanetId::new(koi).map_err(to_js)?),
                None => state.renderer.clear_focus(),
            }
            let started = state.renderer.show_star(star);
            (started, state.renderer.cancel_token())
        };

        if started {
            start_loop(Rc::clone(&self.state), token)?;
        }
        Ok(())
    }

    pub fn set_focus(&self, planet_id: f64) -> Result<(), JsValue> {
        let planet_id = PlanetId::new(planet_id).map_err(to_js)?;
        self.state.borrow_mut().renderer.set_focus(planet_id);
        Ok(())
    }

    /// Re-read the container size, e.g. from a window resize listener
    pub fn determine_size(&self) {
        self.state.borrow_mut().determine_size();
    }

    pub fn stop(&self) {
        self.state.borrow_mut().renderer.stop();
    }
}

fn to_js(error: ExplorerError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-rescheduling frame callback; drops itself once the loop is cancelled or idle
fn start_loop(state: Rc<RefCell<WebState>>, token: CancelToken) -> Result<(), JsValue> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = Rc::clone(&callback);

    *callback.borrow_mut() = Some(Closure::new(move || {
        if token.is_cancelled() {
            next.borrow_mut().take();
            return;
        }

        let render_state = {
            let mut state = state.borrow_mut();
            let WebState {
                renderer, surface, ..
            } = &mut *state;
            renderer.tick(surface, js_sys::Date::now())
        };

        if render_state == RenderState::Animating {
            if let Some(closure) = next.borrow().as_ref() {
                if let Err(e) = request_animation_frame(closure) {
                    log::error!("Failed to schedule frame: {:?}", e);
                }
            }
        } else {
            next.borrow_mut().take();
        }
    }));

    let first_frame = callback.borrow();
    match first_frame.as_ref() {
        Some(closure) => request_animation_frame(closure),
        None => Ok(()),
    }
}

fn request_animation_frame(closure: &Closure<dyn FnMut()>) -> Result<(), JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window available"))?
        .request_animation_frame(closure.as_ref().unchecked_ref())?;
    Ok(())
}
