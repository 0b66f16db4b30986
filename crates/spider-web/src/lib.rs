#![cfg(target_arch = "wasm32")]
use spider_core::{NoiseKind, NoiseOverlay, NoiseParams};
use wasm_bindgen::prelude::*;

mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spider-web starting");
    Ok(())
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:?}", e))
}

/// Handle to a mounted particle field.
#[wasm_bindgen]
pub struct SpiderField {
    mounted: Option<events::Mounted>,
}

#[wasm_bindgen]
impl SpiderField {
    pub fn particle_count(&self) -> usize {
        self.mounted
            .as_ref()
            .map(|m| m.field.borrow().particles().len())
            .unwrap_or(0)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Remove listeners and cancel any pending resize or frame.
    pub fn unmount(&mut self) {
        self.mounted = None;
    }
}

/// Attach the particle field to the canvas with the given element id.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<SpiderField, JsValue> {
    init(canvas_id).map_err(to_js)
}

fn init(canvas_id: &str) -> anyhow::Result<SpiderField> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;
    let mounted = events::mount(canvas, ctx)?;
    Ok(SpiderField {
        mounted: Some(mounted),
    })
}

/// Paint a fractal-noise grain layer onto an element. `size` is 1..=10
/// (smaller is coarser), `density` is 0..=100 percent opacity.
#[wasm_bindgen]
pub fn apply_noise(element_id: &str, size: u8, density: u8, mono: bool) -> Result<(), JsValue> {
    let params = NoiseParams {
        size,
        density,
        kind: if mono { NoiseKind::Mono } else { NoiseKind::Color },
    };
    let overlay = NoiseOverlay::new(params, &mut rand::thread_rng());
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    overlay::apply(&document, element_id, &overlay).map_err(to_js)
}

#[wasm_bindgen]
pub fn clear_noise(element_id: &str) -> Result<(), JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    overlay::clear(&document, element_id).map_err(to_js)
}
