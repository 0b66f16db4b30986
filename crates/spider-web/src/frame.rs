use crate::dom;
use crate::render::Painter;
use spider_core::ParticleField;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Coalesces redraw requests into at most one pending animation frame.
///
/// Nothing is drawn unless an input changed: every frame is the answer to a
/// [`request`](Self::request) made by an event handler.
pub struct FrameScheduler {
    pending: Rc<Cell<Option<i32>>>,
    callback: Closure<dyn FnMut()>,
}

impl FrameScheduler {
    pub fn new(field: Rc<RefCell<ParticleField>>, painter: Painter) -> Self {
        let pending = Rc::new(Cell::new(None));
        let pending_cb = pending.clone();
        let callback = Closure::wrap(Box::new(move || {
            pending_cb.set(None);
            let size = dom::css_size(painter.canvas());
            let scene = field.borrow().scene();
            if let Err(e) = painter.paint(&scene, size) {
                log::error!("paint error: {:?}", e);
            }
        }) as Box<dyn FnMut()>);
        Self { pending, callback }
    }

    pub fn request(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        match window.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(e) => log::error!("requestAnimationFrame error: {:?}", e),
        }
    }

    pub fn cancel(&self) {
        if let (Some(handle), Some(window)) = (self.pending.take(), web::window()) {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}
