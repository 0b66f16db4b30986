use crate::dom;
use crate::frame::FrameScheduler;
use crate::input;
use crate::render::Painter;
use anyhow::anyhow;
use instant::Instant;
use spider_core::ParticleField;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A particle field wired to a canvas. Dropping it unhooks every listener and
/// timer it installed.
pub struct Mounted {
    pub field: Rc<RefCell<ParticleField>>,
    frames: Rc<FrameScheduler>,
    resize_timer: Rc<Cell<Option<i32>>>,
    pointer_cb: Closure<dyn FnMut(web::PointerEvent)>,
    resize_cb: Closure<dyn FnMut()>,
    _settle_cb: Rc<Closure<dyn FnMut()>>,
}

pub fn mount(
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
) -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;

    let size = dom::sync_canvas_backing_size(&canvas);
    let field = Rc::new(RefCell::new(ParticleField::default()));
    match field
        .borrow_mut()
        .mount(size.width as f32, size.height as f32, &mut rand::thread_rng())
    {
        Ok(n) => log::info!("[mount] {} particles for {}x{}", n, size.width, size.height),
        Err(e) => log::warn!("[mount] {}; waiting for a resize", e),
    }

    let frames = Rc::new(FrameScheduler::new(
        field.clone(),
        Painter::new(canvas.clone(), ctx),
    ));
    frames.request();

    // pointermove
    let pointer_cb = {
        let field_m = field.clone();
        let frames_m = frames.clone();
        let canvas_m = canvas.clone();
        Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_surface_px(&ev, &canvas_m);
            field_m.borrow_mut().set_pointer(pos);
            frames_m.request();
        }) as Box<dyn FnMut(_)>)
    };
    window
        .add_event_listener_with_callback("pointermove", pointer_cb.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("pointermove listener: {:?}", e))?;

    // settle: fires once the resize burst has been quiet for the settle delay
    let resize_timer = Rc::new(Cell::new(None::<i32>));
    let settle_cb = {
        let field_s = field.clone();
        let frames_s = frames.clone();
        let timer_s = resize_timer.clone();
        Rc::new(Closure::wrap(Box::new(move || {
            timer_s.set(None);
            let applied = field_s.borrow_mut().flush(&mut rand::thread_rng());
            match applied {
                Some(Ok(n)) => log::info!("[resize] regenerated {} particles", n),
                Some(Err(e)) => log::warn!("[resize] skipped: {}", e),
                None => {}
            }
            frames_s.request();
        }) as Box<dyn FnMut()>))
    };

    // resize
    let resize_cb = {
        let field_r = field.clone();
        let frames_r = frames.clone();
        let timer_r = resize_timer.clone();
        let settle_r = settle_cb.clone();
        let canvas_r = canvas.clone();
        Closure::wrap(Box::new(move || {
            let size = dom::sync_canvas_backing_size(&canvas_r);
            let delay = {
                let mut f = field_r.borrow_mut();
                f.note_resize(size.width as f32, size.height as f32, Instant::now());
                f.config.settle_delay
            };
            if let Some(window) = web::window() {
                if let Some(handle) = timer_r.take() {
                    window.clear_timeout_with_handle(handle);
                }
                let settle_fn: &js_sys::Function = (*settle_r).as_ref().unchecked_ref();
                match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    settle_fn,
                    delay.as_millis() as i32,
                ) {
                    Ok(handle) => timer_r.set(Some(handle)),
                    Err(e) => log::error!("setTimeout error: {:?}", e),
                }
            }
            // resizing the backing store cleared the canvas
            frames_r.request();
        }) as Box<dyn FnMut()>)
    };
    window
        .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("resize listener: {:?}", e))?;

    Ok(Mounted {
        field,
        frames,
        resize_timer,
        pointer_cb,
        resize_cb,
        _settle_cb: settle_cb,
    })
}

impl Drop for Mounted {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            let _ = window.remove_event_listener_with_callback(
                "pointermove",
                self.pointer_cb.as_ref().unchecked_ref(),
            );
            let _ = window
                .remove_event_listener_with_callback("resize", self.resize_cb.as_ref().unchecked_ref());
            if let Some(handle) = self.resize_timer.take() {
                window.clear_timeout_with_handle(handle);
            }
        }
        self.frames.cancel();
        self.field.borrow_mut().cancel_pending();
        log::info!("[unmount] listeners removed");
    }
}
