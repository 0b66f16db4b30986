use crate::dom::CssSize;
use spider_core::{Scene, Segment};
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

// Background: gray-900 -> black -> gray-800, top-left to bottom-right
const BACKGROUND_STOPS: [(f32, &str); 3] = [(0.0, "#111827"), (0.5, "#000000"), (1.0, "#1f2937")];

// Title gradient, left to right
const TITLE_STOPS: [(f32, &str); 2] = [(0.0, "rgba(0, 164, 196, 0.7)"), (1.0, "rgba(19, 9, 77, 0.7)")];
const TITLE_LINES: [&str; 2] = ["Animating", "Pattern"];
const TITLE_FONT_PX: f64 = 60.0;
const TITLE_LINE_HEIGHT: f64 = 1.25;

pub struct Painter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Draw one full frame: background, links, dots, then the title on top.
    pub fn paint(&self, scene: &Scene, size: CssSize) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        // Scene coordinates are CSS pixels
        ctx.set_transform(size.dpr, 0.0, 0.0, size.dpr, 0.0, 0.0)?;
        self.draw_background(size)?;

        for seg in scene.peer_links.iter().chain(&scene.pointer_links) {
            self.stroke_segment(seg);
        }

        for dot in &scene.dots {
            ctx.begin_path();
            ctx.arc(dot.center.x as f64, dot.center.y as f64, dot.radius as f64, 0.0, TAU)?;
            ctx.set_fill_style_str(&dot.color.to_string());
            ctx.fill();
        }

        self.draw_title(size)
    }

    fn draw_background(&self, size: CssSize) -> Result<(), JsValue> {
        let gradient = self
            .ctx
            .create_linear_gradient(0.0, 0.0, size.width, size.height);
        for (offset, color) in BACKGROUND_STOPS {
            gradient.add_color_stop(offset, color)?;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, size.width, size.height);
        Ok(())
    }

    fn stroke_segment(&self, seg: &Segment) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(seg.from.x as f64, seg.from.y as f64);
        ctx.line_to(seg.to.x as f64, seg.to.y as f64);
        ctx.set_line_width(seg.width as f64);
        ctx.set_stroke_style_str(&seg.color.to_string());
        ctx.stroke();
    }

    fn draw_title(&self, size: CssSize) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let cx = size.width / 2.0;
        let cy = size.height / 2.0;
        let line_h = TITLE_FONT_PX * TITLE_LINE_HEIGHT;
        let half_w = (size.width / 2.0).min(TITLE_FONT_PX * 3.0);

        let gradient = ctx.create_linear_gradient(cx - half_w, 0.0, cx + half_w, 0.0);
        for (offset, color) in TITLE_STOPS {
            gradient.add_color_stop(offset, color)?;
        }
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.set_font(&format!("bold {}px sans-serif", TITLE_FONT_PX));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");

        let first_y = cy - line_h * (TITLE_LINES.len() as f64 - 1.0) / 2.0;
        for (i, line) in TITLE_LINES.iter().enumerate() {
            ctx.fill_text(line, cx, first_y + line_h * i as f64)?;
        }
        Ok(())
    }
}
