//! Canvas 2D drawing of a session [`Frame`].
//!
//! This is the only module that touches [`web::CanvasRenderingContext2d`]; it
//! reads the frame and never mutates session state.

use crate::constants::{
    BACKGROUND_COLOR, HIGHLIGHT_COLOR, HIGHLIGHT_RADIUS_PX, NEW_POINT_COLOR, NEW_POINT_RADIUS_PX,
    OUTLINE_COLOR, OUTLINE_WIDTH_PX, POINT_COLOR, POINT_SIZE_PX, STEP_LINE_COLOR, STEP_LINE_WIDTH_PX,
};
use chaos_core::{Frame, Point, RenderSurface, HIGHLIGHT_LIFE, VERTICES};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { ctx })
    }
}

impl RenderSurface for CanvasSurface {
    type Error = JsValue;

    fn present(&mut self, frame: &Frame<'_>) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let canvas = frame.canvas;
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(BACKGROUND_COLOR);
        ctx.fill_rect(0.0, 0.0, canvas.width, canvas.height);

        let screen = |p: Point| frame.viewport.to_screen(p, canvas);

        // Triangle outline
        ctx.set_stroke_style_str(OUTLINE_COLOR);
        ctx.set_line_width(OUTLINE_WIDTH_PX);
        ctx.begin_path();
        for (i, v) in VERTICES.iter().enumerate() {
            let s = screen(*v);
            if i == 0 {
                ctx.move_to(s.x, s.y);
            } else {
                ctx.line_to(s.x, s.y);
            }
        }
        ctx.close_path();
        ctx.stroke();

        // Points, in append order; skip what is off canvas
        ctx.set_fill_style_str(POINT_COLOR);
        let half = POINT_SIZE_PX * 0.5;
        for p in frame.points {
            let s = screen(*p);
            if s.x < -half || s.y < -half || s.x > canvas.width + half || s.y > canvas.height + half {
                continue;
            }
            ctx.fill_rect(s.x - half, s.y - half, POINT_SIZE_PX, POINT_SIZE_PX);
        }

        // Highlighted vertices fade with remaining life
        ctx.set_fill_style_str(HIGHLIGHT_COLOR);
        for h in frame.highlights.iter().rev() {
            let s = screen(h.vertex);
            ctx.set_global_alpha((h.life as f64 / HIGHLIGHT_LIFE as f64).clamp(0.0, 1.0));
            ctx.begin_path();
            ctx.arc(s.x, s.y, HIGHLIGHT_RADIUS_PX, 0.0, TAU)?;
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);

        // In-progress step: line toward the chosen vertex, new point marked
        if let Some(step) = frame.step {
            let from = screen(step.current_point);
            let to = screen(step.target_vertex);
            let new_point = screen(step.new_point);
            ctx.set_stroke_style_str(STEP_LINE_COLOR);
            ctx.set_line_width(STEP_LINE_WIDTH_PX);
            ctx.begin_path();
            ctx.move_to(from.x, from.y);
            ctx.line_to(to.x, to.y);
            ctx.stroke();

            ctx.set_fill_style_str(NEW_POINT_COLOR);
            ctx.begin_path();
            ctx.arc(new_point.x, new_point.y, NEW_POINT_RADIUS_PX, 0.0, TAU)?;
            ctx.fill();
        }
        Ok(())
    }
}
