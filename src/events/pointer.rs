use crate::app::SharedApp;
use crate::constants::{DRAG_DEAD_ZONE_PX, WHEEL_LINE_HEIGHT_PX, WHEEL_PAGE_HEIGHT_PX};
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Event position in canvas backing-store pixels.
#[inline]
fn event_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    input::css_to_canvas_px(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
        rect.width(),
        rect.height(),
        canvas.width() as f64,
        canvas.height() as f64,
    )
}

pub fn wire_pointer_handlers(app: &SharedApp, canvas: &web::HtmlCanvasElement) {
    wire_pointerdown(app, canvas);
    wire_pointermove(app);
    wire_pointerup(app, "pointerup");
    wire_pointerup(app, "pointercancel");
    wire_wheel(app, canvas);
}

fn wire_pointerdown(app: &SharedApp, canvas: &web::HtmlCanvasElement) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let mut a = app.borrow_mut();
        let (x, y) = event_canvas_px(&ev, a.canvas());
        a.drag.begin(ev.pointer_id(), x, y);
        _ = a.canvas().set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(app: &SharedApp) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut a = app.borrow_mut();
        if !a.drag.active {
            return;
        }
        let (x, y) = event_canvas_px(&ev, a.canvas());
        if let Some((dx, dy)) = a.drag.update(ev.pointer_id(), x, y, DRAG_DEAD_ZONE_PX) {
            a.on_drag(dx, dy);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(app: &SharedApp, event: &str) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut a = app.borrow_mut();
        if a.drag.end(ev.pointer_id()) {
            _ = a.canvas().release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(app: &SharedApp, canvas: &web::HtmlCanvasElement) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let delta = input::wheel_delta_px(
            ev.delta_y(),
            ev.delta_mode(),
            WHEEL_LINE_HEIGHT_PX,
            WHEEL_PAGE_HEIGHT_PX,
        );
        if delta == 0.0 || !delta.is_finite() {
            return;
        }
        let mut a = app.borrow_mut();
        let (x, y) = event_canvas_px(&ev, a.canvas());
        a.on_wheel(x, y, delta);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
