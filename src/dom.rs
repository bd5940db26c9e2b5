use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach `handler` to `event` on the element with `element_id`, if present.
pub fn add_listener<E>(
    document: &web::Document,
    element_id: &str,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("[dom] missing #{}", element_id);
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: E| handler(ev)) as Box<dyn FnMut(E)>);
    _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(document: &web::Document, element_id: &str, mut handler: impl FnMut() + 'static) {
    add_listener(document, element_id, "click", move |_: web::Event| handler());
}

pub fn set_disabled(document: &web::Document, element_id: &str, disabled: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if disabled {
            _ = el.set_attribute("disabled", "");
        } else {
            _ = el.remove_attribute("disabled");
        }
    }
}

pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Match the canvas backing store to its CSS size times the device pixel ratio.
///
/// Returns the new size in backing-store pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    (canvas.width(), canvas.height())
}
