#![cfg(target_arch = "wasm32")]
use crate::app::{App, SharedApp};
use crate::constants::CANVAS_ID;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod app;
mod constants;
mod dom;
mod events;
mod input;
mod overlay;
mod render;
mod scheduler;
mod status;

fn wire_canvas_resize(app: &SharedApp) {
    let app = app.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        app.borrow_mut().on_resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("chaos-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let app = App::create(document.clone(), canvas.clone())?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&app);
    events::wire_pointer_handlers(&app, &canvas);
    events::wire_controls(&document, &app);
    events::wire_global_keydown(app);

    Ok(())
}
