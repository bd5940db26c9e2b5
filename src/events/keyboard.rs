use crate::app::SharedApp;
use crate::input::{command_for_key, KeyCommand};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &SharedApp) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(command) = command_for_key(&ev.key()) else {
        return;
    };
    let mut a = app.borrow_mut();
    match command {
        KeyCommand::Generate => a.generate(),
        KeyCommand::Reset => a.reset(),
        KeyCommand::ToggleAnimationMode => a.toggle_animation_mode(),
        KeyCommand::FitView => a.fit_view(),
        KeyCommand::SelectBatch(count) => a.select_batch(count),
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(app: SharedApp) {
    if let Some(window) = web::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &app);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
