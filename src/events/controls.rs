use crate::app::SharedApp;
use crate::constants::{BATCH_SELECT_ID, GENERATE_BUTTON_ID, MODE_TOGGLE_ID, RESET_BUTTON_ID};
use crate::dom;
use crate::input::parse_batch_count;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the generate/reset buttons, the animation toggle and the batch selector.
pub fn wire_controls(document: &web::Document, app: &SharedApp) {
    let a = app.clone();
    dom::add_click_listener(document, GENERATE_BUTTON_ID, move || a.borrow_mut().generate());

    let a = app.clone();
    dom::add_click_listener(document, RESET_BUTTON_ID, move || a.borrow_mut().reset());

    let a = app.clone();
    dom::add_listener(document, MODE_TOGGLE_ID, "change", move |ev: web::Event| {
        let checked = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
            .map(|input| input.checked());
        if let Some(checked) = checked {
            a.borrow_mut().set_animation_mode(checked);
        }
    });

    let a = app.clone();
    dom::add_listener(document, BATCH_SELECT_ID, "change", move |ev: web::Event| {
        let value = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlSelectElement>().ok())
            .map(|select| select.value());
        match value.as_deref().and_then(parse_batch_count) {
            Some(count) => a.borrow_mut().select_batch(count),
            None => log::warn!("[controls] unreadable batch size {:?}", value),
        }
    });
}
