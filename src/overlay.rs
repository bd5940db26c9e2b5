use crate::constants::{BATCH_SELECT_ID, GENERATE_BUTTON_ID, MODE_TOGGLE_ID, STATUS_ID};
use crate::dom;
use crate::status::{relative_zoom, status_text};
use chaos_core::{Session, TickScheduler, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn mode_toggle_checked(document: &web::Document) -> bool {
    document
        .get_element_by_id(MODE_TOGGLE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.checked())
        .unwrap_or(false)
}

pub fn update_status<S: TickScheduler>(document: &web::Document, session: &Session<S>) {
    let stats = session.stats();
    let fitted = Viewport::initial(session.canvas()).map(|v| v.scale());
    let text = status_text(stats.point_count, relative_zoom(stats.scale, fitted), stats.running);
    dom::set_text(document, STATUS_ID, &text);
}

/// Disable generation and the mode toggle while a run is in progress and
/// mirror the session's mode and batch size into the widgets.
pub fn sync_controls<S: TickScheduler>(document: &web::Document, session: &Session<S>) {
    let disabled = !session.controls_enabled();
    dom::set_disabled(document, GENERATE_BUTTON_ID, disabled);
    dom::set_disabled(document, MODE_TOGGLE_ID, disabled);

    if let Some(input) = document
        .get_element_by_id(MODE_TOGGLE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    {
        input.set_checked(session.animation_mode());
    }
    if let Some(select) = document
        .get_element_by_id(BATCH_SELECT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
    {
        select.set_value(&session.batch_size().count().to_string());
    }
}
