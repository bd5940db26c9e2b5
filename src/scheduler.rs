use crate::app::App;
use chaos_core::{PendingTick, TickScheduler};
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fires animation ticks through `window.setTimeout`.
///
/// Callbacks only hold a weak reference to the app, so a page teardown
/// drops pending ticks instead of keeping the session alive.
pub struct TimeoutScheduler {
    app: Weak<RefCell<App>>,
}

impl TimeoutScheduler {
    pub fn new(app: Weak<RefCell<App>>) -> Self {
        Self { app }
    }
}

impl TickScheduler for TimeoutScheduler {
    type Handle = Option<i32>;

    fn schedule(&mut self, tick: PendingTick) -> Option<i32> {
        let app = self.app.clone();
        let callback = Closure::once_into_js(move || {
            if let Some(app) = app.upgrade() {
                App::handle_tick(&app, tick);
            }
        });
        let window = web::window()?;
        let delay_ms = i32::try_from(tick.delay.as_millis()).unwrap_or(i32::MAX);
        let handler: &js_sys::Function = callback.unchecked_ref();
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(handler, delay_ms) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("[anim] setTimeout failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: Option<i32>) {
        if let (Some(id), Some(window)) = (handle, web::window()) {
            window.clear_timeout_with_handle(id);
        }
    }
}
