use crate::dom;
use crate::input::DragState;
use crate::overlay;
use crate::render::CanvasSurface;
use crate::scheduler::TimeoutScheduler;
use chaos_core::{BatchSize, CanvasSize, PendingTick, RenderSurface, Session, SessionConfig, TickOutcome};
use glam::DVec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SharedApp = Rc<RefCell<App>>;

/// Front-end state: the session plus the DOM handles it is drawn into.
pub struct App {
    session: Session<TimeoutScheduler>,
    surface: CanvasSurface,
    canvas: web::HtmlCanvasElement,
    document: web::Document,
    pub drag: DragState,
}

impl App {
    pub fn create(document: web::Document, canvas: web::HtmlCanvasElement) -> anyhow::Result<SharedApp> {
        let surface = CanvasSurface::new(&canvas)?;
        let (w, h) = dom::sync_canvas_backing_size(&canvas);
        let config = SessionConfig {
            seed: None,
            animation_mode: overlay::mode_toggle_checked(&document),
            batch_size: BatchSize::default(),
        };
        let app = Rc::new_cyclic(|weak| {
            RefCell::new(App {
                session: Session::new(
                    config,
                    CanvasSize::new(w as f64, h as f64),
                    TimeoutScheduler::new(weak.clone()),
                ),
                surface,
                canvas,
                document,
                drag: DragState::default(),
            })
        });
        app.borrow_mut().refresh();
        log::info!("[app] canvas {}x{}", w, h);
        Ok(app)
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Deliver a fired animation tick and redraw if it changed anything.
    pub fn handle_tick(app: &SharedApp, tick: PendingTick) {
        let mut a = app.borrow_mut();
        match a.session.on_tick(tick) {
            TickOutcome::Stale => {}
            TickOutcome::Scheduled(_) => a.redraw(),
            TickOutcome::Finished => a.refresh(),
        }
    }

    pub fn redraw(&mut self) {
        if let Err(e) = self.surface.present(&self.session.frame()) {
            log::error!("[render] draw error: {:?}", e);
        }
        overlay::update_status(&self.document, &self.session);
    }

    /// Redraw and bring the controls in line with the session.
    pub fn refresh(&mut self) {
        self.redraw();
        overlay::sync_controls(&self.document, &self.session);
    }

    pub fn generate(&mut self) {
        let started = Instant::now();
        match self.session.generate() {
            Ok(()) if self.session.is_running() => log::info!("[app] animated run started"),
            Ok(()) => log::info!(
                "[app] generated {} points in {:.1} ms",
                self.session.batch_size().count(),
                started.elapsed().as_secs_f64() * 1000.0
            ),
            Err(e) => log::warn!("[app] generate ignored: {}", e),
        }
        self.refresh();
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.refresh();
    }

    pub fn set_animation_mode(&mut self, enabled: bool) {
        if let Err(e) = self.session.set_animation_mode(enabled) {
            log::warn!("[app] mode change ignored: {}", e);
        }
        self.refresh();
    }

    pub fn toggle_animation_mode(&mut self) {
        let enabled = !self.session.animation_mode();
        self.set_animation_mode(enabled);
    }

    pub fn select_batch(&mut self, count: usize) {
        match BatchSize::try_from(count) {
            Ok(size) => self.session.set_batch_size(size),
            Err(e) => log::warn!("[app] {}", e),
        }
        self.refresh();
    }

    pub fn fit_view(&mut self) {
        self.session.fit_view();
        self.redraw();
    }

    pub fn on_wheel(&mut self, x: f64, y: f64, delta_px: f64) {
        self.session.on_wheel(DVec2::new(x, y), delta_px);
        self.redraw();
    }

    pub fn on_drag(&mut self, dx: f64, dy: f64) {
        self.session.on_drag_delta(dx, dy);
        self.redraw();
    }

    pub fn on_resize(&mut self) {
        let (w, h) = dom::sync_canvas_backing_size(&self.canvas);
        self.session.on_resize(w as f64, h as f64);
        self.redraw();
    }
}
