// Pure input helpers: no DOM types, so they can be tested on the host.

/// Pointer drag tracking in canvas pixels.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last_x: f64,
    pub last_y: f64,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, x: f64, y: f64) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last_x = x;
        self.last_y = y;
    }

    /// Movement since the last call, or `None` when not dragging with this
    /// pointer or the movement is inside `dead_zone`.
    pub fn update(&mut self, pointer_id: i32, x: f64, y: f64, dead_zone: f64) -> Option<(f64, f64)> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let dx = x - self.last_x;
        let dy = y - self.last_y;
        if dx.abs() < dead_zone && dy.abs() < dead_zone {
            return None;
        }
        self.last_x = x;
        self.last_y = y;
        Some((dx, dy))
    }

    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.active && pointer_id == self.pointer_id {
            self.active = false;
            return true;
        }
        false
    }
}

/// Map a CSS-pixel offset inside the canvas element to backing-store pixels.
#[inline]
pub fn css_to_canvas_px(
    x_css: f64,
    y_css: f64,
    rect_w: f64,
    rect_h: f64,
    canvas_w: f64,
    canvas_h: f64,
) -> (f64, f64) {
    if rect_w > 0.0 && rect_h > 0.0 {
        (x_css * canvas_w / rect_w, y_css * canvas_h / rect_h)
    } else {
        (x_css, y_css)
    }
}

/// Convert `WheelEvent.deltaY` to pixels according to `deltaMode`
/// (0 = pixels, 1 = lines, 2 = pages).
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, line_px: f64, page_px: f64) -> f64 {
    match delta_mode {
        1 => delta_y * line_px,
        2 => delta_y * page_px,
        _ => delta_y,
    }
}

/// Actions reachable from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Generate,
    Reset,
    ToggleAnimationMode,
    FitView,
    SelectBatch(usize),
}

#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        "g" | "G" => Some(KeyCommand::Generate),
        "r" | "R" => Some(KeyCommand::Reset),
        "a" | "A" => Some(KeyCommand::ToggleAnimationMode),
        "f" | "F" => Some(KeyCommand::FitView),
        "1" => Some(KeyCommand::SelectBatch(100)),
        "2" => Some(KeyCommand::SelectBatch(1_000)),
        "3" => Some(KeyCommand::SelectBatch(10_000)),
        _ => None,
    }
}

/// Parse the value of the batch-size `<select>`.
#[inline]
pub fn parse_batch_count(value: &str) -> Option<usize> {
    value.trim().replace('_', "").parse().ok()
}
