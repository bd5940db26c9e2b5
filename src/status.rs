// Status line formatting, kept free of DOM types.

/// Zoom relative to the fitted view, e.g. `2.0` when twice as close.
#[inline]
pub fn relative_zoom(scale: f64, fitted_scale: Option<f64>) -> f64 {
    match fitted_scale {
        Some(base) if base > 0.0 => scale / base,
        _ => 1.0,
    }
}

pub fn status_text(point_count: usize, zoom: f64, running: bool) -> String {
    let noun = if point_count == 1 { "point" } else { "points" };
    let mut s = format!("{} {} · zoom {:.2}×", point_count, noun, zoom);
    if running {
        s.push_str(" · animating");
    }
    s
}
