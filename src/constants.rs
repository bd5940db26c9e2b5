// Drawing and interaction tuning for the canvas front-end.
// Colors are CSS strings handed straight to the 2D context.

// Palette
pub const BACKGROUND_COLOR: &str = "#0b0d12";
pub const OUTLINE_COLOR: &str = "rgba(255, 255, 255, 0.25)";
pub const POINT_COLOR: &str = "#7fd1ff";
pub const STEP_LINE_COLOR: &str = "#ffd166";
pub const NEW_POINT_COLOR: &str = "#ef476f";
pub const HIGHLIGHT_COLOR: &str = "#06d6a0";

// Sizes in canvas pixels
pub const POINT_SIZE_PX: f64 = 1.5;
pub const NEW_POINT_RADIUS_PX: f64 = 5.0;
pub const HIGHLIGHT_RADIUS_PX: f64 = 12.0;
pub const OUTLINE_WIDTH_PX: f64 = 1.0;
pub const STEP_LINE_WIDTH_PX: f64 = 1.5;

// Wheel delta normalisation (WheelEvent.deltaMode)
pub const WHEEL_LINE_HEIGHT_PX: f64 = 16.0; // DOM_DELTA_LINE
pub const WHEEL_PAGE_HEIGHT_PX: f64 = 800.0; // DOM_DELTA_PAGE

// Drags shorter than this (in canvas pixels) are ignored
pub const DRAG_DEAD_ZONE_PX: f64 = 0.5;

// DOM element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const GENERATE_BUTTON_ID: &str = "generate";
pub const RESET_BUTTON_ID: &str = "reset";
pub const MODE_TOGGLE_ID: &str = "mode-toggle";
pub const BATCH_SELECT_ID: &str = "batch-size";
pub const STATUS_ID: &str = "status";
