// DOM hooks and browser-side tuning for the web frontend.

// Element lookups expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const TRACK_ID: &str = "preset-track";
pub const VIEWPORT_SELECTOR: &str = ".preset-viewport";
pub const PREV_BUTTON_ID: &str = "prev";
pub const NEXT_BUTTON_ID: &str = "next";
pub const STATUS_ID: &str = "preset-status";
pub const PANEL_ID: &str = "tuning-panel";

// CSS custom properties on :root holding chip dimensions (px)
pub const ITEM_WIDTH_VAR: &str = "--item-w";
pub const GAP_VAR: &str = "--gap";

// Chip classes
pub const CHIP_CLASS: &str = "preset-chip";
pub const ACTIVE_CLASS: &str = "active";
pub const SIDE_CLASS: &str = "side";

// Pointer travel before a press on the strip counts as a drag (px)
pub const DRAG_CAPTURE_SLOP_PX: f32 = 6.0;

// Cap on devicePixelRatio for the canvas backing store
pub const MAX_PIXEL_RATIO: f64 = 2.0;
