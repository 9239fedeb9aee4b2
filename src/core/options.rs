/// Host options, read from `data-*` attributes on the canvas element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanvasOptions {
    /// Build the tuning panel (`data-gui`).
    pub show_gui: bool,
    /// Build the preset carousel (`data-presets`).
    pub show_presets: bool,
    /// Preset used when nothing is stored (`data-preset`).
    pub initial_preset: usize,
    /// Follow window resizes (`data-auto-resize`).
    pub auto_resize: bool,
    /// Render only when something changes, with time frozen (`data-static`).
    pub static_mode: bool,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            show_gui: false,
            show_presets: true,
            initial_preset: 0,
            auto_resize: true,
            static_mode: false,
        }
    }
}

impl CanvasOptions {
    /// `attr` looks up an attribute value by its `data-*` name.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        let flag = |name: &str, default: bool| attr(name).map_or(default, |v| parse_flag(&v, default));
        Self {
            show_gui: flag("data-gui", d.show_gui),
            show_presets: flag("data-presets", d.show_presets),
            initial_preset: attr("data-preset")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(d.initial_preset),
            auto_resize: flag("data-auto-resize", d.auto_resize),
            static_mode: flag("data-static", d.static_mode),
        }
    }
}

// A bare attribute (`<canvas data-static>`) reads as "" and means true.
fn parse_flag(raw: &str, default: bool) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => default,
    }
}
