pub mod bindings;
pub mod carousel;
pub mod constants;
pub mod controller;
pub mod error;
pub mod host;
pub mod keys;
pub mod options;
pub mod params;
pub mod presets;
pub mod settings;
pub mod transition;
pub mod uniforms;

pub use bindings::{default_bindings, ControlBinding};
pub use carousel::{
    resolve_index, Carousel, CarouselLayout, ChipRole, DragOutcome, PointerId, TrackPosition,
};
pub use constants::*;
pub use controller::{ControllerConfig, PresetController};
pub use error::{ConfigError, ParamError, StorageError};
pub use host::{Announcer, Clock, InstantClock, LogAnnouncer, ManualClock, MemoryStorage, NullStorage, PresetStorage};
pub use keys::{is_activation_key, is_text_entry_tag, nav_delta_for_key};
pub use options::CanvasOptions;
pub use params::{ParamKind, ParamSet, ParamStore, ParamValue};
pub use presets::{builtin_presets, Preset, PresetRegistry};
pub use settings::{ConfigPatch, Palette, PalettePatch, ShaderConfig};
pub use transition::{ease_out_cubic, TransitionEngine};
pub use uniforms::GradientUniforms;

// Shader bundled as a string constant
pub static GRADIENT_WGSL: &str = include_str!("../../shaders/gradient.wgsl");
