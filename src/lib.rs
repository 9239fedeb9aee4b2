//! Animated shader gradient background with preset transitions and a swipe
//! carousel.
//!
//! [`core`] holds the platform-free engine: parameters, presets, the
//! transition engine, the carousel state machine and the controller that
//! keeps them in sync. Everything else is the WebAssembly frontend (WebGPU
//! renderer, DOM carousel, input wiring) and only builds for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod carousel_dom;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod panel;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod storage;

#[cfg(target_arch = "wasm32")]
pub use app::{
    config, current_preset, palette, set_config, set_palette, set_param, start, switch_to_preset,
};
