//! Glue between navigation, the transition engine and the parameter store.
//!
//! The controller is driven from outside: navigation calls whenever the user
//! (or script) asks for a preset, and `tick` once per frame. It never
//! schedules anything itself.

use super::carousel::{Carousel, CarouselLayout, DragOutcome, PointerId};
use super::constants::{DEFAULT_TRANSITION_SECS, PRESET_INDEX_STORAGE_KEY};
use super::error::ParamError;
use super::host::{Announcer, Clock, PresetStorage};
use super::params::{ParamSet, ParamStore, ParamValue};
use super::presets::{Preset, PresetRegistry};
use super::settings::{ConfigPatch, Palette, PalettePatch, ShaderConfig};
use super::transition::TransitionEngine;

#[derive(Clone, Debug)]
pub struct ControllerConfig {
    /// Used when nothing valid is stored.
    pub initial_preset: usize,
    /// Blend time for steps and swipes.
    pub transition_secs: f64,
    pub layout: CarouselLayout,
    pub storage_key: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            initial_preset: 0,
            transition_secs: DEFAULT_TRANSITION_SECS,
            layout: CarouselLayout::default(),
            storage_key: PRESET_INDEX_STORAGE_KEY.to_string(),
        }
    }
}

pub struct PresetController {
    registry: PresetRegistry,
    store: ParamStore,
    engine: TransitionEngine,
    carousel: Carousel,
    clock: Box<dyn Clock>,
    storage: Box<dyn PresetStorage>,
    announcer: Box<dyn Announcer>,
    storage_key: String,
    transition_secs: f64,
    dirty: bool,
}

impl PresetController {
    /// Restores the last stored index (falling back to the configured one)
    /// and applies that preset without a transition.
    pub fn new(
        registry: PresetRegistry,
        config: ControllerConfig,
        clock: Box<dyn Clock>,
        storage: Box<dyn PresetStorage>,
        announcer: Box<dyn Announcer>,
    ) -> Self {
        let count = registry.count();
        let initial = restore_index(storage.as_ref(), &config.storage_key, count)
            .unwrap_or(config.initial_preset % count);
        let mut engine = TransitionEngine::new();
        let store = ParamStore::new(engine.apply_immediate(registry.get(initial)));
        log::info!(
            "[preset] start at {} '{}' ({} presets)",
            initial,
            registry.get(initial).name(),
            count
        );
        Self {
            carousel: Carousel::new(count, initial, config.layout),
            registry,
            store,
            engine,
            clock,
            storage,
            announcer,
            storage_key: config.storage_key,
            transition_secs: config.transition_secs,
            dirty: true,
        }
    }

    /// Programmatic navigation. `index` wraps; a non-positive duration
    /// applies the preset immediately.
    ///
    /// Asking for the selected preset while nothing is blending is a no-op.
    /// Returns whether anything happened.
    pub fn switch_to_preset(&mut self, index: i64, duration_secs: f64) -> bool {
        let target = self.registry.wrap(index);
        if target == self.carousel.selected() && !self.engine.is_active() {
            return false;
        }
        let now = self.clock.elapsed_seconds();
        let preset = self.registry.get(target);
        if duration_secs > 0.0 {
            self.engine
                .arm(preset, duration_secs, self.store.values(), now);
        } else {
            let values = self.engine.apply_immediate(preset);
            self.store.apply(&values);
            self.dirty = true;
        }
        let from = self.carousel.selected();
        self.carousel.commit_index(target as i64);
        log::info!(
            "[preset] {} -> {} '{}' ({:.2}s)",
            from,
            target,
            preset.name(),
            duration_secs.max(0.0)
        );
        persist_index(self.storage.as_mut(), &self.storage_key, target);
        self.announcer
            .announce(&format!("Preset changed to {}", preset.name()));
        true
    }

    /// Relative move with the configured transition time (buttons, arrows).
    pub fn step(&mut self, delta: i64) -> bool {
        let target = self.carousel.neighbor(delta);
        self.switch_to_preset(target as i64, self.transition_secs)
    }

    /// Absolute selection with the configured transition time (chip clicks).
    pub fn select(&mut self, index: usize) -> bool {
        self.switch_to_preset(index as i64, self.transition_secs)
    }

    pub fn begin_drag(&mut self, pointer: PointerId, pointer_x: f32) -> bool {
        self.carousel.begin_drag(pointer, pointer_x)
    }

    pub fn move_drag(&mut self, pointer: PointerId, pointer_x: f32) {
        self.carousel.move_drag(pointer, pointer_x);
    }

    /// Releases the drag; commits one step when past the threshold.
    /// Returns whether the selection changed.
    pub fn end_drag(&mut self, pointer: PointerId) -> bool {
        match self.carousel.end_drag(pointer) {
            Some(DragOutcome::Commit(delta)) => self.step(delta),
            Some(DragOutcome::SnapBack) | None => false,
        }
    }

    pub fn cancel_drag(&mut self, pointer: PointerId) -> bool {
        self.carousel.cancel_drag(pointer)
    }

    /// Advances the active transition to `now` and writes the sampled values
    /// into the store. Returns whether the store changed.
    pub fn tick(&mut self, now: f64) -> bool {
        match self.engine.sample(now) {
            Some(values) => {
                self.store.apply(&values);
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Per-frame entry point: ticks to `now` and drains the dirty flag.
    /// True when the store changed by any route since the last poll.
    pub fn poll(&mut self, now: f64) -> bool {
        self.tick(now);
        self.take_dirty()
    }

    /// Current time on the controller's clock.
    pub fn now(&self) -> f64 {
        self.clock.elapsed_seconds()
    }

    pub fn current_values(&self) -> &ParamSet {
        self.store.values()
    }

    /// Direct write for tuning panels. While a transition is running the next
    /// `tick` overwrites it.
    pub fn set_parameter_override(&mut self, name: &str, value: ParamValue) -> Result<(), ParamError> {
        self.store.set(name, value)?;
        if self.engine.is_active() {
            log::debug!("[preset] override of '{}' will be replaced by the running transition", name);
        }
        self.dirty = true;
        Ok(())
    }

    pub fn set_palette(&mut self, patch: PalettePatch) -> Result<(), ParamError> {
        for (name, value) in patch.updates() {
            self.set_parameter_override(name, value)?;
        }
        Ok(())
    }

    pub fn set_config(&mut self, patch: ConfigPatch) -> Result<(), ParamError> {
        for (name, value) in patch.updates() {
            self.set_parameter_override(name, value)?;
        }
        Ok(())
    }

    pub fn palette(&self) -> Palette {
        Palette::from_params(self.store.values())
    }

    pub fn config(&self) -> ShaderConfig {
        ShaderConfig::from_params(self.store.values())
    }

    /// New chip dimensions (e.g. after a resize).
    pub fn set_layout(&mut self, layout: CarouselLayout) {
        self.carousel.set_layout(layout);
    }

    /// Returns and clears the "store changed since last call" flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn registry(&self) -> &PresetRegistry {
        &self.registry
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn selected(&self) -> usize {
        self.carousel.selected()
    }

    pub fn current_preset(&self) -> &Preset {
        self.registry.get(self.carousel.selected())
    }

    pub fn is_transitioning(&self) -> bool {
        self.engine.is_active()
    }

    pub fn transition_secs(&self) -> f64 {
        self.transition_secs
    }
}

/// Stored index if present, well-formed and in range.
pub fn restore_index(storage: &dyn PresetStorage, key: &str, count: usize) -> Option<usize> {
    match storage.get(key) {
        Ok(Some(raw)) => match raw.trim().parse::<usize>() {
            Ok(i) if i < count => Some(i),
            _ => {
                log::warn!("[storage] ignoring stored preset index {:?}", raw);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            log::warn!("[storage] {}", e);
            None
        }
    }
}

fn persist_index(storage: &mut dyn PresetStorage, key: &str, index: usize) {
    if let Err(e) = storage.set(key, &index.to_string()) {
        log::warn!("[storage] could not save preset index: {}", e);
    }
}
