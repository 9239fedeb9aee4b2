// Host-side tests for the preset controller, driven by a manual clock and
// in-memory storage.

use frost_canvas::core::{
    builtin_presets, Announcer, ConfigPatch, ControllerConfig, ManualClock, MemoryStorage, NullStorage,
    PalettePatch, ParamError, ParamValue, PresetController, PresetRegistry, PresetStorage,
    StorageError, NOISE_SCALE, PALETTE_A, PRESET_INDEX_STORAGE_KEY,
};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<String>>>);

impl Announcer for Recorder {
    fn announce(&mut self, text: &str) {
        self.0.borrow_mut().push(text.to_string());
    }
}

impl Recorder {
    fn messages(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

struct BrokenStorage;

impl PresetStorage for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("denied".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("denied".into()))
    }
}

struct Harness {
    ctrl: PresetController,
    clock: ManualClock,
    storage: MemoryStorage,
    announcer: Recorder,
}

fn harness_with(storage: MemoryStorage, config: ControllerConfig) -> Harness {
    harness_with_registry(
        PresetRegistry::builtin().expect("builtin presets"),
        storage,
        config,
    )
}

fn harness_with_registry(
    registry: PresetRegistry,
    storage: MemoryStorage,
    config: ControllerConfig,
) -> Harness {
    let clock = ManualClock::new();
    let announcer = Recorder::default();
    let ctrl = PresetController::new(
        registry,
        config,
        Box::new(clock.clone()),
        Box::new(storage.clone()),
        Box::new(announcer.clone()),
    );
    Harness {
        ctrl,
        clock,
        storage,
        announcer,
    }
}

fn four_presets() -> PresetRegistry {
    PresetRegistry::new(builtin_presets().into_iter().take(4).collect()).expect("four presets")
}

fn harness() -> Harness {
    harness_with(MemoryStorage::new(), ControllerConfig::default())
}

fn stored(storage: &MemoryStorage) -> Option<String> {
    storage.get(PRESET_INDEX_STORAGE_KEY).ok().flatten()
}

#[test]
fn starts_on_first_preset_without_transition() {
    let mut h = harness();
    assert_eq!(h.ctrl.selected(), 0);
    assert!(!h.ctrl.is_transitioning());
    assert_eq!(h.ctrl.current_values(), h.ctrl.registry().get(0).values());
    assert!(h.ctrl.take_dirty());
    assert!(!h.ctrl.take_dirty());
    assert!(h.announcer.messages().is_empty());
}

#[test]
fn restores_stored_index() {
    let storage = MemoryStorage::new().with_entry(PRESET_INDEX_STORAGE_KEY, "3");
    let h = harness_with(storage, ControllerConfig::default());
    assert_eq!(h.ctrl.selected(), 3);
    assert_eq!(h.ctrl.current_values(), h.ctrl.registry().get(3).values());
}

#[test]
fn stored_index_tolerates_whitespace() {
    let storage = MemoryStorage::new().with_entry(PRESET_INDEX_STORAGE_KEY, " 2\n");
    let h = harness_with(storage, ControllerConfig::default());
    assert_eq!(h.ctrl.selected(), 2);
}

#[test]
fn out_of_range_or_garbage_index_falls_back() {
    for raw in ["9", "-1", "abc", ""] {
        let storage = MemoryStorage::new().with_entry(PRESET_INDEX_STORAGE_KEY, raw);
        let h = harness_with(storage, ControllerConfig::default());
        assert_eq!(h.ctrl.selected(), 0, "stored {:?}", raw);
    }
}

#[test]
fn configured_initial_preset_used_when_nothing_stored() {
    let config = ControllerConfig {
        initial_preset: 4,
        ..ControllerConfig::default()
    };
    let h = harness_with(MemoryStorage::new(), config);
    assert_eq!(h.ctrl.selected(), 4);

    let config = ControllerConfig {
        initial_preset: 8,
        ..ControllerConfig::default()
    };
    let h = harness_with(MemoryStorage::new(), config);
    assert_eq!(h.ctrl.selected(), 2);
}

#[test]
fn switch_blends_persists_and_announces() {
    let mut h = harness();
    assert!(h.ctrl.switch_to_preset(1, 0.9));
    assert_eq!(h.ctrl.selected(), 1);
    assert_eq!(h.ctrl.carousel().selected(), 1);
    assert!(h.ctrl.is_transitioning());
    assert_eq!(stored(&h.storage).as_deref(), Some("1"));
    assert_eq!(h.announcer.messages(), vec!["Preset changed to Aurora".to_string()]);

    // Frost 0.3 -> Aurora 0.45, eased 0.875 at the midpoint
    h.clock.set(0.45);
    assert!(h.ctrl.tick(h.ctrl.now()));
    let mid = h.ctrl.current_values().scalar(NOISE_SCALE).unwrap_or_default();
    assert!((mid - 0.43125).abs() < 1e-5, "mid = {}", mid);

    h.clock.set(0.9);
    assert!(h.ctrl.tick(h.ctrl.now()));
    assert_eq!(h.ctrl.current_values(), h.ctrl.registry().get(1).values());
    assert!(!h.ctrl.is_transitioning());
    assert!(!h.ctrl.tick(1.0));
}

#[test]
fn zero_duration_applies_immediately() {
    let mut h = harness();
    h.ctrl.take_dirty();
    assert!(h.ctrl.switch_to_preset(4, 0.0));
    assert!(!h.ctrl.is_transitioning());
    assert_eq!(h.ctrl.current_values(), h.ctrl.registry().get(4).values());
    assert!(h.ctrl.take_dirty());
}

#[test]
fn negative_duration_applies_immediately() {
    let mut h = harness();
    assert!(h.ctrl.switch_to_preset(2, -1.0));
    assert!(!h.ctrl.is_transitioning());
    assert_eq!(h.ctrl.current_values(), h.ctrl.registry().get(2).values());
}

#[test]
fn indices_wrap() {
    let mut h = harness();
    assert!(h.ctrl.switch_to_preset(-1, 0.0));
    assert_eq!(h.ctrl.selected(), 5);
    assert!(h.ctrl.step(1));
    assert_eq!(h.ctrl.selected(), 0);
    assert!(h.ctrl.switch_to_preset(8, 0.0));
    assert_eq!(h.ctrl.selected(), 2);
}

#[test]
fn selecting_current_preset_while_idle_is_noop() {
    let mut h = harness();
    assert!(!h.ctrl.switch_to_preset(0, 0.9));
    assert!(!h.ctrl.select(0));
    assert!(h.announcer.messages().is_empty());
    assert_eq!(stored(&h.storage), None);
}

#[test]
fn reselecting_during_transition_rearms() {
    let mut h = harness();
    h.ctrl.switch_to_preset(1, 0.9);
    h.clock.set(0.3);
    h.ctrl.tick(h.ctrl.now());
    assert!(h.ctrl.switch_to_preset(1, 0.9));
    assert!(h.ctrl.is_transitioning());

    // the new transition runs its full length from the re-arm point
    h.clock.set(0.9);
    h.ctrl.tick(h.ctrl.now());
    assert!(h.ctrl.is_transitioning());
    h.clock.set(1.2);
    h.ctrl.tick(h.ctrl.now());
    assert!(!h.ctrl.is_transitioning());
    assert_eq!(h.ctrl.current_values(), h.ctrl.registry().get(1).values());
}

#[test]
fn rapid_navigation_lands_on_latest_request() {
    let mut h = harness();
    h.ctrl.step(1);
    h.clock.set(0.1);
    h.ctrl.tick(h.ctrl.now());
    h.ctrl.step(1);
    h.clock.set(0.2);
    h.ctrl.tick(h.ctrl.now());
    h.ctrl.step(1);
    assert_eq!(h.ctrl.selected(), 3);

    h.clock.set(5.0);
    h.ctrl.tick(h.ctrl.now());
    assert_eq!(h.ctrl.current_values(), h.ctrl.registry().get(3).values());
    assert_eq!(stored(&h.storage).as_deref(), Some("3"));
    assert_eq!(h.announcer.messages().len(), 3);
}

#[test]
fn storage_failures_are_not_fatal() {
    let clock = ManualClock::new();
    let mut ctrl = PresetController::new(
        PresetRegistry::builtin().expect("builtin presets"),
        ControllerConfig::default(),
        Box::new(clock),
        Box::new(BrokenStorage),
        Box::new(Recorder::default()),
    );
    assert_eq!(ctrl.selected(), 0);
    assert!(ctrl.switch_to_preset(2, 0.0));
    assert_eq!(ctrl.selected(), 2);
}

#[test]
fn null_storage_always_starts_fresh() {
    let mut ctrl = PresetController::new(
        PresetRegistry::builtin().expect("builtin presets"),
        ControllerConfig::default(),
        Box::new(ManualClock::new()),
        Box::new(NullStorage),
        Box::new(Recorder::default()),
    );
    ctrl.switch_to_preset(3, 0.0);
    assert_eq!(ctrl.selected(), 3);
}

#[test]
fn overrides_are_validated() {
    let mut h = harness();
    assert_eq!(
        h.ctrl.set_parameter_override("nope", ParamValue::Scalar(1.0)),
        Err(ParamError::Unknown("nope".into()))
    );
    assert!(matches!(
        h.ctrl
            .set_parameter_override(NOISE_SCALE, ParamValue::Vector(Vec3::ONE)),
        Err(ParamError::KindMismatch { .. })
    ));

    h.ctrl.take_dirty();
    assert!(h
        .ctrl
        .set_parameter_override(NOISE_SCALE, ParamValue::Scalar(1.25))
        .is_ok());
    assert!(h.ctrl.take_dirty());
    // idle ticks leave overrides alone
    assert!(!h.ctrl.tick(10.0));
    assert_eq!(h.ctrl.current_values().scalar(NOISE_SCALE), Some(1.25));
}

#[test]
fn running_transition_overwrites_overrides() {
    let mut h = harness();
    h.ctrl.switch_to_preset(1, 0.9);
    h.ctrl
        .set_parameter_override(NOISE_SCALE, ParamValue::Scalar(2.5))
        .expect("valid override");
    h.clock.set(0.9);
    h.ctrl.tick(h.ctrl.now());
    assert_eq!(h.ctrl.current_values().scalar(NOISE_SCALE), Some(0.45));
}

#[test]
fn palette_and_config_patches() {
    let mut h = harness();
    let patch = PalettePatch {
        a: Some(Vec3::new(0.1, 0.2, 0.3)),
        ..PalettePatch::default()
    };
    h.ctrl.set_palette(patch).expect("palette patch");
    assert_eq!(h.ctrl.palette().a, Vec3::new(0.1, 0.2, 0.3));
    assert_eq!(h.ctrl.palette().b, h.ctrl.registry().get(0).values().vector("palette_b").unwrap_or_default());

    let patch = ConfigPatch {
        noise_scale: Some(1.5),
        turbulence: Some(0.9),
        ..ConfigPatch::default()
    };
    h.ctrl.set_config(patch).expect("config patch");
    let cfg = h.ctrl.config();
    assert_eq!(cfg.noise_scale, 1.5);
    assert_eq!(cfg.turbulence, 0.9);
    assert_eq!(
        h.ctrl.current_values().vector(PALETTE_A),
        Some(Vec3::new(0.1, 0.2, 0.3))
    );
}

#[test]
fn swipe_left_commits_next_preset() {
    let mut h = harness();
    h.ctrl.begin_drag(1, 500.0);
    h.ctrl.move_drag(1, 380.0);
    assert!(h.ctrl.end_drag(1));
    assert_eq!(h.ctrl.selected(), 1);
    assert!(h.ctrl.is_transitioning());
}

#[test]
fn swipe_right_commits_previous_preset() {
    let mut h = harness();
    h.ctrl.begin_drag(1, 0.0);
    h.ctrl.move_drag(1, 120.0);
    assert!(h.ctrl.end_drag(1));
    assert_eq!(h.ctrl.selected(), 5);
}

#[test]
fn short_or_cancelled_swipe_keeps_selection() {
    let mut h = harness();
    h.ctrl.begin_drag(1, 0.0);
    h.ctrl.move_drag(1, -20.0);
    assert!(!h.ctrl.end_drag(1));
    assert_eq!(h.ctrl.selected(), 0);

    h.ctrl.begin_drag(1, 0.0);
    h.ctrl.move_drag(1, -400.0);
    assert!(h.ctrl.cancel_drag(1));
    assert_eq!(h.ctrl.selected(), 0);
    assert!(h.announcer.messages().is_empty());
}

#[test]
fn static_config_switches_without_blending() {
    let config = ControllerConfig {
        transition_secs: 0.0,
        ..ControllerConfig::default()
    };
    let mut h = harness_with(MemoryStorage::new(), config);
    assert!(h.ctrl.step(1));
    assert!(!h.ctrl.is_transitioning());
    assert_eq!(h.ctrl.current_values(), h.ctrl.registry().get(1).values());
}

#[test]
fn second_pointer_release_does_not_commit() {
    let mut h = harness();
    assert!(h.ctrl.begin_drag(1, 500.0));
    assert!(!h.ctrl.begin_drag(2, 100.0));
    h.ctrl.move_drag(2, 0.0);
    assert!(!h.ctrl.end_drag(2));
    assert_eq!(h.ctrl.selected(), 0);
    assert!(h.ctrl.carousel().is_dragging_with(1));

    h.ctrl.move_drag(1, 380.0);
    assert!(h.ctrl.end_drag(1));
    assert_eq!(h.ctrl.selected(), 1);
}

#[test]
fn poll_reports_immediate_switches_once() {
    let config = ControllerConfig {
        transition_secs: 0.0,
        ..ControllerConfig::default()
    };
    let mut h = harness_with(MemoryStorage::new(), config);
    assert!(h.ctrl.poll(h.ctrl.now()));
    assert!(!h.ctrl.poll(h.ctrl.now()));

    // no transition runs, so tick alone would report nothing here
    assert!(h.ctrl.step(1));
    assert!(h.ctrl.poll(h.ctrl.now()));
    assert!(!h.ctrl.poll(h.ctrl.now()));

    h.ctrl
        .set_parameter_override(NOISE_SCALE, ParamValue::Scalar(1.1))
        .expect("override");
    assert!(h.ctrl.poll(h.ctrl.now()));
}

#[test]
fn poll_reports_every_frame_of_a_transition() {
    let mut h = harness();
    h.ctrl.take_dirty();
    assert!(h.ctrl.switch_to_preset(2, 0.9));
    for t in [0.1, 0.45, 0.9] {
        h.clock.set(t);
        assert!(h.ctrl.poll(h.ctrl.now()), "at {}", t);
    }
    h.clock.set(1.2);
    assert!(!h.ctrl.poll(h.ctrl.now()));
}

#[test]
fn four_preset_switch_eases_and_lands_exactly() {
    let mut h = harness_with_registry(four_presets(), MemoryStorage::new(), ControllerConfig::default());
    assert_eq!(h.ctrl.registry().count(), 4);
    assert!(h.ctrl.switch_to_preset(2, 0.9));

    // halfway in time is 0.875 of the way in value: 0.3 + 0.3 * 0.875
    h.clock.set(0.45);
    assert!(h.ctrl.tick(h.ctrl.now()));
    let noise = h.ctrl.current_values().scalar(NOISE_SCALE).expect("noise scale");
    assert!((noise - 0.5625).abs() < 1e-5, "noise {}", noise);

    h.clock.set(0.9);
    assert!(h.ctrl.tick(h.ctrl.now()));
    assert!(!h.ctrl.is_transitioning());
    assert_eq!(h.ctrl.current_values(), h.ctrl.registry().get(2).values());
    assert_eq!(stored(&h.storage).as_deref(), Some("2"));
}

#[test]
fn four_preset_registry_restores_or_falls_back() {
    let storage = MemoryStorage::new().with_entry(PRESET_INDEX_STORAGE_KEY, "3");
    let h = harness_with_registry(four_presets(), storage, ControllerConfig::default());
    assert_eq!(h.ctrl.selected(), 3);
    assert_eq!(h.ctrl.current_values(), h.ctrl.registry().get(3).values());

    let storage = MemoryStorage::new().with_entry(PRESET_INDEX_STORAGE_KEY, "9");
    let h = harness_with_registry(four_presets(), storage, ControllerConfig::default());
    assert_eq!(h.ctrl.selected(), 0);
}
