// Host-side tests for canvas data-attribute options.

use frost_canvas::core::CanvasOptions;
use std::collections::HashMap;

fn parse(attrs: &[(&str, &str)]) -> CanvasOptions {
    let map: HashMap<String, String> = attrs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    CanvasOptions::from_attributes(|name| map.get(name).cloned())
}

#[test]
fn no_attributes_gives_defaults() {
    let opts = parse(&[]);
    assert_eq!(opts, CanvasOptions::default());
    assert!(!opts.show_gui);
    assert!(opts.show_presets);
    assert!(opts.auto_resize);
    assert!(!opts.static_mode);
    assert_eq!(opts.initial_preset, 0);
}

#[test]
fn bare_attribute_means_true() {
    let opts = parse(&[("data-gui", ""), ("data-static", "")]);
    assert!(opts.show_gui);
    assert!(opts.static_mode);
}

#[test]
fn explicit_flags_are_parsed() {
    let opts = parse(&[
        ("data-presets", "false"),
        ("data-auto-resize", "OFF"),
        ("data-gui", " yes "),
        ("data-static", "1"),
    ]);
    assert!(!opts.show_presets);
    assert!(!opts.auto_resize);
    assert!(opts.show_gui);
    assert!(opts.static_mode);
}

#[test]
fn unrecognised_values_keep_defaults() {
    let opts = parse(&[("data-presets", "maybe"), ("data-preset", "two")]);
    assert!(opts.show_presets);
    assert_eq!(opts.initial_preset, 0);
}

#[test]
fn initial_preset_is_read() {
    assert_eq!(parse(&[("data-preset", "3")]).initial_preset, 3);
    assert_eq!(parse(&[("data-preset", "-2")]).initial_preset, 0);
}
