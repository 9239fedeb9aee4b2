//! Time-based blending from the live parameter values to a preset.
//!
//! A transition is a pure function of elapsed time: the source values are
//! copied when it is armed, so re-arming mid-flight just takes a fresh copy
//! and the blend continues from wherever the store currently is.

use super::constants::MIN_TRANSITION_SECS;
use super::params::ParamSet;
use super::presets::Preset;

/// `1 - (1 - t)^3`: decelerates into the target.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Durations below the minimum (or non-finite) would make `t` undefined.
#[inline]
pub fn sanitize_duration(duration_secs: f64) -> f64 {
    if duration_secs.is_finite() {
        duration_secs.max(MIN_TRANSITION_SECS)
    } else {
        MIN_TRANSITION_SECS
    }
}

#[derive(Clone, Debug)]
pub struct Transition {
    source: ParamSet,
    target: ParamSet,
    target_name: String,
    duration: f64,
    started_at: f64,
}

impl Transition {
    /// Linear progress in \[0, 1\] at time `now`.
    #[inline]
    pub fn progress(&self, now: f64) -> f64 {
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn started_at(&self) -> f64 {
        self.started_at
    }

    pub fn source(&self) -> &ParamSet {
        &self.source
    }

    pub fn target(&self) -> &ParamSet {
        &self.target
    }
}

#[derive(Clone, Debug, Default)]
pub struct TransitionEngine {
    active: Option<Transition>,
}

impl TransitionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&Transition> {
        self.active.as_ref()
    }

    /// Starts blending from `current` towards `target`, replacing any
    /// transition already in flight.
    ///
    /// Only the target's parameters are captured. A parameter missing from
    /// `current` starts at its target value.
    pub fn arm(&mut self, target: &Preset, duration_secs: f64, current: &ParamSet, now: f64) {
        let source: ParamSet = target
            .values()
            .iter()
            .map(|(name, target_v)| (name, current.get(name).unwrap_or(target_v)))
            .collect();
        if let Some(prev) = &self.active {
            log::debug!(
                "[preset] retarget '{}' -> '{}' at {:.0}%",
                prev.target_name,
                target.name(),
                prev.progress(now) * 100.0
            );
        }
        self.active = Some(Transition {
            source,
            target: target.values().clone(),
            target_name: target.name().to_string(),
            duration: sanitize_duration(duration_secs),
            started_at: now,
        });
    }

    /// Interpolated values at `now`, or `None` when idle.
    ///
    /// The sample that reaches `t = 1` returns the exact target values and
    /// ends the transition.
    pub fn sample(&mut self, now: f64) -> Option<ParamSet> {
        let tr = self.active.as_ref()?;
        let t = tr.progress(now);
        if t >= 1.0 {
            let done = self.active.take()?;
            log::debug!("[preset] transition to '{}' complete", done.target_name);
            return Some(done.target);
        }
        let eased = ease_out_cubic(t) as f32;
        Some(
            tr.source
                .iter()
                .filter_map(|(name, from)| {
                    tr.target.get(name).map(|to| (name, from.lerp(to, eased)))
                })
                .collect(),
        )
    }

    /// Preset values verbatim; cancels any transition.
    pub fn apply_immediate(&mut self, preset: &Preset) -> ParamSet {
        self.active = None;
        preset.values().clone()
    }
}
