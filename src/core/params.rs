//! Animatable shader parameters.
//!
//! Every parameter is either a scalar or an RGB-style 3-vector. Both kinds
//! share one `lerp`, so the transition engine never has to inspect what it is
//! blending.

use super::constants::{PALETTE_DEFAULTS, SCALAR_DEFAULTS};
use super::error::ParamError;
use fnv::FnvHashMap;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    Scalar,
    Vector,
}

impl ParamKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ParamKind::Scalar => "scalar",
            ParamKind::Vector => "vector",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamValue {
    Scalar(f32),
    Vector(Vec3),
}

impl ParamValue {
    #[inline]
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Scalar(_) => ParamKind::Scalar,
            ParamValue::Vector(_) => ParamKind::Vector,
        }
    }

    #[inline]
    pub fn as_scalar(&self) -> Option<f32> {
        match *self {
            ParamValue::Scalar(s) => Some(s),
            ParamValue::Vector(_) => None,
        }
    }

    /// Vector view of the value; scalars are splatted across all components.
    #[inline]
    pub fn as_vec3(&self) -> Vec3 {
        match *self {
            ParamValue::Scalar(s) => Vec3::splat(s),
            ParamValue::Vector(v) => v,
        }
    }

    /// `self + (target - self) * t`, component-wise for vectors.
    ///
    /// A scalar paired with a vector is promoted to a splatted vector, so the
    /// result is a vector whenever either side is one.
    #[inline]
    pub fn lerp(self, target: ParamValue, t: f32) -> ParamValue {
        match (self, target) {
            (ParamValue::Scalar(a), ParamValue::Scalar(b)) => ParamValue::Scalar(a + (b - a) * t),
            (a, b) => ParamValue::Vector(a.as_vec3().lerp(b.as_vec3(), t)),
        }
    }

    pub fn approx_eq(&self, other: &ParamValue, eps: f32) -> bool {
        match (self, other) {
            (ParamValue::Scalar(a), ParamValue::Scalar(b)) => (a - b).abs() <= eps,
            (ParamValue::Vector(a), ParamValue::Vector(b)) => a.abs_diff_eq(*b, eps),
            _ => false,
        }
    }
}

impl From<f32> for ParamValue {
    fn from(v: f32) -> Self {
        ParamValue::Scalar(v)
    }
}

impl From<Vec3> for ParamValue {
    fn from(v: Vec3) -> Self {
        ParamValue::Vector(v)
    }
}

impl From<[f32; 3]> for ParamValue {
    fn from(v: [f32; 3]) -> Self {
        ParamValue::Vector(Vec3::from_array(v))
    }
}

/// Name → value map that keeps registration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamSet {
    entries: SmallVec<[(String, ParamValue); 16]>,
    index: FnvHashMap<String, usize>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full FrostCanvas parameter set at its default values.
    pub fn defaults() -> Self {
        let mut set = Self::new();
        for (name, v) in SCALAR_DEFAULTS {
            set.insert(name, ParamValue::Scalar(v));
        }
        for (name, v) in PALETTE_DEFAULTS {
            set.insert(name, ParamValue::Vector(v));
        }
        set
    }

    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value.into());
        self
    }

    /// Inserts or replaces a value, returning the previous one.
    pub fn insert(&mut self, name: &str, value: ParamValue) -> Option<ParamValue> {
        if let Some(&i) = self.index.get(name) {
            return Some(std::mem::replace(&mut self.entries[i].1, value));
        }
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push((name.to_string(), value));
        None
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<ParamValue> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    pub fn scalar(&self, name: &str) -> Option<f32> {
        self.get(name).and_then(|v| v.as_scalar())
    }

    pub fn vector(&self, name: &str) -> Option<Vec3> {
        match self.get(name) {
            Some(ParamValue::Vector(v)) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ParamValue)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// True when both sets hold the same names and every value is within `eps`.
    pub fn approx_eq(&self, other: &ParamSet, eps: f32) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, v)| other.get(name).is_some_and(|o| v.approx_eq(&o, eps)))
    }
}

impl<S: AsRef<str>> FromIterator<(S, ParamValue)> for ParamSet {
    fn from_iter<I: IntoIterator<Item = (S, ParamValue)>>(iter: I) -> Self {
        let mut set = ParamSet::new();
        for (name, value) in iter {
            set.insert(name.as_ref(), value);
        }
        set
    }
}

/// Live parameter values read by the renderer each frame.
#[derive(Clone, Debug, Default)]
pub struct ParamStore {
    values: ParamSet,
}

impl ParamStore {
    pub fn new(initial: ParamSet) -> Self {
        Self { values: initial }
    }

    #[inline]
    pub fn values(&self) -> &ParamSet {
        &self.values
    }

    /// Copy of the current values, detached from later mutation.
    pub fn snapshot(&self) -> ParamSet {
        self.values.clone()
    }

    /// Writes every value of `update` into the store.
    pub fn apply(&mut self, update: &ParamSet) {
        for (name, value) in update.iter() {
            self.values.insert(name, value);
        }
    }

    /// Overwrites one existing parameter; the kind must match.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<(), ParamError> {
        let current = self
            .values
            .get(name)
            .ok_or_else(|| ParamError::Unknown(name.to_string()))?;
        if current.kind() != value.kind() {
            return Err(ParamError::KindMismatch {
                param: name.to_string(),
                expected: current.kind().as_str(),
                found: value.kind().as_str(),
            });
        }
        self.values.insert(name, value);
        Ok(())
    }
}
