//! Circular preset carousel: selection index, drag offset and strip position.
//!
//! The strip is translated so the selected chip sits in the centre of a
//! viewport one item wide plus half a neighbour on each side. Dragging moves
//! the strip only; the selection changes when a drag is released past the
//! swipe threshold.

use super::constants::{DEFAULT_ITEM_GAP, DEFAULT_ITEM_WIDTH, SWIPE_THRESHOLD_FRACTION};
use super::presets::wrap_index;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselLayout {
    pub item_width: f32,
    pub gap: f32,
}

impl Default for CarouselLayout {
    fn default() -> Self {
        Self {
            item_width: DEFAULT_ITEM_WIDTH,
            gap: DEFAULT_ITEM_GAP,
        }
    }
}

impl CarouselLayout {
    /// Sanitises measured values, falling back to defaults for non-positive
    /// or non-finite widths.
    pub fn new(item_width: f32, gap: f32) -> Self {
        let item_width = if item_width.is_finite() && item_width > 0.0 {
            item_width
        } else {
            DEFAULT_ITEM_WIDTH
        };
        let gap = if gap.is_finite() && gap >= 0.0 {
            gap
        } else {
            DEFAULT_ITEM_GAP
        };
        Self { item_width, gap }
    }

    /// Strip translation that centres `index`: `-index * (w + gap) + w / 2`.
    #[inline]
    pub fn base_offset(&self, index: usize) -> f32 {
        -(index as f32) * (self.item_width + self.gap) + self.item_width / 2.0
    }

    #[inline]
    pub fn swipe_threshold(&self) -> f32 {
        self.item_width * SWIPE_THRESHOLD_FRACTION
    }
}

/// Browser `pointerId`; one pointer owns a drag from press to release.
pub type PointerId = i32;

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragState {
    Idle,
    Dragging { pointer: PointerId, start_x: f32 },
}

/// What a released drag asks the controller to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// Move the selection by this many steps (always ±1).
    Commit(i64),
    SnapBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChipRole {
    Active,
    Side,
    Hidden,
}

/// Render-ready strip translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackPosition {
    pub translate_x: f32,
    /// Whether the host should animate towards this position.
    pub animate: bool,
}

#[derive(Clone, Debug)]
pub struct Carousel {
    count: usize,
    selected: usize,
    layout: CarouselLayout,
    base_offset: f32,
    drag_offset: f32,
    drag: DragState,
    animate: bool,
}

impl Carousel {
    pub fn new(count: usize, selected: usize, layout: CarouselLayout) -> Self {
        let count = count.max(1);
        let selected = selected % count;
        Self {
            count,
            selected,
            layout,
            base_offset: layout.base_offset(selected),
            drag_offset: 0.0,
            drag: DragState::Idle,
            animate: false,
        }
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn layout(&self) -> CarouselLayout {
        self.layout
    }

    pub fn base_offset(&self) -> f32 {
        self.base_offset
    }

    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Index `delta` steps away from the selection, wrapping.
    #[inline]
    pub fn neighbor(&self, delta: i64) -> usize {
        wrap_index(self.selected as i64 + delta, self.count)
    }

    /// Selects `index` (wrapped). Returns whether the selection changed; the
    /// strip is re-centred either way.
    pub fn commit_index(&mut self, index: i64) -> bool {
        let next = wrap_index(index, self.count);
        let changed = next != self.selected;
        self.selected = next;
        self.base_offset = self.layout.base_offset(next);
        if !self.is_dragging() {
            self.animate = true;
        }
        changed
    }

    pub fn commit_relative(&mut self, delta: i64) -> bool {
        self.commit_index(self.selected as i64 + delta)
    }

    /// Starts a drag owned by `pointer`. A second pointer pressing while a
    /// drag is in progress is ignored; returns whether the drag started.
    pub fn begin_drag(&mut self, pointer: PointerId, pointer_x: f32) -> bool {
        if let DragState::Dragging { pointer: owner, .. } = self.drag {
            if owner != pointer {
                return false;
            }
        }
        self.drag = DragState::Dragging {
            pointer,
            start_x: pointer_x,
        };
        self.drag_offset = 0.0;
        self.animate = false;
        true
    }

    /// Whether `pointer` owns the drag in progress.
    #[inline]
    pub fn is_dragging_with(&self, pointer: PointerId) -> bool {
        matches!(self.drag, DragState::Dragging { pointer: owner, .. } if owner == pointer)
    }

    /// Ignored unless `pointer` owns the drag in progress.
    pub fn move_drag(&mut self, pointer: PointerId, pointer_x: f32) {
        if let DragState::Dragging { pointer: owner, start_x } = self.drag {
            if owner == pointer && pointer_x.is_finite() {
                self.drag_offset = pointer_x - start_x;
            }
        }
    }

    /// Ends the drag and decides between a one-step commit and a snap back.
    ///
    /// Dragging right past the threshold selects the previous item, left
    /// selects the next. The selection itself is left to the caller so the
    /// preset switch goes through the controller. `None` unless `pointer`
    /// owns the drag.
    pub fn end_drag(&mut self, pointer: PointerId) -> Option<DragOutcome> {
        if !self.is_dragging_with(pointer) {
            return None;
        }
        let dx = self.drag_offset;
        let threshold = self.layout.swipe_threshold();
        self.finish_drag();
        let outcome = if dx > threshold {
            DragOutcome::Commit(-1)
        } else if dx < -threshold {
            DragOutcome::Commit(1)
        } else {
            DragOutcome::SnapBack
        };
        log::debug!(
            "[carousel] release dx={:.1} threshold={:.1} -> {:?}",
            dx,
            threshold,
            outcome
        );
        Some(outcome)
    }

    /// Abnormal pointer termination: snap back, never commit. Returns whether
    /// `pointer` had a drag in progress.
    pub fn cancel_drag(&mut self, pointer: PointerId) -> bool {
        if !self.is_dragging_with(pointer) {
            return false;
        }
        self.finish_drag();
        true
    }

    fn finish_drag(&mut self) {
        self.drag = DragState::Idle;
        self.drag_offset = 0.0;
        self.base_offset = self.layout.base_offset(self.selected);
        self.animate = true;
    }

    /// Recomputes the strip position for new chip dimensions (no animation).
    pub fn set_layout(&mut self, layout: CarouselLayout) {
        self.layout = layout;
        self.base_offset = layout.base_offset(self.selected);
        self.animate = false;
    }

    pub fn track_position(&self) -> TrackPosition {
        TrackPosition {
            translate_x: self.base_offset + self.drag_offset,
            animate: self.animate && !self.is_dragging(),
        }
    }

    pub fn chip_role(&self, index: usize) -> ChipRole {
        if index == self.selected {
            ChipRole::Active
        } else if self.count > 1 && (index == self.neighbor(-1) || index == self.neighbor(1)) {
            ChipRole::Side
        } else {
            ChipRole::Hidden
        }
    }
}

/// Converts an untrusted numeric index (e.g. from JavaScript) into a valid one.
///
/// Non-finite values are rejected; anything else is truncated and wrapped.
pub fn resolve_index(raw: f64, count: usize) -> Option<usize> {
    if !raw.is_finite() || count == 0 {
        return None;
    }
    Some(wrap_index(raw.trunc() as i64, count))
}
