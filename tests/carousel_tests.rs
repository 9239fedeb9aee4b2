// Host-side tests for the carousel state machine.

use frost_canvas::core::{
    resolve_index, Carousel, CarouselLayout, ChipRole, DragOutcome, PointerId, DEFAULT_ITEM_GAP,
    DEFAULT_ITEM_WIDTH,
};

const TOUCH: PointerId = 1;
const SECOND_TOUCH: PointerId = 2;

fn carousel(selected: usize) -> Carousel {
    Carousel::new(6, selected, CarouselLayout::default())
}

#[test]
fn base_offset_centres_selected_chip() {
    let layout = CarouselLayout::default();
    assert_eq!(layout.base_offset(0), 130.0);
    assert_eq!(layout.base_offset(2), -414.0);

    let c = carousel(2);
    assert_eq!(c.base_offset(), -414.0);
    assert_eq!(c.track_position().translate_x, -414.0);
    // first paint jumps straight into place
    assert!(!c.track_position().animate);
}

#[test]
fn invalid_layout_falls_back_to_defaults() {
    let layout = CarouselLayout::new(0.0, f32::NAN);
    assert_eq!(layout.item_width, DEFAULT_ITEM_WIDTH);
    assert_eq!(layout.gap, DEFAULT_ITEM_GAP);
    let layout = CarouselLayout::new(-5.0, -1.0);
    assert_eq!(layout, CarouselLayout::default());
}

#[test]
fn commit_wraps_in_both_directions() {
    let mut c = carousel(0);
    assert!(c.commit_index(-1));
    assert_eq!(c.selected(), 5);
    assert!(c.commit_relative(1));
    assert_eq!(c.selected(), 0);
    assert!(c.commit_index(13));
    assert_eq!(c.selected(), 1);
    assert!(c.track_position().animate);
}

#[test]
fn committing_current_index_changes_nothing() {
    let mut c = carousel(3);
    let before = c.base_offset();
    assert!(!c.commit_index(3));
    assert_eq!(c.selected(), 3);
    assert_eq!(c.base_offset(), before);
}

#[test]
fn neighbor_wraps() {
    let c = carousel(0);
    assert_eq!(c.neighbor(-1), 5);
    assert_eq!(c.neighbor(1), 1);
    assert_eq!(c.neighbor(-7), 5);
}

#[test]
fn drag_moves_track_without_animation() {
    let mut c = carousel(1);
    let base = c.base_offset();
    c.begin_drag(TOUCH, 300.0);
    c.move_drag(TOUCH, 280.0);
    assert!(c.is_dragging());
    let pos = c.track_position();
    assert_eq!(pos.translate_x, base - 20.0);
    assert!(!pos.animate);
}

#[test]
fn drag_right_past_threshold_selects_previous() {
    let mut c = carousel(1);
    let threshold = c.layout().swipe_threshold();
    c.begin_drag(TOUCH, 100.0);
    c.move_drag(TOUCH, 100.0 + threshold + 1.0);
    assert_eq!(c.end_drag(TOUCH), Some(DragOutcome::Commit(-1)));
    // the commit itself is left to the caller
    assert_eq!(c.selected(), 1);
    assert_eq!(c.drag_offset(), 0.0);
    assert!(!c.is_dragging());
}

#[test]
fn drag_left_past_threshold_selects_next() {
    let mut c = carousel(5);
    c.begin_drag(TOUCH, 400.0);
    c.move_drag(TOUCH, 300.0);
    assert_eq!(c.end_drag(TOUCH), Some(DragOutcome::Commit(1)));
}

#[test]
fn short_drag_snaps_back() {
    let mut c = carousel(2);
    let threshold = c.layout().swipe_threshold();
    c.begin_drag(TOUCH, 100.0);
    c.move_drag(TOUCH, 100.0 + threshold - 1.0);
    assert_eq!(c.end_drag(TOUCH), Some(DragOutcome::SnapBack));
    let pos = c.track_position();
    assert_eq!(pos.translate_x, c.layout().base_offset(2));
    assert!(pos.animate);
}

#[test]
fn threshold_is_fraction_of_item_width() {
    let layout = CarouselLayout::new(100.0, 0.0);
    assert!((layout.swipe_threshold() - 22.0).abs() < 1e-4);
}

#[test]
fn cancel_never_commits() {
    let mut c = carousel(2);
    c.begin_drag(TOUCH, 0.0);
    c.move_drag(TOUCH, -500.0);
    assert!(c.cancel_drag(TOUCH));
    assert_eq!(c.selected(), 2);
    assert_eq!(c.track_position().translate_x, c.layout().base_offset(2));
    assert_eq!(c.end_drag(TOUCH), None);
    assert!(!c.cancel_drag(TOUCH));
}

#[test]
fn move_without_drag_is_ignored() {
    let mut c = carousel(0);
    c.move_drag(TOUCH, 200.0);
    assert_eq!(c.drag_offset(), 0.0);
    assert_eq!(c.end_drag(TOUCH), None);
}

#[test]
fn layout_change_recentres_without_animation() {
    let mut c = carousel(2);
    c.commit_index(2);
    c.set_layout(CarouselLayout::new(200.0, 10.0));
    let pos = c.track_position();
    assert_eq!(pos.translate_x, -320.0);
    assert!(!pos.animate);
}

#[test]
fn chip_roles_follow_selection() {
    let c = carousel(0);
    assert_eq!(c.chip_role(0), ChipRole::Active);
    assert_eq!(c.chip_role(1), ChipRole::Side);
    assert_eq!(c.chip_role(5), ChipRole::Side);
    assert_eq!(c.chip_role(3), ChipRole::Hidden);

    let single = Carousel::new(1, 0, CarouselLayout::default());
    assert_eq!(single.chip_role(0), ChipRole::Active);

    let pair = Carousel::new(2, 0, CarouselLayout::default());
    assert_eq!(pair.chip_role(1), ChipRole::Side);
}

#[test]
fn script_indices_are_validated() {
    assert_eq!(resolve_index(f64::NAN, 6), None);
    assert_eq!(resolve_index(f64::INFINITY, 6), None);
    assert_eq!(resolve_index(2.0, 0), None);
    assert_eq!(resolve_index(7.9, 6), Some(1));
    assert_eq!(resolve_index(-1.0, 6), Some(5));
}

#[test]
fn second_pointer_cannot_hijack_a_drag() {
    let mut c = carousel(2);
    assert!(c.begin_drag(TOUCH, 100.0));
    c.move_drag(TOUCH, 90.0);

    // a second finger lands mid-gesture
    assert!(!c.begin_drag(SECOND_TOUCH, 400.0));
    assert!(c.is_dragging_with(TOUCH));
    assert!(!c.is_dragging_with(SECOND_TOUCH));
    assert_eq!(c.drag_offset(), -10.0);

    c.move_drag(SECOND_TOUCH, 900.0);
    assert_eq!(c.drag_offset(), -10.0);
    assert_eq!(c.end_drag(SECOND_TOUCH), None);
    assert!(!c.cancel_drag(SECOND_TOUCH));
    assert!(c.is_dragging());

    c.move_drag(TOUCH, 0.0);
    assert_eq!(c.end_drag(TOUCH), Some(DragOutcome::Commit(1)));
    assert!(!c.is_dragging());
}

#[test]
fn any_pointer_can_start_after_release() {
    let mut c = carousel(0);
    assert!(c.begin_drag(TOUCH, 0.0));
    assert_eq!(c.end_drag(TOUCH), Some(DragOutcome::SnapBack));
    assert!(c.begin_drag(SECOND_TOUCH, 50.0));
    assert!(c.is_dragging_with(SECOND_TOUCH));
}
