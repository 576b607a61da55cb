use super::*;

fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

fn ticks(trail: &mut PointerTrail, n: usize) {
    for _ in 0..n {
        trail.tick();
    }
}

// =============================================================
// Config
// =============================================================

#[test]
fn config_rejects_out_of_range_smoothing() {
    assert!(TrailConfig::new(12, 0.0).is_none());
    assert!(TrailConfig::new(12, 1.0).is_none());
    assert!(TrailConfig::new(12, -0.2).is_none());
    assert!(TrailConfig::new(0, 0.35).is_none());
    assert!(TrailConfig::new(12, 0.35).is_some());
}

#[test]
fn default_config_matches_constants() {
    let cfg = TrailConfig::default();
    assert_eq!(cfg.length, TRAIL_LENGTH);
    assert!((cfg.smoothing - TRAIL_SMOOTHING).abs() < f64::EPSILON);
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn starts_offscreen_and_hidden() {
    let trail = PointerTrail::default();
    assert_eq!(trail.slots.len(), TRAIL_LENGTH);
    assert!(trail.slots.iter().all(|p| *p == OFFSCREEN));
    assert_eq!(trail.pointer, OFFSCREEN);
    assert!(!trail.visible);
    assert_eq!(trail.cursor_style().opacity, 0.0);
    assert!(trail.slot_styles().iter().all(|s| s.opacity == 0.0));
}

#[test]
fn first_move_makes_visible() {
    let mut trail = PointerTrail::default();
    trail.pointer_moved(10.0, 20.0);
    assert!(trail.visible);
    assert_eq!(trail.cursor_style().opacity, 1.0);
}

// =============================================================
// Tick
// =============================================================

#[test]
fn single_tick_applies_lerp_chain() {
    let cfg = TrailConfig::new(3, 0.5).unwrap();
    let mut trail = PointerTrail::new(cfg);
    trail.pointer_moved(100.0, -100.0);
    trail.tick();
    // Each slot moves half-way toward the slot ahead of it on the x axis.
    let xs: Vec<f64> = trail.slots.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, -50.0, -75.0]);
    assert!(trail.slots.iter().all(|p| p.y == -100.0));
}

#[test]
fn axes_are_smoothed_independently() {
    let cfg = TrailConfig::new(1, 0.25).unwrap();
    let mut trail = PointerTrail::new(cfg);
    trail.pointer_moved(300.0, -20.0);
    trail.tick();
    let p = trail.slots[0];
    assert!((p.x - 0.0).abs() < 1e-9);
    assert!((p.y - (-80.0)).abs() < 1e-9);
}

#[test]
fn slots_converge_but_never_reach_pointer() {
    let mut trail = PointerTrail::default();
    trail.pointer_moved(500.0, 300.0);
    let target = trail.pointer;

    let mut prev_head = distance(trail.slots[0], target);
    let mut prev_tail = distance(trail.slots[TRAIL_LENGTH - 1], target);
    for _ in 0..30 {
        trail.tick();
        let head = distance(trail.slots[0], target);
        let tail = distance(trail.slots[TRAIL_LENGTH - 1], target);
        assert!(head < prev_head, "head must keep closing in");
        assert!(tail < prev_tail, "tail must keep closing in");
        assert!(head > 0.0, "head never lands exactly");
        assert!(tail > 0.0, "tail never lands exactly");
        prev_head = head;
        prev_tail = tail;
    }
}

#[test]
fn head_leads_tail_while_chasing() {
    let mut trail = PointerTrail::default();
    trail.pointer_moved(400.0, 400.0);
    ticks(&mut trail, 5);
    let target = trail.pointer;
    let distances: Vec<f64> = trail.slots.iter().map(|p| distance(*p, target)).collect();
    for pair in distances.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn stationary_trail_stays_put() {
    let mut trail = PointerTrail::default();
    ticks(&mut trail, 10);
    assert!(trail.slots.iter().all(|p| *p == OFFSCREEN));
}

// =============================================================
// Styles
// =============================================================

#[test]
fn slot_opacity_and_scale_strictly_decrease() {
    let mut trail = PointerTrail::default();
    trail.pointer_moved(0.0, 0.0);
    let styles = trail.slot_styles();
    assert!((styles[0].opacity - TRAIL_MAX_OPACITY).abs() < 1e-12);
    assert!((styles[0].scale - 1.0).abs() < 1e-12);
    for pair in styles.windows(2) {
        assert!(pair[1].opacity < pair[0].opacity);
        assert!(pair[1].scale < pair[0].scale);
    }
    let last = styles.last().unwrap();
    assert!(last.opacity > 0.0);
}

#[test]
fn styles_centre_indicators_on_points() {
    let mut trail = PointerTrail::default();
    trail.pointer_moved(50.0, 60.0);
    let cursor = trail.cursor_style();
    assert_eq!((cursor.x, cursor.y), (44.0, 54.0));
    let head = trail.slot_styles()[0];
    assert_eq!((head.x, head.y), (OFFSCREEN.x - 4.0, OFFSCREEN.y - 4.0));
}

#[test]
fn hover_doubles_primary_scale_only() {
    let mut trail = PointerTrail::default();
    trail.pointer_moved(1.0, 1.0);
    let before = trail.slot_styles();
    trail.set_hovering(true);
    assert_eq!(trail.cursor_style().scale, HOVER_SCALE);
    assert_eq!(trail.slot_styles(), before);
    trail.set_hovering(false);
    assert_eq!(trail.cursor_style().scale, 1.0);
}

#[test]
fn leave_hides_and_enter_restores() {
    let mut trail = PointerTrail::default();
    trail.pointer_moved(1.0, 1.0);
    trail.pointer_left();
    assert_eq!(trail.cursor_style().opacity, 0.0);
    assert!(trail.slot_styles().iter().all(|s| s.opacity == 0.0));
    trail.pointer_entered();
    assert_eq!(trail.cursor_style().opacity, 1.0);
}

#[test]
fn hidden_trail_still_advances() {
    let mut trail = PointerTrail::default();
    trail.pointer_moved(100.0, 100.0);
    trail.pointer_left();
    trail.tick();
    assert_ne!(trail.slots[0], OFFSCREEN);
}

#[test]
fn transform_formats_css() {
    let style = IndicatorStyle { x: 1.5, y: -2.0, scale: 0.5, opacity: 1.0 };
    assert_eq!(style.transform(), "translate3d(1.5px, -2px, 0) scale(0.5)");
}

// =============================================================
// Interactive detection
// =============================================================

#[test]
fn interactive_by_tag_class_or_ancestor() {
    assert!(is_interactive("BUTTON", "", false));
    assert!(is_interactive("a", "", false));
    assert!(is_interactive("DIV", "card cursor-hover", false));
    assert!(is_interactive("SPAN", "", true));
    assert!(!is_interactive("DIV", "card cursor-hovering", false));
    assert!(!is_interactive("P", "", false));
}

// =============================================================
// FrameSlot
// =============================================================

#[test]
fn release_returns_the_latest_pending_frame() {
    let mut slot = FrameSlot::default();
    assert!(slot.scheduled(1));
    slot.fired();
    assert!(slot.scheduled(2));
    assert_eq!(slot.release(), Some(2));
    assert!(slot.is_released());
    assert_eq!(slot.release(), None);
}

#[test]
fn release_after_fire_has_nothing_to_cancel() {
    let mut slot = FrameSlot::default();
    assert!(slot.scheduled(7));
    slot.fired();
    assert_eq!(slot.release(), None);
}

#[test]
fn frames_requested_after_release_are_refused() {
    let mut slot = FrameSlot::default();
    assert_eq!(slot.release(), None);
    assert!(!slot.scheduled(3));
    assert_eq!(slot.release(), None);
}
