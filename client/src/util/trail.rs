//! Pointer trail animator: a primary cursor dot plus a chain of trailing
//! dots that chase it with decaying lag, size, and opacity.
//!
//! DESIGN
//! ======
//! `PointerTrail` is a small state machine advanced by `tick()`. The browser
//! binding (`components::pointer_trail`) calls `tick()` once per animation
//! frame and writes the resulting styles to the DOM; tests feed synthetic
//! ticks instead. Each slot moves a fixed fraction of the way toward its
//! target per tick, so it approaches the pointer exponentially and never
//! lands on it in a finite number of ticks.

#[cfg(test)]
#[path = "trail_test.rs"]
mod trail_test;

pub const TRAIL_LENGTH: usize = 12;
pub const TRAIL_SMOOTHING: f64 = 0.35;

/// Starting coordinate for the pointer and every slot.
pub const OFFSCREEN: Point = Point { x: -100.0, y: -100.0 };

/// Half of the 12px primary dot.
pub const CURSOR_HALF_SIZE: f64 = 6.0;
/// Half of the 8px trail dot.
pub const TRAIL_HALF_SIZE: f64 = 4.0;
pub const TRAIL_MAX_OPACITY: f64 = 0.6;
pub const HOVER_SCALE: f64 = 2.0;

/// Class names that mark an element as interactive for hover scaling.
pub const HOVER_CLASSES: [&str; 2] = ["cursor-pointer", "cursor-hover"];
/// Tag names (upper-case, as the DOM reports them) treated as interactive.
pub const INTERACTIVE_TAGS: [&str; 4] = ["A", "BUTTON", "INPUT", "TEXTAREA"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move `t` of the way toward `target`, independently per axis.
    #[must_use]
    pub fn lerp(self, target: Point, t: f64) -> Point {
        Point { x: self.x + (target.x - self.x) * t, y: self.y + (target.y - self.y) * t }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailConfig {
    length: usize,
    smoothing: f64,
}

impl TrailConfig {
    /// Returns `None` unless `length > 0` and `smoothing` lies strictly in `(0, 1)`.
    #[must_use]
    pub fn new(length: usize, smoothing: f64) -> Option<Self> {
        (length > 0 && smoothing > 0.0 && smoothing < 1.0).then_some(Self { length, smoothing })
    }
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self { length: TRAIL_LENGTH, smoothing: TRAIL_SMOOTHING }
    }
}

/// Position and appearance of one indicator for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorStyle {
    /// Top-left corner after centring on the tracked point.
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl IndicatorStyle {
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translate3d({}px, {}px, 0) scale({})", self.x, self.y, self.scale)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerTrail {
    config: TrailConfig,
    pointer: Point,
    slots: Vec<Point>,
    visible: bool,
    hovering: bool,
}

impl Default for PointerTrail {
    fn default() -> Self {
        Self::new(TrailConfig::default())
    }
}

impl PointerTrail {
    #[must_use]
    pub fn new(config: TrailConfig) -> Self {
        Self { config, pointer: OFFSCREEN, slots: vec![OFFSCREEN; config.length], visible: false, hovering: false }
    }

    /// Record the raw pointer position. The first move makes the trail visible.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = Point::new(x, y);
        self.visible = true;
    }

    pub fn pointer_left(&mut self) {
        self.visible = false;
    }

    pub fn pointer_entered(&mut self) {
        self.visible = true;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Advance every slot one step; slot 0 chases the pointer and slot `i`
    /// chases slot `i - 1`'s freshly updated position.
    pub fn tick(&mut self) {
        let t = self.config.smoothing;
        let mut target = self.pointer;
        for slot in &mut self.slots {
            *slot = slot.lerp(target, t);
            target = *slot;
        }
    }

    #[must_use]
    pub fn cursor_style(&self) -> IndicatorStyle {
        IndicatorStyle {
            x: self.pointer.x - CURSOR_HALF_SIZE,
            y: self.pointer.y - CURSOR_HALF_SIZE,
            scale: if self.hovering { HOVER_SCALE } else { 1.0 },
            opacity: if self.visible { 1.0 } else { 0.0 },
        }
    }

    /// Styles for every slot, head first.
    #[must_use]
    pub fn slot_styles(&self) -> Vec<IndicatorStyle> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let falloff = self.falloff(i);
                IndicatorStyle {
                    x: slot.x - TRAIL_HALF_SIZE,
                    y: slot.y - TRAIL_HALF_SIZE,
                    scale: falloff,
                    opacity: if self.visible { TRAIL_MAX_OPACITY * falloff } else { 0.0 },
                }
            })
            .collect()
    }

    /// `1 - i / len`: 1 at the head, shrinking linearly toward the tail.
    #[allow(clippy::cast_precision_loss)]
    fn falloff(&self, index: usize) -> f64 {
        1.0 - index as f64 / self.config.length as f64
    }
}

/// Latest `requestAnimationFrame` id of a paint loop.
///
/// Once released, no further frame may stay scheduled: `scheduled` reports
/// `false` so the caller cancels the id it was just handed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameSlot {
    pending: Option<i32>,
    released: bool,
}

impl FrameSlot {
    /// Record a newly requested frame. Returns `false` after `release`.
    pub fn scheduled(&mut self, id: i32) -> bool {
        if self.released {
            return false;
        }
        self.pending = Some(id);
        true
    }

    /// The pending frame fired; nothing is scheduled until the next request.
    pub fn fired(&mut self) {
        self.pending = None;
    }

    /// Stop the loop and return the frame that still needs cancelling.
    pub fn release(&mut self) -> Option<i32> {
        self.released = true;
        self.pending.take()
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }
}

/// Hover test for a DOM element described by its tag, classes, and whether
/// it sits inside an `a`, `button`, or `input`.
#[must_use]
pub fn is_interactive(tag_name: &str, class_names: &str, inside_interactive: bool) -> bool {
    inside_interactive
        || INTERACTIVE_TAGS
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(tag_name))
        || class_names
            .split_whitespace()
            .any(|class| HOVER_CLASSES.contains(&class))
}
