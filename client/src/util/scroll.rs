//! Scroll-to-transform math for the horizontal showroom.
//!
//! The showroom section is a tall sticky block; vertical progress through it
//! maps onto a horizontal translation of the card track plus a few
//! decorative transforms. Everything here is pure so it can run natively.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Trailing breathing room added to the track's scroll range.
pub const TRACK_END_PADDING_PX: f64 = 48.0;

pub const HEADER_FADE: (f64, f64) = (0.0, 0.15);
pub const HEADER_MIN_SCALE: f64 = 0.9;
pub const HEADER_LIFT_PX: f64 = -20.0;
pub const BACKGROUND_DRIFT_PX: f64 = 100.0;
pub const HINT_FADE: (f64, f64) = (0.0, 0.05);

/// Fraction of the section scrolled through, clamped to `[0, 1]`.
///
/// `section_top` is the section's top edge relative to the viewport (as
/// `getBoundingClientRect().top` reports it). Progress is 0 when the top
/// edge meets the viewport top and 1 when the bottom edge meets the
/// viewport bottom.
#[must_use]
pub fn scroll_progress(section_top: f64, section_height: f64, viewport_height: f64) -> f64 {
    let scrollable = section_height - viewport_height;
    if scrollable <= 0.0 {
        return if section_top < 0.0 { 1.0 } else { 0.0 };
    }
    (-section_top / scrollable).clamp(0.0, 1.0)
}

/// Horizontal distance the track must travel to reveal its last card.
#[must_use]
pub fn scroll_range(track_width: f64, viewport_width: f64) -> f64 {
    (track_width - viewport_width + TRACK_END_PADDING_PX).max(0.0)
}

/// Clamped linear map of `value` from `input` onto `output`.
#[must_use]
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in0, in1) = input;
    let (out0, out1) = output;
    if (in1 - in0).abs() < f64::EPSILON {
        return if value < in0 { out0 } else { out1 };
    }
    let t = ((value - in0) / (in1 - in0)).clamp(0.0, 1.0);
    out0 + (out1 - out0) * t
}

/// All showroom transforms for one scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShowroomFrame {
    pub track_x: f64,
    pub header_opacity: f64,
    pub header_scale: f64,
    pub header_y: f64,
    pub background_y: f64,
    pub hint_opacity: f64,
}

impl ShowroomFrame {
    #[must_use]
    pub fn at(progress: f64, range: f64) -> Self {
        Self {
            track_x: interpolate(progress, (0.0, 1.0), (0.0, -range)),
            header_opacity: interpolate(progress, HEADER_FADE, (1.0, 0.0)),
            header_scale: interpolate(progress, HEADER_FADE, (1.0, HEADER_MIN_SCALE)),
            header_y: interpolate(progress, HEADER_FADE, (0.0, HEADER_LIFT_PX)),
            background_y: interpolate(progress, (0.0, 1.0), (0.0, BACKGROUND_DRIFT_PX)),
            hint_opacity: interpolate(progress, HINT_FADE, (1.0, 0.0)),
        }
    }

    #[must_use]
    pub fn track_style(&self) -> String {
        format!("transform: translate3d({}px, 0, 0)", self.track_x)
    }

    #[must_use]
    pub fn header_style(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({})",
            self.header_opacity, self.header_y, self.header_scale
        )
    }

    #[must_use]
    pub fn background_style(&self) -> String {
        format!("transform: translateY({}px)", self.background_y)
    }

    #[must_use]
    pub fn hint_style(&self) -> String {
        format!("opacity: {}", self.hint_opacity)
    }
}
