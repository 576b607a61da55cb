//! Detail overlay state: tabs, ignition toggle, gallery selection.
//!
//! Reset whenever a different car is opened so a new overlay never inherits
//! the previous car's tab or gallery image.

#[cfg(test)]
#[path = "details_test.rs"]
mod details_test;

use super::catalog::Car;

/// Extra gallery shots shown after the car's own photograph.
pub const GALLERY_EXTRAS: [&str; 2] = [
    "https://images.unsplash.com/photo-1511919884226-fd3cad34687c?q=80&w=600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?q=80&w=600&auto=format&fit=crop",
];

/// Vibration pattern (ms) played when the engine is started.
pub const IGNITION_VIBRATION_MS: [u32; 3] = [200, 100, 200];

pub const TEST_DRIVE_CONFIRMATION: &str = "Request sent! Our concierge will call you shortly.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Specifications,
    TestDrive,
}

impl DetailTab {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Specifications => "Specifications",
            Self::TestDrive => "Test Drive",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailState {
    /// Car this state belongs to.
    pub car_id: Option<String>,
    pub tab: DetailTab,
    pub engine_started: bool,
    /// Gallery image currently in the main frame; `None` means the car's own image.
    pub current_image: Option<String>,
    /// Set after the inert booking form is submitted.
    pub booking_sent: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailAction {
    /// Rebind to a car, resetting everything if it differs.
    Open(String),
    SetTab(DetailTab),
    ToggleIgnition,
    ShowImage(String),
    SubmitBooking,
}

#[must_use]
pub fn reduce(mut state: DetailState, action: DetailAction) -> DetailState {
    match action {
        DetailAction::Open(id) => {
            if state.car_id.as_deref() != Some(id.as_str()) {
                state = DetailState { car_id: Some(id), ..DetailState::default() };
            }
        }
        DetailAction::SetTab(tab) => state.tab = tab,
        DetailAction::ToggleIgnition => state.engine_started = !state.engine_started,
        DetailAction::ShowImage(url) => state.current_image = Some(url),
        DetailAction::SubmitBooking => state.booking_sent = true,
    }
    state
}

impl DetailState {
    pub fn dispatch(&mut self, action: DetailAction) {
        *self = reduce(std::mem::take(self), action);
    }

    /// Image for the main frame.
    #[must_use]
    pub fn main_image(&self, car: &Car) -> String {
        self.current_image
            .clone()
            .unwrap_or_else(|| car.image.to_owned())
    }
}

/// The car's own photograph followed by the fixed extras.
#[must_use]
pub fn gallery(car: &Car) -> [&'static str; 3] {
    [car.image, GALLERY_EXTRAS[0], GALLERY_EXTRAS[1]]
}
