//! Page chrome state: overlays, menus, navbar styling, showroom filter.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`cart`,
//! `assistant`) so overlays can evolve independently of the data they show.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::catalog::CategoryFilter;

/// Scroll offset past which the navbar switches to its compact style.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 20.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    /// Car id shown in the detail overlay.
    pub selected_car: Option<String>,
    pub story_open: bool,
    pub mobile_menu_open: bool,
    pub assistant_open: bool,
    pub nav_scrolled: bool,
    pub filter: CategoryFilter,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UiAction {
    SelectCar(String),
    CloseDetails,
    OpenStory,
    CloseStory,
    OpenMobileMenu,
    CloseMobileMenu,
    OpenAssistant,
    CloseAssistant,
    /// Window scroll offset in pixels.
    Scrolled(f64),
    SetFilter(CategoryFilter),
}

#[must_use]
pub fn reduce(mut state: UiState, action: UiAction) -> UiState {
    match action {
        UiAction::SelectCar(id) => state.selected_car = Some(id),
        UiAction::CloseDetails => state.selected_car = None,
        UiAction::OpenStory => state.story_open = true,
        UiAction::CloseStory => state.story_open = false,
        UiAction::OpenMobileMenu => state.mobile_menu_open = true,
        UiAction::CloseMobileMenu => state.mobile_menu_open = false,
        UiAction::OpenAssistant => state.assistant_open = true,
        UiAction::CloseAssistant => state.assistant_open = false,
        UiAction::Scrolled(y) => state.nav_scrolled = y > NAV_SCROLL_THRESHOLD_PX,
        UiAction::SetFilter(filter) => state.filter = filter,
    }
    state
}

impl UiState {
    pub fn dispatch(&mut self, action: UiAction) {
        *self = reduce(std::mem::take(self), action);
    }
}
