use super::*;
use crate::state::catalog::Category;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_has_no_overlays() {
    let state = UiState::default();
    assert!(state.selected_car.is_none());
    assert!(!state.story_open);
    assert!(!state.mobile_menu_open);
    assert!(!state.assistant_open);
    assert!(!state.nav_scrolled);
}

#[test]
fn ui_state_default_filter_is_all() {
    assert_eq!(UiState::default().filter, CategoryFilter::All);
}

// =============================================================
// Overlays
// =============================================================

#[test]
fn select_and_close_details() {
    let state = reduce(UiState::default(), UiAction::SelectCar("3".to_owned()));
    assert_eq!(state.selected_car.as_deref(), Some("3"));
    let state = reduce(state, UiAction::CloseDetails);
    assert!(state.selected_car.is_none());
}

#[test]
fn selecting_another_car_replaces_selection() {
    let state = reduce(UiState::default(), UiAction::SelectCar("1".to_owned()));
    let state = reduce(state, UiAction::SelectCar("2".to_owned()));
    assert_eq!(state.selected_car.as_deref(), Some("2"));
}

#[test]
fn story_menu_and_assistant_toggle_independently() {
    let mut state = UiState::default();
    state.dispatch(UiAction::OpenStory);
    state.dispatch(UiAction::OpenMobileMenu);
    state.dispatch(UiAction::OpenAssistant);
    assert!(state.story_open && state.mobile_menu_open && state.assistant_open);

    state.dispatch(UiAction::CloseMobileMenu);
    assert!(state.story_open);
    assert!(!state.mobile_menu_open);
    assert!(state.assistant_open);

    state.dispatch(UiAction::CloseStory);
    state.dispatch(UiAction::CloseAssistant);
    assert_eq!(state, UiState::default());
}

// =============================================================
// Navbar + filter
// =============================================================

#[test]
fn navbar_compacts_past_threshold() {
    let state = reduce(UiState::default(), UiAction::Scrolled(20.0));
    assert!(!state.nav_scrolled);
    let state = reduce(state, UiAction::Scrolled(21.0));
    assert!(state.nav_scrolled);
    let state = reduce(state, UiAction::Scrolled(0.0));
    assert!(!state.nav_scrolled);
}

#[test]
fn set_filter_replaces_active_filter() {
    let state = reduce(UiState::default(), UiAction::SetFilter(CategoryFilter::Only(Category::Suv)));
    assert_eq!(state.filter, CategoryFilter::Only(Category::Suv));
    let state = reduce(state, UiAction::SetFilter(CategoryFilter::All));
    assert_eq!(state.filter, CategoryFilter::All);
}
