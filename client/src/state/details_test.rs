use super::*;
use crate::content::INVENTORY;

#[test]
fn default_tab_is_specifications() {
    let state = DetailState::default();
    assert_eq!(state.tab, DetailTab::Specifications);
    assert!(!state.engine_started);
    assert!(!state.booking_sent);
}

#[test]
fn inquire_switches_to_test_drive() {
    let state = reduce(DetailState::default(), DetailAction::SetTab(DetailTab::TestDrive));
    assert_eq!(state.tab, DetailTab::TestDrive);
}

#[test]
fn ignition_toggles() {
    let state = reduce(DetailState::default(), DetailAction::ToggleIgnition);
    assert!(state.engine_started);
    let state = reduce(state, DetailAction::ToggleIgnition);
    assert!(!state.engine_started);
}

#[test]
fn opening_different_car_resets_overlay() {
    let mut state = DetailState::default();
    state.dispatch(DetailAction::Open("1".to_owned()));
    state.dispatch(DetailAction::SetTab(DetailTab::TestDrive));
    state.dispatch(DetailAction::ToggleIgnition);
    state.dispatch(DetailAction::ShowImage(GALLERY_EXTRAS[0].to_owned()));

    state.dispatch(DetailAction::Open("2".to_owned()));
    assert_eq!(state.car_id.as_deref(), Some("2"));
    assert_eq!(state.tab, DetailTab::Specifications);
    assert!(!state.engine_started);
    assert!(state.current_image.is_none());
}

#[test]
fn reopening_same_car_keeps_overlay() {
    let mut state = DetailState::default();
    state.dispatch(DetailAction::Open("1".to_owned()));
    state.dispatch(DetailAction::SetTab(DetailTab::TestDrive));
    state.dispatch(DetailAction::Open("1".to_owned()));
    assert_eq!(state.tab, DetailTab::TestDrive);
}

#[test]
fn main_image_falls_back_to_car_photo() {
    let car = INVENTORY[0];
    let mut state = DetailState::default();
    assert_eq!(state.main_image(&car), car.image);
    state.dispatch(DetailAction::ShowImage(GALLERY_EXTRAS[1].to_owned()));
    assert_eq!(state.main_image(&car), GALLERY_EXTRAS[1]);
}

#[test]
fn gallery_leads_with_car_image() {
    let car = INVENTORY[4];
    let images = gallery(&car);
    assert_eq!(images[0], car.image);
    assert_eq!(&images[1..], &GALLERY_EXTRAS);
}

#[test]
fn booking_submit_is_recorded_only() {
    let state = reduce(DetailState::default(), DetailAction::SubmitBooking);
    assert!(state.booking_sent);
    assert_eq!(state.tab, DetailTab::Specifications);
}
