//! Full-screen details overlay for the selected car: gallery, ignition
//! toggle, specifications, and the test-drive request form.

use leptos::prelude::*;

use crate::content::INVENTORY;
use crate::state::cart::{CartAction, CartState};
use crate::state::catalog::{Car, find_car};
use crate::state::details::{
    DetailAction, DetailState, DetailTab, IGNITION_VIBRATION_MS, TEST_DRIVE_CONFIRMATION, gallery,
};
use crate::state::ui::{UiAction, UiState};
use crate::util::browser::vibrate;
use crate::util::format::format_inr;
use crate::util::image::ImageRole;

use super::fallback_img::FallbackImg;

const ASSURANCES: [&str; 3] = ["Original Papers & RC", "150-Point Certified", "6-Month Warranty"];

#[component]
pub fn CarDetails() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let selected = move || {
        ui.with(|u| u.selected_car.clone())
            .and_then(|id| find_car(INVENTORY, &id))
    };

    move || selected().map(|car| view! { <DetailsOverlay car=car/> })
}

#[component]
fn DetailsOverlay(car: Car) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let details = expect_context::<RwSignal<DetailState>>();
    let cart = expect_context::<RwSignal<CartState>>();

    let close = move || ui.update(|u| u.dispatch(UiAction::CloseDetails));
    let dispatch = move |action: DetailAction| details.update(|d| d.dispatch(action));

    let engine_started = move || details.with(|d| d.engine_started);
    let tab = move || details.with(|d| d.tab);
    let main_image = Signal::derive(move || details.with(|d| d.main_image(&car)));

    let on_ignition = move |_| {
        dispatch(DetailAction::ToggleIgnition);
        vibrate(&IGNITION_VIBRATION_MS);
    };

    view! {
        <div class="details-backdrop" on:click=move |_| close()>
            <div
                class="details"
                class:details--rumble=engine_started
                on:click=|ev| ev.stop_propagation()
            >
                <div class="details__glow"></div>
                <button class="details__close" aria-label="Close" on:click=move |_| close()>
                    "\u{2715}"
                </button>

                <div class="details__visual">
                    <div class="details__stage">
                        <FallbackImg class="details__image" src=main_image alt=car.name role=ImageRole::Card/>
                        <div class="details__stage-fade"></div>
                        <button
                            class="details__ignition"
                            class:details__ignition--running=engine_started
                            on:click=on_ignition
                        >
                            <span class="details__ignition-icon" aria-hidden="true">"\u{23fb}"</span>
                            <span>{move || if engine_started() { "Running" } else { "Start" }}</span>
                        </button>
                        <div class="details__caption">
                            <span class="details__collection">{format!("{} COLLECTION", car.year)}</span>
                            <h2 class="details__name">{car.name}</h2>
                            <div class="details__location">"Available in Mumbai"</div>
                        </div>
                    </div>

                    <div class="details__gallery">
                        {gallery(&car)
                            .into_iter()
                            .map(|url| {
                                let active = move || main_image.get() == url;
                                view! {
                                    <button
                                        class="details__thumb"
                                        class:details__thumb--active=active
                                        on:click=move |_| dispatch(DetailAction::ShowImage(url.to_owned()))
                                    >
                                        <img src=url alt="View"/>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="details__panel">
                    <div class="details__tabs">
                        {[DetailTab::Specifications, DetailTab::TestDrive]
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <button
                                        class="details__tab"
                                        class:details__tab--active=move || tab() == t
                                        on:click=move |_| dispatch(DetailAction::SetTab(t))
                                    >
                                        {t.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    {move || match tab() {
                        DetailTab::Specifications => {
                            view! {
                                <div class="details__specs">
                                    <blockquote class="details__quote">{format!("\"{}\"", car.description)}</blockquote>
                                    <dl class="details__rows">
                                        {car
                                            .specs
                                            .rows()
                                            .into_iter()
                                            .map(|(label, value)| {
                                                view! {
                                                    <div class="details__row">
                                                        <dt>{label}</dt>
                                                        <dd>{value}</dd>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                        <div class="details__row details__row--price">
                                            <dt>"Price"</dt>
                                            <dd>{format_inr(car.price)}</dd>
                                        </div>
                                    </dl>
                                    <ul class="details__assurances">
                                        {ASSURANCES.iter().map(|a| view! { <li>{*a}</li> }).collect::<Vec<_>>()}
                                    </ul>
                                    <div class="details__cta">
                                        <button
                                            class="btn btn--primary"
                                            on:click=move |_| cart.update(|c| c.dispatch(CartAction::Add(car)))
                                        >
                                            "Add to Garage"
                                        </button>
                                        <button
                                            class="btn btn--ghost"
                                            on:click=move |_| dispatch(DetailAction::SetTab(DetailTab::TestDrive))
                                        >
                                            "Inquire Now"
                                        </button>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                        DetailTab::TestDrive => view! { <TestDriveForm/> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

/// Inert booking form; submitting only shows the confirmation.
#[component]
fn TestDriveForm() -> impl IntoView {
    let details = expect_context::<RwSignal<DetailState>>();
    let sent = move || details.with(|d| d.booking_sent);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        details.update(|d| d.dispatch(DetailAction::SubmitBooking));
    };

    view! {
        <div class="details__booking">
            <p class="details__booking-lead">
                "Experience the legend firsthand. Schedule a private viewing at our heritage facility."
            </p>
            <form class="booking-form" on:submit=on_submit>
                <label class="booking-form__field">
                    <span class="booking-form__label">"Full Name"</span>
                    <input type="text" placeholder="Maharaja..."/>
                </label>
                <label class="booking-form__field">
                    <span class="booking-form__label">"Phone"</span>
                    <input type="tel" placeholder="+91..."/>
                </label>
                <label class="booking-form__field">
                    <span class="booking-form__label">"Preferred Date"</span>
                    <input type="date"/>
                </label>
                <button class="btn btn--primary booking-form__submit" type="submit">
                    "Request Drive"
                </button>
            </form>
            <Show when=sent>
                <p class="details__booking-sent" role="status">{TEST_DRIVE_CONFIRMATION}</p>
            </Show>
        </div>
    }
}
