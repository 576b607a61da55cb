//! Showroom card for one catalog item.

use leptos::prelude::*;

use crate::state::cart::{CartAction, CartState};
use crate::state::catalog::Car;
use crate::state::details::{DetailAction, DetailState};
use crate::state::ui::{UiAction, UiState};
use crate::util::format::format_lakhs;
use crate::util::image::ImageRole;

use super::fallback_img::FallbackImg;

#[component]
pub fn CarCard(car: Car) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let details = expect_context::<RwSignal<DetailState>>();

    let select = move || {
        details.update(|d| d.dispatch(DetailAction::Open(car.id.to_owned())));
        ui.update(|u| u.dispatch(UiAction::SelectCar(car.id.to_owned())));
    };

    view! {
        <article class="car-card">
            <div class="car-card__media cursor-pointer" on:click=move |_| select()>
                <span class="car-card__year">{car.year}</span>
                <FallbackImg class="car-card__image" src=car.image.to_owned() alt=car.name role=ImageRole::Card/>
                <div class="car-card__fade"></div>
                <div class="car-card__stats">
                    <span class="car-card__stat">
                        <span class="car-card__stat-icon" aria-hidden="true">"\u{23f2}"</span>
                        {car.specs.top_speed}
                    </span>
                    <span class="car-card__stat">
                        <span class="car-card__stat-icon" aria-hidden="true">"\u{2699}"</span>
                        {car.specs.engine}
                    </span>
                </div>
            </div>

            <div class="car-card__body">
                <div class="car-card__heading">
                    <p class="car-card__brand">{car.brand}</p>
                    <p class="car-card__price">{format_lakhs(car.price)}</p>
                </div>
                <h3 class="car-card__name">{car.name}</h3>
                <p class="car-card__description">{car.description}</p>

                <div class="car-card__actions">
                    <button class="car-card__specs" on:click=move |_| select()>
                        "View Specs"
                        <span aria-hidden="true">"\u{2192}"</span>
                    </button>
                    <button
                        class="car-card__add"
                        aria-label="Add to cart"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            cart.update(|c| c.dispatch(CartAction::Add(car)));
                        }
                    >
                        "+"
                    </button>
                </div>
            </div>
        </article>
    }
}
