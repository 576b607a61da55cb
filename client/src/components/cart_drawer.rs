//! Slide-in "Your Garage" drawer listing cart lines and the total.

use leptos::prelude::*;

use crate::state::cart::{CartAction, CartState};
use crate::util::format::format_inr;
use crate::util::image::ImageRole;

use super::fallback_img::FallbackImg;

#[component]
pub fn CartDrawer() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let close = move || cart.update(|c| c.dispatch(CartAction::Close));

    view! {
        <Show when=move || cart.with(|c| c.open)>
            <div class="cart-backdrop" on:click=move |_| close()></div>
            <aside class="cart-drawer">
                <header class="cart-drawer__header">
                    <h2 class="cart-drawer__title">"Your Garage"</h2>
                    <button class="cart-drawer__close" aria-label="Close garage" on:click=move |_| close()>
                        "\u{2715}"
                    </button>
                </header>

                <div class="cart-drawer__lines">
                    <Show
                        when=move || !cart.with(CartState::is_empty)
                        fallback=move || {
                            view! {
                                <div class="cart-drawer__empty">
                                    <p>"Garage Empty"</p>
                                    <button class="cart-drawer__browse" on:click=move |_| close()>
                                        "Find a Classic"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <For each=move || cart.with(|c| c.lines.clone()) key=|line| (line.car.id, line.quantity) let:line>
                            <div class="cart-line">
                                <FallbackImg
                                    class="cart-line__image"
                                    src=line.car.image.to_owned()
                                    alt=line.car.name
                                    role=ImageRole::Card
                                />
                                <div class="cart-line__info">
                                    <h4 class="cart-line__name">{line.car.name}</h4>
                                    <p class="cart-line__brand">{line.car.brand}</p>
                                    <p class="cart-line__price">{format_inr(line.car.price)}</p>
                                    <Show when=move || { line.quantity > 1 }>
                                        <p class="cart-line__quantity">{format!("Qty {}", line.quantity)}</p>
                                    </Show>
                                </div>
                                <button
                                    class="cart-line__remove"
                                    aria-label="Remove from garage"
                                    on:click=move |_| cart.update(|c| c.dispatch(CartAction::Remove(line.car.id.to_owned())))
                                >
                                    "\u{1f5d1}"
                                </button>
                            </div>
                        </For>
                    </Show>
                </div>

                <Show when=move || !cart.with(CartState::is_empty)>
                    <footer class="cart-drawer__footer">
                        <div class="cart-drawer__total">
                            <span class="cart-drawer__total-label">"Total Value"</span>
                            <span class="cart-drawer__total-value">{move || format_inr(cart.with(CartState::total))}</span>
                        </div>
                        <button class="btn btn--primary cart-drawer__checkout">"Secure These Classics"</button>
                        <p class="cart-drawer__note">"Price excludes registration & restoration fees."</p>
                    </footer>
                </Show>
            </aside>
        </Show>
    }
}
