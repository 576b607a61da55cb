//! Fixed top navigation with cart badge and the mobile menu overlay.

use leptos::prelude::*;

use crate::content::NAV_LINKS;
use crate::state::cart::{CartAction, CartState};
use crate::state::ui::{UiAction, UiState};

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let cart = expect_context::<RwSignal<CartState>>();

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = crate::util::browser::scroll_y();
            // Only touch the signal when the threshold is crossed.
            if ui.with_untracked(|u| u.nav_scrolled) != (y > crate::state::ui::NAV_SCROLL_THRESHOLD_PX) {
                ui.update(|u| u.dispatch(UiAction::Scrolled(y)));
            }
        });
        on_cleanup(move || handle.remove());
    }

    let count = move || cart.with(CartState::item_count);

    view! {
        <nav class="navbar" class:navbar--scrolled=move || ui.with(|u| u.nav_scrolled)>
            <div class="navbar__inner">
                <a class="navbar__logo" href="#">
                    <span class="navbar__crown" aria-hidden="true">"\u{265b}"</span>
                    <span class="navbar__wordmark">
                        <span class="navbar__word navbar__word--top">"DESI"</span>
                        <span class="navbar__word navbar__word--bottom">"CLASSICS"</span>
                    </span>
                </a>

                <div class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a class="navbar__link" href=link.href>{link.name}</a> })
                        .collect::<Vec<_>>()}
                </div>

                <div class="navbar__actions">
                    <button
                        class="navbar__cart"
                        aria-label="Open garage"
                        on:click=move |_| cart.update(|c| c.dispatch(CartAction::Open))
                    >
                        <span aria-hidden="true">"\u{1f6cd}"</span>
                        <Show when=move || { count() > 0 }>
                            <span class="navbar__badge">{count}</span>
                        </Show>
                    </button>
                    <button
                        class="navbar__menu-toggle"
                        aria-label="Open menu"
                        on:click=move |_| ui.update(|u| u.dispatch(UiAction::OpenMobileMenu))
                    >
                        "\u{2630}"
                    </button>
                </div>
            </div>
        </nav>

        <Show when=move || ui.with(|u| u.mobile_menu_open)>
            <MobileMenu/>
        </Show>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = move || ui.update(|u| u.dispatch(UiAction::CloseMobileMenu));

    view! {
        <div class="mobile-menu">
            <button class="mobile-menu__close" aria-label="Close menu" on:click=move |_| close()>
                "\u{2715}"
            </button>
            <div class="mobile-menu__links">
                {NAV_LINKS
                    .iter()
                    .enumerate()
                    .map(|(i, link)| {
                        let delay = format!("animation-delay: {}ms", i * 100);
                        view! {
                            <a class="mobile-menu__link" href=link.href style=delay on:click=move |_| close()>
                                {link.name}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="mobile-menu__footer">"Est. 1947"</div>
        </div>
    }
}
