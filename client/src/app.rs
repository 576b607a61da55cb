//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::HERO_SLIDES;
use crate::pages::home::HomePage;
use crate::state::{
    assistant::AssistantState, cart::CartState, details::DetailState, hero::HeroCarousel, ui::UiState,
};
use crate::util::clock::now_ms;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Each piece of storefront state is an independent `RwSignal` so
/// components only re-render on the slice they read.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session_id = uuid::Uuid::new_v4().to_string();

    provide_context(RwSignal::new(CartState::default()));
    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(DetailState::default()));
    provide_context(RwSignal::new(HeroCarousel::new(HERO_SLIDES.len())));
    provide_context(RwSignal::new(AssistantState::new(session_id, now_ms())));

    view! {
        <Stylesheet id="leptos" href="/pkg/desi-classics.css"/>
        <Title text="Desi Classics | Vintage Indian Automobiles"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
