//! `<img>` that swaps to a role-specific fallback the first time it errors.

use leptos::prelude::*;

use crate::util::image::{ImageRole, resolve_src};

#[component]
pub fn FallbackImg(
    #[prop(into)] src: Signal<String>,
    #[prop(into)] alt: String,
    role: ImageRole,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let failed = RwSignal::new(false);

    // A new source gets a fresh chance to load.
    Effect::new(move || {
        let _ = src.get();
        failed.set(false);
    });

    view! {
        <img
            class=class
            alt=alt
            src=move || resolve_src(&src.get(), failed.get(), role)
            on:error=move |_| {
                if !failed.get_untracked() {
                    failed.set(true);
                }
            }
        />
    }
}
