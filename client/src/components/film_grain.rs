//! Fixed, pointer-transparent noise overlay across the whole page.

use leptos::prelude::*;

/// Inline SVG turbulence used as the grain texture.
const GRAIN_SVG: &str = "data:image/svg+xml,%3Csvg viewBox='0 0 200 200' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.65' numOctaves='3' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23n)'/%3E%3C/svg%3E";

#[component]
pub fn FilmGrain() -> impl IntoView {
    let style = format!("background-image: url(\"{GRAIN_SVG}\")");
    view! { <div class="film-grain" aria-hidden="true" style=style></div> }
}
