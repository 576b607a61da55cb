//! "The Gold Standard" feature grid.

use leptos::prelude::*;

use crate::content::FEATURES;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <h3 class="features__backdrop" aria-hidden="true">"Standards"</h3>
            <div class="features__inner">
                <div class="section-eyebrow">
                    <span class="section-eyebrow__rule"></span>
                    <span>"Why Choose Us"</span>
                </div>
                <h2 class="features__heading">"The Gold Standard"</h2>
                <div class="features__grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="feature cursor-hover">
                                    <div class="feature__icon" aria-hidden="true">{feature.glyph}</div>
                                    <h3 class="feature__title">{feature.title}</h3>
                                    <p class="feature__desc">{feature.desc}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
