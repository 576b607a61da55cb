//! The single storefront page.
//!
//! Sections render top to bottom in scroll order; overlays (details, story,
//! cart, assistant) sit after the footer and show themselves from UI state.

use leptos::prelude::*;

use crate::components::{
    assistant_panel::AssistantPanel, car_details::CarDetails, cart_drawer::CartDrawer, fallback_img::FallbackImg,
    features::Features, film_grain::FilmGrain, hero::Hero, navbar::Navbar, pointer_trail::PointerTrail, reviews::Reviews,
    showroom::Showroom, story_modal::StoryModal,
};
use crate::content::{HERITAGE_IMAGE, MARQUEE_BRANDS, RESTORATION_STEPS};
use crate::state::ui::{UiAction, UiState};
use crate::util::image::ImageRole;

/// Brand list repeats so the scrolling strip never shows a gap.
const MARQUEE_REPEAT: usize = 3;

const EXPLORE_LINKS: [&str; 4] = ["Inventory", "Restoration", "Sold Cars", "Journal"];
const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Shipping Policy"];
const SOCIAL_LINKS: [&str; 3] = ["Instagram", "Twitter", "YouTube"];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="storefront">
            <PointerTrail/>
            <FilmGrain/>
            <Navbar/>

            <section class="hero-section">
                <Hero/>
            </section>
            <BrandMarquee/>
            <Showroom/>
            <Features/>
            <Restoration/>
            <Heritage/>
            <Reviews/>
            <Footer/>

            <CarDetails/>
            <StoryModal/>
            <CartDrawer/>
            <AssistantPanel/>
        </div>
    }
}

#[component]
fn BrandMarquee() -> impl IntoView {
    view! {
        <div class="marquee">
            <div class="marquee__track">
                {(0..MARQUEE_REPEAT)
                    .flat_map(|_| MARQUEE_BRANDS.iter())
                    .map(|brand| {
                        view! {
                            <span class="marquee__brand">{*brand}</span>
                            <span class="marquee__dot"></span>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn Restoration() -> impl IntoView {
    view! {
        <section class="restoration" id="services">
            <div class="restoration__inner">
                <div class="restoration__header">
                    <h3 class="restoration__backdrop" aria-hidden="true">"Process"</h3>
                    <span class="section-eyebrow__label">"Our Craft"</span>
                    <h4 class="restoration__heading">"The Resurrection Protocol"</h4>
                </div>
                <div class="restoration__steps">
                    {RESTORATION_STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <div class="restoration-step cursor-hover">
                                    <div class="restoration-step__lead">
                                        <span class="restoration-step__number">{format!("{:02}", i + 1)}</span>
                                        <h5 class="restoration-step__title">{step.title}</h5>
                                    </div>
                                    <p class="restoration-step__desc">{step.desc}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Heritage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section class="heritage" id="heritage">
            <h3 class="heritage__backdrop" aria-hidden="true">"Legacy"</h3>
            <div class="heritage__inner">
                <div class="heritage__media">
                    <div class="heritage__frame heritage__frame--gold"></div>
                    <div class="heritage__frame heritage__frame--white"></div>
                    <FallbackImg
                        class="heritage__image"
                        src=HERITAGE_IMAGE.to_owned()
                        alt="Vintage Mechanic Workshop"
                        role=ImageRole::Heritage
                    />
                </div>
                <div class="heritage__copy">
                    <span class="section-eyebrow__label">"Legacy"</span>
                    <h3 class="heritage__heading">
                        "Preserving" <br/> <span class="heritage__accent">"India's Soul"</span>
                    </h3>
                    <p class="heritage__text">
                        "From the bustling streets of Calcutta to the winding roads of Ooty, these machines moved a nation. Desi Classics is dedicated to keeping these stories alive, one engine at a time."
                    </p>
                    <button
                        class="btn btn--light cursor-hover"
                        on:click=move |_| ui.update(|u| u.dispatch(UiAction::OpenStory))
                    >
                        "Read Our Story"
                    </button>
                </div>
            </div>
        </section>
    }
}

fn link_list(links: &'static [&'static str]) -> impl IntoView {
    links
        .iter()
        .map(|label| view! { <li class="footer__link cursor-hover">{*label}</li> })
        .collect::<Vec<_>>()
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer" id="contact">
            <h1 class="footer__backdrop" aria-hidden="true">"VINTAGE"</h1>
            <div class="footer__inner">
                <div class="footer__grid">
                    <div class="footer__newsletter">
                        <h2 class="footer__heading">"Join the " <span class="footer__accent">"Club"</span></h2>
                        <p class="footer__lead">
                            "Get exclusive access to new inventory drops, private auctions, and restoration stories before they go public."
                        </p>
                        <form class="footer__form" on:submit=|ev| ev.prevent_default()>
                            <input class="footer__email" type="email" placeholder="email@example.com"/>
                            <button class="footer__join cursor-hover" type="submit">"Join"</button>
                        </form>
                    </div>
                    <div class="footer__columns">
                        <div>
                            <h4 class="footer__column-title">"Explore"</h4>
                            <ul class="footer__links">{link_list(&EXPLORE_LINKS)}</ul>
                        </div>
                        <div>
                            <h4 class="footer__column-title">"Legal"</h4>
                            <ul class="footer__links">{link_list(&LEGAL_LINKS)}</ul>
                        </div>
                    </div>
                </div>
                <div class="footer__bottom">
                    <p>"\u{a9} 2024 Desi Classics. Made in India."</p>
                    <div class="footer__social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|s| view! { <span class="footer__social-link cursor-hover">{*s}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
