//! Full-screen hero carousel with timed auto-advance.
//!
//! The timer loop is keyed on `HeroCarousel::manual_seq`: any manual
//! navigation bumps the sequence, which ends the running loop and starts a
//! fresh one, so the next auto-advance is a full interval away.

use leptos::prelude::*;

use crate::content::HERO_SLIDES;
use crate::state::hero::{HeroAction, HeroCarousel};
use crate::util::browser::scroll_to_id;
use crate::util::image::ImageRole;

use super::fallback_img::FallbackImg;

#[component]
pub fn Hero() -> impl IntoView {
    let hero = expect_context::<RwSignal<HeroCarousel>>();

    #[cfg(feature = "hydrate")]
    {
        use std::sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        };

        use crate::state::hero::{AutoAdvance, HERO_INTERVAL_MS, loop_is_current};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_timer = Arc::clone(&alive);
        // Ticks change `current` but not the sequence, so they never rerun the effect.
        let manual_seq = Memo::new(move |_| hero.with(|h| h.manual_seq));
        let auto_advance = std::cell::RefCell::new(AutoAdvance::default());
        Effect::new(move || {
            let seq = manual_seq.get();
            if !auto_advance.borrow_mut().arm(seq) {
                return;
            }
            let alive = Arc::clone(&alive_timer);
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(HERO_INTERVAL_MS)).await;
                    if !alive.load(Ordering::Relaxed) {
                        break;
                    }
                    if hero.try_with_untracked(|h| loop_is_current(h, seq)) != Some(true) {
                        break;
                    }
                    hero.update(|h| h.dispatch(HeroAction::Tick));
                }
            });
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let slide = move || HERO_SLIDES.get(hero.with(|h| h.current)).copied();

    view! {
        <div class="hero">
            {move || {
                let Some(slide) = slide() else {
                    return ().into_any();
                };
                let direction = hero.with(|h| h.direction.class());
                let (head, rest) = slide.title_parts();
                view! {
                    <div class=format!("hero__slide {direction}")>
                        <div class="hero__shade hero__shade--vertical"></div>
                        <div class="hero__shade hero__shade--horizontal"></div>
                        <FallbackImg
                            class="hero__image"
                            src=slide.image.to_owned()
                            alt=slide.title
                            role=ImageRole::Hero
                        />
                    </div>
                    <div class="hero__copy">
                        <div class="hero__eyebrow">
                            <span class="hero__rule"></span>
                            <span class="hero__subtitle">{slide.subtitle}</span>
                        </div>
                        <h1 class="hero__title">
                            {head}
                            <br/>
                            <span class="hero__title-accent">{rest}</span>
                        </h1>
                        <p class="hero__description">{slide.description}</p>
                        <button class="btn btn--primary hero__cta" on:click=move |_| scroll_to_id("showroom")>
                            "Explore Collection"
                            <span class="hero__cta-arrow" aria-hidden="true">"\u{2192}"</span>
                        </button>
                    </div>
                }
                    .into_any()
            }}

            <div class="hero__controls">
                <button
                    class="hero__nav"
                    aria-label="Previous slide"
                    on:click=move |_| hero.update(|h| h.dispatch(HeroAction::Prev))
                >
                    "\u{2039}"
                </button>
                <button
                    class="hero__nav"
                    aria-label="Next slide"
                    on:click=move |_| hero.update(|h| h.dispatch(HeroAction::Next))
                >
                    "\u{203a}"
                </button>
                <div class="hero__indicators">
                    {(0..HERO_SLIDES.len())
                        .map(|idx| {
                            view! {
                                <button
                                    class="hero__indicator"
                                    class:hero__indicator--active=move || hero.with(|h| h.current == idx)
                                    aria-label=format!("Slide {}", idx + 1)
                                    on:click=move |_| hero.update(|h| h.dispatch(HeroAction::Goto(idx)))
                                ></button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
