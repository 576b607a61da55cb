//! "Garage Stories" testimonials.

use leptos::prelude::*;

use crate::content::{REVIEWS, average_rating};
use crate::util::image::ImageRole;

use super::fallback_img::FallbackImg;

fn stars(rating: u8) -> String {
    "\u{2605}".repeat(usize::from(rating))
}

#[component]
pub fn Reviews() -> impl IntoView {
    view! {
        <section class="reviews">
            <h3 class="reviews__backdrop" aria-hidden="true">"Voices"</h3>
            <div class="reviews__inner">
                <div class="reviews__header">
                    <div>
                        <span class="section-eyebrow__label">"Testimonials"</span>
                        <h2 class="reviews__heading">"Garage Stories"</h2>
                    </div>
                    <div class="reviews__rating">
                        <span class="reviews__stars">{stars(5)}</span>
                        <span class="reviews__average">{format!("{} Average Rating", average_rating())}</span>
                    </div>
                </div>

                <div class="reviews__grid">
                    {REVIEWS
                        .iter()
                        .map(|review| {
                            view! {
                                <div class="review cursor-hover">
                                    <div class="review__author">
                                        <FallbackImg
                                            class="review__avatar"
                                            src=review.image.to_owned()
                                            alt=review.name
                                            role=ImageRole::Card
                                        />
                                        <div>
                                            <h4 class="review__name">{review.name}</h4>
                                            <p class="review__location">{review.location}</p>
                                        </div>
                                    </div>
                                    <div class="review__stars">{stars(review.rating)}</div>
                                    <p class="review__text">{format!("\"{}\"", review.text)}</p>
                                    <span class="review__purchase">
                                        "Purchased: " <span class="review__car">{review.car}</span>
                                    </span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
