//! "Our Journey" modal opened from the heritage section.

use leptos::prelude::*;

use crate::content::{
    HERITAGE_IMAGE, STORY_CONTINUED, STORY_INLINE_IMAGE, STORY_PARAGRAPHS, STORY_PROMISE, STORY_PULL_QUOTE,
};
use crate::state::ui::{UiAction, UiState};
use crate::util::image::ImageRole;

use super::fallback_img::FallbackImg;

/// Split off the first character for the drop cap.
fn drop_cap(text: &'static str) -> (&'static str, &'static str) {
    let split = text.chars().next().map_or(0, char::len_utf8);
    text.split_at(split)
}

#[component]
pub fn StoryModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = move || ui.update(|u| u.dispatch(UiAction::CloseStory));

    view! {
        <Show when=move || ui.with(|u| u.story_open)>
            <div class="story-backdrop">
                <div class="story">
                    <button class="story__close" aria-label="Close story" on:click=move |_| close()>
                        "\u{2715}"
                    </button>

                    <div class="story__layout">
                        <div class="story__aside">
                            <FallbackImg
                                class="story__aside-image"
                                src=HERITAGE_IMAGE.to_owned()
                                alt="Vintage Workshop"
                                role=ImageRole::Heritage
                            />
                            <div class="story__aside-caption">
                                <h2 class="story__est">"EST." <br/> <span class="story__est-year">"1947"</span></h2>
                                <p class="story__motto">"\"Preserving the soul of the machine.\""</p>
                            </div>
                        </div>

                        <div class="story__body">
                            <span class="section-eyebrow__label">"Our Journey"</span>
                            <h3 class="story__title">"The Resurrection of" <br/> "Indian Motoring"</h3>
                            <div class="story__prose">
                                {STORY_PARAGRAPHS
                                    .iter()
                                    .enumerate()
                                    .map(|(i, paragraph)| {
                                        if i == 0 {
                                            let (cap, rest) = drop_cap(*paragraph);
                                            view! {
                                                <p>
                                                    <span class="story__drop-cap">{cap}</span>
                                                    {rest}
                                                </p>
                                            }
                                                .into_any()
                                        } else {
                                            view! { <p>{*paragraph}</p> }.into_any()
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                                <blockquote class="story__pull-quote">{format!("\"{STORY_PULL_QUOTE}\"")}</blockquote>
                                {STORY_CONTINUED.iter().map(|p| view! { <p>{*p}</p> }).collect::<Vec<_>>()}
                                <FallbackImg
                                    class="story__inline-image"
                                    src=STORY_INLINE_IMAGE.to_owned()
                                    alt="Maruti 800"
                                    role=ImageRole::Heritage
                                />
                                <h4 class="story__promise-title">"The Promise"</h4>
                                <p>{STORY_PROMISE}</p>
                            </div>
                            <div class="story__signoff">"The Founders"</div>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
