//! "Chacha AI" concierge: floating launcher plus the chat panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends each turn to the server's assistant endpoint, which holds the model
//! credentials and the inventory-aware preamble. Transport failures are
//! logged to the console and leave the transcript as it was.

use leptos::prelude::*;

use crate::net::api::send_assistant_message;
use crate::net::types::ChatRole;
use crate::state::assistant::AssistantState;
use crate::state::ui::{UiAction, UiState};
use crate::util::clock::now_ms;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn AssistantPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = move || ui.with(|u| u.assistant_open);

    view! {
        <div class="assistant-launcher">
            <Show when=move || !open()>
                <button
                    class="assistant-launcher__button"
                    aria-label="Ask Chacha"
                    on:click=move |_| ui.update(|u| u.dispatch(UiAction::OpenAssistant))
                >
                    "\u{1f4ac}"
                </button>
            </Show>
        </div>
        <Show when=open>
            <ChatWindow/>
        </Show>
    }
}

#[component]
fn ChatWindow() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let assistant = expect_context::<RwSignal<AssistantState>>();

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest turn in view.
    Effect::new(move || {
        let _ = assistant.with(|a| (a.messages.len(), a.loading));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let mut request = None;
        assistant.update(|a| request = a.begin_send(now_ms()));
        let Some(request) = request else {
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome = send_assistant_message(&request).await;
            #[cfg(feature = "hydrate")]
            {
                if let Err(e) = &outcome {
                    log::error!("assistant request failed: {e}");
                }
            }
            assistant.update(|a| a.complete(outcome, now_ms()));
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let loading = move || assistant.with(|a| a.loading);

    view! {
        <div class="assistant">
            <header class="assistant__header">
                <div class="assistant__identity">
                    <div class="assistant__avatar" aria-hidden="true">"\u{1f916}"</div>
                    <div>
                        <h3 class="assistant__name">"Chacha AI"</h3>
                        <p class="assistant__role">"Vintage Expert"</p>
                    </div>
                </div>
                <button
                    class="assistant__close"
                    aria-label="Close assistant"
                    on:click=move |_| ui.update(|u| u.dispatch(UiAction::CloseAssistant))
                >
                    "\u{2715}"
                </button>
            </header>

            <div class="assistant__messages" node_ref=messages_ref>
                <For each=move || assistant.with(|a| a.messages.clone()) key=|msg| msg.id.clone() let:msg>
                    {
                        let is_model = msg.role == ChatRole::Model;
                        view! {
                            <div
                                class="assistant__message"
                                class:assistant__message--user=!is_model
                                class:assistant__message--model=is_model
                            >
                                <div class="assistant__bubble">
                                    {if is_model {
                                        let rendered = render_markdown_html(&msg.text);
                                        view! {
                                            <span class="assistant__sparkle" aria-hidden="true">"\u{2728}"</span>
                                            <div class="assistant__markdown" inner_html=rendered></div>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <span>{msg.text.clone()}</span> }.into_any()
                                    }}
                                </div>
                            </div>
                        }
                    }
                </For>
                <Show when=loading>
                    <div class="assistant__message assistant__message--model">
                        <div class="assistant__bubble assistant__bubble--loading">
                            <span class="assistant__spinner" aria-hidden="true"></span>
                            <span>"Checking the archives..."</span>
                        </div>
                    </div>
                </Show>
            </div>

            <div class="assistant__compose">
                <input
                    class="assistant__input"
                    type="text"
                    placeholder="Ask about Ambassador..."
                    prop:value=move || assistant.with(|a| a.input.clone())
                    on:input=move |ev| assistant.update(|a| a.input = event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="assistant__send"
                    aria-label="Send"
                    on:click=move |_| do_send()
                    disabled=move || !assistant.with(AssistantState::can_send)
                >
                    "\u{27a4}"
                </button>
            </div>
        </div>
    }
}
