//! Horizontal showroom: a tall sticky section whose vertical scroll drives
//! the card track sideways.

use leptos::prelude::*;

use crate::content::INVENTORY;
use crate::state::catalog::{category_filters, filter_cars};
use crate::state::ui::{UiAction, UiState};
use crate::util::scroll::ShowroomFrame;

use super::car_card::CarCard;

#[component]
pub fn Showroom() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let section_ref = NodeRef::<leptos::html::Section>::new();
    let track_ref = NodeRef::<leptos::html::Div>::new();

    let progress = RwSignal::new(0.0_f64);
    let range = RwSignal::new(0.0_f64);
    let frame = Memo::new(move |_| ShowroomFrame::at(progress.get(), range.get()));

    let filter = move || ui.with(|u| u.filter);
    let cars = Memo::new(move |_| filter_cars(INVENTORY, filter()));

    #[cfg(feature = "hydrate")]
    {
        use crate::util::browser::viewport_size;
        use crate::util::scroll::{scroll_progress, scroll_range};

        let measure_range = move || {
            if let Some(track) = track_ref.get_untracked() {
                let (viewport_width, _) = viewport_size();
                range.set(scroll_range(f64::from(track.scroll_width()), viewport_width));
            }
        };
        let measure_progress = move || {
            if let Some(section) = section_ref.get_untracked() {
                let rect = section.get_bounding_client_rect();
                let (_, viewport_height) = viewport_size();
                progress.set(scroll_progress(rect.top(), rect.height(), viewport_height));
            }
        };

        // Re-measure once the refs mount and whenever the filter changes the track.
        Effect::new(move || {
            let _ = cars.get();
            let _ = track_ref.get();
            measure_range();
            measure_progress();
            // Card images settle their widths a tick after render.
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(100)).await;
                measure_range();
            });
        });

        let on_resize = window_event_listener(leptos::ev::resize, move |_| {
            measure_range();
            measure_progress();
        });
        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| measure_progress());
        on_cleanup(move || {
            on_resize.remove();
            on_scroll.remove();
        });
    }

    view! {
        <section class="showroom" id="showroom" node_ref=section_ref>
            <div class="showroom__sticky">
                <div class="showroom__backdrop" style=move || frame.get().background_style()>
                    <h3 class="showroom__backdrop-text">"Inventory"</h3>
                </div>

                <div class="showroom__header">
                    <div class="showroom__title" style=move || frame.get().header_style()>
                        <div class="section-eyebrow">
                            <span class="section-eyebrow__rule"></span>
                            <span>"Inventory"</span>
                        </div>
                        <h2 class="showroom__heading">"The Royal Garage"</h2>
                    </div>

                    <div class="showroom__filters" style=move || format!("opacity: {}", frame.get().header_opacity)>
                        {category_filters(INVENTORY)
                            .into_iter()
                            .map(|chip| {
                                view! {
                                    <button
                                        class="filter-chip cursor-hover"
                                        class:filter-chip--active=move || filter() == chip
                                        on:click=move |_| ui.update(|u| u.dispatch(UiAction::SetFilter(chip)))
                                    >
                                        {chip.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="showroom__rail">
                    <div class="showroom__track" node_ref=track_ref style=move || frame.get().track_style()>
                        <For each=move || cars.get() key=|car| car.id let:car>
                            <CarCard car=car/>
                        </For>
                    </div>
                    <div class="showroom__hint" style=move || frame.get().hint_style()>
                        <span class="showroom__hint-rule"></span>
                        "Scroll Down to Explore"
                    </div>
                </div>
            </div>
        </section>
    }
}
