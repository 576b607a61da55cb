//! Custom cursor: a primary dot plus trailing dots driven by `util::trail`.
//!
//! The trail state lives outside the reactive graph and is painted straight
//! to the DOM once per animation frame, so pointer movement never triggers
//! Leptos re-renders. Unmounting cancels the pending frame.

use leptos::prelude::*;

use crate::util::trail::{PointerTrail as TrailState, TRAIL_LENGTH};

#[cfg(feature = "hydrate")]
use std::{cell::RefCell, rc::Rc};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::util::trail::FrameSlot;

#[cfg(feature = "hydrate")]
const INTERACTIVE_ANCESTORS: &str = "a, button, input";

fn style_attr(style: &crate::util::trail::IndicatorStyle) -> String {
    format!("transform: {}; opacity: {}", style.transform(), style.opacity)
}

#[cfg(feature = "hydrate")]
fn paint(trail: &TrailState, cursor: &web_sys::Element, dots: &web_sys::HtmlCollection) {
    let _ = cursor.set_attribute("style", &style_attr(&trail.cursor_style()));
    for (i, style) in trail.slot_styles().iter().enumerate() {
        let Ok(index) = u32::try_from(i) else {
            break;
        };
        if let Some(dot) = dots.item(index) {
            let _ = dot.set_attribute("style", &style_attr(style));
        }
    }
}

#[cfg(feature = "hydrate")]
fn hover_target(target: Option<web_sys::EventTarget>) -> bool {
    let Some(el) = target.and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return false;
    };
    let inside = el.closest(INTERACTIVE_ANCESTORS).ok().flatten().is_some();
    crate::util::trail::is_interactive(&el.tag_name(), &el.class_name(), inside)
}

/// Running paint loop: the scheduled frame id and the callback that owns it.
#[cfg(feature = "hydrate")]
struct FrameLoop {
    slot: Rc<RefCell<FrameSlot>>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

#[cfg(feature = "hydrate")]
impl Drop for FrameLoop {
    /// Cancel the pending frame and release the callback.
    fn drop(&mut self) {
        let pending = self.slot.borrow_mut().release();
        if let (Some(id), Some(window)) = (pending, web_sys::window()) {
            if window.cancel_animation_frame(id).is_err() {
                log::warn!("pointer trail: cancelAnimationFrame rejected");
            }
        }
        self.callback.borrow_mut().take();
    }
}

#[cfg(feature = "hydrate")]
fn request_frame(window: &web_sys::Window, slot: &RefCell<FrameSlot>, callback: &Closure<dyn FnMut(f64)>) {
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => {
            if !slot.borrow_mut().scheduled(id) {
                let _ = window.cancel_animation_frame(id);
            }
        }
        Err(_) => log::warn!("pointer trail: requestAnimationFrame rejected"),
    }
}

/// Schedule `tick` + `paint` every animation frame until stopped.
#[cfg(feature = "hydrate")]
fn start_frame_loop(
    trail: Rc<RefCell<TrailState>>,
    cursor: web_sys::Element,
    dots: web_sys::HtmlCollection,
) -> Option<FrameLoop> {
    let window = web_sys::window()?;
    let slot = Rc::new(RefCell::new(FrameSlot::default()));
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

    let slot_for_cb = Rc::clone(&slot);
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        slot_for_cb.borrow_mut().fired();
        if slot_for_cb.borrow().is_released() {
            return;
        }
        {
            let mut state = trail.borrow_mut();
            state.tick();
            paint(&state, &cursor, &dots);
        }
        if let Some(next) = holder_for_cb.borrow().as_ref() {
            request_frame(&window_for_cb, &slot_for_cb, next);
        }
    }) as Box<dyn FnMut(f64)>);

    request_frame(&window, &slot, &cb);
    *holder.borrow_mut() = Some(cb);
    Some(FrameLoop { slot, callback: holder })
}

#[component]
pub fn PointerTrail() -> impl IntoView {
    let cursor_ref = NodeRef::<leptos::html::Div>::new();
    let dots_ref = NodeRef::<leptos::html::Div>::new();

    // Initial paint for SSR: everything parked off-screen and transparent.
    let initial = TrailState::default();
    let cursor_style = style_attr(&initial.cursor_style());
    let dot_styles = initial.slot_styles();

    #[cfg(feature = "hydrate")]
    {
        let trail = Rc::new(RefCell::new(initial));

        let trail_move = Rc::clone(&trail);
        let on_move = window_event_listener(leptos::ev::mousemove, move |ev| {
            trail_move
                .borrow_mut()
                .pointer_moved(f64::from(ev.client_x()), f64::from(ev.client_y()));
        });

        let trail_over = Rc::clone(&trail);
        let on_over = window_event_listener(leptos::ev::mouseover, move |ev| {
            let mut state = trail_over.borrow_mut();
            if ev.related_target().is_none() {
                state.pointer_entered();
            }
            state.set_hovering(hover_target(ev.target()));
        });

        let trail_out = Rc::clone(&trail);
        let on_out = window_event_listener(leptos::ev::mouseout, move |ev| {
            if ev.related_target().is_none() {
                trail_out.borrow_mut().pointer_left();
            }
        });

        let frames = StoredValue::new_local(None::<FrameLoop>);
        Effect::new(move || {
            let (Some(cursor), Some(dots)) = (cursor_ref.get(), dots_ref.get()) else {
                return;
            };
            if frames.try_with_value(Option::is_some) != Some(false) {
                return;
            }
            let cursor: web_sys::Element = cursor.into();
            let dots: web_sys::Element = dots.into();
            let running = start_frame_loop(Rc::clone(&trail), cursor, dots.children());
            frames.try_update_value(|slot| *slot = running);
        });

        on_cleanup(move || {
            drop(frames.try_update_value(Option::take));
            on_move.remove();
            on_over.remove();
            on_out.remove();
        });
    }

    view! {
        <div class="pointer-trail" aria-hidden="true">
            <div class="pointer-trail__dots" node_ref=dots_ref>
                {dot_styles
                    .iter()
                    .take(TRAIL_LENGTH)
                    .map(|style| view! { <div class="pointer-trail__dot" style=style_attr(style)></div> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="pointer-trail__cursor" node_ref=cursor_ref style=cursor_style></div>
        </div>
    }
}
