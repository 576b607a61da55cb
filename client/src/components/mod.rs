//! Storefront UI components.
//!
//! Each component reads the state slices it needs from context
//! (`expect_context::<RwSignal<_>>()`) and mutates them only through the
//! reducers in `crate::state`.

pub mod assistant_panel;
pub mod car_card;
pub mod car_details;
pub mod cart_drawer;
pub mod fallback_img;
pub mod features;
pub mod film_grain;
pub mod hero;
pub mod navbar;
pub mod pointer_trail;
pub mod reviews;
pub mod showroom;
pub mod story_modal;
