//! Utility helpers shared across storefront components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure math and formatting live here so they test natively; the few
//! browser touch points (`browser`, `clock`) compile to no-ops without the
//! `hydrate` feature.

pub mod browser;
pub mod clock;
pub mod format;
pub mod image;
pub mod markdown;
pub mod scroll;
pub mod trail;
