//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`cart`, `ui`, `assistant`, etc.) so individual
//! components depend on small focused models. Each module exposes a pure
//! `reduce`/transition API; `app` wraps the values in `RwSignal`s and provides
//! them through context.

pub mod assistant;
pub mod cart;
pub mod catalog;
pub mod details;
pub mod hero;
pub mod ui;
