//! Network-facing client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` is shared with the server crate so both sides of
//! `/api/assistant/chat` serialize the same DTOs; `api` performs the browser
//! request.

pub mod api;
pub mod types;
