//! Wall-clock access that degrades to zero outside the browser.

/// Milliseconds since the epoch in the browser; `0.0` during SSR and tests.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
