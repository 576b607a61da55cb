//! Thin browser helpers used by components. Every function no-ops outside
//! the `hydrate` build so server rendering stays deterministic.

/// Smooth-scroll the element with `id` into view.
pub fn scroll_to_id(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) else {
            log::warn!("scroll target missing: {id}");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Trigger a vibration pattern when the device supports it.
pub fn vibrate(pattern: &[u32]) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let array = js_sys::Array::new();
        for ms in pattern {
            array.push(&wasm_bindgen::JsValue::from(*ms));
        }
        let _ = window.navigator().vibrate_with_pattern(&array);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pattern;
    }
}

/// Current vertical scroll offset of the window.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Viewport size as `(width, height)`.
pub fn viewport_size() -> (f64, f64) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (w, h)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (0.0, 0.0)
    }
}
