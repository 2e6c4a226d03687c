//! Viewport breakpoint measurement and change subscription.

/// Widths below this many device-independent pixels render the mobile layout.
pub const MOBILE_BREAKPOINT_PX: i32 = 768;

/// Measures the viewport once. Unavailable viewports report desktop.
pub fn viewport_is_mobile() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
            .map(|width| (width as i32) < MOBILE_BREAKPOINT_PX)
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Live subscription to breakpoint crossings via a `matchMedia` listener.
///
/// The listener fires only when the viewport crosses the breakpoint, not on
/// every resize. Holders must call [`BreakpointWatch::remove`] when the
/// owning component unmounts; dropping without removing leaks the browser
/// listener.
#[cfg(target_arch = "wasm32")]
pub struct BreakpointWatch {
    query: web_sys::MediaQueryList,
    on_change: wasm_bindgen::closure::Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl BreakpointWatch {
    /// Installs a change listener; `on_change` receives the fresh mobile flag.
    ///
    /// Returns `None` when `matchMedia` is unavailable.
    pub fn install(on_change: impl Fn(bool) + 'static) -> Option<Self> {
        use wasm_bindgen::JsCast;

        let window = web_sys::window()?;
        let query = window
            .match_media(&format!("(max-width: {}px)", MOBILE_BREAKPOINT_PX - 1))
            .ok()
            .flatten()?;
        let on_change = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            on_change(viewport_is_mobile());
        });
        query
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { query, on_change })
    }

    /// Detaches the change listener and releases the bridged closure.
    pub fn remove(self) {
        use wasm_bindgen::JsCast;

        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.on_change.as_ref().unchecked_ref());
    }
}

/// Native stand-in; breakpoint events do not exist off the browser.
#[cfg(not(target_arch = "wasm32"))]
pub struct BreakpointWatch;

#[cfg(not(target_arch = "wasm32"))]
impl BreakpointWatch {
    /// Never installs anything on native targets.
    pub fn install(_on_change: impl Fn(bool) + 'static) -> Option<Self> {
        None
    }

    /// No-op counterpart to the browser listener removal.
    pub fn remove(self) {}
}
