//! Browser boundary adapters for the panel layout runtime.
//!
//! The crate owns the two places the layout controller touches the host
//! environment: the durable cookie record that remembers whether the desktop
//! panel was left open, and the viewport breakpoint watcher that drives the
//! responsive render mode. Both are gated on `wasm32` with inert native
//! fallbacks so higher layers compile and unit-test off the browser.

mod cookie;
mod viewport;

pub use cookie::{
    load_panel_preference, store_panel_preference, HostError, PANEL_STATE_COOKIE,
    PANEL_STATE_MAX_AGE_SECS,
};
pub use viewport::{viewport_is_mobile, BreakpointWatch, MOBILE_BREAKPOINT_PX};
