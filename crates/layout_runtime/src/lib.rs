//! Sidebar layout state controller and layout-aware components.
//!
//! The controller owns whether the navigation panel is expanded or collapsed
//! (desktop) and whether the overlay sheet is open (mobile), derives the
//! responsive mode from the viewport, persists user intent through
//! `browser_host`, and exposes a read/mutate/toggle contract via Leptos
//! context. All transitions run through a pure reducer so the whole state
//! machine is testable off the browser.

pub mod components;
pub mod context;
pub mod model;
pub mod reducer;

pub use components::{
    Sidebar, SidebarInset, SidebarMenuButton, SidebarMenuSubButton, SidebarRail, SidebarTrigger,
};
pub use context::{use_layout, LayoutContext, LayoutProvider, PANEL_TOGGLE_KEY};
pub use model::{LayoutModel, PanelState, ResponsiveMode};
pub use reducer::{reduce_layout, LayoutAction, LayoutEffect};
