//! Centralized inline-SVG icon API for the shell chrome.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icons the shell chrome draws itself (no external asset pipeline).
pub enum IconName {
    /// Downward disclosure chevron.
    ChevronDown,
    /// Rightward breadcrumb/disclosure chevron.
    ChevronRight,
    /// Dismiss cross for overlays.
    Close,
    /// Horizontal ellipsis for elided breadcrumb segments.
    Ellipsis,
    /// Left panel glyph used by the sidebar trigger.
    PanelLeft,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::ChevronDown => "chevron-down",
            Self::ChevronRight => "chevron-right",
            Self::Close => "close",
            Self::Ellipsis => "ellipsis",
            Self::PanelLeft => "panel-left",
        }
    }

    fn glyph(self) -> View {
        match self {
            Self::ChevronDown => view! { <path d="m6 9 6 6 6-6"></path> }.into_view(),
            Self::ChevronRight => view! { <path d="m9 18 6-6-6-6"></path> }.into_view(),
            Self::Close => view! {
                <path d="M18 6 6 18"></path>
                <path d="m6 6 12 12"></path>
            }
            .into_view(),
            Self::Ellipsis => view! {
                <circle cx="12" cy="12" r="1"></circle>
                <circle cx="19" cy="12" r="1"></circle>
                <circle cx="5" cy="12" r="1"></circle>
            }
            .into_view(),
            Self::PanelLeft => view! {
                <rect width="18" height="18" x="3" y="3" rx="2"></rect>
                <path d="M9 3v18"></path>
            }
            .into_view(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Dense icon for buttons and breadcrumb separators.
    Sm,
    /// Default icon.
    Md,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[component]
/// Inline SVG icon following the shared `data-ui-*` contract.
pub fn Icon(
    /// Glyph to draw.
    icon: IconName,
    /// Sizing token.
    #[prop(optional)]
    size: IconSize,
) -> impl IntoView {
    view! {
        <svg
            class="ui-icon"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.glyph()}
        </svg>
    }
}
