//! Shared chrome, overlay, navigation, and data-display primitives.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod data_display;
mod navigation;
mod overlays;
mod shell;

pub use data_display::{Separator, Skeleton};
pub use navigation::{
    Breadcrumb, BreadcrumbEllipsis, BreadcrumbItem, BreadcrumbLink, BreadcrumbList,
    BreadcrumbPage, BreadcrumbSeparator, Collapsible, CollapsibleContent, CollapsibleTrigger,
};
pub use overlays::{
    Sheet, SheetDescription, SheetFooter, SheetHeader, SheetTitle, Tooltip, TooltipContent,
    TooltipProvider, TooltipTrigger,
};
pub use shell::{
    SidebarContent, SidebarFooter, SidebarGroup, SidebarGroupContent, SidebarGroupLabel,
    SidebarHeader, SidebarInput, SidebarMenu, SidebarMenuBadge, SidebarMenuItem,
    SidebarMenuSkeleton, SidebarMenuSub, SidebarMenuSubItem, SidebarSeparator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Horizontal edge a docked panel attaches to.
pub enum PanelSide {
    /// Docked to the left edge.
    Left,
    /// Docked to the right edge.
    Right,
}

impl Default for PanelSide {
    fn default() -> Self {
        Self::Left
    }
}

impl PanelSide {
    /// DOM contract token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// The sheet edge matching this panel side.
    pub fn into_edge(self) -> EdgeSide {
        match self {
            Self::Left => EdgeSide::Left,
            Self::Right => EdgeSide::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Viewport edge an overlay sheet slides in from.
pub enum EdgeSide {
    /// Slides down from the top edge.
    Top,
    /// Slides in from the right edge.
    Right,
    /// Slides up from the bottom edge.
    Bottom,
    /// Slides in from the left edge.
    Left,
}

impl Default for EdgeSide {
    fn default() -> Self {
        Self::Right
    }
}

impl EdgeSide {
    /// DOM contract token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual variants for the docked sidebar panel.
pub enum SidebarVariant {
    /// Full-height docked panel.
    Standard,
    /// Inset card floating over the content background.
    Floating,
    /// Panel sharing the inset content surface.
    Inset,
}

impl Default for SidebarVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl SidebarVariant {
    /// DOM contract token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Floating => "floating",
            Self::Inset => "inset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How the desktop sidebar collapses.
pub enum CollapseMode {
    /// Collapses fully off-canvas.
    Offcanvas,
    /// Collapses to an icon rail.
    Icon,
    /// Never collapses.
    None,
}

impl Default for CollapseMode {
    fn default() -> Self {
        Self::Offcanvas
    }
}

impl CollapseMode {
    /// DOM contract token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Offcanvas => "offcanvas",
            Self::Icon => "icon",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Separator orientation tokens.
pub enum SeparatorOrientation {
    /// Horizontal rule.
    Horizontal,
    /// Vertical rule.
    Vertical,
}

impl Default for SeparatorOrientation {
    fn default() -> Self {
        Self::Horizontal
    }
}

impl SeparatorOrientation {
    /// DOM contract token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Sizing tokens for sidebar menu buttons.
pub enum MenuButtonSize {
    /// Dense row.
    Sm,
    /// Default row.
    Md,
    /// Tall row for prominent entries.
    Lg,
}

impl Default for MenuButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl MenuButtonSize {
    /// DOM contract token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Joins a primitive's base class with an optional caller layout class.
pub fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

/// Boolean token for `data-ui-*` attributes.
pub fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_merges_only_when_present() {
        assert_eq!(merge_layout_class("ui-sheet", None), "ui-sheet");
        assert_eq!(merge_layout_class("ui-sheet", Some("")), "ui-sheet");
        assert_eq!(
            merge_layout_class("ui-sheet", Some("site-nav")),
            "ui-sheet site-nav"
        );
    }

    #[test]
    fn panel_side_maps_onto_matching_sheet_edge() {
        assert_eq!(PanelSide::Left.into_edge(), EdgeSide::Left);
        assert_eq!(PanelSide::Right.into_edge(), EdgeSide::Right);
    }
}
