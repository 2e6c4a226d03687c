//! Shared panel-layout primitive library.
//!
//! The crate owns the context-free Leptos primitives for the sidebar shell
//! (chrome, breadcrumbs, overlays, tooltips, skeletons), a centralized inline
//! icon API, the polymorphic [`SlotOutlet`] forwarder, and the stable `data-ui-*`
//! DOM contract consumed by the CSS layers. Layout-aware components (the
//! sidebar panel itself, its trigger and rail) live in `layout_runtime`,
//! which composes these primitives with the layout state controller.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
mod slot;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    bool_token, merge_layout_class, Breadcrumb, BreadcrumbEllipsis, BreadcrumbItem, BreadcrumbLink,
    BreadcrumbList, BreadcrumbPage, BreadcrumbSeparator, CollapseMode, Collapsible,
    CollapsibleContent, CollapsibleTrigger, EdgeSide, MenuButtonSize, PanelSide, Separator,
    SeparatorOrientation, Sheet, SheetDescription, SheetFooter, SheetHeader, SheetTitle,
    SidebarContent, SidebarFooter, SidebarGroup, SidebarGroupContent, SidebarGroupLabel,
    SidebarHeader, SidebarInput, SidebarMenu, SidebarMenuBadge, SidebarMenuItem,
    SidebarMenuSkeleton, SidebarMenuSub, SidebarMenuSubItem, SidebarSeparator, SidebarVariant,
    Skeleton, Tooltip, TooltipContent, TooltipProvider, TooltipTrigger,
};
pub use slot::{render_slot, SlotChild, SlotElement, SlotOutlet, SlotProps, SlotTag};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Breadcrumb, BreadcrumbEllipsis, BreadcrumbItem, BreadcrumbLink, BreadcrumbList,
        BreadcrumbPage, BreadcrumbSeparator, CollapseMode, Collapsible, CollapsibleContent,
        CollapsibleTrigger, EdgeSide, Icon, IconName, IconSize, MenuButtonSize, PanelSide,
        Separator, SeparatorOrientation, Sheet, SheetDescription, SheetFooter, SheetHeader,
        SheetTitle, SidebarContent, SidebarFooter, SidebarGroup, SidebarGroupContent,
        SidebarGroupLabel, SidebarHeader, SidebarInput, SidebarMenu, SidebarMenuBadge,
        SidebarMenuItem, SidebarMenuSkeleton, SidebarMenuSub, SidebarMenuSubItem,
        SidebarSeparator, SidebarVariant, Skeleton, SlotChild, SlotElement, SlotOutlet, SlotProps,
        SlotTag, Tooltip, TooltipContent, TooltipProvider, TooltipTrigger,
    };
}
