use super::*;

#[component]
/// Sticky top region of a sidebar panel.
pub fn SidebarHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-sidebar-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar-header"
            data-ui-slot="header"
        >
            {children()}
        </div>
    }
}

#[component]
/// Sticky bottom region of a sidebar panel.
pub fn SidebarFooter(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-sidebar-footer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar-footer"
            data-ui-slot="footer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Scrollable middle region between a sidebar's header and footer.
pub fn SidebarContent(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-sidebar-content", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar-content"
            data-ui-slot="content"
        >
            {children()}
        </div>
    }
}

#[component]
/// Labeled section inside sidebar content.
pub fn SidebarGroup(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-sidebar-group", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar-group"
        >
            {children()}
        </div>
    }
}

#[component]
/// Heading for a sidebar group; fades out in icon-collapsed rails.
pub fn SidebarGroupLabel(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-sidebar-group-label", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar-group-label"
        >
            {children()}
        </div>
    }
}

#[component]
/// Body of a sidebar group.
pub fn SidebarGroupContent(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-sidebar-group-content", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar-group-content"
        >
            {children()}
        </div>
    }
}

#[component]
/// Vertical list of menu rows.
pub fn SidebarMenu(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <ul
            class=merge_layout_class("ui-sidebar-menu", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar-menu"
        >
            {children()}
        </ul>
    }
}

#[component]
/// One row in a [`SidebarMenu`].
pub fn SidebarMenuItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <li
            class=merge_layout_class("ui-sidebar-menu-item", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar-menu-item"
        >
            {children()}
        </li>
    }
}

#[component]
/// Trailing count or status badge on a menu row.
pub fn SidebarMenuBadge(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-sidebar-menu-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar-menu-badge"
            aria-hidden="true"
        >
            {children()}
        </span>
    }
}

#[component]
/// Loading placeholder shaped like a menu row.
pub fn SidebarMenuSkeleton(
    /// Render a square icon placeholder before the text bar.
    #[prop(optional)]
    show_icon: bool,
    /// Width of the text bar as a percentage of the row. The default reads as
    /// a typical label length without jittering between renders.
    #[prop(default = 65)]
    text_width_percent: u8,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-sidebar-menu-skeleton", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar-menu-skeleton"
        >
            <Show when=move || show_icon fallback=|| ()>
                <Skeleton layout_class="ui-sidebar-menu-skeleton-icon" />
            </Show>
            <Skeleton
                layout_class="ui-sidebar-menu-skeleton-text"
                style=format!("max-width: {text_width_percent}%")
            />
        </div>
    }
}

#[component]
/// Indented submenu list under a menu row.
pub fn SidebarMenuSub(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <ul
            class=merge_layout_class("ui-sidebar-menu-sub", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar-menu-sub"
        >
            {children()}
        </ul>
    }
}

#[component]
/// One row in a [`SidebarMenuSub`].
pub fn SidebarMenuSubItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <li
            class=merge_layout_class("ui-sidebar-menu-sub-item", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar-menu-sub-item"
        >
            {children()}
        </li>
    }
}

#[component]
/// Rule between sidebar sections.
pub fn SidebarSeparator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-sidebar-separator", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar-separator"
        >
            <Separator />
        </div>
    }
}

#[component]
/// Text input styled for sidebar headers, e.g. a filter box.
pub fn SidebarInput(
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class=merge_layout_class("ui-sidebar-input", layout_class)
            placeholder=placeholder
            data-ui-primitive="true"
            data-ui-kind="sidebar-input"
        />
    }
}
