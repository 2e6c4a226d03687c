//! Layout-aware sidebar components.
//!
//! These compose the context-free `shell_ui` primitives with [`LayoutContext`]
//! state: the panel itself swaps between a docked desktop rendering and a
//! mobile overlay sheet, and the trigger/rail/menu-button pieces read or
//! mutate the shared layout state directly.

use leptos::ev::MouseEvent;
use leptos::*;
use shell_ui::{
    bool_token, merge_layout_class, render_slot, CollapseMode, EdgeSide, Icon, IconName, IconSize,
    MenuButtonSize, PanelSide, Sheet, SidebarVariant, SlotChild, SlotProps, Tooltip,
    TooltipContent, TooltipTrigger,
};

use crate::context::use_layout;
use crate::model::PanelState;

#[component]
/// The navigation panel.
///
/// Desktop renders a docked panel whose `data-ui-state` and
/// `data-ui-collapsible` attributes drive the CSS collapse treatment; mobile
/// renders the same children inside an edge [`Sheet`] bound to the layout's
/// overlay flag. `CollapseMode::None` short-circuits to a static panel with
/// no layout wiring at all.
pub fn Sidebar(
    /// Edge the panel docks to.
    #[prop(optional)]
    side: PanelSide,
    /// Visual variant token.
    #[prop(optional)]
    variant: SidebarVariant,
    /// Collapse treatment on desktop.
    #[prop(optional)]
    collapse: CollapseMode,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let class = merge_layout_class("ui-sidebar", layout_class);

    if collapse == CollapseMode::None {
        return view! {
            <aside
                class=class
                data-ui-primitive="true"
                data-ui-kind="sidebar"
                data-ui-side=side.token()
                data-ui-variant=variant.token()
                data-ui-collapsible=collapse.token()
            >
                <div data-ui-slot="inner">{children()}</div>
            </aside>
        }
        .into_view();
    }

    let layout = use_layout();
    let is_mobile = layout.mobile_memo();

    (move || {
        if is_mobile.get() {
            let children = children.clone();
            view! {
                <Sheet
                    open=Signal::derive(move || layout.mobile_open())
                    on_open_change=Callback::new(move |open| layout.set_mobile_open(open))
                    side=side.into_edge()
                    layout_class="ui-sidebar-sheet"
                    aria_label="Navigation"
                >
                    <div data-ui-slot="inner">{children()}</div>
                </Sheet>
            }
            .into_view()
        } else {
            let children = children.clone();
            view! {
                <div
                    class=class.clone()
                    data-ui-primitive="true"
                    data-ui-kind="sidebar"
                    data-ui-side=side.token()
                    data-ui-variant=variant.token()
                    data-ui-state=move || layout.panel_state().token()
                    data-ui-collapsible=move || match layout.panel_state() {
                        PanelState::Collapsed => collapse.token(),
                        PanelState::Expanded => "",
                    }
                >
                    <div data-ui-slot="gap" aria-hidden="true"></div>
                    <div data-ui-slot="container">
                        <div data-ui-slot="inner">{children()}</div>
                    </div>
                </div>
            }
            .into_view()
        }
    })
    .into_view()
}

#[component]
/// Button toggling the panel for the current responsive mode.
pub fn SidebarTrigger(
    /// Extra handler run before the layout toggle.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let layout = use_layout();

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-sidebar-trigger", layout_class)
            aria-label="Toggle sidebar"
            data-ui-primitive="true"
            data-ui-kind="sidebar-trigger"
            on:click=move |event| {
                if let Some(on_click) = on_click {
                    on_click.call(event);
                }
                layout.toggle();
            }
        >
            <Icon icon=IconName::PanelLeft size=IconSize::Sm />
        </button>
    }
}

#[component]
/// Thin grab strip along the panel edge; clicking toggles the panel.
///
/// Kept out of the tab order since [`SidebarTrigger`] and the keyboard chord
/// already cover non-pointer access.
pub fn SidebarRail(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    let layout = use_layout();

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-sidebar-rail", layout_class)
            aria-label="Toggle sidebar"
            tabindex=-1
            data-ui-primitive="true"
            data-ui-kind="sidebar-rail"
            on:click=move |_| layout.toggle()
        ></button>
    }
}

#[component]
/// Main content region beside the panel.
pub fn SidebarInset(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <main
            class=merge_layout_class("ui-sidebar-inset", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar-inset"
        >
            {children()}
        </main>
    }
}

#[component]
/// Primary interactive row in a sidebar menu.
///
/// Supports tag delegation through `as_child` (a navigation row renders as
/// its own anchor rather than a button wrapping one) and an optional tooltip
/// label that only shows while the panel is icon-collapsed on desktop.
pub fn SidebarMenuButton(
    /// Marks the row as the current selection.
    #[prop(optional, into)]
    is_active: MaybeSignal<bool>,
    /// Row sizing token.
    #[prop(optional)]
    size: MenuButtonSize,
    /// Tooltip label shown while the panel is collapsed to an icon rail.
    #[prop(optional, into)]
    tooltip: Option<String>,
    /// Delegated child replacing the default button.
    #[prop(optional)]
    as_child: Option<SlotChild>,
    /// Click handler for the default button; ignored when a delegated child
    /// declares its own.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let layout = use_layout();
    let class = merge_layout_class("ui-sidebar-menu-button", layout_class);

    let row = match as_child {
        Some(child) => {
            let class = class.clone();
            // Re-rendered per active-state change so the merged attributes
            // stay current on the delegated tag.
            (move || {
                let mut owner = SlotProps::new()
                    .class(class.clone())
                    .attr("data-ui-primitive", "true")
                    .attr("data-ui-kind", "sidebar-menu-button")
                    .attr("data-ui-size", size.token())
                    .attr("data-ui-active", bool_token(is_active.get()));
                if let Some(on_click) = on_click {
                    owner = owner.on_click(on_click);
                }
                render_slot(owner, vec![child.clone()])
            })
            .into_view()
        }
        None => view! {
            <button
                type="button"
                class=class
                data-ui-primitive="true"
                data-ui-kind="sidebar-menu-button"
                data-ui-size=size.token()
                data-ui-active=move || bool_token(is_active.get())
                on:click=move |event| {
                    if let Some(on_click) = on_click {
                        on_click.call(event);
                    }
                }
            >
                {children.map(|children| children())}
            </button>
        }
        .into_view(),
    };

    match tooltip {
        Some(label) => {
            let hidden = Signal::derive(move || {
                layout.panel_state() == PanelState::Expanded || layout.is_mobile()
            });
            view! {
                <Tooltip>
                    <TooltipTrigger>{row}</TooltipTrigger>
                    <TooltipContent side=EdgeSide::Right hidden=hidden>
                        {label.clone()}
                    </TooltipContent>
                </Tooltip>
            }
            .into_view()
        }
        None => row,
    }
}

#[component]
/// Interactive row in an indented submenu.
pub fn SidebarMenuSubButton(
    /// Marks the row as the current selection.
    #[prop(optional, into)]
    is_active: MaybeSignal<bool>,
    /// Delegated child replacing the default button.
    #[prop(optional)]
    as_child: Option<SlotChild>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = merge_layout_class("ui-sidebar-menu-sub-button", layout_class);

    match as_child {
        Some(child) => {
            let class = class.clone();
            (move || {
                let owner = SlotProps::new()
                    .class(class.clone())
                    .attr("data-ui-primitive", "true")
                    .attr("data-ui-kind", "sidebar-menu-sub-button")
                    .attr("data-ui-active", bool_token(is_active.get()));
                render_slot(owner, vec![child.clone()])
            })
            .into_view()
        }
        None => view! {
            <button
                type="button"
                class=class
                data-ui-primitive="true"
                data-ui-kind="sidebar-menu-sub-button"
                data-ui-active=move || bool_token(is_active.get())
            >
                {children.map(|children| children())}
            </button>
        }
        .into_view(),
    }
}
