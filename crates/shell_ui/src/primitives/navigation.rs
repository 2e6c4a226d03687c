use super::*;

use crate::slot::{render_slot, SlotChild, SlotProps};

#[component]
/// Breadcrumb landmark wrapping an ordered trail of page links.
pub fn Breadcrumb(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-breadcrumb", layout_class)
            aria-label="breadcrumb"
            data-ui-primitive="true"
            data-ui-kind="breadcrumb"
        >
            {children()}
        </nav>
    }
}

#[component]
/// Ordered list of breadcrumb entries.
pub fn BreadcrumbList(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <ol
            class=merge_layout_class("ui-breadcrumb-list", layout_class)
            data-ui-primitive="true"
            data-ui-kind="breadcrumb-list"
        >
            {children()}
        </ol>
    }
}

#[component]
/// Single breadcrumb entry.
pub fn BreadcrumbItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <li
            class=merge_layout_class("ui-breadcrumb-item", layout_class)
            data-ui-primitive="true"
            data-ui-kind="breadcrumb-item"
        >
            {children()}
        </li>
    }
}

#[component]
/// Breadcrumb link, optionally delegating its tag to a caller-supplied child.
pub fn BreadcrumbLink(
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Link target when rendering the default anchor.
    #[prop(optional, into)]
    href: Option<String>,
    /// Delegated child replacing the default anchor; the link's own class and
    /// contract attributes are merged into it.
    #[prop(optional)]
    as_child: Option<SlotChild>,
    /// Link label when rendering the default anchor.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let class = merge_layout_class("ui-breadcrumb-link", layout_class);
    match as_child {
        Some(child) => {
            let owner = SlotProps::new()
                .class(class)
                .attr("data-ui-primitive", "true")
                .attr("data-ui-kind", "breadcrumb-link");
            render_slot(owner, vec![child])
        }
        None => view! {
            <a
                class=class
                href=href
                data-ui-primitive="true"
                data-ui-kind="breadcrumb-link"
            >
                {children.map(|children| children())}
            </a>
        }
        .into_view(),
    }
}

#[component]
/// Current page marker terminating the breadcrumb trail.
pub fn BreadcrumbPage(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-breadcrumb-page", layout_class)
            role="link"
            aria-disabled="true"
            aria-current="page"
            data-ui-primitive="true"
            data-ui-kind="breadcrumb-page"
        >
            {children()}
        </span>
    }
}

#[component]
/// Decorative separator between breadcrumb entries; defaults to a chevron.
pub fn BreadcrumbSeparator(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <li
            class=merge_layout_class("ui-breadcrumb-separator", layout_class)
            role="presentation"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="breadcrumb-separator"
        >
            {match children {
                Some(children) => children().into_view(),
                None => view! { <Icon icon=IconName::ChevronRight size=IconSize::Sm /> }.into_view(),
            }}
        </li>
    }
}

#[component]
/// Placeholder for elided breadcrumb segments.
pub fn BreadcrumbEllipsis(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-breadcrumb-ellipsis", layout_class)
            role="presentation"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="breadcrumb-ellipsis"
        >
            <Icon icon=IconName::Ellipsis size=IconSize::Sm />
            <span data-ui-slot="sr-label">"More"</span>
        </span>
    }
}

#[derive(Clone, Copy)]
pub(crate) struct CollapsibleState {
    pub(crate) expanded: RwSignal<bool>,
}

fn use_collapsible() -> CollapsibleState {
    use_context::<CollapsibleState>()
        .expect("CollapsibleState not provided; wrap trigger and content in <Collapsible>")
}

#[component]
/// Disclosure container owning the expanded flag for its trigger and content.
pub fn Collapsible(
    /// Whether the section starts expanded.
    #[prop(optional)]
    default_open: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let expanded = create_rw_signal(default_open);
    provide_context(CollapsibleState { expanded });

    view! {
        <section
            class=merge_layout_class("ui-collapsible", layout_class)
            data-ui-primitive="true"
            data-ui-kind="collapsible"
            data-ui-state=move || if expanded.get() { "open" } else { "closed" }
        >
            {children()}
        </section>
    }
}

#[component]
/// Toggle for the enclosing [`Collapsible`], optionally delegating its tag.
pub fn CollapsibleTrigger(
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Delegated child replacing the default button; the toggle handler is
    /// merged in and fires unless the child declares its own click handler.
    #[prop(optional)]
    as_child: Option<SlotChild>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let state = use_collapsible();
    let expanded = state.expanded;
    let class = merge_layout_class("ui-collapsible-trigger", layout_class);

    match as_child {
        Some(child) => {
            let owner = SlotProps::new()
                .class(class)
                .attr("data-ui-primitive", "true")
                .attr("data-ui-kind", "collapsible-trigger")
                .on_click(Callback::new(move |_: MouseEvent| {
                    expanded.update(|open| *open = !*open);
                }));
            render_slot(owner, vec![child])
        }
        None => view! {
            <button
                type="button"
                class=class
                aria-expanded=move || bool_token(expanded.get())
                data-ui-primitive="true"
                data-ui-kind="collapsible-trigger"
                data-ui-state=move || if expanded.get() { "open" } else { "closed" }
                on:click=move |_| expanded.update(|open| *open = !*open)
            >
                {children.map(|children| children())}
            </button>
        }
        .into_view(),
    }
}

#[component]
/// Body of the enclosing [`Collapsible`], rendered only while expanded.
pub fn CollapsibleContent(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let state = use_collapsible();
    let expanded = state.expanded;
    let class = merge_layout_class("ui-collapsible-content", layout_class);

    view! {
        <Show when=move || expanded.get() fallback=|| ()>
            <div
                class=class.clone()
                data-ui-primitive="true"
                data-ui-kind="collapsible-content"
            >
                {children()}
            </div>
        </Show>
    }
}
