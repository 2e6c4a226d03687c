use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};

use super::*;

#[component]
/// Edge-docked overlay panel with backdrop, escape dismissal, and a built-in
/// close button.
///
/// Visibility is owned by the caller: `open` drives rendering and every
/// dismissal path (backdrop click, escape, close button) reports through
/// `on_open_change` rather than mutating anything locally. Focus trapping is
/// deliberately left to the host page.
pub fn Sheet(
    /// Whether the sheet is visible.
    #[prop(into)]
    open: MaybeSignal<bool>,
    /// Called with `false` on every dismissal gesture.
    #[prop(optional)]
    on_open_change: Option<Callback<bool>>,
    /// Edge the panel docks to.
    #[prop(optional)]
    side: EdgeSide,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Accessible name for the dialog.
    #[prop(optional, into)]
    aria_label: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let close = move || {
        if let Some(on_open_change) = on_open_change {
            on_open_change.call(false);
        }
    };

    let escape_listener = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
        if ev.key() == "Escape" && open.get_untracked() {
            close();
        }
    });
    on_cleanup(move || escape_listener.remove());

    let class = merge_layout_class("ui-sheet", layout_class);
    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class=class.clone()
                role="dialog"
                aria-modal="true"
                aria-label=aria_label.clone()
                data-ui-primitive="true"
                data-ui-kind="sheet"
                data-ui-side=side.token()
            >
                <div
                    data-ui-slot="backdrop"
                    aria-hidden="true"
                    on:mousedown=move |_| close()
                ></div>
                <aside
                    data-ui-slot="panel"
                    on:mousedown=|ev: MouseEvent| ev.stop_propagation()
                >
                    <button
                        type="button"
                        data-ui-slot="close"
                        aria-label="Close"
                        on:click=move |_| close()
                    >
                        <Icon icon=IconName::Close size=IconSize::Sm />
                    </button>
                    {children()}
                </aside>
            </div>
        </Show>
    }
}

#[component]
/// Leading region of a sheet panel.
pub fn SheetHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-sheet-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sheet-header"
        >
            {children()}
        </div>
    }
}

#[component]
/// Trailing action region of a sheet panel.
pub fn SheetFooter(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-sheet-footer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sheet-footer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Sheet title line.
pub fn SheetTitle(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <h2
            class=merge_layout_class("ui-sheet-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sheet-title"
        >
            {children()}
        </h2>
    }
}

#[component]
/// Supporting description below a sheet title.
pub fn SheetDescription(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <p
            class=merge_layout_class("ui-sheet-description", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sheet-description"
        >
            {children()}
        </p>
    }
}

#[derive(Clone, Copy)]
struct TooltipConfig {
    delay_ms: u64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self { delay_ms: 0 }
    }
}

#[derive(Clone, Copy)]
struct TooltipState {
    visible: RwSignal<bool>,
    delay_ms: u64,
    pending: StoredValue<Option<TimeoutHandle>>,
}

#[component]
/// Configures hover delay for every [`Tooltip`] in its subtree.
///
/// Tooltips outside a provider fall back to an immediate (zero delay)
/// configuration rather than failing.
pub fn TooltipProvider(
    /// Milliseconds a trigger must stay hovered before its tooltip shows.
    #[prop(default = 0)]
    delay_ms: u64,
    children: Children,
) -> impl IntoView {
    provide_context(TooltipConfig { delay_ms });
    view! {
        <div data-ui-primitive="true" data-ui-kind="tooltip-provider">
            {children()}
        </div>
    }
}

#[component]
/// Pairs one [`TooltipTrigger`] with one [`TooltipContent`].
pub fn Tooltip(children: Children) -> impl IntoView {
    let config = use_context::<TooltipConfig>().unwrap_or_default();
    provide_context(TooltipState {
        visible: create_rw_signal(false),
        delay_ms: config.delay_ms,
        pending: store_value(None),
    });

    view! {
        <span data-ui-primitive="true" data-ui-kind="tooltip">
            {children()}
        </span>
    }
}

fn use_tooltip() -> TooltipState {
    use_context::<TooltipState>()
        .expect("TooltipState not provided; wrap trigger and content in <Tooltip>")
}

#[component]
/// Hover/focus target revealing the sibling [`TooltipContent`].
pub fn TooltipTrigger(children: Children) -> impl IntoView {
    let state = use_tooltip();

    let show = move || {
        if state.delay_ms == 0 {
            state.visible.set(true);
        } else if let Ok(handle) = set_timeout_with_handle(
            move || state.visible.set(true),
            Duration::from_millis(state.delay_ms),
        ) {
            state.pending.set_value(Some(handle));
        }
    };
    let hide = move || {
        if let Some(handle) = state.pending.get_value() {
            handle.clear();
            state.pending.set_value(None);
        }
        state.visible.set(false);
    };

    view! {
        <span
            data-ui-primitive="true"
            data-ui-kind="tooltip-trigger"
            on:mouseenter=move |_: MouseEvent| show()
            on:mouseleave=move |_: MouseEvent| hide()
            on:focusin=move |_: FocusEvent| show()
            on:focusout=move |_: FocusEvent| hide()
        >
            {children()}
        </span>
    }
}

#[component]
/// Floating label shown while its [`TooltipTrigger`] is hovered or focused.
pub fn TooltipContent(
    /// Edge of the trigger the label floats against.
    #[prop(optional)]
    side: EdgeSide,
    /// Suppresses the label even while hovered (e.g. when the sidebar is
    /// expanded and the row label is already visible).
    #[prop(optional, into)]
    hidden: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let state = use_tooltip();
    let class = merge_layout_class("ui-tooltip-content", layout_class);

    view! {
        <Show when=move || state.visible.get() && !hidden.get() fallback=|| ()>
            <div
                class=class.clone()
                role="tooltip"
                data-ui-primitive="true"
                data-ui-kind="tooltip-content"
                data-ui-side=side.token()
            >
                {children()}
            </div>
        </Show>
    }
}
