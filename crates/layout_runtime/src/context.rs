//! Layout provider and context wiring for the sidebar shell.
//!
//! This module owns the reducer container, the controlled-mode mirror, host
//! bootstrap (preference restore, breakpoint subscription, keyboard shortcut),
//! and the dispatch callback. UI composition stays in [`crate::components`].

use browser_host::BreakpointWatch;
use leptos::*;
use shell_ui::TooltipProvider;

use crate::{
    model::{LayoutModel, PanelState, ResponsiveMode},
    reducer::{reduce_layout, LayoutAction, LayoutEffect},
};

/// Key paired with the platform modifier to toggle the panel.
pub const PANEL_TOGGLE_KEY: &str = "b";

/// Whether a keydown matches the global panel toggle chord (meta or ctrl
/// plus [`PANEL_TOGGLE_KEY`]). Matching is exact: an uppercase `B` means
/// shift is held and does not toggle.
fn is_toggle_shortcut(key: &str, meta: bool, ctrl: bool) -> bool {
    (meta || ctrl) && key == PANEL_TOGGLE_KEY
}

#[derive(Clone, Copy)]
/// Leptos context for reading layout state and dispatching [`LayoutAction`]
/// values from arbitrarily deep descendants.
pub struct LayoutContext {
    model: RwSignal<LayoutModel>,
    controlled_open: StoredValue<Option<Signal<bool>>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<LayoutAction>,
}

impl LayoutContext {
    /// Whether the viewport is currently in the mobile regime (reactive).
    pub fn is_mobile(&self) -> bool {
        self.model.with(|model| model.mode == ResponsiveMode::Mobile)
    }

    /// Deduplicated form of [`LayoutContext::is_mobile`] for branching
    /// renders. A plain `is_mobile()` read tracks the whole model signal, so
    /// a branch built on it would rebuild (and reset any per-mount state in)
    /// its subtree on every open-flag change; the memo notifies only on
    /// actual breakpoint crossings.
    pub fn mobile_memo(&self) -> Memo<bool> {
        let model = self.model;
        create_memo(move |_| model.with(|model| model.mode == ResponsiveMode::Mobile))
    }

    /// Current desktop open flag (reactive). In controlled mode this reflects
    /// the externally supplied signal, never an internal copy.
    pub fn open(&self) -> bool {
        match self.controlled_open.get_value() {
            Some(open) => open.get(),
            None => self.model.with(|model| model.desktop_open),
        }
    }

    /// Current mobile overlay flag (reactive).
    pub fn mobile_open(&self) -> bool {
        self.model.with(|model| model.mobile_open)
    }

    /// Panel presentation derived from [`LayoutContext::open`] (reactive).
    pub fn panel_state(&self) -> PanelState {
        if self.open() {
            PanelState::Expanded
        } else {
            PanelState::Collapsed
        }
    }

    /// Flips whichever panel the current responsive mode shows.
    pub fn toggle(&self) {
        self.dispatch.call(LayoutAction::Toggle);
    }

    /// Sets the desktop open flag.
    pub fn set_open(&self, open: bool) {
        self.dispatch.call(LayoutAction::SetOpen(open));
    }

    /// Applies a pure updater to the desktop open flag.
    ///
    /// The updater runs against the current value (the external signal in
    /// controlled mode) before dispatch, so capturing closures are fine even
    /// though the action itself carries a plain value.
    pub fn update_open(&self, updater: impl FnOnce(bool) -> bool) {
        self.dispatch
            .call(LayoutAction::SetOpen(updater(self.open_untracked())));
    }

    /// Sets the mobile overlay flag.
    pub fn set_mobile_open(&self, open: bool) {
        self.dispatch.call(LayoutAction::SetMobileOpen(open));
    }

    fn open_untracked(&self) -> bool {
        match self.controlled_open.get_value() {
            Some(open) => open.get_untracked(),
            None => self.model.with_untracked(|model| model.desktop_open),
        }
    }
}

#[component]
/// Provides [`LayoutContext`] to descendant components and boots host wiring.
///
/// On mount the provider restores the persisted open preference, measures the
/// viewport once, subscribes to breakpoint crossings, and installs the global
/// modifier+B toggle shortcut; every listener is released on unmount.
/// Supplying `open` puts the controller in controlled mode: the provider
/// never mutates the flag itself and reports requested values through
/// `on_open_change`.
pub fn LayoutProvider(
    /// Initial open flag used when no persisted preference exists.
    #[prop(optional)]
    default_open: Option<bool>,
    /// Externally owned open signal enabling controlled mode.
    #[prop(optional, into)]
    open: Option<Signal<bool>>,
    /// Receives requested open values; required for controlled mode to make
    /// progress, optional otherwise.
    #[prop(optional)]
    on_open_change: Option<Callback<bool>>,
    /// Hover delay applied to collapsed-rail tooltips, in milliseconds.
    #[prop(default = 0)]
    tooltip_delay_ms: u64,
    children: Children,
) -> impl IntoView {
    let restored = browser_host::load_panel_preference();
    let mode = ResponsiveMode::from_mobile(browser_host::viewport_is_mobile());
    let model = create_rw_signal(LayoutModel::boot(mode, restored, default_open, open.is_some()));
    let controlled_open = store_value(open);

    let dispatch = Callback::new(move |action: LayoutAction| {
        let mut next = model.get_untracked();
        // Controlled mode: refresh the mirror so transitions derived from the
        // current value (toggle, updaters) see what the owner sees.
        if let Some(open) = controlled_open.get_value() {
            next.desktop_open = open.get_untracked();
        }
        let effects = reduce_layout(&mut next, action);
        if next != model.get_untracked() {
            model.set(next);
        }
        for effect in effects {
            match effect {
                LayoutEffect::PersistOpen(open) => {
                    if let Err(err) = browser_host::store_panel_preference(open) {
                        logging::warn!("panel preference write failed: {err}");
                    }
                }
                LayoutEffect::NotifyOpenChange(open) => {
                    if let Some(on_open_change) = on_open_change {
                        on_open_change.call(open);
                    }
                }
            }
        }
    });

    let layout = LayoutContext {
        model,
        controlled_open,
        dispatch,
    };
    provide_context(layout);

    if let Some(watch) = BreakpointWatch::install(move |is_mobile| {
        dispatch.call(LayoutAction::ViewportChanged(ResponsiveMode::from_mobile(
            is_mobile,
        )));
    }) {
        on_cleanup(move || watch.remove());
    }

    let shortcut = window_event_listener(ev::keydown, move |event| {
        if is_toggle_shortcut(&event.key(), event.meta_key(), event.ctrl_key()) {
            event.prevent_default();
            dispatch.call(LayoutAction::Toggle);
        }
    });
    on_cleanup(move || shortcut.remove());

    view! {
        <TooltipProvider delay_ms=tooltip_delay_ms>
            <div
                data-ui-primitive="true"
                data-ui-kind="layout-shell"
                data-ui-state=move || layout.panel_state().token()
            >
                {children()}
            </div>
        </TooltipProvider>
    }
}

/// Returns the current [`LayoutContext`].
///
/// # Panics
///
/// Panics if called outside [`LayoutProvider`].
pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>()
        .expect("LayoutContext not provided; wrap layout-aware components in <LayoutProvider>")
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn test_context(model: RwSignal<LayoutModel>) -> LayoutContext {
        LayoutContext {
            model,
            controlled_open: store_value(None),
            dispatch: Callback::new(move |action| {
                let mut next = model.get_untracked();
                let _ = reduce_layout(&mut next, action);
                model.set(next);
            }),
        }
    }

    #[test]
    fn mobile_memo_notifies_only_on_breakpoint_crossings() {
        let runtime = create_runtime();
        let model =
            create_rw_signal(LayoutModel::boot(ResponsiveMode::Desktop, None, None, false));
        let layout = test_context(model);
        let mobile = layout.mobile_memo();

        let runs = Rc::new(Cell::new(0));
        let counted = Rc::clone(&runs);
        create_isomorphic_effect(move |_| {
            mobile.get();
            counted.set(counted.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        // Open-flag churn recomputes the memo but must not notify readers.
        layout.toggle();
        layout.set_mobile_open(true);
        assert_eq!(runs.get(), 1);

        layout
            .dispatch
            .call(LayoutAction::ViewportChanged(ResponsiveMode::Mobile));
        assert_eq!(runs.get(), 2);

        runtime.dispose();
    }

    #[test]
    fn update_open_accepts_capturing_updaters() {
        let runtime = create_runtime();
        let model =
            create_rw_signal(LayoutModel::boot(ResponsiveMode::Desktop, None, None, false));
        let layout = test_context(model);

        let forced = false;
        layout.update_open(move |_| forced);
        assert!(!model.with_untracked(|model| model.desktop_open));

        layout.update_open(|open| !open);
        assert!(model.with_untracked(|model| model.desktop_open));

        runtime.dispose();
    }

    #[test]
    fn toggle_chord_requires_a_platform_modifier() {
        assert!(is_toggle_shortcut("b", true, false));
        assert!(is_toggle_shortcut("b", false, true));
        assert!(is_toggle_shortcut("b", true, true));
        assert!(!is_toggle_shortcut("b", false, false));
    }

    #[test]
    fn toggle_chord_matches_the_key_exactly() {
        assert!(!is_toggle_shortcut("B", true, false));
        assert!(!is_toggle_shortcut("a", true, false));
        assert!(!is_toggle_shortcut("", true, false));
    }
}
