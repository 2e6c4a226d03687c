//! Pure layout reducer.
//!
//! All state transitions funnel through [`reduce_layout`]: it mutates the
//! model in place and returns the side effects the provider must run after
//! committing the new model. Persistence and controlled-mode notification
//! never happen inside the reducer, which keeps every transition testable
//! without a browser.

use crate::model::{LayoutModel, ResponsiveMode};

/// Requested layout transition.
#[derive(Debug, Clone, Copy)]
pub enum LayoutAction {
    /// Flip whichever panel the current responsive mode shows.
    Toggle,
    /// Set the desktop open flag to an explicit value.
    SetOpen(bool),
    /// Apply a pure updater to the current desktop open flag.
    UpdateOpen(fn(bool) -> bool),
    /// Set the mobile overlay flag.
    SetMobileOpen(bool),
    /// Viewport crossed the responsive breakpoint.
    ViewportChanged(ResponsiveMode),
}

/// Side effect emitted by the reducer, run by the provider after the model
/// commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEffect {
    /// Write the open preference to the durable host record.
    PersistOpen(bool),
    /// Report the requested open value to the controlled-mode owner.
    NotifyOpenChange(bool),
}

/// Applies `action` to `model`, returning the effects to run.
///
/// Controlled-mode desktop transitions leave the model untouched: the owner
/// receives a [`LayoutEffect::NotifyOpenChange`] and is expected to feed the
/// new value back through its signal. The preference record is written either
/// way. Mobile transitions are always self-owned and never persisted.
pub fn reduce_layout(model: &mut LayoutModel, action: LayoutAction) -> Vec<LayoutEffect> {
    match action {
        LayoutAction::Toggle => match model.mode {
            ResponsiveMode::Mobile => {
                model.mobile_open = !model.mobile_open;
                Vec::new()
            }
            ResponsiveMode::Desktop => request_desktop_open(model, !model.desktop_open),
        },
        LayoutAction::SetOpen(value) => request_desktop_open(model, value),
        LayoutAction::UpdateOpen(updater) => request_desktop_open(model, updater(model.desktop_open)),
        LayoutAction::SetMobileOpen(value) => {
            model.mobile_open = value;
            Vec::new()
        }
        LayoutAction::ViewportChanged(mode) => {
            // Only the mode changes; both open flags retain their last value
            // across crossings.
            model.mode = mode;
            Vec::new()
        }
    }
}

fn request_desktop_open(model: &mut LayoutModel, value: bool) -> Vec<LayoutEffect> {
    if model.controlled {
        return vec![
            LayoutEffect::NotifyOpenChange(value),
            LayoutEffect::PersistOpen(value),
        ];
    }
    model.desktop_open = value;
    vec![LayoutEffect::PersistOpen(value)]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn desktop_model() -> LayoutModel {
        LayoutModel::boot(ResponsiveMode::Desktop, None, None, false)
    }

    #[test]
    fn toggle_on_desktop_flips_open_and_persists() {
        let mut model = desktop_model();
        assert!(model.desktop_open);

        let effects = reduce_layout(&mut model, LayoutAction::Toggle);
        assert!(!model.desktop_open);
        assert_eq!(effects, vec![LayoutEffect::PersistOpen(false)]);

        let effects = reduce_layout(&mut model, LayoutAction::Toggle);
        assert!(model.desktop_open);
        assert_eq!(effects, vec![LayoutEffect::PersistOpen(true)]);
    }

    #[test]
    fn toggle_on_mobile_flips_only_the_overlay() {
        let mut model = LayoutModel::boot(ResponsiveMode::Mobile, None, None, false);
        let desktop_open_before = model.desktop_open;

        let effects = reduce_layout(&mut model, LayoutAction::Toggle);
        assert!(model.mobile_open);
        assert_eq!(model.desktop_open, desktop_open_before);
        assert_eq!(effects, Vec::new());

        reduce_layout(&mut model, LayoutAction::Toggle);
        assert!(!model.mobile_open);
    }

    #[test]
    fn controlled_toggle_mutates_nothing_and_reports_intent() {
        let mut model = LayoutModel::boot(ResponsiveMode::Desktop, None, Some(true), true);
        let before = model;

        let effects = reduce_layout(&mut model, LayoutAction::Toggle);
        assert_eq!(model, before);
        assert_eq!(
            effects,
            vec![
                LayoutEffect::NotifyOpenChange(false),
                LayoutEffect::PersistOpen(false),
            ]
        );
    }

    #[test]
    fn set_open_accepts_explicit_values_and_updaters() {
        let mut model = desktop_model();

        let effects = reduce_layout(&mut model, LayoutAction::SetOpen(false));
        assert!(!model.desktop_open);
        assert_eq!(effects, vec![LayoutEffect::PersistOpen(false)]);

        let effects = reduce_layout(&mut model, LayoutAction::UpdateOpen(|open| !open));
        assert!(model.desktop_open);
        assert_eq!(effects, vec![LayoutEffect::PersistOpen(true)]);
    }

    #[test]
    fn set_open_targets_the_desktop_flag_even_on_mobile() {
        let mut model = LayoutModel::boot(ResponsiveMode::Mobile, None, None, false);

        reduce_layout(&mut model, LayoutAction::SetOpen(false));
        assert!(!model.desktop_open);
        assert!(!model.mobile_open);
    }

    #[test]
    fn set_mobile_open_is_ephemeral() {
        let mut model = LayoutModel::boot(ResponsiveMode::Mobile, None, None, false);

        let effects = reduce_layout(&mut model, LayoutAction::SetMobileOpen(true));
        assert!(model.mobile_open);
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn breakpoint_crossing_retains_both_open_flags() {
        let mut model = LayoutModel::boot(ResponsiveMode::Mobile, Some(false), None, false);
        reduce_layout(&mut model, LayoutAction::SetMobileOpen(true));

        let effects = reduce_layout(
            &mut model,
            LayoutAction::ViewportChanged(ResponsiveMode::Desktop),
        );
        assert_eq!(model.mode, ResponsiveMode::Desktop);
        assert!(model.mobile_open);
        assert!(!model.desktop_open);
        assert_eq!(effects, Vec::new());

        reduce_layout(
            &mut model,
            LayoutAction::ViewportChanged(ResponsiveMode::Mobile),
        );
        assert!(model.mobile_open);
    }

    #[test]
    fn repeated_viewport_reports_are_no_ops() {
        let mut model = desktop_model();
        let before = model;
        reduce_layout(
            &mut model,
            LayoutAction::ViewportChanged(ResponsiveMode::Desktop),
        );
        assert_eq!(model, before);
    }

    #[test]
    fn narrow_viewport_toggle_leaves_desktop_state_alone() {
        // Viewport at 500px: mode boots Mobile, toggle opens the overlay.
        let mut model = LayoutModel::boot(
            ResponsiveMode::from_mobile(500 < 768),
            Some(false),
            None,
            false,
        );
        assert_eq!(model.mode, ResponsiveMode::Mobile);

        reduce_layout(&mut model, LayoutAction::Toggle);
        assert!(model.mobile_open);
        assert!(!model.desktop_open);
    }
}
