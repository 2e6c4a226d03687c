//! Layout state model for the sidebar shell.

/// Which responsive regime the viewport is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponsiveMode {
    /// Viewport at or above the mobile breakpoint.
    Desktop,
    /// Viewport below the mobile breakpoint.
    Mobile,
}

impl ResponsiveMode {
    /// Maps the host's boolean breakpoint probe onto a mode.
    pub fn from_mobile(is_mobile: bool) -> Self {
        if is_mobile {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Presentation state of the desktop panel, derived from the open flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Panel is open at full width.
    Expanded,
    /// Panel is closed (off-canvas or icon rail, per collapse mode).
    Collapsed,
}

impl PanelState {
    /// DOM contract token for `data-ui-state`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Collapsed => "collapsed",
        }
    }
}

/// Complete layout state owned by the provider.
///
/// `desktop_open` and `mobile_open` are independent: collapsing the docked
/// panel never touches the mobile sheet and vice versa. In controlled mode the
/// `desktop_open` field is a mirror of the caller's signal; the reducer treats
/// it as read-only and reports intent through effects instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutModel {
    /// Current responsive regime.
    pub mode: ResponsiveMode,
    /// Whether the docked desktop panel is open.
    pub desktop_open: bool,
    /// Whether the mobile overlay sheet is open.
    pub mobile_open: bool,
    /// Whether the open flag is owned by the caller rather than the reducer.
    pub controlled: bool,
}

impl LayoutModel {
    /// Seeds the model at provider boot.
    ///
    /// The open flag resolves restored preference first, then the caller's
    /// default, then open. The mobile sheet always boots closed.
    pub fn boot(
        mode: ResponsiveMode,
        restored: Option<bool>,
        default_open: Option<bool>,
        controlled: bool,
    ) -> Self {
        Self {
            mode,
            desktop_open: restored.or(default_open).unwrap_or(true),
            mobile_open: false,
            controlled,
        }
    }

    /// Panel presentation derived from the desktop open flag.
    pub fn panel_state(&self) -> PanelState {
        if self.desktop_open {
            PanelState::Expanded
        } else {
            PanelState::Collapsed
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn boot_prefers_restored_preference_over_default() {
        let model = LayoutModel::boot(ResponsiveMode::Desktop, Some(false), Some(true), false);
        assert!(!model.desktop_open);
        assert!(!model.mobile_open);
    }

    #[test]
    fn boot_falls_back_to_default_then_open() {
        let model = LayoutModel::boot(ResponsiveMode::Desktop, None, Some(false), false);
        assert!(!model.desktop_open);

        let model = LayoutModel::boot(ResponsiveMode::Desktop, None, None, false);
        assert!(model.desktop_open);
    }

    #[test]
    fn panel_state_tracks_the_open_flag() {
        let mut model = LayoutModel::boot(ResponsiveMode::Desktop, None, None, false);
        assert_eq!(model.panel_state(), PanelState::Expanded);
        model.desktop_open = false;
        assert_eq!(model.panel_state(), PanelState::Collapsed);
        assert_eq!(model.panel_state().token(), "collapsed");
    }
}
