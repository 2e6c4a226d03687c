//! Cookie-backed store for the user's panel open/closed preference.
//!
//! The record is a plain `"true"`/`"false"` value rather than JSON so the
//! server (or any other collaborator) can read it during first-paint
//! hydration without a parser. Absence and malformed values are both
//! tolerated by reads; only writes can fail, and callers are expected to
//! treat that as a warning, not an error.

use thiserror::Error;

/// Cookie key holding the persisted desktop panel preference.
pub const PANEL_STATE_COOKIE: &str = "sidebar_state";
/// Cookie lifetime: seven days, matching how long user layout intent is kept.
pub const PANEL_STATE_MAX_AGE_SECS: u32 = 60 * 60 * 24 * 7;

#[derive(Debug, Error)]
/// Failures raised by host-boundary writes.
pub enum HostError {
    /// The cookie jar (`document.cookie`) is not reachable in this context.
    #[error("document cookie storage unavailable")]
    CookieUnavailable,
    /// The browser rejected the cookie write.
    #[error("cookie write rejected: {0}")]
    CookieWrite(String),
}

/// Reads the persisted panel preference.
///
/// Returns `None` when no record exists (no prior preference); a malformed
/// value parses as `false` rather than failing.
pub fn load_panel_preference() -> Option<bool> {
    let header = cookie_header()?;
    let raw = cookie_value(&header, PANEL_STATE_COOKIE)?;
    Some(parse_flag(raw))
}

/// Persists the panel preference as a site-wide cookie with a 7-day max age.
///
/// # Errors
///
/// Returns [`HostError`] when the cookie jar is unavailable or the write is
/// rejected. On non-WASM targets this is a no-op.
pub fn store_panel_preference(open: bool) -> Result<(), HostError> {
    write_cookie(&format_panel_cookie(open))
}

fn parse_flag(raw: &str) -> bool {
    raw == "true"
}

fn flag_token(open: bool) -> &'static str {
    if open {
        "true"
    } else {
        "false"
    }
}

fn format_panel_cookie(open: bool) -> String {
    format!(
        "{PANEL_STATE_COOKIE}={}; path=/; max-age={PANEL_STATE_MAX_AGE_SECS}",
        flag_token(open)
    )
}

/// Extracts a single value from a `document.cookie`-style header.
fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.split_once('=').filter(|(key, _)| *key == name))
        .map(|(_, value)| value)
}

fn cookie_header() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
        document.cookie().ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn write_cookie(record: &str) -> Result<(), HostError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(HostError::CookieUnavailable)?;
        let document: web_sys::HtmlDocument = document
            .dyn_into()
            .map_err(|_| HostError::CookieUnavailable)?;
        document
            .set_cookie(record)
            .map_err(|err| HostError::CookieWrite(format!("{err:?}")))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = record;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn panel_cookie_record_carries_path_and_max_age() {
        assert_eq!(
            format_panel_cookie(true),
            "sidebar_state=true; path=/; max-age=604800"
        );
        assert_eq!(
            format_panel_cookie(false),
            "sidebar_state=false; path=/; max-age=604800"
        );
    }

    #[test]
    fn cookie_value_finds_key_among_other_records() {
        let header = "theme=dark; sidebar_state=false; session=abc123";
        assert_eq!(cookie_value(header, PANEL_STATE_COOKIE), Some("false"));
    }

    #[test]
    fn cookie_value_is_none_when_key_absent() {
        assert_eq!(cookie_value("theme=dark", PANEL_STATE_COOKIE), None);
        assert_eq!(cookie_value("", PANEL_STATE_COOKIE), None);
    }

    #[test]
    fn cookie_value_ignores_key_prefix_collisions() {
        let header = "sidebar_state_old=true; sidebar_state=false";
        assert_eq!(cookie_value(header, PANEL_STATE_COOKIE), Some("false"));
    }

    #[test]
    fn malformed_flag_parses_as_closed() {
        assert!(parse_flag("true"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("TRUE"));
        assert!(!parse_flag("1"));
        assert!(!parse_flag(""));
    }
}
