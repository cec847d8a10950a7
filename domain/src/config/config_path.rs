//! Store configuration paths read by the toolbar config resolver.
//!
//! Paths use the storefront's `section/group/field` layout. Each entry
//! records the value type the resolver coerces the raw value into.

/// How a raw configuration value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Non-empty and not `"0"` / `"false"`
    Flag,
    /// Leading decimal integer, zero otherwise
    Integer,
    /// Raw text, empty when missing
    Text,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Flag => "flag",
            ValueKind::Integer => "int",
            ValueKind::Text => "string",
        }
    }
}

/// Metadata for a single configuration path.
#[derive(Debug, Clone)]
pub struct ConfigPathInfo {
    pub path: &'static str,
    pub description: &'static str,
    pub kind: ValueKind,
}

pub const ENABLED: &str = "catalog_ajax_toolbar/general/enabled";
pub const AJAX_REQUEST_TIMEOUT: &str = "catalog_ajax_toolbar/general/ajax_request_timeout";
pub const SCROLL_TO_TOP_ENABLED: &str = "catalog_ajax_toolbar/general/scroll_to_top_enabled";
pub const SCROLL_TO_TOP_EASING: &str = "catalog_ajax_toolbar/general/scroll_to_top_easing";
pub const SCROLL_TO_TOP_DURATION: &str = "catalog_ajax_toolbar/general/scroll_to_top_duration";
pub const SCROLL_TO_TOP_OFFSET: &str = "catalog_ajax_toolbar/general/scroll_to_top_offset";

/// All known configuration paths.
pub fn known_paths() -> &'static [ConfigPathInfo] {
    &KNOWN_PATHS
}

/// Look up a configuration path.
pub fn lookup_path(path: &str) -> Option<&'static ConfigPathInfo> {
    KNOWN_PATHS.iter().find(|p| p.path == path)
}

static KNOWN_PATHS: [ConfigPathInfo; 6] = [
    ConfigPathInfo {
        path: ENABLED,
        description: "Load toolbar changes asynchronously",
        kind: ValueKind::Flag,
    },
    ConfigPathInfo {
        path: AJAX_REQUEST_TIMEOUT,
        description: "Asynchronous request timeout in milliseconds",
        kind: ValueKind::Integer,
    },
    ConfigPathInfo {
        path: SCROLL_TO_TOP_ENABLED,
        description: "Scroll to the listing before replacing it",
        kind: ValueKind::Flag,
    },
    ConfigPathInfo {
        path: SCROLL_TO_TOP_EASING,
        description: "Scroll easing name (swing, linear, ...)",
        kind: ValueKind::Text,
    },
    ConfigPathInfo {
        path: SCROLL_TO_TOP_DURATION,
        description: "Scroll duration in milliseconds",
        kind: ValueKind::Integer,
    },
    ConfigPathInfo {
        path: SCROLL_TO_TOP_OFFSET,
        description: "Pixels kept above the listing after scrolling",
        kind: ValueKind::Integer,
    },
];

/// Loose integer cast: optional sign plus leading digits, zero otherwise.
pub fn coerce_int(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else { return 0 };
    let raw = raw.trim();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

/// Loose flag cast.
pub fn coerce_flag(raw: Option<&str>) -> bool {
    match raw.map(str::trim) {
        None | Some("") | Some("0") => false,
        Some(v) => !v.eq_ignore_ascii_case("false"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_path() {
        let info = lookup_path(AJAX_REQUEST_TIMEOUT).unwrap();
        assert_eq!(info.kind, ValueKind::Integer);
        assert!(lookup_path("catalog_ajax_toolbar/general/unknown").is_none());
        assert_eq!(known_paths().len(), 6);
    }

    #[test]
    fn test_coerce_int() {
        assert_eq!(coerce_int(Some("10000")), 10_000);
        assert_eq!(coerce_int(Some(" 250ms")), 250);
        assert_eq!(coerce_int(Some("-20")), -20);
        assert_eq!(coerce_int(Some("abc")), 0);
        assert_eq!(coerce_int(Some("")), 0);
        assert_eq!(coerce_int(None), 0);
        assert_eq!(coerce_int(Some("99999999999999999999999")), 0);
    }

    #[test]
    fn test_coerce_flag() {
        assert!(coerce_flag(Some("1")));
        assert!(coerce_flag(Some("yes")));
        assert!(!coerce_flag(Some("0")));
        assert!(!coerce_flag(Some("false")));
        assert!(!coerce_flag(Some("")));
        assert!(!coerce_flag(None));
    }
}
