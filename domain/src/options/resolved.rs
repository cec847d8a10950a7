//! Store-level asynchronous settings produced by the config resolver.

use super::toolbar_options::ToolbarOptions;
use serde::Serialize;

/// Tunables that only matter when asynchronous mode is on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncTunables {
    pub request_timeout_ms: i64,
    pub scroll_enabled: bool,
    pub scroll_easing: String,
    pub scroll_duration_ms: i64,
    pub scroll_offset_px: i64,
}

/// Resolver output: either disabled, or enabled with its tunables.
///
/// Serializes as `{"asyncEnabled": false}` or as `{"asyncEnabled": true, …}`
/// with every tunable present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncSettings {
    Disabled,
    Enabled(AsyncTunables),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AsyncSettingsWire<'a> {
    async_enabled: bool,
    #[serde(flatten)]
    tunables: Option<&'a AsyncTunables>,
}

impl Serialize for AsyncSettings {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            AsyncSettings::Disabled => AsyncSettingsWire {
                async_enabled: false,
                tunables: None,
            },
            AsyncSettings::Enabled(tunables) => AsyncSettingsWire {
                async_enabled: true,
                tunables: Some(tunables),
            },
        };
        wire.serialize(serializer)
    }
}

impl AsyncSettings {
    pub fn is_enabled(&self) -> bool {
        matches!(self, AsyncSettings::Enabled(_))
    }

    /// Layer these settings over `options`. When disabled only the toggle
    /// changes; the remaining fields are irrelevant.
    pub fn apply_to(&self, mut options: ToolbarOptions) -> ToolbarOptions {
        match self {
            AsyncSettings::Disabled => {
                options.async_enabled = false;
            }
            AsyncSettings::Enabled(t) => {
                options.async_enabled = true;
                options.request_timeout_ms = t.request_timeout_ms;
                options.scroll_enabled = t.scroll_enabled;
                options.scroll_easing = t.scroll_easing.clone();
                options.scroll_duration_ms = t.scroll_duration_ms;
                options.scroll_offset_px = t.scroll_offset_px;
            }
        }
        options
    }
}
