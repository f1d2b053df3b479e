use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Recognized widget settings.
///
/// Unknown keys are ignored and missing keys fall back to the defaults
/// documented per field, so a partial record from the host is always
/// usable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetSettings {
    /// Minimum on-screen lifetime of a feed entry, in seconds (default: 5).
    pub min_duration: f64,
    /// Maximum on-screen lifetime of a feed entry, in seconds (default: 10).
    pub max_duration: f64,
    /// Minimum sampled font size, in pixels (default: 12).
    pub min_font_size: f64,
    /// Maximum sampled font size, in pixels (default: 32).
    pub max_font_size: f64,
    /// Which fact a latest-info widget surfaces (default: follower name).
    pub info_type: InfoType,
    /// Text shown when the configured fact is unavailable (default: "...").
    pub placeholder_text: String,
    /// Feed filtering rules (default: no filtering).
    pub filters: FilterConfig,
}

/// Feed filtering configuration.
///
/// The exclusion list and the command prefix are injected here; an
/// absent section means no filtering at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    /// Author ids whose messages never enter a feed (bot/service accounts).
    pub excluded_authors: HashSet<String>,
    /// Messages starting with this character are commands and are skipped.
    pub command_prefix: Option<char>,
}

/// Which fact a latest-info widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InfoType {
    FollowerName,
    SubscriberName,
    TipperName,
    TipAmount,
    GiftSubberName,
    GiftSubCount,
    /// Unrecognized selector: hydrates to the placeholder and reacts to
    /// no events.
    Unknown,
}

impl InfoType {
    /// Maps a selector name to its variant; anything unrecognized is
    /// `Unknown` rather than an error.
    fn from_name(name: &str) -> Self {
        match name {
            "followerName" => InfoType::FollowerName,
            "subscriberName" => InfoType::SubscriberName,
            "tipperName" => InfoType::TipperName,
            "tipAmount" => InfoType::TipAmount,
            "giftSubberName" => InfoType::GiftSubberName,
            "giftSubCount" => InfoType::GiftSubCount,
            _ => InfoType::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for InfoType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(InfoType::from_name(&name))
    }
}

impl Default for InfoType {
    fn default() -> Self {
        InfoType::FollowerName
    }
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            min_duration: 5.0,
            max_duration: 10.0,
            min_font_size: 12.0,
            max_font_size: 32.0,
            info_type: InfoType::default(),
            placeholder_text: "...".to_string(),
            filters: FilterConfig::default(),
        }
    }
}

impl WidgetSettings {
    /// Lenient decode of a host-supplied settings record.
    ///
    /// A malformed record falls back to full defaults rather than
    /// failing; unknown keys are ignored either way.
    pub fn from_value(value: &serde_json::Value) -> Self {
        match serde_json::from_value(value.clone()) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(%err, "invalid widget settings, using defaults");
                WidgetSettings::default()
            }
        }
    }

    /// Whether a feed should drop messages from this author.
    pub fn is_excluded_author(&self, author_id: &str) -> bool {
        self.filters.excluded_authors.contains(author_id)
    }

    /// Whether this message text is a command under the configured prefix.
    pub fn is_command(&self, text: &str) -> bool {
        match self.filters.command_prefix {
            Some(prefix) => text.starts_with(prefix),
            None => false,
        }
    }
}
