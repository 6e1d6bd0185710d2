//! Core types for route health analysis

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A configured upstream model source. Optional fields stay `None` when the
/// document omits them so a rewrite emits exactly what was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<String>>,
    /// Fields the engine does not interpret (e.g. `transformer`), kept for round trips
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
}

impl Provider {
    pub fn new(name: impl Into<String>, models: &[&str]) -> Self {
        Self {
            name: name.into(),
            api_base_url: None,
            api_key: None,
            models: Some(models.iter().map(|m| m.to_string()).collect()),
            extra: serde_json::Map::new(),
            deprecated: None,
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = Some(true);
        self
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.unwrap_or(false)
    }

    /// Listed models; empty when the field is absent
    pub fn models(&self) -> &[String] {
        self.models.as_deref().unwrap_or_default()
    }

    pub fn offers(&self, model: &str) -> bool {
        self.models().iter().any(|m| m == model)
    }
}

/// Named routing purpose. The set is closed and ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteSlot {
    Default,
    Background,
    Think,
    LongContext,
    WebSearch,
}

impl RouteSlot {
    pub const COUNT: usize = 5;

    pub const ALL: [RouteSlot; RouteSlot::COUNT] = [
        RouteSlot::Default,
        RouteSlot::Background,
        RouteSlot::Think,
        RouteSlot::LongContext,
        RouteSlot::WebSearch,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Key used in the proxy's `Router` object
    pub fn key(self) -> &'static str {
        match self {
            RouteSlot::Default => "default",
            RouteSlot::Background => "background",
            RouteSlot::Think => "think",
            RouteSlot::LongContext => "longContext",
            RouteSlot::WebSearch => "webSearch",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RouteSlot::Default => "Default",
            RouteSlot::Background => "Background",
            RouteSlot::Think => "Think",
            RouteSlot::LongContext => "Long context",
            RouteSlot::WebSearch => "Web search",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RouteSlot::Default => "default conversation route",
            RouteSlot::Background => "background task route",
            RouteSlot::Think => "deep reasoning route",
            RouteSlot::LongContext => "long document route",
            RouteSlot::WebSearch => "web search route",
        }
    }
}

impl fmt::Display for RouteSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route slot '{0}' (expected one of: default, background, think, longContext, webSearch)")]
pub struct UnknownSlot(pub String);

impl FromStr for RouteSlot {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteSlot::ALL
            .into_iter()
            .find(|slot| slot.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSlot(s.to_string()))
    }
}

/// Unparsed value bound to a slot (`None` = not configured)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRoute<'a> {
    pub slot: RouteSlot,
    pub value: Option<&'a str>,
}

impl<'a> RawRoute<'a> {
    pub fn new(slot: RouteSlot, value: Option<&'a str>) -> Self {
        Self { slot, value }
    }
}

/// Raw values for every slot, indexed by `RouteSlot`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    values: [Option<String>; RouteSlot::COUNT],
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same value in every slot
    pub fn uniform(value: &str) -> Self {
        let mut table = Self::new();
        for slot in RouteSlot::ALL {
            table.set(slot, Some(value.to_string()));
        }
        table
    }

    pub fn get(&self, slot: RouteSlot) -> Option<&str> {
        self.values[slot.index()].as_deref()
    }

    pub fn set(&mut self, slot: RouteSlot, value: Option<String>) {
        self.values[slot.index()] = value;
    }

    pub fn with(mut self, slot: RouteSlot, value: &str) -> Self {
        self.set(slot, Some(value.to_string()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = RawRoute<'_>> {
        RouteSlot::ALL
            .into_iter()
            .map(move |slot| RawRoute::new(slot, self.get(slot)))
    }
}

/// Classification outcome for one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteStatus {
    NotConfigured,
    FormatError,
    ProviderNotFound,
    DeprecatedProvider,
    UnknownModel,
    Active,
}

impl RouteStatus {
    pub fn is_configured(self) -> bool {
        self != RouteStatus::NotConfigured
    }

    /// Slot points at a provider that exists and is not deprecated
    pub fn has_active_provider(self) -> bool {
        matches!(self, RouteStatus::UnknownModel | RouteStatus::Active)
    }
}

/// Tiered health label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Minimum score for each tier, highest first. Anything below the last is `Poor`.
pub const HEALTH_THRESHOLDS: [(u8, HealthStatus); 3] = [
    (90, HealthStatus::Excellent),
    (70, HealthStatus::Good),
    (50, HealthStatus::Fair),
];

impl HealthStatus {
    pub fn from_score(score: u8) -> Self {
        HEALTH_THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|&(_, status)| status)
            .unwrap_or(HealthStatus::Poor)
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthStatus::Excellent => "excellent",
            HealthStatus::Good => "good",
            HealthStatus::Fair => "fair",
            HealthStatus::Poor => "poor",
        }
    }

    pub fn closing_message(self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Routing configuration is in excellent shape.",
            HealthStatus::Good => "Routing configuration is good; address the items above to improve it.",
            HealthStatus::Fair => "Routing configuration is fair; several routes need attention.",
            HealthStatus::Poor => "Routing configuration is poor; review every route before relying on it.",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
