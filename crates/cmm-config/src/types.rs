//! Proxy config document model

use cmm_core::{Provider, ProviderCatalog, RouteSlot, RouteTable};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const PROVIDERS_KEY: &str = "Providers";
const ROUTER_KEY: &str = "Router";

/// The proxy's `config.json`. Only `Providers` and `Router` are interpreted;
/// every other key is carried through untouched, and a rewrite keeps the
/// top-level keys in the order they were read.
#[derive(Debug, Clone, Default)]
pub struct CcrConfig {
    pub providers: Option<Vec<Provider>>,
    pub router: Option<RouterSection>,
    pub extra: Map<String, Value>,
    key_order: Vec<String>,
}

/// The `Router` object: one `"provider,model"` string per slot plus any
/// router settings the proxy understands (thresholds and the like), in
/// document order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouterSection {
    entries: Map<String, Value>,
}

impl RouterSection {
    /// Route string for a slot; `None` when absent or not a string
    pub fn get(&self, slot: RouteSlot) -> Option<&str> {
        self.entries.get(slot.key()).and_then(Value::as_str)
    }

    /// Raw value under any router key, slot or setting
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Overwrites in place; a new slot key is appended
    pub fn set(&mut self, slot: RouteSlot, value: impl Into<String>) {
        self.entries
            .insert(slot.key().to_string(), Value::String(value.into()));
    }

    pub fn to_route_table(&self) -> RouteTable {
        let mut table = RouteTable::new();
        for slot in RouteSlot::ALL {
            table.set(slot, self.get(slot).map(str::to_string));
        }
        table
    }
}

impl CcrConfig {
    pub fn providers(&self) -> &[Provider] {
        self.providers.as_deref().unwrap_or_default()
    }

    /// Snapshot of the providers for one engine run
    pub fn catalog(&self) -> ProviderCatalog {
        ProviderCatalog::new(self.providers().to_vec())
    }

    pub fn route_table(&self) -> RouteTable {
        self.router
            .as_ref()
            .map(RouterSection::to_route_table)
            .unwrap_or_default()
    }

    /// Point the given slots at `provider,model`, creating `Router` if absent
    pub fn assign(&mut self, slots: &[RouteSlot], provider: &str, model: &str) {
        let value = format!("{provider},{model}");
        let router = self.router.get_or_insert_with(RouterSection::default);
        for &slot in slots {
            router.set(slot, value.clone());
        }
    }

    /// Keys in write order: as read, then keys added since
    fn write_order(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.key_order.iter().map(String::as_str).collect();
        for key in self.extra.keys() {
            if !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
        for (key, present) in [
            (PROVIDERS_KEY, self.providers.is_some()),
            (ROUTER_KEY, self.router.is_some()),
        ] {
            if present && !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}

/// Key order is presentation only
impl PartialEq for CcrConfig {
    fn eq(&self, other: &Self) -> bool {
        self.providers == other.providers
            && self.router == other.router
            && self.extra == other.extra
    }
}

fn take<T: DeserializeOwned>(
    map: &mut Map<String, Value>,
    key: &str,
) -> Result<Option<T>, serde_json::Error> {
    map.remove(key).map(serde_json::from_value).transpose()
}

impl<'de> Deserialize<'de> for CcrConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut extra: Map<String, Value> = Map::deserialize(deserializer)?;
        let key_order = extra.keys().cloned().collect();
        let providers =
            take(&mut extra, PROVIDERS_KEY).map_err(<D::Error as de::Error>::custom)?;
        let router = take(&mut extra, ROUTER_KEY).map_err(<D::Error as de::Error>::custom)?;
        Ok(Self {
            providers,
            router,
            extra,
            key_order,
        })
    }
}

impl Serialize for CcrConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        for key in self.write_order() {
            match key {
                PROVIDERS_KEY => {
                    if let Some(providers) = &self.providers {
                        map.serialize_entry(key, providers)?;
                    }
                }
                ROUTER_KEY => {
                    if let Some(router) = &self.router {
                        map.serialize_entry(key, router)?;
                    }
                }
                _ => {
                    if let Some(value) = self.extra.get(key) {
                        map.serialize_entry(key, value)?;
                    }
                }
            }
        }
        map.end()
    }
}
