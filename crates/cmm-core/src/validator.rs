//! Per-slot route classification

use crate::catalog::ProviderCatalog;
use crate::parser::{self, ParsedRoute};
use crate::types::{RawRoute, RouteSlot, RouteStatus};
use serde::Serialize;

/// Classification record for one slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCheck {
    pub slot: RouteSlot,
    pub status: RouteStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RouteCheck {
    fn unparsed(slot: RouteSlot, status: RouteStatus, error: String) -> Self {
        Self {
            slot,
            status,
            provider_name: None,
            model_name: None,
            error: Some(error),
        }
    }

    fn parsed(
        slot: RouteSlot,
        status: RouteStatus,
        route: ParsedRoute,
        error: Option<String>,
    ) -> Self {
        Self {
            slot,
            status,
            provider_name: Some(route.provider_name),
            model_name: Some(route.model_name),
            error,
        }
    }
}

/// Classify a raw route against the catalog. The first matching rule wins:
/// not configured, malformed, unknown provider, deprecated provider, unknown
/// model, active.
pub fn validate(raw: &RawRoute<'_>, catalog: &ProviderCatalog) -> RouteCheck {
    let slot = raw.slot;

    let value = match raw.value {
        Some(v) if !v.is_empty() => v,
        _ => {
            return RouteCheck::unparsed(slot, RouteStatus::NotConfigured, "not configured".into());
        }
    };

    let route = match parser::parse(value) {
        Ok(route) => route,
        Err(e) => return RouteCheck::unparsed(slot, RouteStatus::FormatError, e.to_string()),
    };

    let Some(provider) = catalog.find_by_name(&route.provider_name) else {
        let error = format!("provider '{}' not found", route.provider_name);
        return RouteCheck::parsed(slot, RouteStatus::ProviderNotFound, route, Some(error));
    };

    // Deprecation dominates an unknown model
    if provider.is_deprecated() {
        let error = format!("provider '{}' is deprecated", route.provider_name);
        return RouteCheck::parsed(slot, RouteStatus::DeprecatedProvider, route, Some(error));
    }

    if !provider.offers(&route.model_name) {
        let error = format!(
            "model '{}' is not offered by provider '{}'",
            route.model_name, route.provider_name
        );
        return RouteCheck::parsed(slot, RouteStatus::UnknownModel, route, Some(error));
    }

    RouteCheck::parsed(slot, RouteStatus::Active, route, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Provider;

    fn catalog() -> ProviderCatalog {
        ProviderCatalog::new(vec![
            Provider::new("acme", &["gpt-4", "gpt-3.5"]),
            Provider::new("legacy", &["old-model"]).deprecated(),
        ])
    }

    fn check(value: Option<&str>) -> RouteCheck {
        validate(&RawRoute::new(RouteSlot::Default, value), &catalog())
    }

    #[test]
    fn test_absent_and_empty_are_not_configured() {
        assert_eq!(check(None).status, RouteStatus::NotConfigured);
        assert_eq!(check(Some("")).status, RouteStatus::NotConfigured);
        assert!(check(None).provider_name.is_none());
    }

    #[test]
    fn test_format_error_carries_parser_text() {
        let result = check(Some("acme"));
        assert_eq!(result.status, RouteStatus::FormatError);
        assert_eq!(
            result.error.as_deref(),
            Some(parser::RouteFormatError::MissingSeparator.to_string().as_str())
        );
        assert!(result.provider_name.is_none());
    }

    #[test]
    fn test_provider_not_found_keeps_parsed_names() {
        let result = check(Some("nobody,gpt-4"));
        assert_eq!(result.status, RouteStatus::ProviderNotFound);
        assert_eq!(result.provider_name.as_deref(), Some("nobody"));
        assert_eq!(result.model_name.as_deref(), Some("gpt-4"));
    }

    #[test]
    fn test_deprecated_beats_unknown_model() {
        let result = check(Some("legacy,not-listed"));
        assert_eq!(result.status, RouteStatus::DeprecatedProvider);
        assert_eq!(result.model_name.as_deref(), Some("not-listed"));

        assert_eq!(
            check(Some("legacy,old-model")).status,
            RouteStatus::DeprecatedProvider
        );
    }

    #[test]
    fn test_unknown_model() {
        let result = check(Some("acme,gpt-9"));
        assert_eq!(result.status, RouteStatus::UnknownModel);
        assert!(result.error.unwrap().contains("gpt-9"));
    }

    #[test]
    fn test_active_has_no_error() {
        let result = check(Some("acme,gpt-3.5"));
        assert_eq!(result.status, RouteStatus::Active);
        assert!(result.error.is_none());
        assert_eq!(result.slot, RouteSlot::Default);
    }

    #[test]
    fn test_model_match_is_exact() {
        assert_eq!(check(Some("acme,GPT-4")).status, RouteStatus::UnknownModel);
        assert_eq!(check(Some("acme,gpt-4 ")).status, RouteStatus::UnknownModel);
    }

    #[test]
    fn test_empty_catalog() {
        let result = validate(
            &RawRoute::new(RouteSlot::Think, Some("acme,gpt-4")),
            &ProviderCatalog::default(),
        );
        assert_eq!(result.status, RouteStatus::ProviderNotFound);
    }
}
