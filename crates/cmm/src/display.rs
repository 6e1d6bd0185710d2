//! Plain-text presentation helpers shared by commands

use cmm_core::RouteStatus;

/// Status -> (label, meaning). The engine only knows the symbolic status.
const STATUS_LABELS: [(RouteStatus, &str, &str); 6] = [
    (RouteStatus::Active, "active", "usable"),
    (RouteStatus::DeprecatedProvider, "deprecated", "provider is deprecated but usable"),
    (RouteStatus::UnknownModel, "unknown model", "model is not in the provider's list"),
    (RouteStatus::ProviderNotFound, "no provider", "provider is not in the catalog"),
    (RouteStatus::FormatError, "format error", "value is not \"provider,model\""),
    (RouteStatus::NotConfigured, "not configured", "slot has no route"),
];

pub fn status_label(status: RouteStatus) -> &'static str {
    STATUS_LABELS
        .iter()
        .find(|(s, _, _)| *s == status)
        .map(|(_, label, _)| *label)
        .unwrap_or("?")
}

pub fn status_meaning(status: RouteStatus) -> &'static str {
    STATUS_LABELS
        .iter()
        .find(|(s, _, _)| *s == status)
        .map(|(_, _, meaning)| *meaning)
        .unwrap_or("")
}

/// Pad or truncate to a fixed column width (by chars)
pub fn cell(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        format!("{text:<width$}")
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_label() {
        for status in [
            RouteStatus::NotConfigured,
            RouteStatus::FormatError,
            RouteStatus::ProviderNotFound,
            RouteStatus::DeprecatedProvider,
            RouteStatus::UnknownModel,
            RouteStatus::Active,
        ] {
            assert_ne!(status_label(status), "?");
            assert!(!status_meaning(status).is_empty());
        }
    }

    #[test]
    fn test_cell_pads_and_truncates() {
        assert_eq!(cell("ab", 4), "ab  ");
        assert_eq!(cell("abcdef", 4), "abc…");
        assert_eq!(cell("abcd", 4).chars().count(), 4);
    }
}
