//! `provider,model` route parsing

use serde::Serialize;

/// A route split into its provider and model parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRoute {
    pub provider_name: String,
    pub model_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteFormatError {
    #[error("route must use the \"provider,model\" format")]
    MissingSeparator,
    #[error("provider name must not be empty")]
    EmptyProvider,
    #[error("model name must not be empty")]
    EmptyModel,
}

/// Split a raw route at its first comma.
///
/// Everything after the first comma belongs to the model, so
/// `"openrouter,anthropic/claude-3,beta"` yields provider `openrouter` and model
/// `anthropic/claude-3,beta`. A provider name that itself contains a comma can
/// not be expressed in this format.
pub fn parse(raw: &str) -> Result<ParsedRoute, RouteFormatError> {
    let (provider, model) = raw
        .split_once(',')
        .ok_or(RouteFormatError::MissingSeparator)?;

    if provider.is_empty() {
        return Err(RouteFormatError::EmptyProvider);
    }
    if model.is_empty() {
        return Err(RouteFormatError::EmptyModel);
    }

    Ok(ParsedRoute {
        provider_name: provider.to_string(),
        model_name: model.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let parsed = parse("acme,gpt-4").unwrap();
        assert_eq!(parsed.provider_name, "acme");
        assert_eq!(parsed.model_name, "gpt-4");
    }

    #[test]
    fn test_parse_keeps_extra_commas_in_model() {
        let parsed = parse("openrouter,anthropic/claude-3,with,comma").unwrap();
        assert_eq!(parsed.provider_name, "openrouter");
        assert_eq!(parsed.model_name, "anthropic/claude-3,with,comma");
    }

    #[test]
    fn test_parse_without_comma_fails() {
        assert_eq!(parse("acme"), Err(RouteFormatError::MissingSeparator));
        assert_eq!(parse(""), Err(RouteFormatError::MissingSeparator));
    }

    #[test]
    fn test_parse_empty_parts_fail() {
        assert_eq!(parse(",gpt-4"), Err(RouteFormatError::EmptyProvider));
        assert_eq!(parse("acme,"), Err(RouteFormatError::EmptyModel));
        assert_eq!(parse(","), Err(RouteFormatError::EmptyProvider));
    }

    #[test]
    fn test_parse_does_not_trim() {
        let parsed = parse(" acme , gpt-4").unwrap();
        assert_eq!(parsed.provider_name, " acme ");
        assert_eq!(parsed.model_name, " gpt-4");
    }
}
