use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum LlmService {
    #[default]
    OpenAI,
    Gwdg,
    Custom(Url),
}

#[derive(Error, Debug)]
pub enum LlmServiceError {
    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Service 'custom' needs an API base url")]
    MissingBase,
}

impl FromStr for LlmService {
    type Err = LlmServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LlmService::OpenAI),
            "gwdg" => Ok(LlmService::Gwdg),
            "custom" => Err(LlmServiceError::MissingBase),
            _ => Err(LlmServiceError::UnknownService(s.to_string())),
        }
    }
}

impl LlmService {
    /// Resolves a service name, using `base` for `custom` services.
    pub fn resolve(name: &str, base: Option<&Url>) -> Result<Self, LlmServiceError> {
        match (name.to_lowercase().as_str(), base) {
            ("custom", Some(base)) => Ok(LlmService::Custom(base.clone())),
            _ => name.parse(),
        }
    }

    #[must_use]
    pub fn get_base(&self) -> Cow<'_, str> {
        match self {
            LlmService::OpenAI => "https://api.openai.com/v1".into(),
            LlmService::Gwdg => "https://chat-ai.academiccloud.de/v1".into(),
            LlmService::Custom(url) => Cow::from(url.as_str()),
        }
    }

    #[must_use]
    pub fn default_model(&self) -> &'static str {
        match self {
            LlmService::OpenAI => "gpt-4.1-mini",
            LlmService::Gwdg => "llama-3.3-70b-instruct",
            LlmService::Custom(_) => "llama-3.3-8b-instruct",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_from_str() {
        assert_eq!(LlmService::from_str("OpenAI").unwrap(), LlmService::OpenAI);
        assert_eq!(LlmService::from_str("gwdg").unwrap(), LlmService::Gwdg);
        assert!(matches!(
            LlmService::from_str("mistral"),
            Err(LlmServiceError::UnknownService(name)) if name == "mistral"
        ));
        assert!(matches!(LlmService::from_str("custom"), Err(LlmServiceError::MissingBase)));
    }

    #[test]
    fn test_resolve_custom() {
        let base = Url::parse("http://localhost:8080/v1").unwrap();
        let service = LlmService::resolve("custom", Some(&base)).unwrap();
        assert_eq!(service.get_base(), "http://localhost:8080/v1");
        assert_eq!(service.default_model(), "llama-3.3-8b-instruct");
    }
}
