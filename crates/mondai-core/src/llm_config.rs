use std::time::Duration;

use async_openai::config::OpenAIConfig;
use mondai_config::llm::{LlmService, LlmServiceError};
use mondai_utils::args::llm::LlmServices as LlmServiceArgs;

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub service: LlmService,
    key: Option<String>,
    model: Option<String>,
    pub timeout: Duration,
}

impl TryFrom<LlmServiceArgs> for LlmConfig {
    type Error = LlmServiceError;

    fn try_from(args: LlmServiceArgs) -> Result<Self, Self::Error> {
        let service = match args.llm_service.as_deref() {
            Some(name) => LlmService::resolve(name, args.llm_base.as_ref())?,
            None => args.llm_base.map(LlmService::Custom).unwrap_or_default(),
        };

        Ok(Self {
            service,
            key: args.llm_key,
            model: args.llm_model,
            timeout: Duration::from_secs(args.llm_timeout),
        })
    }
}

impl LlmConfig {
    #[must_use]
    pub fn new(service: LlmService, key: Option<String>, model: Option<String>, timeout: Duration) -> Self {
        Self {
            service,
            key,
            model,
            timeout,
        }
    }

    #[must_use]
    pub fn get_quiz_model(&self) -> &str {
        if let Some(model) = &self.model {
            model.as_str()
        } else {
            tracing::debug!("Using default model for quiz generation");
            self.service.default_model()
        }
    }

    #[must_use]
    pub fn get_openai_config(&self) -> OpenAIConfig {
        let mut openai_config = OpenAIConfig::default().with_api_base(self.service.get_base());

        if let Some(api_key) = &self.key {
            openai_config = openai_config.with_api_key(api_key);
        }
        openai_config
    }
}
