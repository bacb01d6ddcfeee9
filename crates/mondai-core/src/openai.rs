use crate::llm_config::LlmConfig;
use crate::openai::error::OpenAiError;
use crate::prompt::Prompt;
use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use std::error::Error;
use std::time::Duration;
use tracing::instrument;
use typed_builder::TypedBuilder;

pub mod error;

/// Anything that turns a prompt into completion text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &Prompt) -> Result<String, OpenAiError>;
}

#[derive(TypedBuilder, Debug, Clone)]
pub struct CallConfig {
    total_timeout: Duration,
    iteration_timeout: Duration,
    #[builder(default = Duration::from_millis(100))]
    min_retry_interval: Duration,
    #[builder(default = Duration::from_secs(2))]
    max_retry_interval: Duration,
}

impl CallConfig {
    #[must_use]
    pub fn from_timeout(timeout: Duration) -> Self {
        CallConfig::builder()
            .total_timeout(timeout * 3)
            .iteration_timeout(timeout)
            .build()
    }
}

/// Chat completion backed generator for any OpenAI compatible service.
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
    openai_config: OpenAIConfig,
    model: String,
    config: CallConfig,
}

impl OpenAiGenerator {
    #[must_use]
    pub fn new(llm_config: &LlmConfig, config: CallConfig) -> Self {
        Self {
            openai_config: llm_config.get_openai_config(),
            model: llm_config.get_quiz_model().to_owned(),
            config,
        }
    }

    fn client(&self) -> Result<Client<OpenAIConfig>, OpenAiError> {
        let http_client = reqwest::Client::builder()
            .timeout(self.config.iteration_timeout)
            .build()
            .map_err(|error| {
                tracing::error!(error = &error as &dyn Error, "failed to build http client for openai");
                OpenAiError::HttpClientBuild(error)
            })?;

        let mut backoff_builder = ExponentialBackoffBuilder::default();
        backoff_builder
            .with_max_interval(self.config.max_retry_interval)
            .with_initial_interval(self.config.min_retry_interval)
            .with_max_elapsed_time(Some(self.config.total_timeout));

        Ok(Client::with_config(self.openai_config.clone())
            .with_http_client(http_client)
            .with_backoff(backoff_builder.build()))
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    #[instrument(skip_all, fields(model = %self.model))]
    async fn generate(&self, prompt: &Prompt) -> Result<String, OpenAiError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(build_messages(prompt)?)
            .build()?;

        tracing::debug!("sending openai request");
        let chat_completion = self.client()?.chat().create(request).await.map_err(|error| {
            tracing::warn!(error = &error as &dyn Error, "open AI call failed");
            OpenAiError::Api(error)
        })?;

        first_text(chat_completion)
    }
}

fn build_messages(prompt: &Prompt) -> Result<Vec<ChatCompletionRequestMessage>, OpenAiError> {
    let mut messages = Vec::with_capacity(prompt.user.len() + 1);
    if let Some(system) = &prompt.system {
        messages.push(
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system.as_str())
                .build()?
                .into(),
        );
    }
    for user in &prompt.user {
        messages.push(
            ChatCompletionRequestUserMessageArgs::default()
                .content(user.as_str())
                .build()?
                .into(),
        );
    }
    Ok(messages)
}

fn first_text(chat_completion: CreateChatCompletionResponse) -> Result<String, OpenAiError> {
    if let Some(tokens) = chat_completion.usage.as_ref().map(|usage| usage.total_tokens) {
        tracing::debug!(tokens, "openai response received");
    }
    chat_completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(OpenAiError::EmptyResponse)
}
