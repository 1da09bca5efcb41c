use anyhow::{Context, Result, bail};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;
use tracing::debug;

use crate::config::{API_KEY_ENV, Config};

/// Something that turns a prompt into a single text completion.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Unconfigured providers are never called.
    fn is_configured(&self) -> bool {
        true
    }
}

/// Stands in for the remote provider when no credential is set.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledProvider;

#[async_trait]
impl CompletionProvider for DisabledProvider {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        bail!("LLM features are disabled. To enable, set {}.", API_KEY_ENV)
    }

    fn is_configured(&self) -> bool {
        false
    }
}

pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    max_output_tokens: u32,
}

impl OpenAiProvider {
    pub fn new(api_key: &str, config: &Config) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(api_base) = &config.api_base {
            openai_config = openai_config.with_api_base(api_base);
        }

        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }

    /// One user message; the output cap goes out as `max_tokens`, which every
    /// OpenAI-compatible endpoint accepts.
    #[allow(deprecated)]
    fn build_request(&self, prompt: &str) -> Result<CreateChatCompletionRequest> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![ChatCompletionRequestMessage::User(message)])
            .temperature(self.temperature)
            .max_tokens(self.max_output_tokens)
            .build()?;
        Ok(request)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = self.build_request(prompt)?;

        debug!(model = %self.model, prompt_length = prompt.len(), "Requesting completion");

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .with_context(|| "Failed to get response from LLM")?;

        let Some(choice) = response.choices.into_iter().next() else {
            bail!("No choices returned from model");
        };

        // A missing body is not retried; the caller sees it as an empty completion.
        Ok(choice.message.content.unwrap_or_default())
    }
}
