use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use log::{debug, trace, error};
use crate::config::CompletionConfig;
use crate::error::Error;
use crate::request::{ChatMessage, ChatRequest, ChatResponse};

/// One prompt in, the model's text out
#[async_trait]
pub trait CompletionClient: Send + Sync
{   async fn complete(&self, prompt: &str) -> Result<String, Error>;
}

#[async_trait]
impl<C> CompletionClient for Arc<C>
where C: CompletionClient + ?Sized
{   async fn complete(&self, prompt: &str) -> Result<String, Error>
    {   (**self).complete(prompt).await
    }
}

/// HTTP client for an OpenAI-compatible chat completions endpoint.
/// Every call is a fresh round trip: no retry, no cache.
#[derive(Debug, Clone)]
pub struct ChatCompletionClient
{   config: CompletionConfig
  , http_client: reqwest::Client
}

impl ChatCompletionClient
{   /// Validate the configuration and build the HTTP client
    pub fn new(config: CompletionConfig) -> Result<Self, Error>
    {   config.validate()?;
        debug!(
          "Creating ChatCompletionClient for model: {}",
          config.model
        );
        let http_client = reqwest::Client::builder()
          .timeout(Duration::from_secs(config.timeout_secs))
          .build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            Error::InvalidConfiguration(e.to_string())
          })?;

        Ok(ChatCompletionClient
        {   config
          , http_client
        })
    }

    pub fn config(&self) -> &CompletionConfig
    {   &self.config
    }

    fn build_request(&self, prompt: &str) -> ChatRequest
    {   ChatRequest
        {   model: self.config.model.clone()
          , messages: vec![ChatMessage::user(prompt)]
          , temperature: self.config.temperature
          , max_tokens: self.config.max_tokens
          , stream: false
        }
    }
}

#[async_trait]
impl CompletionClient for ChatCompletionClient
{   async fn complete(&self, prompt: &str) -> Result<String, Error>
    {   debug!("Sending completion to: {}", self.config.model);

        let request = self.build_request(prompt);
        trace!("Chat request: {:?}", request);

        let mut builder = self.http_client
          .post(self.config.completions_url())
          .bearer_auth(&self.config.api_key)
          .json(&request);
        for (name, value) in &self.config.headers
        {   builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(|e| {
          error!("HTTP error: {}", e);
          Error::from(e)
        })?;

        let status = response.status();
        trace!("Chat response status: {}", status);

        if !status.is_success()
        {   let body = response.text().await
              .unwrap_or_else(|_| "Unknown error".to_string());
            error!("API error {}: {}", status, body);
            return Err(Error::ApiError
            {   status: status.as_u16()
              , body
            });
        }

        let body = response.text().await.map_err(|e| {
          error!("Failed to read response body: {}", e);
          Error::from(e)
        })?;
        let chat_response: ChatResponse
          = serde_json::from_str(&body).map_err(|e| {
            error!("Parse error: {}", e);
            Error::ParseError(e.to_string())
          })?;

        if let Some(usage) = &chat_response.usage
        {   debug!("Tokens used: {}", usage.total_tokens);
        }

        chat_response.choices.into_iter()
          .next()
          .map(|c| c.message.content)
          .ok_or_else(|| {
            error!("No choices in response");
            Error::NoChoicesInResponse
          })
    }
}
