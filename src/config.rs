//! Process-wide configuration for the completion endpoint

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use log::debug;

pub const DEFAULT_API_BASE: &str
  = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.6;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_APP_TITLE: &str = "menu-designer";

pub const API_KEY_VAR: &str = "API_KEY";
pub const API_BASE_VAR: &str = "MENU_API_BASE";
pub const MODEL_VAR: &str = "MENU_MODEL";
pub const TEMPERATURE_VAR: &str = "MENU_TEMPERATURE";
pub const APP_TITLE_VAR: &str = "MENU_APP_TITLE";
pub const REFERER_VAR: &str = "MENU_REFERER";
pub const TIMEOUT_VAR: &str = "MENU_TIMEOUT_SECS";
pub const ALLOW_EMPTY_MENU_VAR: &str = "MENU_ALLOW_EMPTY_MENU";

/// What to do when the menu completion comes back blank.
/// A blank restaurant name is always an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationPolicy
{   /// Blank menu text fails the pipeline
    Strict
  , /// Blank menu text is a valid empty menu
    AllowEmptyMenu
}

impl Default for ValidationPolicy
{   fn default() -> Self
    {   ValidationPolicy::Strict
    }
}

/// Completion endpoint configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct CompletionConfig
{   /// Model identifier, e.g. "openai/gpt-3.5-turbo"
    pub model: String
  , /// API base URL (OpenAI-compatible)
    pub api_base: String
  , /// Bearer credential
    #[serde(skip_serializing)]
    pub api_key: String
  , /// Extra headers sent with every request
    pub headers: BTreeMap<String, String>
  , /// Sampling temperature
    pub temperature: f32
  , /// Max tokens to generate
    pub max_tokens: Option<usize>
  , /// Request timeout in seconds
    pub timeout_secs: u64
  , /// Empty output handling for the pipeline
    pub policy: ValidationPolicy
}

// The key stays out of logs.
impl std::fmt::Debug for CompletionConfig
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
      -> std::fmt::Result
    {   f.debug_struct("CompletionConfig")
          .field("model", &self.model)
          .field("api_base", &self.api_base)
          .field("api_key", &"<redacted>")
          .field("headers", &self.headers)
          .field("temperature", &self.temperature)
          .field("max_tokens", &self.max_tokens)
          .field("timeout_secs", &self.timeout_secs)
          .field("policy", &self.policy)
          .finish()
    }
}

impl Default for CompletionConfig
{   fn default() -> Self
    {   let mut headers = BTreeMap::new();
        headers.insert(
          "X-Title".to_string(),
          DEFAULT_APP_TITLE.to_string()
        );
        CompletionConfig
        {   model: DEFAULT_MODEL.to_string()
          , api_base: DEFAULT_API_BASE.to_string()
          , api_key: String::new()
          , headers
          , temperature: DEFAULT_TEMPERATURE
          , max_tokens: None
          , timeout_secs: DEFAULT_TIMEOUT_SECS
          , policy: ValidationPolicy::default()
        }
    }
}

impl CompletionConfig
{   /// Default endpoint settings with the given key
    pub fn with_api_key(api_key: impl Into<String>) -> Self
    {   CompletionConfig
        {   api_key: api_key.into()
          , ..CompletionConfig::default()
        }
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F)
      -> Result<Self, crate::error::Error>
    where F: Fn(&str) -> Option<String>
    {   let get = |name: &str| {
          lookup(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        };

        let api_key = get(API_KEY_VAR).ok_or_else(|| {
          crate::error::Error::MissingApiKey(
            API_KEY_VAR.to_string()
          )
        })?;

        let mut config = CompletionConfig::with_api_key(api_key);

        if let Some(base) = get(API_BASE_VAR)
        {   config.api_base = base;
        }
        if let Some(model) = get(MODEL_VAR)
        {   config.model = model;
        }
        if let Some(raw) = get(TEMPERATURE_VAR)
        {   config.temperature = raw.parse().map_err(|_| {
              crate::error::Error::InvalidConfiguration(format!(
                "{} is not a number: {}", TEMPERATURE_VAR, raw
              ))
            })?;
        }
        if let Some(raw) = get(TIMEOUT_VAR)
        {   config.timeout_secs = raw.parse().map_err(|_| {
              crate::error::Error::InvalidConfiguration(format!(
                "{} is not a whole number: {}", TIMEOUT_VAR, raw
              ))
            })?;
        }
        if let Some(title) = get(APP_TITLE_VAR)
        {   config.headers.insert("X-Title".to_string(), title);
        }
        if let Some(referer) = get(REFERER_VAR)
        {   config.headers.insert(
              "HTTP-Referer".to_string(),
              referer
            );
        }
        if let Some(raw) = get(ALLOW_EMPTY_MENU_VAR)
        {   config.policy = match raw.to_ascii_lowercase().as_str()
            {   "1" | "true" | "yes" => {
                  ValidationPolicy::AllowEmptyMenu
                }
              , "0" | "false" | "no" => ValidationPolicy::Strict
              , _ => {
                  return Err(
                    crate::error::Error::InvalidConfiguration(
                      format!(
                        "{} must be true or false: {}",
                        ALLOW_EMPTY_MENU_VAR, raw
                      )
                    )
                  );
                }
            };
        }

        config.validate()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Check the settings a request depends on
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   if self.api_key.trim().is_empty()
        {   return Err(crate::error::Error::MissingApiKey(
              API_KEY_VAR.to_string()
            ));
        }
        if self.api_base.trim().is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "api base URL is empty".to_string()
            ));
        }
        if self.model.trim().is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "model is empty".to_string()
            ));
        }
        if !self.temperature.is_finite()
          || !(0.0..=2.0).contains(&self.temperature)
        {   return Err(crate::error::Error::InvalidConfiguration(
              format!(
                "temperature {} outside 0.0..=2.0",
                self.temperature
              )
            ));
        }
        if self.timeout_secs == 0
        {   return Err(crate::error::Error::InvalidConfiguration(
              "timeout must be positive".to_string()
            ));
        }
        Ok(())
    }

    /// Full chat completions URL
    pub fn completions_url(&self) -> String
    {   format!(
          "{}/chat/completions",
          self.api_base.trim_end_matches('/')
        )
    }
}
