//! OpenAI-compatible chat completion wire types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "user".to_string()
          , content: content.into()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub temperature: f32
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>
  , pub stream: bool
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse
{   #[serde(default)]
    pub choices: Vec<Choice>
  , #[serde(default)]
    pub model: Option<String>
  , #[serde(default)]
    pub usage: Option<Usage>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ChatMessage
  , #[serde(default)]
    pub finish_reason: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage
{   #[serde(default)]
    pub prompt_tokens: usize
  , #[serde(default)]
    pub completion_tokens: usize
  , #[serde(default)]
    pub total_tokens: usize
}
