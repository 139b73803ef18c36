pub mod error;
pub mod config;
pub mod request;
pub mod client;
pub mod prompt;
pub mod pipeline;
pub mod normalize;
pub mod render;
use serde::{Deserialize, Serialize};

/*

menu_designer: pick a cuisine, get a restaurant name and a menu.

Two chat completions run back to back against an OpenAI-compatible
endpoint (OpenRouter by default):

  cuisine ──▶ [name prompt] ──▶ restaurant_name
                                      │
                                      ▼
                              [items prompt] ──▶ menu_items (raw text)

The raw menu text is split into items by `normalize::menu_items`
and `render::render_menu` turns the pair into a printable page.

src/
├── lib.rs        # Re-exports and request/result types
├── error.rs      # Error taxonomy
├── config.rs     # Endpoint configuration from the environment
├── request.rs    # Chat completion wire types
├── client.rs     # CompletionClient trait + HTTP client
├── prompt.rs     # Prompt templates
├── pipeline.rs   # The two-step generation
├── normalize.rs  # Menu text -> items
├── render.rs     # HTML page
└── main.rs       # menu-designer CLI

*/

pub use client::{ChatCompletionClient, CompletionClient};
pub use config::{CompletionConfig, ValidationPolicy};
pub use error::{Error, Step};
pub use pipeline::MenuPipeline;
pub use prompt::PromptTemplate;

/// A request for one menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest
{   pub cuisine: String
}

impl GenerationRequest
{   pub fn new(cuisine: impl Into<String>) -> Result<Self, Error>
    {   let cuisine = cuisine.into();
        if cuisine.trim().is_empty()
        {   return Err(Error::InvalidCuisine);
        }
        Ok(GenerationRequest { cuisine })
    }
}

/// Raw output of both completion calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult
{   /// Step one output, untrimmed
    pub restaurant_name: String
  , /// Step two output, unparsed
    pub menu_items: String
}

impl GenerationResult
{   /// Name with surrounding whitespace removed
    pub fn name(&self) -> &str
    {   self.restaurant_name.trim()
    }

    /// Menu text split into items
    pub fn items(&self) -> Vec<String>
    {   normalize::menu_items(&self.menu_items)
    }
}
