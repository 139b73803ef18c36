//! Single-placeholder prompt templates

use serde::{Deserialize, Serialize};

pub const NAME_TEMPLATE: &str
  = "I want to open a restaurant that serves {cuisine} food. \
     Suggest only one fancy name for this. Provide only one answer";

pub const ITEMS_TEMPLATE: &str
  = "Suggest some menu items for {restaurant_name}. \
     Return it as a comma separated list.";

/// A template string bound to exactly one named variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPromptTemplate")]
pub struct PromptTemplate
{   template: String
  , variable: String
}

// Deserialized templates go through the placeholder check too.
#[derive(Deserialize)]
struct RawPromptTemplate
{   template: String
  , variable: String
}

impl TryFrom<RawPromptTemplate> for PromptTemplate
{   type Error = crate::error::Error;

    fn try_from(raw: RawPromptTemplate) -> Result<Self, Self::Error>
    {   PromptTemplate::new(raw.template, raw.variable)
    }
}

impl PromptTemplate
{   pub fn new(
      template: impl Into<String>
    , variable: impl Into<String>
    ) -> Result<Self, crate::error::Error>
    {   let template = template.into();
        let variable = variable.into();
        let placeholder = format!("{{{}}}", variable);
        if variable.is_empty() || !template.contains(&placeholder)
        {   return Err(crate::error::Error::InvalidTemplate(
              format!("template has no {} placeholder", placeholder)
            ));
        }
        Ok(PromptTemplate { template, variable })
    }

    /// Template for step one, bound to `cuisine`
    pub fn restaurant_name() -> Self
    {   PromptTemplate
        {   template: NAME_TEMPLATE.to_string()
          , variable: "cuisine".to_string()
        }
    }

    /// Template for step two, bound to `restaurant_name`
    pub fn menu_items() -> Self
    {   PromptTemplate
        {   template: ITEMS_TEMPLATE.to_string()
          , variable: "restaurant_name".to_string()
        }
    }

    pub fn variable(&self) -> &str
    {   &self.variable
    }

    /// Substitute every occurrence of the placeholder
    pub fn render(&self, value: &str) -> String
    {   self.template.replace(
          &format!("{{{}}}", self.variable),
          value
        )
    }
}
