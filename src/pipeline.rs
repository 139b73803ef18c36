//! Two-step generation: cuisine -> restaurant name -> menu items

use log::{debug, info, error};
use crate::client::CompletionClient;
use crate::config::ValidationPolicy;
use crate::error::{Error, Step};
use crate::prompt::PromptTemplate;
use crate::{GenerationRequest, GenerationResult};

pub struct MenuPipeline<C>
{   client: C
  , name_prompt: PromptTemplate
  , items_prompt: PromptTemplate
  , policy: ValidationPolicy
}

impl<C: CompletionClient> MenuPipeline<C>
{   /// Pipeline with the fixed name and menu templates
    pub fn new(client: C, policy: ValidationPolicy) -> Self
    {   MenuPipeline
        {   client
          , name_prompt: PromptTemplate::restaurant_name()
          , items_prompt: PromptTemplate::menu_items()
          , policy
        }
    }

    /// Swap in other templates
    pub fn with_templates(
      mut self
    , name_prompt: PromptTemplate
    , items_prompt: PromptTemplate
    ) -> Self
    {   self.name_prompt = name_prompt;
        self.items_prompt = items_prompt;
        self
    }

    pub async fn generate_request(
      &self
    , request: &GenerationRequest
    ) -> Result<GenerationResult, Error>
    {   self.generate(&request.cuisine).await
    }

    /// Run both completions in order. Either both succeed or
    /// the first error is returned.
    pub async fn generate(&self, cuisine: &str)
      -> Result<GenerationResult, Error>
    {   if cuisine.trim().is_empty()
        {   error!("Rejected blank cuisine");
            return Err(Error::InvalidCuisine);
        }
        info!("Generating menu for cuisine: {}", cuisine);

        let name_prompt = self.name_prompt.render(cuisine);
        debug!(
          "Step 1 prompt ({}): {}",
          self.name_prompt.variable(),
          name_prompt
        );
        let restaurant_name = self.client.complete(&name_prompt).await?;
        if restaurant_name.trim().is_empty()
        {   error!("Model returned a blank restaurant name");
            return Err(Error::EmptyCompletion
            {   step: Step::RestaurantName
            });
        }
        debug!("Restaurant name: {}", restaurant_name.trim());

        let items_prompt = self.items_prompt.render(&restaurant_name);
        debug!(
          "Step 2 prompt ({}): {}",
          self.items_prompt.variable(),
          items_prompt
        );
        let menu_items = self.client.complete(&items_prompt).await?;
        if menu_items.trim().is_empty()
        {   match self.policy
            {   ValidationPolicy::Strict => {
                  error!("Model returned blank menu items");
                  return Err(Error::EmptyCompletion
                  {   step: Step::MenuItems
                  });
                }
              , ValidationPolicy::AllowEmptyMenu => {
                  info!("Accepting empty menu for: {}", restaurant_name.trim());
                }
            }
        }

        Ok(GenerationResult
        {   restaurant_name
          , menu_items
        })
    }
}
