use std::fmt;

/// Which of the two pipeline calls produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step
{   RestaurantName
  , MenuItems
}

impl fmt::Display for Step
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   match self
        {   Step::RestaurantName => write!(f, "restaurant name")
          , Step::MenuItems => write!(f, "menu items")
        }
    }
}

/// Custom error type for menu generation
/// Implements Clone so stub clients can replay failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// API key is missing from the environment
    MissingApiKey(String)
  , /// Invalid configuration
    InvalidConfiguration(String)
  , /// Prompt template has no placeholder for its variable
    InvalidTemplate(String)
  , /// Cuisine was blank
    InvalidCuisine
  , /// HTTP request error
    HttpError(String)
  , /// API returned a non-success status
    ApiError
    {   status: u16
      , body: String
    }
  , /// Failed to parse API response
    ParseError(String)
  , /// No choices in API response
    NoChoicesInResponse
  , /// Request timed out
    Timeout
  , /// A completion came back blank
    EmptyCompletion
    {   step: Step
    }
}

impl Error
{   /// Missing or invalid process configuration; fatal at startup
    pub fn is_configuration(&self) -> bool
    {   matches!(
          self,
          Error::MissingApiKey(_) | Error::InvalidConfiguration(_)
        )
    }

    /// The remote completion call failed
    pub fn is_upstream(&self) -> bool
    {   matches!(
          self,
          Error::HttpError(_)
            | Error::ApiError { .. }
            | Error::ParseError(_)
            | Error::NoChoicesInResponse
            | Error::Timeout
        )
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey(var) => {
              write!(f, "Missing API key: {} is not set", var)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::InvalidTemplate(msg) => {
              write!(f, "Invalid prompt template: {}", msg)
            }
          , Error::InvalidCuisine => {
              write!(f, "Cuisine must not be empty")
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError { status, body } => {
              write!(f, "API error ({}): {}", status, body)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::NoChoicesInResponse => {
              write!(f, "API response contained no choices")
            }
          , Error::Timeout => {
              write!(f, "Request timed out")
            }
          , Error::EmptyCompletion { step } => {
              write!(f, "Model returned an empty {}", step)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   if e.is_timeout()
        {   Error::Timeout
        } else if e.is_decode()
        {   Error::ParseError(e.to_string())
        } else
        {   Error::HttpError(e.to_string())
        }
    }
}
