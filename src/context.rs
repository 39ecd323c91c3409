use std::env;

use thiserror::Error;

use crate::client::zendesk_rest_client::{ZendeskClientError, ZendeskRestClient};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable is not set.")]
    MissingVar(&'static str),
}

/// Connection settings for the Zendesk API. Loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub base_url: String,
    pub ticket_path: String,
    pub username: String,
    pub api_token: String,
}

impl Credentials {
    pub fn new(base_url: &str, ticket_path: &str, username: &str, api_token: &str) -> Self {
        Credentials {
            base_url: base_url.to_string(),
            ticket_path: ticket_path.to_string(),
            username: username.to_string(),
            api_token: api_token.to_string(),
        }
    }

    /// Reads `ZENDESK_BASE_URL`, `ZENDESK_TICKET_PATH`, `ZENDESK_USERNAME` and
    /// `ZENDESK_API_TOKEN`. A `.env` file in the working directory is honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Ok(Credentials {
            base_url: required_var("ZENDESK_BASE_URL")?,
            ticket_path: required_var("ZENDESK_TICKET_PATH")?,
            username: required_var("ZENDESK_USERNAME")?,
            api_token: required_var("ZENDESK_API_TOKEN")?,
        })
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

#[derive(Debug, Clone)]
pub struct ZendeskContext {
    pub zendesk_rest_client: ZendeskRestClient,
}

impl ZendeskContext {
    pub fn new(credentials: &Credentials) -> Result<Self, ZendeskClientError> {
        Ok(ZendeskContext {
            zendesk_rest_client: ZendeskRestClient::new(credentials)?,
        })
    }
}
