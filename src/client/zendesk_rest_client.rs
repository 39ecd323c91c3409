use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{HeaderValue, InvalidHeaderValue, AUTHORIZATION};
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use url::Url;

use crate::client::response_classifier::{self, ErrorKind};
use crate::context::Credentials;

#[derive(Error, Debug)]
pub enum ZendeskClientError {
    #[error("{}", .0.message())]
    Classified(ErrorKind),
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Malformed response body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid ticket URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Invalid authorization header: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

impl ZendeskClientError {
    /// Anything the upstream API did not classify collapses to `InternalError`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ZendeskClientError::Classified(kind) => *kind,
            _ => ErrorKind::InternalError,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ZendeskRestClient {
    client: reqwest::Client,
    base_url: String,
    ticket_path: String,
}

impl ZendeskRestClient {
    pub fn new(credentials: &Credentials) -> Result<Self, ZendeskClientError> {
        let mut authorization = HeaderValue::from_str(&basic_auth_header(
            &credentials.username,
            &credentials.api_token,
        ))?;
        authorization.set_sensitive(true);

        let client = reqwest::Client::builder()
            .user_agent("zendesk-ticket-viewer")
            .default_headers(std::iter::once((AUTHORIZATION, authorization)).collect())
            .build()?;

        Ok(ZendeskRestClient {
            client,
            base_url: credentials.base_url.clone(),
            ticket_path: credentials.ticket_path.clone(),
        })
    }

    /// Detail endpoint for one ticket. The id is appended as-is.
    pub fn ticket_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.base_url, self.ticket_path, id)
    }

    /// List endpoint with `per_page`, plus `page` when it is positive.
    pub fn ticket_page_url(&self, per_page: u32, page: Option<u32>) -> Result<Url, ZendeskClientError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, self.ticket_path))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("per_page", &per_page.to_string());
            if let Some(page) = page.filter(|page| *page > 0) {
                query.append_pair("page", &page.to_string());
            }
        }
        Ok(url)
    }

    /// Issues a single authenticated GET and returns the raw body.
    ///
    /// Non-2xx responses are turned into `ZendeskClientError::Classified` so the
    /// caller sees a status-specific error. Malformed URLs surface as transport errors.
    pub async fn fetch(&self, url: &str) -> Result<String, ZendeskClientError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::info!(%status, url, "Zendesk responded");

        if let Some(kind) = response_classifier::classify(status) {
            return Err(ZendeskClientError::Classified(kind));
        }

        Ok(response.text().await?)
    }

    pub async fn fetch_ticket(&self, id: &str) -> Result<ZendeskTicket, ZendeskClientError> {
        let text = self.fetch(&self.ticket_url(id)).await?;
        let response: TicketResponse = serde_json::from_str(&text)?;
        Ok(response.ticket)
    }

    pub async fn fetch_tickets(
        &self,
        per_page: u32,
        page: Option<u32>,
    ) -> Result<TicketListResponse, ZendeskClientError> {
        let url = self.ticket_page_url(per_page, page)?;
        let text = self.fetch(url.as_str()).await?;
        let response: TicketListResponse = serde_json::from_str(&text)?;
        Ok(response)
    }
}

/// `Basic ` followed by the standard base64 encoding of `username:token`.
///
/// The credentials are encoded as US-ASCII: any non-ASCII character is sent as `?`.
pub fn basic_auth_header(username: &str, token: &str) -> String {
    let credentials: Vec<u8> = format!("{}:{}", username, token)
        .chars()
        .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
        .collect();
    format!("Basic {}", STANDARD.encode(credentials))
}

#[derive(Debug, Clone, Deserialize)]
pub struct TicketResponse {
    pub ticket: ZendeskTicket,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TicketListResponse {
    pub tickets: Vec<ZendeskTicket>,
    pub count: u64,
    pub next_page: Option<String>,
    pub previous_page: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZendeskTicket {
    // number upstream, but accept a string too
    #[serde(deserialize_with = "id_as_text")]
    pub id: String,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

fn id_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(serde_json::Number),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(number) => number.to_string(),
        RawId::Text(text) => text,
    })
}
