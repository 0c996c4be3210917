//! RestTransport - reads overrides from a PostgREST-style hosted table.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;

use super::RemoteTransport;
use crate::config::RemoteConfig;
use crate::content::ContentOverrides;
use crate::error::TransportError;
use crate::language::Language;

/// Asks the backend for exactly one row; it answers 406 when there is none.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

#[derive(Deserialize)]
struct ContentRow {
    #[serde(default)]
    content: Option<ContentOverrides>,
}

/// Blocking HTTP transport fetching one `{language, content}` row per call.
pub struct RestTransport {
    client: Client,
    endpoint: String,
    anon_key: String,
}

impl RestTransport {
    pub fn new(config: &RemoteConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint(&config.url, &config.table),
            anon_key: config.anon_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RemoteTransport for RestTransport {
    fn fetch(&self, language: Language) -> Result<ContentOverrides, TransportError> {
        let filter = format!("eq.{}", language.code());
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("select", "content"), ("language", filter.as_str())])
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header(ACCEPT, SINGLE_OBJECT)
            .send()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_ACCEPTABLE || status == StatusCode::NOT_FOUND {
            return Err(TransportError::NotFound(language.code().to_string()));
        }
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        decode_row(&body)
    }
}

fn endpoint(url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", url.trim_end_matches('/'), table)
}

/// A row with a null or missing `content` column means "no overrides".
fn decode_row(body: &str) -> Result<ContentOverrides, TransportError> {
    let row: ContentRow =
        serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))?;
    Ok(row.content.unwrap_or_default())
}
