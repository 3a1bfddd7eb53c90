use std::time::Duration;

use async_trait::async_trait;
use lexa_types::WordEntry;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::StatusCode;

use crate::{DictionarySource, LookupError};

/// HTTP client for the public word-definition service.
#[derive(Clone)]
pub struct DictApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl DictApiClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn entry_url(&self, word: &str) -> String {
        format!(
            "{}/{}",
            self.base_url,
            utf8_percent_encode(word, NON_ALPHANUMERIC)
        )
    }
}

#[async_trait]
impl DictionarySource for DictApiClient {
    async fn lookup(&self, word: &str) -> Result<Vec<WordEntry>, LookupError> {
        let url = self.entry_url(word);
        tracing::debug!("looking up {word:?} at {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(word.to_string()));
        }
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body: serde_json::Value = response.json().await?;
        let entries = decode_entries(word, body)?;
        tracing::debug!("{} entries for {word:?}", entries.len());
        Ok(entries)
    }
}

/// Decode a success-status body.
///
/// The service answers with a JSON array of entry objects; anything
/// else (including an empty array) counts as a failed lookup.
fn decode_entries(word: &str, body: serde_json::Value) -> Result<Vec<WordEntry>, LookupError> {
    if !body.is_array() {
        return Err(LookupError::UnexpectedShape);
    }

    let entries: Vec<WordEntry> = serde_json::from_value(body).map_err(|e| {
        tracing::debug!("entry decode failed: {e}");
        LookupError::UnexpectedShape
    })?;

    if entries.is_empty() {
        return Err(LookupError::NotFound(word.to_string()));
    }

    Ok(entries)
}
