mod client;
mod error;

pub use client::DictApiClient;
pub use error::LookupError;

use async_trait::async_trait;
use lexa_types::WordEntry;

/// A word-definition backend the search workflow can query.
#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// Look up a word, returning at least one entry on success.
    async fn lookup(&self, word: &str) -> Result<Vec<WordEntry>, LookupError>;
}
