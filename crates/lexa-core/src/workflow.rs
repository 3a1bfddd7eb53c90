use std::sync::Arc;

use lexa_dict::{DictionarySource, LookupError};
use lexa_store::{PrefKey, PreferenceStore};
use lexa_types::LookupView;

use crate::preprocess;
use crate::surface::RenderSurface;

/// Where the last submission left the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    EmptyInput,
    Loading,
    Rendered,
    ApiError,
}

/// Drives one submission from raw input through lookup to the surface.
///
/// Every state other than `Loading` is stable until the next
/// submission; there is no retry and no timeout beyond the source's
/// own request timeout.
pub struct SearchWorkflow<D, R> {
    source: D,
    surface: R,
    prefs: Arc<dyn PreferenceStore>,
    state: SearchState,
}

impl<D, R> SearchWorkflow<D, R>
where
    D: DictionarySource,
    R: RenderSurface,
{
    pub fn new(source: D, surface: R, prefs: Arc<dyn PreferenceStore>) -> Self {
        Self {
            source,
            surface,
            prefs,
            state: SearchState::Idle,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Handle one user submission.
    pub async fn submit(&mut self, raw_query: &str) -> anyhow::Result<()> {
        let query = preprocess::clean_query(raw_query);

        if query.is_empty() {
            self.state = SearchState::EmptyInput;
            self.surface.render_empty_input(true).await?;
            self.surface.clear_result().await?;
            return Ok(());
        }

        // The error indicator is cleared before the request goes out.
        self.surface.render_empty_input(false).await?;
        self.surface.clear_result().await?;
        self.state = SearchState::Loading;

        match self.source.lookup(&query).await {
            Ok(entries) => {
                // Non-empty by the source contract; treat a misbehaving
                // source like a failed lookup.
                let Some(entry) = entries.into_iter().next() else {
                    return self.fail(&query, &LookupError::UnexpectedShape).await;
                };

                self.prefs.set(PrefKey::LastWord, &query);
                self.surface.render_result(LookupView::from_entry(entry)).await?;
                self.state = SearchState::Rendered;
                Ok(())
            }
            Err(err) => self.fail(&query, &err).await,
        }
    }

    /// Re-run the stored last search, if any. Part of restore-on-load.
    pub async fn restore_last_word(&mut self) -> anyhow::Result<()> {
        if let Some(word) = self.prefs.get(PrefKey::LastWord) {
            tracing::debug!("restoring last search {word:?}");
            self.submit(&word).await?;
        }
        Ok(())
    }

    async fn fail(&mut self, query: &str, err: &LookupError) -> anyhow::Result<()> {
        tracing::warn!("lookup for {query:?} failed: {err}");
        self.surface.clear_result().await?;
        self.surface.render_error().await?;
        self.state = SearchState::ApiError;
        Ok(())
    }
}
