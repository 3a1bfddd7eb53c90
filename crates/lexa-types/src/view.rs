use crate::entry::WordEntry;

/// Flattened presentation model for one rendered lookup.
///
/// Built fresh from the first service entry per search and discarded
/// when the next search replaces it.
#[derive(Debug, Clone)]
pub struct LookupView {
    pub word: String,
    /// Resolved phonetic text; empty when the entry carries none.
    pub phonetic: String,
    /// Pronunciation audio URL the play affordance is wired to.
    pub audio_url: Option<String>,
    pub source_url: Option<String>,
    pub meanings: Vec<MeaningView>,
}

#[derive(Debug, Clone)]
pub struct MeaningView {
    pub part_of_speech: String,
    pub definitions: Vec<DefinitionView>,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DefinitionView {
    pub text: String,
    pub example: Option<String>,
}

impl LookupView {
    /// Flatten a service entry for display.
    ///
    /// Phonetic text prefers the top-level field, then the first
    /// phonetics entry with non-empty text. Audio takes the first
    /// phonetics entry with a non-empty URL; entries lacking audio are
    /// skipped, later entries are never preferred. Both chains are
    /// first-match-wins by contract.
    pub fn from_entry(entry: WordEntry) -> Self {
        let phonetic = entry
            .phonetic
            .filter(|text| !text.is_empty())
            .or_else(|| {
                entry
                    .phonetics
                    .iter()
                    .find_map(|p| p.text.clone().filter(|text| !text.is_empty()))
            })
            .unwrap_or_default();

        let audio_url = entry
            .phonetics
            .iter()
            .find_map(|p| p.audio.clone().filter(|url| !url.is_empty()));

        let meanings = entry
            .meanings
            .into_iter()
            .map(|meaning| MeaningView {
                part_of_speech: meaning.part_of_speech,
                definitions: meaning
                    .definitions
                    .into_iter()
                    .map(|d| DefinitionView {
                        text: d.definition,
                        example: d.example,
                    })
                    .collect(),
                synonyms: meaning.synonyms,
            })
            .collect();

        Self {
            word: entry.word,
            phonetic,
            audio_url,
            source_url: entry.source_urls.into_iter().next(),
            meanings,
        }
    }
}
