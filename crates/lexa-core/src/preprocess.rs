use unicode_normalization::UnicodeNormalization;

/// Normalize a raw query before validation and lookup.
pub fn clean_query(text: &str) -> String {
    let mut text = text.trim().to_string();

    if text.is_empty() {
        return text;
    }

    // Unicode normalization (NFKC)
    text = text.nfkc().collect();

    text.replace(['\n', '\r'], "").trim().to_string()
}
