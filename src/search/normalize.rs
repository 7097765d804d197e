use unicode_normalization::UnicodeNormalization;

/// Comparison key for substring search: lowercased, decomposed, with the
/// combining diacritical marks (U+0300..=U+036F) dropped. Never displayed.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}
