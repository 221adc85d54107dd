/// Splits text into words on any run of whitespace.
///
/// Punctuation stays attached to the word it touches and no normalization is
/// applied. Whitespace-only input yields an empty sequence; the caller decides
/// whether that is an error.
pub fn tokenize_text(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
