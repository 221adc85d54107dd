//! ORP-centered word layout.
//!
//! The layout is technology neutral: it splits a word around its anchor and
//! works out the padding that puts the anchor at the center column. Applying
//! emphasis to the anchor is left to the surface that draws it.

use crate::engine::ovp::calculate_anchor_position;

/// A word split around its anchor, with the padding that centers the anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedWord {
    pub left_padding: usize,
    pub before: String,
    /// The anchor character, empty only for degenerate words.
    pub focus: String,
    pub after: String,
    pub right_padding: usize,
}

impl FormattedWord {
    fn blank(width: usize) -> Self {
        Self {
            left_padding: width,
            before: String::new(),
            focus: String::new(),
            after: String::new(),
            right_padding: 0,
        }
    }

    /// The word without padding.
    pub fn word(&self) -> String {
        format!("{}{}{}", self.before, self.focus, self.after)
    }

    /// The full line without any emphasis applied.
    pub fn plain(&self) -> String {
        format!(
            "{}{}{}{}{}",
            " ".repeat(self.left_padding),
            self.before,
            self.focus,
            self.after,
            " ".repeat(self.right_padding)
        )
    }

    /// Number of characters the line occupies.
    pub fn visible_width(&self) -> usize {
        self.left_padding
            + self.before.chars().count()
            + self.focus.chars().count()
            + self.after.chars().count()
            + self.right_padding
    }
}

/// Lays out `word` so its anchor lands on column `width / 2`.
///
/// The result is exactly `width` characters wide unless the word is too long
/// to center. In that case the padding on the short side is clamped to zero
/// and the line overflows `width`.
pub fn format_word(word: &str, width: usize) -> FormattedWord {
    if word.is_empty() {
        return FormattedWord::blank(width);
    }

    let chars: Vec<char> = word.chars().collect();
    let anchor = calculate_anchor_position(word).min(chars.len());

    let before: String = chars[..anchor].iter().collect();
    let focus: String = chars.get(anchor).map(|c| c.to_string()).unwrap_or_default();
    let after: String = chars
        .get(anchor + 1..)
        .map(|rest| rest.iter().collect())
        .unwrap_or_default();

    let center = width / 2;
    let left_padding = center.saturating_sub(anchor);
    let right_padding =
        width.saturating_sub(center + focus.chars().count() + after.chars().count());

    FormattedWord {
        left_padding,
        before,
        focus,
        after,
        right_padding,
    }
}
