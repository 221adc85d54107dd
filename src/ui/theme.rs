use crossterm::style::{Attribute, Color, ContentStyle};

/// Styling applied to the anchor character and the rest of the word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub text: ContentStyle,
    pub anchor: ContentStyle,
}

impl Theme {
    /// Bold red anchor on the terminal's own colours
    pub fn classic() -> Self {
        Self {
            text: ContentStyle::new(),
            anchor: ContentStyle {
                foreground_color: Some(Color::Red),
                attributes: Attribute::Bold.into(),
                ..ContentStyle::new()
            },
        }
    }

    /// No styling at all, for terminals without colour support
    pub fn plain() -> Self {
        Self {
            text: ContentStyle::new(),
            anchor: ContentStyle::new(),
        }
    }

    /// Picks `classic` or `plain`, honouring `NO_COLOR`.
    pub fn for_terminal(styled: bool) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if styled && !no_color {
            Self::classic()
        } else {
            Self::plain()
        }
    }
}
