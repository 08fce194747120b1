use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Word,
    Char,
}

impl UnitKind {
    /// Class put on every rendered unit, the hook for step selectors.
    pub fn class(self) -> &'static str {
        match self {
            UnitKind::Word => "word",
            UnitKind::Char => "char",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextToken {
    /// Animated on its own.
    Unit(String),
    /// Whitespace kept verbatim between units and never animated.
    Separator(String),
}

impl TextToken {
    pub fn as_str(&self) -> &str {
        match self {
            TextToken::Unit(text) | TextToken::Separator(text) => text,
        }
    }
}

/// A string projected into units for staggered reveals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitText {
    original: String,
    unit: UnitKind,
    tokens: Vec<TextToken>,
}

impl SplitText {
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn unit(&self) -> UnitKind {
        self.unit
    }

    pub fn tokens(&self) -> &[TextToken] {
        &self.tokens
    }

    pub fn units(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(|token| match token {
            TextToken::Unit(text) => Some(text.as_str()),
            TextToken::Separator(_) => None,
        })
    }

    pub fn unit_count(&self) -> usize {
        self.units().count()
    }

    /// Joins every token back together; always equal to the original.
    pub fn restore(&self) -> String {
        self.tokens.iter().map(TextToken::as_str).collect()
    }
}

/// Splits `text` into words (on Unicode whitespace) or code points. Whitespace
/// runs are kept as separators so [`SplitText::restore`] is lossless.
pub fn split_text(text: &str, unit: UnitKind) -> SplitText {
    let mut tokens: Vec<TextToken> = Vec::new();

    match unit {
        UnitKind::Word => {
            let mut current = String::new();
            let mut in_space = false;
            for c in text.chars() {
                let space = c.is_whitespace();
                if space != in_space && !current.is_empty() {
                    tokens.push(word_token(std::mem::take(&mut current), in_space));
                }
                in_space = space;
                current.push(c);
            }
            if !current.is_empty() {
                tokens.push(word_token(current, in_space));
            }
        }
        UnitKind::Char => {
            for c in text.chars() {
                if c.is_whitespace() {
                    match tokens.last_mut() {
                        Some(TextToken::Separator(run)) => run.push(c),
                        _ => tokens.push(TextToken::Separator(c.to_string())),
                    }
                } else {
                    tokens.push(TextToken::Unit(c.to_string()));
                }
            }
        }
    }

    SplitText {
        original: text.to_string(),
        unit,
        tokens,
    }
}

fn word_token(text: String, whitespace: bool) -> TextToken {
    if whitespace {
        TextToken::Separator(text)
    } else {
        TextToken::Unit(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_split_restores_exactly() {
        for text in ["", "A", "A B", "A  B", " A B ", "\tBUILD,\u{00a0}HOST\n& LAUNCH  "] {
            assert_eq!(split_text(text, UnitKind::Word).restore(), text, "{text:?}");
        }
    }

    #[test]
    fn char_split_restores_exactly() {
        for text in ["", "A", "A  B", "Own your frontend.", "héllo wörld ✓"] {
            assert_eq!(split_text(text, UnitKind::Char).restore(), text, "{text:?}");
        }
    }

    #[test]
    fn words_and_separators() {
        let split = split_text("A  B", UnitKind::Word);
        assert_eq!(
            split.tokens(),
            &[
                TextToken::Unit("A".into()),
                TextToken::Separator("  ".into()),
                TextToken::Unit("B".into()),
            ]
        );
        assert_eq!(split.units().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn empty_and_blank_have_no_units() {
        assert_eq!(split_text("", UnitKind::Word).unit_count(), 0);
        assert_eq!(split_text("   ", UnitKind::Word).unit_count(), 0);
        assert_eq!(split_text("   ", UnitKind::Char).tokens().len(), 1);
    }

    #[test]
    fn chars_leave_spaces_unwrapped() {
        let split = split_text("ab c", UnitKind::Char);
        assert_eq!(split.units().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(split.tokens()[2], TextToken::Separator(" ".into()));
    }

    #[test]
    fn chars_split_on_code_points() {
        let split = split_text("ñ✓", UnitKind::Char);
        assert_eq!(split.unit_count(), 2);
    }

    #[test]
    fn splitting_twice_is_stable() {
        let once = split_text("Empowering creators", UnitKind::Word);
        let twice = split_text(&once.restore(), UnitKind::Word);
        assert_eq!(once, twice);
    }
}
