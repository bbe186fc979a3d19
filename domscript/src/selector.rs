use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

/// Error type for selector parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorParseError {
    /// The selector starts with a `#` that is not followed by an identifier.
    EmptyId,
    /// A `.`-prefixed token contains an empty class segment (e.g. a bare `.`,
    /// `a..b`, or a trailing `.`).
    EmptyClass,
}

impl fmt::Display for SelectorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorParseError::EmptyId => {
                write!(f, "selector has a `#` with no identifier after it")
            }
            SelectorParseError::EmptyClass => {
                write!(f, "selector has a `.` with no class name after it")
            }
        }
    }
}

impl std::error::Error for SelectorParseError {}

/// The parsed form of a selector string: an optional identifier and an
/// ordered, duplicate-free list of class names.
///
/// A selector string is an optional leading `#identifier` (which may carry
/// `.class` suffixes), followed by any mix of `.class`-dotted tokens and bare
/// class tokens, separated by whitespace:
///
/// ```
/// use domscript::{bumpalo::Bump, Selector};
///
/// let bump = Bump::new();
/// let selector = Selector::parse(&bump, "#top border-b border-gray-300").unwrap();
/// assert_eq!(selector.id(), Some("top"));
/// assert_eq!(selector.classes().len(), 2);
/// ```
///
/// Parsing is permissive: tokens without a `#`/`.` prefix pass through as
/// literal class text, unknown characters included. There is no escaping
/// mechanism, so a literal `#` or `.` inside a class name is not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector<'bump> {
    id: Option<BumpString<'bump>>,
    classes: BumpVec<'bump, BumpString<'bump>>,
}

impl<'bump> Selector<'bump> {
    /// Create a selector with no identifier and no classes.
    pub fn empty(bump: &'bump Bump) -> Self {
        Self {
            id: None,
            classes: BumpVec::new_in(bump),
        }
    }

    /// Parse a selector string.
    ///
    /// This is a pure function: no side effects, and the same input always
    /// produces the same output.
    pub fn parse(bump: &'bump Bump, input: &str) -> Result<Self, SelectorParseError> {
        let mut selector = Self::empty(bump);
        for (index, token) in input.split_whitespace().enumerate() {
            if index == 0 && token.starts_with('#') {
                let mut segments = token[1..].split('.');
                let ident = segments.next().unwrap_or("");
                if ident.is_empty() {
                    return Err(SelectorParseError::EmptyId);
                }
                selector.id = Some(BumpString::from_str_in(ident, bump));
                for class in segments {
                    selector.push_class(bump, class)?;
                }
            } else if let Some(rest) = token.strip_prefix('.') {
                for class in rest.split('.') {
                    selector.push_class(bump, class)?;
                }
            } else {
                // Bare tokens are literal class text. Only the first token can
                // carry the id prefix, so a later `#...` lands here too.
                selector.push_class(bump, token)?;
            }
        }
        Ok(selector)
    }

    fn push_class(&mut self, bump: &'bump Bump, class: &str) -> Result<(), SelectorParseError> {
        if class.is_empty() {
            return Err(SelectorParseError::EmptyClass);
        }
        if !self.classes.iter().any(|c| c.as_str() == class) {
            self.classes.push(BumpString::from_str_in(class, bump));
        }
        Ok(())
    }

    /// Get the identifier, if the selector has one.
    pub fn id(&self) -> Option<&str> {
        self.id.as_ref().map(|s| s.as_str())
    }

    /// Get the class names, in first-seen order.
    pub fn classes(&self) -> &[BumpString<'bump>] {
        self.classes.as_slice()
    }

    /// Returns `true` if the selector has no identifier and no classes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.classes.is_empty()
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        Option<BumpString<'bump>>,
        BumpVec<'bump, BumpString<'bump>>,
    ) {
        (self.id, self.classes)
    }
}

/// Writes the canonical form: `#id` first (if present), then the class names,
/// all separated by single spaces. Parsing the canonical form yields an equal
/// selector.
impl fmt::Display for Selector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if let Some(id) = &self.id {
            write!(f, "#{}", id.as_str())?;
            first = false;
        }
        for class in &self.classes {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", class.as_str())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes<'a>(selector: &'a Selector<'_>) -> Vec<&'a str> {
        selector.classes().iter().map(|c| c.as_str()).collect()
    }

    #[test]
    fn parses_id_and_bare_classes() {
        let bump = Bump::new();
        let selector = Selector::parse(&bump, "#top border-b border-gray-300").unwrap();
        assert_eq!(selector.id(), Some("top"));
        assert_eq!(classes(&selector), ["border-b", "border-gray-300"]);
    }

    #[test]
    fn parses_dotted_classes_on_the_id_token() {
        let bump = Bump::new();
        let selector = Selector::parse(&bump, "#id.classA.classB extra-classes").unwrap();
        assert_eq!(selector.id(), Some("id"));
        assert_eq!(classes(&selector), ["classA", "classB", "extra-classes"]);
    }

    #[test]
    fn parses_standalone_dotted_token() {
        let bump = Bump::new();
        let selector = Selector::parse(&bump, ".a.b c").unwrap();
        assert_eq!(selector.id(), None);
        assert_eq!(classes(&selector), ["a", "b", "c"]);
    }

    #[test]
    fn empty_string_is_the_empty_selector() {
        let bump = Bump::new();
        let selector = Selector::parse(&bump, "").unwrap();
        assert!(selector.is_empty());
    }

    #[test]
    fn deduplicates_classes_preserving_first_seen_order() {
        let bump = Bump::new();
        let selector = Selector::parse(&bump, "a b a .b.c").unwrap();
        assert_eq!(classes(&selector), ["a", "b", "c"]);
    }

    #[test]
    fn bare_hash_is_an_error() {
        let bump = Bump::new();
        assert_eq!(
            Selector::parse(&bump, "#"),
            Err(SelectorParseError::EmptyId)
        );
    }

    #[test]
    fn bare_dot_is_an_error() {
        let bump = Bump::new();
        assert_eq!(
            Selector::parse(&bump, "."),
            Err(SelectorParseError::EmptyClass)
        );
        assert_eq!(
            Selector::parse(&bump, "#id..b"),
            Err(SelectorParseError::EmptyClass)
        );
        assert_eq!(
            Selector::parse(&bump, ".a."),
            Err(SelectorParseError::EmptyClass)
        );
    }

    #[test]
    fn non_leading_hash_token_is_literal_class_text() {
        let bump = Bump::new();
        let selector = Selector::parse(&bump, "a #b").unwrap();
        assert_eq!(selector.id(), None);
        assert_eq!(classes(&selector), ["a", "#b"]);
    }

    #[test]
    fn canonical_form_round_trips() {
        let bump = Bump::new();
        for input in [
            "#top border-b border-gray-300",
            "#id.classA.classB extra-classes",
            ".a.b c",
            "a.b",
            "text-lg leading-relaxed",
            "",
        ] {
            let once = Selector::parse(&bump, input).unwrap().to_string();
            let twice = Selector::parse(&bump, &once).unwrap().to_string();
            assert_eq!(once, twice, "canonical form of {input:?} is not stable");
        }
    }
}
