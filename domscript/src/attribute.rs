use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::Bump;

/// A key-value pair for an element attribute.
///
/// A value of `None` is a bare boolean attribute (present without a value,
/// like `disabled`). Values are always strings: the builder performs no
/// implicit coercion, so callers pre-format numbers and other types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attribute<'bump> {
    key: BumpString<'bump>,
    value: Option<BumpString<'bump>>,
}

impl<'bump> Attribute<'bump> {
    /// Create a new attribute with a string key and value.
    pub fn new(bump: &'bump Bump, key: &str, value: &str) -> Self {
        Attribute {
            key: BumpString::from_str_in(key, bump),
            value: Some(BumpString::from_str_in(value, bump)),
        }
    }

    /// Create a boolean attribute (no value).
    pub fn boolean(bump: &'bump Bump, key: &str) -> Self {
        Attribute {
            key: BumpString::from_str_in(key, bump),
            value: None,
        }
    }

    /// Get the key of the attribute.
    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    /// Get the value as a string slice, if the attribute has one.
    pub fn value(&self) -> Option<&str> {
        self.value.as_ref().map(|v| v.as_str())
    }

    pub(crate) fn set_value(&mut self, bump: &'bump Bump, value: Option<&str>) {
        self.value = value.map(|v| BumpString::from_str_in(v, bump));
    }
}

impl fmt::Display for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}=\"{}\"", self.key.as_str(), value.as_str()),
            None => write!(f, "{}", self.key.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_valued_and_boolean_forms() {
        let bump = Bump::new();
        assert_eq!(
            Attribute::new(&bump, "src", "a.jpg").to_string(),
            "src=\"a.jpg\""
        );
        assert_eq!(Attribute::boolean(&bump, "disabled").to_string(), "disabled");
    }
}
