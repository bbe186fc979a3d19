use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{Attribute, Selector, SelectorParseError};

/// Error type for element construction failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The selector string was malformed.
    Selector(SelectorParseError),
    /// A child argument was neither text nor an already-built [`Node`].
    ///
    /// No coercion is performed: a number or boolean passed as a child must
    /// be pre-formatted to text by the caller.
    InvalidChildKind(ValueKind),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Selector(e) => write!(f, "selector error: {}", e),
            BuildError::InvalidChildKind(kind) => {
                write!(f, "a {} value cannot be used as a child", kind)
            }
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Selector(e) => Some(e),
            BuildError::InvalidChildKind(_) => None,
        }
    }
}

impl From<SelectorParseError> for BuildError {
    fn from(e: SelectorParseError) -> Self {
        BuildError::Selector(e)
    }
}

/// How selector-derived classes merge with classes from an explicit `class`
/// attribute set on the builder.
///
/// Either way, duplicates are removed and the first-seen order is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassMerge {
    /// Selector-derived classes first, then `class`-attribute classes.
    #[default]
    SelectorFirst,
    /// `class`-attribute classes first, then selector-derived classes.
    AttributeFirst,
}

/// The kind of a [`Value`], used to report which kind was rejected as a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Plain text.
    Text,
    /// A finished element.
    Node,
    /// An omitted child.
    Null,
    /// An integer.
    Int,
    /// A floating-point number.
    Float,
    /// A boolean.
    Bool,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Text => "text",
            ValueKind::Node => "node",
            ValueKind::Null => "null",
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::Bool => "boolean",
        })
    }
}

/// A loosely-typed child argument for the children stage.
///
/// Only [`Value::Text`] and [`Value::Node`] become children; [`Value::Null`]
/// is skipped without emitting a placeholder, and every other kind fails the
/// build with [`BuildError::InvalidChildKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'bump> {
    /// Plain text, rendered as a text node.
    Text(BumpString<'bump>),
    /// A finished element, attached without modification.
    Node(Node<'bump>),
    /// An omitted child; skipped.
    Null,
    /// An integer. Not a valid child.
    Int(i128),
    /// A floating-point number. Not a valid child.
    Float(f64),
    /// A boolean. Not a valid child.
    Bool(bool),
}

impl<'bump> Value<'bump> {
    /// Create a text value from a string.
    pub fn text(bump: &'bump Bump, text: &str) -> Self {
        Value::Text(BumpString::from_str_in(text, bump))
    }

    /// Get the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Node(_) => ValueKind::Node,
            Value::Null => ValueKind::Null,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
        }
    }
}

impl<'bump> From<Node<'bump>> for Value<'bump> {
    fn from(node: Node<'bump>) -> Self {
        Value::Node(node)
    }
}

/// A child of a [`Node`]: either a text node or a nested element.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Child<'bump> {
    /// A text node.
    Text {
        /// The text of the node.
        text: BumpString<'bump>,
    },
    /// A nested element.
    Node {
        /// The element.
        node: Node<'bump>,
    },
}

impl<'bump> Child<'bump> {
    /// Get the text if this is a [`Text`] child.
    ///
    /// [`Text`]: Child::Text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Child::Text { text } => Some(text.as_str()),
            _ => None,
        }
    }

    /// Get the node if this is a [`Node`] child.
    ///
    /// [`Node`]: Child::Node
    pub fn as_node(&self) -> Option<&Node<'bump>> {
        match self {
            Child::Node { node } => Some(node),
            _ => None,
        }
    }

    /// Returns `true` if the child is a text node.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Child::Text { .. })
    }

    /// Returns `true` if the child is a nested element.
    #[must_use]
    pub fn is_node(&self) -> bool {
        matches!(self, Child::Node { .. })
    }
}

/// A fully-assembled element: a tag name, an optional id, classes, attributes
/// and children.
///
/// A `Node` is immutable once the children stage has produced it; there is no
/// mutation API. Children are owned exclusively by their parent, so the tree
/// has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node<'bump> {
    tag: BumpString<'bump>,
    id: Option<BumpString<'bump>>,
    classes: BumpVec<'bump, BumpString<'bump>>,
    attributes: BumpVec<'bump, Attribute<'bump>>,
    children: BumpVec<'bump, Child<'bump>>,
    void: bool,
}

impl<'bump> Node<'bump> {
    /// Merge the selector, accumulated attributes and child values into a
    /// finished node.
    ///
    /// Children are resolved left-to-right in argument order. Each node child
    /// was already finalized by its own builder invocation and is attached
    /// as-is. A failure returns before any node is produced.
    pub(crate) fn assemble(
        bump: &'bump Bump,
        tag: BumpString<'bump>,
        void: bool,
        selector: Selector<'bump>,
        mut attributes: BumpVec<'bump, Attribute<'bump>>,
        class_merge: ClassMerge,
        values: impl IntoIterator<Item = Value<'bump>>,
    ) -> Result<Self, BuildError> {
        let (mut id, selector_classes) = selector.into_parts();

        // An accumulated `id` attribute overwrites the selector-derived id;
        // the accumulator runs after the selector stage, so the write order
        // makes it the later write.
        if let Some(index) = attributes.iter().position(|a| a.key() == "id") {
            let attr = attributes.remove(index);
            if let Some(value) = attr.value() {
                id = Some(BumpString::from_str_in(value, bump));
            }
        }

        let class_attr = attributes
            .iter()
            .position(|a| a.key() == "class")
            .map(|index| attributes.remove(index));
        let attr_classes = class_attr
            .as_ref()
            .and_then(|a| a.value())
            .map(|v| v.split_whitespace().collect::<Vec<_>>())
            .unwrap_or_default();
        let selector_classes: Vec<&str> =
            selector_classes.iter().map(|c| c.as_str()).collect();

        let mut classes = BumpVec::new_in(bump);
        let (first, second) = match class_merge {
            ClassMerge::SelectorFirst => (&selector_classes, &attr_classes),
            ClassMerge::AttributeFirst => (&attr_classes, &selector_classes),
        };
        for &class in first.iter().chain(second.iter()) {
            if !classes.iter().any(|c: &BumpString<'bump>| c.as_str() == class) {
                classes.push(BumpString::from_str_in(class, bump));
            }
        }

        let mut children = BumpVec::new_in(bump);
        for value in values {
            match value {
                Value::Null => {}
                Value::Text(text) => children.push(Child::Text { text }),
                Value::Node(node) => children.push(Child::Node { node }),
                other => return Err(BuildError::InvalidChildKind(other.kind())),
            }
        }

        Ok(Node {
            tag,
            id,
            classes,
            attributes,
            children,
            void,
        })
    }

    /// Get the tag name.
    pub fn tag(&self) -> &str {
        self.tag.as_str()
    }

    /// Get the id, if one was set.
    pub fn id(&self) -> Option<&str> {
        self.id.as_ref().map(|s| s.as_str())
    }

    /// Get the class names, in first-seen order.
    pub fn classes(&self) -> &[BumpString<'bump>] {
        self.classes.as_slice()
    }

    /// Get the attributes, in insertion order. The `id` and `class`
    /// attributes consumed during assembly are not included.
    pub fn attributes(&self) -> &[Attribute<'bump>] {
        self.attributes.as_slice()
    }

    /// Look up an attribute value by key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key() == key)
            .and_then(|a| a.value())
    }

    /// Get the children, in the order they were supplied.
    pub fn children(&self) -> &[Child<'bump>] {
        self.children.as_slice()
    }

    /// Returns `true` if the tag is a void element (renders without a closing
    /// tag).
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.void
    }

    /// Get the concatenated text of the node's text descendants.
    ///
    /// This will return an empty string if no inner text exists.
    pub fn inner_text(&self, bump: &'bump Bump) -> BumpString<'bump> {
        let mut result = BumpString::new_in(bump);
        for child in self.children.iter() {
            match child {
                Child::Text { text } => result.push_str(text.as_str()),
                Child::Node { node } => result.push_str(node.inner_text(bump).as_str()),
            }
        }
        result
    }
}
