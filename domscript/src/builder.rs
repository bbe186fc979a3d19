//! Implements a builder DSL for constructing element trees through a series of methods.

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{Attribute, BuildError, ClassMerge, Node, Selector, SelectorParseError, Value};

/// The entry point for constructing elements using a bump allocator.
///
/// Every supported tag name has a method of the same name. The method takes a
/// selector string and returns a [`Pending`] element, which accepts chained
/// attribute assignments and is finalized by supplying children:
///
/// ```
/// use domscript::{bumpalo::Bump, builder::Builder};
///
/// let bump = Bump::new();
/// let b = Builder::new(&bump);
/// let root = b
///     .div("#top border-b")
///     .unwrap()
///     .children([b.text("hello")])
///     .unwrap();
/// assert_eq!(root.id(), Some("top"));
/// ```
///
/// To skip the selector stage, pass `""`.
#[derive(Clone, Copy)]
pub struct Builder<'bump> {
    bump: &'bump Bump,
    class_merge: ClassMerge,
}

impl<'bump> Builder<'bump> {
    /// Create a new builder with the given bump allocator.
    pub fn new(bump: &'bump Bump) -> Self {
        Self {
            bump,
            class_merge: ClassMerge::default(),
        }
    }

    /// Set how selector-derived classes merge with an explicit `class`
    /// attribute on elements made by this builder.
    pub fn with_class_merge(mut self, class_merge: ClassMerge) -> Self {
        self.class_merge = class_merge;
        self
    }

    /// Get a reference to the bump allocator.
    pub fn bump(&self) -> &'bump Bump {
        self.bump
    }

    /// Create a text child value from a string.
    pub fn text(&self, text: &str) -> Value<'bump> {
        Value::text(self.bump, text)
    }

    /// Create a pending element from a tag name and a selector string.
    ///
    /// Whether the tag is void (has no closing tag) is inferred from
    /// [`VOID_TAGS`]. The selector is parsed eagerly; a malformed selector
    /// fails here, before any attributes or children are supplied.
    pub fn tag(&self, name: &str, selector: &str) -> Result<Pending<'bump>, SelectorParseError> {
        self.tag_with_void(name, selector, VOID_TAGS.contains(&name))
    }

    fn tag_with_void(
        &self,
        name: &str,
        selector: &str,
        void: bool,
    ) -> Result<Pending<'bump>, SelectorParseError> {
        Ok(Pending {
            bump: self.bump,
            tag: BumpString::from_str_in(name, self.bump),
            void,
            selector: Selector::parse(self.bump, selector)?,
            attributes: BumpVec::new_in(self.bump),
            class_merge: self.class_merge,
        })
    }
}

/// An element between its selector stage and its children stage.
///
/// Attributes assigned here accumulate until the children stage finalizes the
/// element; assigning the same key twice keeps the second value
/// (last-write-wins, not an error). A `Pending` is owned by one builder
/// invocation and consumed by [`Pending::children`] or [`Pending::build`];
/// only the children stage produces a [`Node`].
pub struct Pending<'bump> {
    bump: &'bump Bump,
    tag: BumpString<'bump>,
    void: bool,
    selector: Selector<'bump>,
    attributes: BumpVec<'bump, Attribute<'bump>>,
    class_merge: ClassMerge,
}

impl<'bump> Pending<'bump> {
    /// Assign a string-valued attribute, returning the pending element for
    /// further chaining.
    ///
    /// Callers pre-format non-string values; no coercion is performed.
    pub fn set(mut self, key: &str, value: &str) -> Self {
        if let Some(attr) = self.attributes.iter_mut().find(|a| a.key() == key) {
            attr.set_value(self.bump, Some(value));
        } else {
            self.attributes.push(Attribute::new(self.bump, key, value));
        }
        self
    }

    /// Assign a bare boolean attribute (present without a value), returning
    /// the pending element for further chaining.
    pub fn flag(mut self, key: &str) -> Self {
        if let Some(attr) = self.attributes.iter_mut().find(|a| a.key() == key) {
            attr.set_value(self.bump, None);
        } else {
            self.attributes.push(Attribute::boolean(self.bump, key));
        }
        self
    }

    /// Finalize the element with the given children.
    ///
    /// Children are resolved left-to-right: text and node values attach in
    /// order, [`Value::Null`] entries are skipped, and any other kind fails
    /// with [`BuildError::InvalidChildKind`] without producing a node.
    pub fn children(
        self,
        values: impl IntoIterator<Item = Value<'bump>>,
    ) -> Result<Node<'bump>, BuildError> {
        Node::assemble(
            self.bump,
            self.tag,
            self.void,
            self.selector,
            self.attributes,
            self.class_merge,
            values,
        )
    }

    /// Finalize the element with no children.
    pub fn build(self) -> Result<Node<'bump>, BuildError> {
        self.children([])
    }
}

macro_rules! non_void_builders {
    ($($tag_ident:ident),*) => {
        impl<'bump> Builder<'bump> {
            $(
                #[doc = concat!("Create a pending non-void `", stringify!($tag_ident), "` element from a selector string.\n\nPass `\"\"` to skip the selector stage.")]
                pub fn $tag_ident(&self, selector: &str) -> Result<Pending<'bump>, SelectorParseError> {
                    self.tag_with_void(stringify!($tag_ident), selector, false)
                }
            )*
        }
        /// A list of all non-void tags.
        pub const NON_VOID_TAGS: &[&str] = &[$(stringify!($tag_ident)),*];
    };
}
non_void_builders! {
    head, body, main, p, code, div, pre, header, nav,
    ol, ul, li, strong, em, blockquote, article, section,
    aside, span, script, title, time, html, a,
    h1, h2, h3, h4, h5, h6, small, sup, sub, label, q, s,
    table, tr, td, th, tbody, thead, tfoot, colgroup, video
}

macro_rules! void_builders {
    ($($tag_ident:ident),*) => {
        impl<'bump> Builder<'bump> {
            $(
                #[doc = concat!("Create a pending void `", stringify!($tag_ident), "` element from a selector string.\n\nPass `\"\"` to skip the selector stage. Void elements take no children and render without a closing tag.")]
                pub fn $tag_ident(&self, selector: &str) -> Result<Pending<'bump>, SelectorParseError> {
                    self.tag_with_void(stringify!($tag_ident), selector, true)
                }
            )*
        }
        /// A list of all void tags.
        pub const VOID_TAGS: &[&str] = &[$(stringify!($tag_ident)),*];
    };
}
void_builders! {
    area, base, br, col, embed, hr, input, link, meta,
    param, source, track, wbr, img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueKind;

    #[test]
    fn direct_children_shape_has_empty_id_classes_and_attributes() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let node = b.div("").unwrap().children([b.text("x")]).unwrap();
        assert_eq!(node.tag(), "div");
        assert_eq!(node.id(), None);
        assert!(node.classes().is_empty());
        assert!(node.attributes().is_empty());
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn selector_errors_surface_at_the_selector_stage() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        assert_eq!(
            b.div(".").err(),
            Some(SelectorParseError::EmptyClass)
        );
    }

    #[test]
    fn same_attribute_twice_keeps_the_second_value() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let node = b
            .img("")
            .unwrap()
            .set("src", "a.jpg")
            .set("src", "b.jpg")
            .build()
            .unwrap();
        assert_eq!(node.attribute("src"), Some("b.jpg"));
        assert_eq!(node.attributes().len(), 1);
    }

    #[test]
    fn flag_then_set_overwrites_in_place() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let node = b
            .input("")
            .unwrap()
            .flag("disabled")
            .set("name", "q")
            .set("disabled", "false")
            .build()
            .unwrap();
        let keys: Vec<_> = node.attributes().iter().map(|a| a.key()).collect();
        assert_eq!(keys, ["disabled", "name"]);
        assert_eq!(node.attribute("disabled"), Some("false"));
    }

    #[test]
    fn invalid_child_kind_fails_the_build() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let result = b.p("").unwrap().children([Value::Int(3)]);
        assert_eq!(result.err(), Some(BuildError::InvalidChildKind(ValueKind::Int)));
    }

    #[test]
    fn voidness_is_inferred_by_tag_name() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        assert!(b.tag("img", "").unwrap().build().unwrap().is_void());
        assert!(!b.tag("div", "").unwrap().build().unwrap().is_void());
    }
}
