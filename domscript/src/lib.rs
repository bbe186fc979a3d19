#![deny(missing_docs)]
//! A crate for constructing element trees declaratively from per-tag builder
//! functions.
//!
//! Every supported tag name has a method on [builder::Builder] that takes a
//! compact selector string (`#id.classA.classB extra-classes`). The returned
//! [builder::Pending] element accepts chained attribute assignments and is
//! finalized by supplying children, producing an immutable [Node]. The root
//! node is handed to a [Host] slot through [mount], which replaces the slot's
//! prior content in one shot.
//!
//! All allocations are done through a bump allocator ([bumpalo::Bump]) which
//! must be passed to the [builder::Builder] entry point.
//!
//! # Example
//!
//! ```
//! use domscript::{bumpalo::Bump, builder::Builder, mount, StringSlot};
//!
//! let bump = Bump::new();
//! let b = Builder::new(&bump);
//! let root = b.div("#top border-b border-gray-300").unwrap().children([
//!     b.h1("font-bold text-2xl").unwrap().children([b.text("Hello")]).unwrap().into(),
//! ]).unwrap();
//!
//! let mut slot = StringSlot::new();
//! mount(&root, &mut slot).unwrap();
//! ```

pub mod builder;
pub mod util;

// Re-export bumpalo for convenience
pub use bumpalo;

mod attribute;
pub use attribute::Attribute;

mod selector;
pub use selector::{Selector, SelectorParseError};

mod node;
pub use node::{BuildError, Child, ClassMerge, Node, Value, ValueKind};

mod render;

mod mount;
pub use mount::{mount, FileSlot, Host, StringSlot};
