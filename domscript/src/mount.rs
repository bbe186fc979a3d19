use std::path::{Path, PathBuf};

use crate::Node;

/// A slot that accepts a finished root [`Node`].
///
/// Installing replaces whatever the slot held before; there is no diffing or
/// update operation. The host reads the tree during installation and does not
/// retain a reference to it afterwards.
pub trait Host {
    /// Replace the slot's content with the given root.
    fn install(&mut self, root: &Node<'_>) -> std::io::Result<()>;
}

/// Hand a finished root node to a host slot.
///
/// Each mount is a one-shot replacement of the host's current content.
///
/// ```
/// use domscript::{bumpalo::Bump, builder::Builder, mount, StringSlot};
///
/// let bump = Bump::new();
/// let b = Builder::new(&bump);
/// let root = b.body("bg-white").unwrap().children([b.text("hello")]).unwrap();
///
/// let mut slot = StringSlot::new();
/// mount(&root, &mut slot).unwrap();
/// assert_eq!(slot.content(), Some("<body class=\"bg-white\">hello</body>"));
/// ```
pub fn mount(root: &Node<'_>, host: &mut dyn Host) -> std::io::Result<()> {
    host.install(root)
}

/// A host that holds the rendered HTML of the last mounted tree.
#[derive(Debug, Default)]
pub struct StringSlot {
    html: Option<String>,
}

impl StringSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the rendered HTML of the last mounted tree, if any.
    pub fn content(&self) -> Option<&str> {
        self.html.as_deref()
    }
}

impl Host for StringSlot {
    fn install(&mut self, root: &Node<'_>) -> std::io::Result<()> {
        self.html = Some(root.write_to_string()?);
        Ok(())
    }
}

/// A host that writes the rendered tree to a file, creating parent
/// directories as needed. Each mount overwrites the file.
#[derive(Debug)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot that writes to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path this slot writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Host for FileSlot {
    fn install(&mut self, root: &Node<'_>) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, root.write_to_string()?)
    }
}
