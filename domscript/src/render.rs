use std::io::Write;

use crate::{Child, Node};

impl Node<'_> {
    /// Write the node and its subtree as HTML.
    ///
    /// The `id` renders first, then `class`, then the remaining attributes in
    /// insertion order. Attribute values and text are escaped. Void elements
    /// render without a closing tag.
    pub fn write(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        write!(writer, "<{}", self.tag())?;
        if let Some(id) = self.id() {
            write!(writer, " id=\"{}\"", html_escape::encode_quoted_attribute(id))?;
        }
        if !self.classes().is_empty() {
            write!(writer, " class=\"")?;
            for (index, class) in self.classes().iter().enumerate() {
                if index > 0 {
                    write!(writer, " ")?;
                }
                write!(
                    writer,
                    "{}",
                    html_escape::encode_quoted_attribute(class.as_str())
                )?;
            }
            write!(writer, "\"")?;
        }
        for attr in self.attributes() {
            match attr.value() {
                Some(value) => write!(
                    writer,
                    " {}=\"{}\"",
                    attr.key(),
                    html_escape::encode_quoted_attribute(value)
                )?,
                None => write!(writer, " {}", attr.key())?,
            }
        }
        write!(writer, ">")?;

        if self.is_void() {
            if !self.children().is_empty() {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("Void element (<{}>) has children", self.tag()),
                ));
            }
            return Ok(());
        }

        for child in self.children() {
            match child {
                Child::Text { text } => {
                    write!(writer, "{}", html_escape::encode_text(text.as_str()))?
                }
                Child::Node { node } => node.write(writer)?,
            }
        }
        write!(writer, "</{}>", self.tag())
    }

    /// Write the node and its subtree to an HTML string.
    pub fn write_to_string(&self) -> std::io::Result<String> {
        let mut output = vec![];
        self.write(&mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }
}
