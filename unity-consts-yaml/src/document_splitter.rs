//! Multi-document splitting
//!
//! Unity scene and prefab files concatenate many objects into one YAML stream,
//! each introduced by a header line such as `--- !u!1 &100000`. The header's
//! `!u!` tag is not something a plain YAML decoder handles well, so instead of
//! decoding the whole stream we cut it into per-object blocks and keep only
//! the blocks for the class we care about.

use unity_consts_core::{DOCUMENT_MARKER, LineEnding};

/// Splits a Unity YAML stream into the blocks of one class
#[derive(Debug, Clone)]
pub struct DocumentSplitter {
    /// Class whose blocks are kept, e.g. `GameObject`
    class_name: String,
    /// Whether the block after the last marker is considered
    trailing_document: bool,
}

impl DocumentSplitter {
    /// Create a splitter keeping blocks whose first line is `<class_name>:`.
    ///
    /// The block after the last marker is ignored unless
    /// [`with_trailing_document`](Self::with_trailing_document) is enabled.
    pub fn new<S: Into<String>>(class_name: S) -> Self {
        Self {
            class_name: class_name.into(),
            trailing_document: false,
        }
    }

    /// Also keep a matching block that is not followed by another marker
    pub fn with_trailing_document(mut self, trailing_document: bool) -> Self {
        self.trailing_document = trailing_document;
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Split `text` into the raw blocks of this splitter's class.
    ///
    /// Marker lines are never part of a block. Blocks are returned in file
    /// order.
    pub fn split(&self, text: &str) -> Vec<String> {
        let text = LineEnding::normalize(text);
        let header = format!("{}:", self.class_name);

        let mut blocks = Vec::new();
        let mut current = String::new();

        for line in text.split('\n') {
            if line.starts_with(DOCUMENT_MARKER) {
                if current.starts_with(&header) {
                    blocks.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
                continue;
            }
            current.push_str(line);
            current.push('\n');
        }

        if self.trailing_document && current.starts_with(&header) {
            blocks.push(current);
        }

        blocks
    }
}

/// Split `text` into the blocks of `class_name`, ignoring the trailing block
pub fn split_documents(text: &str, class_name: &str) -> Vec<String> {
    DocumentSplitter::new(class_name).split(text)
}
