//! Unity Consts YAML
//!
//! Unity YAML support for the constant generator: splitting multi-document
//! asset files and decoding the few fields the generator reads, based on the
//! serde_yaml library.
//!
//! # Examples
//!
//! ```rust
//! use unity_consts_yaml::split_documents;
//!
//! let scene = "\
//! --- !u!1 &1
//! GameObject:
//!   m_Name: Player
//! --- !u!4 &2
//! Transform:
//!   m_Father: {fileID: 0}
//! ";
//!
//! let blocks = split_documents(scene, "GameObject");
//! assert_eq!(blocks.len(), 1);
//! ```

// Re-export core types
pub use unity_consts_core::{ConstGenError, Result};

// Core modules
pub mod asset_loader;
pub mod document_splitter;
pub mod schema;

// Re-export main types
pub use asset_loader::AssetLoader;
pub use document_splitter::{DocumentSplitter, split_documents};
pub use schema::TagManager;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        let _loader = AssetLoader::new();
        let splitter = DocumentSplitter::new("GameObject");
        assert_eq!(splitter.class_name(), "GameObject");
    }
}
