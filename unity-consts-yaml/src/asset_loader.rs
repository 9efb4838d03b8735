//! Reading Unity asset files into typed records
//!
//! The loader owns the error policy at file level: a file that cannot be read
//! produces a recoverable [`ConstGenError::Io`], while a file that was read but
//! does not decode produces a [`ConstGenError::Decode`] that stops the run.

use crate::document_splitter::DocumentSplitter;
use crate::schema::{AnimatorControllerDocument, GameObjectDocument, TagManager, TagManagerDocument};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use unity_consts_core::{ConstGenError, Result};

/// Class name of the tag and layer manifest document
pub const TAG_MANAGER_CLASS: &str = "TagManager";
/// Class name of scene and prefab objects
pub const GAME_OBJECT_CLASS: &str = "GameObject";
/// Class name of the animator controller document
pub const ANIMATOR_CONTROLLER_CLASS: &str = "AnimatorController";

/// Loads the records the generator needs from Unity YAML assets
#[derive(Debug, Clone)]
pub struct AssetLoader {
    /// Whether the last object of a scene or prefab is read
    trailing_document: bool,
}

impl AssetLoader {
    /// Create a loader that reads every object of a file, including the last
    pub fn new() -> Self {
        Self {
            trailing_document: true,
        }
    }

    /// Control whether the object after the final `--- !u!` marker of a scene
    /// or prefab is read.
    ///
    /// Manifests and controllers hold a single object and always read it.
    pub fn with_trailing_document(mut self, trailing_document: bool) -> Self {
        self.trailing_document = trailing_document;
        self
    }

    /// Read an asset file as UTF-8 text
    pub fn read_asset<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| ConstGenError::io(path, e))?;
        String::from_utf8(bytes)
            .map_err(|e| ConstGenError::decode(path, format!("file is not valid UTF-8: {}", e)))
    }

    /// Decode every `class_name` block of `text` as `T`
    pub fn decode_documents<T, P>(&self, text: &str, splitter: &DocumentSplitter, path: P) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        splitter
            .split(text)
            .iter()
            .enumerate()
            .map(|(index, block)| {
                serde_yaml::from_str::<T>(block).map_err(|e| {
                    ConstGenError::decode(
                        path,
                        format!("{} document #{}: {}", splitter.class_name(), index, e),
                    )
                })
            })
            .collect()
    }

    /// Load the user-defined tags and layers.
    ///
    /// A manifest without a `TagManager` object yields empty lists.
    pub fn load_tag_manager<P: AsRef<Path>>(&self, path: P) -> Result<TagManager> {
        let path = path.as_ref();
        let text = self.read_asset(path)?;
        let splitter = DocumentSplitter::new(TAG_MANAGER_CLASS).with_trailing_document(true);
        let documents: Vec<TagManagerDocument> = self.decode_documents(&text, &splitter, path)?;

        match documents.into_iter().next() {
            Some(document) => Ok(document.tag_manager),
            None => {
                warn!("No {} object in {}", TAG_MANAGER_CLASS, path.display());
                Ok(TagManager::default())
            }
        }
    }

    /// Load the name of every game object in a scene or prefab, in file order.
    ///
    /// Objects without a name (stripped prefab instances) are skipped.
    pub fn load_game_object_names<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        let text = self.read_asset(path)?;
        let splitter =
            DocumentSplitter::new(GAME_OBJECT_CLASS).with_trailing_document(self.trailing_document);
        let documents: Vec<GameObjectDocument> = self.decode_documents(&text, &splitter, path)?;

        let total = documents.len();
        let names: Vec<String> = documents
            .into_iter()
            .map(|document| document.game_object.name)
            .filter(|name| !name.is_empty())
            .collect();
        if names.len() < total {
            debug!(
                "Skipped {} unnamed game objects in {}",
                total - names.len(),
                path.display()
            );
        }
        Ok(names)
    }

    /// Load every animator parameter name of a controller, in declaration order
    pub fn load_animator_parameters<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        let text = self.read_asset(path)?;
        let splitter =
            DocumentSplitter::new(ANIMATOR_CONTROLLER_CLASS).with_trailing_document(true);
        let documents: Vec<AnimatorControllerDocument> =
            self.decode_documents(&text, &splitter, path)?;

        Ok(documents
            .into_iter()
            .flat_map(|document| document.animator_controller.parameters)
            .map(|parameter| parameter.name)
            .collect())
    }
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new()
    }
}
