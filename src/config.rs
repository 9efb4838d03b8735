//! Generator configuration
//!
//! Everything except the two paths has a default matching a standard Unity
//! project layout; the builder methods exist for embedding and tests.

use std::path::PathBuf;
use unity_consts_core::{ASSETS_DIR, LineEnding, TAG_MANAGER_PATH};

/// Settings for one generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Unity project directory (the one containing `Assets/`)
    pub project_root: PathBuf,
    /// Directory the generated file is written to
    pub output_dir: PathBuf,
    /// Asset folder name below the project root
    pub assets_dir: PathBuf,
    /// TagManager manifest, relative to the project root
    pub tag_manager_path: PathBuf,
    /// Generated file name
    pub output_file_name: String,
    /// Name of the generated static class
    pub class_name: String,
    /// Optional namespace wrapping the generated class
    pub namespace: Option<String>,
    /// Line ending of the generated file
    pub line_ending: LineEnding,
    /// Read the last object of scene and prefab files
    pub trailing_document: bool,
}

impl GeneratorConfig {
    /// Create a configuration for a project and output directory
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(project_root: P, output_dir: Q) -> Self {
        Self {
            project_root: project_root.into(),
            output_dir: output_dir.into(),
            assets_dir: PathBuf::from(ASSETS_DIR),
            tag_manager_path: PathBuf::from(TAG_MANAGER_PATH),
            output_file_name: "R.cs".to_string(),
            class_name: "R".to_string(),
            namespace: None,
            line_ending: LineEnding::Unix,
            trailing_document: true,
        }
    }

    pub fn with_class_name<S: Into<String>>(mut self, class_name: S) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_output_file_name<S: Into<String>>(mut self, file_name: S) -> Self {
        self.output_file_name = file_name.into();
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Match older generators that ignored the last object of each file
    pub fn with_trailing_document(mut self, trailing_document: bool) -> Self {
        self.trailing_document = trailing_document;
        self
    }

    /// Absolute path of the scanned asset tree
    pub fn assets_root(&self) -> PathBuf {
        self.project_root.join(&self.assets_dir)
    }

    /// Absolute path of the TagManager manifest
    pub fn tag_manager(&self) -> PathBuf {
        self.project_root.join(&self.tag_manager_path)
    }

    /// Path of the generated file
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file_name)
    }
}
