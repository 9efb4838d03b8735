//! Constants shared across the pipeline
//!
//! Fixed names Unity uses for built-in entries, the words reserved for the
//! generated category types, and file layout of a Unity project.

/// Name of the synthesized "no selection" member
pub const SENTINEL_NAME: &str = "None";

/// Names that would shadow the generated category types
pub const RESERVED_NAMES: &[&str] = &[
    "GameObject",
    "Scene",
    "Prefab",
    "Layer",
    "Tag",
    "AnimatorParameter",
];

/// Tags every Unity project has without declaring them in the TagManager
pub const BUILTIN_TAGS: &[&str] = &[
    "Untagged",
    "Respawn",
    "Finish",
    "EditorOnly",
    "Player",
    "MainCamera",
];

/// Asset folder below the project root
pub const ASSETS_DIR: &str = "Assets";

/// Tag and layer manifest, relative to the project root
pub const TAG_MANAGER_PATH: &str = "ProjectSettings/TagManager.asset";

/// Prefix of a Unity YAML document header such as `--- !u!1 &100000`
pub const DOCUMENT_MARKER: &str = "--- !u!";

/// Line ending types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Unix,    // \n
    Windows, // \r\n
    Mac,     // \r
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Unix => "\n",
            LineEnding::Windows => "\r\n",
            LineEnding::Mac => "\r",
        }
    }

    /// Rewrite any mix of line endings in `text` to `\n`
    pub fn normalize(text: &str) -> String {
        text.replace("\r\n", "\n").replace('\r', "\n")
    }
}
