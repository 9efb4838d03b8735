//! Member model
//!
//! A [`Member`] is one candidate constant, a [`MemberGroup`] is one generated
//! enumeration. [`AssetReference`]s are the files the scanner found.

use crate::constants::SENTINEL_NAME;
use crate::id::id_for;
use crate::naming::{InvalidReason, validate};
use std::fmt;
use std::path::{Path, PathBuf};

/// One candidate constant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Normalized identifier text
    pub name: String,
    /// Original text, used as the runtime string value
    pub raw_value: String,
    /// Asset the name was extracted from; empty for synthesized members
    pub source_path: PathBuf,
    /// Deterministic id derived from `name`
    pub id: u32,
    /// Whether `name` passed validation
    pub is_valid: bool,
    /// Why validation failed, if it did
    pub invalid_reason: Option<InvalidReason>,
}

impl Member {
    /// Validate `raw` and build a member extracted from `source_path`
    pub fn new<P: AsRef<Path>>(raw: &str, source_path: P) -> Self {
        let validation = validate(raw);
        Self {
            id: id_for(&validation.normalized),
            is_valid: validation.is_valid(),
            invalid_reason: validation.reason,
            name: validation.normalized,
            raw_value: raw.to_string(),
            source_path: source_path.as_ref().to_path_buf(),
        }
    }

    /// Build a member that does not come from any asset file
    pub fn synthesized(raw: &str) -> Self {
        Self::new(raw, PathBuf::new())
    }

    /// The "no selection" member appended to most groups
    pub fn sentinel() -> Self {
        Self::synthesized(SENTINEL_NAME)
    }

    /// Check if this member has no source asset
    pub fn is_synthesized(&self) -> bool {
        self.source_path.as_os_str().is_empty()
    }

    pub fn is_sentinel(&self) -> bool {
        self.name == SENTINEL_NAME && self.is_synthesized()
    }
}

/// Generated enumeration categories, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Tag,
    Layer,
    Scene,
    Prefab,
    AnimatorParameter,
    GameObject,
    Animations,
}

impl Category {
    /// Every category, in the order groups are generated
    pub const ALL: [Category; 7] = [
        Category::Tag,
        Category::Layer,
        Category::Scene,
        Category::Prefab,
        Category::AnimatorParameter,
        Category::GameObject,
        Category::Animations,
    ];

    /// Type name used in generated code
    pub fn name(&self) -> &'static str {
        match self {
            Category::Tag => "Tag",
            Category::Layer => "Layer",
            Category::Scene => "Scene",
            Category::Prefab => "Prefab",
            Category::AnimatorParameter => "AnimatorParameter",
            Category::GameObject => "GameObject",
            Category::Animations => "Animations",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One named bucket of members
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberGroup {
    pub category: Category,
    pub members: Vec<Member>,
}

impl MemberGroup {
    pub fn new(category: Category, members: Vec<Member>) -> Self {
        Self { category, members }
    }

    pub fn name(&self) -> &'static str {
        self.category.name()
    }

    /// Members that can be emitted as code
    pub fn valid_members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.is_valid)
    }

    /// Members that will only appear as comments
    pub fn invalid_members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| !m.is_valid)
    }

    /// Find a member by normalized name
    pub fn get(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Kinds of asset files the scanner recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Scene,
    Prefab,
    AnimatorController,
    AnimationClip,
}

impl AssetKind {
    /// Classify a file extension (without the dot)
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "unity" => Some(AssetKind::Scene),
            "prefab" => Some(AssetKind::Prefab),
            "controller" => Some(AssetKind::AnimatorController),
            "anim" => Some(AssetKind::AnimationClip),
            _ => None,
        }
    }
}

/// A discovered file of interest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReference {
    /// File name without extension
    pub base_name: String,
    pub full_path: PathBuf,
}

impl AssetReference {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(base_name: S, full_path: P) -> Self {
        Self {
            base_name: base_name.into(),
            full_path: full_path.into(),
        }
    }

    /// Build a reference from a path, using the file stem as the base name
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path = path.as_ref();
        let base_name = path.file_stem()?.to_str()?.to_string();
        Some(Self::new(base_name, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_keeps_raw_value() {
        let member = Member::new("Main_Menu", "Assets/Scenes/Main_Menu.unity");
        assert_eq!(member.name, "MainMenu");
        assert_eq!(member.raw_value, "Main_Menu");
        assert_eq!(member.id, id_for("MainMenu"));
        assert!(member.is_valid);
        assert!(!member.is_synthesized());
    }

    #[test]
    fn test_id_depends_on_name_only() {
        let a = Member::new("Enemy", "Assets/A.prefab");
        let b = Member::new("Enemy", "Assets/B.unity");
        let c = Member::new("En_emy", "");
        assert_eq!(a.id, b.id);
        assert_eq!(a.id, c.id);
    }

    #[test]
    fn test_invalid_member_is_kept() {
        let member = Member::new("1Up", "Assets/1Up.prefab");
        assert!(!member.is_valid);
        assert_eq!(member.invalid_reason, Some(InvalidReason::LeadingDigit));
        assert_eq!(member.raw_value, "1Up");
    }

    #[test]
    fn test_sentinel() {
        let sentinel = Member::sentinel();
        assert_eq!(sentinel.name, "None");
        assert!(sentinel.is_valid);
        assert!(sentinel.is_synthesized());
        assert!(sentinel.is_sentinel());
        assert!(!Member::new("None", "Assets/None.prefab").is_sentinel());
    }

    #[test]
    fn test_group_filters() {
        let group = MemberGroup::new(
            Category::Tag,
            vec![Member::new("Enemy", "a"), Member::new("2Enemy", "a")],
        );
        assert_eq!(group.name(), "Tag");
        assert_eq!(group.valid_members().count(), 1);
        assert_eq!(group.invalid_members().count(), 1);
        assert!(group.get("Enemy").is_some());
    }

    #[test]
    fn test_asset_kind_from_extension() {
        assert_eq!(AssetKind::from_extension("unity"), Some(AssetKind::Scene));
        assert_eq!(AssetKind::from_extension("prefab"), Some(AssetKind::Prefab));
        assert_eq!(
            AssetKind::from_extension("controller"),
            Some(AssetKind::AnimatorController)
        );
        assert_eq!(AssetKind::from_extension("anim"), Some(AssetKind::AnimationClip));
        assert_eq!(AssetKind::from_extension("meta"), None);
        assert_eq!(AssetKind::from_extension("Unity"), None);
    }

    #[test]
    fn test_asset_reference_from_path() {
        let reference = AssetReference::from_path("Assets/Scenes/Level.01.unity").unwrap();
        assert_eq!(reference.base_name, "Level.01");
        assert_eq!(reference.full_path, PathBuf::from("Assets/Scenes/Level.01.unity"));
    }
}
