//! Member collection
//!
//! One routine per category turns discovered assets into a [`MemberGroup`].
//! Every routine has the same shape: gather `(raw name, source)` candidates,
//! then hand them to [`build_group`] which validates, assigns ids and applies
//! the category's [`CategoryRule`].
//!
//! Unreadable files are logged and skipped. A file that was read but does not
//! decode aborts collection.

use crate::config::GeneratorConfig;
use crate::scanner::AssetInventory;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use unity_consts_core::{
    AssetReference, BUILTIN_TAGS, Category, Member, MemberGroup, Result, SENTINEL_NAME,
};
use unity_consts_yaml::{AssetLoader, TagManager};

/// Per-category collection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    /// Keep one member per normalized name; the last occurrence's source wins
    pub deduplicate_by_name: bool,
    /// Append the synthesized `None` member
    pub append_sentinel: bool,
}

impl CategoryRule {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::GameObject => Self {
                deduplicate_by_name: true,
                append_sentinel: true,
            },
            Category::Animations => Self {
                deduplicate_by_name: false,
                append_sentinel: false,
            },
            Category::Tag
            | Category::Layer
            | Category::Scene
            | Category::Prefab
            | Category::AnimatorParameter => Self {
                deduplicate_by_name: false,
                append_sentinel: true,
            },
        }
    }
}

/// A raw name and the asset it came from (empty for synthesized names)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub raw: String,
    pub source: PathBuf,
}

impl Candidate {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(raw: S, source: P) -> Self {
        Self {
            raw: raw.into(),
            source: source.into(),
        }
    }

    pub fn synthesized<S: Into<String>>(raw: S) -> Self {
        Self::new(raw, PathBuf::new())
    }
}

/// Validate candidates and assemble them into a group according to `rule`.
///
/// When the group gets a sentinel, candidates that normalize to `None` are
/// dropped so the sentinel stays the only member with that name.
pub fn build_group(category: Category, candidates: Vec<Candidate>, rule: CategoryRule) -> MemberGroup {
    let mut members: Vec<Member> = Vec::with_capacity(candidates.len() + 1);
    let mut by_name: IndexMap<String, Member> = IndexMap::new();

    for candidate in candidates {
        let member = Member::new(&candidate.raw, &candidate.source);

        if rule.append_sentinel && member.name == SENTINEL_NAME {
            debug!(
                "{}: {:?} from {} clashes with the {} member, skipped",
                category,
                candidate.raw,
                candidate.source.display(),
                SENTINEL_NAME
            );
            continue;
        }

        if rule.deduplicate_by_name {
            by_name.insert(member.name.clone(), member);
        } else {
            members.push(member);
        }
    }

    if rule.deduplicate_by_name {
        members.extend(by_name.into_values());
    }

    if rule.append_sentinel {
        members.push(Member::sentinel());
    }

    MemberGroup::new(category, members)
}

/// Log and swallow recoverable errors, propagate the rest
fn contain<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_recoverable() => {
            warn!("{}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Builds every member group of a project
#[derive(Debug, Clone)]
pub struct MemberCollector {
    tag_manager: PathBuf,
    loader: AssetLoader,
}

impl MemberCollector {
    /// Create a collector reading tags and layers from `tag_manager`
    pub fn new<P: Into<PathBuf>>(tag_manager: P) -> Self {
        Self {
            tag_manager: tag_manager.into(),
            loader: AssetLoader::new(),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.tag_manager())
            .with_loader(AssetLoader::new().with_trailing_document(config.trailing_document))
    }

    pub fn with_loader(mut self, loader: AssetLoader) -> Self {
        self.loader = loader;
        self
    }

    /// Collect all groups in generation order:
    /// Tag, Layer, Scene, Prefab, AnimatorParameter, GameObject, Animations.
    pub fn collect_all(&self, inventory: &AssetInventory) -> Result<Vec<MemberGroup>> {
        let (tags, layers) = self.collect_tags_and_layers()?;
        let scenes = self.collect_files(Category::Scene, &inventory.scenes);
        let prefabs = self.collect_files(Category::Prefab, &inventory.prefabs);
        let parameters = self.collect_animator_parameters(&inventory.animator_controllers)?;
        let game_objects = self.collect_game_objects(&inventory.scenes, &inventory.prefabs)?;
        let animations = self.collect_files(Category::Animations, &inventory.animation_clips);

        Ok(vec![
            tags,
            layers,
            scenes,
            prefabs,
            parameters,
            game_objects,
            animations,
        ])
    }

    /// Tags and layers from the TagManager manifest.
    ///
    /// A missing or unreadable manifest gives groups holding only the
    /// built-in tags and the sentinels.
    pub fn collect_tags_and_layers(&self) -> Result<(MemberGroup, MemberGroup)> {
        info!("Collecting tags and layers");
        let manager = contain(self.loader.load_tag_manager(&self.tag_manager))?.unwrap_or_default();
        Ok(tag_and_layer_groups(&manager, &self.tag_manager))
    }

    /// One member per file, named after the file
    pub fn collect_files(&self, category: Category, references: &[AssetReference]) -> MemberGroup {
        info!("Collecting {} ({} files)", category, references.len());
        let candidates = references
            .iter()
            .map(|r| Candidate::new(r.base_name.clone(), r.full_path.clone()))
            .collect();
        build_group(category, candidates, CategoryRule::for_category(category))
    }

    /// Every parameter of every animator controller; repeats are kept
    pub fn collect_animator_parameters(&self, controllers: &[AssetReference]) -> Result<MemberGroup> {
        info!("Collecting animator parameters ({} controllers)", controllers.len());
        let mut candidates = Vec::new();

        for controller in controllers {
            let path = &controller.full_path;
            if let Some(names) = contain(self.loader.load_animator_parameters(path))? {
                candidates.extend(names.into_iter().map(|name| Candidate::new(name, path.clone())));
            }
        }

        let category = Category::AnimatorParameter;
        Ok(build_group(category, candidates, CategoryRule::for_category(category)))
    }

    /// Every named game object in scenes, then prefabs, one member per name
    pub fn collect_game_objects(
        &self,
        scenes: &[AssetReference],
        prefabs: &[AssetReference],
    ) -> Result<MemberGroup> {
        info!(
            "Collecting game objects ({} scenes, {} prefabs)",
            scenes.len(),
            prefabs.len()
        );
        let mut candidates = Vec::new();

        for asset in scenes.iter().chain(prefabs) {
            let path = &asset.full_path;
            if let Some(names) = contain(self.loader.load_game_object_names(path))? {
                candidates.extend(names.into_iter().map(|name| Candidate::new(name, path.clone())));
            }
        }

        let category = Category::GameObject;
        Ok(build_group(category, candidates, CategoryRule::for_category(category)))
    }
}

/// Build the Tag and Layer groups from a decoded manifest.
///
/// Empty slots are dropped before validation; built-in tags follow the
/// user-defined ones.
pub fn tag_and_layer_groups(manager: &TagManager, manifest: &Path) -> (MemberGroup, MemberGroup) {
    let declared = |names: &[String]| -> Vec<Candidate> {
        names
            .iter()
            .filter(|name| !name.is_empty())
            .map(|name| Candidate::new(name.clone(), manifest))
            .collect()
    };

    let mut tag_candidates = declared(manager.tags.as_slice());
    tag_candidates.extend(BUILTIN_TAGS.iter().map(|tag| Candidate::synthesized(*tag)));

    let tags = build_group(
        Category::Tag,
        tag_candidates,
        CategoryRule::for_category(Category::Tag),
    );
    let layers = build_group(
        Category::Layer,
        declared(manager.layers.as_slice()),
        CategoryRule::for_category(Category::Layer),
    );
    (tags, layers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use unity_consts_core::InvalidReason;
    use tempfile::TempDir;

    fn sentinel_count(group: &MemberGroup) -> usize {
        group
            .members
            .iter()
            .filter(|m| m.name == SENTINEL_NAME)
            .count()
    }

    #[test]
    fn test_rules_per_category() {
        assert!(CategoryRule::for_category(Category::GameObject).deduplicate_by_name);
        assert!(!CategoryRule::for_category(Category::AnimatorParameter).deduplicate_by_name);
        assert!(!CategoryRule::for_category(Category::Animations).append_sentinel);
        assert!(CategoryRule::for_category(Category::Scene).append_sentinel);
    }

    #[test]
    fn test_build_group_appends_sentinel_last() {
        let rule = CategoryRule::for_category(Category::Prefab);
        let group = build_group(
            Category::Prefab,
            vec![Candidate::new("Door", "Assets/Door.prefab")],
            rule,
        );
        assert_eq!(group.len(), 2);
        assert_eq!(group.members[0].name, "Door");
        assert!(group.members[1].is_sentinel());
    }

    #[test]
    fn test_sentinel_stays_unique() {
        let rule = CategoryRule::for_category(Category::GameObject);
        let group = build_group(
            Category::GameObject,
            vec![
                Candidate::new("None", "Assets/A.unity"),
                Candidate::new("No_ne", "Assets/B.unity"),
            ],
            rule,
        );
        assert_eq!(group.len(), 1);
        assert_eq!(sentinel_count(&group), 1);
        assert!(group.members[0].source_path.as_os_str().is_empty());
    }

    #[test]
    fn test_deduplicate_keeps_first_position_last_source() {
        let rule = CategoryRule::for_category(Category::GameObject);
        let group = build_group(
            Category::GameObject,
            vec![
                Candidate::new("Enemy", "Assets/A.unity"),
                Candidate::new("Door", "Assets/A.unity"),
                Candidate::new("Enemy", "Assets/B.prefab"),
            ],
            rule,
        );
        let names: Vec<_> = group.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Enemy", "Door", "None"]);
        assert_eq!(group.members[0].source_path, PathBuf::from("Assets/B.prefab"));
    }

    #[test]
    fn test_no_deduplication_without_rule() {
        let rule = CategoryRule::for_category(Category::AnimatorParameter);
        let group = build_group(
            Category::AnimatorParameter,
            vec![
                Candidate::new("Speed", "Assets/A.controller"),
                Candidate::new("Speed", "Assets/B.controller"),
            ],
            rule,
        );
        assert_eq!(group.members.iter().filter(|m| m.name == "Speed").count(), 2);
    }

    #[test]
    fn test_invalid_candidates_are_kept() {
        let rule = CategoryRule::for_category(Category::Scene);
        let group = build_group(
            Category::Scene,
            vec![Candidate::new("01 Intro", "Assets/01 Intro.unity")],
            rule,
        );
        assert_eq!(group.invalid_members().count(), 1);
        assert_eq!(group.members[0].raw_value, "01 Intro");
    }

    #[test]
    fn test_colliding_ids_are_both_kept() {
        // Distinct names whose ids are both 82097361
        let rule = CategoryRule::for_category(Category::GameObject);
        let group = build_group(
            Category::GameObject,
            vec![
                Candidate::new("Item3338", "Assets/A.unity"),
                Candidate::new("Item9431", "Assets/B.unity"),
            ],
            rule,
        );
        assert_eq!(group.len(), 3);
        assert_eq!(group.members[0].id, 82_097_361);
        assert_eq!(group.members[0].id, group.members[1].id);
        assert!(group.members[0].is_valid && group.members[1].is_valid);
    }

    #[test]
    fn test_separator_only_name_is_kept_invalid() {
        let manifest = Path::new("ProjectSettings/TagManager.asset");
        let manager = TagManager {
            tags: vec!["_".to_string()],
            layers: Vec::new(),
        };
        let (tags, _) = tag_and_layer_groups(&manager, manifest);

        let member = &tags.members[0];
        assert_eq!(member.raw_value, "_");
        assert_eq!(member.name, "");
        assert!(!member.is_valid);
        assert_eq!(member.invalid_reason, Some(InvalidReason::Empty));
    }

    #[test]
    fn test_tags_and_layers_from_manifest() {
        let manager = TagManager {
            tags: vec!["Enemy".to_string(), String::new()],
            layers: vec!["Default".to_string(), String::new(), "Water".to_string()],
        };
        let manifest = Path::new("ProjectSettings/TagManager.asset");
        let (tags, layers) = tag_and_layer_groups(&manager, manifest);

        let tag_names: Vec<_> = tags.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            tag_names,
            vec!["Enemy", "Untagged", "Respawn", "Finish", "EditorOnly", "Player", "MainCamera", "None"]
        );
        assert_eq!(tags.members[0].source_path, manifest);
        assert!(tags.members[1].is_synthesized());

        let layer_names: Vec<_> = layers.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(layer_names, vec!["Default", "Water", "None"]);
    }

    #[test]
    fn test_missing_manifest_is_not_fatal() {
        let dir = TempDir::new().unwrap();
        let collector = MemberCollector::new(dir.path().join("TagManager.asset"));
        let (tags, layers) = collector.collect_tags_and_layers().unwrap();
        assert_eq!(tags.len(), BUILTIN_TAGS.len() + 1);
        assert_eq!(layers.len(), 1);
        assert!(layers.members[0].is_sentinel());
    }

    #[test]
    fn test_unreadable_controller_is_skipped() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("Good.controller");
        fs::write(
            &good,
            "--- !u!91 &1\nAnimatorController:\n  m_AnimatorParameters:\n  - m_Name: Speed\n",
        )
        .unwrap();
        let missing = AssetReference::new("Gone", dir.path().join("Gone.controller"));
        let present = AssetReference::new("Good", good);

        let collector = MemberCollector::new(dir.path().join("TagManager.asset"));
        let group = collector
            .collect_animator_parameters(&[missing, present])
            .unwrap();
        let names: Vec<_> = group.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Speed", "None"]);
    }

    #[test]
    fn test_malformed_scene_aborts() {
        let dir = TempDir::new().unwrap();
        let scene = dir.path().join("Broken.unity");
        fs::write(&scene, "--- !u!1 &1\nGameObject:\n  m_Name: {oops\n--- !u!4 &2\n").unwrap();

        let collector = MemberCollector::new(dir.path().join("TagManager.asset"));
        let result = collector.collect_game_objects(&[AssetReference::new("Broken", scene)], &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_animations_have_no_sentinel() {
        let collector = MemberCollector::new("TagManager.asset");
        let group = collector.collect_files(
            Category::Animations,
            &[AssetReference::new("Run", "Assets/Run.anim")],
        );
        assert_eq!(group.len(), 1);
        assert_eq!(sentinel_count(&group), 0);
    }
}
