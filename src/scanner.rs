//! Asset tree scanning
//!
//! Walks the project's asset folder and sorts the files the generator cares
//! about by extension. File contents are never opened here.

use std::path::Path;
use tracing::{debug, warn};
use unity_consts_core::{AssetKind, AssetReference};
use walkdir::WalkDir;

/// Files found under the asset folder, one list per kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetInventory {
    pub scenes: Vec<AssetReference>,
    pub prefabs: Vec<AssetReference>,
    pub animator_controllers: Vec<AssetReference>,
    pub animation_clips: Vec<AssetReference>,
}

impl AssetInventory {
    /// References of one kind
    pub fn get(&self, kind: AssetKind) -> &[AssetReference] {
        match kind {
            AssetKind::Scene => &self.scenes,
            AssetKind::Prefab => &self.prefabs,
            AssetKind::AnimatorController => &self.animator_controllers,
            AssetKind::AnimationClip => &self.animation_clips,
        }
    }

    fn push(&mut self, kind: AssetKind, reference: AssetReference) {
        match kind {
            AssetKind::Scene => self.scenes.push(reference),
            AssetKind::Prefab => self.prefabs.push(reference),
            AssetKind::AnimatorController => self.animator_controllers.push(reference),
            AssetKind::AnimationClip => self.animation_clips.push(reference),
        }
    }

    /// Total number of recognized files
    pub fn len(&self) -> usize {
        self.scenes.len()
            + self.prefabs.len()
            + self.animator_controllers.len()
            + self.animation_clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Recursively classify every file under `root`.
///
/// Entries are visited in file-name order so repeated runs see files in the
/// same sequence. A missing root or an unreadable entry is logged and skipped.
pub fn scan(root: &Path) -> AssetInventory {
    let mut inventory = AssetInventory::default();

    if !root.is_dir() {
        warn!("Asset directory not found: {}", root.display());
        return inventory;
    }

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable path under {}: {}", root.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(kind) = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(AssetKind::from_extension)
        else {
            continue;
        };

        match AssetReference::from_path(entry.path()) {
            Some(reference) => inventory.push(kind, reference),
            None => debug!("Skipping file with non UTF-8 name: {}", entry.path().display()),
        }
    }

    inventory
}
