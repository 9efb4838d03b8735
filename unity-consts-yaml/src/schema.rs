//! Typed views of the Unity documents we read
//!
//! Each schema projects only the fields the generator needs; everything else in
//! the document is ignored. Names are read as plain strings so the text stays
//! exactly as Unity wrote it, even when it looks like a number, boolean or null.
//! Unity writes an empty list as a bare key, which decodes as null.

use serde::{Deserialize, Deserializer};

/// `ProjectSettings/TagManager.asset`
#[derive(Debug, Default, Deserialize)]
pub struct TagManagerDocument {
    #[serde(rename = "TagManager", default)]
    pub tag_manager: TagManager,
}

/// User-defined tags and layers
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TagManager {
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<String>,
    /// Layer slots in index order; unused slots are empty strings
    #[serde(default, deserialize_with = "nullable")]
    pub layers: Vec<String>,
}

/// One `GameObject:` block of a scene or prefab
#[derive(Debug, Deserialize)]
pub struct GameObjectDocument {
    #[serde(rename = "GameObject")]
    pub game_object: GameObjectRecord,
}

#[derive(Debug, Default, Deserialize)]
pub struct GameObjectRecord {
    /// Missing on stripped prefab-instance objects
    #[serde(rename = "m_Name", default)]
    pub name: String,
}

/// The `AnimatorController:` block of a `.controller` file
#[derive(Debug, Deserialize)]
pub struct AnimatorControllerDocument {
    #[serde(rename = "AnimatorController")]
    pub animator_controller: AnimatorControllerRecord,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnimatorControllerRecord {
    #[serde(rename = "m_AnimatorParameters", default, deserialize_with = "nullable")]
    pub parameters: Vec<AnimatorParameterRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnimatorParameterRecord {
    #[serde(rename = "m_Name", default)]
    pub name: String,
}

fn nullable<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let values: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(values.unwrap_or_default())
}
