//! Unity Consts
//!
//! Generates a C# file of compile-time constants from a Unity project: tags,
//! layers, scenes, prefabs, animator parameters, game objects and animation
//! clips, each with a stable numeric id.
//!
//! # Examples
//!
//! ```rust,no_run
//! use unity_consts::{GeneratorConfig, generate};
//!
//! let config = GeneratorConfig::new("MyGame", "MyGame/Assets/Generated");
//! let report = generate(&config)?;
//! println!("Wrote {} constants to {}", report.emitted, report.output_path.display());
//!
//! # Ok::<(), unity_consts::ConstGenError>(())
//! ```

// Re-export from core and YAML crates
pub use unity_consts_core::{
    AssetKind, AssetReference, Category, ConstGenError, InvalidReason, Member, MemberGroup,
    Result, constants::*, id_for, validate,
};
pub use unity_consts_yaml::{AssetLoader, DocumentSplitter, split_documents};

pub mod collector;
pub mod config;
pub mod emitter;
pub mod scanner;

pub use collector::{CategoryRule, MemberCollector};
pub use config::GeneratorConfig;
pub use emitter::CSharpEmitter;
pub use scanner::{AssetInventory, scan};

use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Summary of one generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Path of the written file
    pub output_path: PathBuf,
    /// Collected groups, in generation order
    pub groups: Vec<MemberGroup>,
    /// Members written as code
    pub emitted: usize,
    /// Members written as comments only
    pub skipped: usize,
}

/// Scan the project and collect every member group, without writing anything
pub fn collect(config: &GeneratorConfig) -> Result<Vec<MemberGroup>> {
    info!("Scanning {}", config.assets_root().display());
    let inventory = scan(&config.assets_root());
    info!(
        "Found {} scenes, {} prefabs, {} controllers, {} animation clips",
        inventory.scenes.len(),
        inventory.prefabs.len(),
        inventory.animator_controllers.len(),
        inventory.animation_clips.len()
    );

    MemberCollector::from_config(config).collect_all(&inventory)
}

/// Run the whole pipeline and write the generated file.
///
/// The output directory must exist.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    let groups = collect(config)?;

    let source = CSharpEmitter::new(config.class_name.clone())
        .with_namespace(config.namespace.clone())
        .with_line_ending(config.line_ending)
        .emit_to_string(&groups)?;

    let output_path = config.output_path();
    info!("Writing {}", output_path.display());
    fs::write(&output_path, source).map_err(|e| ConstGenError::io(&output_path, e))?;

    let (emitted, skipped) = groups
        .iter()
        .flat_map(|group| emitter::plan_group(group))
        .fold((0, 0), |(emitted, skipped), planned| {
            if planned.is_emitted() {
                (emitted + 1, skipped)
            } else {
                (emitted, skipped + 1)
            }
        });

    Ok(GenerationReport {
        output_path,
        groups,
        emitted,
        skipped,
    })
}
