//! Unity Consts Core
//!
//! Core data structures shared by the unity-consts crates: the member model
//! handed to the code emitter, the error type, and the two pure functions every
//! candidate name goes through (validation and id generation).

pub mod constants;
pub mod error;
pub mod id;
pub mod member;
pub mod naming;

// Re-export main types
pub use constants::*;
pub use error::{ConstGenError, Result};
pub use id::id_for;
pub use member::{AssetKind, AssetReference, Category, Member, MemberGroup};
pub use naming::{InvalidReason, NameValidation, validate};
