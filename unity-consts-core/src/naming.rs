//! Candidate name validation
//!
//! Every name pulled out of a project goes through [`validate`] before it becomes
//! a member. Underscores are stripped first, then the remainder must be an
//! ASCII identifier that does not start with a digit and does not shadow one
//! of the generated category types.

use crate::constants::RESERVED_NAMES;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").expect("identifier pattern is valid"));

/// Why a candidate name cannot become a constant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Nothing left after normalization
    Empty,
    /// Identifiers cannot start with a digit
    LeadingDigit,
    /// Contains a character outside `[A-Za-z0-9]`
    IllegalCharacter(char),
    /// Collides with a generated category type
    Reserved,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Empty => write!(f, "name is empty"),
            InvalidReason::LeadingDigit => write!(f, "name starts with a digit"),
            InvalidReason::IllegalCharacter(c) => write!(f, "name contains illegal character {:?}", c),
            InvalidReason::Reserved => write!(f, "name is reserved"),
        }
    }
}

/// Outcome of validating one candidate name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameValidation {
    /// Name with underscores removed
    pub normalized: String,
    /// `None` when the name is a legal identifier
    pub reason: Option<InvalidReason>,
}

impl NameValidation {
    pub fn is_valid(&self) -> bool {
        self.reason.is_none()
    }
}

/// Normalize `raw` and decide whether it is a legal identifier.
///
/// Never fails: an unusable name is reported through [`NameValidation::reason`].
pub fn validate(raw: &str) -> NameValidation {
    let normalized = normalize(raw);
    let reason = invalid_reason(&normalized);
    NameValidation { normalized, reason }
}

/// Strip the separator characters ignored by the identifier rules
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| *c != '_').collect()
}

fn invalid_reason(name: &str) -> Option<InvalidReason> {
    if IDENTIFIER.is_match(name) {
        if RESERVED_NAMES.contains(&name) {
            return Some(InvalidReason::Reserved);
        }
        return None;
    }

    let Some(first) = name.chars().next() else {
        return Some(InvalidReason::Empty);
    };
    if first.is_ascii_digit() {
        return Some(InvalidReason::LeadingDigit);
    }

    name.chars()
        .find(|c| !c.is_ascii_alphanumeric())
        .map(InvalidReason::IllegalCharacter)
}
