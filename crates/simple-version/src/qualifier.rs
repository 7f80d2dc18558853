//! Qualifier classification for pre-release version extras

use crate::version::EXTRA_SEPARATOR;

/// Tokens recognized as alpha qualifiers.
pub const ALPHA_TOKENS: [&str; 2] = ["ALPHA", "A"];

/// Tokens recognized as beta qualifiers.
pub const BETA_TOKENS: [&str; 2] = ["BETA", "B"];

/// Tokens recognized as release candidate qualifiers.
pub const RELEASE_CANDIDATE_TOKENS: [&str; 1] = ["RC"];

/// Tokens recognized as snapshot qualifiers.
pub const SNAPSHOT_TOKENS: [&str; 1] = ["SNAPSHOT"];

/// Qualifier family of a version extra.
///
/// The family is decided by the extra token before its first `-`, matched
/// case-insensitively against the fixed token sets. An extra that matches
/// none of them leaves the version [`Qualifier::Stable`] for all ordering
/// and equality purposes, even though the extra text is still carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    Alpha,
    Beta,
    ReleaseCandidate,
    Snapshot,
    /// Stable release, or an extra matching no known family.
    Stable,
}

impl Qualifier {
    /// Classify the qualifier family of a full extra string.
    pub fn classify(extra: &str) -> Self {
        let stripped = strip(extra).to_uppercase();

        if ALPHA_TOKENS.contains(&stripped.as_str()) {
            Qualifier::Alpha
        } else if BETA_TOKENS.contains(&stripped.as_str()) {
            Qualifier::Beta
        } else if RELEASE_CANDIDATE_TOKENS.contains(&stripped.as_str()) {
            Qualifier::ReleaseCandidate
        } else if SNAPSHOT_TOKENS.contains(&stripped.as_str()) {
            Qualifier::Snapshot
        } else {
            Qualifier::Stable
        }
    }

    /// Check if the family denotes a pre-release build.
    pub fn is_unstable(&self) -> bool {
        !matches!(self, Qualifier::Stable)
    }
}

/// The extra token up to (excluding) its first `-`.
fn strip(extra: &str) -> &str {
    extra.split(EXTRA_SEPARATOR).next().unwrap_or(extra)
}
