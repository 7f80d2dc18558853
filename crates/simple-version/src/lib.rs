//! Version and version range value types
//!
//! This crate parses version identifiers of the form
//! `MAJOR.MINOR.MAINTENANCE[.BUILD][-EXTRA]`, classifies their pre-release
//! qualifier (alpha, beta, release candidate, snapshot), orders them with
//! qualifier awareness and tests them against interval ranges such as
//! `[1.0.0,2.0.0)` or the open-ended `1.0.0`.

mod error;
mod qualifier;
mod range;
mod version;

pub use error::{Component, VersionError};
pub use qualifier::{Qualifier, ALPHA_TOKENS, BETA_TOKENS, RELEASE_CANDIDATE_TOKENS, SNAPSHOT_TOKENS};
pub use range::{
    VersionRange, CEILING_SELECTOR, CEILING_SELECTOR_FUZZY, FLOOR_SELECTOR, FLOOR_SELECTOR_FUZZY,
    RANGE_SEPARATOR,
};
pub use version::{Version, EXTRA_SEPARATOR, VERSION_SEPARATOR};
