//! Error types for version and range parsing

use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// Positional version components, used to name the offending segment in
/// parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Maintenance,
    Build,
}

impl Component {
    /// Get the string representation of the component
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Maintenance => "maintenance",
            Component::Build => "build",
        }
    }

    /// Component found at the given dot-separated position, if any.
    pub(crate) fn at(position: usize) -> Option<Component> {
        match position {
            0 => Some(Component::Major),
            1 => Some(Component::Minor),
            2 => Some(Component::Maintenance),
            3 => Some(Component::Build),
            _ => None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for version and range construction.
///
/// Callers can distinguish an absent required argument from malformed
/// syntax via [`VersionError::is_missing_argument`] and
/// [`VersionError::is_parse_failure`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// A required argument was absent rather than malformed.
    #[error("no {0} was supplied")]
    MissingArgument(&'static str),
    #[error("versions are not allowed to contain any whitespace characters")]
    Whitespace,
    #[error("found invalid version number in {component} version component: {source}")]
    InvalidComponent {
        component: Component,
        source: ParseIntError,
    },
    #[error("found invalid pre-release number in extra \"{0}\"")]
    InvalidUnstableNumber(String),
    #[error("a version range cannot be empty")]
    EmptyRange,
    #[error("invalid amount of range elements: {0}")]
    RangeElementCount(usize),
    #[error("invalid floor prefix found: {0}")]
    InvalidFloorSelector(char),
    #[error("invalid ceiling suffix found: {0}")]
    InvalidCeilingSelector(char),
    #[error("the floor version is newer than the ceiling version")]
    FloorNewerThanCeiling,
}

impl VersionError {
    /// Check if a required argument was absent.
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, VersionError::MissingArgument(_))
    }

    /// Check if the input was present but malformed.
    pub fn is_parse_failure(&self) -> bool {
        !self.is_missing_argument()
    }
}
