//! Version value type with parsing, qualifier predicates and ordering

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Component, VersionError};
use crate::qualifier::Qualifier;

/// Separator between the numeric version components (X.X.X).
pub const VERSION_SEPARATOR: char = '.';

/// Separator in front of the extra component (version-extra).
pub const EXTRA_SEPARATOR: char = '-';

lazy_static! {
    /// Matches any whitespace character anywhere in the input.
    pub(crate) static ref WHITESPACE_RE: Regex = Regex::new(r"\s").unwrap();
}

/// An immutable `MAJOR.MINOR.MAINTENANCE[.BUILD][-EXTRA]` version.
///
/// The extra component must not contain the `.` separator: the parser
/// splits the whole input on `.` before the extra is extracted, so a dot
/// inside the intended extra is taken for a component boundary and fails
/// integer parsing. This is a grammar constraint, kept for compatibility.
#[derive(Debug, Clone)]
pub struct Version {
    major: u32,
    minor: u32,
    maintenance: u32,
    build: u32,
    extra: Option<String>,
    qualifier: Qualifier,
}

impl Version {
    /// Create a version from its four numeric components.
    pub fn new(major: u32, minor: u32, maintenance: u32, build: u32) -> Self {
        Self::from_parts(major, minor, maintenance, build, None)
    }

    /// Create a version from its four numeric components and an extra.
    pub fn with_extra(
        major: u32,
        minor: u32,
        maintenance: u32,
        build: u32,
        extra: impl Into<String>,
    ) -> Self {
        Self::from_parts(major, minor, maintenance, build, Some(extra.into()))
    }

    fn from_parts(
        major: u32,
        minor: u32,
        maintenance: u32,
        build: u32,
        extra: Option<String>,
    ) -> Self {
        // the family is fixed at construction; every predicate derives from it
        let qualifier = match extra.as_deref() {
            Some(extra) if !extra.is_empty() => Qualifier::classify(extra),
            _ => Qualifier::Stable,
        };

        Version {
            major,
            minor,
            maintenance,
            build,
            extra,
            qualifier,
        }
    }

    /// Parse a version string.
    ///
    /// Omitted trailing components default to 0 and an empty input yields
    /// the all-zero version. The extra is recognized only on the last
    /// dot-separated token, at its first `-`; once seen, the remaining
    /// components keep their defaults (`1.0-SNAPSHOT` parses as
    /// 1.0.0.0-SNAPSHOT).
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        if WHITESPACE_RE.is_match(version) {
            return Err(VersionError::Whitespace);
        }

        // documented leniency, not an error
        if version.is_empty() {
            return Ok(Version::new(0, 0, 0, 0));
        }

        let tokens: Vec<&str> = version.split(VERSION_SEPARATOR).collect();
        let last = tokens.len() - 1;

        let mut components = [0u32; 4];
        let mut extra = None;

        for (position, token) in tokens.iter().enumerate() {
            let mut token = *token;

            // the extra only ever hangs off the last token
            if position == last && token.contains(EXTRA_SEPARATOR) {
                let mut elements = token.split(EXTRA_SEPARATOR);
                token = elements.next().unwrap_or("");
                extra = Some(elements.collect::<Vec<_>>().join("-"));
            }

            if let Some(component) = Component::at(position) {
                components[position] =
                    token
                        .parse()
                        .map_err(|source| VersionError::InvalidComponent { component, source })?;
            }

            // stop once the extra is consumed, so 1.0-EXTRA leaves
            // maintenance and build at their defaults
            if extra.is_some() {
                break;
            }
        }

        Ok(Self::from_parts(
            components[0],
            components[1],
            components[2],
            components[3],
            extra,
        ))
    }

    /// Parse an optional version string, failing with the
    /// missing-argument error kind when it is absent.
    pub fn parse_opt(version: Option<&str>) -> Result<Self, VersionError> {
        match version {
            Some(version) => Self::parse(version),
            None => Err(VersionError::MissingArgument("version")),
        }
    }

    /// The major version component (1.X.X.X-X).
    pub fn major(&self) -> u32 {
        self.major
    }

    /// The minor version component (X.1.X.X-X).
    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// The maintenance version component (X.X.1.X-X).
    pub fn maintenance(&self) -> u32 {
        self.maintenance
    }

    /// The build version component (X.X.X.1-X).
    pub fn build(&self) -> u32 {
        self.build
    }

    /// The extra component (X.X.X.X-SNAPSHOT), if any.
    pub fn extra(&self) -> Option<&str> {
        self.extra.as_deref()
    }

    /// The qualifier family of the extra component.
    pub fn qualifier(&self) -> Qualifier {
        self.qualifier
    }

    /// Check if this is an alpha build.
    pub fn is_alpha(&self) -> bool {
        self.qualifier == Qualifier::Alpha
    }

    /// Check if this is a beta build.
    pub fn is_beta(&self) -> bool {
        self.qualifier == Qualifier::Beta
    }

    /// Check if this is a release candidate build.
    pub fn is_release_candidate(&self) -> bool {
        self.qualifier == Qualifier::ReleaseCandidate
    }

    /// Check if this is a snapshot build.
    pub fn is_snapshot(&self) -> bool {
        self.qualifier == Qualifier::Snapshot
    }

    /// Check if this is an unstable (pre-release) build.
    pub fn is_unstable(&self) -> bool {
        self.qualifier.is_unstable()
    }

    /// The numeric pre-release suffix of the extra.
    ///
    /// Returns -1 for stable builds and 0 for unstable builds without a
    /// suffix (`1.0.0-SNAPSHOT`). A non-numeric suffix such as
    /// `SNAPSHOT-TEST` is a parse error surfaced to the caller, not a
    /// silent default.
    pub fn unstable_version(&self) -> Result<i32, VersionError> {
        if !self.is_unstable() {
            return Ok(-1);
        }

        let extra = match self.extra.as_deref() {
            Some(extra) if extra.contains(EXTRA_SEPARATOR) => extra,
            _ => return Ok(0),
        };

        extra
            .split(EXTRA_SEPARATOR)
            .nth(1)
            .unwrap_or("")
            .parse()
            .map_err(|_| VersionError::InvalidUnstableNumber(extra.to_string()))
    }

    /// Pre-release number with parse failures flattened to 0 so that
    /// equality and ordering stay infallible; the public accessor keeps
    /// the error.
    fn unstable_version_lenient(&self) -> i32 {
        self.unstable_version().unwrap_or(0)
    }

    /// Check if this version is newer than `other`.
    ///
    /// The checks run in a fixed order and short-circuit on the first
    /// hit. Each numeric component is tested on its own, without first
    /// requiring the more significant components to be equal, so the
    /// relation is not a lexicographic total order. Downstream consumers
    /// encode this exact behavior; it is kept as shipped.
    pub fn newer(&self, other: &Version) -> bool {
        if self == other {
            return false;
        }

        // numeric components, most significant first
        if other.major < self.major {
            return true;
        }
        if other.minor < self.minor {
            return true;
        }
        if other.maintenance < self.maintenance {
            return true;
        }
        if other.build < self.build {
            return true;
        }

        // a stable build outranks any unstable build
        if other.is_unstable() && !self.is_unstable() {
            return true;
        }

        // qualifier precedence: ALPHA < BETA < SNAPSHOT < RC
        if other.is_alpha() && !self.is_alpha() {
            return true;
        }
        if other.is_beta() && !self.is_alpha() && !self.is_beta() {
            return true;
        }
        if other.is_snapshot() && !self.is_alpha() && !self.is_beta() && !self.is_snapshot() {
            return true;
        }

        // numeric pre-release suffix; snapshots carry none
        if other.is_unstable()
            && self.is_unstable()
            && !other.is_snapshot()
            && !self.is_snapshot()
            && other.unstable_version_lenient() < self.unstable_version_lenient()
        {
            return true;
        }

        false
    }

    /// Check if this version is older than `other`.
    pub fn older(&self, other: &Version) -> bool {
        self != other && !self.newer(other)
    }

    /// Render the version, including the build component even when it
    /// is 0 (`1.0.0.0` instead of `1.0.0`).
    pub fn to_string_with_build(&self) -> String {
        self.render(false)
    }

    fn render(&self, ignore_zero_build: bool) -> String {
        let mut rendered = format!(
            "{}{}{}{}{}",
            self.major, VERSION_SEPARATOR, self.minor, VERSION_SEPARATOR, self.maintenance
        );

        if self.build > 0 || !ignore_zero_build {
            rendered.push(VERSION_SEPARATOR);
            rendered.push_str(&self.build.to_string());
        }

        if let Some(extra) = self.extra.as_deref() {
            if !extra.is_empty() {
                rendered.push(EXTRA_SEPARATOR);
                rendered.push_str(extra);
            }
        }

        rendered
    }
}

impl Default for Version {
    /// The 1.0.0.0 version without an extra.
    fn default() -> Self {
        Version::new(1, 0, 0, 0)
    }
}

impl PartialEq for Version {
    /// Versions are equal when their numeric components and qualifier
    /// families match and, unless either side is a snapshot, their
    /// pre-release numbers match. The literal extra text is not compared,
    /// so two versions with different unrecognized extras are equal.
    fn eq(&self, other: &Self) -> bool {
        if self.major != other.major
            || self.minor != other.minor
            || self.maintenance != other.maintenance
            || self.build != other.build
        {
            return false;
        }

        if self.qualifier != other.qualifier {
            return false;
        }

        if !self.is_snapshot()
            && !other.is_snapshot()
            && self.unstable_version_lenient() != other.unstable_version_lenient()
        {
            return false;
        }

        true
    }
}

impl Eq for Version {}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(true))
    }
}
