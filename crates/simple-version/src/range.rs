//! Version range parsing and containment testing

use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;
use crate::version::{Version, WHITESPACE_RE};

/// Exclusive ceiling selector.
pub const CEILING_SELECTOR: char = ')';

/// Inclusive (fuzzy) ceiling selector.
pub const CEILING_SELECTOR_FUZZY: char = ']';

/// Exclusive floor selector.
pub const FLOOR_SELECTOR: char = '(';

/// Inclusive (fuzzy) floor selector.
pub const FLOOR_SELECTOR_FUZZY: char = '[';

/// Separator between the floor and ceiling elements.
pub const RANGE_SEPARATOR: char = ',';

/// An interval over [`Version`]s with open or closed bounds.
///
/// A fuzzy bound is inclusive, a non-fuzzy bound exclusive. The ceiling
/// may be absent, denoting a range without an upper bound; its fuzzy flag
/// is pinned to `false` in that case and carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    floor: Version,
    floor_fuzzy: bool,
    ceiling: Option<Version>,
    ceiling_fuzzy: bool,
}

impl VersionRange {
    /// Create a range from its bounds, failing fast when the floor is
    /// newer than a present ceiling.
    pub fn new(
        floor: Version,
        floor_fuzzy: bool,
        ceiling: Option<Version>,
        ceiling_fuzzy: bool,
    ) -> Result<Self, VersionError> {
        if let Some(ceiling) = &ceiling {
            if floor.newer(ceiling) {
                return Err(VersionError::FloorNewerThanCeiling);
            }
        }

        // the flag is meaningless without a ceiling
        let ceiling_fuzzy = ceiling.is_some() && ceiling_fuzzy;

        Ok(VersionRange {
            floor,
            floor_fuzzy,
            ceiling,
            ceiling_fuzzy,
        })
    }

    /// Create a bounded range with both bounds inclusive.
    pub fn inclusive(floor: Version, ceiling: Version) -> Result<Self, VersionError> {
        Self::new(floor, true, Some(ceiling), true)
    }

    /// Create a bounded range by parsing both bound strings.
    pub fn parse_bounds(
        floor: &str,
        floor_fuzzy: bool,
        ceiling: &str,
        ceiling_fuzzy: bool,
    ) -> Result<Self, VersionError> {
        Self::new(
            Version::parse(floor)?,
            floor_fuzzy,
            Some(Version::parse(ceiling)?),
            ceiling_fuzzy,
        )
    }

    /// Parse a range string such as `[1.0.0,2.0.0)`.
    ///
    /// Whitespace is stripped before parsing. A bare version without any
    /// selector denotes a range from that version (inclusive) without an
    /// upper bound.
    pub fn parse(range: &str) -> Result<Self, VersionError> {
        let range = WHITESPACE_RE.replace_all(range, "");

        if range.is_empty() {
            return Err(VersionError::EmptyRange);
        }

        let elements: Vec<&str> = range.split(RANGE_SEPARATOR).collect();

        if elements.len() == 1
            && !elements[0].contains([
                FLOOR_SELECTOR,
                FLOOR_SELECTOR_FUZZY,
                CEILING_SELECTOR,
                CEILING_SELECTOR_FUZZY,
            ])
        {
            let floor = Version::parse(elements[0])?;
            return Self::new(floor, true, None, false);
        }

        if elements.len() != 2 {
            return Err(VersionError::RangeElementCount(elements.len()));
        }

        let floor_element = elements[0];
        let floor_fuzzy = floor_element.starts_with(FLOOR_SELECTOR_FUZZY);
        if !floor_fuzzy && !floor_element.starts_with(FLOOR_SELECTOR) {
            return Err(VersionError::InvalidFloorSelector(
                floor_element.chars().next().unwrap_or(RANGE_SEPARATOR),
            ));
        }
        let floor = Version::parse(&floor_element[1..])?;

        let ceiling_element = elements[1];
        let ceiling_fuzzy = ceiling_element.ends_with(CEILING_SELECTOR_FUZZY);
        if !ceiling_fuzzy && !ceiling_element.ends_with(CEILING_SELECTOR) {
            return Err(VersionError::InvalidCeilingSelector(
                ceiling_element.chars().last().unwrap_or(RANGE_SEPARATOR),
            ));
        }
        let ceiling = Version::parse(&ceiling_element[..ceiling_element.len() - 1])?;

        Self::new(floor, floor_fuzzy, Some(ceiling), ceiling_fuzzy)
    }

    /// Parse an optional range string, failing with the missing-argument
    /// error kind when it is absent.
    pub fn parse_opt(range: Option<&str>) -> Result<Self, VersionError> {
        match range {
            Some(range) => Self::parse(range),
            None => Err(VersionError::MissingArgument("version range")),
        }
    }

    /// The floor (minimal) version.
    pub fn floor(&self) -> &Version {
        &self.floor
    }

    /// The ceiling (maximal) version, absent for open-ended ranges.
    pub fn ceiling(&self) -> Option<&Version> {
        self.ceiling.as_ref()
    }

    /// Check if the floor bound is inclusive.
    pub fn is_floor_fuzzy(&self) -> bool {
        self.floor_fuzzy
    }

    /// Check if the ceiling bound is inclusive.
    pub fn is_ceiling_fuzzy(&self) -> bool {
        self.ceiling_fuzzy
    }

    /// Check if the given version falls inside the range.
    pub fn contains(&self, version: &Version) -> bool {
        let ceiling = match &self.ceiling {
            Some(ceiling) => ceiling,
            None => {
                return (self.floor_fuzzy && self.floor == *version) || self.floor.older(version)
            }
        };

        (self.ceiling_fuzzy && *ceiling == *version)
            || (self.floor_fuzzy && self.floor == *version)
            || (ceiling.newer(version) && self.floor.older(version))
    }
}

impl FromStr for VersionRange {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionRange::parse(s)
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ceiling {
            Some(ceiling) => write!(
                f,
                "{}{}{}{}{}",
                if self.floor_fuzzy {
                    FLOOR_SELECTOR_FUZZY
                } else {
                    FLOOR_SELECTOR
                },
                self.floor,
                RANGE_SEPARATOR,
                ceiling,
                if self.ceiling_fuzzy {
                    CEILING_SELECTOR_FUZZY
                } else {
                    CEILING_SELECTOR
                },
            ),
            // open-ended ranges render as the bare floor form they parse from
            None => write!(f, "{}", self.floor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor() {
        let floor = Version::new(1, 0, 0, 0);
        let ceiling = Version::new(2, 0, 0, 0);

        let range = VersionRange::new(floor.clone(), false, Some(ceiling.clone()), false).unwrap();

        assert_eq!(*range.floor(), floor);
        assert_eq!(range.ceiling(), Some(&ceiling));
        assert!(!range.is_floor_fuzzy());
        assert!(!range.is_ceiling_fuzzy());
    }

    #[test]
    fn test_constructor_rejects_inverted_bounds() {
        let error = VersionRange::new(
            Version::new(2, 0, 0, 0),
            false,
            Some(Version::new(1, 0, 0, 0)),
            false,
        )
        .unwrap_err();

        assert_eq!(error, VersionError::FloorNewerThanCeiling);
        assert!(error.is_parse_failure());
    }

    #[test]
    fn test_inclusive() {
        let range =
            VersionRange::inclusive(Version::new(1, 0, 0, 0), Version::new(2, 0, 0, 0)).unwrap();

        assert!(range.is_floor_fuzzy());
        assert!(range.is_ceiling_fuzzy());
    }

    #[test]
    fn test_parse_bounds() {
        let range = VersionRange::parse_bounds("1.0.0", true, "2.0.0", false).unwrap();

        assert_eq!(*range.floor(), Version::new(1, 0, 0, 0));
        assert_eq!(range.ceiling(), Some(&Version::new(2, 0, 0, 0)));
        assert!(range.is_floor_fuzzy());
        assert!(!range.is_ceiling_fuzzy());

        assert_eq!(
            VersionRange::parse_bounds("2.0.0", true, "1.0.0", true),
            Err(VersionError::FloorNewerThanCeiling)
        );
    }

    #[test]
    fn test_unbounded_pins_ceiling_flag() {
        let range = VersionRange::new(Version::new(1, 0, 0, 0), true, None, true).unwrap();

        assert_eq!(range.ceiling(), None);
        assert!(!range.is_ceiling_fuzzy());
    }

    #[test]
    fn test_parse() {
        let range = VersionRange::parse("[1.0.0, 2.0.0)").unwrap();

        assert_eq!(*range.floor(), Version::new(1, 0, 0, 0));
        assert_eq!(range.ceiling(), Some(&Version::new(2, 0, 0, 0)));
        assert!(range.is_floor_fuzzy());
        assert!(!range.is_ceiling_fuzzy());
    }

    #[test]
    fn test_parse_bare_version() {
        let range = VersionRange::parse("1.0.0").unwrap();

        assert_eq!(*range.floor(), Version::new(1, 0, 0, 0));
        assert_eq!(range.ceiling(), None);
        assert!(range.is_floor_fuzzy());
        assert!(!range.is_ceiling_fuzzy());
        assert!(range.contains(&Version::new(2, 0, 0, 0)));
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(VersionRange::parse(""), Err(VersionError::EmptyRange));
        assert_eq!(VersionRange::parse("  "), Err(VersionError::EmptyRange));
        assert_eq!(
            VersionRange::parse("A1.0.0,2.0.0]"),
            Err(VersionError::InvalidFloorSelector('A'))
        );
        assert_eq!(
            VersionRange::parse("(1.0.0.0,2.0.0.0A"),
            Err(VersionError::InvalidCeilingSelector('A'))
        );
        assert_eq!(
            VersionRange::parse("(1.0.0.0]"),
            Err(VersionError::RangeElementCount(1))
        );
        assert_eq!(
            VersionRange::parse("(1.0.0,1.5.0,2.0.0]"),
            Err(VersionError::RangeElementCount(3))
        );
        assert_eq!(
            VersionRange::parse("(2.0.0,1.0.0]"),
            Err(VersionError::FloorNewerThanCeiling)
        );
    }

    #[test]
    fn test_parse_opt() {
        assert!(VersionRange::parse_opt(Some("[1.0.0,2.0.0]")).is_ok());

        let error = VersionRange::parse_opt(None).unwrap_err();
        assert_eq!(error, VersionError::MissingArgument("version range"));
        assert!(error.is_missing_argument());
    }

    #[test]
    fn test_contains() {
        let range = VersionRange::new(
            Version::new(1, 0, 0, 0),
            false,
            Some(Version::new(2, 0, 0, 0)),
            true,
        )
        .unwrap();

        assert!(range.contains(&Version::new(1, 2, 0, 0)));
        assert!(!range.contains(&Version::new(1, 0, 0, 0)));
        assert!(range.contains(&Version::new(2, 0, 0, 0)));
    }

    #[test]
    fn test_contains_inclusive_endpoints() {
        let range = VersionRange::parse("[1.0.0,2.0.0]").unwrap();

        assert!(range.contains(&Version::new(1, 0, 0, 0)));
        assert!(range.contains(&Version::new(1, 5, 0, 0)));
        assert!(range.contains(&Version::new(2, 0, 0, 0)));
        assert!(!range.contains(&Version::new(2, 1, 0, 0)));
    }

    #[test]
    fn test_contains_exclusive_endpoints() {
        let range = VersionRange::parse("(1.0.0,2.0.0)").unwrap();

        assert!(!range.contains(&Version::new(1, 0, 0, 0)));
        assert!(range.contains(&Version::new(1, 5, 0, 0)));
        assert!(!range.contains(&Version::new(2, 0, 0, 0)));
    }

    #[test]
    fn test_contains_unbounded() {
        let floor = Version::new(1, 0, 0, 0);
        let range = VersionRange::new(floor.clone(), true, None, false).unwrap();

        assert!(range.contains(&Version::new(5, 0, 0, 0)));
        assert!(range.contains(&floor));

        // non-fuzzy open-ended range excludes its own floor
        let range = VersionRange::new(floor.clone(), false, None, false).unwrap();
        assert!(!range.contains(&floor));
        assert!(range.contains(&Version::new(1, 1, 0, 0)));
    }

    #[test]
    fn test_display() {
        let floor = Version::new(1, 0, 0, 0);
        let ceiling = Version::new(2, 0, 0, 0);

        let cases = [
            (true, true, "[1.0.0,2.0.0]"),
            (true, false, "[1.0.0,2.0.0)"),
            (false, true, "(1.0.0,2.0.0]"),
            (false, false, "(1.0.0,2.0.0)"),
        ];

        for (floor_fuzzy, ceiling_fuzzy, expected) in cases {
            let range = VersionRange::new(
                floor.clone(),
                floor_fuzzy,
                Some(ceiling.clone()),
                ceiling_fuzzy,
            )
            .unwrap();
            assert_eq!(range.to_string(), expected);
        }
    }

    #[test]
    fn test_display_unbounded() {
        let range = VersionRange::new(Version::new(1, 0, 0, 0), true, None, false).unwrap();
        assert_eq!(range.to_string(), "1.0.0");
    }

    #[test]
    fn test_display_round_trip() {
        for input in ["[1.0.0,2.0.0]", "(1.0.0,2.0.0)", "[1.0.0,2.0.0)", "1.0.0"] {
            let range = VersionRange::parse(input).unwrap();
            assert_eq!(range.to_string(), input);
        }
    }

    #[test]
    fn test_contains_with_qualifiers() {
        let range = VersionRange::parse("(1.0.0,2.0.0]").unwrap();

        // pre-releases of the exclusive floor stay below it
        assert!(!range.contains(&Version::with_extra(1, 0, 0, 0, "RC-1")));

        // a stable floor outranks any unstable version under the ordering
        // relation, so even higher-numbered snapshots fall outside
        assert!(!range.contains(&Version::with_extra(1, 1, 0, 0, "SNAPSHOT")));
        assert!(range.contains(&Version::new(1, 1, 0, 0)));
    }
}
