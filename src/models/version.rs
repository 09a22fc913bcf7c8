// Semantic version model and transition rules

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::UpmError;

/// A three-part `major.minor.patch` version as UPM manifests record it.
///
/// Pre-release and build-metadata suffixes are out of scope: a version
/// string must decompose into exactly three integer components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }

    /// Apply exactly one transition rule and return the resulting version.
    ///
    /// Resets cascade downward only: a minor bump zeroes patch, a major
    /// bump zeroes minor and patch. An unrecognized update class leaves
    /// the version untouched (see [`UpdateClass::Unrecognized`]).
    pub fn bumped(&self, class: &UpdateClass) -> Self {
        match class {
            UpdateClass::Patch => Self::new(self.major, self.minor, self.patch + 1),
            UpdateClass::Minor => Self::new(self.major, self.minor + 1, 0),
            UpdateClass::Major => Self::new(self.major + 1, 0, 0),
            UpdateClass::Unrecognized(_) => *self,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = UpmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(UpmError::InvalidVersion {
                value: s.to_string(),
                reason: "version must have exactly 3 parts (major.minor.patch)".to_string(),
            });
        }

        let parse_part = |part: &str, field: &str| {
            part.parse::<u64>().map_err(|_| UpmError::InvalidVersion {
                value: s.to_string(),
                reason: format!("invalid {} component: '{}'", field, part),
            })
        };

        let major = parse_part(parts[0], "major")?;
        let minor = parse_part(parts[1], "minor")?;
        let patch = parse_part(parts[2], "patch")?;

        Ok(Version::new(major, minor, patch))
    }
}

/// The caller's chosen bump category.
///
/// Parsing is case-insensitive and total: anything outside
/// patch/minor/major is captured as `Unrecognized` rather than rejected,
/// preserving the no-op contract of the original CI step while still
/// letting callers see what was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateClass {
    Patch,
    Minor,
    Major,
    Unrecognized(String),
}

impl UpdateClass {
    pub fn parse(input: &str) -> Self {
        match input.to_lowercase().as_str() {
            "patch" => UpdateClass::Patch,
            "minor" => UpdateClass::Minor,
            "major" => UpdateClass::Major,
            _ => UpdateClass::Unrecognized(input.to_string()),
        }
    }
}

impl fmt::Display for UpdateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateClass::Patch => write!(f, "patch"),
            UpdateClass::Minor => write!(f, "minor"),
            UpdateClass::Major => write!(f, "major"),
            UpdateClass::Unrecognized(raw) => write!(f, "{}", raw),
        }
    }
}

/// What a bump run actually did, so a deliberate patch/minor/major bump
/// is distinguishable from the unrecognized-class no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpOutcome {
    Applied {
        class: UpdateClass,
        previous: Version,
        next: Version,
    },
    Unchanged {
        class: String,
        version: Version,
    },
}

impl BumpOutcome {
    /// Compute the outcome of applying `class` to `current`.
    pub fn compute(current: Version, class: UpdateClass) -> Self {
        match class {
            UpdateClass::Unrecognized(raw) => BumpOutcome::Unchanged {
                class: raw,
                version: current,
            },
            recognized => {
                let next = current.bumped(&recognized);
                BumpOutcome::Applied {
                    class: recognized,
                    previous: current,
                    next,
                }
            }
        }
    }

    /// The version that should be persisted and reported.
    pub fn result_version(&self) -> Version {
        match self {
            BumpOutcome::Applied { next, .. } => *next,
            BumpOutcome::Unchanged { version, .. } => *version,
        }
    }

    pub fn was_applied(&self) -> bool {
        matches!(self, BumpOutcome::Applied { .. })
    }
}
