//! # Validation Levels — Compatibility Tiers
//!
//! Defines `ValidationLevel`, the totally ordered set of compatibility tiers
//! a caller validates against. Lower tiers reproduce the leniency of older
//! build engines; higher tiers escalate more findings to errors.
//!
//! The declaration order of the variants IS the ordering: `Minimal` is the
//! most lenient tier and `Maven31` the strictest. `ValidationLevel::STRICT`
//! always names the newest tier, so callers asking for "strict" pick up new
//! tiers without code changes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PomcheckError;

/// A compatibility tier controlling which findings are escalated to errors.
///
/// | Tier | Code | Name | Behavior |
/// |------|------|------|----------|
/// | `Minimal` | 0 | `minimal` | Only checks needed to build at all |
/// | `Maven20` | 20 | `2.0` | Legacy engine leniency |
/// | `Maven30` | 30 | `3.0` | Previous engine; plugin versions warn |
/// | `Maven31` | 31 | `3.1` | Current engine; everything enforced |
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ValidationLevel {
    /// Only the checks without which a build cannot be planned at all.
    #[serde(rename = "minimal")]
    Minimal,
    /// Legacy engine behavior.
    #[serde(rename = "2.0")]
    Maven20,
    /// Previous engine behavior.
    #[serde(rename = "3.0")]
    Maven30,
    /// Current engine behavior. This is the strict tier.
    #[default]
    #[serde(rename = "3.1", alias = "strict")]
    Maven31,
}

/// Total number of validation levels. Sizes the severity matrix columns.
pub const VALIDATION_LEVEL_COUNT: usize = 4;

impl ValidationLevel {
    /// The strictest tier currently defined.
    pub const STRICT: ValidationLevel = ValidationLevel::Maven31;

    /// Returns all levels from most lenient to strictest.
    pub fn all() -> &'static [ValidationLevel] {
        &[Self::Minimal, Self::Maven20, Self::Maven30, Self::Maven31]
    }

    /// Zero-based column of this level in tables sized by
    /// [`VALIDATION_LEVEL_COUNT`].
    pub fn index(self) -> usize {
        match self {
            Self::Minimal => 0,
            Self::Maven20 => 1,
            Self::Maven30 => 2,
            Self::Maven31 => 3,
        }
    }

    /// Numeric code used by callers that select levels by integer.
    pub fn code(self) -> u32 {
        match self {
            Self::Minimal => 0,
            Self::Maven20 => 20,
            Self::Maven30 => 30,
            Self::Maven31 => 31,
        }
    }

    /// Resolve a numeric level code.
    ///
    /// # Errors
    ///
    /// Returns [`PomcheckError::UnknownLevel`] for any code that does not
    /// name a tier. Codes are never rounded to the nearest tier.
    pub fn from_code(code: u32) -> Result<Self, PomcheckError> {
        match code {
            0 => Ok(Self::Minimal),
            20 => Ok(Self::Maven20),
            30 => Ok(Self::Maven30),
            31 => Ok(Self::Maven31),
            other => Err(PomcheckError::UnknownLevel(other.to_string())),
        }
    }

    /// Returns the short name of this level, matching its serde form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Maven20 => "2.0",
            Self::Maven30 => "3.0",
            Self::Maven31 => "3.1",
        }
    }
}

impl std::fmt::Display for ValidationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationLevel {
    type Err = PomcheckError;

    /// Parse a level from its short name, `strict`, or its numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimal" => Ok(Self::Minimal),
            "2.0" => Ok(Self::Maven20),
            "3.0" => Ok(Self::Maven30),
            "3.1" => Ok(Self::Maven31),
            "strict" => Ok(Self::STRICT),
            other => match other.parse::<u32>() {
                Ok(code) => Self::from_code(code),
                Err(_) => Err(PomcheckError::UnknownLevel(format!("{other:?}"))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_levels_count() {
        assert_eq!(ValidationLevel::all().len(), VALIDATION_LEVEL_COUNT);
    }

    #[test]
    fn test_levels_totally_ordered() {
        let all = ValidationLevel::all();
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1], "{} should be below {}", pair[0], pair[1]);
        }
        assert_eq!(ValidationLevel::STRICT, *all.last().unwrap());
    }

    #[test]
    fn test_index_matches_position() {
        for (i, level) in ValidationLevel::all().iter().enumerate() {
            assert_eq!(level.index(), i);
        }
    }

    #[test]
    fn test_code_roundtrip() {
        for level in ValidationLevel::all() {
            assert_eq!(ValidationLevel::from_code(level.code()).unwrap(), *level);
        }
    }

    #[test]
    fn test_from_code_unknown() {
        assert_eq!(
            ValidationLevel::from_code(25),
            Err(PomcheckError::UnknownLevel("25".to_string()))
        );
        assert!(ValidationLevel::from_code(32).is_err());
    }

    #[test]
    fn test_from_str_names_and_codes() {
        assert_eq!("minimal".parse::<ValidationLevel>().unwrap(), ValidationLevel::Minimal);
        assert_eq!("3.0".parse::<ValidationLevel>().unwrap(), ValidationLevel::Maven30);
        assert_eq!("strict".parse::<ValidationLevel>().unwrap(), ValidationLevel::STRICT);
        assert_eq!("20".parse::<ValidationLevel>().unwrap(), ValidationLevel::Maven20);
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("".parse::<ValidationLevel>().is_err());
        assert!("STRICT".parse::<ValidationLevel>().is_err()); // case-sensitive
        assert!("3.2".parse::<ValidationLevel>().is_err());
        assert!("-1".parse::<ValidationLevel>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for level in ValidationLevel::all() {
            let json = serde_json::to_string(level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
    }

    #[test]
    fn test_serde_accepts_strict_alias() {
        let level: ValidationLevel = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(level, ValidationLevel::STRICT);
    }

    #[test]
    fn test_default_is_strict() {
        assert_eq!(ValidationLevel::default(), ValidationLevel::STRICT);
    }
}
