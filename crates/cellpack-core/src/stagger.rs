//! Hexagonal stagger modes for cell grids.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How alternate rows or columns of a pack are offset.
///
/// Staggering packs cells on a 60° triangular lattice: one axis is compressed
/// by `sin(60°)` while alternate lines along it are shifted by half of
/// `spacing * cos(60°)` in opposite directions.
///
/// # Examples
///
/// ```
/// # use cellpack_core::StaggerMode;
/// let mode: StaggerMode = "series".parse().unwrap();
/// assert_eq!(mode, StaggerMode::Series);
///
/// // Long-form labels are accepted as well
/// let mode: StaggerMode = "Stagger Parallel".parse().unwrap();
/// assert_eq!(mode, StaggerMode::Parallel);
///
/// assert!("diagonal".parse::<StaggerMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum StaggerMode {
    /// Plain rectangular grid (default)
    #[default]
    None,
    /// Columns along the series axis are compressed and alternately shifted along Y
    Series,
    /// Rows along the parallel axis are compressed and alternately shifted along X
    Parallel,
}

impl StaggerMode {
    /// All modes, in display order.
    pub const ALL: [StaggerMode; 3] = [Self::None, Self::Series, Self::Parallel];

    /// Returns `true` if this mode offsets alternate lines.
    pub fn is_staggered(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl FromStr for StaggerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "series" | "stagger series" => Ok(Self::Series),
            "parallel" | "stagger parallel" => Ok(Self::Parallel),
            _ => Err(format!(
                "unsupported stagger mode `{s}`, expected one of: none, series, parallel"
            )),
        }
    }
}

impl TryFrom<String> for StaggerMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StaggerMode> for &'static str {
    fn from(val: StaggerMode) -> Self {
        match val {
            StaggerMode::None => "none",
            StaggerMode::Series => "series",
            StaggerMode::Parallel => "parallel",
        }
    }
}

impl fmt::Display for StaggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_names() {
        assert_eq!("none".parse::<StaggerMode>(), Ok(StaggerMode::None));
        assert_eq!("series".parse::<StaggerMode>(), Ok(StaggerMode::Series));
        assert_eq!("parallel".parse::<StaggerMode>(), Ok(StaggerMode::Parallel));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("NONE".parse::<StaggerMode>(), Ok(StaggerMode::None));
        assert_eq!(" Series ".parse::<StaggerMode>(), Ok(StaggerMode::Series));
        assert_eq!(
            "Stagger Series".parse::<StaggerMode>(),
            Ok(StaggerMode::Series)
        );
    }

    #[test]
    fn test_parse_unknown_fails() {
        let err = "hex".parse::<StaggerMode>().unwrap_err();
        assert!(err.contains("`hex`"), "unexpected message: {err}");
        assert!("".parse::<StaggerMode>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for mode in StaggerMode::ALL {
            assert_eq!(mode.to_string().parse::<StaggerMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(StaggerMode::default(), StaggerMode::None);
        assert!(!StaggerMode::None.is_staggered());
        assert!(StaggerMode::Series.is_staggered());
        assert!(StaggerMode::Parallel.is_staggered());
    }
}
