//! Difficulty levels and their aliases
//!
//! A level names one of the scored or blind strategies. Lookups never fail:
//! anything unrecognized resolves to the default level.

use std::fmt;

/// Solver level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    /// Blind single pick, no scoring
    HouseGambit = 0,
    /// Maximum information value, random among ties
    #[default]
    BestBucket = 1,
    /// Maximum information value, then smallest worst case
    TieBreaker = 2,
}

/// Case-insensitive alias table, one plain and several display names per level
const ALIASES: &[(&str, Level)] = &[
    ("novice", Level::HouseGambit),
    ("house", Level::HouseGambit),
    ("gambit", Level::HouseGambit),
    ("house gambit", Level::HouseGambit),
    ("house-gambit", Level::HouseGambit),
    ("advanced", Level::BestBucket),
    ("bucket", Level::BestBucket),
    ("best bucket", Level::BestBucket),
    ("best-bucket", Level::BestBucket),
    ("expert", Level::TieBreaker),
    ("tiebreaker", Level::TieBreaker),
    ("tie breaker", Level::TieBreaker),
    ("tie-breaker", Level::TieBreaker),
];

impl Level {
    /// All levels in numeric order
    pub const ALL: [Self; 3] = [Self::HouseGambit, Self::BestBucket, Self::TieBreaker];

    /// Level for a numeric value, falling back to the default
    #[must_use]
    pub fn from_number(value: i64) -> Self {
        match value {
            0 => Self::HouseGambit,
            1 => Self::BestBucket,
            2 => Self::TieBreaker,
            _ => {
                log::debug!("unknown level {value}, using {}", Self::default());
                Self::default()
            }
        }
    }

    /// Level for a named alias, falling back to the default
    #[must_use]
    pub fn from_alias(alias: &str) -> Self {
        let alias = alias.trim();

        ALIASES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(alias))
            .map_or_else(
                || {
                    log::debug!("unknown level alias {alias:?}, using {}", Self::default());
                    Self::default()
                },
                |&(_, level)| level,
            )
    }

    /// Level for either a number or an alias
    ///
    /// # Examples
    /// ```
    /// use term_crack::solver::Level;
    ///
    /// assert_eq!(Level::parse("2"), Level::TieBreaker);
    /// assert_eq!(Level::parse("House Gambit"), Level::HouseGambit);
    /// assert_eq!(Level::parse("impossible"), Level::BestBucket);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Self {
        value
            .trim()
            .parse::<i64>()
            .map_or_else(|_| Self::from_alias(value), Self::from_number)
    }

    /// Numeric value
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Plain name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HouseGambit => "novice",
            Self::BestBucket => "advanced",
            Self::TieBreaker => "expert",
        }
    }

    /// Display name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HouseGambit => "House Gambit",
            Self::BestBucket => "Best Bucket",
            Self::TieBreaker => "Tie Breaker",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
