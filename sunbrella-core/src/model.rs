use std::{convert::TryFrom, fmt};

use thiserror::Error;

/// Approximate position of the caller, in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
}

/// Today's forecast values the advice is based on.
///
/// `precip_prob` is kept on the upstream scale (a 0.0–1.0 fraction).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherConditions {
    pub uvi: f64,
    pub precip_prob: f64,
}

/// A check the caller can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Check {
    /// UV index: should I wear sunblock?
    Shine,
    /// Precipitation probability: should I take an umbrella?
    Rain,
}

impl Check {
    pub fn as_str(&self) -> &'static str {
        match self {
            Check::Shine => "shine",
            Check::Rain => "rain",
        }
    }

    pub const fn all() -> &'static [Check] {
        &[Check::Shine, Check::Rain]
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown check '{0}', expected one of: shine, rain")]
pub struct UnknownCheck(pub String);

impl TryFrom<&str> for Check {
    type Error = UnknownCheck;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "shine" => Ok(Check::Shine),
            "rain" => Ok(Check::Rain),
            _ => Err(UnknownCheck(value.to_string())),
        }
    }
}

/// Outcome of evaluating today's conditions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Verdict {
    /// One human-readable line per rule that fired.
    pub advisories: Vec<String>,
    /// True iff at least one requested rule fired.
    pub should_act: bool,
}
