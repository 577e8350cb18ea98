//! Typed report groups
//!
//! Each category of token has a parsed representation here. Groups
//! are parsed from a single token and render as a plain-language
//! sentence via `Display`.

mod measure;
mod sky;
mod time;
mod wind;

use thiserror::Error;

pub use measure::{Pressure, TemperatureDewPoint, Visibility};
pub use sky::{CloudLayer, Intensity, WeatherPhenomenon};
pub use time::{ChangeKind, DayTime, InvalidDateErr, ObservationTime, TafChange, ValidityPeriod};
pub use wind::{Wind, WindDirection};

/// Error parsing a report group
///
/// The token did not have the shape required by the group it
/// was parsed as. Tokens which come out of the
/// [classifier](crate::classify) always have the right shape, so
/// this error indicates that a token was decoded under the wrong
/// [`Category`](crate::Category).
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
#[error("malformed {group} group: \"{token}\"")]
pub struct GroupDecodeErr {
    group: &'static str,
    token: String,
}

impl GroupDecodeErr {
    pub(crate) fn new<S>(group: &'static str, token: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            group,
            token: token.into(),
        }
    }

    /// Name of the group which failed to parse
    pub fn group(&self) -> &'static str {
        self.group
    }

    /// The offending token
    pub fn token(&self) -> &str {
        &self.token
    }
}

// Parse a run of ASCII digits which the group's regex has
// already admitted
fn digits<T>(field: &str, group: &'static str, token: &str) -> Result<T, GroupDecodeErr>
where
    T: std::str::FromStr,
{
    field
        .parse()
        .map_err(|_e| GroupDecodeErr::new(group, token))
}
