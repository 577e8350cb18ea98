//! Surface wind group

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::{digits, GroupDecodeErr};
use crate::codes::{CompassPoint, WindUnit};

lazy_static! {
    static ref RE_WIND: Regex =
        Regex::new(r"^(VRB|[0-9]{3})([0-9]{2})(?:G([0-9]{2}))?(KT|MPS)$").expect("bad wind regexp");
}

/// Direction the wind blows from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindDirection {
    /// Direction is variable (`VRB`)
    Variable,

    /// True bearing, in degrees
    Bearing(u16),
}

impl WindDirection {
    /// Compass octant, if the direction is not variable
    pub fn compass(&self) -> Option<CompassPoint> {
        match self {
            WindDirection::Variable => None,
            WindDirection::Bearing(deg) => Some(CompassPoint::from_bearing(*deg)),
        }
    }
}

/// Surface wind group, like `24015G25KT` or `VRB05KT`
///
/// The direction is either variable or a three-digit bearing,
/// followed by a two-digit speed, an optional gust, and a unit.
///
/// ```
/// use metartext::{CompassPoint, Wind, WindUnit};
///
/// let wind = Wind::parse("24015G25KT").unwrap();
/// assert_eq!(Some(CompassPoint::SouthWest), wind.direction().compass());
/// assert_eq!(15, wind.speed());
/// assert_eq!(Some(25), wind.gust());
/// assert_eq!(WindUnit::Knots, wind.unit());
/// assert_eq!(
///     "Wind: from SW (240°) at 15 knots with gusts up to 25 knots.",
///     wind.to_string()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Wind {
    direction: WindDirection,
    speed: u16,
    gust: Option<u16>,
    unit: WindUnit,
}

impl Wind {
    const NAME: &'static str = "wind";

    /// Parse from token
    pub fn parse(token: &str) -> Result<Self, GroupDecodeErr> {
        let malformed = || GroupDecodeErr::new(Self::NAME, token);
        let caps = RE_WIND.captures(token).ok_or_else(malformed)?;

        let direction = match &caps[1] {
            "VRB" => WindDirection::Variable,
            deg => WindDirection::Bearing(digits(deg, Self::NAME, token)?),
        };
        let gust = match caps.get(3) {
            Some(g) => Some(digits(g.as_str(), Self::NAME, token)?),
            None => None,
        };

        Ok(Self {
            direction,
            speed: digits(&caps[2], Self::NAME, token)?,
            gust,
            unit: WindUnit::from_suffix(&caps[4]).ok_or_else(malformed)?,
        })
    }

    /// True if `token` has the shape of this group
    pub fn is_match(token: &str) -> bool {
        RE_WIND.is_match(token)
    }

    /// Wind direction
    pub fn direction(&self) -> WindDirection {
        self.direction
    }

    /// Sustained wind speed, in [`unit()`](#method.unit)
    pub fn speed(&self) -> u16 {
        self.speed
    }

    /// Gust speed, in [`unit()`](#method.unit), if reported
    pub fn gust(&self) -> Option<u16> {
        self.gust
    }

    /// Speed unit
    pub fn unit(&self) -> WindUnit {
        self.unit
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            WindDirection::Variable => write!(f, "Wind: variable wind")?,
            WindDirection::Bearing(deg) => write!(
                f,
                "Wind: from {} ({:03}°)",
                CompassPoint::from_bearing(deg),
                deg
            )?,
        }

        write!(f, " at {} {}", self.speed, self.unit)?;
        if let Some(gust) = self.gust {
            write!(f, " with gusts up to {} {}", gust, self.unit)?;
        }
        write!(f, ".")
    }
}
