//! Visibility, temperature, and pressure groups

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::{digits, GroupDecodeErr};

lazy_static! {
    static ref RE_VISIBILITY: Regex = Regex::new(r"^[0-9]{4}$").expect("bad visibility regexp");
    static ref RE_TEMPERATURE: Regex =
        Regex::new(r"^(M)?([0-9]{2})/(M)?([0-9]{2})$").expect("bad temperature regexp");
    static ref RE_PRESSURE: Regex = Regex::new(r"^Q([0-9]{4})$").expect("bad pressure regexp");
}

/// Prevailing visibility group, like `9999`
///
/// The group is four digits in meters. It is displayed in
/// kilometers with at least one decimal place and is never
/// rounded or capped.
///
/// ```
/// use metartext::Visibility;
///
/// let vis = Visibility::parse("9999").unwrap();
/// assert_eq!(9999, vis.meters());
/// assert_eq!("Visibility: 9.999 km.", vis.to_string());
/// assert_eq!("Visibility: 5.0 km.", Visibility::parse("5000").unwrap().to_string());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Visibility {
    meters: u16,
}

impl Visibility {
    const NAME: &'static str = "visibility";

    /// Parse from token
    pub fn parse(token: &str) -> Result<Self, GroupDecodeErr> {
        if !RE_VISIBILITY.is_match(token) {
            return Err(GroupDecodeErr::new(Self::NAME, token));
        }
        Ok(Self {
            meters: digits(token, Self::NAME, token)?,
        })
    }

    /// True if `token` has the shape of this group
    pub fn is_match(token: &str) -> bool {
        RE_VISIBILITY.is_match(token)
    }

    /// Visibility in meters
    pub fn meters(&self) -> u16 {
        self.meters
    }

    /// Visibility in kilometers
    pub fn kilometers(&self) -> f64 {
        f64::from(self.meters) / 1000.0
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // exact decimal: whole kilometers, then up to three places
        let km = self.meters / 1000;
        let frac = format!("{:03}", self.meters % 1000);
        let frac = match frac.trim_end_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };
        write!(f, "Visibility: {}.{} km.", km, frac)
    }
}

/// Temperature and dew point group, like `M05/M10`
///
/// An `M` prefix marks a value below zero.
///
/// ```
/// use metartext::TemperatureDewPoint;
///
/// let temp = TemperatureDewPoint::parse("M05/M10").unwrap();
/// assert_eq!(-5, temp.temperature());
/// assert_eq!(-10, temp.dew_point());
/// assert_eq!("Temperature: -5°C, Dew point: -10°C.", temp.to_string());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TemperatureDewPoint {
    temperature: Celsius,
    dew_point: Celsius,
}

// Whole degrees, with the reported sign kept so that `M00`
// stays below zero
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Celsius {
    magnitude: i16,
    minus: bool,
}

impl Celsius {
    fn value(&self) -> i16 {
        if self.minus {
            -self.magnitude
        } else {
            self.magnitude
        }
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minus {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

impl TemperatureDewPoint {
    const NAME: &'static str = "temperature";

    /// Parse from token
    pub fn parse(token: &str) -> Result<Self, GroupDecodeErr> {
        let caps = RE_TEMPERATURE
            .captures(token)
            .ok_or_else(|| GroupDecodeErr::new(Self::NAME, token))?;

        let signed = |minus: bool, value: &str| -> Result<Celsius, GroupDecodeErr> {
            Ok(Celsius {
                magnitude: digits(value, Self::NAME, token)?,
                minus,
            })
        };

        Ok(Self {
            temperature: signed(caps.get(1).is_some(), &caps[2])?,
            dew_point: signed(caps.get(3).is_some(), &caps[4])?,
        })
    }

    /// True if `token` has the shape of this group
    pub fn is_match(token: &str) -> bool {
        RE_TEMPERATURE.is_match(token)
    }

    /// Air temperature (°C)
    pub fn temperature(&self) -> i16 {
        self.temperature.value()
    }

    /// Dew point (°C)
    pub fn dew_point(&self) -> i16 {
        self.dew_point.value()
    }

    /// True if the temperature was reported below zero
    ///
    /// This is the only way to tell `M00` from `00`.
    pub fn is_temperature_below_zero(&self) -> bool {
        self.temperature.minus
    }

    /// True if the dew point was reported below zero
    pub fn is_dew_point_below_zero(&self) -> bool {
        self.dew_point.minus
    }
}

impl fmt::Display for TemperatureDewPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Temperature: {}°C, Dew point: {}°C.",
            self.temperature, self.dew_point
        )
    }
}

/// QNH pressure group, like `Q1013`
///
/// ```
/// use metartext::Pressure;
///
/// let qnh = Pressure::parse("Q0998").unwrap();
/// assert_eq!(998, qnh.hectopascals());
/// assert_eq!("Pressure: 0998 hPa.", qnh.to_string());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pressure {
    hectopascals: u16,
}

impl Pressure {
    const NAME: &'static str = "pressure";

    /// Parse from token
    pub fn parse(token: &str) -> Result<Self, GroupDecodeErr> {
        let caps = RE_PRESSURE
            .captures(token)
            .ok_or_else(|| GroupDecodeErr::new(Self::NAME, token))?;
        Ok(Self {
            hectopascals: digits(&caps[1], Self::NAME, token)?,
        })
    }

    /// True if `token` has the shape of this group
    pub fn is_match(token: &str) -> bool {
        RE_PRESSURE.is_match(token)
    }

    /// Pressure (hPa)
    pub fn hectopascals(&self) -> u16 {
        self.hectopascals
    }
}

impl fmt::Display for Pressure {
    /// The four reported digits are displayed as-is
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pressure: {:04} hPa.", self.hectopascals)
    }
}
