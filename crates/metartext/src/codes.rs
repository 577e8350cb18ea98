//! # Lookup tables known to `metartext`
//!
//! ## Weather phenomena
//!
//! | Code   | Description             |
//! |--------|-------------------------|
//! | `BL`   | Blowing snow            |
//! | `BR`   | Mist                    |
//! | `DS`   | Duststorm               |
//! | `FG`   | Fog                     |
//! | `FZGR` | Freezing hail           |
//! | `FZRA` | Freezing rain           |
//! | `GR`   | Hail                    |
//! | `HZ`   | Haze                    |
//! | `RA`   | Rain                    |
//! | `RAFG` | Rain and fog            |
//! | `SHRA` | Rain showers            |
//! | `SHSN` | Snow showers            |
//! | `SN`   | Snow                    |
//! | `SQ`   | Squall                  |
//! | `SS`   | Sandstorm               |
//! | `TS`   | Thunderstorm            |
//! | `TSRA` | Thunderstorm with rain  |
//! | `TSSN` | Thunderstorm with snow  |
//! | `VC`   | Nearby phenomenon       |
//!
//! Codes which are not listed here are not translated. Reports
//! which contain them simply omit the phenomenon.
//!
//! ## Cloud cover
//!
//! | Code  | Description         |
//! |-------|---------------------|
//! | `FEW` | Few clouds          |
//! | `SCT` | Scattered clouds    |
//! | `BKN` | Many clouds         |
//! | `OVC` | Overcast            |
//! | `CLR` | Clear sky           |
//! | `NSC` | No significant cloud |
//!
//! Unlike weather phenomena, an unknown cloud code is reported
//! to the reader as unrecognized.
//!
//! ## See Also
//!
//! * [`WeatherPhenomenon`](crate::WeatherPhenomenon)
//! * [`CloudLayer`](crate::CloudLayer)

use std::fmt;
use std::str::FromStr;

use phf::phf_map;
use strum::EnumMessage;

/// Database of weather phenomenon codes
///
/// Keys are the bare code, without any intensity prefix.
static PHENOMENA: phf::Map<&'static str, &'static str> = phf_map! {
    // thunderstorms
    "TS" => "Thunderstorm",
    "TSRA" => "Thunderstorm with rain",
    "TSSN" => "Thunderstorm with snow",

    // precipitation
    "RA" => "Rain",
    "SHRA" => "Rain showers",
    "FZRA" => "Freezing rain",
    "RAFG" => "Rain and fog",
    "SN" => "Snow",
    "SHSN" => "Snow showers",
    "GR" => "Hail",
    "FZGR" => "Freezing hail",

    // obscuration
    "FG" => "Fog",
    "HZ" => "Haze",
    "BR" => "Mist",

    // other
    "VC" => "Nearby phenomenon",
    "BL" => "Blowing snow",
    "SQ" => "Squall",
    "DS" => "Duststorm",
    "SS" => "Sandstorm",
};

/// Database of three-letter cloud cover codes
static CLOUDS: phf::Map<&'static str, &'static str> = phf_map! {
    "FEW" => "Few clouds",
    "SCT" => "Scattered clouds",
    "BKN" => "Many clouds",
    "OVC" => "Overcast",
    "CLR" => "Clear sky",
    "NSC" => "No significant cloud",
};

/// Lookup a weather phenomenon code like "`TSRA`"
///
/// Returns `None` if the code is not known.
pub fn lookup_phenomenon<S>(code: S) -> Option<&'static str>
where
    S: AsRef<str>,
{
    PHENOMENA.get(code.as_ref()).copied()
}

/// Lookup a three-letter cloud cover code like "`BKN`"
///
/// Returns `None` if the code is not known.
pub fn lookup_cloud<S>(code: S) -> Option<&'static str>
where
    S: AsRef<str>,
{
    CLOUDS.get(code.as_ref()).copied()
}

/// Compass octant
///
/// One of eight 45° sectors, named by its cardinal or
/// intercardinal direction.
///
/// ```
/// use metartext::CompassPoint;
///
/// assert_eq!(CompassPoint::SouthWest, CompassPoint::from_bearing(240));
/// assert_eq!("SW", CompassPoint::SouthWest.as_str());
/// assert_eq!(CompassPoint::North, CompassPoint::from_bearing(350));
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum CompassPoint {
    #[strum(serialize = "N", detailed_message = "north")]
    North,
    #[strum(serialize = "NE", detailed_message = "northeast")]
    NorthEast,
    #[strum(serialize = "E", detailed_message = "east")]
    East,
    #[strum(serialize = "SE", detailed_message = "southeast")]
    SouthEast,
    #[strum(serialize = "S", detailed_message = "south")]
    South,
    #[strum(serialize = "SW", detailed_message = "southwest")]
    SouthWest,
    #[strum(serialize = "W", detailed_message = "west")]
    West,
    #[strum(serialize = "NW", detailed_message = "northwest")]
    NorthWest,
}

impl CompassPoint {
    /// Octant containing the given bearing
    ///
    /// The octant index is `round(degrees / 45) mod 8`, so each
    /// octant is centered on its named direction. Bearings of
    /// 360° and above wrap around.
    pub fn from_bearing(degrees: u16) -> Self {
        let index = (f64::from(degrees) / 45.0).round() as usize % OCTANTS.len();
        OCTANTS[index]
    }

    /// Abbreviated direction name, like "`NE`"
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Full direction name, like "`northeast`"
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

impl AsRef<str> for CompassPoint {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for CompassPoint {
    /// The normal form is "`NE`"; the alternate form is "`northeast`"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.as_display_str().fmt(f)
        } else {
            self.as_str().fmt(f)
        }
    }
}

const OCTANTS: [CompassPoint; 8] = [
    CompassPoint::North,
    CompassPoint::NorthEast,
    CompassPoint::East,
    CompassPoint::SouthEast,
    CompassPoint::South,
    CompassPoint::SouthWest,
    CompassPoint::West,
    CompassPoint::NorthWest,
];

/// Wind speed unit
///
/// Wind groups end in a unit suffix. `WindUnit` may be
/// parsed from that suffix and displays as a human-readable
/// label.
///
/// ```
/// use metartext::WindUnit;
///
/// assert_eq!(Some(WindUnit::Knots), WindUnit::from_suffix("KT"));
/// assert_eq!("m/s", WindUnit::MetersPerSecond.as_display_str());
/// assert_eq!(None, WindUnit::from_suffix("KMH"));
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::EnumMessage, strum_macros::EnumString,
)]
pub enum WindUnit {
    /// Knots (nautical miles per hour)
    #[strum(serialize = "KT", detailed_message = "knots")]
    Knots,

    /// Meters per second
    #[strum(serialize = "MPS", detailed_message = "m/s")]
    MetersPerSecond,
}

impl WindUnit {
    /// Parse the unit suffix of a wind group
    pub fn from_suffix<S>(suffix: S) -> Option<Self>
    where
        S: AsRef<str>,
    {
        WindUnit::from_str(suffix.as_ref()).ok()
    }

    /// Unit suffix as it appears in a report, like "`KT`"
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Human-readable unit label, like "`knots`"
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

impl AsRef<str> for WindUnit {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for WindUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}
