//! Present weather and cloud layer groups

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use strum::EnumMessage;

use super::{digits, GroupDecodeErr};
use crate::codes::{lookup_cloud, lookup_phenomenon};

lazy_static! {
    static ref RE_PHENOMENON: Regex =
        Regex::new(r"^([+-])?([A-Z]{2,4})([0-9]{3})?$").expect("bad phenomenon regexp");
    static ref RE_CLOUD: Regex =
        Regex::new(r"^([A-Z]{3})([0-9]{3})(CB)?$").expect("bad cloud regexp");
}

/// Intensity of a weather phenomenon
///
/// Intensity is given by a `+` or `-` prefix. Phenomena with
/// no prefix are of moderate intensity, which is not called
/// out when displayed.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
)]
pub enum Intensity {
    /// Light (`-`)
    #[strum(serialize = "-", detailed_message = "weak")]
    Light,

    /// Moderate (no prefix)
    #[default]
    #[strum(serialize = "", detailed_message = "moderate")]
    Moderate,

    /// Heavy (`+`)
    #[strum(serialize = "+", detailed_message = "strong")]
    Heavy,
}

impl Intensity {
    /// Parse from prefix
    ///
    /// Anything other than `+` or `-` is
    /// [`Intensity::Moderate`].
    pub fn from<S>(prefix: S) -> Self
    where
        S: AsRef<str>,
    {
        str::parse(prefix.as_ref()).unwrap_or_default()
    }

    /// Qualifier used in decoded text, like "`strong`"
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}

/// Present weather group, like `-RA` or `+TSRA`
///
/// Weather phenomena are parsed even if their code is not
/// in the [phenomenon table](crate::codes). Such phenomena
/// have no [`description()`](#method.description) and are left
/// out of decoded reports.
///
/// ```
/// use metartext::{Intensity, WeatherPhenomenon};
///
/// let wx = WeatherPhenomenon::parse("-RA").unwrap();
/// assert_eq!(Intensity::Light, wx.intensity());
/// assert_eq!(Some("Rain"), wx.description());
/// assert_eq!("Weather: Rain (weak).", wx.to_string());
///
/// let unknown = WeatherPhenomenon::parse("PO").unwrap();
/// assert_eq!(None, unknown.description());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WeatherPhenomenon {
    intensity: Intensity,
    code: String,
    description: Option<&'static str>,
}

impl WeatherPhenomenon {
    const NAME: &'static str = "weather";

    /// Parse from token
    ///
    /// Trailing digits are accepted but do not take part in
    /// the table lookup.
    pub fn parse(token: &str) -> Result<Self, GroupDecodeErr> {
        let caps = RE_PHENOMENON
            .captures(token)
            .ok_or_else(|| GroupDecodeErr::new(Self::NAME, token))?;

        let code = &caps[2];
        Ok(Self {
            intensity: caps
                .get(1)
                .map(|sign| Intensity::from(sign.as_str()))
                .unwrap_or_default(),
            code: code.to_owned(),
            description: lookup_phenomenon(code),
        })
    }

    /// True if `token` has the shape of this group
    pub fn is_match(token: &str) -> bool {
        RE_PHENOMENON.is_match(token)
    }

    /// Intensity qualifier
    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    /// Phenomenon code, without intensity, like "`TSRA`"
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable description, if the code is known
    pub fn description(&self) -> Option<&'static str> {
        self.description
    }

    /// True if the code is in the phenomenon table
    pub fn is_known(&self) -> bool {
        self.description.is_some()
    }
}

impl fmt::Display for WeatherPhenomenon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description {
            Some(desc) => write!(f, "Weather: {}", desc)?,
            None => write!(f, "Weather: {}", self.code)?,
        }
        match self.intensity {
            Intensity::Moderate => write!(f, "."),
            other => write!(f, " ({}).", other),
        }
    }
}

/// Cloud layer group, like `BKN020CB`
///
/// A three-letter cover code, the height of the cloud base in
/// hundreds of feet, and an optional cumulonimbus marker.
/// Cover codes which are not in the [cloud table](crate::codes)
/// are still parsed and are displayed as unrecognized.
///
/// ```
/// use metartext::CloudLayer;
///
/// let layer = CloudLayer::parse("BKN020CB").unwrap();
/// assert_eq!(2000, layer.altitude_ft());
/// assert!(layer.is_cumulonimbus());
/// assert_eq!("Many clouds at 2000 ft (with Cumulonimbus).", layer.to_string());
///
/// let odd = CloudLayer::parse("XXX020").unwrap();
/// assert_eq!(
///     "Cloud layer: unrecognized cloud code XXX at 2000 ft.",
///     odd.to_string()
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CloudLayer {
    cover: String,
    description: Option<&'static str>,
    altitude_ft: u32,
    cumulonimbus: bool,
}

impl CloudLayer {
    const NAME: &'static str = "cloud layer";

    /// Parse from token
    pub fn parse(token: &str) -> Result<Self, GroupDecodeErr> {
        let caps = RE_CLOUD
            .captures(token)
            .ok_or_else(|| GroupDecodeErr::new(Self::NAME, token))?;

        let hundreds: u32 = digits(&caps[2], Self::NAME, token)?;
        Ok(Self {
            cover: caps[1].to_owned(),
            description: lookup_cloud(&caps[1]),
            altitude_ft: hundreds * 100,
            cumulonimbus: caps.get(3).is_some(),
        })
    }

    /// True if `token` has the shape of this group
    pub fn is_match(token: &str) -> bool {
        RE_CLOUD.is_match(token)
    }

    /// Three-letter cover code, like "`SCT`"
    pub fn cover(&self) -> &str {
        &self.cover
    }

    /// Human-readable cover, if the code is known
    pub fn description(&self) -> Option<&'static str> {
        self.description
    }

    /// Height of the cloud base (feet)
    pub fn altitude_ft(&self) -> u32 {
        self.altitude_ft
    }

    /// True if the layer contains cumulonimbus (`CB`)
    pub fn is_cumulonimbus(&self) -> bool {
        self.cumulonimbus
    }
}

impl fmt::Display for CloudLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description {
            Some(desc) => write!(f, "{} at {} ft", desc, self.altitude_ft)?,
            None => write!(
                f,
                "Cloud layer: unrecognized cloud code {} at {} ft",
                self.cover, self.altitude_ft
            )?,
        }
        if self.cumulonimbus {
            write!(f, " (with Cumulonimbus)")?;
        }
        write!(f, ".")
    }
}
