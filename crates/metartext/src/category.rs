//! Token categories and the segment classifier

use std::fmt;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use strum::EnumMessage;

use crate::group::{
    CloudLayer, GroupDecodeErr, ObservationTime, Pressure, TafChange, TemperatureDewPoint,
    ValidityPeriod, Visibility, WeatherPhenomenon, Wind,
};

lazy_static! {
    static ref RE_STATION: Regex = Regex::new(r"^[A-Z]{4}$").expect("bad station regexp");
}

/// Semantic category of a report token
///
/// Every token in a report is assigned exactly one `Category`
/// by [`classify()`]. Each category knows how to
/// [`decode()`](Category::decode) its tokens into text.
///
/// ```
/// use metartext::Category;
///
/// assert_eq!("Wind", Category::Wind.as_ref());
/// assert_eq!("wind", Category::Wind.as_display_str());
/// assert_eq!("temperature and dew point", format!("{}", Category::TemperatureDewPoint));
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::IntoStaticStr,
    strum_macros::EnumIter,
)]
pub enum Category {
    /// Four-letter station identifier, like `LFPG`
    #[strum(detailed_message = "station")]
    Station,

    /// Observation time, like `071450Z`
    #[strum(detailed_message = "observation time")]
    Time,

    /// Forecast validity period, like `0712/0818`
    #[strum(detailed_message = "validity period")]
    ValidityPeriod,

    /// Surface wind, like `24015G25KT`
    #[strum(detailed_message = "wind")]
    Wind,

    /// Prevailing visibility in meters, like `9999`
    #[strum(detailed_message = "visibility")]
    Visibility,

    /// Present weather, like `-RA`
    #[strum(detailed_message = "weather phenomenon")]
    WeatherPhenomenon,

    /// Cloud layer, like `BKN020CB`
    #[strum(detailed_message = "cloud layer")]
    CloudLayer,

    /// Temperature and dew point, like `M05/M10`
    #[strum(detailed_message = "temperature and dew point")]
    TemperatureDewPoint,

    /// QNH pressure, like `Q1013`
    #[strum(detailed_message = "pressure")]
    Pressure,

    /// TAF change group, like `FM071400`
    #[strum(detailed_message = "forecast change")]
    TafChange,

    /// Anything else
    #[strum(detailed_message = "unrecognized")]
    Unknown,
}

impl Category {
    /// Decode a token of this category into text
    ///
    /// Returns `Ok(None)` when the token is understood but
    /// produces no text. This happens only for weather
    /// phenomena whose code is not known. Unknown cloud
    /// cover, by contrast, *is* reported as unrecognized.
    ///
    /// Returns an error if the `token` does not have the shape
    /// of this category. Tokens categorized by [`classify()`]
    /// always decode.
    ///
    /// ```
    /// use metartext::Category;
    ///
    /// assert_eq!(
    ///     Some("Pressure: 1013 hPa.".to_owned()),
    ///     Category::Pressure.decode("Q1013").unwrap()
    /// );
    /// assert_eq!(None, Category::WeatherPhenomenon.decode("PO").unwrap());
    /// assert!(Category::Wind.decode("Q1013").is_err());
    /// ```
    pub fn decode(&self, token: &str) -> Result<Option<String>, GroupDecodeErr> {
        let text = match self {
            Category::Station => format!("Station: {}", token),
            Category::Time => ObservationTime::parse(token)?.to_string(),
            Category::ValidityPeriod => ValidityPeriod::parse(token)?.to_string(),
            Category::Wind => Wind::parse(token)?.to_string(),
            Category::Visibility => Visibility::parse(token)?.to_string(),
            Category::WeatherPhenomenon => {
                let wx = WeatherPhenomenon::parse(token)?;
                if !wx.is_known() {
                    return Ok(None);
                }
                wx.to_string()
            }
            Category::CloudLayer => CloudLayer::parse(token)?.to_string(),
            Category::TemperatureDewPoint => TemperatureDewPoint::parse(token)?.to_string(),
            Category::Pressure => Pressure::parse(token)?.to_string(),
            Category::TafChange => TafChange::parse(token)?.to_string(),
            Category::Unknown => format!("Unrecognized: {}", token),
        };
        Ok(Some(text))
    }

    /// Human-readable category name, like "`cloud layer`"
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// Category name, like "`CloudLayer`"
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}

/// A token paired with its category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClassifiedSegment<'r> {
    token: &'r str,
    category: Category,
    position: usize,
}

impl<'r> ClassifiedSegment<'r> {
    /// Raw token text
    pub fn token(&self) -> &'r str {
        self.token
    }

    /// Category assigned to the token
    pub fn category(&self) -> Category {
        self.category
    }

    /// Zero-based position of the token in the report
    pub fn position(&self) -> usize {
        self.position
    }

    /// Decode this segment into text
    ///
    /// See [`Category::decode()`].
    pub fn decode(&self) -> Result<Option<String>, GroupDecodeErr> {
        self.category.decode(self.token)
    }
}

impl<'r> fmt::Display for ClassifiedSegment<'r> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.category.as_str(), self.token)
    }
}

/// Classification rules, in priority order
///
/// The first rule to match wins.
const RULES: &[(Category, fn(&str) -> bool)] = &[
    (Category::Time, ObservationTime::is_match),
    (Category::ValidityPeriod, ValidityPeriod::is_match),
    (Category::Wind, Wind::is_match),
    (Category::Visibility, Visibility::is_match),
    (Category::CloudLayer, CloudLayer::is_match),
    (Category::TemperatureDewPoint, TemperatureDewPoint::is_match),
    (Category::Pressure, Pressure::is_match),
    (Category::TafChange, TafChange::is_match),
    (Category::WeatherPhenomenon, is_weather_phenomenon),
    (Category::Station, is_station),
];

/// Determine the category of a token
///
/// The token at `position` zero is always the
/// [`Station`](Category::Station), whatever it looks like.
/// All other tokens are tested against each rule in a fixed
/// priority order, and the first match wins. Tokens that match
/// no rule are [`Unknown`](Category::Unknown).
///
/// Four-letter codes like `TSRA` have the shape of both a
/// weather phenomenon and a station. Past the first token, a
/// bare four-letter code is a weather phenomenon only if it is
/// in the [phenomenon table](crate::codes). Otherwise it is a
/// station.
///
/// ```
/// use metartext::{classify, Category};
///
/// assert_eq!(Category::Station, classify("LFPG", 0));
/// assert_eq!(Category::Wind, classify("24015G25KT", 2));
/// assert_eq!(Category::WeatherPhenomenon, classify("TSRA", 5));
/// assert_eq!(Category::Station, classify("KJFK", 5));
/// assert_eq!(Category::Unknown, classify("R27/0600", 5));
/// ```
pub fn classify(token: &str, position: usize) -> Category {
    if position == 0 {
        return Category::Station;
    }

    RULES
        .iter()
        .find(|(_cat, is_match)| is_match(token))
        .map(|(cat, _is_match)| *cat)
        .unwrap_or(Category::Unknown)
}

/// Classify every token, in order
///
/// Produces exactly one segment per token.
pub fn classify_all<'r, I>(tokens: I) -> Vec<ClassifiedSegment<'r>>
where
    I: IntoIterator<Item = &'r str>,
{
    tokens
        .into_iter()
        .enumerate()
        .map(|(position, token)| {
            let category = classify(token, position);
            debug!("classify: token {} \"{}\" is {}", position, token, category);
            ClassifiedSegment {
                token,
                category,
                position,
            }
        })
        .collect()
}

// A bare four-letter code must be a known phenomenon, so that
// the station rule sees the rest
fn is_weather_phenomenon(token: &str) -> bool {
    if !WeatherPhenomenon::is_match(token) {
        return false;
    }
    if !RE_STATION.is_match(token) {
        return true;
    }
    WeatherPhenomenon::parse(token).map_or(false, |wx| wx.is_known())
}

fn is_station(token: &str) -> bool {
    RE_STATION.is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    use strum::IntoEnumIterator;

    #[test]
    fn test_classify_priority() {
        const CASES: &[(&str, Category)] = &[
            ("071450Z", Category::Time),
            ("0712/0818", Category::ValidityPeriod),
            ("24015G25KT", Category::Wind),
            ("VRB05KT", Category::Wind),
            ("05008MPS", Category::Wind),
            ("9999", Category::Visibility),
            ("BKN020CB", Category::CloudLayer),
            ("XXX020", Category::CloudLayer),
            ("M05/M10", Category::TemperatureDewPoint),
            ("Q1013", Category::Pressure),
            ("FM071400", Category::TafChange),
            ("BECMG071400", Category::TafChange),
            ("-RA", Category::WeatherPhenomenon),
            ("+TSRA", Category::WeatherPhenomenon),
            ("TSRA", Category::WeatherPhenomenon),
            ("VV003", Category::WeatherPhenomenon),
            ("NOSIG", Category::Unknown),
            ("A2992", Category::Unknown),
            ("metar", Category::Unknown),
            ("R27/0600", Category::Unknown),
            ("1/2SM", Category::Unknown),
        ];

        for (token, expect) in CASES {
            assert_eq!(*expect, classify(token, 1), "token {}", token);
        }
    }

    #[test]
    fn test_first_token_is_station() {
        assert_eq!(Category::Station, classify("LFPG", 0));
        assert_eq!(Category::Station, classify("TSRA", 0));
        assert_eq!(Category::Station, classify("9999", 0));
        assert_eq!(Category::Station, classify("x", 0));

        // past the first token, patterns decide
        assert_eq!(Category::WeatherPhenomenon, classify("TSRA", 1));
        assert_eq!(Category::Visibility, classify("9999", 1));
        assert_eq!(Category::Unknown, classify("x", 1));
    }

    #[test]
    fn test_later_station_codes() {
        for code in ["KJFK", "EGLL", "LFPG", "ABCD", "ZZZZ"] {
            assert_eq!(Category::Station, classify(code, 3), "token {}", code);
        }

        // known four-letter phenomena still win
        for code in ["TSRA", "TSSN", "SHRA", "FZRA", "RAFG", "SHSN", "FZGR"] {
            assert_eq!(
                Category::WeatherPhenomenon,
                classify(code, 3),
                "token {}",
                code
            );
        }

        // signed or suffixed codes keep their phenomenon shape
        assert_eq!(Category::WeatherPhenomenon, classify("+ABCD", 3));
        assert_eq!(Category::WeatherPhenomenon, classify("-PO", 3));
        assert_eq!(Category::WeatherPhenomenon, classify("VV003", 3));
    }

    #[test]
    fn test_classify_all() {
        let tokens = ["KJFK", "071450Z", "TSRA", "KJFK", "??"];
        let segments = classify_all(tokens.iter().copied());
        assert_eq!(tokens.len(), segments.len());

        let cats: Vec<Category> = segments.iter().map(|s| s.category()).collect();
        assert_eq!(
            cats.as_slice(),
            &[
                Category::Station,
                Category::Time,
                Category::WeatherPhenomenon,
                Category::Station,
                Category::Unknown
            ]
        );

        for (i, seg) in segments.iter().enumerate() {
            assert_eq!(i, seg.position());
            assert_eq!(tokens[i], seg.token());
        }
        assert_eq!("Time\t071450Z", &format!("{}", segments[1]));
    }

    #[test]
    fn test_decode_every_category() {
        const SAMPLES: &[(Category, &str, &str)] = &[
            (Category::Station, "LFPG", "Station: LFPG"),
            (
                Category::Time,
                "071450Z",
                "Observation on day 07 at 14:50 UTC.",
            ),
            (
                Category::ValidityPeriod,
                "0712/0818",
                "Valid from day 07 12:00 UTC to day 08 18:00 UTC.",
            ),
            (
                Category::Wind,
                "VRB05KT",
                "Wind: variable wind at 5 knots.",
            ),
            (Category::Visibility, "9999", "Visibility: 9.999 km."),
            (Category::WeatherPhenomenon, "-SN", "Weather: Snow (weak)."),
            (
                Category::CloudLayer,
                "BKN020CB",
                "Many clouds at 2000 ft (with Cumulonimbus).",
            ),
            (
                Category::TemperatureDewPoint,
                "M05/M10",
                "Temperature: -5°C, Dew point: -10°C.",
            ),
            (Category::Pressure, "Q1013", "Pressure: 1013 hPa."),
            (
                Category::TafChange,
                "FM071400",
                "From day 07 at 14:00 UTC.",
            ),
            (Category::Unknown, "NOSIG", "Unrecognized: NOSIG"),
        ];

        // every category is covered
        assert_eq!(Category::iter().count(), SAMPLES.len());

        for (cat, token, text) in SAMPLES {
            assert_eq!(
                Some(text.to_string()),
                cat.decode(token).expect("decode failed"),
                "category {}",
                cat
            );
        }
    }

    #[test]
    fn test_decode_unknown_codes() {
        // unknown phenomena vanish
        assert_eq!(None, Category::WeatherPhenomenon.decode("+PO").unwrap());

        // unknown cloud types are flagged
        assert_eq!(
            Some("Cloud layer: unrecognized cloud code XXX at 2000 ft.".to_owned()),
            Category::CloudLayer.decode("XXX020").unwrap()
        );
    }

    #[test]
    fn test_decode_wrong_category() {
        let err = Category::Time.decode("LFPG").expect_err("should not decode");
        assert_eq!("observation time", err.group());
        Category::CloudLayer
            .decode("BKN")
            .expect_err("should not decode");
    }
}
