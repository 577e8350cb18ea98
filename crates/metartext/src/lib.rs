//! # metartext: METAR/TAF Plain-Language Decoder
//!
//! This crate translates aviation weather reports in
//! [METAR](https://en.wikipedia.org/wiki/METAR) and
//! [TAF](https://en.wikipedia.org/wiki/Terminal_aerodrome_forecast)
//! format into plain-language sentences.
//!
//! ## Disclaimer
//!
//! This crate is dual-licensed MIT and Apache 2.0. Read these licenses
//! carefully as they may affect your rights.
//!
//! This crate decodes only a closed set of common report groups and
//! codes. It is **not** suitable for flight planning. Always consult
//! an official weather briefing.
//!
//! ## Example
//!
//! ```
//! let text = metartext::translate("LFPG 071450Z 24015G25KT 9999 BKN020CB M05/M10 Q1013");
//!
//! assert_eq!(
//!     text,
//!     "Station: LFPG
//! Observation on day 07 at 14:50 UTC.
//! Wind: from SW (240°) at 15 knots with gusts up to 25 knots.
//! Visibility: 9.999 km.
//! Many clouds at 2000 ft (with Cumulonimbus).
//! Temperature: -5°C, Dew point: -10°C.
//! Pressure: 1013 hPa."
//! );
//! ```
//!
//! For control over the output, create a [`Translator`] with the
//! [`TranslatorBuilder`]. [`Translator::try_translate()`] returns a
//! [`Report`] which keeps every token alongside its [`Category`] and
//! decoded text.
//!
//! ## How reports are decoded
//!
//! A report is a sequence of whitespace-separated *tokens*, like
//!
//! ```txt
//! EGLL 291020Z 24015G25KT 9999 -RA BKN020CB 12/M01 Q1008
//! ```
//!
//! 1. The report is split into tokens with [`tokenize()`].
//!
//! 2. Each token is assigned one [`Category`] by [`classify()`].
//!    The first token is always the station. Every other token is
//!    tested against a fixed list of patterns, in priority order, and
//!    the first pattern to match wins. Tokens which match nothing are
//!    [`Category::Unknown`].
//!
//! 3. Each token is decoded by its category into a sentence. Each
//!    category has a typed group, like [`Wind`] or [`CloudLayer`],
//!    which may also be used directly.
//!
//! 4. Sentences are joined, in token order.
//!
//! Unknown tokens are reported as unrecognized so that every token is
//! accounted for. There is one exception: weather phenomena with codes
//! that are not in the [phenomenon table](crate::codes) are silently
//! left out. Cloud layers with unknown cover codes are reported as
//! unrecognized.
//!
//! ## Crate features
//!
//! * `chrono`: Use chrono to place a report's day and time on the
//!   calendar with [`DayTime::datetime()`]. If enabled, `chrono`
//!   becomes part of this crate's public API.

#![deny(unsafe_code)]

mod builder;
mod category;
pub mod codes;
mod group;
mod report;
mod token;

pub use builder::{TranslatorBuilder, SEPARATOR_HTML, SEPARATOR_NEWLINE};
pub use category::{classify, classify_all, Category, ClassifiedSegment};
pub use codes::{CompassPoint, WindUnit};
pub use group::{
    ChangeKind, CloudLayer, DayTime, GroupDecodeErr, Intensity, InvalidDateErr, ObservationTime,
    Pressure, TafChange, TemperatureDewPoint, ValidityPeriod, Visibility, WeatherPhenomenon, Wind,
    WindDirection,
};
pub use report::{
    translate, DecodedSegment, Report, TranslateError, Translator, MESSAGE_MALFORMED, PROMPT_EMPTY,
};
pub use token::tokenize;
