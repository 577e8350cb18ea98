//! Report assembly

use std::fmt;

use log::{trace, warn};
use thiserror::Error;

use crate::builder::TranslatorBuilder;
use crate::category::{classify_all, Category};
use crate::group::GroupDecodeErr;
use crate::token::tokenize;

/// Text returned by [`translate()`] for empty input
pub const PROMPT_EMPTY: &str = "Please provide a METAR or TAF report.";

/// Text returned by [`translate()`] when decoding fails
pub const MESSAGE_MALFORMED: &str = "An error occurred while decoding the METAR/TAF report.";

/// Translate a report into plain language
///
/// Decodes a METAR or TAF `report` with the default
/// [`Translator`], which places one decoded fragment per
/// line. This function never fails: empty input yields
/// [`PROMPT_EMPTY`] and a failure to decode yields
/// [`MESSAGE_MALFORMED`].
///
/// ```
/// let text = metartext::translate("LFPG 071450Z 24015G25KT 9999 -RA BKN020CB M05/M10 Q1013");
/// let lines: Vec<&str> = text.lines().collect();
///
/// assert_eq!(lines[0], "Station: LFPG");
/// assert_eq!(lines[2], "Wind: from SW (240°) at 15 knots with gusts up to 25 knots.");
/// assert_eq!(lines[6], "Temperature: -5°C, Dew point: -10°C.");
/// assert_eq!(lines.len(), 8);
///
/// assert_eq!(metartext::PROMPT_EMPTY, metartext::translate("   "));
/// ```
pub fn translate(report: &str) -> String {
    Translator::default().translate(report)
}

/// Error translating a report
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TranslateError {
    /// The report is empty or contains only whitespace
    #[error("no report to translate")]
    EmptyInput,

    /// A token could not be decoded under its category
    #[error("malformed report: {0}")]
    Malformed(#[from] GroupDecodeErr),
}

impl TranslateError {
    /// Fixed text to show a user in place of a translation
    pub fn user_message(&self) -> &'static str {
        match self {
            TranslateError::EmptyInput => PROMPT_EMPTY,
            TranslateError::Malformed(_) => MESSAGE_MALFORMED,
        }
    }
}

/// A decoded token
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DecodedSegment {
    token: String,
    category: Category,
    text: Option<String>,
}

impl DecodedSegment {
    /// Raw token text
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Category assigned to the token
    pub fn category(&self) -> Category {
        self.category
    }

    /// Decoded text, if any
    ///
    /// Weather phenomena with unknown codes have no text.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// A translated report
///
/// Holds one [`DecodedSegment`] per input token, in input
/// order. Displaying the `Report` joins the decoded texts with
/// the separator the [`Translator`] was built with.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Report {
    segments: Vec<DecodedSegment>,
    separator: String,
}

impl Report {
    /// Every decoded token, in input order
    pub fn segments(&self) -> &[DecodedSegment] {
        &self.segments
    }

    /// Iterator over decoded texts, in input order
    ///
    /// Tokens which produced no text are skipped.
    pub fn fragments(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().filter_map(|seg| seg.text())
    }

    /// Separator used when displaying
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// The first segment, which is always the station
    pub fn station(&self) -> Option<&str> {
        self.segments.first().map(|seg| seg.token())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frag) in self.fragments().enumerate() {
            if i > 0 {
                f.write_str(&self.separator)?;
            }
            f.write_str(frag)?;
        }
        Ok(())
    }
}

/// Translates METAR and TAF reports
///
/// Translators are created via a
/// [builder](crate::TranslatorBuilder). They hold no state
/// between reports and may be shared freely between threads.
///
/// ```
/// use metartext::{Category, TranslatorBuilder};
///
/// let translator = TranslatorBuilder::new().with_separator(" / ").build();
/// let report = translator.try_translate("EGLL 291020Z VRB05KT +PO").unwrap();
///
/// // one segment per token
/// assert_eq!(4, report.segments().len());
/// assert_eq!(Category::WeatherPhenomenon, report.segments()[3].category());
///
/// // … but the unknown phenomenon is not displayed
/// assert_eq!(
///     "Station: EGLL / Observation on day 29 at 10:20 UTC. / Wind: variable wind at 5 knots.",
///     report.to_string()
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Translator {
    separator: String,
}

impl Translator {
    /// Translate a report
    ///
    /// Returns an error if the report is empty or if a token
    /// could not be decoded.
    pub fn try_translate(&self, report: &str) -> Result<Report, TranslateError> {
        let tokens = tokenize(report);
        if tokens.is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let segments = classify_all(tokens)
            .into_iter()
            .map(|seg| {
                let text = seg.decode()?;
                trace!("report: \"{}\" → {:?}", seg.token(), text);
                Ok(DecodedSegment {
                    token: seg.token().to_owned(),
                    category: seg.category(),
                    text,
                })
            })
            .collect::<Result<Vec<_>, GroupDecodeErr>>()?;

        Ok(Report {
            segments,
            separator: self.separator.clone(),
        })
    }

    /// Translate a report to text
    ///
    /// Like [`try_translate()`](#method.try_translate), but
    /// errors are replaced with a fixed message for the user.
    pub fn translate(&self, report: &str) -> String {
        match self.try_translate(report) {
            Ok(report) => report.to_string(),
            Err(err) => {
                if let TranslateError::Malformed(_) = err {
                    warn!("report: {}", err);
                }
                err.user_message().to_owned()
            }
        }
    }

    /// Fragment separator
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl From<&TranslatorBuilder> for Translator {
    fn from(cfg: &TranslatorBuilder) -> Self {
        Self {
            separator: cfg.separator().to_owned(),
        }
    }
}

impl std::default::Default for Translator {
    fn default() -> Self {
        TranslatorBuilder::default().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METAR: &str = "LFPG 071450Z 24015G25KT 9999 -RA BKN020CB M05/M10 Q1013";
    const TAF: &str = "LFPO 0712/0818 FM071400 27010KT 8000 SHRA SCT015 BECMG072000 VRB03KT";

    #[test]
    fn test_translate_metar() {
        let text = translate(METAR);
        let expect = [
            "Station: LFPG",
            "Observation on day 07 at 14:50 UTC.",
            "Wind: from SW (240°) at 15 knots with gusts up to 25 knots.",
            "Visibility: 9.999 km.",
            "Weather: Rain (weak).",
            "Many clouds at 2000 ft (with Cumulonimbus).",
            "Temperature: -5°C, Dew point: -10°C.",
            "Pressure: 1013 hPa.",
        ];
        assert_eq!(expect.join("\n"), text);
    }

    #[test]
    fn test_translate_taf() {
        let report = Translator::default().try_translate(TAF).expect("bad taf");
        let frags: Vec<&str> = report.fragments().collect();
        assert_eq!(
            frags.as_slice(),
            &[
                "Station: LFPO",
                "Valid from day 07 12:00 UTC to day 08 18:00 UTC.",
                "From day 07 at 14:00 UTC.",
                "Wind: from W (270°) at 10 knots.",
                "Visibility: 8.0 km.",
                "Weather: Rain showers.",
                "Scattered clouds at 1500 ft.",
                "Becoming, day 07 at 20:00 UTC.",
                "Wind: variable wind at 3 knots.",
            ]
        );
        assert_eq!(Some("LFPO"), report.station());
    }

    #[test]
    fn test_fragment_count() {
        // every token produces a fragment…
        let report = Translator::default()
            .try_translate("KJFK 071450Z ??? XXX020 NOSIG")
            .unwrap();
        assert_eq!(5, report.segments().len());
        assert_eq!(5, report.fragments().count());
        assert_eq!(
            "Unrecognized: ???",
            report.segments()[2].text().unwrap()
        );

        // … except unknown phenomena
        let report = Translator::default()
            .try_translate("KJFK 071450Z -DZ RA")
            .unwrap();
        assert_eq!(4, report.segments().len());
        assert_eq!(3, report.fragments().count());
        assert_eq!(None, report.segments()[2].text());
    }

    #[test]
    fn test_order_preserved() {
        let report = Translator::default()
            .try_translate("KJFK Q1013 9999 071450Z")
            .unwrap();
        let cats: Vec<Category> = report.segments().iter().map(|s| s.category()).collect();
        assert_eq!(
            cats.as_slice(),
            &[
                Category::Station,
                Category::Pressure,
                Category::Visibility,
                Category::Time
            ]
        );
        assert_eq!(
            "Station: KJFK\nPressure: 1013 hPa.\nVisibility: 9.999 km.\nObservation on day 07 at 14:50 UTC.",
            &format!("{}", report)
        );
    }

    #[test]
    fn test_later_station_kept() {
        assert_eq!(
            "Station: LFPG\nObservation on day 07 at 14:50 UTC.\nStation: KJFK\nPressure: 1013 hPa.",
            translate("LFPG 071450Z KJFK Q1013")
        );
        assert_eq!(
            "Station: METAR\nStation: LFPG\nPressure: 1013 hPa.",
            translate("METAR LFPG Q1013")
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            Err(TranslateError::EmptyInput),
            Translator::default().try_translate("")
        );
        assert_eq!(PROMPT_EMPTY, translate(""));
        assert_eq!(PROMPT_EMPTY, translate(" \n\t "));
    }

    #[test]
    fn test_malformed_message() {
        let err = TranslateError::from(GroupDecodeErr::new("wind", "Q1013"));
        assert_eq!(MESSAGE_MALFORMED, err.user_message());
        assert_eq!(
            "malformed report: malformed wind group: \"Q1013\"",
            &format!("{}", err)
        );
    }

    #[test]
    fn test_html_separator() {
        let translator = TranslatorBuilder::new().with_html_line_breaks().build();
        assert_eq!("<br>", translator.separator());
        assert_eq!(
            "Station: LFPG<br>Visibility: 0.8 km.",
            translator.translate("LFPG 0800")
        );

        // a lone station has no separator
        assert_eq!("Station: LFPG", translator.translate("LFPG"));
    }

    #[test]
    fn test_translator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Translator>();
    }
}
