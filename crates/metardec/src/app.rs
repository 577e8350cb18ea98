//! Report output
//!
//! Each report is written in one of two forms:
//!
//! 1. `Translate`: the plain-language translation, with decoded
//!    groups joined by the configured separator.
//!
//! 2. `Classify`: one `CATEGORY<TAB>word` line per word, which is
//!    handy for seeing why a word was decoded the way it was.
//!
//! Consecutive reports are separated by a blank line.

use std::io::{self, Write};

use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, warn};
use metartext::{classify_all, tokenize, Category, ObservationTime, Translator};

use crate::cli::Args;

/// Output form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Plain-language translation
    Translate,

    /// Category of each word
    Classify,
}

/// Configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub translator: Translator,
    pub mode: Mode,
    pub resolve_time: Option<DateTime<Utc>>,
}

impl Config {
    /// Configure from command-line `args`
    ///
    /// Observation times are resolved against `now`, if the
    /// user asked for it.
    pub fn new(args: &Args, now: DateTime<Utc>) -> Self {
        Self {
            translator: metartext::TranslatorBuilder::new()
                .with_separator(args.separator())
                .build(),
            mode: if args.classify {
                Mode::Classify
            } else {
                Mode::Translate
            },
            resolve_time: if args.resolve_time { Some(now) } else { None },
        }
    }
}

/// Run the application
///
/// Writes every report from the `reports` iterator to `out`.
/// Blank reports are skipped. Returns the number of reports
/// written.
pub fn run<I, S, W>(cfg: &Config, reports: I, out: &mut W) -> io::Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut count = 0usize;
    for report in reports {
        let report = report.as_ref();
        if report.trim().is_empty() {
            continue;
        }

        debug!("report {}: \"{}\"", count, report);
        if count > 0 {
            writeln!(out)?;
        }

        match cfg.mode {
            Mode::Translate => writeln!(out, "{}", cfg.translator.translate(report))?,
            Mode::Classify => {
                for seg in classify_all(tokenize(report)) {
                    writeln!(out, "{}", seg)?;
                }
            }
        }

        if let Some(now) = cfg.resolve_time {
            if let Some(ts) = observation_datetime(report, &now) {
                writeln!(
                    out,
                    "Observation time: {}",
                    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
                )?;
            }
        }

        count += 1;
    }

    Ok(count)
}

// Place the report's observation time on the calendar, if
// it has one
fn observation_datetime(report: &str, now: &DateTime<Utc>) -> Option<DateTime<Utc>> {
    let seg = classify_all(tokenize(report))
        .into_iter()
        .find(|seg| seg.category() == Category::Time)?;

    let tm = ObservationTime::parse(seg.token()).ok()?;
    match tm.daytime().datetime(now) {
        Ok(ts) => Some(ts),
        Err(err) => {
            warn!("observation time \"{}\": {}", seg.token(), err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;
    use clap::Parser;

    fn run_to_string(cfg: &Config, reports: &[&str]) -> (usize, String) {
        let mut out = Vec::new();
        let count = run(cfg, reports.iter(), &mut out).expect("write failed");
        (count, String::from_utf8(out).expect("not utf-8"))
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 15, 0, 0).unwrap()
    }

    #[test]
    fn test_translate_reports() {
        let args = Args::try_parse_from(["metardec"]).unwrap();
        let cfg = Config::new(&args, now());
        assert_eq!(Mode::Translate, cfg.mode);

        let (count, text) = run_to_string(&cfg, &["LFPG 9999", "   ", "KJFK Q1013"]);
        assert_eq!(2, count);
        assert_eq!(
            "Station: LFPG\nVisibility: 9.999 km.\n\nStation: KJFK\nPressure: 1013 hPa.\n",
            text
        );
    }

    #[test]
    fn test_classify_reports() {
        let args = Args::try_parse_from(["metardec", "--classify"]).unwrap();
        let cfg = Config::new(&args, now());

        let (_count, text) = run_to_string(&cfg, &["LFPG TSRA NOSIG"]);
        assert_eq!(
            "Station\tLFPG\nWeatherPhenomenon\tTSRA\nUnknown\tNOSIG\n",
            text
        );
    }

    #[test]
    fn test_resolve_time() {
        let args = Args::try_parse_from(["metardec", "--html", "--resolve-time"]).unwrap();
        let cfg = Config::new(&args, now());

        let (_count, text) = run_to_string(&cfg, &["LFPG 071450Z"]);
        assert_eq!(
            "Station: LFPG<br>Observation on day 07 at 14:50 UTC.\nObservation time: 2024-03-07T14:50:00Z\n",
            text
        );

        // no time group, nothing to resolve
        let (_count, text) = run_to_string(&cfg, &["LFPG 9999"]);
        assert_eq!("Station: LFPG<br>Visibility: 9.999 km.\n", text);
    }

    #[test]
    fn test_quiet_still_translates() {
        let args = Args::try_parse_from(["metardec", "-q"]).unwrap();
        let cfg = Config::new(&args, now());

        let (count, text) = run_to_string(&cfg, &["LFPG 9999", "KJFK"]);
        assert_eq!(2, count);
        assert_eq!("Station: LFPG\nVisibility: 9.999 km.\n\nStation: KJFK\n", text);
    }

    #[test]
    fn test_empty_report_prompt() {
        let args = Args::try_parse_from(["metardec"]).unwrap();
        let cfg = Config::new(&args, now());
        assert_eq!(
            metartext::PROMPT_EMPTY,
            cfg.translator.translate("")
        );
    }
}
