//! Observation time, validity period, and TAF change groups

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use strum::EnumMessage;
use thiserror::Error;

use super::{digits, GroupDecodeErr};

lazy_static! {
    static ref RE_TIME: Regex =
        Regex::new(r"^([0-9]{2})([0-9]{2})([0-9]{2})Z$").expect("bad time regexp");
    static ref RE_VALIDITY: Regex =
        Regex::new(r"^([0-9]{2})([0-9]{2})/([0-9]{2})([0-9]{2})$").expect("bad validity regexp");
    static ref RE_CHANGE: Regex =
        Regex::new(r"^(FM|BECMG)([0-9]{2})([0-9]{2})([0-9]{2})$").expect("bad change regexp");
}

/// A day of the month and a UTC time of day
///
/// Reports carry only the day of the month. Use
/// [`datetime()`](#method.datetime) to place it on the calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DayTime {
    day: u8,
    hour: u8,
    minute: u8,
}

impl DayTime {
    /// Day of the month, as reported
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Hour of the day (UTC)
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of the hour
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Tuple of (`day`, `hour`, `minute`)
    pub fn fields(&self) -> (u8, u8, u8) {
        (self.day, self.hour, self.minute)
    }

    /// Estimated calendar datetime (UTC)
    ///
    /// Reports do not include the month or year. The datetime is
    /// placed in the month before, the month of, or the month after
    /// the `reference` time, whichever lands closest to it. As
    /// long as `reference` is within about two weeks of the true
    /// time, the result is correct.
    ///
    /// An error is returned if the fields do not form a valid
    /// datetime in any of those months, such as day `00` or
    /// hour `25`.
    ///
    /// Requires `chrono`.
    #[cfg(feature = "chrono")]
    pub fn datetime(&self, reference: &DateTime<Utc>) -> Result<DateTime<Utc>, InvalidDateErr> {
        calculate_datetime(self.fields(), reference)
    }

    fn parse_fields(
        day: &str,
        hour: &str,
        minute: &str,
        group: &'static str,
        token: &str,
    ) -> Result<Self, GroupDecodeErr> {
        Ok(Self {
            day: digits(day, group, token)?,
            hour: digits(hour, group, token)?,
            minute: digits(minute, group, token)?,
        })
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "day {:02} at {:02}:{:02} UTC",
            self.day, self.hour, self.minute
        )
    }
}

/// A datetime which could not be placed on the calendar
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
#[error("day and time not valid near the reference time")]
pub struct InvalidDateErr {}

/// Observation time group, like `071450Z`
///
/// ```
/// use metartext::ObservationTime;
///
/// let tm = ObservationTime::parse("071450Z").unwrap();
/// assert_eq!((7, 14, 50), tm.daytime().fields());
/// assert_eq!("Observation on day 07 at 14:50 UTC.", tm.to_string());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObservationTime(DayTime);

impl ObservationTime {
    const NAME: &'static str = "observation time";

    /// Parse from token
    pub fn parse(token: &str) -> Result<Self, GroupDecodeErr> {
        let caps = RE_TIME
            .captures(token)
            .ok_or_else(|| GroupDecodeErr::new(Self::NAME, token))?;
        Ok(Self(DayTime::parse_fields(
            &caps[1], &caps[2], &caps[3], Self::NAME, token,
        )?))
    }

    /// True if `token` has the shape of this group
    pub fn is_match(token: &str) -> bool {
        RE_TIME.is_match(token)
    }

    /// Day and time of observation
    pub fn daytime(&self) -> DayTime {
        self.0
    }
}

impl fmt::Display for ObservationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Observation on {}.", self.0)
    }
}

/// Forecast validity period, like `0712/0818`
///
/// ```
/// use metartext::ValidityPeriod;
///
/// let valid = ValidityPeriod::parse("0712/0818").unwrap();
/// assert_eq!(
///     "Valid from day 07 12:00 UTC to day 08 18:00 UTC.",
///     valid.to_string()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValidityPeriod {
    start: DayTime,
    end: DayTime,
}

impl ValidityPeriod {
    const NAME: &'static str = "validity period";

    /// Parse from token
    pub fn parse(token: &str) -> Result<Self, GroupDecodeErr> {
        let caps = RE_VALIDITY
            .captures(token)
            .ok_or_else(|| GroupDecodeErr::new(Self::NAME, token))?;
        Ok(Self {
            start: DayTime::parse_fields(&caps[1], &caps[2], "00", Self::NAME, token)?,
            end: DayTime::parse_fields(&caps[3], &caps[4], "00", Self::NAME, token)?,
        })
    }

    /// True if `token` has the shape of this group
    pub fn is_match(token: &str) -> bool {
        RE_VALIDITY.is_match(token)
    }

    /// Start of the period, on the hour
    pub fn start(&self) -> DayTime {
        self.start
    }

    /// End of the period, on the hour
    pub fn end(&self) -> DayTime {
        self.end
    }
}

impl fmt::Display for ValidityPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Valid from day {:02} {:02}:00 UTC to day {:02} {:02}:00 UTC.",
            self.start.day, self.start.hour, self.end.day, self.end.hour
        )
    }
}

/// Kind of forecast change
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::EnumMessage, strum_macros::EnumString,
)]
pub enum ChangeKind {
    /// Conditions change rapidly, from the given time onward
    #[strum(serialize = "FM", detailed_message = "From")]
    From,

    /// Conditions change gradually, starting at the given time
    #[strum(serialize = "BECMG", detailed_message = "Becoming")]
    Becoming,
}

impl ChangeKind {
    /// Report prefix, like "`BECMG`"
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Human-readable name, like "`Becoming`"
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

/// TAF change group, like `FM071400` or `BECMG071400`
///
/// ```
/// use metartext::{ChangeKind, TafChange};
///
/// let change = TafChange::parse("BECMG071400").unwrap();
/// assert_eq!(ChangeKind::Becoming, change.kind());
/// assert_eq!("Becoming, day 07 at 14:00 UTC.", change.to_string());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TafChange {
    kind: ChangeKind,
    at: DayTime,
}

impl TafChange {
    const NAME: &'static str = "forecast change";

    /// Parse from token
    pub fn parse(token: &str) -> Result<Self, GroupDecodeErr> {
        let caps = RE_CHANGE
            .captures(token)
            .ok_or_else(|| GroupDecodeErr::new(Self::NAME, token))?;
        let kind =
            ChangeKind::from_str(&caps[1]).map_err(|_e| GroupDecodeErr::new(Self::NAME, token))?;
        Ok(Self {
            kind,
            at: DayTime::parse_fields(&caps[2], &caps[3], &caps[4], Self::NAME, token)?,
        })
    }

    /// True if `token` has the shape of this group
    pub fn is_match(token: &str) -> bool {
        RE_CHANGE.is_match(token)
    }

    /// Kind of change
    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    /// When the change takes effect
    pub fn daytime(&self) -> DayTime {
        self.at
    }
}

impl fmt::Display for TafChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ChangeKind::From => write!(f, "From {}.", self.at),
            ChangeKind::Becoming => write!(f, "Becoming, {}.", self.at),
        }
    }
}

// Place a (day, hour, minute) on the calendar
//
// Candidates are built in the months surrounding the
// `reference`, and the closest valid one wins.
#[cfg(feature = "chrono")]
fn calculate_datetime(
    fields: (u8, u8, u8),
    reference: &DateTime<Utc>,
) -> Result<DateTime<Utc>, InvalidDateErr> {
    let (day, hour, minute) = fields;
    let (year, month) = (reference.year(), reference.month());

    let previous = if month == 1 {
        (year.saturating_sub(1), 12)
    } else {
        (year, month - 1)
    };
    let next = if month == 12 {
        (year.saturating_add(1), 1)
    } else {
        (year, month + 1)
    };

    [previous, (year, month), next]
        .into_iter()
        .filter_map(|(y, m)| {
            Utc.with_ymd_and_hms(y, m, day as u32, hour as u32, minute as u32, 0)
                .single()
        })
        .min_by_key(|candidate| (*candidate - *reference).num_seconds().abs())
        .ok_or(InvalidDateErr {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_time() {
        let tm = ObservationTime::parse("071450Z").expect("bad time");
        assert_eq!(7, tm.daytime().day());
        assert_eq!(14, tm.daytime().hour());
        assert_eq!(50, tm.daytime().minute());
        assert_eq!("Observation on day 07 at 14:50 UTC.", &format!("{}", tm));

        assert!(ObservationTime::is_match("312359Z"));
        assert!(!ObservationTime::is_match("31235Z"));
        assert!(!ObservationTime::is_match("3123590Z"));
        ObservationTime::parse("0714Z").expect_err("should not parse");
    }

    #[test]
    fn test_validity_period() {
        let valid = ValidityPeriod::parse("3118/0124").expect("bad validity");
        assert_eq!((31, 18, 0), valid.start().fields());
        assert_eq!((1, 24, 0), valid.end().fields());
        assert_eq!(
            "Valid from day 31 18:00 UTC to day 01 24:00 UTC.",
            &format!("{}", valid)
        );

        assert!(!ValidityPeriod::is_match("12/34"));
        assert!(!ValidityPeriod::is_match("M05/M10"));
    }

    #[test]
    fn test_taf_change() {
        let fm = TafChange::parse("FM101530").expect("bad change");
        assert_eq!(ChangeKind::From, fm.kind());
        assert_eq!((10, 15, 30), fm.daytime().fields());
        assert_eq!("From day 10 at 15:30 UTC.", &format!("{}", fm));

        let becmg = TafChange::parse("BECMG102000").expect("bad change");
        assert_eq!(ChangeKind::Becoming, becmg.kind());
        assert_eq!("Becoming, day 10 at 20:00 UTC.", &format!("{}", becmg));
        assert_eq!("BECMG", becmg.kind().as_str());

        assert!(!TafChange::is_match("TEMPO1015"));
        assert!(!TafChange::is_match("FM1015"));
        let err = TafChange::parse("FM1015").expect_err("should not parse");
        assert_eq!("forecast change", err.group());
        assert_eq!("FM1015", err.token());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_calculate_datetime() {
        let reference = Utc.with_ymd_and_hms(2021, 6, 15, 12, 0, 0).unwrap();
        let d = calculate_datetime((15, 11, 0), &reference).unwrap();
        assert_eq!(d, Utc.with_ymd_and_hms(2021, 6, 15, 11, 0, 0).unwrap());

        // late in the previous month
        let reference = Utc.with_ymd_and_hms(2021, 3, 1, 10, 0, 0).unwrap();
        let d = calculate_datetime((28, 23, 0), &reference).unwrap();
        assert_eq!(d, Utc.with_ymd_and_hms(2021, 2, 28, 23, 0, 0).unwrap());

        // crosses into the previous year
        let reference = Utc.with_ymd_and_hms(2021, 1, 1, 0, 30, 0).unwrap();
        let d = calculate_datetime((31, 23, 50), &reference).unwrap();
        assert_eq!(d, Utc.with_ymd_and_hms(2020, 12, 31, 23, 50, 0).unwrap());

        // a forecast for early next month
        let reference = Utc.with_ymd_and_hms(2021, 12, 31, 20, 0, 0).unwrap();
        let d = calculate_datetime((1, 6, 0), &reference).unwrap();
        assert_eq!(d, Utc.with_ymd_and_hms(2022, 1, 1, 6, 0, 0).unwrap());

        // day zero and bad hours never work
        calculate_datetime((0, 10, 0), &reference).expect_err("should not succeed");
        calculate_datetime((10, 25, 0), &reference).expect_err("should not succeed");
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_observation_datetime() {
        let tm = ObservationTime::parse("141820Z").unwrap();
        let reference = Utc.with_ymd_and_hms(2024, 8, 14, 18, 25, 0).unwrap();
        assert_eq!(
            Utc.with_ymd_and_hms(2024, 8, 14, 18, 20, 0).unwrap(),
            tm.daytime().datetime(&reference).unwrap()
        );
    }
}
