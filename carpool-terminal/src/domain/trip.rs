//! Trip day and trip time handling.
//!
//! A carpool trip happens on a weekday at a time of day. Times are entered
//! as four-digit 24-hour strings ("1930") and compared in whole minutes.

use chrono::{NaiveTime, Timelike, Weekday};
use std::fmt;

use super::ValidationError;

/// The weekday a trip takes place on.
///
/// # Examples
///
/// ```
/// use carpool_terminal::domain::TripDay;
///
/// let day = TripDay::parse("monday").unwrap();
/// assert_eq!(day.to_string(), "MONDAY");
/// assert_eq!(TripDay::parse("Monday").unwrap(), day);
///
/// // Abbreviations are rejected
/// assert!(TripDay::parse("mon").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TripDay(Weekday);

impl TripDay {
    /// Parse a trip day from a full English weekday name, ignoring case.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let weekday = match s.to_ascii_lowercase().as_str() {
            "monday" => Weekday::Mon,
            "tuesday" => Weekday::Tue,
            "wednesday" => Weekday::Wed,
            "thursday" => Weekday::Thu,
            "friday" => Weekday::Fri,
            "saturday" => Weekday::Sat,
            "sunday" => Weekday::Sun,
            _ => {
                return Err(ValidationError::invalid_format(
                    "trip day",
                    "must be a full weekday name such as MONDAY",
                ));
            }
        };
        Ok(TripDay(weekday))
    }

    /// Returns the underlying weekday.
    pub fn weekday(&self) -> Weekday {
        self.0
    }

    /// Returns the upper-case weekday name.
    pub fn as_str(&self) -> &'static str {
        match self.0 {
            Weekday::Mon => "MONDAY",
            Weekday::Tue => "TUESDAY",
            Weekday::Wed => "WEDNESDAY",
            Weekday::Thu => "THURSDAY",
            Weekday::Fri => "FRIDAY",
            Weekday::Sat => "SATURDAY",
            Weekday::Sun => "SUNDAY",
        }
    }
}

impl From<Weekday> for TripDay {
    fn from(weekday: Weekday) -> Self {
        TripDay(weekday)
    }
}

impl fmt::Debug for TripDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripDay({})", self.as_str())
    }
}

impl fmt::Display for TripDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The time of day a trip departs, with minute precision.
///
/// # Examples
///
/// ```
/// use carpool_terminal::domain::TripTime;
///
/// let time = TripTime::parse_hhmm("1930").unwrap();
/// assert_eq!(time.to_string(), "19:30");
/// assert_eq!(time.to_hhmm(), "1930");
///
/// let later = TripTime::parse_hhmm("2000").unwrap();
/// assert_eq!(time.minutes_between(&later), 30);
/// assert_eq!(later.minutes_between(&time), 30);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TripTime(NaiveTime);

impl TripTime {
    /// Create a trip time from hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::invalid_format(
                "trip time",
                "hour must be 0-23",
            ));
        }
        if minute > 59 {
            return Err(ValidationError::invalid_format(
                "trip time",
                "minute must be 0-59",
            ));
        }
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(TripTime)
            .ok_or_else(|| ValidationError::invalid_format("trip time", "invalid time"))
    }

    /// Parse a trip time from "HHMM" (24-hour) format.
    ///
    /// # Examples
    ///
    /// ```
    /// use carpool_terminal::domain::TripTime;
    ///
    /// assert!(TripTime::parse_hhmm("0000").is_ok());
    /// assert!(TripTime::parse_hhmm("2359").is_ok());
    ///
    /// assert!(TripTime::parse_hhmm("19:30").is_err());
    /// assert!(TripTime::parse_hhmm("930").is_err());
    /// assert!(TripTime::parse_hhmm("2400").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, ValidationError> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 {
            return Err(ValidationError::invalid_format(
                "trip time",
                "expected HHMM format",
            ));
        }

        let hour = parse_two_digits(&bytes[0..2])
            .ok_or_else(|| ValidationError::invalid_format("trip time", "invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[2..4]).ok_or_else(|| {
            ValidationError::invalid_format("trip time", "invalid minute digits")
        })?;

        Self::from_hm(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Absolute difference in minutes between two trip times.
    ///
    /// The difference is linear within a single day: 23:50 and 00:10 are
    /// 1420 minutes apart, not 20.
    pub fn minutes_between(&self, other: &TripTime) -> u32 {
        self.minutes_since_midnight()
            .abs_diff(other.minutes_since_midnight())
    }

    /// Formats the time as "HHMM", the form accepted by [`TripTime::parse_hhmm`].
    pub fn to_hhmm(&self) -> String {
        format!("{:02}{:02}", self.hour(), self.minute())
    }
}

impl fmt::Debug for TripTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TripTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> TripTime {
        TripTime::parse_hhmm(s).unwrap()
    }

    #[test]
    fn parse_all_weekdays() {
        for name in [
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
            "sunday",
        ] {
            let day = TripDay::parse(name).unwrap();
            assert_eq!(day.as_str(), name.to_ascii_uppercase());
        }
    }

    #[test]
    fn trip_day_ignores_case() {
        assert_eq!(
            TripDay::parse("FRIDAY").unwrap(),
            TripDay::parse("fRiDaY").unwrap()
        );
        assert_eq!(TripDay::parse("friday").unwrap().weekday(), Weekday::Fri);
    }

    #[test]
    fn trip_day_rejects_unknown() {
        assert!(TripDay::parse("").is_err());
        assert!(TripDay::parse("mon").is_err());
        assert!(TripDay::parse("someday").is_err());
        assert!(TripDay::parse(" monday").is_err());
    }

    #[test]
    fn trip_day_from_weekday() {
        assert_eq!(TripDay::from(Weekday::Wed).to_string(), "WEDNESDAY");
        assert_eq!(format!("{:?}", TripDay::from(Weekday::Sun)), "TripDay(SUNDAY)");
    }

    #[test]
    fn parse_valid_times() {
        let t = time("0000");
        assert_eq!(t.hour(), 0);
        assert_eq!(t.minute(), 0);

        let t = time("2359");
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);

        let t = time("0905");
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 5);
    }

    #[test]
    fn parse_invalid_format() {
        assert!(TripTime::parse_hhmm("930").is_err());
        assert!(TripTime::parse_hhmm("09300").is_err());
        assert!(TripTime::parse_hhmm("09:30").is_err());
        assert!(TripTime::parse_hhmm("ab30").is_err());
        assert!(TripTime::parse_hhmm("1a30").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(TripTime::parse_hhmm("2400").is_err());
        assert!(TripTime::parse_hhmm("2500").is_err());
        assert!(TripTime::parse_hhmm("1260").is_err());
        assert!(TripTime::from_hm(24, 0).is_err());
        assert!(TripTime::from_hm(0, 60).is_err());
    }

    #[test]
    fn display_format() {
        assert_eq!(time("0000").to_string(), "00:00");
        assert_eq!(time("0905").to_string(), "09:05");
        assert_eq!(time("2359").to_string(), "23:59");
        assert_eq!(format!("{:?}", time("1930")), "TripTime(19:30)");
    }

    #[test]
    fn hhmm_roundtrip() {
        assert_eq!(time("0905").to_hhmm(), "0905");
        assert_eq!(time("1930").to_hhmm(), "1930");
    }

    #[test]
    fn minutes_between_is_symmetric() {
        let a = time("1930");
        let b = time("1945");
        assert_eq!(a.minutes_between(&b), 15);
        assert_eq!(b.minutes_between(&a), 15);
        assert_eq!(a.minutes_between(&a), 0);
    }

    #[test]
    fn minutes_between_does_not_wrap_midnight() {
        // Assumed linear within a day: late-night and early-morning trips
        // are far apart rather than 20 minutes apart.
        let late = time("2350");
        let early = time("0010");
        assert_eq!(late.minutes_between(&early), 1420);
    }

    #[test]
    fn ordering() {
        assert!(time("0800") < time("0801"));
        assert!(time("2359") > time("0000"));
    }
}
