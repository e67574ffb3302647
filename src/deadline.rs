/// Deadline parsing: compact `YYYYMMDDHHmmss` local times and ISO-8601 timestamps.
use chrono::{
    DateTime, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Utc,
};

/// Offset-less date-time layouts accepted besides chrono's own `FromStr`.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// The absolute point in time the countdown targets.
///
/// An unparseable configuration string is kept as `Invalid` instead of
/// failing start-up; consumers check `is_valid` and render placeholders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deadline {
    At(DateTime<Utc>),
    Invalid,
}

impl Deadline {
    pub fn is_valid(&self) -> bool {
        matches!(self, Deadline::At(_))
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Deadline::At(at) => Some(*at),
            Deadline::Invalid => None,
        }
    }

    /// Human readable form for the header, in local time.
    /// Falls back to the raw configuration string when invalid.
    pub fn describe(&self, raw: &str) -> String {
        match self {
            Deadline::At(at) => at
                .with_timezone(&Local)
                .format("%b %d, %Y, %H:%M")
                .to_string(),
            Deadline::Invalid => raw.to_string(),
        }
    }
}

/// Parse a deadline string.
///
/// 14 digits are read positionally as year, month (1-12), day, hour,
/// minute and second in the local timezone. Components past their range
/// carry into the next unit, so Feb 30 is Mar 1 and hour 24 is midnight
/// of the next day. Anything else is treated as a timestamp and keeps the
/// offset it carries. An ISO date-time without an offset is local time; a
/// bare ISO date is midnight UTC.
pub fn parse(raw: &str) -> Deadline {
    parse_in(&Local, raw)
}

/// Same as [`parse`], with offset-less forms read in `tz`.
fn parse_in<Tz: TimeZone>(tz: &Tz, raw: &str) -> Deadline {
    let raw = raw.trim();
    let parsed = if is_compact(raw) {
        parse_compact(tz, raw)
    } else {
        parse_timestamp(tz, raw)
    };
    match parsed {
        Some(at) => Deadline::At(at),
        None => {
            log::warn!("unparseable deadline '{raw}', showing placeholders");
            Deadline::Invalid
        }
    }
}

fn is_compact(raw: &str) -> bool {
    raw.len() == 14 && raw.bytes().all(|b| b.is_ascii_digit())
}

fn parse_compact<Tz: TimeZone>(tz: &Tz, raw: &str) -> Option<DateTime<Utc>> {
    let field = |range: std::ops::Range<usize>| raw[range].parse::<i64>().ok();
    let year = raw[0..4].parse::<i32>().ok()?;
    let month = u32::try_from(field(4..6)?).ok()?;

    // Month 00 is December of the year before.
    let new_year = NaiveDate::from_ymd_opt(year, 1, 1)?.and_time(NaiveTime::MIN);
    let month_start = match month {
        0 => new_year.checked_sub_months(Months::new(1))?,
        m => new_year.checked_add_months(Months::new(m - 1))?,
    };
    let offset = TimeDelta::days(field(6..8)? - 1)
        + TimeDelta::hours(field(8..10)?)
        + TimeDelta::minutes(field(10..12)?)
        + TimeDelta::seconds(field(12..14)?);
    resolve_local(tz, month_start.checked_add_signed(offset)?)
}

fn parse_timestamp<Tz: TimeZone>(tz: &Tz, raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(at) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%:z") {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(at) = DateTime::parse_from_rfc2822(raw) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return resolve_local(tz, naive);
    }
    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return resolve_local(tz, naive);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Resolve a wall-clock time in `tz`. Ambiguous times take the earlier
/// instant. A time inside a DST gap is read with the offset in force just
/// before the gap, which moves it forward by the length of the gap.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    if let Some(at) = tz.from_local_datetime(&naive).earliest() {
        return Some(at.with_timezone(&Utc));
    }
    let before = tz
        .offset_from_utc_datetime(&naive.checked_sub_signed(TimeDelta::days(1))?)
        .fix();
    naive.checked_sub_offset(before).map(|utc| utc.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, FixedOffset, MappedLocalTime, Timelike};

    fn local(deadline: Deadline) -> DateTime<Local> {
        deadline
            .instant()
            .expect("deadline should be valid")
            .with_timezone(&Local)
    }

    #[test]
    fn compact_form_is_local_time() {
        let at = local(parse("20241231235959"));
        assert_eq!(
            (at.year(), at.month(), at.day()),
            (2024, 12, 31)
        );
        assert_eq!((at.hour(), at.minute(), at.second()), (23, 59, 59));
    }

    #[test]
    fn compact_month_is_one_indexed() {
        let at = local(parse("20250115080000"));
        assert_eq!(at.month(), 1);
        assert_eq!(at.day(), 15);
        assert_eq!(at.hour(), 8);
    }

    #[test]
    fn compact_out_of_range_rolls_over() {
        let utc = |y, mo, d, h, mi, s| Deadline::At(Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap());
        assert_eq!(parse_in(&Utc, "20240230000000"), utc(2024, 3, 1, 0, 0, 0));
        assert_eq!(parse_in(&Utc, "20241301000000"), utc(2025, 1, 1, 0, 0, 0));
        assert_eq!(parse_in(&Utc, "20241231240000"), utc(2025, 1, 1, 0, 0, 0));
        assert_eq!(parse_in(&Utc, "20241331000000"), utc(2025, 1, 31, 0, 0, 0));
        assert_eq!(parse_in(&Utc, "20240100000000"), utc(2023, 12, 31, 0, 0, 0));
        assert_eq!(parse_in(&Utc, "20240015000000"), utc(2023, 12, 15, 0, 0, 0));
        assert_eq!(parse_in(&Utc, "20240101999999"), utc(2024, 1, 5, 4, 40, 39));
    }

    #[test]
    fn compact_rollover_is_local_time() {
        let at = local(parse("20240230120000"));
        assert_eq!((at.month(), at.day(), at.hour()), (3, 1, 12));
    }

    /// A zone with a single transition at `at` (UTC) from `before` to `after`.
    #[derive(Clone, Copy, Debug)]
    struct Shift {
        before: FixedOffset,
        after: FixedOffset,
        at: NaiveDateTime,
    }

    impl Shift {
        fn new(before_secs: i32, after_secs: i32, at: DateTime<Utc>) -> Self {
            Self {
                before: FixedOffset::east_opt(before_secs).unwrap(),
                after: FixedOffset::east_opt(after_secs).unwrap(),
                at: at.naive_utc(),
            }
        }

        fn fits(&self, local: &NaiveDateTime, offset: FixedOffset) -> bool {
            self.offset_from_utc_datetime(&(*local - offset)) == offset
        }
    }

    impl TimeZone for Shift {
        type Offset = FixedOffset;

        fn from_offset(offset: &FixedOffset) -> Self {
            Self {
                before: *offset,
                after: *offset,
                at: NaiveDateTime::MIN,
            }
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> MappedLocalTime<FixedOffset> {
            self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> MappedLocalTime<FixedOffset> {
            match (self.fits(local, self.before), self.fits(local, self.after)) {
                (true, true) if self.before != self.after => {
                    MappedLocalTime::Ambiguous(self.before, self.after)
                }
                (true, _) => MappedLocalTime::Single(self.before),
                (false, true) => MappedLocalTime::Single(self.after),
                (false, false) => MappedLocalTime::None,
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if *utc < self.at { self.before } else { self.after }
        }
    }

    #[test]
    fn half_hour_gap_moves_forward_by_the_gap() {
        // Lord Howe: 02:00 +10:30 jumps to 02:30 +11:00.
        let lord_howe = Shift::new(
            10 * 3600 + 1800,
            11 * 3600,
            Utc.with_ymd_and_hms(2024, 10, 5, 15, 30, 0).unwrap(),
        );
        let expected = Utc.with_ymd_and_hms(2024, 10, 5, 15, 45, 0).unwrap();
        assert_eq!(parse_in(&lord_howe, "20241006021500"), Deadline::At(expected));
        let wall = expected.with_timezone(&FixedOffset::east_opt(11 * 3600).unwrap());
        assert_eq!((wall.hour(), wall.minute()), (2, 45));
    }

    #[test]
    fn hour_gap_moves_forward_an_hour() {
        // New York spring: 02:00 -05:00 jumps to 03:00 -04:00.
        let new_york = Shift::new(
            -5 * 3600,
            -4 * 3600,
            Utc.with_ymd_and_hms(2024, 3, 10, 7, 0, 0).unwrap(),
        );
        let expected = Utc.with_ymd_and_hms(2024, 3, 10, 7, 30, 0).unwrap();
        assert_eq!(parse_in(&new_york, "20240310023000"), Deadline::At(expected));
        assert_eq!(parse_in(&new_york, "2024-03-10T02:30:00"), Deadline::At(expected));
    }

    #[test]
    fn ambiguous_time_takes_the_earlier_instant() {
        // New York autumn: 01:00-02:00 happens twice.
        let new_york = Shift::new(
            -4 * 3600,
            -5 * 3600,
            Utc.with_ymd_and_hms(2024, 11, 3, 6, 0, 0).unwrap(),
        );
        let expected = Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).unwrap();
        assert_eq!(parse_in(&new_york, "20241103013000"), Deadline::At(expected));
    }

    #[test]
    fn zone_does_not_affect_explicit_offsets() {
        let shifted = Shift::new(3600, 7200, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        let expected = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(parse_in(&shifted, "2024-12-31T23:59:59Z"), Deadline::At(expected));
        assert_eq!(
            parse_in(&shifted, "2024-12-31"),
            Deadline::At(Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(parse("  20241231235959\n").is_valid());
        assert!(parse(" 2024-12-31T23:59:59Z ").is_valid());
    }

    #[test]
    fn iso_with_zulu_is_utc_instant() {
        let expected = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(parse("2024-12-31T23:59:59Z"), Deadline::At(expected));
    }

    #[test]
    fn iso_offset_is_preserved() {
        let expected = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse("2025-01-01T02:00:00+02:00"), Deadline::At(expected));
        assert_eq!(parse("2025-01-01T02:00+02:00"), Deadline::At(expected));
        assert_eq!(
            parse("2024-12-31T23:59:59.500Z").instant().map(|at| at.timestamp_millis()),
            Some(expected.timestamp_millis() - 500)
        );
    }

    #[test]
    fn rfc2822_is_accepted() {
        let expected = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(
            parse("Tue, 31 Dec 2024 23:59:59 +0000"),
            Deadline::At(expected)
        );
    }

    #[test]
    fn iso_without_offset_is_local() {
        let at = local(parse("2024-06-15T12:30:00"));
        assert_eq!((at.hour(), at.minute(), at.second()), (12, 30, 0));
        let at = local(parse("2024-06-15T12:30"));
        assert_eq!((at.hour(), at.minute()), (12, 30));
    }

    #[test]
    fn bare_date_is_utc_midnight() {
        let expected = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(parse("2024-12-31"), Deadline::At(expected));
    }

    #[test]
    fn garbage_is_invalid() {
        assert_eq!(parse("not-a-date"), Deadline::Invalid);
        assert_eq!(parse(""), Deadline::Invalid);
        assert_eq!(parse("2024123123595"), Deadline::Invalid);
        assert!(!parse("not-a-date").is_valid());
    }

    #[test]
    fn describe_falls_back_to_raw_text() {
        assert_eq!(Deadline::Invalid.describe("soon-ish"), "soon-ish");
        let text = parse("20241231235959").describe("20241231235959");
        assert_eq!(text, "Dec 31, 2024, 23:59");
    }
}
