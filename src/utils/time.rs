use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::vacancy::{DateRange, Schedule};

/// Display value for a missing or unparsable date.
pub const NO_DATE: &str = "-";

/// Upstream schedules are expressed in Western Indonesia Time.
const WIB_OFFSET_SECS: i32 = 7 * 3600;

const ID_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

fn wib() -> FixedOffset {
    FixedOffset::east_opt(WIB_OFFSET_SECS).expect("WIB offset is within one day")
}

/// Current wall-clock time in WIB, comparable with upstream dates.
pub fn now() -> NaiveDateTime {
    Utc::now().with_timezone(&wib()).naive_local()
}

/// Parses the date formats seen in upstream payloads. Offsets are converted to WIB.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&wib()).naive_local());
    }

    for format in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `1 Okt 2025` style (id-ID, short month), or [`NO_DATE`].
pub fn format_date(value: Option<NaiveDateTime>) -> String {
    match value {
        Some(dt) => format!(
            "{} {} {}",
            dt.day(),
            ID_MONTHS[dt.month0() as usize],
            dt.year()
        ),
        None => NO_DATE.to_string(),
    }
}

pub fn format_period(range: &DateRange) -> String {
    format!("{} - {}", format_date(range.start), format_date(range.end))
}

/// Groups thousands with `.` the way id-ID does.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRangeState {
    Upcoming,
    Active,
    Past,
    Unknown,
}

/// Both bounds are inclusive.
pub fn classify(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> DateRangeState {
    let (Some(start), Some(end)) = (start, end) else {
        return DateRangeState::Unknown;
    };

    if now < start {
        DateRangeState::Upcoming
    } else if now > end {
        DateRangeState::Past
    } else {
        DateRangeState::Active
    }
}

pub fn classify_range(range: &DateRange, now: NaiveDateTime) -> DateRangeState {
    classify(range.start, range.end, now)
}

pub fn is_open_for_registration(schedule: &Schedule, now: NaiveDateTime) -> bool {
    classify_range(&schedule.registration, now) == DateRangeState::Active
}
