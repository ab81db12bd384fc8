//! Date and date-time predicates
//!
//! Values are parsed with chrono from the formats an HTML form typically
//! produces (`date`, `datetime-local`) plus the common day-first variants.
//! Comparisons are made on naive local date-times.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%d/%m/%Y"];

/// Parses a form value into a date-time; bare dates are taken at midnight
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(value, f).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(value, f).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Value is a parseable date or date-time
pub fn is_valid_date(value: &str) -> bool {
    parse_datetime(value).is_some()
}

/// Value is on or after `min`; false when either side does not parse
pub fn date_min(value: &str, min: &str) -> bool {
    match (parse_datetime(value), parse_datetime(min)) {
        (Some(v), Some(m)) => v >= m,
        _ => false,
    }
}

/// Value is on or before `max`; false when either side does not parse
pub fn date_max(value: &str, max: &str) -> bool {
    match (parse_datetime(value), parse_datetime(max)) {
        (Some(v), Some(m)) => v <= m,
        _ => false,
    }
}

/// Inclusive range check on dates
pub fn date_between(value: &str, min: &str, max: &str) -> bool {
    date_min(value, min) && date_max(value, max)
}

/// Inclusive range check on date-times
pub fn datetime_between(value: &str, min: &str, max: &str) -> bool {
    date_between(value, min, max)
}

/// Textual date layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    #[default]
    YearMonthDayDash,
    YearMonthDaySlash,
    DayMonthYearDash,
    DayMonthYearSlash,
}

impl DateFormat {
    fn regex(&self) -> &'static Regex {
        static YMD_DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("regex is valid"));
        static YMD_SLASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}/\d{2}/\d{2}$").expect("regex is valid"));
        static DMY_DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("regex is valid"));
        static DMY_SLASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("regex is valid"));

        match self {
            DateFormat::YearMonthDayDash => &YMD_DASH,
            DateFormat::YearMonthDaySlash => &YMD_SLASH,
            DateFormat::DayMonthYearDash => &DMY_DASH,
            DateFormat::DayMonthYearSlash => &DMY_SLASH,
        }
    }
}

impl FromStr for DateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "YYYY-MM-DD" => Ok(DateFormat::YearMonthDayDash),
            "YYYY/MM/DD" => Ok(DateFormat::YearMonthDaySlash),
            "DD-MM-YYYY" => Ok(DateFormat::DayMonthYearDash),
            "DD/MM/YYYY" => Ok(DateFormat::DayMonthYearSlash),
            other => Err(format!("unsupported date format '{}'", other)),
        }
    }
}

/// Shape-only check of a date layout (does not check the calendar)
pub fn matches_date_format(value: &str, format: DateFormat) -> bool {
    format.regex().is_match(value)
}

/// Precision of a `YYYY-MM-DD HH:MM:SS` style value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    Day,
    Hour,
    #[default]
    Minute,
    Second,
}

static DT_DAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("regex is valid"));
static DT_HOUR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}$").expect("regex is valid"));
static DT_MINUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$").expect("regex is valid"));
static DT_SECOND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").expect("regex is valid"));
static DT_SLASH_MINUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}$").expect("regex is valid"));
static DT_SLASH_SECOND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}$").expect("regex is valid"));

/// Shape check of a date-time value at the given precision
pub fn matches_datetime_precision(value: &str, precision: Precision) -> bool {
    let re: &Regex = match precision {
        Precision::Day => &DT_DAY,
        Precision::Hour => &DT_HOUR,
        Precision::Minute => &DT_MINUTE,
        Precision::Second => &DT_SECOND,
    };
    re.is_match(value)
}

/// Shape check of a date-time layout such as `"YYYY/MM/DD HH:MM"`
///
/// Unknown layouts fall back to `YYYY-MM-DD HH:MM:SS`.
pub fn matches_datetime_format(value: &str, layout: &str) -> bool {
    let re: &Regex = match layout {
        "YYYY-MM-DD HH:MM" => &DT_MINUTE,
        "YYYY/MM/DD HH:MM:SS" => &DT_SLASH_SECOND,
        "YYYY/MM/DD HH:MM" => &DT_SLASH_MINUTE,
        _ => &DT_SECOND,
    };
    re.is_match(value)
}
