use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{ClientError, ClientResult};

const CALENDAR_DAY_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_calendar_day(date: &NaiveDate) -> String {
    date.format(CALENDAR_DAY_FORMAT).to_string()
}

pub fn parse_calendar_day(value: &str) -> Option<NaiveDate> {
    if !looks_like_calendar_day(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, CALENDAR_DAY_FORMAT).ok()
}

pub fn parse_calendar_day_strict(
    value: &str,
    field_name: &str,
    command: &str,
) -> ClientResult<NaiveDate> {
    parse_calendar_day(value)
        .ok_or_else(|| ClientError::invalid_calendar_day(field_name, value, command))
}

/// Parses a record timestamp. Only the exact `YYYY-MM-DD HH:mm:ss` shape is
/// accepted; anything else is treated as unparseable.
pub fn parse_record_timestamp(value: &str) -> Option<NaiveDateTime> {
    let (day, time) = value.split_once(' ')?;
    if !looks_like_calendar_day(day) || !looks_like_time_of_day(time) {
        return None;
    }
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Inclusive end of a calendar day at whole-second resolution.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    match NaiveTime::from_hms_opt(23, 59, 59) {
        Some(time) => date.and_time(time),
        None => date.and_time(NaiveTime::MIN),
    }
}

fn looks_like_calendar_day(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}

fn looks_like_time_of_day(value: &str) -> bool {
    if value.len() != 8 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[2] != b':' || bytes[5] != b':' {
        return false;
    }

    for index in [0usize, 1, 3, 4, 6, 7] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}
