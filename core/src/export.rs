//! Calendar export for schedule events: an iCalendar VEVENT block and a
//! Google Calendar "add event" link.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use url::Url;

use crate::error::{EngineError, EngineResult};
use crate::model::schedule::ScheduleEvent;

const GOOGLE_CALENDAR_RENDER: &str = "https://calendar.google.com/calendar/render";
const PRODID: &str = "-//diamondlog//activity calendar//EN";
const UID_DOMAIN: &str = "diamondlog";

#[derive(Debug, Clone, Copy, PartialEq)]
enum ExportWindow {
    /// `last` is inclusive.
    AllDay { first: NaiveDate, last: NaiveDate },
    Timed { start: NaiveDateTime, end: NaiveDateTime },
}

fn parse_clock(value: Option<&str>) -> Option<NaiveTime> {
    let value = value?.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

fn export_window(event: &ScheduleEvent) -> EngineResult<ExportWindow> {
    let span = event
        .span()
        .ok_or_else(|| EngineError::InvalidSchedule(format!("'{}' has no date", event.title)))?;
    let first = span.first_day();
    let last = span.last_day();

    let start_time = parse_clock(event.start_time.as_deref());
    match start_time {
        Some(start_time) if !event.is_all_day => {
            let start = first.and_time(start_time);
            let end = match parse_clock(event.end_time.as_deref()) {
                Some(end_time) if last.and_time(end_time) > start => last.and_time(end_time),
                _ => start
                    .checked_add_signed(Duration::hours(1))
                    .ok_or_else(|| out_of_range(event))?,
            };
            Ok(ExportWindow::Timed { start, end })
        }
        _ => Ok(ExportWindow::AllDay { first, last }),
    }
}

fn out_of_range(event: &ScheduleEvent) -> EngineError {
    EngineError::InvalidSchedule(format!("'{}' is dated outside the exportable range", event.title))
}

// All-day DTEND is the day after the last day.
fn exclusive_end(event: &ScheduleEvent, last: NaiveDate) -> EngineResult<NaiveDate> {
    last.succ_opt().ok_or_else(|| out_of_range(event))
}

fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

fn ics_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn ics_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// One VEVENT block, CRLF line endings. `stamp` becomes DTSTAMP.
pub fn to_ics_event(event: &ScheduleEvent, stamp: DateTime<Utc>) -> EngineResult<String> {
    let window = export_window(event)?;
    let mut lines = vec![
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}@{}", event.id, UID_DOMAIN),
        format!("DTSTAMP:{}", stamp.format("%Y%m%dT%H%M%SZ")),
        format!("SUMMARY:{}", escape_text(&event.title)),
    ];
    match window {
        ExportWindow::AllDay { first, last } => {
            lines.push(format!("DTSTART;VALUE=DATE:{}", ics_date(first)));
            // DTEND is exclusive for all-day events.
            lines.push(format!("DTEND;VALUE=DATE:{}", ics_date(exclusive_end(event, last)?)));
        }
        ExportWindow::Timed { start, end } => {
            lines.push(format!("DTSTART:{}", ics_datetime(start)));
            lines.push(format!("DTEND:{}", ics_datetime(end)));
        }
    }
    if let Some(location) = event.location.as_deref().filter(|l| !l.is_empty()) {
        lines.push(format!("LOCATION:{}", escape_text(location)));
    }
    if let Some(description) = event.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("DESCRIPTION:{}", escape_text(description)));
    }
    lines.push("END:VEVENT".to_string());
    Ok(lines.join("\r\n"))
}

/// Wraps events in a VCALENDAR. Events without a date are left out.
pub fn to_ics_calendar(events: &[ScheduleEvent], stamp: DateTime<Utc>) -> String {
    let mut blocks = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
    ];
    blocks.extend(events.iter().filter_map(|e| to_ics_event(e, stamp).ok()));
    blocks.push("END:VCALENDAR".to_string());
    let mut out = blocks.join("\r\n");
    out.push_str("\r\n");
    out
}

pub fn google_calendar_url(event: &ScheduleEvent) -> EngineResult<Url> {
    let dates = match export_window(event)? {
        ExportWindow::AllDay { first, last } => {
            format!("{}/{}", ics_date(first), ics_date(exclusive_end(event, last)?))
        }
        ExportWindow::Timed { start, end } => {
            format!("{}/{}", ics_datetime(start), ics_datetime(end))
        }
    };

    let mut params = vec![
        ("action", "TEMPLATE".to_string()),
        ("text", event.title.clone()),
        ("dates", dates),
    ];
    if let Some(location) = event.location.as_ref().filter(|l| !l.is_empty()) {
        params.push(("location", location.clone()));
    }
    if let Some(description) = event.description.as_ref().filter(|d| !d.is_empty()) {
        params.push(("details", description.clone()));
    }

    Url::parse_with_params(GOOGLE_CALENDAR_RENDER, &params)
        .map_err(|e| EngineError::InvalidSchedule(format!("could not build calendar link: {}", e)))
}
