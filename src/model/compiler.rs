// File: ./src/model/compiler.rs
//! Turns a roadmap item plus its parsed day/task mapping into a calendar
//! document, and serializes that document to ICS text.
//!
//! The compiler is a pure function of its explicit inputs: the current
//! instant is injected by the caller, never read from the ambient clock, so
//! compiling the same `(item, day_tasks, now)` triple twice yields
//! byte-identical output.

use crate::model::parser;
use crate::model::{CalendarDocument, CalendarEvent, DayTaskMap, RoadmapItem};
use anyhow::{Result, bail};
use chrono::{Duration, NaiveDate, NaiveDateTime};

pub const SUMMARY_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 900;
/// Window applied when no (valid) deadline is given, inclusive of today.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

const UID_NAMESPACE: &str = "strideai";
const UID_DOMAIN: &str = "strideai.app";
const PRODID: &str = "-//strideAI//strideAI//EN";
const EVENT_START_HOUR: u32 = 9;

/// ICS TEXT escaping (RFC 5545 3.3.11). Backslash, comma, semicolon and
/// embedded line breaks must not reach the output raw; CR is dropped so a
/// CRLF pair collapses to one escaped `\n`.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Hard cap on field length, counted in characters so a code point is never
/// split. Applied after composing the full field value.
fn truncate_chars(text: String, max: usize) -> String {
    if text.chars().count() <= max {
        text
    } else {
        text.chars().take(max).collect()
    }
}

fn format_ics_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// Parses an ISO deadline. An unparsable value is recovered silently to the
/// default window (logged, since the user probably expected it to count).
fn parse_deadline(deadline: Option<&str>) -> Option<NaiveDate> {
    let raw = deadline?.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            log::warn!(
                "Ignoring unparsable deadline '{}': using the {}-day default window",
                raw,
                DEFAULT_WINDOW_DAYS
            );
            None
        }
    }
}

/// Compiles one roadmap into a calendar document: one event per day from
/// today through the deadline (or the default window), 09:00-10:00 local.
///
/// Only programmer-error-class input fails: an empty goal. Everything else
/// (missing structure, bad deadline, empty plan) degrades to a usable
/// document, never to zero events.
pub fn compile(
    item: &RoadmapItem,
    day_tasks: &DayTaskMap,
    now: NaiveDateTime,
) -> Result<CalendarDocument> {
    if item.goal.trim().is_empty() {
        bail!("Roadmap goal must not be empty");
    }

    let start_date = now.date();
    let end_date = parse_deadline(item.deadline.as_deref())
        .unwrap_or(start_date + Duration::days(DEFAULT_WINDOW_DAYS));
    // Inclusive of both boundary days; at least one event even when the
    // deadline lies in the past.
    let total_days = ((end_date - start_date).num_days() + 1).max(1);

    log::info!(
        "Creating calendar for {} days from {} to {}",
        total_days,
        start_date,
        end_date
    );

    let mut events = Vec::with_capacity(total_days as usize);
    for day in 0..total_days {
        let date = start_date + Duration::days(day);
        let dt_start = date.and_hms_opt(EVENT_START_HOUR, 0, 0).unwrap();
        let dt_end = date.and_hms_opt(EVENT_START_HOUR + 1, 0, 0).unwrap();

        let day_no = day + 1;
        let summary = format!("Day {}: {}", day_no, escape_text(&item.goal));
        let description = match day_tasks.get(&(day as u32)) {
            Some(tasks) if !tasks.is_empty() => tasks
                .iter()
                .map(|t| escape_text(t))
                .collect::<Vec<_>>()
                .join("\\n"),
            _ => format!("Continue working on: {}", escape_text(&item.goal)),
        };

        events.push(CalendarEvent {
            uid: format!(
                "{}-{}-day{}@{}",
                UID_NAMESPACE, item.timestamp, day_no, UID_DOMAIN
            ),
            dt_stamp: now,
            dt_start,
            dt_end,
            summary: truncate_chars(summary, SUMMARY_MAX_CHARS),
            description: truncate_chars(description, DESCRIPTION_MAX_CHARS),
        });
    }

    log::info!("Created {} calendar events", events.len());
    Ok(CalendarDocument { events })
}

/// Convenience entry point: parse the item's plan text, then compile.
pub fn compile_roadmap(item: &RoadmapItem, now: NaiveDateTime) -> Result<CalendarDocument> {
    let day_tasks = parser::parse_plan(item.plan_text());
    compile(item, &day_tasks, now)
}

impl CalendarEvent {
    /// Renders one VEVENT block. Field order is fixed; lines are CRLF
    /// separated, with no trailing separator.
    pub fn to_ics_block(&self) -> String {
        [
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}", self.uid),
            format!("DTSTAMP:{}", format_ics_datetime(self.dt_stamp)),
            format!("DTSTART:{}", format_ics_datetime(self.dt_start)),
            format!("DTEND:{}", format_ics_datetime(self.dt_end)),
            format!("SUMMARY:{}", self.summary),
            format!("DESCRIPTION:{}", self.description),
            "END:VEVENT".to_string(),
        ]
        .join("\r\n")
    }
}

impl CalendarDocument {
    /// Serializes the document: VCALENDAR envelope, version, product id,
    /// then every event block, all joined by CRLF.
    pub fn to_ics(&self) -> String {
        let mut lines = vec![
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            format!("PRODID:{}", PRODID),
        ];
        for event in &self.events {
            lines.push(event.to_ics_block());
        }
        lines.push("END:VCALENDAR".to_string());
        lines.join("\r\n")
    }
}
