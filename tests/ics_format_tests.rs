// File: tests/ics_format_tests.rs
//! The serialized document is a strict external contract: fixed envelope,
//! fixed field order, CRLF separators. These tests pin the byte-level shape
//! and check the result still parses with an independent ICS implementation.

use chrono::NaiveDate;
use icalendar::{Calendar, CalendarComponent, Component};
use stride::model::compiler;
use stride::model::{Category, RoadmapItem};

fn compile_sample() -> String {
    let item = RoadmapItem::new(
        "Learn piano".to_string(),
        Category::Hobby,
        Some("2026-01-03".to_string()),
        "## Day 1\n- Practice scales\n- Review notes\n## Day 2\n- Practice chords".to_string(),
        1_767_225_600_000,
    );
    let now = NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(8, 15, 30)
        .unwrap();
    compiler::compile_roadmap(&item, now).unwrap().to_ics()
}

#[test]
fn test_envelope_and_field_order() {
    let ics = compile_sample();
    assert!(ics.starts_with(
        "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//strideAI//strideAI//EN\r\nBEGIN:VEVENT\r\n"
    ));
    assert!(ics.ends_with("END:VEVENT\r\nEND:VCALENDAR"));

    // Within a block the field order is fixed
    let block: Vec<&str> = ics
        .split("BEGIN:VEVENT\r\n")
        .nth(1)
        .unwrap()
        .split("\r\n")
        .collect();
    assert!(block[0].starts_with("UID:"));
    assert!(block[1].starts_with("DTSTAMP:"));
    assert!(block[2].starts_with("DTSTART:"));
    assert!(block[3].starts_with("DTEND:"));
    assert!(block[4].starts_with("SUMMARY:"));
    assert!(block[5].starts_with("DESCRIPTION:"));
    assert_eq!(block[6], "END:VEVENT");
}

#[test]
fn test_all_line_breaks_are_crlf() {
    let ics = compile_sample();
    assert!(!ics.replace("\r\n", "").contains('\n'));
    assert!(!ics.replace("\r\n", "").contains('\r'));
}

#[test]
fn test_datetime_values_are_second_precision_local() {
    let ics = compile_sample();
    assert!(ics.contains("DTSTAMP:20260101T081530\r\n"));
    assert!(ics.contains("DTSTART:20260101T090000\r\n"));
    assert!(ics.contains("DTEND:20260101T100000\r\n"));
    assert!(ics.contains("DTSTART:20260103T090000\r\n"));
}

#[test]
fn test_description_separator_survives_serialization() {
    let ics = compile_sample();
    assert!(ics.contains("DESCRIPTION:Practice scales\\nReview notes\r\n"));
}

#[test]
fn test_uid_lines() {
    let ics = compile_sample();
    assert!(ics.contains("UID:strideai-1767225600000-day1@strideai.app\r\n"));
    assert!(ics.contains("UID:strideai-1767225600000-day3@strideai.app\r\n"));
}

#[test]
fn test_document_parses_as_a_real_calendar() {
    let ics = compile_sample();
    let calendar: Calendar = ics.parse().expect("generated ICS must parse");

    let events: Vec<_> = calendar
        .components
        .iter()
        .filter_map(|c| match c {
            CalendarComponent::Event(e) => Some(e),
            _ => None,
        })
        .collect();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].get_summary(), Some("Day 1: Learn piano"));
    assert_eq!(
        events[0].get_uid(),
        Some("strideai-1767225600000-day1@strideai.app")
    );
}
