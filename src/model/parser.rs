// File: ./src/model/parser.rs
//! Lenient extraction of day-by-day structure from AI-generated plan text.
//!
//! Plans arrive as loosely structured Markdown. A two-state line scanner
//! (outside a day section / inside one) recognizes exactly two line classes:
//! day headers (`## Day 3`) and bullets (`- task` / `* task`). Everything
//! else is ignored, so unstructured text yields an empty or partial map
//! rather than an error.

use crate::model::DayTaskMap;

/// Case-insensitive keyword strip; returns the remainder after `kw`.
fn strip_keyword<'a>(s: &'a str, kw: &str) -> Option<&'a str> {
    let head = s.get(..kw.len())?;
    if head.eq_ignore_ascii_case(kw) {
        Some(&s[kw.len()..])
    } else {
        None
    }
}

/// Matches "one or more heading markers, optional whitespace, 'Day',
/// whitespace, integer" and returns the day number as written (1-based).
/// Trailing text after the number ("## Day 3: Foundations") is allowed.
fn match_day_header(line: &str) -> Option<u32> {
    let rest = line.strip_prefix('#')?;
    let rest = rest.trim_start_matches('#').trim_start();
    let rest = strip_keyword(rest, "day")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start();
    let digits_len = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }
    rest[..digits_len].parse().ok()
}

/// Matches "`-` or `*`, whitespace, text" and returns the trimmed task text.
fn match_bullet(line: &str) -> Option<&str> {
    let rest = line
        .strip_prefix('-')
        .or_else(|| line.strip_prefix('*'))?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim_start();
    if text.is_empty() { None } else { Some(text) }
}

/// Scans the plan text and maps each zero-based day index to the bullet
/// texts under its header.
///
/// Policy: bullets before any header are dropped; a header with no bullets
/// produces no entry; day numbers need not be contiguous or sorted; when a
/// day number repeats, the later section wins. Never fails.
pub fn parse_plan(plan_text: &str) -> DayTaskMap {
    let mut day_tasks = DayTaskMap::new();
    let mut current_day: Option<u32> = None;
    let mut current_tasks: Vec<String> = Vec::new();

    for raw_line in plan_text.lines() {
        let line = raw_line.trim();

        if let Some(day) = match_day_header(line) {
            // Commit the previous section before opening the new one.
            if let Some(open) = current_day
                && !current_tasks.is_empty()
            {
                day_tasks.insert(open - 1, std::mem::take(&mut current_tasks));
            }
            // "Day 0" closes the previous section but opens nothing.
            current_day = (day > 0).then_some(day);
            current_tasks.clear();
        } else if let Some(text) = match_bullet(line)
            && current_day.is_some()
        {
            current_tasks.push(text.to_string());
        }
    }

    // Flush the final open section.
    if let Some(open) = current_day
        && !current_tasks.is_empty()
    {
        day_tasks.insert(open - 1, current_tasks);
    }

    log::debug!("Parsed {} days with specific tasks", day_tasks.len());
    day_tasks
}
