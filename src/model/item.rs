// File: ./src/model/item.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use strum::EnumIter;

/// Zero-based day index -> tasks for that day, in source order.
///
/// Produced by the plan parser. A day with no recognized bullets simply has
/// no key here; the compiler substitutes its fallback description.
pub type DayTaskMap = HashMap<u32, Vec<String>>;

/// Fixed goal taxonomy offered by the submission form. The compiler ignores
/// it; it exists for history display and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter)]
pub enum Category {
    #[default]
    Health,
    Career,
    #[serde(rename = "Personal Growth")]
    PersonalGrowth,
    Finance,
    Relationships,
    Hobby,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Health => write!(f, "Health"),
            Category::Career => write!(f, "Career"),
            Category::PersonalGrowth => write!(f, "Personal Growth"),
            Category::Finance => write!(f, "Finance"),
            Category::Relationships => write!(f, "Relationships"),
            Category::Hobby => write!(f, "Hobby"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "health" => Ok(Category::Health),
            "career" => Ok(Category::Career),
            "personal growth" | "personal-growth" | "growth" => Ok(Category::PersonalGrowth),
            "finance" => Ok(Category::Finance),
            "relationships" => Ok(Category::Relationships),
            "hobby" => Ok(Category::Hobby),
            other => Err(format!("Unknown category '{}'", other)),
        }
    }
}

/// One user-submitted goal plus its generated plan and metadata, as stored
/// in history and consumed by the calendar compiler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub goal: String,
    #[serde(default)]
    pub category: Category,
    /// ISO "YYYY-MM-DD", or absent for the default 30-day window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    /// Short feedback text shown alongside the roadmap.
    #[serde(default)]
    pub feedback: String,
    /// The complete day-by-day plan. Falls back to `feedback` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_plan: Option<String>,
    /// Creation instant, epoch milliseconds. Unique per item; seeds event UIDs.
    pub timestamp: i64,
}

impl RoadmapItem {
    pub fn new(
        goal: String,
        category: Category,
        deadline: Option<String>,
        full_plan: String,
        timestamp: i64,
    ) -> Self {
        Self {
            goal,
            category,
            deadline,
            feedback: String::new(),
            full_plan: Some(full_plan),
            timestamp,
        }
    }

    /// The text the compiler should parse: the full plan when present and
    /// non-empty, otherwise the feedback text.
    pub fn plan_text(&self) -> &str {
        match &self.full_plan {
            Some(plan) if !plan.is_empty() => plan,
            _ => &self.feedback,
        }
    }
}

/// One generated day event. Date-times are floating local time with second
/// precision; `dt_end` is always exactly one hour after `dt_start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub uid: String,
    pub dt_stamp: NaiveDateTime,
    pub dt_start: NaiveDateTime,
    pub dt_end: NaiveDateTime,
    pub summary: String,
    pub description: String,
}

/// The full event sequence for one export. Constructed once per request,
/// serialized with [`CalendarDocument::to_ics`], never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct CalendarDocument {
    pub events: Vec<CalendarEvent>,
}
