// File: ./src/export.rs
//! File-save collaborator: derives the artifact filename from the goal and
//! writes the serialized document to disk.

use crate::model::CalendarDocument;
use crate::storage::LocalStorage;
use anyhow::Result;
use std::path::{Path, PathBuf};

const FILENAME_PREFIX: &str = "strideAI";
const GOAL_SLUG_MAX_CHARS: usize = 20;

/// Derives the download filename: prefix, then the first 20 characters of
/// the goal with whitespace runs collapsed to `-`. The cut happens before
/// the collapse, so a trailing `-` is possible and accepted.
pub fn export_filename(goal: &str) -> String {
    let cut: String = goal.chars().take(GOAL_SLUG_MAX_CHARS).collect();
    let mut slug = String::with_capacity(cut.len());
    let mut in_whitespace = false;
    for c in cut.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }
    format!("{}-{}.ics", FILENAME_PREFIX, slug)
}

/// Serializes `doc` and writes it into `dir`, returning the full path.
pub fn save_document(doc: &CalendarDocument, goal: &str, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_filename(goal));
    LocalStorage::atomic_write(&path, doc.to_ics())?;
    log::info!("Wrote {} events to {}", doc.events.len(), path.display());
    Ok(path)
}
