// File: ./src/store.rs
/*!
Roadmap history store.

Every submitted roadmap is kept in a versioned JSON file in the data
directory, newest first, so a user can re-export an earlier plan. The store
is a cache of submissions, not a source of truth: an unreadable or
unknown-version file degrades to an empty history instead of failing.

This module uses an explicit `AppContext` for resolving filesystem
locations; all public IO functions take a `&dyn AppContext` argument.
*/

use crate::context::AppContext;
use crate::model::RoadmapItem;
use crate::storage::LocalStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const HISTORY_VERSION: u32 = 1;

/// On-disk shape of the history file.
#[derive(Serialize, Deserialize, Debug)]
struct HistoryData {
    version: u32,
    roadmaps: Vec<RoadmapItem>,
}

#[derive(Debug, Default)]
pub struct History {
    pub roadmaps: Vec<RoadmapItem>,
}

impl History {
    /// Return the on-disk history path for the given context, if available.
    pub fn get_path(ctx: &dyn AppContext) -> Option<PathBuf> {
        ctx.get_history_path()
    }

    /// Internal helper: load the history from a path without acquiring locks.
    fn load_internal(path: &PathBuf) -> Self {
        if path.exists()
            && let Ok(content) = fs::read_to_string(path)
            && let Ok(data) = serde_json::from_str::<HistoryData>(&content)
        {
            if data.version == HISTORY_VERSION {
                return Self {
                    roadmaps: data.roadmaps,
                };
            }
            log::warn!(
                "Ignoring history file with unknown version {} (expected {})",
                data.version,
                HISTORY_VERSION
            );
        }
        Self::default()
    }

    /// Load the history from disk using the provided context.
    pub fn load(ctx: &dyn AppContext) -> Self {
        if let Some(path) = Self::get_path(ctx) {
            if !path.exists() {
                return Self::default();
            }
            return LocalStorage::with_lock(&path, || Ok(Self::load_internal(&path)))
                .unwrap_or_default();
        }
        Self::default()
    }

    /// Modify the history by applying a closure to the roadmap list,
    /// persisting changes.
    pub fn modify<F>(ctx: &dyn AppContext, f: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<RoadmapItem>),
    {
        if let Some(path) = Self::get_path(ctx) {
            LocalStorage::with_lock(&path, || {
                let mut history = Self::load_internal(&path);
                f(&mut history.roadmaps);
                let data = HistoryData {
                    version: HISTORY_VERSION,
                    roadmaps: history.roadmaps,
                };
                let json = serde_json::to_string_pretty(&data)?;
                LocalStorage::atomic_write(&path, json)?;
                Ok(())
            })?;
        }
        Ok(())
    }

    /// Prepend a new roadmap, keeping at most `max` entries.
    pub fn add(ctx: &dyn AppContext, item: RoadmapItem, max: usize) -> Result<()> {
        Self::modify(ctx, |roadmaps| {
            roadmaps.insert(0, item);
            roadmaps.truncate(max);
        })
    }

    /// Remove all stored roadmaps.
    pub fn clear(ctx: &dyn AppContext) -> Result<()> {
        Self::modify(ctx, |roadmaps| roadmaps.clear())
    }

    pub fn is_empty(&self) -> bool {
        self.roadmaps.is_empty()
    }

    /// Roadmap at `index`, counting from the most recent (0 = newest).
    pub fn get(&self, index: usize) -> Option<&RoadmapItem> {
        self.roadmaps.get(index)
    }
}
