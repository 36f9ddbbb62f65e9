// ABOUTME: Activity log page controller with pure add/delete over list snapshots
// ABOUTME: Fills in estimated calories when the caller does not supply them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use crate::errors::AppResult;
use chrono::{DateTime, Utc};
use healthtrack_core::models::{ActivityEntry, ActivityType};
use healthtrack_intelligence::{estimate_calories, ActivitySummary};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Submitted activity form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivity {
    /// Kind of exercise
    pub activity_type: ActivityType,
    /// Distance in kilometres
    pub distance_km: f64,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Calories burned; estimated from distance when omitted
    #[serde(default)]
    pub calories: Option<u32>,
}

impl NewActivity {
    /// Build a log entry stamped with `now`
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the distance is negative or not finite
    pub fn into_entry(self, now: DateTime<Utc>) -> AppResult<ActivityEntry> {
        let estimated = estimate_calories(self.activity_type, self.distance_km)?;

        Ok(ActivityEntry {
            id: Uuid::new_v4(),
            activity_type: self.activity_type,
            distance_km: self.distance_km,
            duration_minutes: self.duration_minutes,
            calories: self.calories.unwrap_or(estimated),
            recorded_at: now,
        })
    }
}

/// Immutable snapshot of the activity list, newest first
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    /// Snapshot over existing entries, kept in the given order
    #[must_use]
    pub const fn from_entries(entries: Vec<ActivityEntry>) -> Self {
        Self { entries }
    }

    /// Entries, newest first
    #[must_use]
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    /// New snapshot with `entry` prepended
    #[must_use]
    pub fn with_activity(&self, entry: ActivityEntry) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        Self { entries }
    }

    /// New snapshot without the entry matching `id`
    ///
    /// An unknown id yields an identical snapshot.
    #[must_use]
    pub fn without_activity(&self, id: Uuid) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| entry.id != id)
                .cloned()
                .collect(),
        }
    }

    /// The `limit` most recent entries
    #[must_use]
    pub fn recent(&self, limit: usize) -> &[ActivityEntry] {
        &self.entries[..self.entries.len().min(limit)]
    }

    /// Count, distance and calorie totals
    #[must_use]
    pub fn summary(&self) -> ActivitySummary {
        ActivitySummary::from_entries(&self.entries)
    }
}

/// Activity page state for one session
#[derive(Debug, Clone, Default)]
pub struct ActivityPage {
    log: ActivityLog,
}

impl ActivityPage {
    /// Page starting from an existing snapshot
    #[must_use]
    pub const fn new(log: ActivityLog) -> Self {
        Self { log }
    }

    /// Current snapshot
    #[must_use]
    pub const fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// Add an activity and return the stored entry
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the submitted distance is invalid
    pub fn add_activity(
        &mut self,
        activity: NewActivity,
        now: DateTime<Utc>,
    ) -> AppResult<ActivityEntry> {
        let entry = activity.into_entry(now)?;
        self.log = self.log.with_activity(entry.clone());
        Ok(entry)
    }

    /// Delete an activity by id, returning whether anything was removed
    pub fn delete_activity(&mut self, id: Uuid) -> bool {
        let next = self.log.without_activity(id);
        let removed = next.entries().len() != self.log.entries().len();
        self.log = next;
        removed
    }
}

/// Catalog row for an activity type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ActivityTypeInfo {
    /// Activity type
    pub activity_type: ActivityType,
    /// Calories burned per kilometre
    pub calories_per_km: f64,
}

/// Every activity type with its burn rate
#[must_use]
pub fn activity_catalog() -> Vec<ActivityTypeInfo> {
    ActivityType::ALL
        .iter()
        .map(|activity_type| ActivityTypeInfo {
            activity_type: *activity_type,
            calories_per_km: activity_type.calories_per_km(),
        })
        .collect()
}

