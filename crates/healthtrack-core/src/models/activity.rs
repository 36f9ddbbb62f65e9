// ABOUTME: Activity log models for exercise entries
// ABOUTME: ActivityType with its calorie lookup table and the ActivityEntry record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use crate::constants::activity::{
    CYCLING_KCAL_PER_KM, RUNNING_KCAL_PER_KM, SWIMMING_KCAL_PER_KM, WALKING_KCAL_PER_KM,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind of exercise that can be logged
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Running activity
    Running,
    /// Walking activity
    Walking,
    /// Cycling activity
    Cycling,
    /// Swimming activity
    Swimming,
}

impl ActivityType {
    /// Every loggable activity type, in catalog order
    pub const ALL: [Self; 4] = [Self::Running, Self::Walking, Self::Cycling, Self::Swimming];

    /// Calories burned per kilometre for this activity type
    #[must_use]
    pub const fn calories_per_km(self) -> f64 {
        match self {
            Self::Running => RUNNING_KCAL_PER_KM,
            Self::Walking => WALKING_KCAL_PER_KM,
            Self::Cycling => CYCLING_KCAL_PER_KM,
            Self::Swimming => SWIMMING_KCAL_PER_KM,
        }
    }

    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single logged exercise session
///
/// Entries are created once and never mutated; deleting and re-adding is the
/// only way to change one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Kind of exercise
    pub activity_type: ActivityType,
    /// Distance covered in kilometres
    pub distance_km: f64,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Calories burned (estimated or user supplied)
    pub calories: u32,
    /// When the entry was logged
    pub recorded_at: DateTime<Utc>,
}
