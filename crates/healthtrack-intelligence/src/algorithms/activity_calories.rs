// ABOUTME: Activity calorie estimation from distance and the per-type burn table
// ABOUTME: Also reduces an activity list into count, distance and calorie totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use crate::errors::{AppError, AppResult};
use healthtrack_core::models::{ActivityEntry, ActivityType};
use serde::{Deserialize, Serialize};

/// Estimate calories burned as `round(distance_km * kcal_per_km)`
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the distance is negative or not finite.
pub fn estimate_calories(activity_type: ActivityType, distance_km: f64) -> AppResult<u32> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(AppError::invalid_input(format!(
            "Distance must be a non-negative number, got {distance_km}"
        )));
    }

    let calories = (distance_km * activity_type.calories_per_km()).round();
    if calories > f64::from(u32::MAX) {
        return Err(AppError::out_of_range(format!(
            "Distance {distance_km} km produces an unrepresentable calorie estimate"
        )));
    }
    Ok(calories as u32)
}

/// Totals over an activity list
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ActivitySummary {
    /// Number of entries
    pub count: usize,
    /// Sum of distances in kilometres
    pub total_distance_km: f64,
    /// Sum of calories
    pub total_calories: u64,
    /// Sum of durations in minutes
    pub total_duration_minutes: u64,
}

impl ActivitySummary {
    /// Reduce a list of entries into totals
    #[must_use]
    pub fn from_entries(entries: &[ActivityEntry]) -> Self {
        entries.iter().fold(Self::default(), |acc, entry| Self {
            count: acc.count + 1,
            total_distance_km: acc.total_distance_km + entry.distance_km,
            total_calories: acc.total_calories + u64::from(entry.calories),
            total_duration_minutes: acc.total_duration_minutes
                + u64::from(entry.duration_minutes),
        })
    }
}
