// ABOUTME: Goal tracking models for target/current/deadline triples
// ABOUTME: GoalType and the Goal record; progress and days left are derived elsewhere
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of a personal goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Body weight target
    Weight,
    /// Muscle mass target
    Muscle,
    /// Exercise frequency target
    Exercise,
    /// General health target
    Health,
}

/// A personal goal
///
/// Only the raw values are stored. Progress and days remaining are always
/// recomputed from `current_value`, `target_value` and `deadline`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    /// Unique identifier
    pub id: Uuid,
    /// Goal category
    pub goal_type: GoalType,
    /// Display title
    pub title: String,
    /// Current measured value
    pub current_value: f64,
    /// Value the user is aiming for
    pub target_value: f64,
    /// Unit label for both values (kg, sessions, ...)
    pub unit: String,
    /// Deadline date (midnight UTC)
    pub deadline: NaiveDate,
    /// When the goal was created
    pub created_at: DateTime<Utc>,
}
