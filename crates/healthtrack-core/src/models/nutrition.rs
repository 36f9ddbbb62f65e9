// ABOUTME: Nutrition tracking models for meals and water intake
// ABOUTME: MealSlot, MealEntry and the session-scoped WaterIntake counter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use crate::constants::nutrition::WATER_GOAL_ML;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Time-of-day slot a meal belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast
    Morning,
    /// Lunch
    Noon,
    /// Dinner
    Evening,
    /// Snack between meals
    Snack,
}

/// A logged meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Meal slot
    pub slot: MealSlot,
    /// Free-form food description
    pub food: String,
    /// Calories consumed (kcal, always positive)
    pub calories: u32,
    /// Display time of the meal, `HH:MM`
    pub time: String,
    /// Full timestamp the display time was derived from
    pub logged_at: DateTime<Utc>,
}

/// Running water total for the current session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WaterIntake {
    /// Millilitres consumed so far
    pub total_ml: u32,
    /// Daily goal in millilitres
    pub goal_ml: u32,
}

impl Default for WaterIntake {
    fn default() -> Self {
        Self {
            total_ml: 0,
            goal_ml: WATER_GOAL_ML,
        }
    }
}
