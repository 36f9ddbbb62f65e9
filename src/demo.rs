// ABOUTME: Sample activities, meals, water and goals for freshly created sessions
// ABOUTME: Used when HEALTHTRACK_SEED_DEMO_DATA is enabled so every page starts populated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

//! Demo data for new sessions
//!
//! The timestamps are fixed calendar points, so seeded goals read as overdue
//! once those dates have passed.

use crate::constants::nutrition::MEAL_TIME_FORMAT;
use crate::services::activities::ActivityLog;
use crate::services::goals::GoalList;
use crate::services::nutrition::NutritionLog;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use healthtrack_core::models::{
    ActivityEntry, ActivityType, Goal, GoalType, MealEntry, MealSlot, WaterIntake,
};
use uuid::Uuid;

/// Starting water total in millilitres
const DEMO_WATER_ML: u32 = 1_500;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Three logged activities, newest first
#[must_use]
pub fn demo_activities() -> ActivityLog {
    let entry = |activity_type, distance_km, duration_minutes, calories, recorded_at| ActivityEntry {
        id: Uuid::new_v4(),
        activity_type,
        distance_km,
        duration_minutes,
        calories,
        recorded_at,
    };

    ActivityLog::from_entries(vec![
        entry(ActivityType::Running, 5.2, 28, 312, at(2024, 1, 15, 6, 30)),
        entry(ActivityType::Walking, 3.1, 45, 108, at(2024, 1, 15, 18, 0)),
        entry(ActivityType::Cycling, 12.5, 35, 245, at(2024, 1, 14, 7, 0)),
    ])
}

/// Three meals and 1.5 litres of water
#[must_use]
pub fn demo_nutrition() -> NutritionLog {
    let meal = |slot, food: &str, calories, logged_at: DateTime<Utc>| MealEntry {
        id: Uuid::new_v4(),
        slot,
        food: food.to_owned(),
        calories,
        time: logged_at.format(MEAL_TIME_FORMAT).to_string(),
        logged_at,
    };

    NutritionLog::new(
        vec![
            meal(
                MealSlot::Morning,
                "Omelette on rice with fresh milk",
                450,
                at(2024, 1, 15, 7, 30),
            ),
            meal(
                MealSlot::Noon,
                "Chicken fried rice with orange juice",
                680,
                at(2024, 1, 15, 12, 30),
            ),
            meal(
                MealSlot::Snack,
                "Banana with yogurt",
                220,
                at(2024, 1, 15, 15, 0),
            ),
        ],
        WaterIntake {
            total_ml: DEMO_WATER_ML,
            ..WaterIntake::default()
        },
    )
}

/// Weight, exercise and muscle goals
#[must_use]
pub fn demo_goals() -> GoalList {
    let created_at = at(2024, 1, 1, 0, 0);
    let goal = |goal_type, title: &str, current_value, target_value, unit: &str, deadline| Goal {
        id: Uuid::new_v4(),
        goal_type,
        title: title.to_owned(),
        current_value,
        target_value,
        unit: unit.to_owned(),
        deadline,
        created_at,
    };

    GoalList::from_goals(vec![
        goal(GoalType::Weight, "Lose weight", 72.0, 68.0, "kg", date(2024, 3, 31)),
        goal(
            GoalType::Exercise,
            "Weekly workouts",
            4.0,
            5.0,
            "sessions",
            date(2024, 12, 31),
        ),
        goal(GoalType::Muscle, "Build muscle", 55.0, 60.0, "kg", date(2024, 6, 30)),
    ])
}
