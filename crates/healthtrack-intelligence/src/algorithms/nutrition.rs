// ABOUTME: Calorie budget and water intake arithmetic for the nutrition log
// ABOUTME: Remaining calories, water clamping and the combined nutrition summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use healthtrack_core::constants::nutrition::CALORIE_GOAL_KCAL;
use healthtrack_core::models::{MealEntry, WaterIntake};
use serde::{Deserialize, Serialize};

/// Calories left in the budget, floored at zero
#[must_use]
pub fn calories_remaining(total_kcal: u64, goal_kcal: u32) -> u64 {
    u64::from(goal_kcal).saturating_sub(total_kcal)
}

/// Add water to the running total, clamped at the goal
#[must_use]
pub fn add_water(intake: WaterIntake, amount_ml: u32) -> WaterIntake {
    WaterIntake {
        total_ml: intake.total_ml.saturating_add(amount_ml).min(intake.goal_ml),
        goal_ml: intake.goal_ml,
    }
}

/// Daily nutrition totals against the fixed budgets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionSummary {
    /// Number of meals logged
    pub meal_count: usize,
    /// Sum of meal calories
    pub total_calories: u64,
    /// Daily calorie goal
    pub calorie_goal: u32,
    /// `max(0, goal - total)`
    pub calories_remaining: u64,
    /// Share of the calorie goal consumed, in percent (not capped)
    pub calorie_percent: f64,
    /// Total strictly above the goal
    pub over_goal: bool,
    /// Water consumed in millilitres
    pub water_ml: u32,
    /// Water goal in millilitres
    pub water_goal_ml: u32,
    /// Water consumed in litres
    pub water_litres: f64,
    /// Water total has reached the goal
    pub water_goal_reached: bool,
}

impl NutritionSummary {
    /// Summarize meals and water against the default calorie goal
    #[must_use]
    pub fn compute(meals: &[MealEntry], water: WaterIntake) -> Self {
        Self::with_calorie_goal(meals, water, CALORIE_GOAL_KCAL)
    }

    /// Summarize meals and water against an explicit calorie goal
    #[must_use]
    pub fn with_calorie_goal(meals: &[MealEntry], water: WaterIntake, calorie_goal: u32) -> Self {
        let total_calories: u64 = meals.iter().map(|meal| u64::from(meal.calories)).sum();
        let calorie_percent = if calorie_goal == 0 {
            0.0
        } else {
            total_calories as f64 / f64::from(calorie_goal) * 100.0
        };

        Self {
            meal_count: meals.len(),
            total_calories,
            calorie_goal,
            calories_remaining: calories_remaining(total_calories, calorie_goal),
            calorie_percent,
            over_goal: total_calories > u64::from(calorie_goal),
            water_ml: water.total_ml,
            water_goal_ml: water.goal_ml,
            water_litres: f64::from(water.total_ml) / 1000.0,
            water_goal_reached: water.total_ml >= water.goal_ml,
        }
    }
}
