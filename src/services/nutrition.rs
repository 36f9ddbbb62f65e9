// ABOUTME: Nutrition page controller for meal logging and water intake
// ABOUTME: Appends time-stamped meals and clamps water at the daily goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use crate::constants::nutrition::MEAL_TIME_FORMAT;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use healthtrack_core::models::{MealEntry, MealSlot, WaterIntake};
use healthtrack_intelligence::{add_water, NutritionSummary};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Submitted meal form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMeal {
    /// Meal slot
    pub slot: MealSlot,
    /// Food description
    pub food: String,
    /// Calories consumed
    pub calories: u32,
}

impl NewMeal {
    /// Build a meal entry whose display time is taken from `now`
    ///
    /// # Errors
    ///
    /// Returns an error if the food description is blank or calories are zero
    pub fn into_entry(self, now: DateTime<Utc>) -> AppResult<MealEntry> {
        let food = self.food.trim();
        if food.is_empty() {
            return Err(AppError::missing_field("food"));
        }
        if self.calories == 0 {
            return Err(AppError::invalid_input("Calories must be a positive integer"));
        }

        Ok(MealEntry {
            id: Uuid::new_v4(),
            slot: self.slot,
            food: food.to_owned(),
            calories: self.calories,
            time: now.format(MEAL_TIME_FORMAT).to_string(),
            logged_at: now,
        })
    }
}

/// Immutable snapshot of the day's meals and water
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionLog {
    meals: Vec<MealEntry>,
    water: WaterIntake,
}

impl NutritionLog {
    /// Snapshot over existing meals and a water total
    #[must_use]
    pub const fn new(meals: Vec<MealEntry>, water: WaterIntake) -> Self {
        Self { meals, water }
    }

    /// Meals in the order they were logged
    #[must_use]
    pub fn meals(&self) -> &[MealEntry] {
        &self.meals
    }

    /// Water intake so far
    #[must_use]
    pub const fn water(&self) -> WaterIntake {
        self.water
    }

    /// New snapshot with `meal` appended
    #[must_use]
    pub fn with_meal(&self, meal: MealEntry) -> Self {
        let mut meals = self.meals.clone();
        meals.push(meal);
        Self {
            meals,
            water: self.water,
        }
    }

    /// New snapshot with water added, clamped at the goal
    #[must_use]
    pub fn with_water(&self, amount_ml: u32) -> Self {
        Self {
            meals: self.meals.clone(),
            water: add_water(self.water, amount_ml),
        }
    }

    /// Calorie and water totals against the daily budgets
    #[must_use]
    pub fn summary(&self) -> NutritionSummary {
        NutritionSummary::compute(&self.meals, self.water)
    }
}

/// Nutrition page state for one session
#[derive(Debug, Clone, Default)]
pub struct NutritionPage {
    log: NutritionLog,
}

impl NutritionPage {
    /// Page starting from an existing snapshot
    #[must_use]
    pub const fn new(log: NutritionLog) -> Self {
        Self { log }
    }

    /// Current snapshot
    #[must_use]
    pub const fn log(&self) -> &NutritionLog {
        &self.log
    }

    /// Log a meal and return the stored entry
    ///
    /// # Errors
    ///
    /// Returns an error if the meal fails validation
    pub fn add_meal(&mut self, meal: NewMeal, now: DateTime<Utc>) -> AppResult<MealEntry> {
        let entry = meal.into_entry(now)?;
        self.log = self.log.with_meal(entry.clone());
        Ok(entry)
    }

    /// Record water and return the new intake
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for a zero amount
    pub fn add_water(&mut self, amount_ml: u32) -> AppResult<WaterIntake> {
        if amount_ml == 0 {
            return Err(AppError::invalid_input("Water amount must be positive"));
        }
        self.log = self.log.with_water(amount_ml);
        Ok(self.log.water())
    }
}
