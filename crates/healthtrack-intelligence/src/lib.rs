// ABOUTME: Health metric algorithms for the HealthTrack platform
// ABOUTME: BMI, activity calorie estimates, goal progress and nutrition budgets as pure functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

#![deny(unsafe_code)]

//! # HealthTrack Intelligence
//!
//! Derived metrics computed from the core models. Nothing here stores state:
//! every value is recomputed from the canonical list on each read.

/// Error types shared with the rest of the workspace
pub use healthtrack_core::errors;

/// Metric algorithms grouped by page
pub mod algorithms;

pub use algorithms::activity_calories::{estimate_calories, ActivitySummary};
pub use algorithms::bmi::{BmiCategory, BmiReading};
pub use algorithms::goal_progress::{days_left, goal_progress, GoalStatus, GoalSummary, GoalTier};
pub use algorithms::nutrition::{add_water, calories_remaining, NutritionSummary};
