// ABOUTME: Metric algorithm modules for profile, activity, goal and nutrition pages
// ABOUTME: Each submodule is a set of pure functions over core models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

/// Calorie estimation and activity log totals
pub mod activity_calories;
/// Body Mass Index computation and classification
pub mod bmi;
/// Goal progress, deadlines and status tiers
pub mod goal_progress;
/// Calorie budget and water intake arithmetic
pub mod nutrition;
