// ABOUTME: Core data models for the HealthTrack platform
// ABOUTME: Re-exports user, activity, nutrition and goal entities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

//! # Data Models
//!
//! Plain entity shapes shared by every component. No component holds a
//! reference to another's entities; `ActivityEntry` has no link to `User`.
//!
//! - `User`: the single stored account and body measurements
//! - `ActivityEntry`: one exercise session
//! - `MealEntry` / `WaterIntake`: nutrition log state
//! - `Goal`: target/current/deadline triple

mod activity;
mod goal;
mod nutrition;
mod user;

pub use activity::{ActivityEntry, ActivityType};
pub use goal::{Goal, GoalType};
pub use nutrition::{MealEntry, MealSlot, WaterIntake};
pub use user::{Gender, ProfileUpdate, User};
