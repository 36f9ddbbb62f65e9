// ABOUTME: Core types and constants for the HealthTrack fitness tracking platform
// ABOUTME: Foundation crate with error handling, domain constants, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

#![deny(unsafe_code)]

//! # HealthTrack Core
//!
//! Foundation crate providing shared types for the HealthTrack platform. It is
//! designed to change rarely so the rest of the workspace compiles incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Calorie tables, daily budgets and classification thresholds
//! - **models**: User, activity, nutrition and goal entities

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (User, `ActivityEntry`, `MealEntry`, Goal, ...)
pub mod models;
