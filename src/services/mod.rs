// ABOUTME: Page controllers and domain services behind the HTTP routes
// ABOUTME: Activity, nutrition, goal and profile pages plus auth and dashboard aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

//! Domain service layer
//!
//! Page controllers own their list as an immutable snapshot and replace it on
//! every change. Route handlers stay thin and delegate here.

/// Activity log page
pub mod activities;

/// Registration, login and logout
pub mod auth;

/// Dashboard aggregation
pub mod dashboard;

/// Goal tracker page
pub mod goals;

/// Meal and water log page
pub mod nutrition;

/// Profile page with edit mode
pub mod profile;
