// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Calorie tables, daily budgets, BMI thresholds, goal tiers, ports and storage keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

//! Constants module
//!
//! Pure data constants grouped by domain. The daily budgets here are fixed by
//! product decision and are intentionally not exposed through configuration.

/// Activity calorie estimation
pub mod activity {
    /// Running burn rate (kcal per km)
    pub const RUNNING_KCAL_PER_KM: f64 = 60.0;
    /// Walking burn rate (kcal per km)
    pub const WALKING_KCAL_PER_KM: f64 = 35.0;
    /// Cycling burn rate (kcal per km)
    pub const CYCLING_KCAL_PER_KM: f64 = 30.0;
    /// Swimming burn rate (kcal per km)
    pub const SWIMMING_KCAL_PER_KM: f64 = 80.0;
    /// Number of entries the dashboard shows as recent activity
    pub const DASHBOARD_RECENT_LIMIT: usize = 3;
}

/// Daily nutrition budgets
pub mod nutrition {
    /// Daily water goal in millilitres
    pub const WATER_GOAL_ML: u32 = 2_000;
    /// Daily calorie intake goal in kcal
    pub const CALORIE_GOAL_KCAL: u32 = 2_000;
    /// Display format for meal log times
    pub const MEAL_TIME_FORMAT: &str = "%H:%M";
}

/// Body Mass Index category boundaries (kg/m²)
pub mod bmi {
    /// Below this value the category is underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Below this value (and at or above underweight) the category is normal
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Below this value (and at or above normal) the category is overweight
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
}

/// Goal progress classification
pub mod goals {
    /// Progress is capped at this percentage
    pub const MAX_PROGRESS_PERCENT: f64 = 100.0;
    /// Progress at or above this is "near completion"
    pub const NEAR_COMPLETION_PERCENT: f64 = 80.0;
    /// Progress at or above this is "in progress"
    pub const IN_PROGRESS_PERCENT: f64 = 50.0;
    /// Milliseconds in one day, used for deadline arithmetic
    pub const MILLIS_PER_DAY: i64 = 86_400_000;
}

/// Key-value storage keys
pub mod storage {
    /// Key holding the serialized current user record
    pub const CURRENT_USER_KEY: &str = "current_user";
}

/// Service identity
pub mod service_names {
    /// Name used in logs and startup banners
    pub const HEALTHTRACK_SERVER: &str = "healthtrack-server";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Default values
pub mod defaults {
    /// Default `SQLite` database location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/healthtrack.db";
}
