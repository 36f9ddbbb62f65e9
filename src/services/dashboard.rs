// ABOUTME: Read-only dashboard aggregation over a session's pages
// ABOUTME: Combines activity, nutrition and goal summaries without logic of its own
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use crate::constants::activity::DASHBOARD_RECENT_LIMIT;
use crate::services::goals::GoalView;
use crate::session::Session;
use chrono::{DateTime, Utc};
use healthtrack_core::models::{ActivityEntry, WaterIntake};
use healthtrack_intelligence::{
    goal_progress, ActivitySummary, BmiReading, GoalSummary, NutritionSummary,
};
use serde::{Deserialize, Serialize};

/// Everything the dashboard shows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardOverview {
    /// Name to greet the user with
    pub display_name: String,
    /// Activity totals
    pub activity: ActivitySummary,
    /// Most recent activities, newest first
    pub recent_activities: Vec<ActivityEntry>,
    /// Calorie and water totals
    pub nutrition: NutritionSummary,
    /// Water intake
    pub water: WaterIntake,
    /// Share of the daily calorie goal consumed, capped at 100
    pub daily_calorie_progress: Option<f64>,
    /// Goals with their current status
    pub goals: Vec<GoalView>,
    /// Goal statistics
    pub goal_summary: GoalSummary,
    /// BMI of the registered user
    pub bmi: Option<BmiReading>,
}

impl DashboardOverview {
    /// Aggregate the session's pages as of `now`
    #[must_use]
    pub fn build(session: &Session, now: DateTime<Utc>) -> Self {
        let activities = session.activities.log();
        let nutrition_log = session.nutrition.log();
        let nutrition = nutrition_log.summary();
        let goals = session.goals.list();

        let user = session.profile.as_ref().map(|profile| profile.user());
        let display_name = user
            .map(|user| user.full_name())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| session.username.clone());

        Self {
            display_name,
            activity: activities.summary(),
            recent_activities: activities.recent(DASHBOARD_RECENT_LIMIT).to_vec(),
            daily_calorie_progress: goal_progress(
                nutrition.total_calories as f64,
                f64::from(nutrition.calorie_goal),
            ),
            nutrition,
            water: nutrition_log.water(),
            goals: goals.views(now),
            goal_summary: goals.summary(),
            bmi: user.and_then(|user| BmiReading::compute(user.weight_kg, user.height_cm).ok()),
        }
    }
}
