// ABOUTME: Goal progress percentage, days-remaining and display tier derivation
// ABOUTME: Derived on every read from current/target/deadline, never stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use healthtrack_core::constants::goals::{
    IN_PROGRESS_PERCENT, MAX_PROGRESS_PERCENT, MILLIS_PER_DAY, NEAR_COMPLETION_PERCENT,
};
use healthtrack_core::models::Goal;
use serde::{Deserialize, Serialize};

/// Percentage of `target` reached by `current`, capped at 100
///
/// Returns `None` when the ratio is undefined (zero or non-finite target).
///
/// The formula assumes an "increase" goal. For goals where the target is below
/// the current value (weight loss) the result is `current / target`, which is
/// already above 100 and reads as complete. That behavior is kept as-is.
#[must_use]
pub fn goal_progress(current: f64, target: f64) -> Option<f64> {
    if target == 0.0 || !target.is_finite() || !current.is_finite() {
        return None;
    }
    Some((current / target * 100.0).min(MAX_PROGRESS_PERCENT))
}

/// Whole days until the deadline, rounded up
///
/// The deadline is taken as midnight UTC of the given date. Zero or negative
/// values mean the deadline has passed.
#[must_use]
pub fn days_left(deadline: NaiveDate, now: DateTime<Utc>) -> i64 {
    let deadline_at = deadline.and_time(NaiveTime::MIN).and_utc();
    let diff_ms = (deadline_at - now).num_milliseconds();

    let days = diff_ms.div_euclid(MILLIS_PER_DAY);
    if diff_ms.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// Display classification of a progress percentage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalTier {
    /// 80% or more
    NearCompletion,
    /// 50% up to 80%
    InProgress,
    /// Below 50%
    JustStarting,
}

impl GoalTier {
    /// Classify a progress percentage
    #[must_use]
    pub fn from_progress(progress: f64) -> Self {
        if progress >= NEAR_COMPLETION_PERCENT {
            Self::NearCompletion
        } else if progress >= IN_PROGRESS_PERCENT {
            Self::InProgress
        } else {
            Self::JustStarting
        }
    }
}

/// Derived view of a single goal at a point in time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GoalStatus {
    /// Progress percentage, `None` when undefined
    pub progress: Option<f64>,
    /// Days until the deadline (rounded up)
    pub days_left: i64,
    /// Whether the deadline has passed
    pub overdue: bool,
    /// Display tier, `None` when progress is undefined
    pub tier: Option<GoalTier>,
}

impl GoalStatus {
    /// Evaluate a goal against the current time
    #[must_use]
    pub fn evaluate(goal: &Goal, now: DateTime<Utc>) -> Self {
        let progress = goal_progress(goal.current_value, goal.target_value);
        let days_left = days_left(goal.deadline, now);
        Self {
            progress,
            days_left,
            overdue: days_left <= 0,
            tier: progress.map(GoalTier::from_progress),
        }
    }
}

/// Aggregate statistics over a goal list
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalSummary {
    /// Number of goals
    pub count: usize,
    /// Goals at 80% or more
    pub near_completion: usize,
    /// Goals from 50% up to 80%
    pub in_progress: usize,
    /// Mean progress rounded to a whole percent, `None` without defined progress
    pub average_progress: Option<i64>,
}

impl GoalSummary {
    /// Reduce a goal list into summary statistics
    #[must_use]
    pub fn from_goals(goals: &[Goal]) -> Self {
        let progresses: Vec<f64> = goals
            .iter()
            .filter_map(|goal| goal_progress(goal.current_value, goal.target_value))
            .collect();

        let tier_count = |tier: GoalTier| {
            progresses
                .iter()
                .filter(|progress| GoalTier::from_progress(**progress) == tier)
                .count()
        };

        let average_progress = if progresses.is_empty() {
            None
        } else {
            let mean = progresses.iter().sum::<f64>() / progresses.len() as f64;
            Some(mean.round() as i64)
        };

        Self {
            count: goals.len(),
            near_completion: tier_count(GoalTier::NearCompletion),
            in_progress: tier_count(GoalTier::InProgress),
            average_progress,
        }
    }
}
