// ABOUTME: Goal tracker page controller for creating goals and reading derived progress
// ABOUTME: Goals are append-only; progress, days left and tier are computed per read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use healthtrack_core::models::{Goal, GoalType};
use healthtrack_intelligence::{GoalStatus, GoalSummary};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Submitted goal form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGoal {
    /// Goal category
    pub goal_type: GoalType,
    /// Display title
    pub title: String,
    /// Current value
    pub current_value: f64,
    /// Target value
    pub target_value: f64,
    /// Unit label
    pub unit: String,
    /// Deadline date
    pub deadline: NaiveDate,
}

impl NewGoal {
    /// Build a goal record
    ///
    /// # Errors
    ///
    /// Returns an error if the title is blank, a value is not finite, or the
    /// target is zero (progress would be undefined)
    pub fn into_goal(self, now: DateTime<Utc>) -> AppResult<Goal> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AppError::missing_field("title"));
        }
        if !self.current_value.is_finite() {
            return Err(AppError::invalid_input("Current value must be a number"));
        }
        if !self.target_value.is_finite() || self.target_value == 0.0 {
            return Err(AppError::invalid_input(
                "Target value must be a non-zero number",
            ));
        }

        Ok(Goal {
            id: Uuid::new_v4(),
            goal_type: self.goal_type,
            title: title.to_owned(),
            current_value: self.current_value,
            target_value: self.target_value,
            unit: self.unit.trim().to_owned(),
            deadline: self.deadline,
            created_at: now,
        })
    }
}

/// A goal together with its derived status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalView {
    /// Stored goal
    #[serde(flatten)]
    pub goal: Goal,
    /// Progress, days left and tier at read time
    pub status: GoalStatus,
}

/// Immutable snapshot of the goal list
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GoalList {
    goals: Vec<Goal>,
}

impl GoalList {
    /// Snapshot over existing goals
    #[must_use]
    pub const fn from_goals(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    /// Goals in creation order
    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// New snapshot with `goal` appended
    #[must_use]
    pub fn with_goal(&self, goal: Goal) -> Self {
        let mut goals = self.goals.clone();
        goals.push(goal);
        Self { goals }
    }

    /// Every goal with its status evaluated at `now`
    #[must_use]
    pub fn views(&self, now: DateTime<Utc>) -> Vec<GoalView> {
        self.goals
            .iter()
            .map(|goal| GoalView {
                goal: goal.clone(),
                status: GoalStatus::evaluate(goal, now),
            })
            .collect()
    }

    /// Aggregate progress statistics
    #[must_use]
    pub fn summary(&self) -> GoalSummary {
        GoalSummary::from_goals(&self.goals)
    }
}

/// Goal page state for one session
#[derive(Debug, Clone, Default)]
pub struct GoalsPage {
    list: GoalList,
}

impl GoalsPage {
    /// Page starting from an existing snapshot
    #[must_use]
    pub const fn new(list: GoalList) -> Self {
        Self { list }
    }

    /// Current snapshot
    #[must_use]
    pub const fn list(&self) -> &GoalList {
        &self.list
    }

    /// Create a goal and return it with its status
    ///
    /// # Errors
    ///
    /// Returns an error if the goal fails validation
    pub fn create_goal(&mut self, goal: NewGoal, now: DateTime<Utc>) -> AppResult<GoalView> {
        let goal = goal.into_goal(now)?;
        let status = GoalStatus::evaluate(&goal, now);
        self.list = self.list.with_goal(goal.clone());
        Ok(GoalView { goal, status })
    }
}
