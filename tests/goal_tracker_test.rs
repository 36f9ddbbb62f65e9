// ABOUTME: Integration tests for the goal tracker page controller
// ABOUTME: Covers goal validation, derived progress, deadline countdown and summary statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use healthtrack_intelligence::GoalTier;
use healthtrack_server::errors::ErrorCode;
use healthtrack_server::models::GoalType;
use healthtrack_server::services::goals::{GoalList, GoalsPage, NewGoal};

fn goal(title: &str, current: f64, target: f64, deadline: NaiveDate) -> NewGoal {
    NewGoal {
        goal_type: GoalType::Exercise,
        title: title.to_owned(),
        current_value: current,
        target_value: target,
        unit: "sessions".to_owned(),
        deadline,
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[test]
fn test_create_goal_with_status() {
    let mut page = GoalsPage::default();
    let view = page
        .create_goal(goal("Weekly workouts", 4.0, 5.0, day(20)), common::fixed_now())
        .unwrap();

    assert_eq!(view.goal.title, "Weekly workouts");
    assert_eq!(view.status.progress, Some(80.0));
    assert_eq!(view.status.tier, Some(GoalTier::NearCompletion));
    assert_eq!(view.status.days_left, 5);
    assert!(!view.status.overdue);
    assert_eq!(page.list().goals().len(), 1);
}

#[test]
fn test_progress_is_capped() {
    let mut page = GoalsPage::default();
    let view = page
        .create_goal(goal("Overachiever", 12.0, 10.0, day(31)), common::fixed_now())
        .unwrap();
    assert_eq!(view.status.progress, Some(100.0));
}

#[test]
fn test_deadline_today_is_overdue() {
    let mut page = GoalsPage::default();
    let today = page
        .create_goal(goal("Today", 1.0, 10.0, day(15)), common::fixed_now())
        .unwrap();
    let tomorrow = page
        .create_goal(goal("Tomorrow", 1.0, 10.0, day(16)), common::fixed_now())
        .unwrap();
    let past = page
        .create_goal(goal("Past", 1.0, 10.0, day(1)), common::fixed_now())
        .unwrap();

    assert_eq!(today.status.days_left, 0);
    assert!(today.status.overdue);
    assert_eq!(tomorrow.status.days_left, 1);
    assert!(!tomorrow.status.overdue);
    assert!(past.status.days_left < 0);
    assert!(past.status.overdue);
}

#[test]
fn test_tiers() {
    let mut page = GoalsPage::default();
    let now = common::fixed_now();
    let in_progress = page.create_goal(goal("Half", 5.0, 10.0, day(31)), now).unwrap();
    let starting = page.create_goal(goal("Start", 1.0, 10.0, day(31)), now).unwrap();

    assert_eq!(in_progress.status.tier, Some(GoalTier::InProgress));
    assert_eq!(starting.status.tier, Some(GoalTier::JustStarting));
}

#[test]
fn test_invalid_goals_rejected() {
    let mut page = GoalsPage::default();
    let now = common::fixed_now();

    let blank = page.create_goal(goal("  ", 1.0, 2.0, day(31)), now).unwrap_err();
    assert_eq!(blank.code, ErrorCode::MissingRequiredField);

    let zero_target = page.create_goal(goal("Zero", 1.0, 0.0, day(31)), now).unwrap_err();
    assert_eq!(zero_target.code, ErrorCode::InvalidInput);

    let nan = page
        .create_goal(goal("NaN", f64::NAN, 2.0, day(31)), now)
        .unwrap_err();
    assert_eq!(nan.code, ErrorCode::InvalidInput);

    assert!(page.list().goals().is_empty());
}

#[test]
fn test_summary_statistics() {
    let mut page = GoalsPage::default();
    let now = common::fixed_now();
    page.create_goal(goal("A", 9.0, 10.0, day(31)), now).unwrap();
    page.create_goal(goal("B", 6.0, 10.0, day(31)), now).unwrap();
    page.create_goal(goal("C", 2.0, 10.0, day(31)), now).unwrap();

    let summary = page.list().summary();
    assert_eq!(summary.count, 3);
    assert_eq!(summary.near_completion, 1);
    assert_eq!(summary.in_progress, 1);
    assert_eq!(summary.average_progress, Some(57));
}

#[test]
fn test_empty_summary_has_no_average() {
    let summary = GoalList::default().summary();
    assert_eq!(summary.count, 0);
    assert_eq!(summary.average_progress, None);
}

#[test]
fn test_views_follow_creation_order() {
    let mut page = GoalsPage::default();
    let now = common::fixed_now();
    page.create_goal(goal("First", 1.0, 10.0, day(31)), now).unwrap();
    page.create_goal(goal("Second", 1.0, 10.0, day(31)), now).unwrap();

    let titles: Vec<String> = page
        .list()
        .views(now)
        .into_iter()
        .map(|view| view.goal.title)
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);
}
