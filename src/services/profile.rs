// ABOUTME: Profile page controller with edit mode, pending changes and BMI view
// ABOUTME: Fields are mutable only between begin_edit and save or cancel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use healthtrack_core::models::{Gender, ProfileUpdate, User};
use healthtrack_intelligence::BmiReading;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public view of the profile, without credentials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileView {
    /// User id
    pub id: Uuid,
    /// Login name
    pub username: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Display name
    pub full_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Gender
    pub gender: Gender,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Age in whole years
    pub age: u32,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimetres
    pub height_cm: f64,
    /// BMI, absent when the measurements cannot produce one
    pub bmi: Option<BmiReading>,
    /// Registration time
    pub created_at: DateTime<Utc>,
    /// Whether the profile is in edit mode
    pub editing: bool,
}

/// Profile page state for one session
///
/// While editing, the original record is kept so `cancel` can restore it.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    user: User,
    original: Option<User>,
}

impl ProfileEditor {
    /// Editor over a loaded user, not in edit mode
    #[must_use]
    pub const fn new(user: User) -> Self {
        Self {
            user,
            original: None,
        }
    }

    /// Current user record, including pending edits
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Whether edit mode is active
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.original.is_some()
    }

    /// Enter edit mode; entering twice keeps the first snapshot
    pub fn begin_edit(&mut self) {
        if self.original.is_none() {
            self.original = Some(self.user.clone());
        }
    }

    /// Apply pending field changes
    ///
    /// # Errors
    ///
    /// Returns `AppError::ResourceLocked` outside edit mode and
    /// `AppError::InvalidInput` for non-positive measurements
    pub fn update(&mut self, update: &ProfileUpdate) -> AppResult<&User> {
        if !self.is_editing() {
            return Err(AppError::locked(
                "Profile is not in edit mode; call edit first",
            ));
        }
        validate_measurement("weight_kg", update.weight_kg)?;
        validate_measurement("height_cm", update.height_cm)?;

        update.apply_to(&mut self.user);
        Ok(&self.user)
    }

    /// Record with pending edits, ready to be persisted
    ///
    /// Edit mode stays active until `save` is called.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ResourceLocked` outside edit mode
    pub fn pending(&self) -> AppResult<&User> {
        if !self.is_editing() {
            return Err(AppError::locked("Profile is not in edit mode"));
        }
        Ok(&self.user)
    }

    /// Leave edit mode keeping the changes
    ///
    /// # Errors
    ///
    /// Returns `AppError::ResourceLocked` outside edit mode
    pub fn save(&mut self) -> AppResult<&User> {
        if self.original.take().is_none() {
            return Err(AppError::locked("Profile is not in edit mode"));
        }
        Ok(&self.user)
    }

    /// Leave edit mode discarding the changes
    ///
    /// Cancelling outside edit mode does nothing.
    pub fn cancel(&mut self) {
        if let Some(original) = self.original.take() {
            self.user = original;
        }
    }

    /// Render the public view as of `today`
    #[must_use]
    pub fn view(&self, today: NaiveDate) -> ProfileView {
        let user = &self.user;
        ProfileView {
            id: user.id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            full_name: user.full_name(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            gender: user.gender,
            date_of_birth: user.date_of_birth,
            age: user.age_on(today),
            weight_kg: user.weight_kg,
            height_cm: user.height_cm,
            bmi: BmiReading::compute(user.weight_kg, user.height_cm).ok(),
            created_at: user.created_at,
            editing: self.is_editing(),
        }
    }
}

fn validate_measurement(field: &str, value: Option<f64>) -> AppResult<()> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(AppError::invalid_input(format!(
            "{field} must be a positive number"
        ))),
        _ => Ok(()),
    }
}
