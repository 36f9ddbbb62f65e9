// ABOUTME: User account and anthropometric profile model
// ABOUTME: The single stored user record and its public profile projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Self-reported gender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Any other answer
    Other,
}

/// The stored user record
///
/// Exactly one of these exists at a time; registering again overwrites it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// Login name
    pub username: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Gender
    pub gender: Gender,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimetres
    pub height_cm: f64,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// First and last name joined by a space
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }

    /// Age in whole years on the given day
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let birth = self.date_of_birth;
        let mut years = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        u32::try_from(years).unwrap_or(0)
    }
}

/// Editable profile fields
///
/// Every field is optional so a partial update only touches what was sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    /// New given name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// New height in centimetres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
}

impl ProfileUpdate {
    /// Apply the present fields to a user record
    pub fn apply_to(&self, user: &mut User) {
        if let Some(first_name) = &self.first_name {
            user.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &self.last_name {
            user.last_name.clone_from(last_name);
        }
        if let Some(email) = &self.email {
            user.email.clone_from(email);
        }
        if let Some(phone) = &self.phone {
            user.phone.clone_from(phone);
        }
        if let Some(weight_kg) = self.weight_kg {
            user.weight_kg = weight_kg;
        }
        if let Some(height_cm) = self.height_cm {
            user.height_cm = height_cm;
        }
    }
}
