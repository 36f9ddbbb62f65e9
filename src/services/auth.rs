// ABOUTME: Registration, placeholder login and logout against the stored user record
// ABOUTME: Hashes passwords with bcrypt and honors the allow-any-login policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

//! Authentication service
//!
//! Registration writes the single user record, replacing any earlier one.
//! Login compares the submitted credentials to that record, but while
//! `allow_any_login` is on a mismatch is accepted and only logged.

use crate::config::AuthConfig;
use crate::database::UserRepository;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use chrono::{DateTime, NaiveDate, Utc};
use healthtrack_core::models::{Gender, User};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

/// Registration form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Login name
    pub username: String,
    /// Password
    pub password: String,
    /// Password confirmation, must equal `password`
    pub confirm_password: String,
    /// Given name
    #[serde(default)]
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
    /// Contact phone
    #[serde(default)]
    pub phone: String,
    /// Gender
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Date of birth
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimetres
    pub height_cm: f64,
}

/// Login form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login name
    pub username: String,
    /// Password
    pub password: String,
}

/// Result of a login attempt that was allowed through
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Stored user, if one is registered
    pub user: Option<User>,
    /// Whether the credentials matched the stored user
    pub credentials_matched: bool,
}

/// Authentication operations over the user repository
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    config: AuthConfig,
}

impl AuthService {
    /// Create a service with the given login policy
    #[must_use]
    pub const fn new(users: UserRepository, config: AuthConfig) -> Self {
        Self { users, config }
    }

    /// Register the user, overwriting any stored record
    ///
    /// # Errors
    ///
    /// Returns an error if the passwords differ, a required field is missing,
    /// a measurement is not positive, hashing fails or the store fails
    pub async fn register(&self, request: RegisterRequest, now: DateTime<Utc>) -> AppResult<User> {
        let username = request.username.trim();
        if username.is_empty() {
            return Err(AppError::missing_field("username"));
        }
        if request.password.is_empty() {
            return Err(AppError::missing_field("password"));
        }
        if request.password != request.confirm_password {
            return Err(AppError::invalid_input("Passwords do not match"));
        }
        let gender = request
            .gender
            .ok_or_else(|| AppError::missing_field("gender"))?;
        let date_of_birth = request
            .date_of_birth
            .ok_or_else(|| AppError::missing_field("date_of_birth"))?;
        for (field, value) in [
            ("weight_kg", request.weight_kg),
            ("height_cm", request.height_cm),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AppError::invalid_input(format!(
                    "{field} must be a positive number"
                )));
            }
        }

        let password_hash = bcrypt::hash(&request.password, self.config.bcrypt_cost)
            .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_owned(),
            password_hash,
            first_name: request.first_name.trim().to_owned(),
            last_name: request.last_name.trim().to_owned(),
            email: request.email.trim().to_owned(),
            phone: request.phone.trim().to_owned(),
            gender,
            date_of_birth,
            weight_kg: request.weight_kg,
            height_cm: request.height_cm,
            created_at: now,
        };

        self.users.save(&user).await?;
        AppLogger::log_auth_event(&user.username, "register", true, None);
        info!(user.id = %user.id, "Registered user");
        Ok(user)
    }

    /// Check credentials against the stored user
    ///
    /// # Errors
    ///
    /// Returns `AppError::AuthInvalid` on mismatch when placeholder login is
    /// disabled, or a storage error
    pub async fn login(&self, request: &LoginRequest) -> AppResult<LoginOutcome> {
        let user = self.users.load().await?;
        let credentials_matched = user.as_ref().is_some_and(|stored| {
            stored.username == request.username
                && bcrypt::verify(&request.password, &stored.password_hash).unwrap_or(false)
        });

        if credentials_matched {
            AppLogger::log_auth_event(&request.username, "login", true, None);
        } else if self.config.allow_any_login {
            AppLogger::log_auth_event(
                &request.username,
                "login",
                true,
                Some("credentials did not match; accepted by placeholder login"),
            );
            warn!(username = %request.username, "Accepting unmatched login");
        } else {
            AppLogger::log_auth_event(&request.username, "login", false, None);
            return Err(AppError::auth_invalid("Invalid username or password"));
        }

        Ok(LoginOutcome {
            user,
            credentials_matched,
        })
    }

    /// Remove the stored user record
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn logout(&self, username: &str) -> AppResult<()> {
        self.users.clear().await?;
        AppLogger::log_auth_event(username, "logout", true, None);
        Ok(())
    }

    /// Persist profile edits over the stored record
    ///
    /// The write is refused when the stored record is gone (logged out) or
    /// belongs to a later registration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ResourceNotFound` when no user is stored,
    /// `AppError::ResourceLocked` when the stored user is a different one, or
    /// a storage error
    pub async fn save_profile(&self, user: &User) -> AppResult<()> {
        let stored = self
            .users
            .load()
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;
        if stored.id != user.id {
            warn!(user.id = %user.id, stored.id = %stored.id, "Refusing stale profile save");
            return Err(AppError::locked(
                "Stored user was replaced by another registration",
            ));
        }

        self.users.save(user).await?;
        info!(user.id = %user.id, "Saved profile");
        Ok(())
    }

    /// Repository this service writes to
    #[must_use]
    pub const fn users(&self) -> &UserRepository {
        &self.users
    }
}
