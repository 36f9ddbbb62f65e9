// ABOUTME: Body Mass Index computation and category classification
// ABOUTME: weight / (height in metres)^2, classified on the one-decimal display value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use crate::errors::{AppError, AppResult};
use healthtrack_core::constants::bmi::{NORMAL_BELOW, OVERWEIGHT_BELOW, UNDERWEIGHT_BELOW};
use serde::{Deserialize, Serialize};

/// BMI category band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 up to 25
    Normal,
    /// 25 up to 30
    Overweight,
    /// 30 and above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn classify(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if bmi < NORMAL_BELOW {
            Self::Normal
        } else if bmi < OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// A computed BMI with its display rounding and category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmiReading {
    /// Unrounded value
    pub value: f64,
    /// Value rounded to one decimal place
    pub display: f64,
    /// Category of the rounded value
    pub category: BmiCategory,
}

impl BmiReading {
    /// Compute BMI from weight in kilograms and height in centimetres
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if either measurement is not a
    /// positive finite number.
    pub fn compute(weight_kg: f64, height_cm: f64) -> AppResult<Self> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Weight must be positive, got {weight_kg}"
            )));
        }
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Height must be positive, got {height_cm}"
            )));
        }

        let height_m = height_cm / 100.0;
        let value = weight_kg / (height_m * height_m);
        let display = (value * 10.0).round() / 10.0;

        Ok(Self {
            value,
            display,
            category: BmiCategory::classify(display),
        })
    }
}
