// ABOUTME: Unified error handling re-exported from the core crate
// ABOUTME: AppError carries an ErrorCode that maps to an HTTP status and JSON body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

pub use healthtrack_core::errors::*;
