// ABOUTME: Core types and constants for the Fitbit OAuth API client
// ABOUTME: Foundation crate with the error taxonomy, API constants, and shared request models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitbit Client Core
//!
//! Foundation crate providing the shared vocabulary of the Fitbit API client.
//! It changes rarely, so the rule table and request engine in the main crate
//! can be rebuilt without touching it.
//!
//! ## Modules
//!
//! - **errors**: `ValidationError`, `TransportError`, `ClientError` and `ErrorCode`
//! - **constants**: API host, version prefix, reserved parameter keys, resource-path catalog
//! - **models**: HTTP verbs, response formats, and authentication requirements

/// Structured error taxonomy for validation and transport failures
pub mod errors;

/// API constants organized by domain
pub mod constants;

/// Small shared models used by the rule table and the request builder
pub mod models;
