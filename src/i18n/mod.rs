// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization using the Fluent localization system.
//! It handles locale detection, embedded translation bundles, and string
//! formatting.
//!
//! # Features
//!
//! - Locale resolution from CLI flag, config file, or OS settings
//! - `.ftl` translation bundles embedded at compile time
//! - Runtime language switching through the navbar menu
//! - `MISSING: key` fallback when a translation is absent

pub mod fluent;
