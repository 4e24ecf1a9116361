// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Labels and validation messages are looked up in Fluent `.ftl` bundles
//! embedded at compile time.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;
