// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`components`] - Number selector and roll dice views
//! - [`dice_faces`] - Face image resolution (embedded SVG or custom PNG)
//! - [`styles`] - Centralized button and text styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod components;
pub mod design_tokens;
pub mod dice_faces;
pub mod styles;
pub mod theming;
