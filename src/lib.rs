// SPDX-License-Identifier: MPL-2.0
//! `iced_dice` provides the number picker and dice-roll components of a dice
//! game, built with the Iced GUI framework.
//!
//! Both components are stateless views: they render what their owner hands
//! them and report clicks back through owner traits. The [`app`] module hosts
//! them in a window, with Fluent localization and TOML preferences.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
