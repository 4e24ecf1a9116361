// SPDX-License-Identifier: MPL-2.0
//! Game screen components.
//!
//! Each component follows the "state down, messages up" pattern: it renders a
//! read-only [`ViewContext`](number_selector::ViewContext) and forwards its
//! messages to an owner trait in `update`.
//!
//! # Components
//!
//! - [`number_selector`] - Pick one of the six die faces; shows the owner's
//!   validation message
//! - [`roll_dice`] - Current dice face; clicking it requests a roll

pub mod number_selector;
pub mod roll_dice;
