// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core game values with no UI or I/O dependencies.
//!
//! # Modules
//!
//! - [`dice`]: Die face values ([`DieFace`](dice::DieFace))

pub mod dice;

pub use dice::{DieFace, FACE_COUNT};
