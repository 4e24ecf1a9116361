// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration constants.

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Face shown by the dice before the first roll.
pub const DEFAULT_DICE_FACE: u8 = 1;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

const _: () = {
    assert!(DEFAULT_DICE_FACE >= 1);
    assert!(DEFAULT_DICE_FACE <= 6);
};
