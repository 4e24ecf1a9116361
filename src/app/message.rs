// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::components::{number_selector, roll_dice};

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NumberSelector(number_selector::Message),
    RollDice(roll_dice::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_DICE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional directory of `dice_{n}.png` face images.
    /// Takes precedence over `[dice] assets_dir` in settings.toml.
    pub assets_dir: Option<String>,
}
