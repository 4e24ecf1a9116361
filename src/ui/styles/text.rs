// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::Theme;

/// Validation messages shown above the number selector.
pub fn error(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}
