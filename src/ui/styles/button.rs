// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn face_box(background: Color, text_color: Color, outline: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: outline,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for the number box matching the current selection.
/// Foreground and background are swapped relative to [`face_default`].
pub fn face_selected(theme: &Theme, status: button::Status) -> button::Style {
    let colors = theme.palette();
    let outline = match status {
        button::Status::Hovered => palette::GRAY_400,
        _ => colors.text,
    };
    face_box(colors.text, colors.background, outline)
}

/// Style for every number box that is not selected.
pub fn face_default(theme: &Theme, status: button::Status) -> button::Style {
    let colors = theme.palette();
    match status {
        button::Status::Hovered => face_box(
            if matches!(theme, Theme::Light) {
                palette::GRAY_100
            } else {
                palette::GRAY_700
            },
            colors.text,
            colors.text,
        ),
        _ => face_box(colors.background, colors.text, colors.text),
    }
}

/// Borderless, transparent button wrapping the dice image.
pub fn dice(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::BLACK,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_face_inverts_default_face() {
        for theme in [Theme::Light, Theme::Dark] {
            let selected = face_selected(&theme, button::Status::Active);
            let default = face_default(&theme, button::Status::Active);

            assert_eq!(
                selected.background,
                Some(Background::Color(default.text_color))
            );
            assert_eq!(
                default.background,
                Some(Background::Color(selected.text_color))
            );
        }
    }

    #[test]
    fn light_theme_default_face_is_dark_on_light() {
        let style = face_default(&Theme::Light, button::Status::Active);
        if let Some(Background::Color(bg)) = style.background {
            assert!(bg.r > style.text_color.r);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn hovering_default_face_changes_background() {
        let theme = Theme::Light;
        let active = face_default(&theme, button::Status::Active);
        let hovered = face_default(&theme, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn dice_button_has_no_background() {
        let style = dice(&Theme::Dark, button::Status::Hovered);
        assert!(style.background.is_none());
    }
}
