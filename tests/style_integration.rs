// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use iced_dice::domain::DieFace;
    use iced_dice::ui::components::number_selector::{face_style, FaceStyle};
    use iced_dice::ui::design_tokens::{sizing, spacing};
    use iced_dice::ui::styles::button;

    #[test]
    fn selected_box_uses_inverted_colors() {
        let theme = Theme::Light;
        let selected = button::face_selected(&theme, Status::Active);
        let default = button::face_default(&theme, Status::Active);

        assert_eq!(
            selected.background,
            Some(Background::Color(default.text_color))
        );
        assert_eq!(selected.text_color, theme.palette().background);
    }

    #[test]
    fn style_choice_matches_value_equality() {
        let selection = DieFace::new(4);
        assert_eq!(face_style(DieFace::FOUR, selection), FaceStyle::Selected);
        assert_eq!(face_style(DieFace::FIVE, selection), FaceStyle::Default);
    }

    #[test]
    fn six_boxes_fit_the_minimum_window() {
        let row_width = sizing::FACE_BOX * 6.0 + spacing::LG * 5.0;
        assert!(row_width < iced_dice::app::MIN_WINDOW_WIDTH as f32);
    }
}
