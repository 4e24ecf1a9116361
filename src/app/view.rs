// SPDX-License-Identifier: MPL-2.0
//! View rendering for the game screen.

use super::Message;
use crate::domain::DieFace;
use crate::i18n::fluent::I18n;
use crate::ui::components::{number_selector, roll_dice};
use crate::ui::design_tokens::spacing;
use crate::ui::dice_faces::DiceFaces;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the game screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub faces: &'a DiceFaces,
    pub selection: Option<DieFace>,
    pub error_message: &'a str,
    pub current_face: DieFace,
}

/// Renders the number selector above the dice.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let selector = number_selector::view(number_selector::ViewContext {
        i18n: ctx.i18n,
        error_message: ctx.error_message,
        selection: ctx.selection,
    })
    .map(Message::NumberSelector);

    let dice = roll_dice::view(roll_dice::ViewContext {
        i18n: ctx.i18n,
        face: ctx.current_face,
        faces: ctx.faces,
    })
    .map(Message::RollDice);

    let content = Column::new()
        .width(Length::Fill)
        .push(
            Container::new(selector)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        )
        .push(
            Container::new(dice)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .into()
}
