// SPDX-License-Identifier: MPL-2.0
//! Clickable dice that asks its owner for a roll.
//!
//! The component only signals intent. It does not draw a random face and
//! never learns the outcome; the owner decides what the next face is and
//! hands it back through [`ViewContext::face`].

use crate::domain::DieFace;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::dice_faces::DiceFaces;
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, tooltip, Column, Text},
    Element,
};

/// Receives roll requests from the dice.
pub trait RollRequester {
    fn request_roll(&mut self);
}

/// Contextual data needed to render the dice.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub face: DieFace,
    pub faces: &'a DiceFaces,
}

/// Messages emitted by the dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    RollRequested,
}

/// Process a dice message against its owner.
pub fn update(message: Message, owner: &mut impl RollRequester) {
    match message {
        Message::RollRequested => owner.request_roll(),
    }
}

/// Render the dice image above its instruction label.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let dice = button(ctx.faces.view(ctx.face))
        .padding(0)
        .style(styles::button::dice)
        .on_press(Message::RollRequested);
    let dice = tooltip(
        dice,
        Text::new(ctx.i18n.tr("roll-dice-image-alt")),
        tooltip::Position::Bottom,
    )
    .gap(spacing::XS);

    Column::new()
        .spacing(spacing::MD)
        .padding(iced::Padding::ZERO.top(spacing::XXL))
        .align_x(Horizontal::Center)
        .push(dice)
        .push(Text::new(ctx.i18n.tr("roll-dice-label")).size(typography::TITLE_LG))
        .into()
}
