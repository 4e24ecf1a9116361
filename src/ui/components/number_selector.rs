// SPDX-License-Identifier: MPL-2.0
//! Number picker offering the six die faces.
//!
//! The selector owns no state. It renders the error message and the current
//! selection handed down by its owner, and turns a click into two requests
//! on that owner: replace the selection, then clear the error message.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::number_selector::{self, ViewContext};
//!
//! // view
//! number_selector::view(ViewContext {
//!     i18n: &self.i18n,
//!     error_message: &self.error_message,
//!     selection: self.selection,
//! })
//! .map(Message::NumberSelector);
//!
//! // update, with `Self: SelectionOwner`
//! number_selector::update(message, self);
//! ```

use crate::domain::DieFace;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Value written to the error message when a new number is picked.
pub const BLANK_ERROR: &str = " ";

/// Receives the change requests emitted by the selector.
pub trait SelectionOwner {
    /// Replaces the current selection.
    fn set_selection(&mut self, value: DieFace);
    /// Replaces the current error message.
    fn set_error_message(&mut self, message: String);
}

/// Contextual data needed to render the selector.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub error_message: &'a str,
    pub selection: Option<DieFace>,
}

/// Messages emitted by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The box for this value was clicked.
    Select(DieFace),
}

/// Visual state of one number box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceStyle {
    Default,
    Selected,
}

/// Chooses the style of the box for `value` given the owner's selection.
#[must_use]
pub fn face_style(value: DieFace, selection: Option<DieFace>) -> FaceStyle {
    if selection == Some(value) {
        FaceStyle::Selected
    } else {
        FaceStyle::Default
    }
}

/// Position of the highlighted box, if any.
#[must_use]
pub fn selected_index(selection: Option<DieFace>) -> Option<usize> {
    DieFace::ALL
        .iter()
        .position(|value| face_style(*value, selection) == FaceStyle::Selected)
}

/// Whether `message` renders as visible text. Blank messages are hidden.
#[must_use]
pub fn is_error_visible(message: &str) -> bool {
    !message.trim().is_empty()
}

/// Text drawn on the error line: the message verbatim, or nothing when blank.
#[must_use]
pub fn error_text(message: &str) -> &str {
    if is_error_visible(message) {
        message
    } else {
        ""
    }
}

/// Process a selector message against its owner.
pub fn update(message: Message, owner: &mut impl SelectionOwner) {
    match message {
        Message::Select(value) => {
            owner.set_selection(value);
            owner.set_error_message(BLANK_ERROR.to_string());
        }
    }
}

/// Render the selector: error text, the six number boxes, then the label.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    // The error row keeps its height when blank so the boxes do not shift
    let error_line = Text::new(error_text(ctx.error_message))
        .size(typography::TITLE_LG)
        .line_height(1.0)
        .height(Length::Fixed(typography::TITLE_LG))
        .style(styles::text::error);

    let boxes = DieFace::ALL
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, value| {
            row.push(face_box(*value, ctx.selection))
        });

    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Right)
        .push(error_line)
        .push(boxes)
        .push(Text::new(ctx.i18n.tr("number-selector-label")).size(typography::TITLE_LG))
        .into()
}

fn face_box<'a>(value: DieFace, selection: Option<DieFace>) -> Element<'a, Message> {
    let label = Container::new(Text::new(value.to_string()).size(typography::TITLE_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let style: fn(&Theme, button::Status) -> button::Style = match face_style(value, selection) {
        FaceStyle::Selected => styles::button::face_selected,
        FaceStyle::Default => styles::button::face_default,
    };

    button(label)
        .width(Length::Fixed(sizing::FACE_BOX))
        .height(Length::Fixed(sizing::FACE_BOX))
        .padding(0)
        .style(style)
        .on_press(Message::Select(value))
        .into()
}
