// SPDX-License-Identifier: MPL-2.0
//! Application root state for the dice game screen.
//!
//! `App` is the owner the components talk to: it holds the selection, the
//! validation message and the current dice face, and implements
//! [`SelectionOwner`] and [`RollRequester`] so component messages turn into
//! state changes here. It refuses to roll until a number is picked; scoring
//! and turn order are not part of this screen.

pub mod paths;

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, DEFAULT_DICE_FACE};
use crate::domain::DieFace;
use crate::i18n::fluent::I18n;
use crate::ui::components::number_selector::{self, SelectionOwner};
use crate::ui::components::roll_dice::{self, RollRequester};
use crate::ui::dice_faces::DiceFaces;
use iced::{window, Element, Task, Theme};
use rand::seq::SliceRandom;
use std::fmt;
use std::path::PathBuf;

/// i18n key of the message shown when a roll is requested without a number.
pub const NO_NUMBER_SELECTED: &str = "error-no-number-selected";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    faces: DiceFaces,
    theme: Theme,
    selection: Option<DieFace>,
    error_message: String,
    current_face: DieFace,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selection", &self.selection)
            .field("error_message", &self.error_message)
            .field("current_face", &self.current_face)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot function; the flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            faces: DiceFaces::default(),
            theme: Theme::Light,
            selection: None,
            error_message: String::new(),
            current_face: DieFace::new(DEFAULT_DICE_FACE).unwrap_or_default(),
        }
    }
}

impl App {
    /// Initializes application state from the CLI flags and `settings.toml`.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let assets_dir = flags
            .assets_dir
            .map(PathBuf::from)
            .or(config.dice.assets_dir);
        let faces = DiceFaces::new(assets_dir.as_deref());

        tracing::info!(
            locale = %i18n.current_locale(),
            theme = ?config.general.theme_mode,
            "starting dice game"
        );

        let app = App {
            i18n,
            faces,
            // System mode queries the desktop, so resolve it once here
            theme: config.general.theme_mode.to_theme(),
            ..Self::default()
        };
        (app, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NumberSelector(message) => number_selector::update(message, self),
            Message::RollDice(message) => roll_dice::update(message, self),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            faces: &self.faces,
            selection: self.selection,
            error_message: &self.error_message,
            current_face: self.current_face,
        })
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn selection(&self) -> Option<DieFace> {
        self.selection
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn current_face(&self) -> DieFace {
        self.current_face
    }
}

impl SelectionOwner for App {
    fn set_selection(&mut self, value: DieFace) {
        tracing::debug!(value = value.value(), "number selected");
        self.selection = Some(value);
    }

    fn set_error_message(&mut self, message: String) {
        self.error_message = message;
    }
}

impl RollRequester for App {
    fn request_roll(&mut self) {
        if self.selection.is_none() {
            self.error_message = self.i18n.tr(NO_NUMBER_SELECTED);
            return;
        }

        let rolled = DieFace::ALL
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default();
        tracing::debug!(
            selected = ?self.selection.map(DieFace::value),
            rolled = rolled.value(),
            "dice rolled"
        );
        self.current_face = rolled;
        self.selection = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::components::number_selector::BLANK_ERROR;

    fn english_app() -> App {
        App {
            i18n: I18n::new(Some("en-US".to_string()), &Config::default()),
            ..App::default()
        }
    }

    #[test]
    fn selecting_a_number_clears_previous_error() {
        let mut app = english_app();
        app.error_message = "You have not selected any number".to_string();

        let _ = app.update(Message::NumberSelector(number_selector::Message::Select(
            DieFace::FIVE,
        )));

        assert_eq!(app.selection(), Some(DieFace::FIVE));
        assert_eq!(app.error_message(), BLANK_ERROR);
    }

    #[test]
    fn rolling_without_selection_sets_error_and_keeps_face() {
        let mut app = english_app();
        let face_before = app.current_face();

        let _ = app.update(Message::RollDice(roll_dice::Message::RollRequested));

        assert_eq!(app.error_message(), "You have not selected any number");
        assert_eq!(app.current_face(), face_before);
    }

    #[test]
    fn rolling_with_selection_clears_it() {
        let mut app = english_app();
        let _ = app.update(Message::NumberSelector(number_selector::Message::Select(
            DieFace::TWO,
        )));

        let _ = app.update(Message::RollDice(roll_dice::Message::RollRequested));

        assert_eq!(app.selection(), None);
        assert!(DieFace::ALL.contains(&app.current_face()));
    }

    #[test]
    fn default_app_shows_first_face_without_selection() {
        let app = App::default();
        assert_eq!(app.current_face(), DieFace::ONE);
        assert!(app.selection().is_none());
        assert!(app.error_message().is_empty());
    }

    #[test]
    fn theme_returns_the_resolved_theme() {
        let app = App {
            theme: Theme::Dark,
            ..App::default()
        };
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(App::default().theme(), Theme::Light);
    }

    #[test]
    fn title_is_localized() {
        let app = english_app();
        assert_eq!(app.title(), "Dice Game");
    }
}
