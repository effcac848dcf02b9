// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers for the navbar,
//! the gallery, the lightbox, the contact form, and portfolio loading.

use super::{persistence, Message};
use crate::error::Error;
use crate::gallery::Filter;
use crate::i18n::fluent::I18n;
use crate::portfolio::{self, LoadWarning, Portfolio};
use crate::ui::contact::{self, Event as ContactEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::theming::ThemeMode;
use crate::ui::{empty_state, gallery, lightbox, notifications};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub portfolio: &'a mut Option<Portfolio>,
    pub gallery: &'a mut crate::gallery::State,
    pub lightbox: &'a mut crate::lightbox::State,
    pub contact: &'a mut contact::State,
    pub theme_mode: &'a mut ThemeMode,
    pub menu_open: &'a mut bool,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles navbar component messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ThemeToggled => {
            *ctx.theme_mode = ctx.theme_mode.toggled();
            persistence::persist_theme_mode(*ctx.theme_mode)
        }
        NavbarEvent::LanguageSelected(locale) => {
            persistence::apply_language_change(ctx.i18n, locale)
        }
    }
}

/// Handles gallery section messages.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let Some(loaded) = ctx.portfolio.as_mut() else {
        // Gallery messages cannot arrive without a portfolio; ignore stragglers
        return Task::none();
    };

    match message {
        gallery::Message::FilterSelected(filter) => {
            ctx.gallery.select(&mut loaded.cards, filter);
            Task::none()
        }
        gallery::Message::ShowMorePressed => {
            let expanding = ctx.gallery.toggle_expanded(&mut loaded.cards);
            if expanding {
                // Bring the top of the gallery back into view once it grows
                operation::snap_to(
                    Id::new(super::view::SCROLLABLE_ID),
                    RelativeOffset { x: 0.0, y: 0.0 },
                )
            } else {
                Task::none()
            }
        }
        gallery::Message::CardPressed(index) => {
            ctx.lightbox.open(&loaded.cards, index);
            Task::none()
        }
    }
}

/// Handles lightbox layer messages.
pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox::Message,
) -> Task<Message> {
    match message {
        lightbox::Message::Close => ctx.lightbox.close(),
        lightbox::Message::Previous => ctx.lightbox.previous(),
        lightbox::Message::Next => ctx.lightbox.next(),
        lightbox::Message::ConsumeClick => {}
    }
    Task::none()
}

/// Handles contact form messages.
pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact::Message,
) -> Task<Message> {
    match contact::update(message, ctx.contact) {
        ContactEvent::None => {}
        ContactEvent::Submitted => {
            ctx.notifications
                .push(notifications::Notification::success("contact-ack"));
        }
    }
    Task::none()
}

/// Handles empty state view messages.
pub fn handle_empty_state_message(message: empty_state::Message) -> Task<Message> {
    match message {
        empty_state::Message::OpenPortfolioPressed => handle_open_dialog(),
    }
}

/// Opens the portfolio picker dialog.
///
/// Directories cannot be picked here; they arrive through drag-and-drop or
/// the CLI argument instead.
pub fn handle_open_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Portfolio", &["toml"])
                .add_filter("Images", portfolio::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::OpenDialogResult,
    )
}

/// Handles the result of the open portfolio dialog.
pub fn handle_open_dialog_result(path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };

    load_portfolio_from_path(path)
}

/// Handles a file or directory dropped on the window.
pub fn handle_file_dropped(path: PathBuf) -> Task<Message> {
    load_portfolio_from_path(path)
}

/// Kicks off a background portfolio load; the result arrives as
/// [`Message::PortfolioLoaded`].
pub fn load_portfolio_from_path(path: PathBuf) -> Task<Message> {
    Task::perform(portfolio::load_async(path), Message::PortfolioLoaded)
}

/// Applies a completed portfolio load to the application state.
pub fn handle_portfolio_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<(Portfolio, Vec<LoadWarning>), Error>,
) -> Task<Message> {
    match result {
        Ok((mut loaded, warnings)) => {
            // Stale load-failure toasts are misleading next to a fresh portfolio
            ctx.notifications.clear_load_errors();

            for warning in &warnings {
                let notification = match warning {
                    LoadWarning::UndeclaredCategory { card, category } => {
                        notifications::Notification::warning(warning.i18n_key())
                            .with_arg("card", card)
                            .with_arg("category", category)
                    }
                    LoadWarning::MissingImage { card, .. } => {
                        notifications::Notification::warning(warning.i18n_key())
                            .with_arg("card", card)
                    }
                };
                ctx.notifications.push(notification);
            }

            if loaded.is_empty() {
                ctx.notifications.push(notifications::Notification::warning(
                    "notification-portfolio-empty",
                ));
                // Nothing to show; fall back to the empty state so the open
                // button and drop hint stay reachable
                *ctx.portfolio = None;
                ctx.lightbox.close();
                return Task::none();
            }

            let mut gallery_state = crate::gallery::State::new();
            gallery_state.apply_filter(&mut loaded.cards, Filter::All, false);
            *ctx.gallery = gallery_state;
            *ctx.portfolio = Some(loaded);

            // Card indices from a previous portfolio no longer apply
            ctx.lightbox.close();
        }
        Err(error) => {
            let notification = match &error {
                Error::Portfolio(portfolio_error) => {
                    notifications::Notification::error(portfolio_error.i18n_key())
                        .with_arg("detail", portfolio_error.detail())
                }
                other => notifications::Notification::error("error-load-portfolio-read")
                    .with_arg("detail", other.to_string()),
            };
            ctx.notifications.push(notification);
        }
    }
    Task::none()
}
