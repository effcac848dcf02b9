// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires together the domains (portfolio, gallery, lightbox,
//! localization) and translates messages into side effects like config
//! persistence or portfolio loading. This file intentionally keeps policy
//! decisions (minimum window size, persistence format, localization switching)
//! close to the main update loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::portfolio::Portfolio;
use crate::ui::contact;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    portfolio: Option<Portfolio>,
    gallery: crate::gallery::State,
    lightbox: crate::lightbox::State,
    contact: contact::State,
    theme_mode: ThemeMode,
    /// Whether the language menu is open.
    menu_open: bool,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_portfolio", &self.portfolio.is_some())
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Builds the window settings
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

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            portfolio: None,
            gallery: crate::gallery::State::new(),
            lightbox: crate::lightbox::State::new(),
            contact: contact::State::default(),
            theme_mode: ThemeMode::Dark,
            menu_open: false,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// portfolio loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let task = if let Some(path_str) = flags.file_path {
            update::load_portfolio_from_path(std::path::PathBuf::from(&path_str))
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");

        match self.portfolio.as_ref().and_then(|loaded| loaded.title.clone()) {
            Some(title) => format!("{title} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.lightbox.is_open());
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            portfolio: &mut self.portfolio,
            gallery: &mut self.gallery,
            lightbox: &mut self.lightbox,
            contact: &mut self.contact,
            theme_mode: &mut self.theme_mode,
            menu_open: &mut self.menu_open,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(&mut ctx, lightbox_message)
            }
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::EmptyState(empty_state_message) => {
                update::handle_empty_state_message(empty_state_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::OpenDialogResult(path) => update::handle_open_dialog_result(path),
            Message::PortfolioLoaded(result) => update::handle_portfolio_loaded(&mut ctx, result),
            Message::FileDropped(path) => update::handle_file_dropped(path),
            Message::Tick(_instant) => {
                // Tick notification manager to handle auto-dismiss
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            portfolio: self.portfolio.as_ref(),
            gallery: &self.gallery,
            lightbox: &self.lightbox,
            contact: &self.contact,
            theme_mode: self.theme_mode,
            menu_open: self.menu_open,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, PortfolioError};
    use crate::gallery::{Filter, ShowMore};
    use crate::portfolio::{Card, LoadWarning};
    use crate::ui::{gallery, lightbox, navbar};
    use std::path::PathBuf;
    use unic_langid::LanguageIdentifier;

    fn sample_portfolio() -> Portfolio {
        let categories = ["street", "portrait"];
        let cards = (0..5)
            .map(|index| Card {
                title: format!("Shot {index}"),
                category: Some(categories[index % 2].to_string()),
                image: PathBuf::from(format!("shot-{index}.jpg")),
                visible: false,
            })
            .collect();

        Portfolio {
            title: Some("Sample Portfolio".to_string()),
            categories: vec!["street".to_string(), "portrait".to_string()],
            cards,
        }
    }

    fn app_with_portfolio() -> App {
        let mut app = App::default();
        let _ = app.update(Message::PortfolioLoaded(Ok((
            sample_portfolio(),
            Vec::new(),
        ))));
        app
    }

    #[test]
    fn new_starts_without_portfolio() {
        let (app, _task) = App::new(Flags::default());

        assert!(app.portfolio.is_none());
        assert!(!app.lightbox.is_open());
        assert!(app.contact.is_empty());
    }

    #[test]
    fn default_theme_is_dark() {
        let app = App::default();

        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert!(matches!(app.theme(), Theme::Dark));
    }

    #[test]
    fn theme_toggle_switches_between_light_and_dark() {
        let mut app = App::default();

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert!(matches!(app.theme(), Theme::Light));

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn menu_toggles_open_and_closed() {
        let mut app = App::default();

        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.menu_open);

        let _ = app.update(Message::Navbar(navbar::Message::CloseMenu));
        assert!(!app.menu_open);
    }

    #[test]
    fn language_selection_switches_locale_and_closes_menu() {
        let mut app = App::default();
        let target: LanguageIdentifier = app
            .i18n
            .available_locales
            .iter()
            .find(|locale| locale.to_string() == "zh-TW")
            .cloned()
            .expect("zh-TW should be bundled");

        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        let _ = app.update(Message::Navbar(navbar::Message::SelectLanguage(
            target.clone(),
        )));

        assert_eq!(app.i18n.current_locale(), &target);
        assert!(!app.menu_open);
    }

    #[test]
    fn portfolio_load_shows_first_batch_only() {
        let app = app_with_portfolio();
        let loaded = app.portfolio.as_ref().expect("portfolio should be loaded");

        assert_eq!(crate::gallery::visible_indices(&loaded.cards), vec![0, 1, 2]);
        assert_eq!(
            app.gallery.show_more(),
            ShowMore::Visible { expanded: false }
        );
    }

    #[test]
    fn filter_selection_shows_every_match() {
        let mut app = app_with_portfolio();

        let _ = app.update(Message::Gallery(gallery::Message::FilterSelected(
            Filter::Category("street".to_string()),
        )));

        let loaded = app.portfolio.as_ref().expect("portfolio should be loaded");
        assert_eq!(crate::gallery::visible_indices(&loaded.cards), vec![0, 2, 4]);
        assert_eq!(app.gallery.show_more(), ShowMore::Hidden);
    }

    #[test]
    fn show_more_expands_then_collapses() {
        let mut app = app_with_portfolio();

        let _ = app.update(Message::Gallery(gallery::Message::ShowMorePressed));
        {
            let loaded = app.portfolio.as_ref().expect("portfolio should be loaded");
            assert_eq!(crate::gallery::visible_indices(&loaded.cards).len(), 5);
            assert_eq!(app.gallery.show_more(), ShowMore::Visible { expanded: true });
        }

        let _ = app.update(Message::Gallery(gallery::Message::ShowMorePressed));
        let loaded = app.portfolio.as_ref().expect("portfolio should be loaded");
        assert_eq!(crate::gallery::visible_indices(&loaded.cards), vec![0, 1, 2]);
    }

    #[test]
    fn returning_to_all_resets_expansion() {
        let mut app = app_with_portfolio();

        let _ = app.update(Message::Gallery(gallery::Message::ShowMorePressed));
        let _ = app.update(Message::Gallery(gallery::Message::FilterSelected(
            Filter::Category("street".to_string()),
        )));
        let _ = app.update(Message::Gallery(gallery::Message::FilterSelected(
            Filter::All,
        )));

        let loaded = app.portfolio.as_ref().expect("portfolio should be loaded");
        assert_eq!(crate::gallery::visible_indices(&loaded.cards), vec![0, 1, 2]);
        assert!(!app.gallery.is_expanded());
    }

    #[test]
    fn card_press_opens_lightbox_at_pressed_card() {
        let mut app = app_with_portfolio();

        let _ = app.update(Message::Gallery(gallery::Message::CardPressed(1)));

        assert_eq!(app.lightbox.current(), Some(1));
        assert_eq!(app.lightbox.position(), Some((2, 3)));
    }

    #[test]
    fn card_press_on_hidden_card_is_ignored() {
        let mut app = app_with_portfolio();

        let _ = app.update(Message::Gallery(gallery::Message::CardPressed(4)));

        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn lightbox_navigation_wraps_around() {
        let mut app = app_with_portfolio();
        let _ = app.update(Message::Gallery(gallery::Message::CardPressed(2)));

        let _ = app.update(Message::Lightbox(lightbox::Message::Next));
        assert_eq!(app.lightbox.current(), Some(0));

        let _ = app.update(Message::Lightbox(lightbox::Message::Previous));
        assert_eq!(app.lightbox.current(), Some(2));

        let _ = app.update(Message::Lightbox(lightbox::Message::Close));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn lightbox_keeps_snapshot_when_filter_changes() {
        let mut app = app_with_portfolio();
        let _ = app.update(Message::Gallery(gallery::Message::CardPressed(0)));

        let _ = app.update(Message::Gallery(gallery::Message::FilterSelected(
            Filter::Category("portrait".to_string()),
        )));

        // The open session still walks the set captured when it opened
        let _ = app.update(Message::Lightbox(lightbox::Message::Next));
        assert_eq!(app.lightbox.current(), Some(1));
    }

    #[test]
    fn contact_submit_clears_form_and_acknowledges() {
        let mut app = App::default();

        let _ = app.update(Message::Contact(contact::Message::FieldChanged(
            contact::Field::Name,
            "Kai".to_string(),
        )));
        let _ = app.update(Message::Contact(contact::Message::FieldChanged(
            contact::Field::Message,
            "Nice gallery".to_string(),
        )));
        let _ = app.update(Message::Contact(contact::Message::SubmitPressed));

        assert!(app.contact.is_empty());
        assert!(app
            .notifications
            .visible()
            .any(|notification| notification.message_key() == "contact-ack"));
    }

    #[test]
    fn empty_portfolio_load_keeps_empty_state_and_warns() {
        let mut app = App::default();

        let _ = app.update(Message::PortfolioLoaded(Ok((
            Portfolio::default(),
            Vec::new(),
        ))));

        // No portfolio means the view stays on the empty state, so the open
        // button and drop hint remain reachable
        assert!(app.portfolio.is_none());
        assert!(app
            .notifications
            .visible()
            .any(|notification| notification.message_key() == "notification-portfolio-empty"));
    }

    #[test]
    fn empty_load_over_loaded_portfolio_returns_to_empty_state() {
        let mut app = app_with_portfolio();
        let _ = app.update(Message::Gallery(gallery::Message::CardPressed(0)));
        assert!(app.lightbox.is_open());

        let _ = app.update(Message::PortfolioLoaded(Ok((
            Portfolio::default(),
            Vec::new(),
        ))));

        assert!(app.portfolio.is_none());
        assert!(!app.lightbox.is_open());
        assert_eq!(app.title(), app.i18n.tr("app-title"));
    }

    #[test]
    fn failed_load_pushes_error_toast() {
        let mut app = App::default();

        let _ = app.update(Message::PortfolioLoaded(Err(Error::Portfolio(
            PortfolioError::NotFound("missing.toml".to_string()),
        ))));

        assert!(app.portfolio.is_none());
        assert!(app
            .notifications
            .visible()
            .any(|notification| notification.message_key() == "error-load-portfolio-not-found"));
    }

    #[test]
    fn reload_clears_stale_load_errors() {
        let mut app = App::default();
        let _ = app.update(Message::PortfolioLoaded(Err(Error::Portfolio(
            PortfolioError::NotFound("missing.toml".to_string()),
        ))));

        let _ = app.update(Message::PortfolioLoaded(Ok((
            sample_portfolio(),
            Vec::new(),
        ))));

        assert!(app
            .notifications
            .visible()
            .all(|notification| !notification.message_key().starts_with("error-load-portfolio-")));
    }

    #[test]
    fn load_warnings_surface_as_toasts() {
        let mut app = App::default();
        let warnings = vec![
            LoadWarning::UndeclaredCategory {
                card: "Alley".to_string(),
                category: "night".to_string(),
            },
            LoadWarning::MissingImage {
                card: "Harbor".to_string(),
                image: PathBuf::from("harbor.jpg"),
            },
        ];

        let _ = app.update(Message::PortfolioLoaded(Ok((sample_portfolio(), warnings))));

        let keys: Vec<&str> = app
            .notifications
            .visible()
            .map(|notification| notification.message_key())
            .collect();
        assert!(keys.contains(&"warning-undeclared-category"));
        assert!(keys.contains(&"warning-missing-image"));
    }

    #[test]
    fn loading_replaces_previous_portfolio_and_closes_lightbox() {
        let mut app = app_with_portfolio();
        let _ = app.update(Message::Gallery(gallery::Message::CardPressed(0)));
        assert!(app.lightbox.is_open());

        let _ = app.update(Message::PortfolioLoaded(Ok((
            sample_portfolio(),
            Vec::new(),
        ))));

        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn title_includes_portfolio_title() {
        let mut app = App::default();
        assert_eq!(app.title(), app.i18n.tr("app-title"));

        app.portfolio = Some(sample_portfolio());
        assert!(app.title().contains("Sample Portfolio"));
    }
}
