// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! This module provides the site title, the theme toggle, and the language
//! menu that appear at the top of the window. The language menu lists every
//! bundled locale and marks the active one.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Site title shown on the left (portfolio title or the app name).
    pub brand: String,
    pub theme_mode: ThemeMode,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    ToggleTheme,
    SelectLanguage(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    ThemeToggled,
    LanguageSelected(LanguageIdentifier),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::ToggleTheme => {
            *menu_open = false;
            Event::ThemeToggled
        }
        Message::SelectLanguage(locale) => {
            *menu_open = false;
            Event::LanguageSelected(locale)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    // Top bar with brand, theme toggle, and language menu button
    let top_bar = build_top_bar(&ctx);
    content = content.push(top_bar);

    // Dropdown menu (if open)
    if ctx.menu_open {
        let dropdown = build_dropdown(&ctx);
        content = content.push(dropdown);
    }

    content.into()
}

/// Build the top bar with brand title, theme toggle button, and language menu button.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.brand.clone()).size(typography::TITLE_SM);

    // The glyph mirrors the active palette, like a day/night indicator
    let theme_glyph = if ctx.theme_mode.is_dark() {
        "🌙"
    } else {
        "☀️"
    };
    let theme_button = button(Text::new(theme_glyph).size(typography::BODY_LG))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS);

    let language_button = button(Text::new("🌐").size(typography::BODY_LG))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(theme_button)
        .push(language_button);

    Container::new(row)
        .width(Length::Fill)
        .style(top_bar_style)
        .into()
}

/// Build the dropdown menu listing the available languages.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.i18n.current_locale().clone();

    let mut menu_column = Column::new().spacing(spacing::XXS);
    for locale in &ctx.i18n.available_locales {
        let name = ctx.i18n.tr(&format!("language-name-{locale}"));
        let label = if *locale == current {
            format!("✓ {name}")
        } else {
            name
        };
        menu_column = menu_column.push(build_menu_item(
            label,
            Message::SelectLanguage(locale.clone()),
        ));
    }

    let dropdown = Container::new(menu_column)
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        });

    // Anchor under the language button on the right edge
    Container::new(dropdown)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding([0.0, spacing::SM])
        .into()
}

/// Build a single menu item.
fn build_menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(menu_item_style)
        .into()
}

/// Style function for the top bar container.
fn top_bar_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Style function for menu items.
fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.weak.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}
