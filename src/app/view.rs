// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a single scrollable column (gallery, then contact form) with
//! the navbar pinned above it. The lightbox layer and the toast overlay are
//! stacked on top so they float over whatever the page shows.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::portfolio::Portfolio;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::ThemeMode;
use crate::ui::{contact, empty_state, gallery, lightbox};
use iced::widget::{Column, Id, Scrollable, Stack};
use iced::{Element, Length};

/// Identifier of the page scrollable, used to snap back to the top when the
/// gallery expands.
pub const SCROLLABLE_ID: &str = "page-scrollable";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub portfolio: Option<&'a Portfolio>,
    pub gallery: &'a crate::gallery::State,
    pub lightbox: &'a crate::lightbox::State,
    pub contact: &'a contact::State,
    pub theme_mode: ThemeMode,
    pub menu_open: bool,
    pub notifications: &'a notifications::Manager,
}

/// Renders the application view based on the current state.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = ctx
        .portfolio
        .and_then(|loaded| loaded.title.clone())
        .unwrap_or_else(|| ctx.i18n.tr("app-title"));

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        brand,
        theme_mode: ctx.theme_mode,
        menu_open: ctx.menu_open,
    })
    .map(Message::Navbar);

    let content: Element<'_, Message> = match ctx.portfolio {
        Some(loaded) => view_page(loaded, ctx.i18n, ctx.gallery, ctx.contact),
        None => empty_state::view(ctx.i18n).map(Message::EmptyState),
    };

    let page = Column::new()
        .push(navbar_view)
        .push(content)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new().push(page);

    // Lightbox layer, only while a card is open
    if let Some(loaded) = ctx.portfolio {
        if let (Some(index), Some(position)) = (ctx.lightbox.current(), ctx.lightbox.position()) {
            if let Some(card) = loaded.cards.get(index) {
                stack = stack.push(
                    lightbox::view(lightbox::ViewContext { card, position })
                        .map(Message::Lightbox),
                );
            }
        }
    }

    // Toasts stay topmost so feedback is never hidden by the lightbox
    stack = stack.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));

    stack.into()
}

/// Renders the scrollable page body for a loaded portfolio.
fn view_page<'a>(
    loaded: &'a Portfolio,
    i18n: &'a I18n,
    gallery_state: &'a crate::gallery::State,
    contact_state: &'a contact::State,
) -> Element<'a, Message> {
    let gallery_section = gallery::view(gallery::ViewContext {
        i18n,
        categories: &loaded.categories,
        cards: &loaded.cards,
        state: gallery_state,
    })
    .map(Message::Gallery);

    let contact_section = contact::view(contact_state, i18n).map(Message::Contact);

    let sections = Column::new()
        .push(gallery_section)
        .push(contact_section)
        .width(Length::Fill);

    Scrollable::new(sections)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
