// SPDX-License-Identifier: MPL-2.0
//! Gallery section: the filter chip row, the card grid, and the show-more
//! control.
//!
//! The grid renders only the cards the active filter left visible. Pressing
//! a card reports the card's index in the full portfolio, not its position
//! in the grid.

use crate::gallery::{Filter, ShowMore, State};
use crate::i18n::fluent::I18n;
use crate::portfolio::Card;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::mouse;
use iced::widget::{button, image, mouse_area, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

/// Cards per grid row.
const COLUMNS: usize = 3;

/// Contextual data needed to render the gallery section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub categories: &'a [String],
    pub cards: &'a [Card],
    pub state: &'a State,
}

/// Messages emitted by the gallery section.
#[derive(Debug, Clone)]
pub enum Message {
    /// A filter chip was pressed.
    FilterSelected(Filter),
    /// The show-more button was pressed.
    ShowMorePressed,
    /// A card was pressed; carries the card's index in the portfolio.
    CardPressed(usize),
}

/// Render the gallery section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG);

    let chips = build_chip_row(&ctx);
    let grid = build_grid(&ctx);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(chips)
        .push(grid);

    if let Some(show_more) = build_show_more(&ctx) {
        content = content.push(show_more);
    }

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .into()
}

/// Build the filter chip row with the all-cards chip first.
fn build_chip_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    row = row.push(build_chip(
        ctx.i18n.tr("filter-all"),
        Filter::All,
        ctx.state.current_filter().is_all(),
    ));

    for category in ctx.categories {
        let filter = Filter::Category(category.clone());
        let is_active = *ctx.state.current_filter() == filter;
        row = row.push(build_chip(category.clone(), filter, is_active));
    }

    row.into()
}

/// Build a single filter chip.
fn build_chip<'a>(label: String, filter: Filter, is_active: bool) -> Element<'a, Message> {
    let chip = button(Text::new(label).size(typography::BODY))
        .on_press(Message::FilterSelected(filter))
        .padding([spacing::XXS, spacing::SM]);

    if is_active {
        chip.style(styles::button::selected).into()
    } else {
        chip.style(styles::button::unselected).into()
    }
}

/// Build the grid of visible cards, `COLUMNS` per row.
fn build_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let visible: Vec<(usize, &Card)> = ctx
        .cards
        .iter()
        .enumerate()
        .filter(|(_, card)| card.visible)
        .collect();

    let mut grid = Column::new().spacing(spacing::MD);
    for chunk in visible.chunks(COLUMNS) {
        let mut row = Row::new().spacing(spacing::MD);
        for (index, card) in chunk {
            row = row.push(build_card(*index, card));
        }
        grid = grid.push(row);
    }

    grid.into()
}

/// Build a single clickable card with its image and title.
fn build_card<'a>(index: usize, card: &'a Card) -> Element<'a, Message> {
    let picture = image(card.image.clone())
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .content_fit(ContentFit::Cover);

    let caption = Container::new(Text::new(card.title.clone()).size(typography::BODY_LG))
        .padding(spacing::SM)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let surface = Container::new(
        Column::new()
            .push(picture)
            .push(caption)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(sizing::CARD_WIDTH))
    .style(styles::container::card);

    mouse_area(surface)
        .on_press(Message::CardPressed(index))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

/// Build the show-more button, if the gallery controller says it should be shown.
fn build_show_more<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let ShowMore::Visible { expanded } = ctx.state.show_more() else {
        return None;
    };

    let key = if expanded {
        "gallery-collapse"
    } else {
        "gallery-show-more"
    };

    let show_more = button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
        .on_press(Message::ShowMorePressed)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    Some(
        Container::new(show_more)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_cards() -> Vec<Card> {
        ["Alley", "Harbor", "Portrait", "Rooftop", "Market"]
            .iter()
            .enumerate()
            .map(|(i, title)| Card {
                title: (*title).to_string(),
                category: Some(if i % 2 == 0 { "street" } else { "portrait" }.to_string()),
                image: PathBuf::from(format!("{title}.jpg")),
                visible: true,
            })
            .collect()
    }

    #[test]
    fn gallery_view_renders() {
        let i18n = I18n::default();
        let categories = vec!["street".to_string(), "portrait".to_string()];
        let mut cards = sample_cards();
        let mut state = State::default();
        state.apply_filter(&mut cards, Filter::All, false);

        let ctx = ViewContext {
            i18n: &i18n,
            categories: &categories,
            cards: &cards,
            state: &state,
        };
        let _element = view(ctx);
    }

    #[test]
    fn gallery_view_renders_expanded() {
        let i18n = I18n::default();
        let categories = vec!["street".to_string(), "portrait".to_string()];
        let mut cards = sample_cards();
        let mut state = State::default();
        state.apply_filter(&mut cards, Filter::All, true);

        let ctx = ViewContext {
            i18n: &i18n,
            categories: &categories,
            cards: &cards,
            state: &state,
        };
        let _element = view(ctx);
    }

    #[test]
    fn gallery_view_renders_with_category_filter() {
        let i18n = I18n::default();
        let categories = vec!["street".to_string(), "portrait".to_string()];
        let mut cards = sample_cards();
        let mut state = State::default();
        state.select(&mut cards, Filter::Category("portrait".to_string()));

        let ctx = ViewContext {
            i18n: &i18n,
            categories: &categories,
            cards: &cards,
            state: &state,
        };
        let _element = view(ctx);
    }

    #[test]
    fn gallery_view_renders_without_cards() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            categories: &[],
            cards: &[],
            state: &State::default(),
        };
        let _element = view(ctx);
    }
}
