// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay that renders the focused card above the page, with
//! navigation arrows, a close button, and a position counter.
//!
//! The overlay is a stack layer: a dimmed backdrop that closes on press,
//! with the card content on top. Presses on the content itself are consumed
//! so they never reach the backdrop.

use crate::portfolio::Card;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, mouse_area, text, Column, Container, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Padding,
};

/// Contextual data needed to render the lightbox layer.
pub struct ViewContext<'a> {
    pub card: &'a Card,
    /// 1-based position within the lightbox session, with the session total.
    pub position: (usize, usize),
}

/// Messages emitted by the lightbox layer.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Previous,
    Next,
    /// No-op message to consume presses on the content without closing.
    ConsumeClick,
}

/// Render the lightbox layer to be stacked above the page.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let (position, total) = ctx.position;

    // Dimmed backdrop; pressing it closes the lightbox
    let backdrop = mouse_area(
        Container::new(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::Close);

    let mut stack = Stack::new().push(backdrop);

    // Focused card: image plus caption, centered
    let picture = image(ctx.card.image.clone())
        .width(Length::Fixed(sizing::LIGHTBOX_WIDTH))
        .height(Length::Fixed(sizing::LIGHTBOX_IMAGE_HEIGHT))
        .content_fit(ContentFit::Contain);

    let caption = Text::new(ctx.card.title.clone()).size(typography::TITLE_SM);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(picture)
        .push(caption);

    // Presses on the card content stay on the content
    let content_guard = mouse_area(content).on_press(Message::ConsumeClick);

    stack = stack.push(
        Container::new(content_guard)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    );

    // Navigation arrows on the left and right edges
    let left_arrow = button(Text::new("◀").size(typography::TITLE_LG))
        .padding(spacing::SM)
        .style(styles::button_overlay(palette::WHITE, 0.0, 0.5))
        .on_press(Message::Previous);

    stack = stack.push(
        Container::new(left_arrow)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Left)
            .align_y(Vertical::Center),
    );

    let right_arrow = button(Text::new("▶").size(typography::TITLE_LG))
        .padding(spacing::SM)
        .style(styles::button_overlay(palette::WHITE, 0.0, 0.5))
        .on_press(Message::Next);

    stack = stack.push(
        Container::new(right_arrow)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Center),
    );

    // Close button in the top-right corner
    let close_button = button(Text::new("✕").size(typography::TITLE_MD))
        .padding(spacing::SM)
        .style(styles::button_overlay(palette::WHITE, 0.0, 0.5))
        .on_press(Message::Close);

    stack = stack.push(
        Container::new(close_button)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top),
    );

    // Position counter at bottom center when there is more than one card
    if total > 1 {
        let position_text = format!("{position}/{total}");
        let position_indicator = Container::new(Text::new(position_text).size(typography::BODY))
            .padding(Padding {
                top: spacing::XXS,
                right: spacing::XS,
                bottom: spacing::XXS,
                left: spacing::XS,
            })
            .style(styles::overlay::indicator(12.0));

        stack = stack.push(
            Container::new(position_indicator)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::SM)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Bottom),
        );
    }

    stack.into()
}
