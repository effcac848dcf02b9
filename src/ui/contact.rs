// SPDX-License-Identifier: MPL-2.0
//! Contact form section.
//!
//! The form collects a name, an email address, and a message. Submission
//! does not send anything anywhere: the fields are cleared and the parent
//! application acknowledges with a toast.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Which form field is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Contact form field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl State {
    /// Clears every field.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// Returns whether every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Messages emitted by the contact form.
#[derive(Debug, Clone)]
pub enum Message {
    /// A form field changed.
    FieldChanged(Field, String),
    /// The submit button was pressed.
    SubmitPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The form was submitted; the fields have already been cleared.
    Submitted,
}

/// Process a contact form message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::FieldChanged(field, value) => {
            match field {
                Field::Name => state.name = value,
                Field::Email => state.email = value,
                Field::Message => state.message = value,
            }
            Event::None
        }
        Message::SubmitPressed => {
            state.clear();
            Event::Submitted
        }
    }
}

/// Render the contact form section.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("contact-title")).size(typography::TITLE_LG);

    let name_input = build_field(i18n.tr("contact-name-placeholder"), &state.name, Field::Name);
    let email_input = build_field(
        i18n.tr("contact-email-placeholder"),
        &state.email,
        Field::Email,
    );
    let message_input = build_field(
        i18n.tr("contact-message-placeholder"),
        &state.message,
        Field::Message,
    );

    let submit = button(Text::new(i18n.tr("contact-submit")).size(typography::BODY))
        .on_press(Message::SubmitPressed)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    let form = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(title)
        .push(name_input)
        .push(email_input)
        .push(message_input)
        .push(submit)
        .width(Length::Fixed(sizing::CONTACT_FORM_WIDTH));

    Container::new(form)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .into()
}

/// Build a single form field input.
fn build_field<'a>(placeholder: String, value: &str, field: Field) -> Element<'a, Message> {
    text_input(&placeholder, value)
        .on_input(move |v| Message::FieldChanged(field, v))
        .padding(spacing::XS)
        .size(typography::BODY)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_changes_update_state() {
        let mut state = State::default();

        let event = update(
            Message::FieldChanged(Field::Name, "Ada".to_string()),
            &mut state,
        );
        assert!(matches!(event, Event::None));
        assert_eq!(state.name, "Ada");

        update(
            Message::FieldChanged(Field::Email, "ada@example.com".to_string()),
            &mut state,
        );
        update(
            Message::FieldChanged(Field::Message, "Hello".to_string()),
            &mut state,
        );
        assert_eq!(state.email, "ada@example.com");
        assert_eq!(state.message, "Hello");
    }

    #[test]
    fn submit_clears_fields_and_emits_event() {
        let mut state = State {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        };

        let event = update(Message::SubmitPressed, &mut state);
        assert!(matches!(event, Event::Submitted));
        assert!(state.is_empty());
    }

    #[test]
    fn submit_with_empty_fields_still_emits_event() {
        let mut state = State::default();

        let event = update(Message::SubmitPressed, &mut state);
        assert!(matches!(event, Event::Submitted));
        assert!(state.is_empty());
    }

    #[test]
    fn contact_view_renders() {
        let i18n = I18n::default();
        let state = State::default();
        let _element = view(&state, &i18n);
    }
}
