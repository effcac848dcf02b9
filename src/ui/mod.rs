// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Sections
//!
//! - [`gallery`] - Filter chips, the card grid, and the show-more control
//! - [`lightbox`] - Fullscreen overlay for the focused card
//! - [`contact`] - Contact form with a no-op acknowledgment
//! - [`empty_state`] - Welcome view shown before a portfolio is loaded
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Top bar with theme toggle and language menu
//! - [`notifications`] - Toast notification system for user feedback

pub mod contact;
pub mod design_tokens;
pub mod empty_state;
pub mod gallery;
pub mod lightbox;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
