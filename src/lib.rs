// SPDX-License-Identifier: MPL-2.0
//! `photosite` is a desktop viewer for curated photo portfolios built with
//! the Iced GUI framework.
//!
//! A portfolio is declared in a small TOML manifest or scanned from an image
//! directory, then browsed through a filterable card gallery and a
//! full-window lightbox. The crate demonstrates internationalization with
//! Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/photosite/0.1.0")]

pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod lightbox;
pub mod portfolio;
pub mod ui;
