// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::portfolio::{LoadWarning, Portfolio};
use crate::ui::contact;
use crate::ui::empty_state;
use crate::ui::gallery;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery::Message),
    Lightbox(lightbox::Message),
    Contact(contact::Message),
    EmptyState(empty_state::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the open portfolio dialog.
    OpenDialogResult(Option<PathBuf>),
    /// Result from loading a portfolio in the background.
    PortfolioLoaded(Result<(Portfolio, Vec<LoadWarning>), Error>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `zh-TW`, `en-US`).
    pub lang: Option<String>,
    /// Optional portfolio path to preload on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PHOTOSITE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
