// SPDX-License-Identifier: MPL-2.0
//! Portfolio model and loaders.
//!
//! A portfolio is an ordered list of cards (image, title, optional category
//! tag). It is either declared in a TOML manifest or synthesized by scanning
//! a directory of images. Card order is manifest order and drives the
//! gallery's "first N" pagination.

use crate::error::{Error, PortfolioError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File extensions recognized by the directory scanner.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Manifest file extension.
const MANIFEST_EXTENSION: &str = "toml";

/// A single gallery entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    /// One of the portfolio's declared tags, or absent.
    pub category: Option<String>,
    pub image: PathBuf,
    /// Derived from the active filter; owned by the gallery controller.
    pub visible: bool,
}

/// An ordered collection of cards plus the declared filter tag set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    pub title: Option<String>,
    /// Filter tags in filter-bar order.
    pub categories: Vec<String>,
    pub cards: Vec<Card>,
}

impl Portfolio {
    /// Returns the total number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the portfolio contains no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Non-fatal issues found while loading a portfolio.
///
/// Warned-about cards are kept; an undeclared category simply never gets a
/// filter chip, and a missing image renders as an empty thumbnail.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadWarning {
    UndeclaredCategory { card: String, category: String },
    MissingImage { card: String, image: PathBuf },
}

impl LoadWarning {
    /// Fluent key for the toast raised for this warning.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LoadWarning::UndeclaredCategory { .. } => "warning-undeclared-category",
            LoadWarning::MissingImage { .. } => "warning-missing-image",
        }
    }
}

// =============================================================================
// Manifest Format
// =============================================================================

/// Raw TOML shape of a portfolio manifest.
#[derive(Debug, Deserialize)]
struct Manifest {
    title: Option<String>,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    cards: Vec<ManifestCard>,
}

#[derive(Debug, Deserialize)]
struct ManifestCard {
    title: Option<String>,
    /// Image path, resolved relative to the manifest's directory.
    image: String,
    category: Option<String>,
}

// =============================================================================
// Loaders
// =============================================================================

/// Loads a portfolio from a manifest file, an image file, or a directory.
///
/// A single image path loads its parent directory so the rest of the shoot
/// shows up alongside it.
pub fn load(path: &Path) -> Result<(Portfolio, Vec<LoadWarning>)> {
    if !path.exists() {
        return Err(PortfolioError::NotFound(path.display().to_string()).into());
    }
    if path.is_dir() {
        return scan_directory(path);
    }
    if is_manifest(path) {
        return load_manifest(path);
    }
    if is_supported_image(path) {
        let parent = path
            .parent()
            .ok_or_else(|| PortfolioError::UnsupportedPath(path.display().to_string()))?;
        return scan_directory(parent);
    }
    Err(PortfolioError::UnsupportedPath(path.display().to_string()).into())
}

/// Loads a portfolio off the UI thread; the result arrives as a message.
pub async fn load_async(path: PathBuf) -> Result<(Portfolio, Vec<LoadWarning>)> {
    tokio::task::spawn_blocking(move || load(&path))
        .await
        .unwrap_or_else(|e| Err(Error::Io(format!("Portfolio load task failed: {e}"))))
}

/// Parses a TOML manifest into a portfolio.
pub fn load_manifest(path: &Path) -> Result<(Portfolio, Vec<LoadWarning>)> {
    let content = std::fs::read_to_string(path)
        .map_err(|error| PortfolioError::Read(error.to_string()))?;
    let manifest: Manifest =
        toml::from_str(&content).map_err(|error| PortfolioError::Parse(error.to_string()))?;

    let base_dir = path
        .parent()
        .ok_or_else(|| PortfolioError::UnsupportedPath(path.display().to_string()))?;

    let mut warnings = Vec::new();
    let mut cards = Vec::with_capacity(manifest.cards.len());
    for entry in manifest.cards {
        let image = base_dir.join(&entry.image);
        let title = entry.title.unwrap_or_else(|| file_stem_title(&image));

        if let Some(category) = &entry.category {
            if !manifest.categories.iter().any(|tag| tag == category) {
                warnings.push(LoadWarning::UndeclaredCategory {
                    card: title.clone(),
                    category: category.clone(),
                });
            }
        }
        if !image.exists() {
            warnings.push(LoadWarning::MissingImage {
                card: title.clone(),
                image: image.clone(),
            });
        }

        cards.push(Card {
            title,
            category: entry.category,
            image,
            visible: false,
        });
    }

    let portfolio = Portfolio {
        title: manifest.title,
        categories: manifest.categories,
        cards,
    };
    Ok((portfolio, warnings))
}

/// Builds an uncategorized portfolio from every supported image in `directory`,
/// in alphabetical file-name order. An empty scan yields an empty portfolio.
pub fn scan_directory(directory: &Path) -> Result<(Portfolio, Vec<LoadWarning>)> {
    let mut images = Vec::new();

    let entries =
        std::fs::read_dir(directory).map_err(|error| PortfolioError::Read(error.to_string()))?;
    for entry in entries {
        let entry = entry.map_err(|error| PortfolioError::Read(error.to_string()))?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let cards = images
        .into_iter()
        .map(|image| Card {
            title: file_stem_title(&image),
            category: None,
            image,
            visible: false,
        })
        .collect();

    let title = directory
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let portfolio = Portfolio {
        title,
        categories: Vec::new(),
        cards,
    };
    Ok((portfolio, Vec::new()))
}

// =============================================================================
// Path Classification
// =============================================================================

/// Checks if a path looks like a portfolio manifest.
fn is_manifest(path: &Path) -> bool {
    extension_lowercase(path)
        .map(|ext| ext == MANIFEST_EXTENSION)
        .unwrap_or(false)
}

/// Checks if a file has a supported image extension.
pub fn is_supported_image(path: &Path) -> bool {
    extension_lowercase(path)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension().and_then(|s| s.to_str()).map(str::to_lowercase)
}

/// Derives a display title from an image file name.
fn file_stem_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
