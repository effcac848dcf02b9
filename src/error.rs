// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Portfolio(PortfolioError),
}

/// Specific error types for portfolio loading issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Path does not exist on disk
    NotFound(String),

    /// Path is neither a portfolio file nor a directory
    UnsupportedPath(String),

    /// Portfolio file could not be parsed
    Parse(String),

    /// File or directory could not be read
    Read(String),
}

impl PortfolioError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PortfolioError::NotFound(_) => "error-load-portfolio-not-found",
            PortfolioError::UnsupportedPath(_) => "error-load-portfolio-unsupported-path",
            PortfolioError::Parse(_) => "error-load-portfolio-parse",
            PortfolioError::Read(_) => "error-load-portfolio-read",
        }
    }

    /// Returns the detail string carried by the variant.
    pub fn detail(&self) -> &str {
        match self {
            PortfolioError::NotFound(s)
            | PortfolioError::UnsupportedPath(s)
            | PortfolioError::Parse(s)
            | PortfolioError::Read(s) => s,
        }
    }
}

impl fmt::Display for PortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortfolioError::NotFound(path) => write!(f, "Portfolio not found: {}", path),
            PortfolioError::UnsupportedPath(path) => {
                write!(f, "Not a portfolio file or directory: {}", path)
            }
            PortfolioError::Parse(msg) => write!(f, "Invalid portfolio file: {}", msg),
            PortfolioError::Read(msg) => write!(f, "Failed to read portfolio: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Portfolio(e) => write!(f, "Portfolio Error: {}", e),
        }
    }
}

impl From<PortfolioError> for Error {
    fn from(err: PortfolioError) -> Self {
        Error::Portfolio(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
