//! Widget initialization errors.

use thiserror::Error;

/// Why a widget declined to activate.
///
/// These are expected outcomes when the page markup does not match the
/// configuration; the markup is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    /// Nothing on the page matches the widget selector.
    #[error("No element matches '{selector}'")]
    SourceMissing { selector: String },

    /// The source control exists but has no options to offer.
    #[error("Source control '{selector}' has no options")]
    NoOptions { selector: String },

    /// A required trigger, close button or overlay is absent.
    #[error("Required element '{selector}' not found")]
    TargetMissing { selector: String },
}

impl InitError {
    pub(crate) fn source_missing(selector: &str) -> Self {
        Self::SourceMissing {
            selector: selector.to_string(),
        }
    }

    pub(crate) fn target_missing(selector: &str) -> Self {
        Self::TargetMissing {
            selector: selector.to_string(),
        }
    }
}
