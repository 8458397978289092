//! Error type shared by card, collection and deck construction.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading cards or building collections and decks.
///
/// Validation rule failures are not errors. They are reported through
/// [`crate::deck::ValidationReport`].
#[derive(Debug, Error)]
pub enum CardError {
    /// Input is not a card mapping, a collection, or a list of cards.
    #[error("unrecognized input format: {0}")]
    UnrecognizedFormat(String),

    /// The card source path does not exist.
    #[error("card source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The card source exists but could not be read.
    #[error("failed to read card source {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A deck needs exactly one identity card.
    #[error("no identity found: expected exactly one identity card, found {found}")]
    NoIdentityFound { found: usize },

    /// A draw asked for more cards than remain.
    #[error("cannot draw {requested} cards, only {available} remaining")]
    InsufficientCards { requested: usize, available: usize },
}

impl CardError {
    pub(crate) fn unrecognized(msg: impl Into<String>) -> Self {
        CardError::UnrecognizedFormat(msg.into())
    }
}
