//!
//! DOM seam for the bootstrap.
//!
//! The sequencer only ever needs three things from the document: drop the
//! loading indicator, flip the app region's `display`, and append an error
//! notice to `body`. [`Page`] names exactly those; the browser implementation
//! lives in the www crate.
//!

use std::fmt;
use thiserror::Error as ThisError;

/// Heading shown above the trace in the error notice.
pub const ERROR_HEADING: &str = "An error happened in Candid canister:";

///
/// PageError
///

#[derive(Debug, ThisError)]
pub enum PageError {
    #[error("element #{0} not found in document")]
    MissingElement(String),

    #[error("document has no body")]
    MissingBody,

    #[error("dom error: {0}")]
    Dom(String),
}

///
/// PageMarkers
/// Element ids of the two regions present in the page skeleton.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PageMarkers {
    pub app: String,
    pub progress: String,
}

impl Default for PageMarkers {
    fn default() -> Self {
        Self {
            app: "app".to_string(),
            progress: "progress".to_string(),
        }
    }
}

///
/// Display
/// CSS `display` values the bootstrap sets.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

///
/// ErrorNotice
/// What gets appended to `body` when the bootstrap fails: the heading as a
/// `div`'s text, then the trace in a `pre` (as text, never markup).
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorNotice {
    pub heading: String,
    pub trace: String,
}

impl ErrorNotice {
    #[must_use]
    pub fn new(trace: impl Into<String>) -> Self {
        Self {
            heading: ERROR_HEADING.to_string(),
            trace: trace.into(),
        }
    }
}

///
/// Page
///

pub trait Page {
    /// Remove the element with `id`. Returns `false` if it was already gone.
    fn remove_element(&self, id: &str) -> bool;

    fn set_display(&self, id: &str, display: Display) -> Result<(), PageError>;

    fn append_error_notice(&self, notice: &ErrorNotice) -> Result<(), PageError>;
}

///
/// TESTS
///
