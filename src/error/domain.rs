//! Domain-specific error types using `thiserror`.
//!
//! This module defines the error enums for the different domains of the
//! navigator: navigation state construction, catalog loading and UI
//! task dispatch.

use std::{io::Error as IoError, path::PathBuf};

use {serde_json::Error as SerdeJsonError, thiserror::Error};

use crate::state::ViewMode;

/// Navigation state errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavigationError {
    /// The entire-library playlist may only be shown in library mode.
    #[error("Entire library playlist cannot be shown in {mode:?} mode")]
    SentinelOutsideLibrary { mode: ViewMode },
}

/// Catalog loading errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read the catalog file.
    #[error("Failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: IoError,
    },
    /// Failed to parse the catalog contents.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] SerdeJsonError),
}

/// UI task dispatch errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// The UI queue's receiving side has been dropped.
    #[error("UI queue is closed")]
    QueueClosed,
}
