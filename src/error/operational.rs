//! Operational error context propagation with `anyhow`.
//!
//! This module provides extension traits and utilities for enhancing
//! error context and centralized error reporting.

use std::{error::Error as StdError, fmt::Display};

use {
    anyhow::{Context, Error, Result as AnyhowResult},
    tracing::{debug, warn},
};

use crate::{
    config::SettingsError,
    error::domain::{CatalogError, DispatchError},
};

/// Extension trait for enhanced error context.
///
/// This trait provides methods to add contextual information to errors,
/// making debugging and user feedback more informative.
pub trait ResultExt<T, E> {
    /// Adds context to an error with a static string.
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static;

    /// Adds context to an error with a formatted string.
    fn add_contextf(self, format: impl Display) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.context(context)
    }

    fn add_contextf(self, format: impl Display) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.context(format.to_string())
    }
}

/// Centralized error reporting and logging.
pub struct ErrorReporter;

impl ErrorReporter {
    /// Reports an error that only matters while debugging, such as work
    /// dropped during shutdown.
    pub fn debug(error: &Error, context: &str) {
        debug!(context = context, error = %format!("{error:#}"), "Dropped work");
    }

    /// Reports a recoverable error together with the message a user
    /// would see for it.
    pub fn warn(error: &Error, context: &str) {
        warn!(
            context = context,
            error = %error,
            user_message = %Self::to_user_message(error),
            "Recoverable error"
        );
    }

    /// Converts an error to a message suitable for the status area.
    ///
    /// Known domain errors anywhere in the chain get a short fixed message;
    /// anything else falls back to the top-level error text.
    pub fn to_user_message(error: &Error) -> String {
        for cause in error.chain() {
            if let Some(catalog) = cause.downcast_ref::<CatalogError>() {
                return match catalog {
                    CatalogError::Io { .. } => "Music catalog could not be read".to_string(),
                    CatalogError::Parse(_) => "Music catalog is damaged".to_string(),
                };
            }
            if cause.downcast_ref::<SettingsError>().is_some() {
                return "Settings could not be loaded, defaults are in use".to_string();
            }
            if cause.downcast_ref::<DispatchError>().is_some() {
                return "The sidebar is shutting down".to_string();
            }
        }
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
        io::{Error as IoError, ErrorKind::NotFound},
        path::PathBuf,
    };

    use {anyhow::anyhow, serde_json::from_str};

    use crate::error::{
        domain::{CatalogError, DispatchError},
        operational::{ErrorReporter, ResultExt},
    };

    #[derive(Debug)]
    struct TestError;

    impl Display for TestError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            write!(f, "Test error")
        }
    }

    impl Error for TestError {}

    #[test]
    fn test_result_ext_with_context() {
        let result: Result<i32, TestError> = Err(TestError);
        let error = result.add_context("Additional context").unwrap_err();
        assert!(error.to_string().contains("Additional context"));
    }

    #[test]
    fn test_result_ext_with_contextf() {
        let result: Result<i32, TestError> = Err(TestError);
        let error = result.add_contextf(format!("Loading {}", "catalog.json")).unwrap_err();
        assert!(error.to_string().contains("Loading catalog.json"));
    }

    #[test]
    fn test_user_message_for_unknown_error() {
        let error = anyhow!("Test error message");
        assert_eq!(ErrorReporter::to_user_message(&error), "Test error message");
    }

    #[test]
    fn test_user_message_for_catalog_parse_error() {
        let parse_error = from_str::<Vec<u8>>("not json").unwrap_err();
        let result: Result<(), CatalogError> = Err(CatalogError::Parse(parse_error));
        let error = result.add_context("Refreshing sidebar").unwrap_err();
        assert_eq!(ErrorReporter::to_user_message(&error), "Music catalog is damaged");
    }

    #[test]
    fn test_user_message_looks_through_formatted_context() {
        let result: Result<(), CatalogError> = Err(CatalogError::Io {
            path: PathBuf::from("/music/catalog.json"),
            source: IoError::new(NotFound, "missing"),
        });
        let error = result
            .add_contextf(format!("Loading catalog snapshot {}", "/music/catalog.json"))
            .unwrap_err();

        assert!(error.to_string().contains("/music/catalog.json"));
        assert_eq!(
            ErrorReporter::to_user_message(&error),
            "Music catalog could not be read"
        );
    }

    #[test]
    fn test_user_message_for_dispatch_error() {
        let error = anyhow::Error::new(DispatchError::QueueClosed);
        assert_eq!(
            ErrorReporter::to_user_message(&error),
            "The sidebar is shutting down"
        );
    }
}
