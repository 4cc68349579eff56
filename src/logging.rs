//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events; embedding applications call
//! [`init_tracing`] once at startup to print them.

use {
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt},
};

/// Installs a formatted tracing subscriber for the current process.
///
/// The filter comes from `RUST_LOG` when it is set and valid, otherwise from
/// `default_filter` (usually `NavigatorSettings::log_filter`).
///
/// # Arguments
///
/// * `default_filter` - Filter directives used when `RUST_LOG` is absent
///
/// # Returns
///
/// `true` if the subscriber was installed, `false` if another global
/// subscriber was already in place.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(default_filter).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        info!("Logging initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use crate::{config::DEFAULT_LOG_FILTER, logging::init_tracing};

    #[test]
    fn test_second_init_is_ignored() {
        // Another test may already have installed a subscriber.
        let _ = init_tracing(DEFAULT_LOG_FILTER);
        assert!(!init_tracing(DEFAULT_LOG_FILTER));
    }

    #[test]
    fn test_invalid_default_filter_does_not_panic() {
        let _ = init_tracing("sidebar_navigator=[");
    }
}
