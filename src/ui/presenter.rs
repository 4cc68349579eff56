//! Contract of the view layer the navigator drives.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::library::Playlist;

/// Visual indicator flags rendered on the library label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorFlag {
    /// The entire library is the active view.
    ActiveLibrary,
    /// The entire library is what is playing.
    PlayingLibrary,
}

impl IndicatorFlag {
    /// Name the view layer keys the flag by.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            IndicatorFlag::ActiveLibrary => "active-library",
            IndicatorFlag::PlayingLibrary => "playing-library",
        }
    }
}

impl Display for IndicatorFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// Renders the main content area and the sidebar's indicator flags.
///
/// All calls happen on the UI dispatch thread.
pub trait ViewPresenter: Send + Sync {
    /// Brings the library view container to the front.
    fn show_library_container(&self);

    /// Renders `playlist` in the main content area.
    fn show_playlist(&self, playlist: &Playlist);

    /// Turns the indicator flag `name` on or off.
    fn set_flag(&self, name: &str, on: bool);
}
