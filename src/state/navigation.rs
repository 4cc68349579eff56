//! Navigation values: view modes, navigation states and the events that
//! drive transitions between them.

use crate::{
    error::NavigationError,
    library::{MetadataField, Playlist},
    ui::PointerClick,
};

/// What kind of content the main area presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// The entire library (default).
    #[default]
    Library,
    /// Tracks grouped by one tag value.
    Tag,
    /// A user playlist.
    Playlist,
    /// Search results.
    Search,
}

/// What is shown and which tag list owns the highlight.
///
/// States are only built through the constructors below, which keep
/// `mode == Library` exactly when the playlist is the entire library and
/// record a field only for tag states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    mode: ViewMode,
    playlist: Playlist,
    field: Option<MetadataField>,
}

impl NavigationState {
    /// The entire library.
    #[must_use]
    pub fn library() -> Self {
        Self {
            mode: ViewMode::Library,
            playlist: Playlist::EntireLibrary,
            field: None,
        }
    }

    /// A tag group selected in `field`'s list.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::SentinelOutsideLibrary` for the
    /// entire-library playlist.
    pub fn tag(field: MetadataField, playlist: Playlist) -> Result<Self, NavigationError> {
        Self::non_library(ViewMode::Tag, playlist, Some(field))
    }

    /// A user playlist.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::SentinelOutsideLibrary` for the
    /// entire-library playlist.
    pub fn user_playlist(playlist: Playlist) -> Result<Self, NavigationError> {
        Self::non_library(ViewMode::Playlist, playlist, None)
    }

    /// Search results.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::SentinelOutsideLibrary` for the
    /// entire-library playlist.
    pub fn search(playlist: Playlist) -> Result<Self, NavigationError> {
        Self::non_library(ViewMode::Search, playlist, None)
    }

    fn non_library(
        mode: ViewMode,
        playlist: Playlist,
        field: Option<MetadataField>,
    ) -> Result<Self, NavigationError> {
        if playlist.is_entire_library() {
            return Err(NavigationError::SentinelOutsideLibrary { mode });
        }
        Ok(Self {
            mode,
            playlist,
            field,
        })
    }

    /// Current view mode.
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Playlist shown in the main area.
    #[must_use]
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Tag list that produced the selection, for tag states.
    #[must_use]
    pub fn field(&self) -> Option<MetadataField> {
        self.field
    }

    /// Whether `field`'s list keeps its highlight under this state.
    #[must_use]
    pub fn keeps_highlight(&self, field: MetadataField) -> bool {
        self.field == Some(field)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::library()
    }
}

/// Raw input the navigator reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// The library label was clicked.
    LibraryClicked(PointerClick),
    /// An entry of `field`'s list was clicked.
    TagListClicked {
        field: MetadataField,
        click: PointerClick,
    },
    /// `field`'s list highlight changed; empty when it was cleared.
    SelectionChanged {
        field: MetadataField,
        highlighted: Vec<Playlist>,
    },
    /// The playback subsystem switched to another playlist, or stopped.
    PlaybackChanged(Option<Playlist>),
}

/// Work queued for the UI dispatch thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiTask {
    /// Handle an input event.
    Event(NavigationEvent),
    /// Switch to the tag state for `playlist` if `field`'s list still
    /// highlights it and no newer selection is still highlighted.
    ApplySelection {
        field: MetadataField,
        playlist: Playlist,
        generation: u64,
    },
    /// Stop the dispatch loop.
    Shutdown,
}

#[cfg(test)]
mod tests {
    use crate::{
        error::NavigationError,
        library::{
            FilteredPlaylist,
            MetadataField::{Album, Artist, Genre},
            Playlist,
        },
        state::navigation::{NavigationState, ViewMode},
    };

    fn artist(value: &str) -> Playlist {
        Playlist::Filtered(FilteredPlaylist::new(Artist, value, false))
    }

    #[test]
    fn test_library_state() {
        let state = NavigationState::library();
        assert_eq!(state.mode(), ViewMode::Library);
        assert!(state.playlist().is_entire_library());
        assert!(state.field().is_none());
        assert_eq!(state, NavigationState::default());
    }

    #[test]
    fn test_tag_state_keeps_only_its_own_list() {
        let state = NavigationState::tag(Artist, artist("Can")).unwrap();
        assert_eq!(state.mode(), ViewMode::Tag);
        assert!(state.keeps_highlight(Artist));
        assert!(!state.keeps_highlight(Album));
        assert!(!state.keeps_highlight(Genre));
    }

    #[test]
    fn test_sentinel_is_rejected_outside_library() {
        assert_eq!(
            NavigationState::tag(Genre, Playlist::EntireLibrary),
            Err(NavigationError::SentinelOutsideLibrary { mode: ViewMode::Tag })
        );
        assert!(NavigationState::search(Playlist::EntireLibrary).is_err());
        assert!(NavigationState::user_playlist(Playlist::EntireLibrary).is_err());
    }

    #[test]
    fn test_non_tag_states_keep_no_highlight() {
        let state = NavigationState::search(artist("Can")).unwrap();
        assert_eq!(state.mode(), ViewMode::Search);
        assert!(state.field().is_none());

        let state = NavigationState::user_playlist(artist("Can")).unwrap();
        assert_eq!(state.mode(), ViewMode::Playlist);
        assert!(!state.keeps_highlight(Artist));
    }
}
