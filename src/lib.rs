//! Sidebar Navigator - Music Library Sidebar Navigation
//!
//! The navigation core of a music player's sidebar: an "entire library"
//! entry above three hierarchical tag lists (artist, album, genre). It keeps
//! the main view, the list highlights and the sidebar's indicator flags in
//! agreement, and starts playback of the library or a tag group on double
//! click. Widgets, the catalog and the playback engine are reached through
//! traits so that any toolkit or engine can drive it.

pub mod audio;
pub mod config;
pub mod error;
pub mod library;
pub mod logging;
pub mod state;
pub mod ui;

// Re-export key types for convenience
pub use {
    audio::{PlaybackGateway, PlaybackHandle, PlaybackRequest},
    config::{NavigatorSettings, SettingsManager},
    error::{CatalogError, DispatchError, NavigationError},
    library::{CatalogPlaylistFactory, InMemoryCatalog, MetadataField, Playlist, TagCatalog, Track},
    logging::init_tracing,
    state::{NavigationEvent, NavigationState, NavigationStateMachine, UiHandle, ViewMode},
    ui::{PointerClick, SelectionModel, SelectionRegistry, ViewPresenter},
};
