//! Music catalog access and playlist construction.
//!
//! This module provides the track model, the catalog contract the sidebar
//! reads tag values from, and the playlists built on top of it.

pub mod catalog;
pub mod factory;
pub mod models;
pub mod playlist;

pub use {
    catalog::{InMemoryCatalog, TagCatalog},
    factory::{CatalogPlaylistFactory, PlaylistFactory, RefreshSummary},
    models::{MetadataField, Track},
    playlist::{ENTIRE_LIBRARY_NAME, FilteredPlaylist, Playlist},
};
