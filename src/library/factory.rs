//! Builds playlists from tag values and fills the sidebar's tag lists.

use tracing::{debug, info};

use crate::{
    config::NavigatorSettings,
    library::{
        catalog::TagCatalog,
        models::MetadataField,
        playlist::{FilteredPlaylist, Playlist},
    },
    ui::selection::{SelectionModel, TagEntry},
};

/// Produces the playlists the sidebar offers.
pub trait PlaylistFactory: Send + Sync {
    /// Playlist of all tracks whose `field` matches `value`.
    fn filtered_by(&self, field: MetadataField, value: &str) -> Playlist;

    /// Playlist of the whole, unfiltered library.
    fn entire_library(&self) -> Playlist {
        Playlist::EntireLibrary
    }
}

/// Outcome of a tag list refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Entries inserted per list, indexed by `MetadataField::index`.
    pub counts: [usize; 3],
    /// Untagged values that were left out.
    pub skipped_untagged: usize,
}

impl RefreshSummary {
    /// Entries inserted into `field`'s list.
    #[must_use]
    pub fn entries(&self, field: MetadataField) -> usize {
        self.counts[field.index()]
    }
}

/// Factory for catalog-backed filtered playlists.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogPlaylistFactory {
    case_sensitive: bool,
    sort_tag_lists: bool,
}

impl CatalogPlaylistFactory {
    /// Creates a factory configured from `settings`.
    #[must_use]
    pub fn new(settings: &NavigatorSettings) -> Self {
        Self {
            case_sensitive: settings.case_sensitive_matching,
            sort_tag_lists: settings.sort_tag_lists,
        }
    }

    /// Rebuilds all three tag lists from the catalog.
    ///
    /// Untagged values are skipped. Entries keep catalog order unless
    /// sorting is enabled.
    pub fn refresh_tag_lists(
        &self,
        catalog: &dyn TagCatalog,
        lists: &dyn SelectionModel,
    ) -> RefreshSummary {
        let mut summary = RefreshSummary::default();

        for field in MetadataField::ALL {
            let values = catalog.values_for(field);
            let total = values.len();

            let mut entries: Vec<TagEntry> = values
                .into_iter()
                .flatten()
                .map(|value| TagEntry::new(self.filtered_by(field, &value)))
                .collect();

            if self.sort_tag_lists {
                entries.sort_by_cached_key(|entry| entry.label.to_lowercase());
            }

            summary.counts[field.index()] = entries.len();
            summary.skipped_untagged += total - entries.len();
            debug!(%field, entries = entries.len(), "Refreshing tag list");
            lists.replace_entries(field, entries);
        }

        info!(
            artists = summary.entries(MetadataField::Artist),
            albums = summary.entries(MetadataField::Album),
            genres = summary.entries(MetadataField::Genre),
            skipped = summary.skipped_untagged,
            "Tag lists refreshed"
        );
        summary
    }
}

impl PlaylistFactory for CatalogPlaylistFactory {
    fn filtered_by(&self, field: MetadataField, value: &str) -> Playlist {
        Playlist::Filtered(FilteredPlaylist::new(field, value, self.case_sensitive))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::NavigatorSettings,
        library::{
            catalog::InMemoryCatalog,
            factory::{CatalogPlaylistFactory, PlaylistFactory},
            models::{
                MetadataField::{self, Album, Artist, Genre},
                Track,
            },
        },
        ui::selection::{SelectionModel, SelectionRegistry},
    };

    fn genre_track(title: &str, genre: Option<&str>) -> Track {
        Track {
            path: format!("/music/{title}.flac"),
            title: title.to_string(),
            artist: None,
            album: None,
            genre: genre.map(str::to_string),
        }
    }

    fn labels(registry: &SelectionRegistry, field: MetadataField) -> Vec<String> {
        registry.entries(field).into_iter().map(|e| e.label).collect()
    }

    #[test]
    fn test_untagged_values_are_skipped() {
        let catalog = InMemoryCatalog::new(vec![
            genre_track("a", Some("Rock")),
            genre_track("b", None),
            genre_track("c", Some("Jazz")),
        ]);
        let registry = SelectionRegistry::new();
        let factory = CatalogPlaylistFactory::new(&NavigatorSettings::default());

        let summary = factory.refresh_tag_lists(&catalog, &registry);

        assert_eq!(labels(&registry, Genre), vec!["Rock", "Jazz"]);
        assert_eq!(summary.entries(Genre), 2);
        // One distinct untagged value per field.
        assert_eq!(summary.skipped_untagged, 3);
        assert!(registry.entries(Artist).is_empty());
        assert!(registry.entries(Album).is_empty());
    }

    #[test]
    fn test_entries_wrap_filtered_playlists() {
        let catalog = InMemoryCatalog::new(vec![genre_track("a", Some("Rock"))]);
        let registry = SelectionRegistry::new();
        let factory = CatalogPlaylistFactory::default();

        factory.refresh_tag_lists(&catalog, &registry);

        let entry = &registry.entries(Genre)[0];
        assert_eq!(entry.playlist, factory.filtered_by(Genre, "Rock"));
        assert_eq!(entry.playlist.tracks(&catalog).len(), 1);
    }

    #[test]
    fn test_sorted_refresh() {
        let catalog = InMemoryCatalog::new(vec![
            genre_track("a", Some("rock")),
            genre_track("b", Some("Ambient")),
            genre_track("c", Some("jazz")),
        ]);
        let registry = SelectionRegistry::new();
        let factory = CatalogPlaylistFactory::new(&NavigatorSettings {
            sort_tag_lists: true,
            ..NavigatorSettings::default()
        });

        factory.refresh_tag_lists(&catalog, &registry);
        assert_eq!(labels(&registry, Genre), vec!["Ambient", "jazz", "rock"]);
    }

    #[test]
    fn test_refresh_replaces_previous_entries() {
        let registry = SelectionRegistry::new();
        let factory = CatalogPlaylistFactory::default();

        factory.refresh_tag_lists(
            &InMemoryCatalog::new(vec![genre_track("a", Some("Rock"))]),
            &registry,
        );
        registry.select(Genre, 0);
        factory.refresh_tag_lists(&InMemoryCatalog::default(), &registry);

        assert!(registry.entries(Genre).is_empty());
        assert!(registry.highlighted_item(Genre).is_none());
    }

    #[test]
    fn test_entire_library_sentinel() {
        assert!(CatalogPlaylistFactory::default().entire_library().is_entire_library());
    }
}
