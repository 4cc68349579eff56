//! Tag catalog contract and an in-memory catalog implementation.
//!
//! The sidebar never talks to the persistent store directly. It asks a
//! `TagCatalog` for the distinct values of a field and, when a playlist
//! is enumerated, for the tracks themselves.

use std::{collections::HashSet, fs::read_to_string, path::Path};

use {
    serde::{Deserialize, Serialize},
    serde_json::from_str,
    tracing::{debug, info},
};

use crate::{
    error::{CatalogError, ErrorReporter, ResultExt},
    library::models::{MetadataField, Track},
};

/// Source of tag values and tracks for the sidebar.
pub trait TagCatalog: Send + Sync {
    /// Returns the distinct values known for `field`.
    ///
    /// `None` stands for tracks that carry no value for the field. Callers
    /// are expected to filter it out.
    fn values_for(&self, field: MetadataField) -> Vec<Option<String>>;

    /// Returns every track in the catalog.
    fn tracks(&self) -> Vec<Track>;
}

/// On-disk layout of a catalog snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    tracks: Vec<Track>,
}

/// Catalog backed by a vector of tracks.
///
/// Distinct values are reported in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    tracks: Vec<Track>,
}

impl InMemoryCatalog {
    /// Creates a catalog over the given tracks.
    #[must_use]
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// Loads a catalog snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read and
    /// `CatalogError::Parse` if it is not a valid snapshot.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        debug!("Loading catalog from {:?}", path);
        let contents = read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile = from_str(&contents)?;
        info!(tracks = file.tracks.len(), "Catalog loaded");
        Ok(Self::new(file.tracks))
    }

    /// Loads a catalog snapshot, falling back to an empty catalog.
    ///
    /// An unavailable catalog shows up as empty lists in the sidebar rather
    /// than as a failure.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::from_json_file(path)
            .add_contextf(format!("Loading catalog snapshot {}", path.display()))
        {
            Ok(catalog) => catalog,
            Err(e) => {
                ErrorReporter::warn(&e, "Showing empty tag lists");
                Self::default()
            }
        }
    }

    /// Adds a track to the catalog.
    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Number of tracks in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the catalog holds no tracks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl TagCatalog for InMemoryCatalog {
    fn values_for(&self, field: MetadataField) -> Vec<Option<String>> {
        let mut seen = HashSet::new();
        self.tracks
            .iter()
            .map(|track| track.tag(field).map(str::to_owned))
            .filter(|value| seen.insert(value.clone()))
            .collect()
    }

    fn tracks(&self) -> Vec<Track> {
        self.tracks.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs::write, path::Path};

    use tempfile::tempdir;

    use crate::{
        error::CatalogError,
        library::{
            catalog::{InMemoryCatalog, TagCatalog},
            models::{
                MetadataField::{Artist, Genre},
                Track,
            },
        },
    };

    fn track(title: &str, artist: Option<&str>, genre: Option<&str>) -> Track {
        Track {
            path: format!("/music/{title}.flac"),
            title: title.to_string(),
            artist: artist.map(str::to_string),
            album: None,
            genre: genre.map(str::to_string),
        }
    }

    #[test]
    fn test_values_are_distinct_in_first_seen_order() {
        let catalog = InMemoryCatalog::new(vec![
            track("a", Some("Nina Simone"), Some("Jazz")),
            track("b", Some("Can"), Some("Krautrock")),
            track("c", Some("Nina Simone"), None),
            track("d", None, Some("Jazz")),
        ]);

        assert_eq!(
            catalog.values_for(Artist),
            vec![
                Some("Nina Simone".to_string()),
                Some("Can".to_string()),
                None
            ]
        );
        assert_eq!(
            catalog.values_for(Genre),
            vec![Some("Jazz".to_string()), Some("Krautrock".to_string()), None]
        );
    }

    #[test]
    fn test_empty_catalog_has_no_values() {
        let catalog = InMemoryCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.values_for(Artist).is_empty());
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        write(
            &path,
            r#"{"tracks":[{"path":"/a.flac","title":"A","artist":"Can"},{"path":"/b.flac","title":"B"}]}"#,
        )
        .unwrap();

        let catalog = InMemoryCatalog::from_json_file(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.tracks()[0].artist.as_deref(), Some("Can"));
    }

    #[test]
    fn test_from_json_file_reports_parse_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        write(&path, "{ not json").unwrap();

        let result = InMemoryCatalog::from_json_file(&path);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_or_empty_falls_back_on_missing_file() {
        let catalog = InMemoryCatalog::load_or_empty(Path::new("/nonexistent/catalog.json"));
        assert!(catalog.is_empty());
    }
}
