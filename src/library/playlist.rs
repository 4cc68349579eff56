//! Playlists the sidebar can show and play.
//!
//! A playlist is either the entire-library marker or a filter over one
//! metadata field. Filters follow SQL `LIKE` semantics: `%` matches any
//! run of characters, `_` matches a single character, and matching is
//! case-insensitive unless requested otherwise.

use std::fmt::{Display, Formatter, Result as FmtResult};

use {
    regex::{Regex, RegexBuilder, escape},
    tracing::warn,
};

use crate::library::{
    catalog::TagCatalog,
    models::{MetadataField, Track},
};

/// Display name of the entire-library playlist.
pub const ENTIRE_LIBRARY_NAME: &str = "Library";

/// A collection of tracks drawn from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playlist {
    /// All tracks, unfiltered.
    EntireLibrary,
    /// Tracks whose tag matches a value.
    Filtered(FilteredPlaylist),
}

impl Playlist {
    /// Whether this is the entire-library marker.
    #[must_use]
    pub fn is_entire_library(&self) -> bool {
        matches!(self, Playlist::EntireLibrary)
    }

    /// Name shown for this playlist.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Playlist::EntireLibrary => ENTIRE_LIBRARY_NAME,
            Playlist::Filtered(filtered) => filtered.value(),
        }
    }

    /// Whether `track` belongs to this playlist.
    #[must_use]
    pub fn contains(&self, track: &Track) -> bool {
        match self {
            Playlist::EntireLibrary => true,
            Playlist::Filtered(filtered) => filtered.matches(track),
        }
    }

    /// Enumerates the playlist's tracks in catalog order.
    #[must_use]
    pub fn tracks(&self, catalog: &dyn TagCatalog) -> Vec<Track> {
        catalog
            .tracks()
            .into_iter()
            .filter(|track| self.contains(track))
            .collect()
    }
}

impl Display for Playlist {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Playlist::EntireLibrary => f.write_str(ENTIRE_LIBRARY_NAME),
            Playlist::Filtered(filtered) => write!(f, "{}: {}", filtered.field, filtered.value),
        }
    }
}

/// How a filtered playlist compares tag values.
#[derive(Debug, Clone)]
enum TagMatcher {
    /// Compiled `LIKE` pattern.
    Like(Regex),
    /// Plain comparison, used when the pattern cannot be compiled.
    Literal { case_sensitive: bool },
}

/// Playlist of all tracks whose `field` matches `value`.
#[derive(Debug, Clone)]
pub struct FilteredPlaylist {
    field: MetadataField,
    value: String,
    case_sensitive: bool,
    matcher: TagMatcher,
}

impl FilteredPlaylist {
    /// Creates a filter over `field` for `value`.
    #[must_use]
    pub fn new(field: MetadataField, value: impl Into<String>, case_sensitive: bool) -> Self {
        let value = value.into();
        let matcher = match like_to_regex(&value, case_sensitive) {
            Ok(regex) => TagMatcher::Like(regex),
            Err(e) => {
                warn!(%field, value = %value, error = %e, "Falling back to literal tag matching");
                TagMatcher::Literal { case_sensitive }
            }
        };

        Self {
            field,
            value,
            case_sensitive,
            matcher,
        }
    }

    /// Field this playlist filters on.
    #[must_use]
    pub fn field(&self) -> MetadataField {
        self.field
    }

    /// Value this playlist filters for.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether `track` carries a matching tag. Untagged tracks never match.
    #[must_use]
    pub fn matches(&self, track: &Track) -> bool {
        let Some(tag) = track.tag(self.field) else {
            return false;
        };

        match &self.matcher {
            TagMatcher::Like(regex) => regex.is_match(tag),
            TagMatcher::Literal {
                case_sensitive: true,
            } => tag == self.value,
            TagMatcher::Literal {
                case_sensitive: false,
            } => tag.to_lowercase() == self.value.to_lowercase(),
        }
    }
}

impl PartialEq for FilteredPlaylist {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field
            && self.value == other.value
            && self.case_sensitive == other.case_sensitive
    }
}

impl Eq for FilteredPlaylist {}

/// Translates a `LIKE` pattern into an anchored regex.
fn like_to_regex(pattern: &str, case_sensitive: bool) -> Result<Regex, regex::Error> {
    let mut translated = String::with_capacity(pattern.len() + 2);
    translated.push('^');
    for c in pattern.chars() {
        match c {
            '%' => translated.push_str(".*"),
            '_' => translated.push('.'),
            other => translated.push_str(&escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    translated.push('$');

    RegexBuilder::new(&translated)
        .case_insensitive(!case_sensitive)
        .dot_matches_new_line(true)
        .build()
}
