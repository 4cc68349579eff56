//! Data models for the music catalog.
//!
//! This module defines the track record the catalog serves and the
//! metadata fields the sidebar groups tracks by.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Track attribute used to group tracks into a browsable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataField {
    /// Artist tag.
    Artist,
    /// Album tag.
    Album,
    /// Genre tag.
    Genre,
}

impl MetadataField {
    /// All fields, in sidebar order.
    pub const ALL: [MetadataField; 3] = [
        MetadataField::Artist,
        MetadataField::Album,
        MetadataField::Genre,
    ];

    /// Position of this field's list in the sidebar.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            MetadataField::Artist => 0,
            MetadataField::Album => 1,
            MetadataField::Genre => 2,
        }
    }

    /// Lowercase name used in logs and serialized data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MetadataField::Artist => "artist",
            MetadataField::Album => "album",
            MetadataField::Genre => "genre",
        }
    }
}

impl Display for MetadataField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Represents a track in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Track {
    /// File system path to the audio file.
    pub path: String,
    /// Track title.
    pub title: String,
    /// Artist tag (if tagged).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Album tag (if tagged).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Genre tag (if tagged).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl Track {
    /// Returns the value of the given tag, if the track carries one.
    #[must_use]
    pub fn tag(&self, field: MetadataField) -> Option<&str> {
        match field {
            MetadataField::Artist => self.artist.as_deref(),
            MetadataField::Album => self.album.as_deref(),
            MetadataField::Genre => self.genre.as_deref(),
        }
    }
}
