//! Headless model of the three sidebar tag lists.
//!
//! Each list holds one entry per tag value and at most one highlighted
//! entry. Changes to a list's highlight are reported to the listeners
//! subscribed to that list, after the list itself has been updated.

use std::sync::Arc;

use {parking_lot::RwLock, tracing::debug};

use crate::library::{MetadataField, Playlist};

/// One row of a tag list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    /// Text shown for the row.
    pub label: String,
    /// Playlist the row stands for.
    pub playlist: Playlist,
}

impl TagEntry {
    /// Creates an entry labelled with the playlist's name.
    #[must_use]
    pub fn new(playlist: Playlist) -> Self {
        Self {
            label: playlist.name().to_string(),
            playlist,
        }
    }
}

/// Receives highlight changes for one tag list.
pub trait SelectionListener: Send + Sync {
    /// Called with the list's highlighted playlists after every change.
    ///
    /// An empty slice means the list's highlight was cleared.
    fn on_selection_changed(&self, highlighted: &[Playlist]);
}

/// Contract of the widget holding the three tag lists.
pub trait SelectionModel: Send + Sync {
    /// Replaces the entries of `field`'s list, dropping its highlight.
    fn replace_entries(&self, field: MetadataField, entries: Vec<TagEntry>);

    /// Returns the playlist of `field`'s highlighted entry, if any.
    fn highlighted_item(&self, field: MetadataField) -> Option<Playlist>;

    /// Clears `field`'s highlight.
    fn clear_selection(&self, field: MetadataField);

    /// Registers a listener for highlight changes of `field`'s list.
    fn subscribe(&self, field: MetadataField, listener: Arc<dyn SelectionListener>);
}

#[derive(Debug, Default)]
struct TagList {
    entries: Vec<TagEntry>,
    highlighted: Option<usize>,
}

impl TagList {
    fn highlighted_playlists(&self) -> Vec<Playlist> {
        self.highlighted
            .and_then(|index| self.entries.get(index))
            .map(|entry| vec![entry.playlist.clone()])
            .unwrap_or_default()
    }
}

/// In-process implementation of [`SelectionModel`].
#[derive(Default)]
pub struct SelectionRegistry {
    lists: RwLock<[TagList; 3]>,
    listeners: RwLock<Vec<(MetadataField, Arc<dyn SelectionListener>)>>,
}

impl SelectionRegistry {
    /// Creates a registry with three empty lists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlights the entry at `index` in `field`'s list.
    ///
    /// # Returns
    ///
    /// `false` if `index` is out of range.
    pub fn select(&self, field: MetadataField, index: usize) -> bool {
        let highlighted = {
            let mut lists = self.lists.write();
            let list = &mut lists[field.index()];
            if index >= list.entries.len() {
                return false;
            }
            if list.highlighted == Some(index) {
                return true;
            }
            list.highlighted = Some(index);
            list.highlighted_playlists()
        };

        debug!(%field, index, "Tag list highlight changed");
        self.notify(field, &highlighted);
        true
    }

    /// Highlights the first entry of `field`'s list labelled `label`.
    pub fn select_label(&self, field: MetadataField, label: &str) -> bool {
        let index = self.lists.read()[field.index()]
            .entries
            .iter()
            .position(|entry| entry.label == label);
        index.is_some_and(|index| self.select(field, index))
    }

    /// Returns a copy of `field`'s entries.
    #[must_use]
    pub fn entries(&self, field: MetadataField) -> Vec<TagEntry> {
        self.lists.read()[field.index()].entries.clone()
    }

    /// Fields whose list currently has a highlighted entry.
    #[must_use]
    pub fn highlighted_fields(&self) -> Vec<MetadataField> {
        let lists = self.lists.read();
        MetadataField::ALL
            .into_iter()
            .filter(|field| lists[field.index()].highlighted.is_some())
            .collect()
    }

    fn notify(&self, field: MetadataField, highlighted: &[Playlist]) {
        let listeners: Vec<Arc<dyn SelectionListener>> = self
            .listeners
            .read()
            .iter()
            .filter(|(subscribed, _)| *subscribed == field)
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener.on_selection_changed(highlighted);
        }
    }
}

impl SelectionModel for SelectionRegistry {
    fn replace_entries(&self, field: MetadataField, entries: Vec<TagEntry>) {
        let had_highlight = {
            let mut lists = self.lists.write();
            let list = &mut lists[field.index()];
            list.entries = entries;
            list.highlighted.take().is_some()
        };

        if had_highlight {
            self.notify(field, &[]);
        }
    }

    fn highlighted_item(&self, field: MetadataField) -> Option<Playlist> {
        self.lists.read()[field.index()]
            .highlighted_playlists()
            .into_iter()
            .next()
    }

    fn clear_selection(&self, field: MetadataField) {
        let cleared = self.lists.write()[field.index()].highlighted.take().is_some();
        if cleared {
            debug!(%field, "Tag list highlight cleared");
            self.notify(field, &[]);
        }
    }

    fn subscribe(&self, field: MetadataField, listener: Arc<dyn SelectionListener>) {
        self.listeners.write().push((field, listener));
    }
}
