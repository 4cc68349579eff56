//! Benchmarks for applying navigation states and draining the UI queue.

use std::{hint::black_box, sync::Arc};

use criterion::{Criterion, criterion_group, criterion_main};

use sidebar_navigator::{
    CatalogPlaylistFactory, InMemoryCatalog, MetadataField, NavigationEvent, NavigationState,
    NavigationStateMachine, NavigatorSettings, PlaybackHandle, Playlist, PointerClick,
    SelectionRegistry, Track, ViewPresenter, library::PlaylistFactory,
};

struct NullPresenter;

impl ViewPresenter for NullPresenter {
    fn show_library_container(&self) {}

    fn show_playlist(&self, playlist: &Playlist) {
        black_box(playlist);
    }

    fn set_flag(&self, name: &str, on: bool) {
        black_box((name, on));
    }
}

fn catalog(size: usize) -> InMemoryCatalog {
    InMemoryCatalog::new(
        (0..size)
            .map(|i| Track {
                path: format!("/music/{i}.flac"),
                title: format!("Track {i}"),
                artist: Some(format!("Artist {}", i % 50)),
                album: Some(format!("Album {}", i % 200)),
                genre: Some(format!("Genre {}", i % 12)),
            })
            .collect(),
    )
}

fn navigation_benchmarks(c: &mut Criterion) {
    let settings = NavigatorSettings::default();
    let factory = CatalogPlaylistFactory::new(&settings);
    let lists = Arc::new(SelectionRegistry::new());
    let catalog = catalog(5_000);
    factory.refresh_tag_lists(&catalog, lists.as_ref());

    let (playback, _requests) = PlaybackHandle::new();
    let mut machine =
        NavigationStateMachine::new(Arc::new(NullPresenter), lists.clone(), Arc::new(playback));
    machine.start(&settings);

    let artist = factory.filtered_by(MetadataField::Artist, "Artist 7");

    c.bench_function("apply_library_state", |b| {
        b.iter(|| machine.apply_state(black_box(NavigationState::library())));
    });

    c.bench_function("select_and_settle", |b| {
        let mut index = 0;
        b.iter(|| {
            index = (index + 1) % 50;
            lists.select(MetadataField::Album, index);
            machine.settle();
            machine.handle(NavigationEvent::LibraryClicked(PointerClick::single()));
        });
    });

    c.bench_function("enumerate_filtered_playlist", |b| {
        b.iter(|| black_box(artist.tracks(&catalog)).len());
    });
}

criterion_group!(benches, navigation_benchmarks);
criterion_main!(benches);
