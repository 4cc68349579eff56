//! Playback gateway contract and the watcher that carries its changes onto
//! the UI dispatch thread.

use {
    async_channel::{Receiver, Sender, unbounded},
    tokio::{
        sync::watch::{Receiver as WatchReceiver, Sender as WatchSender, channel},
        task::JoinHandle,
    },
    tracing::debug,
};

use crate::{
    error::{ErrorReporter, ResultExt},
    library::Playlist,
    state::{NavigationEvent, UiHandle, UiTask},
};

/// Starts playback and reports what is playing.
pub trait PlaybackGateway: Send + Sync {
    /// Starts playing `playlist`.
    fn play(&self, playlist: Playlist);

    /// Playlist currently playing, if any.
    fn currently_playing(&self) -> Option<Playlist>;

    /// Observes the currently playing playlist.
    fn watch(&self) -> WatchReceiver<Option<Playlist>>;
}

/// Requests forwarded to the playback engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackRequest {
    /// Play the given playlist from the start.
    PlayPlaylist(Playlist),
    /// Stop playback.
    Stop,
}

/// Gateway that forwards requests to an engine over a channel.
///
/// The engine consumes [`PlaybackRequest`]s from the receiver returned by
/// [`PlaybackHandle::new`] and reports what it ends up playing through
/// [`PlaybackHandle::set_currently_playing`].
#[derive(Debug, Clone)]
pub struct PlaybackHandle {
    current_tx: WatchSender<Option<Playlist>>,
    request_tx: Sender<PlaybackRequest>,
}

impl PlaybackHandle {
    /// Creates a gateway and the request stream for the engine.
    #[must_use]
    pub fn new() -> (Self, Receiver<PlaybackRequest>) {
        let (current_tx, _) = channel(None);
        let (request_tx, request_rx) = unbounded();
        (
            Self {
                current_tx,
                request_tx,
            },
            request_rx,
        )
    }

    /// Records what the engine is playing and notifies observers.
    pub fn set_currently_playing(&self, playlist: Option<Playlist>) {
        self.current_tx.send_if_modified(|current| {
            if *current == playlist {
                return false;
            }
            *current = playlist;
            true
        });
    }

    /// Asks the engine to stop.
    pub fn stop(&self) {
        self.forward(PlaybackRequest::Stop);
        self.set_currently_playing(None);
    }

    fn forward(&self, request: PlaybackRequest) {
        if let Err(e) = self.request_tx.try_send(request) {
            debug!("PlaybackHandle: Failed to forward request: {e}");
        }
    }
}

impl PlaybackGateway for PlaybackHandle {
    fn play(&self, playlist: Playlist) {
        debug!(%playlist, "Requesting playback");
        self.forward(PlaybackRequest::PlayPlaylist(playlist.clone()));
        self.set_currently_playing(Some(playlist));
    }

    fn currently_playing(&self) -> Option<Playlist> {
        self.current_tx.borrow().clone()
    }

    fn watch(&self) -> WatchReceiver<Option<Playlist>> {
        self.current_tx.subscribe()
    }
}

/// Forwards playback changes to the UI queue.
pub struct PlaybackWatcher;

impl PlaybackWatcher {
    /// Spawns a task that posts a `PlaybackChanged` event for every change
    /// observed on `current`.
    ///
    /// The task ends when the gateway is dropped or the UI queue closes.
    /// Must be called from within a tokio runtime.
    pub fn spawn(mut current: WatchReceiver<Option<Playlist>>, ui: UiHandle) -> JoinHandle<()> {
        tokio::spawn(async move {
            while current.changed().await.is_ok() {
                let playing = current.borrow_and_update().clone();
                let event = NavigationEvent::PlaybackChanged(playing);
                if let Err(e) = ui
                    .post(UiTask::Event(event))
                    .add_context("Forwarding playback change")
                {
                    ErrorReporter::debug(&e, "PlaybackWatcher stopping");
                    break;
                }
            }
        })
    }
}
