//! The sidebar's navigation state machine.
//!
//! `NavigationStateMachine` is the single source of truth for what the main
//! area shows and which tag list owns the highlight. Input events are
//! translated into navigation states, and every state is applied as one
//! fixed sequence of presenter and selection updates.

use std::sync::Arc;

use {
    anyhow::Error,
    tokio::{
        sync::broadcast::{Receiver, Sender, channel},
        task::JoinHandle,
    },
    tracing::{debug, info, warn},
};

use crate::{
    audio::{PlaybackGateway, PlaybackWatcher},
    config::NavigatorSettings,
    error::{ErrorReporter, ResultExt},
    library::{MetadataField, Playlist},
    state::{
        dispatcher::{UiHandle, UiQueue},
        navigation::{NavigationEvent, NavigationState, UiTask, ViewMode},
    },
    ui::{IndicatorFlag, PointerClick, SelectionListener, SelectionModel, ViewPresenter},
};

/// Capacity of the applied-state broadcast channel.
const STATE_CHANNEL_CAPACITY: usize = 16;

/// Listener for one tag list's highlight changes.
///
/// Non-empty highlights are turned into a deferred tag transition on the
/// UI queue. Cleared highlights are ignored.
#[derive(Debug, Clone)]
pub struct TagSelectionHandler {
    field: MetadataField,
    ui: UiHandle,
}

impl TagSelectionHandler {
    /// Creates a handler for `field`'s list posting to `ui`.
    #[must_use]
    pub fn new(field: MetadataField, ui: UiHandle) -> Self {
        Self { field, ui }
    }
}

impl SelectionListener for TagSelectionHandler {
    fn on_selection_changed(&self, highlighted: &[Playlist]) {
        if let Err(e) = self
            .ui
            .post_selection(self.field, highlighted)
            .add_contextf(format!("Posting {} selection", self.field))
        {
            ErrorReporter::debug(&e, "Selection change dropped");
        }
    }
}

/// Coordinates the sidebar's view mode, highlights and indicator flags.
pub struct NavigationStateMachine {
    presenter: Arc<dyn ViewPresenter>,
    selection: Arc<dyn SelectionModel>,
    playback: Arc<dyn PlaybackGateway>,
    queue: UiQueue,
    current: NavigationState,
    state_tx: Sender<NavigationState>,
    started: bool,
}

impl NavigationStateMachine {
    /// Creates a machine in the library state.
    ///
    /// Nothing is rendered until [`start`](Self::start) or the first event.
    #[must_use]
    pub fn new(
        presenter: Arc<dyn ViewPresenter>,
        selection: Arc<dyn SelectionModel>,
        playback: Arc<dyn PlaybackGateway>,
    ) -> Self {
        let (state_tx, _) = channel(STATE_CHANNEL_CAPACITY);

        Self {
            presenter,
            selection,
            playback,
            queue: UiQueue::new(),
            current: NavigationState::library(),
            state_tx,
            started: false,
        }
    }

    /// Subscribes to the tag lists and renders the initial state.
    ///
    /// Later calls do nothing.
    pub fn start(&mut self, settings: &NavigatorSettings) {
        if self.started {
            debug!("Navigation already started");
            return;
        }
        self.started = true;

        for field in MetadataField::ALL {
            let handler = TagSelectionHandler::new(field, self.ui_handle());
            self.selection.subscribe(field, Arc::new(handler));
        }

        if settings.show_library_on_startup {
            self.apply_state(NavigationState::library());
        }

        let playing = self.playback.currently_playing();
        self.on_playback_changed(playing.as_ref());
        info!("Navigation started");
    }

    /// Starts forwarding playback changes onto the UI queue.
    ///
    /// Must be called from within a tokio runtime.
    pub fn watch_playback(&self) -> JoinHandle<()> {
        PlaybackWatcher::spawn(self.playback.watch(), self.ui_handle())
    }

    /// Returns a handle for posting work to this machine's UI queue.
    #[must_use]
    pub fn ui_handle(&self) -> UiHandle {
        self.queue.handle()
    }

    /// The state applied last.
    #[must_use]
    pub fn current_state(&self) -> &NavigationState {
        &self.current
    }

    /// Subscribes to every state applied from now on.
    pub fn subscribe(&self) -> Receiver<NavigationState> {
        self.state_tx.subscribe()
    }

    /// Shows `state` in the library view and brings the sidebar in line
    /// with it.
    ///
    /// The library container is shown first, then the active-library flag
    /// is set, then every list except the one that produced a tag state is
    /// cleared, and finally the playlist is rendered.
    pub fn apply_state(&mut self, state: NavigationState) {
        debug!(mode = ?state.mode(), playlist = %state.playlist(), "Applying navigation state");

        self.presenter.show_library_container();
        self.presenter.set_flag(
            IndicatorFlag::ActiveLibrary.name(),
            state.mode() == ViewMode::Library,
        );

        for field in MetadataField::ALL {
            if !state.keeps_highlight(field) {
                self.selection.clear_selection(field);
            }
        }

        self.presenter.show_playlist(state.playlist());

        self.current = state.clone();
        let _ = self.state_tx.send(state);
    }

    /// Reacts to one input event.
    pub fn handle(&mut self, event: NavigationEvent) {
        match event {
            NavigationEvent::LibraryClicked(click) => self.on_library_clicked(click),
            NavigationEvent::TagListClicked { field, click } => {
                self.on_tag_list_clicked(field, click);
            }
            NavigationEvent::SelectionChanged { field, highlighted } => {
                match self.ui_handle().post_selection(field, &highlighted) {
                    Ok(true) => {}
                    Ok(false) => debug!(%field, "Ignoring cleared selection"),
                    Err(e) => ErrorReporter::debug(&Error::from(e), "Selection change dropped"),
                }
            }
            NavigationEvent::PlaybackChanged(playing) => self.on_playback_changed(playing.as_ref()),
        }
    }

    /// Runs the oldest queued task.
    ///
    /// # Returns
    ///
    /// `false` if the queue was empty or the task was a shutdown request.
    pub fn process_next(&mut self) -> bool {
        match self.queue.try_next() {
            Some(UiTask::Shutdown) | None => false,
            Some(task) => {
                self.run_task(task);
                true
            }
        }
    }

    /// Runs queued tasks, including any they queue, until none are left.
    ///
    /// # Returns
    ///
    /// The number of tasks run.
    pub fn settle(&mut self) -> usize {
        let mut processed = 0;
        while self.process_next() {
            processed += 1;
        }
        processed
    }

    /// Runs queued tasks as they arrive until a shutdown request.
    pub async fn run(&mut self) {
        while let Some(task) = self.queue.next().await {
            if task == UiTask::Shutdown {
                info!("Navigation dispatch loop stopped");
                break;
            }
            self.run_task(task);
        }
    }

    fn run_task(&mut self, task: UiTask) {
        match task {
            UiTask::Event(event) => self.handle(event),
            UiTask::ApplySelection {
                field,
                playlist,
                generation,
            } => self.apply_selection(field, playlist, generation),
            UiTask::Shutdown => {}
        }
    }

    /// Switches to the tag state for a highlight, unless it has been
    /// superseded since it was queued.
    ///
    /// A highlight is superseded when its list has moved on, or when a
    /// selection posted after it is still highlighted in its own list.
    fn apply_selection(&mut self, field: MetadataField, playlist: Playlist, generation: u64) {
        if self.selection.highlighted_item(field).as_ref() != Some(&playlist) {
            debug!(%field, %playlist, "Dropping superseded selection");
            return;
        }

        if let Some(latest) = self.queue.latest_selection()
            && latest.generation > generation
            && self.selection.highlighted_item(latest.field).as_ref() == Some(&latest.playlist)
        {
            debug!(
                %field,
                %playlist,
                newer = %latest.field,
                "Dropping selection behind a newer one"
            );
            return;
        }

        match NavigationState::tag(field, playlist) {
            Ok(state) => self.apply_state(state),
            Err(e) => warn!(%field, "Ignoring selection: {e}"),
        }
    }

    fn on_library_clicked(&mut self, click: PointerClick) {
        self.apply_state(NavigationState::library());

        if click.is_primary_double() {
            debug!("Playing entire library");
            self.playback.play(Playlist::EntireLibrary);
        }
    }

    fn on_tag_list_clicked(&mut self, field: MetadataField, click: PointerClick) {
        if !click.is_primary() {
            return;
        }
        self.presenter.show_library_container();

        if click.is_primary_double() {
            match self.selection.highlighted_item(field) {
                Some(playlist) => {
                    debug!(%field, %playlist, "Playing highlighted tag group");
                    self.playback.play(playlist);
                }
                None => debug!(%field, "Double click without highlight"),
            }
        }
    }

    fn on_playback_changed(&self, playing: Option<&Playlist>) {
        let library_playing = playing.is_some_and(Playlist::is_entire_library);
        self.presenter
            .set_flag(IndicatorFlag::PlayingLibrary.name(), library_playing);
    }
}
