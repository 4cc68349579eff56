//! Single-consumer task queue for the UI dispatch thread.
//!
//! Anything that must touch sidebar state is posted here and run later,
//! in order, by whoever owns the [`UiQueue`]. Posting never runs the task
//! inline, so a widget notification can safely schedule follow-up work
//! on the same widget.

use std::sync::Arc;

use {
    async_channel::{Receiver, Sender, TryRecvError, unbounded},
    parking_lot::Mutex,
    tracing::trace,
};

use crate::{
    error::DispatchError,
    library::{MetadataField, Playlist},
    state::navigation::UiTask,
};

/// The tag selection posted most recently, across all three lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSelection {
    /// Position of this selection in posting order, starting at 1.
    pub generation: u64,
    /// List the selection was made in.
    pub field: MetadataField,
    /// Highlighted playlist.
    pub playlist: Playlist,
}

type SelectionLedger = Arc<Mutex<Option<PendingSelection>>>;

/// Cloneable, thread-safe handle for posting work to a [`UiQueue`].
#[derive(Debug, Clone)]
pub struct UiHandle {
    tx: Sender<UiTask>,
    latest_selection: SelectionLedger,
}

impl UiHandle {
    /// Queues `task` behind everything already posted.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::QueueClosed` once the queue has been dropped.
    pub fn post(&self, task: UiTask) -> Result<(), DispatchError> {
        trace!(?task, "Posting UI task");
        self.tx.try_send(task).map_err(|_| DispatchError::QueueClosed)
    }

    /// Queues a tag transition for the first playlist in `highlighted`.
    ///
    /// Every queued selection gets the next generation number and is
    /// recorded as the latest one.
    ///
    /// # Returns
    ///
    /// `false` if `highlighted` is empty and nothing was queued.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::QueueClosed` once the queue has been dropped.
    pub fn post_selection(
        &self,
        field: MetadataField,
        highlighted: &[Playlist],
    ) -> Result<bool, DispatchError> {
        let Some(playlist) = highlighted.first() else {
            return Ok(false);
        };

        // Held across the send so generations follow queue order.
        let mut latest = self.latest_selection.lock();
        let generation = latest.as_ref().map_or(1, |pending| pending.generation + 1);
        self.post(UiTask::ApplySelection {
            field,
            playlist: playlist.clone(),
            generation,
        })?;
        *latest = Some(PendingSelection {
            generation,
            field,
            playlist: playlist.clone(),
        });
        Ok(true)
    }

    /// Asks the dispatch loop to stop after the work queued so far.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::QueueClosed` once the queue has been dropped.
    pub fn shutdown(&self) -> Result<(), DispatchError> {
        self.post(UiTask::Shutdown)
    }

    /// Whether the queue has been dropped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiving end of the UI task queue.
#[derive(Debug)]
pub struct UiQueue {
    tx: Sender<UiTask>,
    rx: Receiver<UiTask>,
    latest_selection: SelectionLedger,
}

impl Default for UiQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl UiQueue {
    /// Creates an empty, unbounded queue.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self {
            tx,
            rx,
            latest_selection: SelectionLedger::default(),
        }
    }

    /// Returns a handle for posting to this queue.
    #[must_use]
    pub fn handle(&self) -> UiHandle {
        UiHandle {
            tx: self.tx.clone(),
            latest_selection: self.latest_selection.clone(),
        }
    }

    /// The selection posted last through any handle, if any.
    #[must_use]
    pub fn latest_selection(&self) -> Option<PendingSelection> {
        self.latest_selection.lock().clone()
    }

    /// Takes the oldest queued task without waiting.
    #[must_use]
    pub fn try_next(&self) -> Option<UiTask> {
        match self.rx.try_recv() {
            Ok(task) => Some(task),
            Err(TryRecvError::Empty | TryRecvError::Closed) => None,
        }
    }

    /// Waits for the next task.
    pub async fn next(&self) -> Option<UiTask> {
        self.rx.recv().await.ok()
    }

    /// Number of tasks waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Whether no task is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}
