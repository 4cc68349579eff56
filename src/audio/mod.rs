//! Boundary to the playback subsystem.
//!
//! The navigator never decodes or outputs audio. It asks a gateway to play
//! playlists and observes what the gateway reports as playing.

pub mod playback;

pub use playback::{PlaybackGateway, PlaybackHandle, PlaybackRequest, PlaybackWatcher};
