//! Navigation state management for the sidebar.
//!
//! This module provides the navigation values, the UI dispatch queue and
//! the state machine that turns sidebar input into view changes.


pub mod dispatcher;
pub mod machine;
pub mod navigation;

pub use {
    dispatcher::{UiHandle, UiQueue},
    machine::{NavigationStateMachine, TagSelectionHandler},
    navigation::{NavigationEvent, NavigationState, UiTask, ViewMode},
};
