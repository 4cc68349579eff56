//! Contracts between the navigator and the sidebar's widgets.
//!
//! This module holds the view-layer traits the navigator drives, the
//! pointer input it reacts to, and a headless model of the three tag lists.

pub mod input;
pub mod presenter;
pub mod selection;

pub use {
    input::{MouseButton, PointerClick},
    presenter::{IndicatorFlag, ViewPresenter},
    selection::{SelectionListener, SelectionModel, SelectionRegistry, TagEntry},
};
