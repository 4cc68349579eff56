//! Pointer input as delivered by the sidebar widgets.

/// Mouse button that produced a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    /// Primary (usually left) button.
    #[default]
    Primary,
    /// Middle button or wheel press.
    Middle,
    /// Secondary (usually right) button.
    Secondary,
}

/// A click on a sidebar element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerClick {
    /// Button that was pressed.
    pub button: MouseButton,
    /// Number of clicks in the current multi-click sequence.
    pub click_count: u32,
}

impl PointerClick {
    /// A single primary-button click.
    #[must_use]
    pub const fn single() -> Self {
        Self {
            button: MouseButton::Primary,
            click_count: 1,
        }
    }

    /// A primary-button double click.
    #[must_use]
    pub const fn double() -> Self {
        Self {
            button: MouseButton::Primary,
            click_count: 2,
        }
    }

    /// Whether the primary button was used.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.button == MouseButton::Primary
    }

    /// Whether this is the second click of a primary-button double click.
    #[must_use]
    pub fn is_primary_double(&self) -> bool {
        self.is_primary() && self.click_count == 2
    }
}
