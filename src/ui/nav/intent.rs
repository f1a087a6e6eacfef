use crate::ui::nav::state::Screen;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// Push `screen` on top of the current one. Opening the screen that is
    /// already shown does nothing.
    Open(Screen),
    /// Return to the previous screen. No-op on the start screen.
    Back,
}

impl Intent for NavIntent {}
