//! Deferred rendering of the app shell until the first render has happened.

use super::theme::{Theme, ThemeReader};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MountGate {
    #[default]
    NotReady,
    Ready,
}

impl MountGate {
    /// Called after every render, only the first call changes the state.
    /// Returns `true` if this call made the gate ready.
    pub fn mounted(&mut self) -> bool {
        match self {
            MountGate::NotReady => {
                *self = MountGate::Ready;
                true
            }
            MountGate::Ready => false,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, MountGate::Ready)
    }
}

/// The providers shell around the page: renders nothing until mounted,
/// then renders with the current theme.
#[derive(Debug)]
pub struct AppShell {
    gate: MountGate,
    theme: ThemeReader,
}

impl AppShell {
    pub fn new(theme: ThemeReader) -> Self {
        Self {
            gate: MountGate::default(),
            theme,
        }
    }

    pub fn mounted(&mut self) -> bool {
        self.gate.mounted()
    }

    /// The theme to render the children with, `None` while not mounted.
    pub fn render(&self) -> Option<Theme> {
        self.gate.is_ready().then(|| self.theme.get())
    }
}
