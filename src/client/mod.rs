//! Client side of the subscription workflow.
//!
//! Everything here runs on the single-threaded UI event loop, so state is owned
//! by its widget and mutated through `&mut self`, never shared behind a lock.

mod api;
mod form;
mod mount;
mod state;
mod theme;

pub use api::{HttpSubscribeApi, SubscribeApi, TransportError, SUBSCRIBE_PATH};
pub use form::{Html5EmailInput, NativeForm, SubmitBlocked, SubmitEvent, SubscriptionForm};
pub use mount::{AppShell, MountGate};
pub use state::{
    ButtonContent, FormState, FormView, ResultStatus, SubscriptionResult, ValidationStatus,
};
pub use theme::{theme_handle, Theme, ThemeReader, ThemeSetter, ThemeSwitch};

/// Shown when the subscribe call could not complete at all.
pub const TRANSPORT_ERROR_MSG: &str = "An error occurred. Please try again.";
