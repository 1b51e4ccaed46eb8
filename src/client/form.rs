use tracing::{debug, warn};
use validator::ValidateEmail;

use super::{
    api::{SubscribeApi, TransportError},
    state::{FormState, FormView, ResultStatus, SubscriptionResult, ValidationStatus},
    TRANSPORT_ERROR_MSG,
};

// ###################################
// ->   RENDERING LAYER
// ###################################
/// The rendering layer's built-in constraint validation of the email input.
/// The controller never checks the email itself, it only receives events this gate let through.
pub trait NativeForm {
    fn is_valid_email(&self, value: &str) -> bool;
}

/// A required `type="email"` input, checked the way browsers do.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html5EmailInput;

impl NativeForm for Html5EmailInput {
    fn is_valid_email(&self, value: &str) -> bool {
        !value.is_empty() && value.validate_email()
    }
}

/// Why the rendering layer refused to dispatch a submit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("the submit button is disabled")]
    ButtonDisabled,
    #[error("the email is missing")]
    ValueMissing,
    #[error("the email is not a valid email address")]
    TypeMismatch,
}

/// A dispatched form submission.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    /// Keeps the browser from navigating away with a native form post.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

// ###################################
// ->   CONTROLLER
// ###################################
/// Controller of one mounted subscription form.
///
/// At most one subscription succeeds per instance: after a success the input and
/// the button stay disabled until the form is recreated.
#[derive(Debug)]
pub struct SubscriptionForm<A, N = Html5EmailInput> {
    state: FormState,
    api: A,
    native: N,
}

impl<A: SubscribeApi> SubscriptionForm<A> {
    pub fn new(api: A) -> Self {
        Self::with_native_form(api, Html5EmailInput)
    }
}

impl<A: SubscribeApi, N: NativeForm> SubscriptionForm<A, N> {
    pub fn with_native_form(api: A, native: N) -> Self {
        Self {
            state: FormState::default(),
            api,
            native,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn view(&self) -> FormView<'_> {
        self.state.view()
    }

    /// Input `onChange`. Returns `false` if the input is disabled and the edit was dropped.
    pub fn set_email(&mut self, value: impl Into<String>) -> bool {
        if self.state.input_disabled() {
            return false;
        }
        self.state.email = value.into();
        true
    }

    /// What the rendering layer does when the user submits: a disabled button or
    /// an input failing its native checks means no event reaches the handler.
    pub fn request_submit(&self) -> Result<SubmitEvent, SubmitBlocked> {
        if self.state.button_disabled() {
            return Err(SubmitBlocked::ButtonDisabled);
        }
        if self.state.email.is_empty() {
            return Err(SubmitBlocked::ValueMissing);
        }
        if !self.native.is_valid_email(&self.state.email) {
            return Err(SubmitBlocked::TypeMismatch);
        }
        Ok(SubmitEvent::default())
    }

    /// First half of the submit handler, runs before the request is sent.
    /// Returns the email to send.
    pub fn begin(&mut self, event: &mut SubmitEvent) -> String {
        event.prevent_default();
        self.state.is_loading = true;
        self.state.email.clone()
    }

    /// Second half of the submit handler, applies the outcome of the request.
    pub fn settle(&mut self, outcome: Result<SubscriptionResult, TransportError>) {
        match outcome {
            Ok(SubscriptionResult { message, status }) => {
                debug!("subscribe request resolved with status: {}", status.as_ref());
                self.state.message = message;
                self.state.status = status.into();
                self.state.is_loading = false;
                self.state.is_subscribed = status == ResultStatus::Success;
            }
            Err(er) => {
                warn!("subscribe request failed: {er}");
                self.state.message = TRANSPORT_ERROR_MSG.to_string();
                self.state.status = ValidationStatus::Error;
                self.state.is_loading = false;
            }
        }
    }

    /// The form's submit handler: exactly one subscribe call, no retry.
    pub async fn handle_submit(&mut self, mut event: SubmitEvent) {
        let email = self.begin(&mut event);
        let outcome = self.api.subscribe(&email).await;
        self.settle(outcome);
    }

    /// Submits the current email if the rendering layer lets the submission through.
    pub async fn submit(&mut self) -> Result<(), SubmitBlocked> {
        let event = self.request_submit()?;
        self.handle_submit(event).await;
        Ok(())
    }
}
