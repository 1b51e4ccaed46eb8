use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;

// ###################################
// ->   STRUCTS
// ###################################
/// Drives the validation display of the email field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ValidationStatus {
    #[default]
    None,
    Success,
    Error,
}

/// Outcome of a subscribe call that reached the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResultStatus {
    Success,
    Error,
}

/// What the client makes of a server response. Recreated on every submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionResult {
    pub message: String,
    pub status: ResultStatus,
}

/// State of one form instance. It only resets when the form is recreated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub(super) email: String,
    pub(super) message: String,
    pub(super) status: ValidationStatus,
    pub(super) is_loading: bool,
    pub(super) is_subscribed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonContent {
    Spinner { label: &'static str },
    Text(&'static str),
}

/// Everything the rendering layer needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView<'a> {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: &'a str,
    pub validation_status: ValidationStatus,
    pub validation_message: &'a str,
    pub input_disabled: bool,
    pub button_disabled: bool,
    pub button: ButtonContent,
}

// ###################################
// ->   IMPLs
// ###################################
impl From<ResultStatus> for ValidationStatus {
    fn from(value: ResultStatus) -> Self {
        match value {
            ResultStatus::Success => ValidationStatus::Success,
            ResultStatus::Error => ValidationStatus::Error,
        }
    }
}

impl ResultStatus {
    /// Only the HTTP status decides, never the body.
    pub fn from_http_success(is_success: bool) -> Self {
        if is_success {
            ResultStatus::Success
        } else {
            ResultStatus::Error
        }
    }
}

impl FormState {
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn status(&self) -> ValidationStatus {
        self.status
    }
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
    pub fn is_subscribed(&self) -> bool {
        self.is_subscribed
    }

    pub fn input_disabled(&self) -> bool {
        self.is_subscribed
    }
    pub fn button_disabled(&self) -> bool {
        self.is_subscribed || self.is_loading
    }

    pub fn view(&self) -> FormView<'_> {
        let button = if self.is_loading {
            ButtonContent::Spinner {
                label: "Subscribing",
            }
        } else {
            ButtonContent::Text("Subscribe")
        };

        FormView {
            label: "Email address",
            placeholder: "Enter your email address...",
            value: &self.email,
            validation_status: self.status,
            validation_message: &self.message,
            input_disabled: self.input_disabled(),
            button_disabled: self.button_disabled(),
            button,
        }
    }
}
