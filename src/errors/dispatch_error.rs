use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchErrorKind {
    Validation,
    Api,
    Network,
    Setup,
}

/// Single failure for one dispatch. `status_code` is set only for `Api`
/// errors, where it carries the remote HTTP status.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchError {
    pub kind: DispatchErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl DispatchError {
    pub fn new(kind: DispatchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            hint: None,
            details: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(DispatchErrorKind::Validation, message)
    }

    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        let mut err = Self::new(DispatchErrorKind::Api, message);
        err.status_code = Some(status_code);
        err
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(DispatchErrorKind::Network, message)
    }

    pub fn setup(message: impl Into<String>) -> Self {
        Self::new(DispatchErrorKind::Setup, message)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Prefixes the message with the `resource.operation` pair so every
    /// surfaced failure names what was being dispatched.
    pub fn in_context(mut self, resource: &str, operation: &str) -> Self {
        self.message = format!("{}.{}: {}", resource, operation, self.message);
        self
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for DispatchError {}
