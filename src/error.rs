//! Error types shared by the portal modules.

use thiserror::Error;

/// Errors raised by page state and navigation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PortalError {
    /// Route parameter names no known role.
    #[error("invalid role: {0}")]
    InvalidRole(String),
    /// Filter key is not one of the page's criteria.
    #[error("unknown filter key `{key}` for {page}")]
    UnknownFilterKey { page: &'static str, key: String },
    /// Role has no registration form.
    #[error("registration is not offered for {0}")]
    RegistrationUnavailable(&'static str),
    /// Password and confirmation differ.
    #[error("Passwords do not match!")]
    PasswordMismatch,
    /// A reply is still being composed or fetched.
    #[error("a reply is already in progress")]
    Busy,
}

/// Errors from the remote chat-completion transport.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("chat endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}
