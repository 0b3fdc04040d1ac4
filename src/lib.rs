//! Error normalization for a browser extension: message extraction from
//! arbitrary thrown values, error-level logging, classification of known
//! OAuth and subscription errors, and synthesis of a descriptive error from
//! a failed HTTP response.

mod error;
mod http;
mod logging;
mod message;
mod network;
mod oauth;
mod shield;

// Core
pub use error::Error;
pub use http::{BoxError, HttpResponse, NetworkResponse};
pub use network::create_error_from_network_request;

// Normalization and logging
pub use logging::{
    LogCrateSink, LogPayload, LogSink, log_error_with_message, log_error_with_message_to,
};
pub use message::{get_error_message, is_error_with_message, stringify};

// Classifiers
pub use oauth::{OAuthErrorMessage, is_user_cancelled_login_error};
pub use shield::{ShieldError, is_non_ui_subscription_error};
