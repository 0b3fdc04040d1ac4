use serde_json::Value;

use crate::message::{get_error_message, is_error_with_message};

/// What gets handed to a [`LogSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum LogPayload<'a> {
    /// Message extracted from an error-like value.
    Message(String),
    /// Any other value, passed through untouched.
    Structured(&'a Value),
}

/// Destination for error-level log records.
pub trait LogSink {
    fn error(&self, payload: LogPayload<'_>);
}

/// Forwards to the `log` facade. The host application installs the logger.
/// Structured values are attached as the `value` key so structured backends
/// keep their shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn error(&self, payload: LogPayload<'_>) {
        match payload {
            LogPayload::Message(message) => log::error!("{message}"),
            LogPayload::Structured(value) => log::error!(value:serde = value; "{value}"),
        }
    }
}

/// Log `value` at error level through the `log` facade.
pub fn log_error_with_message(value: &Value) {
    log_error_with_message_to(&LogCrateSink, value);
}

/// Log `value` at error level through `sink`.
///
/// Error-like values are reduced to their message; everything else is
/// passed through as-is so structured loggers keep its shape.
pub fn log_error_with_message_to(sink: &(impl LogSink + ?Sized), value: &Value) {
    if is_error_with_message(value) {
        sink.error(LogPayload::Message(get_error_message(value)));
    } else {
        sink.error(LogPayload::Structured(value));
    }
}
