use std::fmt;

use crate::Error;

/// Known subscription (shield) error markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShieldError {
    TabActionFailed,
    StripePaymentCancelled,
    SubscriptionPollingTimedOut,
    PayerAddressAlreadyUsed,
}

impl ShieldError {
    pub const ALL: [Self; 4] = [
        Self::TabActionFailed,
        Self::StripePaymentCancelled,
        Self::SubscriptionPollingTimedOut,
        Self::PayerAddressAlreadyUsed,
    ];

    /// Errors that are recorded for diagnostics but never shown to the user.
    pub const NON_UI: [Self; 2] = [Self::TabActionFailed, Self::StripePaymentCancelled];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TabActionFailed => "tab action failed",
            Self::StripePaymentCancelled => "stripe payment cancelled",
            Self::SubscriptionPollingTimedOut => "subscription polling timed out",
            Self::PayerAddressAlreadyUsed => "payer address is already used by another customer",
        }
    }
}

impl fmt::Display for ShieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a subscription error should be logged but kept out of the UI.
/// Matches on a case-insensitive substring.
pub fn is_non_ui_subscription_error(error: Option<&Error>) -> bool {
    let Some(error) = error.filter(|error| !error.message().is_empty()) else {
        return false;
    };
    let lower_message = error.message().to_lowercase();
    ShieldError::NON_UI
        .iter()
        .any(|kind| lower_message.contains(&kind.as_str().to_lowercase()))
}
