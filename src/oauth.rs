use std::fmt;

use crate::Error;

/// Known error messages raised around the social login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OAuthErrorMessage {
    /// Authentication server failed to issue an auth token.
    FailedToGetAuthToken,
    /// Authentication server failed to refresh the auth token.
    FailedToGetAuthTokenRefresh,
    /// Authentication server failed to renew the refresh token.
    FailedToRenewRefreshToken,
    /// Authentication server failed to revoke the refresh token.
    FailedToRevokeToken,
    /// Identity API: the user closed or declined the login window (Chromium).
    UserCancelledLogin,
    /// Identity API: the user closed or declined the login window (Firefox).
    UserCancelledLoginFirefox,
    /// The web authentication flow returned without a redirect URL.
    NoRedirectUrlFound,
    /// The `state` in the redirect URL did not match the one sent.
    InvalidOAuthState,
}

impl OAuthErrorMessage {
    pub const ALL: [Self; 8] = [
        Self::FailedToGetAuthToken,
        Self::FailedToGetAuthTokenRefresh,
        Self::FailedToRenewRefreshToken,
        Self::FailedToRevokeToken,
        Self::UserCancelledLogin,
        Self::UserCancelledLoginFirefox,
        Self::NoRedirectUrlFound,
        Self::InvalidOAuthState,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FailedToGetAuthToken => "Failed to get auth token",
            Self::FailedToGetAuthTokenRefresh => "Failed to refresh auth token",
            Self::FailedToRenewRefreshToken => "Failed to renew refresh token",
            Self::FailedToRevokeToken => "Failed to revoke refresh token",
            Self::UserCancelledLogin => "The user did not approve access.",
            Self::UserCancelledLoginFirefox => "User cancelled or denied access.",
            Self::NoRedirectUrlFound => "No redirect URL found",
            Self::InvalidOAuthState => "Invalid OAuth state",
        }
    }

    /// Exact reverse lookup of a message.
    pub fn from_message(message: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == message)
    }
}

impl fmt::Display for OAuthErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a web authentication error means the user cancelled the login.
/// Browsers word the cancellation differently, so both variants match.
pub fn is_user_cancelled_login_error(error: Option<&Error>) -> bool {
    error.is_some_and(|error| {
        matches!(
            OAuthErrorMessage::from_message(error.message()),
            Some(
                OAuthErrorMessage::UserCancelledLogin
                    | OAuthErrorMessage::UserCancelledLoginFirefox
            )
        )
    })
}
