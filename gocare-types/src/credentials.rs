// SPDX-License-Identifier: MIT OR Apache-2.0

//! Media server credentials as typed into the connect form.

use thiserror::Error;

/// Rejection reasons for a credentials pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    /// Either the server URL or the access token is empty.
    #[error("Please provide url and token")]
    Missing,
}

/// A media server endpoint together with the access token for it.
///
/// The token is opaque: it is issued by an external server and only ever
/// carried, never inspected.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    url: String,
    token: String,
}

impl Credentials {
    /// Builds a credentials pair. Both values must be non-empty; whitespace
    /// is left untouched.
    pub fn new(
        url: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let url = url.into();
        let token = token.into();
        if url.is_empty() || token.is_empty() {
            return Err(CredentialsError::Missing);
        }
        Ok(Self { url, token })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

// Tokens must never end up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url)
            .field("token", &"<redacted>")
            .finish()
    }
}
