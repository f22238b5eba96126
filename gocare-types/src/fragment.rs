// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `#connect:<url>:<token>` fragment that carries credentials across the
//! forced page reload.
//!
//! Both segments are percent-encoded with the unreserved set of ECMAScript's
//! `encodeURIComponent`, so the url segment never contains a literal `:` and
//! the fragment stays compatible with links built by plain JavaScript.

use once_cell::sync::Lazy;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use thiserror::Error;

use crate::credentials::Credentials;

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static CONNECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#connect:([^:]+):(.+)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    #[error("fragment is not a connect fragment")]
    NotAConnectFragment,
    #[error("connect fragment segment is not valid percent-encoded UTF-8: {0}")]
    InvalidEncoding(String),
}

/// A request to connect, as encoded in the page fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectIntent {
    credentials: Credentials,
}

impl ConnectIntent {
    /// Parses a `location.hash` value (leading `#` included).
    pub fn parse(fragment: &str) -> Result<Self, FragmentError> {
        let captures = CONNECT_RE
            .captures(fragment)
            .ok_or(FragmentError::NotAConnectFragment)?;
        let url = decode_segment(&captures[1])?;
        let token = decode_segment(&captures[2])?;
        let credentials =
            Credentials::new(url, token).map_err(|_| FragmentError::NotAConnectFragment)?;
        Ok(Self { credentials })
    }

    /// Renders the fragment, leading `#` included.
    pub fn to_fragment(&self) -> String {
        format!(
            "#connect:{}:{}",
            encode_component(self.credentials.url()),
            encode_component(self.credentials.token())
        )
    }

    pub fn url(&self) -> &str {
        self.credentials.url()
    }

    pub fn token(&self) -> &str {
        self.credentials.token()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl From<Credentials> for ConnectIntent {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

/// Percent-encodes a value the way `encodeURIComponent` does.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

fn decode_segment(segment: &str) -> Result<String, FragmentError> {
    if has_malformed_escape(segment) {
        return Err(FragmentError::InvalidEncoding(segment.to_string()));
    }
    percent_decode_str(segment)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| FragmentError::InvalidEncoding(segment.to_string()))
}

// `percent_decode_str` passes stray `%` through, `decodeURIComponent` throws.
fn has_malformed_escape(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
    })
}
