/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Target-independent pieces of the voice demo page.
//!
//! Nothing in here touches the browser, so everything is unit-tested natively.

pub mod connection;
pub mod credentials;
pub mod fragment;

pub use connection::{AttemptId, ConnectionStatus, ConnectionTracker};
pub use credentials::{Credentials, CredentialsError};
pub use fragment::{ConnectIntent, FragmentError};

/// Interprets an optional config string as a boolean flag.
pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.to_lowercase())
    } else {
        false
    }
}
