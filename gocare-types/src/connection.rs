// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connection status of the room view.
//!
//! Every connection attempt is stamped with a generation number. A result or
//! disconnect event is only applied while its attempt is still the latest,
//! so overlapping attempts cannot overwrite each other's outcome.

use std::fmt;

/// Status shown by the room view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    NotConnected,
    Connecting,
    Connected,
    Errored(String),
}

impl ConnectionStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, ConnectionStatus::Errored(_))
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::NotConnected => write!(f, "Not connected"),
            ConnectionStatus::Connecting => write!(f, "Connecting..."),
            ConnectionStatus::Connected => write!(f, "Connected. Speak to the agent in the room."),
            ConnectionStatus::Errored(message) => write!(f, "Error: {message}"),
        }
    }
}

/// Generation number of a connection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttemptId(u64);

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionTracker {
    generation: u64,
    status: ConnectionStatus,
}

impl ConnectionTracker {
    pub fn status(&self) -> &ConnectionStatus {
        &self.status
    }

    /// Starts a new attempt. Any attempt still in flight becomes stale.
    pub fn begin_attempt(&mut self) -> AttemptId {
        self.generation += 1;
        self.status = ConnectionStatus::Connecting;
        AttemptId(self.generation)
    }

    pub fn is_current(&self, attempt: AttemptId) -> bool {
        attempt.0 == self.generation
    }

    /// Records the outcome of `attempt`. Returns `false` when the attempt
    /// was superseded and the outcome was dropped.
    pub fn complete(&mut self, attempt: AttemptId, outcome: Result<(), String>) -> bool {
        if !self.is_current(attempt) {
            return false;
        }
        self.status = match outcome {
            Ok(()) => ConnectionStatus::Connected,
            Err(message) => ConnectionStatus::Errored(message),
        };
        true
    }

    /// Handles a room disconnect reported for `attempt`. An error line stays
    /// visible; the media client also reports a disconnect for failed joins.
    pub fn disconnected(&mut self, attempt: AttemptId) -> bool {
        if !self.is_current(attempt) || self.status.is_error() {
            return false;
        }
        self.status = ConnectionStatus::NotConnected;
        true
    }
}
