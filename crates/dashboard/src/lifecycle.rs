//! Per-concern request lifecycle.
//!
//! Each concern (analysis, search, upload) moves through
//! `idle -> pending -> {resolved | rejected}`. Every start issues a new
//! [`Ticket`]; a completion carrying any other ticket is dropped, so a slow
//! response can never overwrite a newer one.

/// Identifies one started request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Observable state of a concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase<T> {
    /// Nothing requested, or the last result was dismissed.
    Idle,
    /// A request is in flight.
    Pending,
    /// The latest request succeeded.
    Resolved(T),
    /// The latest request failed with a user-facing message.
    Rejected(String),
}

/// Loading, result and error flags of one concern.
///
/// At most one of result and error is set, and neither while loading.
#[derive(Debug, Clone)]
pub struct RequestState<T> {
    phase: Phase<T>,
    issued: u64,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            issued: 0,
        }
    }
}

impl<T> RequestState<T> {
    /// An idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, clearing any previous result or error.
    pub fn start(&mut self) -> Ticket {
        self.issued += 1;
        self.phase = Phase::Pending;
        Ticket(self.issued)
    }

    /// Complete `ticket` with a result. Returns whether it was applied.
    pub fn resolve(&mut self, ticket: Ticket, value: T) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!("dropping stale result for request {}", ticket.0);
            return false;
        }
        self.phase = Phase::Resolved(value);
        true
    }

    /// Complete `ticket` with an error. Returns whether it was applied.
    pub fn reject(&mut self, ticket: Ticket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!("dropping stale error for request {}", ticket.0);
            return false;
        }
        self.phase = Phase::Rejected(message.into());
        true
    }

    /// Complete `ticket` with either outcome.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<T, String>) -> bool {
        match outcome {
            Ok(value) => self.resolve(ticket, value),
            Err(message) => self.reject(ticket, message),
        }
    }

    /// Return to idle. Any in-flight request becomes stale.
    pub fn clear(&mut self) {
        self.issued += 1;
        self.phase = Phase::Idle;
    }

    /// Whether `ticket` is the pending request.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued && self.is_loading()
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Pending)
    }

    /// The latest result.
    pub fn result(&self) -> Option<&T> {
        match &self.phase {
            Phase::Resolved(value) => Some(value),
            _ => None,
        }
    }

    /// The latest error message.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Rejected(message) => Some(message),
            _ => None,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> &Phase<T> {
        &self.phase
    }
}
