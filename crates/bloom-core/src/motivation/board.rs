//! Ordering guard for overlapping quote requests.
//!
//! Every request takes a ticket. A finished request is shown only when no
//! later ticket has already been shown, so a slow stale response can never
//! replace a fresher one.

/// Sequence number handed out by [`QuoteBoard::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QuoteTicket(u64);

#[derive(Debug, Default)]
pub struct QuoteBoard {
    issued: u64,
    shown: Option<(QuoteTicket, String)>,
}

impl QuoteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new request.
    pub fn begin(&mut self) -> QuoteTicket {
        self.issued += 1;
        QuoteTicket(self.issued)
    }

    /// Offers a finished request's phrase. Returns whether it is now shown.
    pub fn complete(&mut self, ticket: QuoteTicket, quote: impl Into<String>) -> bool {
        if matches!(&self.shown, Some((current, _)) if *current > ticket) {
            tracing::debug!(ticket = ticket.0, "discarding stale quote");
            return false;
        }
        self.shown = Some((ticket, quote.into()));
        true
    }

    /// The phrase on display, if any request has completed.
    pub fn current(&self) -> Option<&str> {
        self.shown.as_ref().map(|(_, quote)| quote.as_str())
    }

    /// Whether the latest request is still outstanding.
    pub fn is_loading(&self) -> bool {
        match &self.shown {
            Some((ticket, _)) => ticket.0 < self.issued,
            None => self.issued > 0,
        }
    }
}
