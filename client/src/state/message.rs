//! Transient status banner shown after every user-visible operation.
//!
//! DESIGN
//! ======
//! One banner, one message at a time. Each `show` takes a new sequence
//! number; an expiry timer carries the number it was started for and only
//! clears the banner if that number is still current and the display window
//! has elapsed. A newer message therefore never gets hidden by an older
//! message's timer.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::time::Duration;

/// How long a message stays visible.
pub const MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Severity of a banner message; doubles as its CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: NoticeKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: NoticeKind::Error }
    }
}

/// What an expiry timer does after waking for message `seq`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExpiryStep {
    /// Message was cleared or superseded; stop.
    Stop,
    /// Display window is over; clear it now.
    Expire,
    /// Woke early relative to the caller's clock; sleep again.
    Wait(Duration),
}

/// Banner state. Timestamps are milliseconds on the caller's clock
/// (`Date.now()` in the browser).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageState {
    pub current: Option<Notice>,
    pub seq: u64,
    pub shown_at_ms: f64,
}

impl MessageState {
    /// Replace whatever is showing. Returns the sequence number the expiry
    /// timer must present to [`MessageState::expire`].
    pub fn show(&mut self, notice: Notice, now_ms: f64) -> u64 {
        self.seq += 1;
        self.current = Some(notice);
        self.shown_at_ms = now_ms;
        self.seq
    }

    /// Clear the banner if `seq` is still the current message and its
    /// display window is over. Returns whether anything was cleared.
    pub fn expire(&mut self, seq: u64, now_ms: f64) -> bool {
        if seq != self.seq || self.current.is_none() {
            return false;
        }
        if now_ms - self.shown_at_ms < ttl_ms() {
            return false;
        }
        self.current = None;
        true
    }

    /// Time left in the display window of message `seq`, or `None` once it
    /// has been cleared or superseded.
    #[must_use]
    pub fn remaining_ms(&self, seq: u64, now_ms: f64) -> Option<f64> {
        if seq != self.seq || self.current.is_none() {
            return None;
        }
        Some((self.shown_at_ms + ttl_ms() - now_ms).max(0.0))
    }

    /// Next action for the timer of message `seq` waking at `now_ms`.
    #[must_use]
    pub fn expiry_step(&self, seq: u64, now_ms: f64) -> ExpiryStep {
        match self.remaining_ms(seq, now_ms) {
            None => ExpiryStep::Stop,
            Some(ms) if ms <= 0.0 => ExpiryStep::Expire,
            Some(ms) => ExpiryStep::Wait(Duration::from_secs_f64(ms / 1000.0)),
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

fn ttl_ms() -> f64 {
    MESSAGE_TTL.as_secs_f64() * 1000.0
}
