//! Chapter-list scroll restoration
//!
//! When the reader returns to the chapter list, the chapter they were on is
//! scrolled into the middle of the list and flashed for a moment. The
//! scroll waits for one rendered frame so the list has its real geometry,
//! then for a short settle delay, and only then moves.

use std::time::{Duration, Instant};

/// Delay between the first rendered frame and the scroll
pub const SETTLE_DELAY: Duration = Duration::from_millis(10);

/// How long the revealed chapter stays highlighted
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    AwaitingFrame { chapter: u32 },
    Settling { chapter: u32, since: Instant },
    Highlighting { chapter: u32, until: Instant },
}

/// Deferred reveal of one chapter in the chapter list
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollReveal {
    phase: Phase,
}

impl ScrollReveal {
    #[must_use]
    pub const fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Start revealing `chapter`, replacing any reveal in progress
    pub const fn request(&mut self, chapter: u32) {
        self.phase = Phase::AwaitingFrame { chapter };
    }

    /// Drop the current reveal and its highlight
    pub const fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Record that a frame was drawn at `now`
    pub const fn frame_rendered(&mut self, now: Instant) {
        if let Phase::AwaitingFrame { chapter } = self.phase {
            self.phase = Phase::Settling {
                chapter,
                since: now,
            };
        }
    }

    /// Advance the clock
    ///
    /// Returns the chapter to scroll to on the tick where the settle delay
    /// has elapsed. The highlight starts on that same tick.
    pub fn advance(&mut self, now: Instant) -> Option<u32> {
        match self.phase {
            Phase::Settling { chapter, since } if now.duration_since(since) >= SETTLE_DELAY => {
                self.phase = Phase::Highlighting {
                    chapter,
                    until: now + HIGHLIGHT_DURATION,
                };
                Some(chapter)
            }
            Phase::Highlighting { until, .. } if now >= until => {
                self.phase = Phase::Idle;
                None
            }
            _ => None,
        }
    }

    /// The chapter to draw highlighted at `now`
    #[must_use]
    pub fn highlighted_chapter(&self, now: Instant) -> Option<u32> {
        match self.phase {
            Phase::Highlighting { chapter, until } if now < until => Some(chapter),
            _ => None,
        }
    }

    /// Whether a reveal is waiting to scroll
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(
            self.phase,
            Phase::AwaitingFrame { .. } | Phase::Settling { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_for_a_frame() {
        let start = Instant::now();
        let mut reveal = ScrollReveal::new();
        reveal.request(7);

        assert_eq!(reveal.advance(start + Duration::from_secs(1)), None);
        assert!(reveal.is_pending());
    }

    #[test]
    fn test_waits_for_settle_delay_after_frame() {
        let start = Instant::now();
        let mut reveal = ScrollReveal::new();
        reveal.request(7);
        reveal.frame_rendered(start);

        assert_eq!(reveal.advance(start + Duration::from_millis(5)), None);
        assert_eq!(reveal.advance(start + SETTLE_DELAY), Some(7));
        assert!(!reveal.is_pending());
        // Scrolls exactly once
        assert_eq!(reveal.advance(start + SETTLE_DELAY), None);
    }

    #[test]
    fn test_highlight_lasts_1500ms() {
        let start = Instant::now();
        let mut reveal = ScrollReveal::new();
        reveal.request(3);
        reveal.frame_rendered(start);
        let scrolled_at = start + SETTLE_DELAY;
        reveal.advance(scrolled_at);

        assert_eq!(
            reveal.highlighted_chapter(scrolled_at + Duration::from_millis(1499)),
            Some(3)
        );
        assert_eq!(reveal.highlighted_chapter(scrolled_at + HIGHLIGHT_DURATION), None);

        reveal.advance(scrolled_at + HIGHLIGHT_DURATION);
        assert_eq!(reveal.highlighted_chapter(scrolled_at), None);
    }

    #[test]
    fn test_new_request_replaces_old() {
        let start = Instant::now();
        let mut reveal = ScrollReveal::new();
        reveal.request(3);
        reveal.frame_rendered(start);
        reveal.request(9);
        reveal.frame_rendered(start + Duration::from_millis(20));

        assert_eq!(reveal.advance(start + Duration::from_millis(30)), Some(9));
    }

    #[test]
    fn test_cancel_clears_highlight() {
        let start = Instant::now();
        let mut reveal = ScrollReveal::new();
        reveal.request(2);
        reveal.frame_rendered(start);
        reveal.advance(start + SETTLE_DELAY);
        reveal.cancel();

        assert_eq!(reveal.highlighted_chapter(start + SETTLE_DELAY), None);
    }
}
