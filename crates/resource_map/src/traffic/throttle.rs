use std::time::Duration;

/// Gates display-rate frame callbacks down to a fixed logical rate.
///
/// The deadline advances by exactly one interval per applied update, so the
/// applied rate converges on the logical rate even when frame times are not a
/// multiple of the interval. After a stall longer than one interval the
/// deadline snaps to the current frame instead of bursting to catch up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameThrottle {
    interval: Duration,
    last_applied: Option<Duration>,
}

impl FrameThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_applied: None,
        }
    }

    /// Start measuring from `now`.
    pub fn reset(&mut self, now: Duration) {
        self.last_applied = Some(now);
    }

    /// Returns `true` if a logical update is due at `now` and records it.
    pub fn try_advance(&mut self, now: Duration) -> bool {
        let last = *self.last_applied.get_or_insert(now);
        if now.saturating_sub(last) < self.interval {
            return false;
        }

        let next = last + self.interval;
        self.last_applied = Some(if now.saturating_sub(next) >= self.interval {
            now
        } else {
            next
        });
        true
    }
}
