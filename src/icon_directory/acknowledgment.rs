// SPDX-License-Identifier: MPL-2.0
//! Copy acknowledgment timing.
//!
//! A copy shows a transient "Copied!" marker that expires after a delay. Each
//! copy is stamped with a generation number; the expiry for an older
//! generation is ignored, so a newer acknowledgment is never cleared early.

use crate::app::config::{DEFAULT_COPY_ACK_MS, MAX_COPY_ACK_MS, MIN_COPY_ACK_MS};
use std::time::Duration;

/// How long the copy acknowledgment stays visible, in milliseconds.
///
/// The value is always within 250–10000 ms.
///
/// # Example
///
/// ```
/// use stylebook::icon_directory::CopyDelay;
///
/// let delay = CopyDelay::new(2000);
/// assert_eq!(delay.value(), 2000);
///
/// // Values outside range are clamped
/// let too_short = CopyDelay::new(10);
/// assert_eq!(too_short.value(), 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyDelay(u64);

impl CopyDelay {
    /// Creates a delay, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_COPY_ACK_MS, MAX_COPY_ACK_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for CopyDelay {
    fn default() -> Self {
        Self(DEFAULT_COPY_ACK_MS)
    }
}

/// Issued by a successful copy; handed back to expire the acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTicket {
    name: String,
    generation: u64,
    delay: Duration,
}

impl CopyTicket {
    pub(super) fn new(name: String, generation: u64, delay: Duration) -> Self {
        Self {
            name,
            generation,
            delay,
        }
    }

    /// The icon name that was copied.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Time to wait before expiring.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(CopyDelay::new(0).value(), MIN_COPY_ACK_MS);
        assert_eq!(CopyDelay::new(60_000).value(), MAX_COPY_ACK_MS);
    }

    #[test]
    fn default_matches_reference_delay() {
        assert_eq!(CopyDelay::default().value(), 1500);
        assert_eq!(
            CopyDelay::default().as_duration(),
            Duration::from_millis(1500)
        );
    }
}
