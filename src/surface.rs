//! Collaborator traits: the display surface and the clock.
//!
//! The engine draws through the embedded-graphics [`DrawTarget`] trait and
//! only adds what that trait lacks — a [`present`](Surface::present) to make
//! the off-screen buffer visible, and a [`Clock`] for blink timestamps and
//! frame holds. Both seams are trivial to fake in tests.
//!
//! # Implementations
//! - **Production:** a wrapper over the real display driver (or the
//!   simulator window in the `face-sim` binary)
//! - **Testing:** recording fakes in the engine's test module

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use std::time::{Duration, Instant};

/// A double-buffered monochrome display surface.
///
/// Draws accumulate invisibly in an off-screen buffer until
/// [`present`](Self::present) swaps it to the panel. The error type is
/// shared with the draw path so one failure mode covers both.
pub trait Surface: DrawTarget<Color = BinaryColor> {
    /// Make everything drawn since the last present visible.
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Monotonic time source and blocking delay.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed epoch. Must never go backwards.
    fn now_ms(&self) -> u64;

    /// Block for the given number of milliseconds.
    fn sleep_ms(&mut self, ms: u64);
}

/// [`Clock`] backed by [`Instant`] and [`std::thread::sleep`].
///
/// The epoch is the moment of construction, so timestamps start at zero.
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { epoch: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        if ms > 0 {
            std::thread::sleep(Duration::from_millis(ms));
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_starts_near_zero() {
        let clock = SystemClock::new();
        assert!(clock.now_ms() < 1000, "Fresh clock should read close to zero");
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let mut clock = SystemClock::new();
        let before = clock.now_ms();
        clock.sleep_ms(2);
        let after = clock.now_ms();
        assert!(after >= before, "Clock must never go backwards");
    }

    #[test]
    fn test_zero_sleep_returns_immediately() {
        let mut clock = SystemClock::new();
        let before = Instant::now();
        clock.sleep_ms(0);
        assert!(before.elapsed() < Duration::from_millis(50));
    }
}
