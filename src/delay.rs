// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pause between the two steps of a software power cycle.

use std::time::Duration;

/// Time between `OFF` and `ON` in a software power cycle.
pub const SOFTWARE_CYCLE_DELAY: Duration = Duration::from_secs(1);

/// Something that can wait for a given duration.
///
/// The default [`ThreadDelay`] blocks the calling thread. Tests can substitute
/// an implementation that records the requested pauses instead of waiting.
pub trait Delay {
    /// Waits for `duration` before returning.
    fn pause(&self, duration: Duration);
}

/// Blocks the calling thread with [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<D: Delay + ?Sized> Delay for &D {
    fn pause(&self, duration: Duration) {
        (**self).pause(duration);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn thread_delay_blocks() {
        let start = Instant::now();
        ThreadDelay.pause(Duration::from_millis(20));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn software_cycle_delay_is_one_second() {
        assert_eq!(SOFTWARE_CYCLE_DELAY, Duration::from_secs(1));
    }
}
