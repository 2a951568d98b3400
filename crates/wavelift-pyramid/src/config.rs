//! Transform configuration.
//!
//! The configuration is an explicit value passed to every transform call;
//! nothing hidden crosses calls. For callers that want the set-once
//! usage, a process-wide atomic holds the default kernel schedule that
//! [`TransformConfig::default`] picks up — writing it while a transform is
//! in flight does not affect that transform (each call reads its own copy
//! at entry).

use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

use wavelift_kernels::Schedule;

static DEFAULT_SCHEDULE: AtomicU8 = AtomicU8::new(0);

/// Set the process-wide default kernel schedule.
pub fn set_default_schedule(schedule: Schedule) {
    DEFAULT_SCHEDULE.store(schedule.index(), Ordering::Relaxed);
}

/// The process-wide default kernel schedule.
#[must_use]
pub fn default_schedule() -> Schedule {
    Schedule::from_index(DEFAULT_SCHEDULE.load(Ordering::Relaxed))
}

/// Per-call knobs of the 2-D driver.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Kernel schedule used by every 1-D dispatch of this call.
    pub schedule: Schedule,
    /// Worker threads for the row/column passes (>= 1).
    pub num_threads: usize,
    /// Accelerator worker count; only meaningful under the offload
    /// schedules and ignored on CPU-only builds.
    pub num_workers: usize,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            schedule: default_schedule(),
            num_threads: std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get),
            num_workers: 1,
        }
    }
}

impl TransformConfig {
    /// Default configuration with an explicit schedule.
    #[must_use]
    pub fn with_schedule(schedule: Schedule) -> Self {
        Self {
            schedule,
            ..Self::default()
        }
    }

    /// Default configuration with an explicit worker-thread count.
    #[must_use]
    pub fn with_threads(num_threads: usize) -> Self {
        Self {
            num_threads,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_round_trips() {
        let before = default_schedule();
        set_default_schedule(Schedule::Sdl6Vec);
        assert_eq!(default_schedule(), Schedule::Sdl6Vec);
        assert_eq!(
            TransformConfig::default().schedule,
            Schedule::Sdl6Vec
        );
        set_default_schedule(before);
    }

    #[test]
    fn thread_count_is_positive() {
        assert!(TransformConfig::default().num_threads >= 1);
    }
}
