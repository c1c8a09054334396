//! Debounced re-detection scheduling
//!
//! Dynamic pages mutate constantly while they hydrate; re-detecting on
//! every mutation would thrash. [`RescanScheduler`] coalesces triggers
//! into a single pending pass that fires once the page has been quiet for
//! a configured window, and its generation counter lets callers discard
//! results from passes that were superseded mid-flight.
//!
//! Time is passed in by the caller, so the component is fully
//! deterministic under test.

use parking_lot::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct RescanState {
    generation: u64,
    deadline: Option<Instant>,
}

/// Coalescing trigger for re-detection passes.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use sizewise::pipeline::RescanScheduler;
///
/// let scheduler = RescanScheduler::new(Duration::from_millis(500));
/// let start = Instant::now();
///
/// scheduler.trigger(start);
/// // Still inside the quiet window: nothing to do yet
/// assert!(scheduler.poll(start + Duration::from_millis(100)).is_none());
///
/// // Window elapsed: exactly one pass fires
/// let pass = scheduler.poll(start + Duration::from_millis(600));
/// assert!(pass.is_some());
/// assert!(scheduler.poll(start + Duration::from_millis(700)).is_none());
/// ```
#[derive(Debug)]
pub struct RescanScheduler {
    quiet_window: Duration,
    state: Mutex<RescanState>,
}

impl RescanScheduler {
    /// New scheduler with the given quiet window.
    pub fn new(quiet_window: Duration) -> Self {
        Self {
            quiet_window,
            state: Mutex::new(RescanState {
                generation: 0,
                deadline: None,
            }),
        }
    }

    /// Record a mutation/navigation event at `now`.
    ///
    /// Arms the pending pass (or pushes an armed one further out) and
    /// bumps the generation, superseding any in-flight detection.
    pub fn trigger(&self, now: Instant) {
        let mut state = self.state.lock();
        state.generation += 1;
        state.deadline = Some(now + self.quiet_window);
    }

    /// Fire the pending pass if the quiet window has elapsed.
    ///
    /// Returns the generation token the pass runs under, at most once per
    /// armed window. Callers check the token with [`is_current`] before
    /// applying results.
    ///
    /// [`is_current`]: RescanScheduler::is_current
    pub fn poll(&self, now: Instant) -> Option<u64> {
        let mut state = self.state.lock();
        let deadline = state.deadline?;
        if now < deadline {
            return None;
        }
        state.deadline = None;
        Some(state.generation)
    }

    /// Whether a pass started under `generation` is still the latest.
    ///
    /// A new trigger invalidates older tokens; stale results must be
    /// discarded, not merged.
    pub fn is_current(&self, generation: u64) -> bool {
        self.state.lock().generation == generation
    }

    /// The current generation.
    pub fn generation(&self) -> u64 {
        self.state.lock().generation
    }
}
