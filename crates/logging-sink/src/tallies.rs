//! crates/logging-sink/src/tallies.rs
//! Counter, timer and profile bookkeeping shared by the concrete consoles.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::time::{Duration, Instant};

/// Per-console state behind `count`, `time`/`time_end` and `profile`/`profile_end`.
#[derive(Debug, Default)]
pub struct Tallies {
    counters: HashMap<String, u64>,
    timers: HashMap<String, Instant>,
    profiles: Vec<String>,
}

impl Tallies {
    /// Creates empty bookkeeping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter named `label` and returns its new value.
    pub fn count(&mut self, label: &str) -> u64 {
        let counter = self.counters.entry(label.to_owned()).or_insert(0);
        *counter += 1;
        *counter
    }

    /// Starts the timer named `label`.
    ///
    /// Returns `false` without restarting it when the timer already runs.
    pub fn start_timer(&mut self, label: &str) -> bool {
        match self.timers.entry(label.to_owned()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Instant::now());
                true
            }
        }
    }

    /// Stops the timer named `label` and returns the time since it started.
    pub fn stop_timer(&mut self, label: &str) -> Option<Duration> {
        self.timers.remove(label).map(|started| started.elapsed())
    }

    /// Pushes a profile onto the stack.
    pub fn start_profile(&mut self, label: &str) {
        self.profiles.push(label.to_owned());
    }

    /// Pops the most recent profile.
    pub fn stop_profile(&mut self) -> Option<String> {
        self.profiles.pop()
    }

    /// Number of profiles currently running.
    #[must_use]
    pub fn active_profiles(&self) -> usize {
        self.profiles.len()
    }
}

/// Formats an elapsed duration as `1.234ms` below one second and `1.234s` above.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_secs_f64() * 1000.0;
    if millis < 1000.0 {
        format!("{millis:.3}ms")
    } else {
        format!("{:.3}s", millis / 1000.0)
    }
}
