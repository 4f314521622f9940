//! Throttle gate.
//!
//! Fixed-window request counting per `(caller key, scope)`. Counters live in a sharded
//! concurrent map; every check goes through the map's entry API, so the read-reset-increment
//! sequence for one key runs under that key's shard lock and concurrent requests can never
//! both claim the last slot of a window.

use std::{
    collections::HashMap,
    fmt,
    str::FromStr,
    time::{Duration, Instant},
};

use dashmap::DashMap;

use crate::server::error::{config::ConfigError, throttle::ThrottleError};

/// Named bucket grouping related endpoints under one rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThrottleScope {
    Drones,
    Pilots,
}

impl ThrottleScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Drones => "drones",
            Self::Pilots => "pilots",
        }
    }
}

impl fmt::Display for ThrottleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allowed number of requests per window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rate {
    pub num_requests: u64,
    pub window: Duration,
}

impl Rate {
    pub fn new(num_requests: u64, window: Duration) -> Self {
        Self {
            num_requests,
            window,
        }
    }
}

/// Parses rates written as `<count>/<period>`.
///
/// Only the first letter of the period is significant, so `s`, `sec` and `second` are all
/// one second; likewise `m`/`min`, `h`/`hour` and `d`/`day`.
impl FromStr for Rate {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidRate(s.to_string());

        let (count, period) = s.trim().split_once('/').ok_or_else(invalid)?;
        let num_requests = count.trim().parse::<u64>().map_err(|_| invalid())?;

        let seconds = match period.trim().chars().next() {
            Some('s') => 1,
            Some('m') => 60,
            Some('h') => 60 * 60,
            Some('d') => 24 * 60 * 60,
            _ => return Err(invalid()),
        };

        Ok(Self::new(num_requests, Duration::from_secs(seconds)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    Allow,
    Deny { retry_after: Duration },
}

impl ThrottleDecision {
    pub fn into_result(self) -> Result<(), ThrottleError> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny { retry_after } => Err(ThrottleError::Throttled { retry_after }),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u64,
    started: Instant,
}

/// Shared fixed-window rate limiter.
///
/// Scopes without a configured rate are never throttled.
#[derive(Debug, Default)]
pub struct ThrottleGate {
    rates: HashMap<ThrottleScope, Rate>,
    windows: DashMap<(String, ThrottleScope), Window>,
}

impl ThrottleGate {
    pub fn new(rates: HashMap<ThrottleScope, Rate>) -> Self {
        Self {
            rates,
            windows: DashMap::new(),
        }
    }

    pub fn rate(&self, scope: ThrottleScope) -> Option<Rate> {
        self.rates.get(&scope).copied()
    }

    /// Checks and records a request at the current instant.
    pub fn check(&self, key: &str, scope: ThrottleScope) -> ThrottleDecision {
        self.check_at(key, scope, Instant::now())
    }

    /// Checks and records a request at `now`.
    ///
    /// A window that has fully elapsed is reset before counting. Denied requests are not
    /// counted against the window.
    ///
    /// # Returns
    /// - `ThrottleDecision::Allow` - Request fits in the caller's current window
    /// - `ThrottleDecision::Deny { retry_after }` - Window is full; `retry_after` is the
    ///   time left until it closes
    pub fn check_at(&self, key: &str, scope: ThrottleScope, now: Instant) -> ThrottleDecision {
        let Some(rate) = self.rate(scope) else {
            return ThrottleDecision::Allow;
        };

        let mut window = self
            .windows
            .entry((key.to_string(), scope))
            .or_insert(Window {
                count: 0,
                started: now,
            });

        let elapsed = now.saturating_duration_since(window.started);
        if elapsed >= rate.window {
            window.count = 0;
            window.started = now;
        }

        if window.count >= rate.num_requests {
            let elapsed = now.saturating_duration_since(window.started);
            return ThrottleDecision::Deny {
                retry_after: rate.window.saturating_sub(elapsed),
            };
        }

        window.count += 1;
        ThrottleDecision::Allow
    }

    /// Drops windows that have fully elapsed as of `now`.
    ///
    /// # Returns
    /// - `usize` - Number of windows removed
    pub fn purge_expired(&self, now: Instant) -> usize {
        let before = self.windows.len();

        self.windows.retain(|(_, scope), window| match self.rates.get(scope) {
            Some(rate) => now.saturating_duration_since(window.started) < rate.window,
            None => false,
        });

        before.saturating_sub(self.windows.len())
    }

    /// Number of tracked windows.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
