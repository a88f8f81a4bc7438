//! Signal bus
//!
//! Hosts differ in which lifecycle signals they expose. The bus carries the
//! host's capability set so plugins can ask before they connect instead of
//! connecting blindly and handling the failure.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{HostError, Result};
use crate::signal::Signal;

/// Signal subscriptions keyed by plugin name
#[derive(Debug, Clone)]
pub struct SignalBus {
    available: BTreeSet<Signal>,
    subscribers: BTreeMap<Signal, Vec<String>>,
}

impl Default for SignalBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalBus {
    /// A bus exposing every known signal
    pub fn new() -> Self {
        Self::with_capabilities(Signal::ALL)
    }

    /// A bus exposing only the given signals
    pub fn with_capabilities(signals: impl IntoIterator<Item = Signal>) -> Self {
        Self {
            available: signals.into_iter().collect(),
            subscribers: BTreeMap::new(),
        }
    }

    /// Check whether this host can fire `signal`
    pub fn supports(&self, signal: Signal) -> bool {
        self.available.contains(&signal)
    }

    /// Subscribe `plugin` to `signal`.
    ///
    /// Connecting the same plugin twice is a no-op.
    pub fn connect(&mut self, signal: Signal, plugin: &str) -> Result<()> {
        if !self.supports(signal) {
            return Err(HostError::SignalUnavailable(signal));
        }

        let subscribers = self.subscribers.entry(signal).or_default();
        if !subscribers.iter().any(|name| name == plugin) {
            subscribers.push(plugin.to_string());
        }
        Ok(())
    }

    /// Plugins subscribed to `signal`, in connection order
    pub fn subscribers(&self, signal: Signal) -> &[String] {
        self.subscribers
            .get(&signal)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Check whether `plugin` is subscribed to `signal`
    pub fn is_connected(&self, signal: Signal, plugin: &str) -> bool {
        self.subscribers(signal).iter().any(|name| name == plugin)
    }
}
