//! Per-run plugin state
//!
//! Owned by the plugin instance; a new run means a new plugin, so nothing
//! leaks between runs.

/// Initialization progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// `initialized` has not been handled yet
    #[default]
    Pending,
    /// Settings resolved and published
    Ready,
    /// Initialization failed; the plugin is inert for the rest of the run
    Disabled,
}

/// State shared by the plugin's handlers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginState {
    pub phase: Phase,
    /// The smarty extension was found at initialization
    pub smart_quotes: bool,
}

impl PluginState {
    /// Whether initialization already ran, successfully or not
    pub fn is_initialized(&self) -> bool {
        self.phase != Phase::Pending
    }

    /// Whether the plugin resolved its settings and is active
    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        let state = PluginState::default();
        assert!(!state.is_initialized());
        assert!(!state.is_ready());
        assert!(!state.smart_quotes);
    }

    #[test]
    fn test_disabled_counts_as_initialized() {
        let state = PluginState {
            phase: Phase::Disabled,
            smart_quotes: false,
        };
        assert!(state.is_initialized());
        assert!(!state.is_ready());
    }
}
