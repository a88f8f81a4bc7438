//! tableize-host - the host side of the plugin contract
//!
//! A static-site host owns the run: it loads settings, fires lifecycle
//! signals and hands content to plugins. This crate describes that contract
//! (settings mapping, signals, payloads, the [`Plugin`] trait) and ships
//! [`Site`], a minimal synchronous host used to drive plugins end to end.
//!
//! # Example
//!
//! ```
//! use tableize_host::{HostSettings, Signal, SignalBus};
//!
//! let mut bus = SignalBus::with_capabilities([Signal::Initialized]);
//! assert!(bus.connect(Signal::Initialized, "demo").is_ok());
//! assert!(bus.connect(Signal::ContentObjectInit, "demo").is_err());
//!
//! let settings = HostSettings::new();
//! assert!(settings.is_empty());
//! ```

pub mod bus;
pub mod diagnostics;
pub mod error;
pub mod event;
pub mod settings;
pub mod signal;
pub mod site;

pub use bus::SignalBus;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{HostError, Result};
pub use event::{Content, ContentKind, Event, Generator, GeneratorKind, Metadata};
pub use settings::{HostSettings, ValueKind};
pub use signal::Signal;
pub use site::{Plugin, Site};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
