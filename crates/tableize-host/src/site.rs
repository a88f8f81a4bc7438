//! Plugin trait and the reference host driver
//!
//! [`Site`] is the smallest host that can drive a plugin through one run:
//! it owns the settings mapping, the signal bus and the loaded plugins, and
//! delivers each signal synchronously to every subscriber in connection
//! order.

use tracing::{debug, info};

use crate::bus::SignalBus;
use crate::event::{Content, Event, Generator};
use crate::settings::HostSettings;
use crate::signal::Signal;

/// A plugin loaded by the host
pub trait Plugin {
    /// Name used for signal subscriptions
    fn name(&self) -> &str;

    /// Connect handlers to the bus. Called once when the plugin is loaded.
    fn register(&mut self, bus: &mut SignalBus);

    /// Handle `initialized`. The host passes `None` when it has no settings
    /// to offer.
    fn on_initialized(&mut self, settings: Option<&mut HostSettings>);

    /// Handle a content lifecycle signal
    fn on_event(&mut self, event: &Event<'_>, settings: &HostSettings);
}

/// A minimal host
pub struct Site {
    settings: HostSettings,
    bus: SignalBus,
    plugins: Vec<Box<dyn Plugin>>,
}

impl std::fmt::Debug for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Site")
            .field("settings", &self.settings)
            .field("bus", &self.bus)
            .field(
                "plugins",
                &self.plugins.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Site {
    /// A host exposing every signal
    pub fn new(settings: HostSettings) -> Self {
        Self::with_bus(settings, SignalBus::new())
    }

    /// A host with a restricted capability set
    pub fn with_bus(settings: HostSettings, bus: SignalBus) -> Self {
        Self {
            settings,
            bus,
            plugins: Vec::new(),
        }
    }

    /// Load a plugin and let it register its handlers
    pub fn add_plugin(&mut self, mut plugin: Box<dyn Plugin>) {
        plugin.register(&mut self.bus);
        info!("Loaded plugin: {}", plugin.name());
        self.plugins.push(plugin);
    }

    /// Fire `initialized`
    pub fn initialize(&mut self) {
        for plugin in &mut self.plugins {
            if self.bus.is_connected(Signal::Initialized, plugin.name()) {
                plugin.on_initialized(Some(&mut self.settings));
            }
        }
    }

    /// Fire a content lifecycle signal
    pub fn emit(&mut self, event: &Event<'_>) {
        let signal = event.signal();
        if !self.bus.supports(signal) {
            debug!("Signal {} not supported by this host, skipped", signal);
            return;
        }

        for plugin in &mut self.plugins {
            if self.bus.is_connected(signal, plugin.name()) {
                plugin.on_event(event, &self.settings);
            }
        }
    }

    /// Drive one articles generator through its whole lifecycle
    pub fn generate_articles(&mut self, generator: &Generator, articles: &[Content]) {
        self.emit(&Event::GeneratorInit(generator));
        self.emit(&Event::GeneratorPreread(generator));
        for article in articles {
            self.emit(&Event::GeneratorContext {
                generator,
                metadata: &article.metadata,
            });
            self.emit(&Event::ContentObjectInit(Some(article)));
        }
        self.emit(&Event::GeneratorPretaxonomy(generator));
        self.emit(&Event::GeneratorFinalized(generator));
        for article in articles {
            self.emit(&Event::WriteArticle {
                generator,
                content: article,
            });
        }
    }

    /// Initialize, then generate articles
    pub fn run(&mut self, generator: &Generator, articles: &[Content]) {
        self.initialize();
        self.generate_articles(generator, articles);
    }

    /// The settings mapping
    pub fn settings(&self) -> &HostSettings {
        &self.settings
    }

    /// The signal bus
    pub fn bus(&self) -> &SignalBus {
        &self.bus
    }
}
