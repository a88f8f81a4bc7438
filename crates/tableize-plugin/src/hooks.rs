//! Lifecycle hooks
//!
//! [`TableizePlugin`] connects to the host's `initialized` signal and the
//! seven article lifecycle signals. Only `initialized` does real work: it
//! resolves the settings, probes for the smarty extension and publishes
//! the result. The content handlers currently log and return; they are the
//! attachment points for in-place table rewriting.

use serde_json::Value;
use tableize_host::{
    Content, Diagnostic, Diagnostics, Event, HostSettings, Plugin, Signal, SignalBus, ValueKind,
};
use tracing::{debug, info, warn};

use crate::compat;
use crate::config::{codes, NAMESPACE};
use crate::error::{Result, TableizeError};
use crate::render::TableRenderer;
use crate::resolver;
use crate::state::{Phase, PluginState};

/// Name the plugin subscribes under
pub const PLUGIN_NAME: &str = "tableize";

/// What `register` managed to connect
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub connected: Vec<Signal>,
    pub skipped: Vec<Signal>,
}

/// The tableize plugin
#[derive(Debug, Default)]
pub struct TableizePlugin {
    state: PluginState,
    diagnostics: Diagnostics,
    registration: Registration,
}

impl TableizePlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Boxed for [`tableize_host::Site::add_plugin`]
    pub fn boxed() -> Box<dyn Plugin> {
        Box::new(Self::new())
    }

    pub fn state(&self) -> &PluginState {
        &self.state
    }

    /// Everything reported during initialization
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    pub fn smart_quotes_detected(&self) -> bool {
        self.state.smart_quotes
    }

    /// Handle `initialized`.
    ///
    /// Runs at most once per plugin instance. Missing host settings or a
    /// namespace value that is not a mapping disable the plugin for the run.
    pub fn initialize(&mut self, settings: Option<&mut HostSettings>) {
        if self.state.is_initialized() {
            debug!("tableize plugin already initialized; skipping");
            return;
        }

        let Some(settings) = settings else {
            self.disable(
                Diagnostic::fatal("No host settings access; tableize plugin is disabled")
                    .with_code(codes::HOST_UNAVAILABLE),
            );
            return;
        };

        debug!("tableize initialized signal");
        let overrides = match settings.get(NAMESPACE) {
            // An explicit null reads the same as an absent key
            None | Some(Value::Null) => None,
            Some(Value::Object(mapping)) => Some(mapping.clone()),
            Some(other) => {
                let found = ValueKind::of(other);
                self.disable(
                    Diagnostic::error(format!(
                        "{NAMESPACE} must be a mapping, found {found}; tableize plugin is disabled"
                    ))
                    .with_code(codes::NAMESPACE_MALFORMED),
                );
                return;
            }
        };

        let resolution = resolver::resolve(overrides.as_ref());
        resolver::write_back(&resolution.config, settings);
        self.diagnostics.extend(resolution.diagnostics);

        self.state.smart_quotes = compat::smart_quotes_enabled(settings);
        self.state.phase = Phase::Ready;
        debug!("tableize plugin initialized");
    }

    /// A renderer for the published settings
    pub fn renderer(&self, settings: &HostSettings) -> Result<TableRenderer> {
        if !self.state.is_ready() {
            return Err(TableizeError::NotInitialized);
        }
        Ok(TableRenderer::from_settings(settings).with_smart_quotes(self.state.smart_quotes))
    }

    fn disable(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.report(diagnostic);
        self.state.phase = Phase::Disabled;
    }

    fn on_content_object_init(&self, content: Option<&Content>) {
        debug!("content_object_init called");
        let Some(content) = content else {
            return;
        };
        debug!(
            "content_object_init: {} bytes from {}",
            content.body.len(),
            content.source_path.display()
        );

        // Only articles and pages carry tables worth rewriting
        if !content.is_document() {
            return;
        }
        debug!("content_object_init: {} ready", content.title);
    }
}

impl Plugin for TableizePlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn register(&mut self, bus: &mut SignalBus) {
        let mut registration = Registration::default();

        for signal in Signal::ALL {
            if !bus.supports(signal) {
                warn!("Signal {} is not available on this host; skipped", signal);
                registration.skipped.push(signal);
                continue;
            }
            match bus.connect(signal, PLUGIN_NAME) {
                Ok(()) => registration.connected.push(signal),
                Err(err) => {
                    warn!("Failed to connect {}: {}", signal, err);
                    registration.skipped.push(signal);
                }
            }
        }

        info!(
            "tableize plugin registered: {} signals connected, {} skipped",
            registration.connected.len(),
            registration.skipped.len()
        );
        self.registration = registration;
    }

    fn on_initialized(&mut self, settings: Option<&mut HostSettings>) {
        self.initialize(settings);
    }

    fn on_event(&mut self, event: &Event<'_>, _settings: &HostSettings) {
        match *event {
            Event::GeneratorInit(generator) => {
                info!(
                    "article_generator_init called: path is {}",
                    generator.path.display()
                );
            }
            Event::GeneratorPreread(_) => debug!("article_generator_preread called"),
            Event::GeneratorContext { metadata, .. } => {
                debug!(
                    "article_generator_context called: {} metadata fields",
                    metadata.len()
                );
            }
            Event::ContentObjectInit(content) => self.on_content_object_init(content),
            Event::GeneratorPretaxonomy(_) => debug!("article_generator_pretaxonomy called"),
            Event::GeneratorFinalized(_) => debug!("article_generator_finalized called"),
            Event::WriteArticle { content, .. } => {
                debug!("article_generator_write_article called: {}", content.title);
            }
        }
    }
}
