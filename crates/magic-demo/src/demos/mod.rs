//! Demo runner
//!
//! Wraps the core pieces with the configuration and output sink the demos
//! share:
//! - The function gallery
//! - The output notifier
//! - Where persisted files go and how they are encoded

use std::path::PathBuf;

use anyhow::Result;
use magic_core::{Args, ConsoleNotifier, Gallery, MagicConfig, Notifier};
use tracing::info;

pub mod commands;
mod functions;
mod magic;
mod pickle;

pub use commands::{parse_demo, Demo};

/// Runs demos against one configuration
pub struct DemoRunner {
    config: MagicConfig,
    gallery: Gallery,
    notifier: Box<dyn Notifier>,
}

impl DemoRunner {
    /// Create a new runner with the given configuration
    pub fn new(config: MagicConfig) -> Self {
        Self {
            config,
            gallery: Gallery::standard(),
            notifier: Box::new(ConsoleNotifier::new()),
        }
    }

    /// Create a runner writing its files under `path` (for testing)
    pub fn with_output_dir<P: Into<PathBuf>>(path: P) -> Self {
        let config = MagicConfig {
            output_dir: path.into(),
            ..Default::default()
        };
        Self::new(config)
    }

    /// Set the notifier for this runner
    pub fn set_notifier(&mut self, notifier: Box<dyn Notifier>) {
        self.notifier = notifier;
    }

    /// Get a reference to the current notifier
    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    pub fn config(&self) -> &MagicConfig {
        &self.config
    }

    /// Run a demo, or every demo for [`Demo::All`]
    pub fn run(&self, demo: Demo) -> Result<()> {
        if demo != Demo::All {
            info!(?demo, "running demo");
        }
        match demo {
            Demo::Functions => functions::run(self),
            Demo::Magic => magic::run(self),
            Demo::Pickle => pickle::run(self),
            Demo::All => Demo::EACH.into_iter().try_for_each(|single| self.run(single)),
        }
    }

    /// Call a gallery function, printing through the notifier
    fn call(&self, name: &str, args: Args) -> Result<()> {
        self.gallery.call(name, &args, self.notifier())?;
        Ok(())
    }

    fn section(&self, title: &str) {
        self.notifier.on_section(title);
    }

    fn say(&self, line: impl AsRef<str>) {
        self.notifier.on_output(line.as_ref());
    }
}
