//! FolioCli application.
//!
//! Ties argument parsing, configuration, and the command handlers
//! together into the `folio` binary's run loop.

use crate::cli::{CliArgs, Command};
use crate::config::FolioConfig;
use crate::{config_handlers, content_handlers};
use folio_api::ApiState;
use folio_core::traits::ConfigProvider;
use folio_core::{Error, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// ============================================================================
// FolioCli
// ============================================================================

/// CLI application parameterized over a config provider.
pub struct FolioCli<C: ConfigProvider> {
    name: String,
    config: Arc<C>,
    version: String,
}

impl FolioCli<FolioConfig> {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = FolioConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }
}

impl<C: ConfigProvider> FolioCli<C> {
    /// Create a new CLI application.
    pub fn new(name: impl Into<String>, config: C) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get a reference to the config provider.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(Command::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(Command::Health) => self.handle_health().await,
            Some(Command::List {
                category,
                tag,
                json,
            }) => {
                content_handlers::handle_list(&*self.config, category, tag.as_deref(), json).await
            }
            Some(Command::Show {
                category,
                slug,
                json,
            }) => content_handlers::handle_show(&*self.config, category, &slug, json).await,
            Some(Command::Tags { category }) => {
                content_handlers::handle_tags(&*self.config, category).await
            }
            Some(Command::Serve { port, host }) => self.handle_serve(port, host.as_deref()).await,
            Some(Command::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            None => {
                println!("{} {} — use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }

    /// Verify that the configured content directories are reachable.
    async fn handle_health(&self) -> Result<()> {
        for category in folio_content::Category::ALL {
            let path = self.config.content_path(category.dir_name())?;
            let status = if path.is_dir() { "ok" } else { "missing" };
            println!("{}: {} ({})", category.dir_name(), status, path.display());
        }
        println!("{}: healthy", self.name);
        Ok(())
    }

    /// Start the HTTP API server.
    async fn handle_serve(&self, port: Option<u16>, host: Option<&str>) -> Result<()> {
        let state = ApiState::from_config(&*self.config)?;
        let addr: SocketAddr = format!(
            "{}:{}",
            host.unwrap_or("127.0.0.1"),
            port.unwrap_or(3000)
        )
        .parse()
        .map_err(|e| Error::config(format!("invalid listen address: {e}")))?;

        println!("Starting {} server on {addr}...", self.name);
        folio_api::serve(addr, state).await
    }
}

// ============================================================================
// Tests
// ============================================================================
