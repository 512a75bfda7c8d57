//! CLI argument parsing and command definitions.
//!
//! Provides the `folio` command surface: catalog queries (list, show,
//! tags), the API server (serve), and housekeeping (version, health,
//! config).

use clap::{Parser, Subcommand};
use folio_content::Category;

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "FOLIO_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Built-in commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List documents in a category, newest first.
    List {
        /// Category to list ("projects" or "insights").
        #[arg(value_parser = parse_category)]
        category: Category,

        /// Only show documents carrying this tag.
        #[arg(short, long)]
        tag: Option<String>,

        /// Print the list as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show a single document by slug.
    Show {
        /// Category to look in ("projects" or "insights").
        #[arg(value_parser = parse_category)]
        category: Category,

        /// Document slug (filename without extension).
        slug: String,

        /// Print the document as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List tags, sorted and deduplicated.
    Tags {
        /// Restrict to one category; omit for the union of both.
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,
    },

    /// Start the HTTP API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long)]
        port: Option<u16>,

        /// Host address to bind to.
        #[arg(long)]
        host: Option<String>,
    },

    /// Print version information.
    Version,

    /// Check system health.
    Health,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "server.port").
        key: String,
    },

    /// Set a configuration value by dotted key.
    Set {
        /// Dotted key (e.g., "server.port").
        key: String,

        /// Value to set.
        value: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },

    /// Export configuration as environment variables.
    Export {
        /// Format as Docker --env flags.
        #[arg(long)]
        docker_env: bool,
    },
}

/// Clap value parser for [`Category`]; accepts singular and plural forms.
fn parse_category(raw: &str) -> Result<Category, String> {
    raw.parse().map_err(|e: folio_core::Error| e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
