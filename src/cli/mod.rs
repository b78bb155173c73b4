//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod cache;
pub mod context;
pub mod countries;
pub mod init;
pub mod status;
pub mod travel;

pub use args::{CountryFilterArgs, GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// Kanta CLI - offline-first companion for the Kanta world travel API
#[derive(Parser, Debug)]
#[command(name = "kanta")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "KANTA_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "KANTA_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base URL (e.g. a local backend)
    #[arg(long, global = true, env = "KANTA_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Override the cache directory
    #[arg(long, global = true, env = "KANTA_CACHE_DIR", hide_env = true)]
    pub cache_dir: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "KANTA_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Kanta configuration
    Init,

    /// Show configuration and cache status
    Status,

    /// Display version information
    Version,

    /// Browse countries
    #[command(subcommand)]
    Countries(CountryCommands),

    /// Show the travel safety report for a country
    Safety {
        /// ISO country code (e.g. JP)
        code: String,
    },

    /// Show sightseeing information for a country (always fetched live)
    Attractions {
        /// ISO country code (e.g. FR)
        code: String,
    },

    /// Show visa and passport requirements for a country (always fetched live)
    Entry {
        /// ISO country code (e.g. TH)
        code: String,
    },

    /// Manage the local country cache
    #[command(subcommand)]
    Cache(CacheCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   kanta completion bash > /etc/bash_completion.d/kanta
  zsh:    kanta completion zsh > \"${fpath[1]}/_kanta\"
  fish:   kanta completion fish > ~/.config/fish/completions/kanta.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Country subcommands
#[derive(Subcommand, Debug)]
pub enum CountryCommands {
    /// List countries, optionally filtered by name or region
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            kanta countries list                 # All countries\n  \
            kanta countries list -q jap          # Name search (English or Japanese)\n  \
            kanta countries list -r Europe       # Region filter\n  \
            kanta countries list -r Asia -n 5    # First five in Asia"
    )]
    List {
        #[command(flatten)]
        filters: CountryFilterArgs,
    },

    /// Show a single country
    #[command(visible_alias = "g")]
    Get {
        /// ISO country code (e.g. JP)
        code: String,

        /// Include the safety report
        #[arg(long, short = 's')]
        with_safety: bool,
    },

    /// Re-download the full country list into the cache
    Refresh,
}

/// Cache management subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache statistics
    Status,
    /// Clear cached data
    Clear {
        /// Only clear one kind of record
        #[arg(long = "type", value_enum)]
        kind: Option<CachedKind>,
    },
    /// Print cache directory path
    Path,
}

/// Kinds of record kept in the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CachedKind {
    /// Country records
    Countries,
    /// Safety reports
    Safety,
}
