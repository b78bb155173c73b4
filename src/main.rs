//! Kanta CLI - offline-first companion for the Kanta world travel API

use clap::{CommandFactory, Parser};

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod repository;

use cli::{CacheCommands, Cli, Commands, CountryCommands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Warnings by default, everything from this crate with `--debug`.
/// `RUST_LOG` still overrides both.
fn init_logging(debug: bool) {
    let default_level = if debug { "kanta=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("kanta version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Countries(cmd) => match cmd {
            CountryCommands::List { filters } => cli::countries::list(&opts, &filters).await,
            CountryCommands::Get { code, with_safety } => {
                cli::countries::get(&opts, &code, with_safety).await
            }
            CountryCommands::Refresh => cli::countries::refresh(&opts).await,
        },
        Commands::Safety { code } => cli::travel::safety(&opts, &code).await,
        Commands::Attractions { code } => cli::travel::attractions(&opts, &code).await,
        Commands::Entry { code } => cli::travel::entry(&opts, &code).await,
        Commands::Cache(cmd) => match cmd {
            CacheCommands::Status => cli::cache::status(&opts),
            CacheCommands::Clear { kind } => cli::cache::clear(&opts, kind),
            CacheCommands::Path => cli::cache::path(&opts),
        },
        Commands::Completion { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "kanta", &mut std::io::stdout());
            Ok(())
        }
    }
}
