//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{CommandFactory, FromArgMatches, Parser};
use folio_core::config;
use folio_core::logging::{self, Sink};

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Rham's portfolio, styled like a music player")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// View to open the interactive portfolio on
    /// (home, search, about, stack, projects, certificates, cv, contact).
    /// Subcommands reject the flag and ignore FOLIO_VIEW.
    #[arg(long, value_name = "VIEW", env = "FOLIO_VIEW")]
    view: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Ask the assistant a single question
    Ask {
        /// The question to send
        #[arg(short, long)]
        prompt: String,
    },
    /// Search projects, skills and achievements
    Search {
        /// Search text (empty lists the categories)
        #[arg(default_value = "")]
        query: String,
    },
    /// Send a message through the contact form
    Contact {
        /// Your e-mail address
        #[arg(long)]
        email: String,
        /// Message subject
        #[arg(long, default_value = "")]
        subject: String,
        /// Message body
        #[arg(long, default_value = "")]
        body: String,
    },
    /// Download or open the résumé
    Resume {
        #[command(subcommand)]
        command: ResumeCommands,
    },
    /// Print the portfolio as plain text
    Print,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ResumeCommands {
    /// Download the résumé document
    Download {
        /// Directory to save into (default: [resume] download_dir, then Downloads)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
    /// Open the résumé in the browser
    Open,
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());
    // An exported FOLIO_VIEW must not break one-shot commands; only the flag conflicts.
    if cli.command.is_some() && matches.value_source("view") == Some(ValueSource::CommandLine) {
        Cli::command()
            .error(
                ErrorKind::ArgumentConflict,
                "--view only applies to the interactive portfolio, not to subcommands",
            )
            .exit();
    }

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, view } = cli;

    // Config commands must work even when the config file is broken.
    if let Some(Commands::Config { command }) = &command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        };
    }

    let config = config::Config::load().context("load config")?;

    let Some(command) = command else {
        // The UI owns the terminal, so logs go to a file.
        let _guard = logging::init(&config.logging, Sink::File)?;
        return commands::interactive::run(config, view.as_deref()).await;
    };

    let _guard = logging::init(&config.logging, Sink::Stderr)?;
    match command {
        Commands::Ask { prompt } => commands::ask::run(&config, &prompt).await,
        Commands::Search { query } => {
            commands::search::run(&query);
            Ok(())
        }
        Commands::Contact {
            email,
            subject,
            body,
        } => commands::contact::run(&config, email, subject, body).await,
        Commands::Resume { command } => match command {
            ResumeCommands::Download { dir } => {
                commands::resume::download(&config, dir.as_deref()).await
            }
            ResumeCommands::Open => commands::resume::open(&config),
        },
        Commands::Print => {
            commands::print::run();
            Ok(())
        }
        Commands::Config { .. } => Ok(()),
    }
}
