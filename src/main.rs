use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use standup_core::models::NoteConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use standup::commands;
use standup::config::ConfigFile;

#[derive(Parser)]
#[command(name = "standup")]
#[command(about = "Structured daily standup notes")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a pasted update into sections (reads stdin without FILE)
    Parse {
        file: Option<PathBuf>,

        /// Convert every section to bullets
        #[arg(long, conflicts_with = "text")]
        bullets: bool,

        /// Convert every section to free text
        #[arg(long)]
        text: bool,
    },
    /// Show which sections hold yesterday's and today's work
    Roles,
    /// Move today's section into yesterday's and clear today
    Rollover {
        /// Note state JSON
        #[arg(long)]
        state: PathBuf,

        /// Overwrite yesterday's section even if it has content
        #[arg(short, long)]
        yes: bool,
    },
    /// Render a note as markdown
    Render {
        /// Note state JSON
        #[arg(long)]
        state: PathBuf,

        /// Put today's date above the note
        #[arg(long)]
        date: bool,
    },
    /// Inspect or change the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
    /// Restore the default configuration
    Reset,
}

/// Logs always go to stderr; stdout carries command output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "standup=info,standup_core=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config_file = ConfigFile::locate(cli.config.as_deref())?;

    let output = match cli.command {
        Commands::Parse {
            file,
            bullets,
            text,
        } => {
            let config = config_file.load_or_default();
            let input = read_input(file.as_deref())?;
            let hint = match (bullets, text) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            commands::parse(&config, &input, hint)?
        }
        Commands::Roles => commands::roles(&config_file.load_or_default())?,
        Commands::Rollover { state, yes } => {
            let config = config_file.load()?;
            let state_json = read_input(Some(state.as_path()))?;
            commands::rollover(&config, &state_json, yes)?
        }
        Commands::Render { state, date } => {
            let config = config_file.load()?;
            let state_json = read_input(Some(state.as_path()))?;
            let date = date.then(|| chrono::Local::now().date_naive());
            commands::render(&config, &state_json, date)?
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = config_file.load()?;
                serde_json::to_string_pretty(&config).context("Failed to serialize config")?
            }
            ConfigAction::Path => config_file.path().display().to_string(),
            ConfigAction::Init { force } => {
                if config_file.exists() && !force {
                    bail!(
                        "{} already exists; pass --force to overwrite it",
                        config_file.path().display()
                    );
                }
                config_file.save(&NoteConfig::default())?;
                config_file.path().display().to_string()
            }
            ConfigAction::Reset => {
                config_file.save(&NoteConfig::default())?;
                tracing::info!("Configuration restored to defaults");
                config_file.path().display().to_string()
            }
        },
    };

    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }

    Ok(())
}
