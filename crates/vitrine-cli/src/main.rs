use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "A cinematic landing page for your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Theme to use for this session (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,

    /// Disable all animated movement
    #[arg(long)]
    reduced_motion: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Present the page (default)
    Run,
    /// List the built-in themes
    Themes,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a config file with the default settings
    Init,
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Session overrides
    if let Some(theme) = cli.theme {
        config.theme.name = theme;
    }
    if cli.reduced_motion {
        config.ui.reduced_motion = true;
    }

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Themes) => commands::themes::run(&config),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init => commands::config_cmd::init(),
            ConfigAction::Path => commands::config_cmd::path(),
            ConfigAction::Show => commands::config_cmd::show(&config),
        },
    }
}
