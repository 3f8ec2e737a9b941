//! Mergington Activities CLI
//!
//! Terminal front end for the activities backend:
//! - List activities with availability and rosters
//! - Sign a student up
//! - Unregister a student (with confirmation)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mergington_activities::config::{generate_default_config, Config};
use mergington_activities::logging::init_tracing;
use mergington_activities::terminal::{render_list, render_notice, render_options, TerminalHost};
use mergington_activities::{ActivityPanelController, HttpActivityApi, ListView, NoticeKind};

#[derive(Parser)]
#[command(name = "activities")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse and manage Mergington extracurricular activities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Activities backend URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/mergington/config.toml or ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List activities, availability and participants
    List,

    /// Sign a student up for an activity
    Signup {
        /// Activity name
        activity: String,
        /// Student email
        email: String,
    },

    /// Remove a student from an activity
    Unregister {
        /// Activity name
        activity: String,
        /// Student email
        email: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print a default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_tracing(&config.logging);

    let assume_yes = matches!(cli.command, Commands::Unregister { yes: true, .. });
    let api = HttpActivityApi::new(&config.api.base_url, config.api.request_timeout())?;
    let controller = ActivityPanelController::new(
        api,
        TerminalHost::stdin(assume_yes),
        config.panel.panel_config(),
    );

    tracing::debug!(base_url = %config.api.base_url, "Using activities backend");

    match cli.command {
        Commands::List => {
            controller.load_activities().await;
            let state = controller.host().snapshot();
            print!("{}", render_list(&state));
            if matches!(state.list, ListView::Ready(_)) {
                println!("Options:");
                print!("{}", render_options(&state));
            }
            if matches!(state.list, ListView::Failed(_)) {
                std::process::exit(1);
            }
        }

        Commands::Signup { activity, email } => {
            controller.submit_signup(&email, &activity).await;
            finish(controller.host());
        }

        Commands::Unregister { activity, email, .. } => {
            controller.remove_participant(&activity, &email).await;
            let state = controller.host().snapshot();
            if state.notice.current().is_none() {
                println!("Cancelled");
                return Ok(());
            }
            finish(controller.host());
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

/// Print the notice left by a mutation and exit non-zero on errors
fn finish(host: &TerminalHost) {
    let state = host.snapshot();

    if let Some(line) = render_notice(&state) {
        println!("{}", line);
    }

    let failed = state
        .notice
        .visible_notice()
        .is_some_and(|n| n.kind == NoticeKind::Error);
    if failed {
        std::process::exit(1);
    }
}
