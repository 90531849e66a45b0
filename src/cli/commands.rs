use crate::booking::booking_id_pattern;
use crate::bus::{Command, CommandBus, RenderEvent};
use crate::config::{Config, get_config_path, load_config, save_config};
use crate::errors::FrontdeskError;
use crate::responder::Responder;
use crate::surface::{Surface, TerminalSurface};
use crate::tabs::Tab;
use crate::widget::WidgetStore;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[derive(Parser)]
#[command(name = "frontdesk")]
#[command(about = "Front-desk chat widget with a verified booking channel", version)]
pub struct Cli {
    /// Path to config.json (defaults to ~/.frontdesk/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config if none exists
    Init,
    /// Open the interactive chat widget
    Chat,
    /// Check a booking identifier against the gate
    Verify {
        /// Candidate booking ID, e.g. BK00042
        id: String,
    },
    /// Show version and effective configuration
    Status,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())
        .map_err(|e| FrontdeskError::Config(e.to_string()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::try_new(&config.log_filter)
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Init => run_init(cli.config.as_deref()),
        Commands::Chat => run_chat(&config).await,
        Commands::Verify { id } => run_verify(&id),
        Commands::Status => run_status(&config),
    }
}

/// One parsed REPL line.
#[derive(Debug)]
enum Input {
    Command(Command),
    Transcript,
    Quit,
}

/// Parse a REPL line against the current widget state. Plain text is a
/// send to the active tab; slash directives drive everything else.
fn parse_line(line: &str, store: &WidgetStore) -> Result<Input, FrontdeskError> {
    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix('/') {
        let mut parts = rest.splitn(2, char::is_whitespace);
        let directive = parts.next().unwrap_or("");
        let arg = parts.next().map(str::trim).unwrap_or("");
        return match directive {
            "quit" | "exit" => Ok(Input::Quit),
            "transcript" => Ok(Input::Transcript),
            "tab" => {
                let tab = Tab::from_str(arg).map_err(FrontdeskError::Input)?;
                Ok(Input::Command(Command::ActivateTab { tab }))
            }
            "verify" => {
                if arg.is_empty() {
                    return Err(FrontdeskError::Input(
                        "Usage: /verify <booking-id>".to_string(),
                    ));
                }
                Ok(Input::Command(Command::VerifyBooking {
                    candidate: arg.to_string(),
                }))
            }
            other => Err(FrontdeskError::Input(format!(
                "Unknown directive: /{} (try /tab, /verify, /transcript, /quit)",
                other
            ))),
        };
    }

    let tab = store.active_tab();
    if tab == Tab::Booking && !store.booking().is_verified() {
        return Err(FrontdeskError::Input(
            "Verify your booking first: /verify BK#####".to_string(),
        ));
    }
    Ok(Input::Command(Command::SendMessage {
        tab,
        text: line.to_string(),
    }))
}

async fn run_chat(config: &Config) -> Result<()> {
    let mut store = WidgetStore::new();
    let mut bus = CommandBus::new();
    let responder = Responder::new(
        Duration::from_millis(config.response_delay_ms),
        bus.command_tx.clone(),
    );
    let surface = TerminalSurface::new();

    info!(delay_ms = config.response_delay_ms, "Starting chat widget");

    // Replay the initial state (active tab, seeded welcome) before
    // accepting input, so the surface matches the store from line one.
    surface
        .present(&RenderEvent::TabActivated {
            tab: store.active_tab(),
        })
        .await?;
    for msg in store.timeline(Tab::General).messages() {
        surface
            .present(&RenderEvent::MessageAppended {
                tab: Tab::General,
                sender: msg.sender,
                text: msg.text.clone(),
            })
            .await?;
    }

    let (line_tx, mut line_rx) = tokio::sync::mpsc::unbounded_channel::<String>();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    loop {
        tokio::select! {
            maybe_line = line_rx.recv() => {
                let Some(line) = maybe_line else { break };
                match parse_line(&line, &store) {
                    Ok(Input::Quit) => break,
                    Ok(Input::Transcript) => {
                        let transcript = store.timeline(store.active_tab()).to_json();
                        println!("{}", serde_json::to_string_pretty(&transcript)?);
                    }
                    Ok(Input::Command(cmd)) => bus.submit(cmd),
                    Err(err) => println!("! {}", err),
                }
            }
            maybe_cmd = bus.next_command() => {
                let Some(cmd) = maybe_cmd else { break };
                for event in store.dispatch(cmd) {
                    // Every typing cycle gets exactly one timer; the
                    // store never emits TypingStarted while pending.
                    if let RenderEvent::TypingStarted { tab } = event {
                        responder.schedule(tab);
                    }
                    surface.present(&event).await?;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    info!("Chat widget closed");
    Ok(())
}

fn run_init(path: Option<&Path>) -> Result<()> {
    let target = match path {
        Some(p) => p.to_path_buf(),
        None => get_config_path()?,
    };
    if target.exists() {
        println!("config already exists at {}", target.display());
        return Ok(());
    }
    save_config(&Config::default(), Some(&target))?;
    println!("wrote default config to {}", target.display());
    Ok(())
}

fn run_verify(id: &str) -> Result<()> {
    if booking_id_pattern().is_match(id.trim()) {
        println!("accepted: {}", id.trim());
        Ok(())
    } else {
        println!("rejected: expected BK followed by five digits (e.g. BK00042)");
        std::process::exit(1);
    }
}

fn run_status(config: &Config) -> Result<()> {
    println!("frontdesk {}", env!("CARGO_PKG_VERSION"));
    println!(
        "config path: {}",
        get_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "unknown".to_string())
    );
    println!("response delay: {}ms", config.response_delay_ms);
    println!("log filter: {}", config.log_filter);
    Ok(())
}
