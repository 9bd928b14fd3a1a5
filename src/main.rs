//! Binary entrypoint for the chitchat CLI.
//!
//! Commands:
//! - `play [-g <1-4>] [--base-url <url>]` - duel the robot interactively
//! - `init` - create a starter `config.toml`
//!
//! Interactive bindings, all line input: while no session is live, `1`-`4`
//! picks a variant and an empty line (Return) starts the duel; during a
//! session, `1`-`9` plays that digit and an empty line auto-plays. `q`
//! quits, `h` reprints help.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use chitchat::config::Config;
use chitchat::duel::{
    Duel, DuelState, Emphasis, GameVariant, Opponent, OpponentClient, Side, Utterance,
};

/// Column the agent's right-aligned bubbles end at.
const RENDER_WIDTH: usize = 44;

#[derive(Parser)]
#[command(name = "chitchat")]
#[command(about = "An interactive chat-duel client for the Chitchat number game")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Duel the robot interactively
    Play {
        /// Game variant to open with (1-4); overrides the config default
        #[arg(short = 'g', long)]
        variant: Option<u8>,

        /// Opponent service base URL; overrides the config value
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Initialize a starter configuration file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            init_logging(&None, cli.verbose);
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Play { variant, base_url } => {
            // A missing config file is not an error for a game client
            // (the defaults point at the public service), but a broken
            // one is.
            let mut config = if tokio::fs::try_exists(&cli.config).await.unwrap_or(false) {
                Config::load(&cli.config).await?
            } else {
                Config::default()
            };
            if let Some(url) = base_url {
                config.api.base_url = url;
            }
            config.validate()?;
            init_logging(&Some(config.clone()), cli.verbose);
            info!("Starting chitchat v{}", env!("CARGO_PKG_VERSION"));

            let requested = variant.unwrap_or(config.game.default_variant);
            let variant = GameVariant::try_from(requested)
                .map_err(|_| anyhow!("variant must be between 1 and 4, got {}", requested))?;
            play(config, variant).await?;
        }
    }

    Ok(())
}

/// Interactive duel loop over stdin lines.
async fn play(config: Config, mut variant: GameVariant) -> Result<()> {
    let mut duel = Duel::new(OpponentClient::new(config.api));

    print_help();
    print_prompt(&duel, variant);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            "q" | "quit" => break,
            "h" | "help" => print_help(),
            _ => {
                if duel.state() == DuelState::Active {
                    drive_round(&mut duel, input).await;
                } else {
                    variant = drive_lobby(&mut duel, variant, input).await;
                }
                render(&duel);
            }
        }
        print_prompt(&duel, variant);
    }
    Ok(())
}

/// Handle input while no session is live: variant selection and start.
async fn drive_lobby<O: Opponent>(
    duel: &mut Duel<O>,
    variant: GameVariant,
    input: &str,
) -> GameVariant {
    if input.is_empty() {
        if let Err(e) = duel.start(variant).await {
            println!("could not start: {}", e);
        }
        return variant;
    }
    match input.parse::<u8>().ok().and_then(|n| GameVariant::try_from(n).ok()) {
        Some(picked) => {
            println!("variant set to {}", picked);
            picked
        }
        None => {
            println!("no session running - press Return to start, 1-4 to pick a variant");
            variant
        }
    }
}

/// Handle input during a session: digit moves and auto-play.
async fn drive_round<O: Opponent>(duel: &mut Duel<O>, input: &str) {
    let result = if input.is_empty() {
        duel.auto_play_round().await
    } else {
        match input.parse::<i64>() {
            Ok(digit @ 1..=9) => duel.play_round(Utterance::Number(digit)).await,
            _ => {
                println!("play a digit 1-9, or press Return to auto-play");
                return;
            }
        }
    };
    if let Err(e) = result {
        // Retryable: the move bubble stays visible, scores are untouched.
        println!("round failed: {}", e);
    }
}

/// Redraw the transcript, progress row, and outcome, oldest entry first.
fn render<O: Opponent>(duel: &Duel<O>) {
    if duel.entries().next().is_none() {
        return;
    }
    println!();
    for entry in duel.entries() {
        match entry.side {
            Side::Robot => println!("  {}", entry.text),
            Side::Agent => {
                let marker = if entry.emphasis == Emphasis::AutoPlay { " *" } else { "" };
                let text = format!("{}{}", entry.text, marker);
                println!("{:>width$}", text, width = RENDER_WIDTH);
            }
        }
    }
    if let Some(progress) = duel.progress() {
        let t = progress.threshold as usize;
        let robot: String = (0..t)
            .map(|i| if (t - i) <= progress.robot as usize { '#' } else { '.' })
            .collect();
        let agent: String = (0..t)
            .map(|i| i < progress.agent as usize)
            .map(|filled| if filled { '#' } else { '.' })
            .collect();
        println!();
        println!(
            "  Robot {} [{}|{}] {} Agent   (first to {})",
            progress.robot, robot, agent, progress.agent, t
        );
    }
    if let Some(winner) = duel.winner() {
        println!("  *** {} wins the session ***", winner);
    }
}

/// Status prompt, same shape as the original's status line.
fn print_prompt<O: Opponent>(duel: &Duel<O>, variant: GameVariant) {
    use std::io::Write;
    let label = match duel.session() {
        Some(session) => format!("{} [{}]", session.game_code, variant),
        None => format!("No active game [{}]", variant),
    };
    print!("{}> ", label);
    let _ = std::io::stdout().flush();
}

fn print_help() {
    println!("chitchat - duel the robot");
    println!("  1-4     pick a game variant (while no session is running)");
    println!("  Return  start a session / auto-play the next move");
    println!("  1-9     play that digit");
    println!("  h       this help");
    println!("  q       quit");
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|cfg| cfg.logging.level.parse().ok())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    let file = config.as_ref().and_then(|cfg| cfg.logging.file.clone());
    if let Some(path) = file {
        if let Ok(f) = std::fs::OpenOptions::new().create(true).append(true).open(&path) {
            let sink = std::sync::Arc::new(std::sync::Mutex::new(f));
            // Echo to the console only when attached to a terminal.
            let is_tty = atty::is(atty::Stream::Stdout);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = sink.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        }
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
