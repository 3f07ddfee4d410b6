use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::game::PlayerRegistry;
use connect_four::session::{Command, Reply, Session};

/// Play Connect Four from the command line.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four from the command line")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the default grid width
    #[arg(long)]
    width: Option<usize>,

    /// Override the default grid height
    #[arg(long)]
    height: Option<usize>,

    /// Start without the configured players (register them with `player`)
    #[arg(long)]
    no_players: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        app_config.game.width = width;
    }
    if let Some(height) = cli.height {
        app_config.game.height = height;
    }
    app_config.validate().context("invalid command-line overrides")?;

    let registry = if cli.no_players {
        PlayerRegistry::new()
    } else {
        app_config.registry().context("registering configured players")?
    };

    let session = Session::new(app_config.game, registry);
    run(session, io::stdin().lock(), io::stdout().lock()).context("session I/O")
}

fn run(mut session: Session, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    writeln!(output, "Connect Four. Type `help` for commands.")?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match Command::parse_line(&line) {
            Ok(None) => {}
            Ok(Some(command)) => match session.execute(command) {
                Ok(Reply::Quit) => return Ok(()),
                Ok(Reply::Message(message)) => writeln!(output, "{}", message.trim_end())?,
                Err(err) => writeln!(output, "error: {err}")?,
            },
            // clap renders both usage errors and `help` output
            Err(err) => write!(output, "{}", err.render())?,
        }
        write!(output, "> ")?;
        output.flush()?;
    }
    Ok(())
}
