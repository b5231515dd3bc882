//! Radioskill CLI: play an internet radio station from a spoken-style phrase

mod host;

use std::error::Error;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;
use crossbeam_channel::RecvTimeoutError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use radioskill::stream::url_exists;
use radioskill_app::config::dialogs::NO_STATION;
use radioskill_app::data::Settings;
use radioskill_app::skill::{RadioSkill, SkillHost};

use host::TerminalHost;

/// How often the wait loop checks whether the player has exited
const PLAYER_POLL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "radioskill", about = "Play internet radio from a phrase", version)]
struct Cli {
    /// Utterance, e.g. "play radio camry"
    phrase: Vec<String>,

    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Directory with <locale>/<name>.dialog and .regex overrides
    #[arg(long)]
    locale_dir: Option<PathBuf>,

    /// Check that the stream url answers before playing
    #[arg(long)]
    check: bool,

    /// Print the matched station and exit
    #[arg(long)]
    dry_run: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool, Box<dyn Error>> {
    let settings = match &cli.settings {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    let host = TerminalHost::new(
        &settings.locale,
        cli.locale_dir.clone(),
        settings.player_command.clone(),
    );
    let mut skill = RadioSkill::from_settings(host, &settings)?;

    let phrase = cli.phrase.join(" ");
    let Some(found) = skill.match_query_phrase(&phrase)? else {
        skill.host().speak_dialog(NO_STATION, &[], false)?;
        return Ok(false);
    };
    info!("{} ({:?})", found.title, found.level);

    if cli.dry_run {
        println!("{}\t{}", found.data.station, found.data.url);
        return Ok(true);
    }

    if cli.check {
        match url_exists(&found.data.url) {
            Ok(true) => {}
            Ok(false) => {
                eprintln!("Stream not reachable: {}", found.data.url);
                return Ok(false);
            }
            Err(e) => {
                eprintln!("Could not check stream: {e}");
                return Ok(false);
            }
        }
    }

    if !skill.start(&phrase, &found.data) {
        skill.shutdown();
        return Ok(false);
    }

    println!("Press Enter to stop");
    wait_for_stop(skill.host());

    skill.shutdown();
    skill.host().stop_player();
    Ok(true)
}

/// Block until Enter is pressed, stdin closes, or the player exits
fn wait_for_stop(host: &TerminalHost) {
    let (tx, rx) = crossbeam_channel::bounded(1);
    let spawned = thread::Builder::new()
        .name("stdin-wait".into())
        .spawn(move || {
            let mut line = String::new();
            let _ = io::stdin().lock().read_line(&mut line);
            let _ = tx.send(());
        });
    if let Err(e) = spawned {
        warn!("Could not watch stdin: {e}");
    }

    loop {
        match rx.recv_timeout(PLAYER_POLL) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                if host.player_finished() {
                    info!("Player exited");
                    break;
                }
            }
        }
    }
}
