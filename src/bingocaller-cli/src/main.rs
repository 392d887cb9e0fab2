//! Bingo Caller CLI
//!
//! Draws and announces bingo balls from the terminal, either one per key press
//! or automatically on a timer.

mod display;

use bingocaller_core::{
    Board, BingoError, CalledBall, Caller, CallerMode, CommandSpeaker, Config, KokoroRecorder,
    SilentSpeaker, SpeechBackend, config, speech,
};
use clap::Parser;
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{error, info, warn};

use display::Status;

/// Auto-call delays offered at the start of each round, in seconds.
const AUTO_CALL_CHOICES: [u64; 5] = [0, 5, 10, 15, 20];

type InputLines = Lines<BufReader<Stdin>>;

#[derive(Parser)]
#[command(
    name = "bingocaller",
    version,
    about = "Bingo Caller - draw and announce 75-ball bingo",
    long_about = "A terminal bingo caller that draws balls without replacement and announces them with optional speech."
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Default caller mode: plain, traditional, kid-friendly or pirate
    #[arg(short, long, value_name = "MODE")]
    mode: Option<String>,

    /// Default seconds between automatic calls (0 = manual)
    #[arg(short, long, value_name = "SECS")]
    auto_call: Option<u64>,

    /// Seed for reproducible draws
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Speech backend: none, command or kokoro
    #[arg(long, value_name = "BACKEND")]
    speech: Option<String>,

    /// kokoro voice ID
    #[arg(long, value_name = "VOICE")]
    voice: Option<String>,

    /// Write each round's kokoro audio to this WAV file
    #[arg(long, value_name = "PATH")]
    record: Option<PathBuf>,

    /// Log file location
    #[arg(long, default_value = "logs/bingocaller.log", value_name = "PATH")]
    log_file: PathBuf,

    /// List available kokoro voices and exit
    #[arg(long)]
    list_voices: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => config::default_config(),
    };
    apply_overrides(&mut config, &cli)?;

    if cli.list_voices {
        println!("{}", "Available voices:".bold());
        for voice in speech::available_english_voices().await? {
            println!("  - {}", voice);
        }
        return Ok(());
    }
    config.validate()?;

    let speech = build_speech(&config).await;
    let mut caller = Caller::from_config(&config, speech)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        display::clear_screen();
        display::print_header();
        println!("1. Start new round");
        println!("2. Exit");

        match read_choice(&mut lines, "Select an option: ").await? {
            Some(choice) if choice == "1" => {
                let mode = choose_mode(&mut lines, config.caller.mode).await?;
                let delay = choose_delay(&mut lines, config.caller.auto_call_secs).await?;
                run_round(&mut caller, &mut lines, mode, delay).await?;
            }
            Some(choice) if choice == "2" => break,
            Some(_) => continue,
            None => break,
        }
    }

    info!("bingo caller exiting");
    Ok(())
}

/// Command-line flags take precedence over the config file.
fn apply_overrides(config: &mut Config, cli: &Cli) -> Result<(), BingoError> {
    if let Some(mode) = &cli.mode {
        config.caller.mode = mode.parse()?;
    }
    if let Some(secs) = cli.auto_call {
        config.caller.auto_call_secs = secs;
    }
    if cli.seed.is_some() {
        config.caller.seed = cli.seed;
    }
    if let Some(backend) = &cli.speech {
        config.speech.backend = backend.parse()?;
    }
    if let Some(voice) = &cli.voice {
        config.speech.voice = voice.clone();
    }
    if cli.record.is_some() {
        config.speech.record_path = cli.record.clone();
    }
    Ok(())
}

/// Build the configured speech sink, falling back to silence if it cannot start.
async fn build_speech(config: &Config) -> Box<dyn speech::SpeechSink> {
    let speech = &config.speech;
    match speech.backend {
        SpeechBackend::None => Box::new(SilentSpeaker),
        SpeechBackend::Command => {
            Box::new(CommandSpeaker::new(speech.program.clone(), speech.args.clone()))
        }
        SpeechBackend::Kokoro => {
            match KokoroRecorder::new(speech.voice.clone(), speech.rate, speech.record_path.clone())
                .await
            {
                Ok(recorder) => Box::new(recorder),
                Err(e) => {
                    warn!("kokoro unavailable, continuing without speech: {}", e);
                    eprintln!(
                        "{}",
                        format!("Warning: speech disabled ({}).", e).yellow()
                    );
                    Box::new(SilentSpeaker)
                }
            }
        }
    }
}

async fn read_choice(lines: &mut InputLines, prompt: &str) -> std::io::Result<Option<String>> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?.map(|line| line.trim().to_string()))
}

async fn choose_mode(lines: &mut InputLines, default: CallerMode) -> std::io::Result<CallerMode> {
    println!();
    println!("{}", "Select Caller Mode:".bold());
    for (i, mode) in CallerMode::ALL.iter().enumerate() {
        let marker = if *mode == default { " [default]" } else { "" };
        println!("{}. {}{}", i, mode.display_name(), marker);
    }

    let prompt = format!(
        "Enter choice (0-{}, Enter for {}): ",
        CallerMode::ALL.len() - 1,
        default.display_name()
    );
    let input = read_choice(lines, &prompt).await?.unwrap_or_default();
    Ok(parse_mode_choice(&input).unwrap_or(default))
}

/// A menu index or a mode name.
fn parse_mode_choice(input: &str) -> Option<CallerMode> {
    if let Ok(index) = input.parse::<usize>() {
        return CallerMode::ALL.get(index).copied();
    }
    input.parse().ok()
}

async fn choose_delay(
    lines: &mut InputLines,
    default_secs: u64,
) -> std::io::Result<Option<Duration>> {
    println!();
    println!("{}", "Select auto-call delay:".bold());
    for (i, secs) in AUTO_CALL_CHOICES.iter().enumerate() {
        println!("{}. {}", i, delay_label(*secs));
    }

    let prompt = format!(
        "Enter choice (0-{}, Enter for {}): ",
        AUTO_CALL_CHOICES.len() - 1,
        delay_label(default_secs)
    );
    let input = read_choice(lines, &prompt).await?.unwrap_or_default();
    let secs = input
        .parse::<usize>()
        .ok()
        .and_then(|i| AUTO_CALL_CHOICES.get(i).copied())
        .unwrap_or(default_secs);

    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}

fn delay_label(secs: u64) -> String {
    if secs == 0 {
        "Disabled".to_string()
    } else {
        format!("{}s", secs)
    }
}

/// Call one round until every ball is out or the user quits.
///
/// This task is the only thing that touches `caller`, so timer ticks and key
/// presses can never trigger overlapping draws.
async fn run_round(
    caller: &mut Caller,
    lines: &mut InputLines,
    mode: CallerMode,
    delay: Option<Duration>,
) -> std::io::Result<()> {
    caller.start_round(mode);
    info!(mode = %mode, auto_call = ?delay, "round started");

    let mut ticker = delay.map(|d| {
        let mut interval = tokio::time::interval(d);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    });
    let auto_call = ticker.is_some();
    let mut paused = false;
    let mut last: Option<CalledBall> = None;

    redraw(caller, last.as_ref(), auto_call, paused);

    while caller.remaining_count() > 0 {
        tokio::select! {
            _ = next_tick(&mut ticker), if !paused => {
                last = call_next(caller).or(last);
                redraw(caller, last.as_ref(), auto_call, paused);
            }
            line = lines.next_line() => {
                let Some(input) = line? else {
                    break;
                };
                match input.trim().to_lowercase().as_str() {
                    "q" => break,
                    "p" if auto_call => {
                        paused = !paused;
                        info!(paused, "auto-call toggled");
                        if let Some(interval) = ticker.as_mut() {
                            interval.reset();
                        }
                        redraw(caller, last.as_ref(), auto_call, paused);
                    }
                    "p" => {}
                    _ => {
                        last = call_next(caller).or(last);
                        if let Some(interval) = ticker.as_mut() {
                            interval.reset();
                        }
                        redraw(caller, last.as_ref(), auto_call, paused);
                    }
                }
            }
        }
    }

    caller.end_round();
    if caller.remaining_count() == 0 {
        println!("{}", "All balls have been called this round!".bright_green().bold());
    }
    println!();
    print!("Round ended. Press Enter to return to main menu.");
    std::io::stdout().flush()?;
    lines.next_line().await?;
    Ok(())
}

/// Wait for the next auto-call tick; never resolves in manual mode.
async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

/// Draw and announce, letting a slow speech backend block this worker only.
fn call_next(caller: &mut Caller) -> Option<CalledBall> {
    tokio::task::block_in_place(|| caller.call_next())
}

fn redraw(caller: &Caller, last: Option<&CalledBall>, auto_call: bool, paused: bool) {
    display::clear_screen();
    display::print_header();
    display::print_board(&Board::from_engine(caller.engine()));
    display::print_status(&Status {
        last_ball: last.map(|called| called.ball.to_string()),
        prompt: last.map(|called| called.prompt.as_str()),
        remaining: caller.remaining_count(),
        mode: caller.mode(),
        auto_call,
        paused,
    });
    if let Err(e) = std::io::stdout().flush() {
        error!("failed to flush stdout: {}", e);
    }
}

/// Initialize tracing to log to a file (the terminal is used for the board).
fn init_tracing(log_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    if let Some(dir) = log_file.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let file = std::fs::File::create(log_file)?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    EnvFilter::new("bingocaller=info,bingocaller_core=info,warn")
                }),
        )
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
