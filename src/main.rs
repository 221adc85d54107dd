use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use rsvp::app::{Playback, PlaybackState};
use rsvp::engine::{estimate_minutes, Config, RsvpError};
use rsvp::input::load_document;
use rsvp::ui::{TerminalGuard, TerminalSurface};

/// Read a text file one word at a time.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the text file to read
    #[arg(value_name = "TEXT_FILE")]
    text_file: PathBuf,

    /// Words per minute (50-1500)
    #[arg(
        value_name = "WPM",
        env = "RSVP_WPM",
        default_value_t = 300,
        allow_negative_numbers = true
    )]
    wpm: i64,

    /// Disable colour and bold on the focus letter
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{:?}", err);
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> Result<PlaybackState, RsvpError> {
    let mut config = Config::default().with_wpm(cli.wpm)?;
    config.display.styled = !cli.no_color;

    let document = load_document(&cli.text_file)?;
    let word_count = document.words.len();

    println!();
    println!(
        "Loaded {} words from '{}'",
        word_count,
        document.source.display()
    );
    println!("Reading speed: {} WPM", config.wpm);
    println!(
        "Estimated time: {:.1} minutes",
        estimate_minutes(word_count, config.wpm)
    );
    println!();
    println!("Starting in {} seconds...", config.countdown.as_secs());
    io::stdout().flush()?;

    let mut surface = TerminalSurface::stdout(config.display.clone());
    surface.interrupt_flag().register_signals()?;
    let mut playback = Playback::new(document.words, config);

    let state = {
        let _guard = TerminalGuard::new()?;
        playback.run(&mut surface)?
    };

    // Interruption is a normal way to stop reading
    Ok(state)
}
