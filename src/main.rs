//! Human Mouse Move.
//!
//! Bewegt den Mauszeiger entlang menschenähnlicher Kurven, entweder über eine
//! feste Zielliste oder endlos zu Zufallszielen.

use clap::CommandFactory;
use human_mouse_move::{
    parse_tokens, Cli, CurveDump, MoveOptions, PlaybackDriver, SeededRandom, ThreadSleeper,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    log::info!("Human Mouse Move v{} startet...", env!("CARGO_PKG_VERSION"));

    let config_path = cli.config.clone().unwrap_or_else(MoveOptions::config_path);
    let base = MoveOptions::load_from_file(&config_path);

    let request = match parse_tokens(cli.tokens.as_slice(), base) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("error: {e}\n");
            eprintln!("{}", Cli::command().render_long_help());
            return ExitCode::from(2);
        }
    };

    match run(&cli, request) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Abbruch: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, request: human_mouse_move::RunRequest) -> anyhow::Result<()> {
    let rng = match cli.seed {
        Some(seed) => {
            log::info!("Zufalls-Seed: {}", seed);
            SeededRandom::from_seed(seed)
        }
        None => SeededRandom::from_entropy(),
    };

    let options = &request.options;
    log::info!(
        "Backend {:?}, Tempo {}..{}, Pause {}..{} s, Bereich {:?}",
        cli.backend(),
        options.min_speed,
        options.max_speed,
        options.min_pause,
        options.max_pause,
        options.bounds()
    );

    let mut driver = PlaybackDriver::new(
        cli.backend().create(),
        rng,
        ThreadSleeper,
        options.playback_config(),
    );
    if let Some(path) = &cli.debug_curve {
        driver = driver.with_curve_dump(CurveDump::create(path)?);
    }

    driver.run(request.destinations(), options.count, options.pause_range())?;
    Ok(())
}
