//! Retro Pong entry point
//!
//! Headless attract mode: an autopilot plays the left paddle against the
//! computer opponent through the same session state machine a windowed
//! front end would drive.
//!
//! Usage: `retro-pong [settings.json] [--matches N] [--realtime]`

use std::process::ExitCode;

use rand::Rng;

use retro_pong::platform::{FrameClock, InputEvent, KeyState};
use retro_pong::sim::RenderSnapshot;
use retro_pong::{Frame, GameConfig, Screen, Session, SessionStatus, Settings, SettingsError};

struct Args {
    settings_path: Option<String>,
    matches: u32,
    realtime: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        settings_path: None,
        matches: 1,
        realtime: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--realtime" => args.realtime = true,
            "--matches" => {
                let value = iter.next().ok_or("--matches needs a value")?;
                args.matches = value
                    .parse()
                    .map_err(|_| format!("--matches: not a number: {value}"))?;
            }
            other if other.starts_with("--") => return Err(format!("unknown flag {other}")),
            path => args.settings_path = Some(path.to_string()),
        }
    }
    Ok(args)
}

/// Hold the key that brings the left paddle's centre toward the ball's
fn autopilot(field: &RenderSnapshot, config: &GameConfig) -> KeyState {
    let paddle_center = field.left_paddle.y + config.paddle_height / 2.0;
    let ball_center = field.ball.y + config.ball_size / 2.0;
    let slack = config.paddle_height / 4.0;
    KeyState {
        up: ball_center < paddle_center - slack,
        down: ball_center > paddle_center + slack,
        ..Default::default()
    }
}

fn run(args: Args) -> Result<(), SettingsError> {
    let settings = match &args.settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let config = GameConfig::default();
    config.validate()?;

    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    log::info!(
        "seed {seed}, difficulty {:.2}, {} match(es)",
        settings.ai_difficulty,
        args.matches
    );

    let mut session = Session::new(config.clone(), seed, settings.ai_difficulty);
    let mut clock = args.realtime.then(|| FrameClock::new(settings.tick_rate));
    let mut played = 0u32;

    loop {
        let (events, keys) = match session.frame() {
            // Single Player is the first option
            Frame::Menu(_) => (vec![InputEvent::Confirm], KeyState::default()),
            Frame::Playing(field) => {
                if log::log_enabled!(log::Level::Trace) {
                    if let Ok(json) = serde_json::to_string(&field) {
                        log::trace!("{json}");
                    }
                }
                (Vec::new(), autopilot(&field, &config))
            }
            Frame::Paused { .. } => (vec![InputEvent::Confirm], KeyState::default()),
            Frame::GameOver { result, .. } => {
                played += 1;
                println!(
                    "match {played}: {} wins {} - {}",
                    result.winner.label(),
                    result.score_left,
                    result.score_right
                );
                if played < args.matches {
                    (vec![InputEvent::Confirm], KeyState::default())
                } else {
                    // Down twice lands on Quit
                    let quit = vec![InputEvent::Down, InputEvent::Down, InputEvent::Confirm];
                    (quit, KeyState::default())
                }
            }
        };

        if session.step(&events, &keys) == SessionStatus::Exit {
            break;
        }
        if let (Some(clock), Screen::Playing) = (clock.as_mut(), session.screen()) {
            clock.wait();
        }
    }

    let wins = session.match_state().scoreboard.single;
    println!("single-player wins: {} x {}", wins.left, wins.right);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Retro Pong (headless) starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("usage: retro-pong [settings.json] [--matches N] [--realtime]");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
