use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use trex_runner::audio::SoundBank;
use trex_runner::config::{parse_args, usage, Command, LaunchConfig};
use trex_runner::core::constants::{FRAME_BUDGET_MS, MAX_FRAME_DT_MS};
use trex_runner::game::{process_input, tick_game, GameInput, GameWorld};
use trex_runner::input::{map_key_event, DuckHold, KeyAction};
use trex_runner::ui;

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() -> io::Result<()> {
    let config = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Play(config)) => config,
        Ok(Command::Help) => {
            println!("{}", usage());
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("trex-runner {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", usage());
            std::process::exit(1);
        }
    };

    let mut world = GameWorld::new();
    let mut sounds = open_sounds(&config, &mut world);
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    // Key release events let Down be held; otherwise DuckHold fakes them
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run_game(&mut terminal, &mut world, &mut sounds, &mut rng, enhanced);

    // Cleanup terminal, even when the loop failed
    if enhanced {
        terminal
            .backend_mut()
            .execute(PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    println!("High score this session: {}", world.high_score);
    Ok(())
}

/// Build the sound bank and note what happened in the session log.
fn open_sounds(config: &LaunchConfig, world: &mut GameWorld) -> SoundBank {
    if config.mute {
        world.log.info("Sound muted");
        return SoundBank::disabled();
    }

    let (bank, report) = SoundBank::load(&config.sound_dir);
    for warning in report.warnings {
        world.log.warn(warning);
    }
    if !report.loaded.is_empty() {
        world
            .log
            .info(format!("Loaded {} sound(s)", report.loaded.len()));
    }
    bank
}

/// Fixed-rate frame loop: input, update, draw, sleep.
fn run_game(
    terminal: &mut Term,
    world: &mut GameWorld,
    sounds: &mut SoundBank,
    rng: &mut ChaCha8Rng,
    enhanced: bool,
) -> io::Result<()> {
    let budget = Duration::from_millis(FRAME_BUDGET_MS);
    let mut duck_hold = DuckHold::default();
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        let dt_ms = (frame_start.duration_since(last_frame).as_millis() as u64).min(MAX_FRAME_DT_MS);
        last_frame = frame_start;

        // Drain all pending input without blocking
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            match map_key_event(key) {
                Some(KeyAction::Quit) => return Ok(()),
                Some(KeyAction::Game(input)) => {
                    if !enhanced && input == GameInput::DuckPressed {
                        duck_hold.on_duck_pressed();
                    }
                    if let Some(cue) = process_input(world, input) {
                        sounds.play(cue);
                    }
                }
                None => {}
            }
        }
        if !enhanced {
            if let Some(release) = duck_hold.advance(dt_ms) {
                process_input(world, release);
            }
        }

        let result = tick_game(world, dt_ms, rng);
        for cue in result.cues {
            sounds.play(cue);
        }

        terminal.draw(|frame| ui::draw(frame, world))?;

        if let Some(rest) = budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}
