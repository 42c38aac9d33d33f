//! Terminal sandbox runner (default binary).
//!
//! `tui-sandbox [play] [flags]` runs the interactive session. `dump` prints
//! the generated grid as ASCII and `snapshot` prints the world summary as
//! JSON; neither touches the terminal mode.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_sandbox::engine::{ActionOutcome, Command, EventLog, GameLoop, LogEvent, SandboxConfig};
use tui_sandbox::input::{handle_key_event, should_quit, InputHandler};
use tui_sandbox::term::{FrameBuffer, RenderThrottle, SandboxView, TerminalRenderer, Viewport};
use tui_sandbox::types::{ControlMode, GameAction, TICK_MS};

/// Redraw interval while nothing on screen changes.
const STATIC_REDRAW_MS: u64 = 500;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = SandboxConfig::load(&args)?;

    match config.command {
        Command::Dump => dump(&config),
        Command::Snapshot => snapshot(&config),
        Command::Play => play(&config),
    }
}

fn dump(config: &SandboxConfig) -> Result<()> {
    let world = config.build_world();
    let mut out = std::io::stdout().lock();
    out.write_all(world.grid().to_ascii().as_bytes())?;
    out.flush()?;
    Ok(())
}

fn snapshot(config: &SandboxConfig) -> Result<()> {
    let world = config.build_world();
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &world.snapshot())?;
    out.write_all(b"\n")?;
    Ok(())
}

fn play(config: &SandboxConfig) -> Result<()> {
    let mut log = match &config.log_path {
        Some(path) => EventLog::open(path)?,
        None => EventLog::disabled(),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    log.flush();
    result
}

fn run(term: &mut TerminalRenderer, config: &SandboxConfig, log: &mut EventLog) -> Result<()> {
    let mut game = config.build_loop();
    log.record(&LogEvent::Start {
        seed: config.seed,
        width: config.width,
        height: config.height,
        density: game.pixels().density(),
        ruleset: config.ruleset.name.to_string(),
        mode: game.mode().as_str().to_string(),
    });
    log.record(&LogEvent::Generated {
        snapshot: game.world().snapshot(),
    });

    let view = SandboxView::new();
    let mut input_handler = InputHandler::new();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let animating = !game.is_paused()
            && (game.world().units().len() > 1 || game.mode() == ControlMode::Wander);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, game.fingerprint(), animating) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&game, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            log.record(&LogEvent::Quit {
                                frame: game.world().frame(),
                            });
                            return Ok(());
                        }

                        if let Some(action) = input_handler.handle_key_press(key.code) {
                            apply(&mut game, action, log);
                        } else if let Some(action) = handle_key_event(key) {
                            // Held movement keys are repeated by the input handler.
                            if !matches!(action, GameAction::Move(_)) {
                                apply(&mut game, action, log);
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Terminal auto-repeat is ignored; the input handler repeats.
                    }
                    KeyEventKind::Release => {
                        input_handler.handle_key_release(key.code);
                    }
                },
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            for action in input_handler.update(TICK_MS) {
                apply(&mut game, action, log);
            }
            game.frame(TICK_MS);
        }
    }
}

fn apply(game: &mut GameLoop, action: GameAction, log: &mut EventLog) {
    let outcome = game.apply_action(action);
    log.record(&LogEvent::Action {
        frame: game.world().frame(),
        action: action.as_str().to_string(),
        outcome: outcome.as_str().to_string(),
    });
    if let ActionOutcome::Regenerated { .. } = outcome {
        log.record(&LogEvent::Generated {
            snapshot: game.world().snapshot(),
        });
    }
}
