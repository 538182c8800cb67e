//! Terminal Jospel runner (default binary).
//!
//! Interactive play uses crossterm for input and the framebuffer renderer from
//! `jospel::term`. With `--headless` it plays one game from the command line
//! placements and prints the final report as JSON.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use jospel::app::App;
use jospel::config::{Config, Mode};
use jospel::headless::run_headless;
use jospel::input::{handle_key_event, handle_seed_key_event, should_quit, should_quit_seed_entry};
use jospel::telemetry::init_tracing;
use jospel::term::{report_to_json, FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;
    info!(
        seed = config.seed.as_deref().unwrap_or("-"),
        line_set = config.line_set.as_str(),
        "starting jospel"
    );

    match &config.mode {
        Mode::Headless(strategy) => {
            let mut session = config.new_session()?;
            let report = run_headless(&mut session, strategy)?;
            println!("{}", report_to_json(&report)?);
            Ok(())
        }
        Mode::Interactive => {
            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&mut term, &config);

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    // Without --seed, ask for one before the first game.
    let mut app = match config.seed {
        Some(_) => App::new(config.new_session()?)?,
        None => App::with_seed_prompt(config.line_set),
    };
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(&view, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Turn-based: block until the next event.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let (quit, action) = if app.entering_seed() {
                    (should_quit_seed_entry(key), handle_seed_key_event(key))
                } else {
                    (should_quit(key), handle_key_event(key))
                };
                if quit {
                    return Ok(());
                }
                if let Some(action) = action {
                    app.apply(action)?;
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
