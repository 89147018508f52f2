//! Terminal crossing game runner (default binary).
//!
//! Renders through the framebuffer renderer, reads keys with crossterm, and
//! advances the simulation once per frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use log::{debug, info};

use tui_crossing::config::{AppConfig, USAGE};
use tui_crossing::core::{FrameClock, SimConfig, Simulation, TickEvents};
use tui_crossing::input::{translate_event, HostEvent};
use tui_crossing::logging;
use tui_crossing::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let mut config = AppConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !config.apply_args(&args)? {
        println!("{}", USAGE);
        return Ok(());
    }

    logging::init(config.log_path.as_deref())?;

    // Fail before touching the terminal.
    let sim_config = config.sim_config();
    let sim = Simulation::new(&sim_config)?;
    log_startup(&sim_config, config.frame_ms);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, sim, Duration::from_millis(config.frame_ms as u64));

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("session over");
    result
}

fn run(term: &mut TerminalRenderer, mut sim: Simulation, frame: Duration) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut clock = FrameClock::new(Instant::now());
    let mut deadline = Instant::now() + frame;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&sim, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Drain input until the frame deadline.
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match translate_event(&event::read()?) {
                Some(HostEvent::Quit) => return Ok(()),
                Some(HostEvent::Move(direction)) => sim.handle_input(direction),
                Some(HostEvent::Resize) => term.invalidate(),
                None => {}
            }
        }
        deadline += frame;
        let now = Instant::now();
        if deadline < now {
            // Fell behind: re-anchor instead of bursting.
            deadline = now + frame;
        }

        let events = sim.tick(clock.tick(now));
        log_events(&sim, events);
    }
}

fn log_startup(config: &SimConfig, frame_ms: u32) {
    info!(
        "starting: seed={} cols={} lanes={} safe_rows={} enemies={} collectables={} frame_ms={}",
        config.seed,
        config.cols,
        config.obstacle_lanes,
        config.safe_rows,
        config.enemy_count,
        config.roster.len(),
        frame_ms
    );
}

fn log_events(sim: &Simulation, events: TickEvents) {
    if events.is_empty() {
        return;
    }
    if let Some(kind) = events.picked_up {
        info!(
            "picked up {} (+{}), score={}",
            kind.as_str(),
            kind.points(),
            sim.score()
        );
    }
    if events.hit_by_enemy {
        info!("hit by enemy, high_score={}", sim.high_score());
    }
    if events.reached_goal {
        info!("reached goal, score={}", sim.score());
    }
    debug!("tick events: {:?}", events);
}
