use std::io;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use crossterm::cursor;
use crossterm::event;
use crossterm::event::Event as CtEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use toruslife::camera::Camera;
use toruslife::config::Config;
use toruslife::export::GifRecorder;
use toruslife::grid::Grid;
use toruslife::step::StepEngine;

/// Runs Conway's Game of Life simulation.
#[derive(Parser)]
struct Args {
    /// Side length of the square grid. Unusable values fall back to the
    /// default.
    #[arg(long)]
    grid_size: Option<String>,

    /// Also record the animation to a gif at this path
    #[arg(long)]
    mov_file: Option<PathBuf>,

    /// Milliseconds between generations
    #[arg(long)]
    interval: Option<String>,
}

enum Event {
    Exit,
}

fn handle_event(event: CtEvent) -> Option<Event> {
    match event {
        CtEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }
            | KeyEvent {
                code: KeyCode::Esc, ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::Exit),
            _ => None,
        },
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::resolve(
        args.grid_size.as_deref(),
        args.interval.as_deref(),
        args.mov_file,
    );

    let mut grid = Grid::random(
        config.grid_size,
        config.alive_probability,
        &mut rand::thread_rng(),
    );
    let mut engine = StepEngine::new(config.grid_size);
    let mut cam = Camera::new(config.grid_size);

    let mut recorder = match &config.output {
        Some(path) => {
            let recorder = GifRecorder::create(path, config.grid_size, config.interval)
                .with_context(|| format!("Failed to record to {}", path.display()))?;

            Some(recorder)
        }
        None => None,
    };

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();

    let mut generation: u64 = 0;

    loop {
        let t = Instant::now();

        // Poll input for at most one tick
        let event = if event::poll(config.interval)? {
            handle_event(event::read()?)
        } else {
            None
        };

        if let Some(Event::Exit) = event {
            break;
        }

        engine.advance(&mut grid);
        generation += 1;

        debug!(generation, population = grid.population(), "advanced");

        cam.draw(&grid);
        let frame = cam.render();

        execute!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;

        for line in frame.lines() {
            execute!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        if let Some(recorder) = recorder.as_mut() {
            recorder.record(&grid).context("Failed to record frame")?;
        }

        let time_left = config.interval.saturating_sub(t.elapsed());
        thread::sleep(time_left);
    }

    terminal::disable_raw_mode()?;

    Ok(())
}
