#![forbid(unsafe_code)]

//! GlyphLife demo binary: animate terminal text as Conway's Game of Life.

mod cli;
mod term_host;

use std::fs;
use std::process;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};

use glife_runtime::{Screensaver, ScreensaverConfig, Session, SessionConfig};
use term_host::{TermGuard, TermHost};

const DEFAULT_SEED: &str = "\
  ### ###   oo  oo   ### ###
 #   #   # o  oo  o #   #   #
 #   #   # o      o #   #   #
  ### ###   o    o   ### ###
             o  o
    * * *    o  o    * * *
   *     *    oo    *     *
    * * *           * * *
";

fn main() {
    let opts = cli::Opts::parse();
    init_logging();

    if let Err(err) = run(&opts) {
        eprintln!("glife-demo: {err}");
        process::exit(1);
    }
}

fn init_logging() {
    if std::env::var_os("GLIFE_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_env("GLIFE_LOG"))
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run(opts: &cli::Opts) -> Result<(), Box<dyn std::error::Error>> {
    let seed = match &opts.file {
        Some(path) => fs::read_to_string(path)?,
        None => DEFAULT_SEED.to_owned(),
    };

    let _guard = TermGuard::new()?;
    let mut host = TermHost::new(opts.panes, &seed)?;
    let interval = Duration::from_millis(opts.interval_ms);

    if opts.screensaver {
        run_screensaver(&mut host, opts, interval)?;
    } else {
        let mut session = Session::new(SessionConfig {
            interval,
            max_generations: opts.generations,
        });
        session.run(&mut host)?;
        drain_one_event();
        tracing::info!(generations = session.generation(), "demo session done");
    }

    Ok(())
}

fn run_screensaver(
    host: &mut TermHost,
    opts: &cli::Opts,
    interval: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut saver = Screensaver::new(ScreensaverConfig {
        idle_after: Duration::from_secs(opts.idle_secs),
        generations: opts.generations.unwrap_or(256),
        interval,
    });
    saver.enable(host);

    loop {
        let threshold = host
            .idle_threshold()
            .unwrap_or(Duration::from_secs(opts.idle_secs));
        if event::poll(threshold)? {
            // Activity: consume the event and reset the idle wait.
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        saver.disable(host);
                        return Ok(());
                    }
                    _ => {}
                }
            }
        } else {
            // Quiet for the whole threshold: the idle timer fires.
            saver.on_idle(host)?;
        }
    }
}

/// Consume the keypress that stopped a session so it does not leak into the
/// shell after the alternate screen closes.
fn drain_one_event() {
    if matches!(event::poll(Duration::ZERO), Ok(true)) {
        let _ = event::read();
    }
}
