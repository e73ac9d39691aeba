#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via the `GLIFE_*` prefix.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
GlyphLife Demo: animate terminal text as Conway's Game of Life

USAGE:
    glife-demo [OPTIONS]

OPTIONS:
    --interval-ms=N      Milliseconds between generations (default: 125)
    --generations=N      Stop after N generations instead of running until
                         a key is pressed
    --panes=N            Number of animated panes, 1-8 (default: 2)
    --file=PATH          Seed panes from a text file instead of the
                         built-in banner
    --screensaver        Idle mode: animate after a quiet period, restore
                         on input, repeat until 'q'
    --idle-secs=N        Idle threshold for --screensaver (default: 10)
    --help, -h           Show this help message
    --version, -V        Show version

KEYS:
    any key              Stop the animation (restores the original text)
    q / Esc              Quit screensaver mode

ENVIRONMENT VARIABLES:
    GLIFE_INTERVAL_MS    Override --interval-ms
    GLIFE_GENERATIONS    Override --generations
    GLIFE_PANES          Override --panes
    GLIFE_IDLE_SECS      Override --idle-secs
    GLIFE_LOG            Tracing filter (logs go to stderr when set)
";

/// Parsed command-line options.
#[derive(Debug, Clone)]
pub struct Opts {
    pub interval_ms: u64,
    pub generations: Option<u64>,
    pub panes: usize,
    pub file: Option<String>,
    pub screensaver: bool,
    pub idle_secs: u64,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            interval_ms: 125,
            generations: None,
            panes: 2,
            file: None,
            screensaver: false,
            idle_secs: 10,
        }
    }
}

impl Opts {
    /// Parse process arguments, exiting on `--help`, `--version`, or a
    /// malformed option.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        if let Some(v) = env_u64("GLIFE_INTERVAL_MS") {
            opts.interval_ms = v;
        }
        if let Some(v) = env_u64("GLIFE_GENERATIONS") {
            opts.generations = Some(v);
        }
        if let Some(v) = env_u64("GLIFE_PANES") {
            opts.panes = v as usize;
        }
        if let Some(v) = env_u64("GLIFE_IDLE_SECS") {
            opts.idle_secs = v;
        }

        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--help" | "-h" => {
                    print!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("glife-demo {VERSION}");
                    process::exit(0);
                }
                "--screensaver" => opts.screensaver = true,
                _ => {
                    if let Some(v) = arg.strip_prefix("--interval-ms=") {
                        opts.interval_ms = parse_u64(&arg, v);
                    } else if let Some(v) = arg.strip_prefix("--generations=") {
                        opts.generations = Some(parse_u64(&arg, v));
                    } else if let Some(v) = arg.strip_prefix("--panes=") {
                        opts.panes = parse_u64(&arg, v) as usize;
                    } else if let Some(v) = arg.strip_prefix("--file=") {
                        opts.file = Some(v.to_owned());
                    } else if let Some(v) = arg.strip_prefix("--idle-secs=") {
                        opts.idle_secs = parse_u64(&arg, v);
                    } else {
                        eprintln!("unknown option: {arg}");
                        eprintln!("try --help");
                        process::exit(2);
                    }
                }
            }
        }

        opts.panes = opts.panes.clamp(1, 8);
        opts.interval_ms = opts.interval_ms.max(1);
        opts
    }
}

fn env_u64(name: &str) -> Option<u64> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

fn parse_u64(arg: &str, value: &str) -> u64 {
    value.parse().unwrap_or_else(|_| {
        eprintln!("invalid value in {arg}");
        process::exit(2);
    })
}
