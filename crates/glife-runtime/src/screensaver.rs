#![forbid(unsafe_code)]

//! Idle-triggered screensaver: a two-state machine over the host's timer.
//!
//! The controller owns the "at most one armed timer, at most one session"
//! policy as explicit state with an explicit lifecycle; there are no
//! ambient globals. [`Screensaver::enable`] arms the host's idle timer;
//! when the host reports the idle threshold elapsed it calls
//! [`Screensaver::on_idle`], which runs one generation-bounded
//! [`Session`] and re-arms. [`Screensaver::disable`] cancels the timer but
//! never interrupts a session already in flight; that session finishes and
//! restores the layout on its own (see [`Session::run`]).

use std::time::Duration;

use crate::host::{Host, HostError};
use crate::session::{Session, SessionConfig};

/// Screensaver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreensaverConfig {
    /// Idle time before a session starts.
    pub idle_after: Duration,
    /// Generations per idle-triggered session.
    pub generations: u64,
    /// Pacing interval handed to each session.
    pub interval: Duration,
}

impl Default for ScreensaverConfig {
    fn default() -> Self {
        Self {
            idle_after: Duration::from_secs(120),
            generations: 128,
            interval: Duration::from_millis(125),
        }
    }
}

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreensaverState {
    /// Timer may be armed; no session running.
    Idle,
    /// A generation-bounded session is in flight.
    Running,
}

/// Timer-driven screensaver controller.
#[derive(Debug)]
pub struct Screensaver {
    config: ScreensaverConfig,
    state: ScreensaverState,
    enabled: bool,
}

impl Screensaver {
    /// Create a disabled controller.
    pub fn new(config: ScreensaverConfig) -> Self {
        Self {
            config,
            state: ScreensaverState::Idle,
            enabled: false,
        }
    }

    /// Arm the idle timer. Enabling while already enabled cancels the
    /// existing timer and arms a fresh one (idempotent, last write wins).
    pub fn enable<H: Host>(&mut self, host: &mut H) {
        if self.enabled {
            host.cancel_idle_timer();
        }
        host.arm_idle_timer(self.config.idle_after);
        self.enabled = true;
        tracing::debug!(idle_secs = self.config.idle_after.as_secs(), "screensaver enabled");
    }

    /// Cancel the armed timer. A session already running is not stopped;
    /// it completes and restores the layout per its own contract.
    pub fn disable<H: Host>(&mut self, host: &mut H) {
        host.cancel_idle_timer();
        self.enabled = false;
        tracing::debug!("screensaver disabled");
    }

    /// Host callback for "idle threshold reached".
    ///
    /// Runs one bounded session, returns to [`ScreensaverState::Idle`], and
    /// re-arms the timer if still enabled. Ignored while disabled or while
    /// a session is already running.
    pub fn on_idle<H: Host>(&mut self, host: &mut H) -> Result<(), HostError> {
        if !self.enabled || self.state == ScreensaverState::Running {
            return Ok(());
        }

        self.state = ScreensaverState::Running;
        let mut session = Session::new(SessionConfig {
            interval: self.config.interval,
            max_generations: Some(self.config.generations),
        });
        let result = session.run(host);
        self.state = ScreensaverState::Idle;

        if self.enabled {
            host.arm_idle_timer(self.config.idle_after);
        }
        result.map(drop)
    }

    /// Whether the timer side of the controller is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current state.
    pub fn state(&self) -> ScreensaverState {
        self.state
    }
}
