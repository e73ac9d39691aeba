#![forbid(unsafe_code)]

//! The animation session: timed, interruptible iteration over all viewports.
//!
//! A [`Session`] captures the host's whole viewport layout, then loops:
//! advance every open non-dedicated viewport one generation, bump the
//! generation counter, sleep the pacing interval, and check the stop
//! condition. The pacing sleep is the only cancellation point: pending
//! input aborts after the current tick completes, never mid-tick.
//!
//! # Restoration guarantee
//!
//! The captured layout is restored on every exit path: clean stop, host
//! failure, or panic unwind. The snapshot lives in a [`LayoutGuard`] whose
//! `Drop` restores it, in the same spirit as a terminal raw-mode guard; the
//! happy path releases the guard explicitly so restoration errors can
//! propagate instead of being lost in `Drop`.

use std::time::Duration;

use crate::host::{Host, HostError};
use crate::cycle::advance_viewport;

/// Why a session's run loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Pending user input was detected at a pacing point.
    Input,
    /// The configured generation limit was reached (and the final
    /// generation was held on screen until input arrived).
    LimitReached,
}

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Minimum separation between consecutive ticks.
    pub interval: Duration,
    /// Stop after this many generations; `None` runs until input.
    pub max_generations: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(125),
            max_generations: None,
        }
    }
}

/// Scoped ownership of the host's layout: restores on every exit path.
struct LayoutGuard<'a, H: Host> {
    host: &'a mut H,
    layout: Option<H::Layout>,
}

impl<'a, H: Host> LayoutGuard<'a, H> {
    fn capture(host: &'a mut H) -> Result<Self, HostError> {
        let layout = host.capture_layout()?;
        Ok(Self {
            host,
            layout: Some(layout),
        })
    }

    fn host(&mut self) -> &mut H {
        self.host
    }

    /// Restore now, propagating failure. On failure the original focus is
    /// still restored best-effort before the error surfaces.
    fn release(mut self) -> Result<(), HostError> {
        let Some(layout) = self.layout.take() else {
            return Ok(());
        };
        match self.host.restore_layout(layout) {
            Ok(()) => Ok(()),
            Err(err) => {
                self.host.restore_focus();
                Err(err)
            }
        }
    }
}

impl<H: Host> Drop for LayoutGuard<'_, H> {
    fn drop(&mut self) {
        // Reached only on abnormal exit; release() already emptied the slot
        // on normal paths. Errors here cannot propagate, so log and restore
        // focus instead.
        if let Some(layout) = self.layout.take() {
            if self.host.restore_layout(layout).is_err() {
                tracing::error!("layout restore failed during unwind");
                self.host.restore_focus();
            }
        }
    }
}

/// One run of the animation loop, from layout capture to restoration.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    generation: u64,
}

impl Session {
    /// Create a session with the given pacing and generation bound.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            generation: 0,
        }
    }

    /// Generations completed so far (monotonic, starts at 0).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Run until stopped, then restore the captured layout.
    ///
    /// Stops on pending input, or on reaching the generation limit, in
    /// which case the final generation stays on screen until the next input
    /// arrives. Host failures abort the run; the layout is restored before
    /// the error propagates.
    pub fn run<H: Host>(&mut self, host: &mut H) -> Result<StopReason, HostError> {
        let mut guard = LayoutGuard::capture(host)?;
        tracing::debug!(
            interval_ms = self.config.interval.as_millis() as u64,
            limit = self.config.max_generations,
            "animation session started"
        );

        let outcome = self.drive(guard.host());
        let restored = guard.release();

        match outcome {
            Ok(reason) => {
                restored?;
                tracing::debug!(generations = self.generation, ?reason, "session finished");
                Ok(reason)
            }
            Err(err) => {
                // The tick failure outranks a restore failure; the latter is
                // only logged.
                if let Err(restore_err) = restored {
                    tracing::error!(error = %restore_err, "layout restore failed after session error");
                }
                Err(err)
            }
        }
    }

    fn drive<H: Host>(&mut self, host: &mut H) -> Result<StopReason, HostError> {
        loop {
            // Checked before the tick, so a zero limit never animates at all.
            if let Some(limit) = self.config.max_generations
                && self.generation >= limit
            {
                // Hold the final generation on screen until input arrives.
                while !host.input_pending() {
                    host.sleep(self.config.interval);
                }
                return Ok(StopReason::LimitReached);
            }

            let ids = host.viewports();
            tracing::trace!(generation = self.generation, viewports = ids.len(), "tick");
            for id in ids {
                advance_viewport(host, id)?;
            }
            // The counter advances even when no viewport was open.
            self.generation += 1;

            host.sleep(self.config.interval);
            if host.input_pending() {
                return Ok(StopReason::Input);
            }
        }
    }
}
