#![forbid(unsafe_code)]

//! Animation runtime for GlyphLife.
//!
//! Coordinates the core stepping engine across a host's viewports: the
//! per-viewport cycle, the timed interruptible [`Session`], and the
//! idle-triggered [`Screensaver`]. The host side of the contract (text
//! storage, windows, timers, input) lives behind the [`Host`] trait; an
//! in-memory [`mock::MockHost`] backs the test suites.

pub mod cycle;
pub mod host;
pub mod mock;
pub mod screensaver;
pub mod session;

pub use cycle::advance_viewport;
pub use host::{Host, HostError, ViewportId};
pub use screensaver::{Screensaver, ScreensaverConfig, ScreensaverState};
pub use session::{Session, SessionConfig, StopReason};
