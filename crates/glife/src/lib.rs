#![forbid(unsafe_code)]

//! GlyphLife public facade crate.
//!
//! Re-exports the stable surface of the core engine and the runtime, plus a
//! lightweight prelude. Downstream hosts implement [`Host`] and hand their
//! viewports to a [`Session`] or a [`Screensaver`]; everything else is
//! internal plumbing.
//!
//! ```no_run
//! use glife::prelude::*;
//!
//! fn idle_animation<H: Host>(host: &mut H) -> glife::Result<()> {
//!     let mut session = Session::new(SessionConfig::default());
//!     session.run(host)?;
//!     Ok(())
//! }
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use glife_core::{Glyph, GlyphAttrs, GlyphToken, Region, Row, ScanConfig, Slot, step_row};

// --- Runtime re-exports ----------------------------------------------------

pub use glife_runtime::{
    Host, HostError, Screensaver, ScreensaverConfig, ScreensaverState, Session, SessionConfig,
    StopReason, ViewportId, advance_viewport,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for GlyphLife applications.
#[derive(Debug)]
pub enum Error {
    /// I/O failure outside the host interface.
    Io(std::io::Error),
    /// Failure surfaced by the host during an animation session.
    Host(HostError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Host(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<HostError> for Error {
    fn from(err: HostError) -> Self {
        Self::Host(err)
    }
}

/// Standard result type for GlyphLife APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, Glyph, GlyphAttrs, Host, HostError, Region, Result, Row, ScanConfig, Screensaver,
        ScreensaverConfig, Session, SessionConfig, StopReason, ViewportId,
    };
}
