#![forbid(unsafe_code)]

//! The host interface the animation loop runs against.
//!
//! The runtime never owns text storage, windows, timers, or input devices.
//! It drives a [`Host`]: whatever supplies viewports full of text and can
//! swap their displayed content. The operations on this trait are the whole
//! contract between the runtime and its host.
//!
//! # Cooperative model
//!
//! Everything is single-threaded: viewport mutation, pacing sleeps, and the
//! idle timer callback are scheduled sequentially by the host's run loop.
//! [`Host::sleep`] is the only suspension point and doubles as the input
//! poll; [`Host::arm_idle_timer`] registers a one-shot timer whose firing
//! the host delivers by calling [`Screensaver::on_idle`].
//!
//! [`Screensaver::on_idle`]: crate::screensaver::Screensaver::on_idle

use std::fmt;
use std::io;
use std::time::Duration;

use glife_core::Region;

/// Opaque handle identifying one viewport for the duration of a tick.
pub type ViewportId = u64;

/// Failures surfaced by a host while the animation loop is driving it.
///
/// Host failures are never swallowed: any error mid-session hard-stops the
/// session, which still restores the captured layout before propagating.
#[derive(Debug)]
pub enum HostError {
    /// I/O failure in the host's display or input plumbing.
    Io(io::Error),
    /// A viewport handle became invalid mid-session.
    InvalidViewport(ViewportId),
    /// Layout capture or restoration failed.
    Layout(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "host i/o error: {err}"),
            Self::InvalidViewport(id) => write!(f, "viewport {id} is no longer valid"),
            Self::Layout(msg) => write!(f, "layout restore failed: {msg}"),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for HostError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Host-provided environment: viewports, layout snapshots, input, timing.
pub trait Host {
    /// Opaque whole-layout snapshot, captured at session start and restored
    /// at session end.
    type Layout;

    /// Enumerate currently open viewports, in host order.
    ///
    /// The returned snapshot is stable for the tick that requested it; the
    /// runtime visits each id exactly once per tick.
    fn viewports(&mut self) -> Vec<ViewportId>;

    /// Whether the viewport is reserved for fixed content and must be left
    /// untouched by the animation.
    fn is_dedicated(&self, id: ViewportId) -> bool;

    /// Number of visible text rows in the viewport.
    fn visible_height(&self, id: ViewportId) -> usize;

    /// Read exactly the currently visible rows of the viewport.
    fn read_region(&mut self, id: ViewportId) -> Result<Region, HostError>;

    /// Replace the viewport's displayed content and reset its scroll position
    /// to the top of the new region.
    fn write_region(&mut self, id: ViewportId, region: Region) -> Result<(), HostError>;

    /// Capture the whole viewport layout across all frames.
    fn capture_layout(&mut self) -> Result<Self::Layout, HostError>;

    /// Restore a previously captured layout.
    fn restore_layout(&mut self, layout: Self::Layout) -> Result<(), HostError>;

    /// Best-effort restoration of the originally focused frame/viewport.
    ///
    /// Called when [`restore_layout`](Host::restore_layout) itself fails,
    /// before the failure propagates. Must not panic.
    fn restore_focus(&mut self);

    /// Whether user input is waiting to be read.
    fn input_pending(&mut self) -> bool;

    /// Voluntary pacing suspension. May return early when interrupted, e.g.
    /// by arriving input.
    fn sleep(&mut self, duration: Duration);

    /// Arm (or re-arm) the one-shot idle timer. A timer already armed is
    /// replaced.
    fn arm_idle_timer(&mut self, threshold: Duration);

    /// Cancel the idle timer if armed. No effect on an in-flight session.
    fn cancel_idle_timer(&mut self);
}
