#![forbid(unsafe_code)]

//! A terminal-backed [`Host`] built on crossterm.
//!
//! The terminal is split into horizontal panes, each an independent
//! viewport seeded with text, plus a one-line dedicated status bar at the
//! bottom that the animation must leave untouched. Input polling and the
//! pacing sleep both go through `crossterm::event::poll`, so the sleep
//! naturally returns early when a key arrives.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::poll;
use crossterm::style::Print;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};

use glife_core::{GlyphAttrs, Region, ScanConfig};
use glife_runtime::{Host, HostError, ViewportId};

/// Raw-mode + alternate-screen guard. Restores the terminal on drop, so the
/// screen comes back on every exit path including panic unwind.
pub struct TermGuard;

impl TermGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

struct Pane {
    top: u16,
    height: u16,
    region: Region,
    dedicated: bool,
}

/// Terminal host: one pane per viewport, bottom row dedicated to status.
pub struct TermHost {
    panes: Vec<Pane>,
    cols: u16,
    idle_threshold: Option<Duration>,
}

impl TermHost {
    /// Split the terminal into `pane_count` animated panes over `seed`,
    /// plus the status bar.
    pub fn new(pane_count: usize, seed: &str) -> io::Result<Self> {
        let (cols, rows) = crossterm::terminal::size()?;
        let config = ScanConfig::default();
        let body_rows = rows.saturating_sub(1).max(1);
        let band = (body_rows / pane_count.max(1) as u16).max(1);

        let mut panes = Vec::with_capacity(pane_count + 1);
        for index in 0..pane_count {
            let top = index as u16 * band;
            if top >= body_rows {
                break;
            }
            let height = band.min(body_rows - top);
            panes.push(Pane {
                top,
                height,
                region: Region::from_text(seed, GlyphAttrs::empty(), &config),
                dedicated: false,
            });
        }
        panes.push(Pane {
            top: rows.saturating_sub(1),
            height: 1,
            region: Region::from_text(
                "-- glyphlife: any key stops, q quits --",
                GlyphAttrs::REVERSE,
                &config,
            ),
            dedicated: true,
        });

        let host = Self {
            panes,
            cols,
            idle_threshold: None,
        };
        host.draw_all()?;
        Ok(host)
    }

    /// Threshold last armed via [`Host::arm_idle_timer`], if any. The demo's
    /// outer loop implements the actual waiting.
    pub fn idle_threshold(&self) -> Option<Duration> {
        self.idle_threshold
    }

    fn pane(&self, id: ViewportId) -> Result<&Pane, HostError> {
        self.panes
            .get(id as usize)
            .ok_or(HostError::InvalidViewport(id))
    }

    fn draw_pane(&self, pane: &Pane) -> io::Result<()> {
        let mut out = io::stdout();
        for line in 0..pane.height {
            queue!(out, MoveTo(0, pane.top + line), Clear(ClearType::CurrentLine))?;
            if let Some(row) = pane.region.row(line as usize) {
                queue!(out, Print(clip(&row.to_text(), self.cols)))?;
            }
        }
        out.flush()
    }

    fn draw_all(&self) -> io::Result<()> {
        for pane in &self.panes {
            self.draw_pane(pane)?;
        }
        Ok(())
    }
}

/// Truncate a line to the terminal width. Counts characters, which is close
/// enough for the demo; glyph widths are already encoded in the row text.
fn clip(text: &str, cols: u16) -> String {
    text.chars().take(cols as usize).collect()
}

impl Host for TermHost {
    type Layout = Vec<Region>;

    fn viewports(&mut self) -> Vec<ViewportId> {
        (0..self.panes.len() as ViewportId).collect()
    }

    fn is_dedicated(&self, id: ViewportId) -> bool {
        self.pane(id).map(|p| p.dedicated).unwrap_or(false)
    }

    fn visible_height(&self, id: ViewportId) -> usize {
        self.pane(id).map(|p| p.height as usize).unwrap_or(0)
    }

    fn read_region(&mut self, id: ViewportId) -> Result<Region, HostError> {
        let pane = self.pane(id)?;
        let visible = pane.height as usize;
        Ok(Region::from_rows(
            pane.region.rows().take(visible).cloned(),
        ))
    }

    fn write_region(&mut self, id: ViewportId, region: Region) -> Result<(), HostError> {
        let index = id as usize;
        if index >= self.panes.len() {
            return Err(HostError::InvalidViewport(id));
        }
        self.panes[index].region = region;
        // Drawing from the pane's first row is the scroll reset.
        self.draw_pane(&self.panes[index])?;
        Ok(())
    }

    fn capture_layout(&mut self) -> Result<Self::Layout, HostError> {
        Ok(self.panes.iter().map(|p| p.region.clone()).collect())
    }

    fn restore_layout(&mut self, layout: Self::Layout) -> Result<(), HostError> {
        if layout.len() != self.panes.len() {
            return Err(HostError::Layout(format!(
                "snapshot has {} panes, host has {}",
                layout.len(),
                self.panes.len()
            )));
        }
        for (pane, region) in self.panes.iter_mut().zip(layout) {
            pane.region = region;
        }
        self.draw_all()?;
        Ok(())
    }

    fn restore_focus(&mut self) {
        let _ = execute!(io::stdout(), MoveTo(0, 0));
    }

    fn input_pending(&mut self) -> bool {
        matches!(poll(Duration::ZERO), Ok(true))
    }

    fn sleep(&mut self, duration: Duration) {
        // Returns early when an event arrives; the event itself stays
        // queued for the outer loop to read.
        let _ = poll(duration);
    }

    fn arm_idle_timer(&mut self, threshold: Duration) {
        self.idle_threshold = Some(threshold);
    }

    fn cancel_idle_timer(&mut self) {
        self.idle_threshold = None;
    }
}
