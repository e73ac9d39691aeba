#![forbid(unsafe_code)]

//! An in-memory host for exercising the animation loop in tests.
//!
//! [`MockHost`] keeps each viewport's text body in memory, counts sleeps,
//! writes, and timer operations, and lets tests script when input "arrives"
//! (after a given number of pacing sleeps) and when host operations fail.
//! Layout snapshots are plain comparable values, so restoration can be
//! asserted with `==`.

use std::time::Duration;

use glife_core::{GlyphAttrs, Region, ScanConfig};

use crate::host::{Host, HostError, ViewportId};

#[derive(Debug, Clone)]
struct MockViewport {
    lines: Vec<String>,
    height: usize,
    dedicated: bool,
    scroll: usize,
    writes: u64,
}

/// Comparable whole-layout snapshot: `(id, body lines, scroll)` per viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockLayout {
    viewports: Vec<(ViewportId, Vec<String>, usize)>,
}

/// Scriptable in-memory [`Host`].
#[derive(Debug, Default)]
pub struct MockHost {
    viewports: Vec<(ViewportId, MockViewport)>,
    next_id: ViewportId,
    sleeps: u64,
    input_at: Option<u64>,
    writes: u64,
    fail_write_after: Option<u64>,
    fail_restore: bool,
    restore_disabled: bool,
    focus_restores: u64,
    armed: Option<Duration>,
    arms: u64,
    cancels: u64,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a viewport seeded with `text`, showing `height` rows.
    pub fn add_viewport(&mut self, text: &str, height: usize) -> ViewportId {
        let id = self.next_id;
        self.next_id += 1;
        self.viewports.push((
            id,
            MockViewport {
                lines: text.lines().map(str::to_owned).collect(),
                height,
                dedicated: false,
                scroll: 0,
                writes: 0,
            },
        ));
        id
    }

    /// Mark a viewport as dedicated (reserved, never animated).
    pub fn set_dedicated(&mut self, id: ViewportId, dedicated: bool) {
        if let Some(vp) = self.viewport_mut(id) {
            vp.dedicated = dedicated;
        }
    }

    /// Input becomes pending once `n` pacing sleeps have happened.
    pub fn input_after_sleeps(&mut self, n: u64) {
        self.input_at = Some(n);
    }

    /// Let `n` writes succeed, then fail every later write.
    pub fn fail_write_after(&mut self, n: u64) {
        self.fail_write_after = Some(n);
    }

    /// Make layout restoration fail.
    pub fn fail_restore(&mut self) {
        self.fail_restore = true;
    }

    /// Turn restoration into a no-op, leaving final content in place.
    pub fn disable_restore(&mut self) {
        self.restore_disabled = true;
    }

    /// Current body text of a viewport.
    pub fn viewport_text(&self, id: ViewportId) -> String {
        self.viewport(id).map_or_else(String::new, |vp| {
            vp.lines.join("\n")
        })
    }

    /// Writes applied to one viewport.
    pub fn write_count(&self, id: ViewportId) -> u64 {
        self.viewport(id).map_or(0, |vp| vp.writes)
    }

    /// Pacing sleeps observed so far.
    pub fn sleep_count(&self) -> u64 {
        self.sleeps
    }

    /// Times the focus-restoration fallback ran.
    pub fn focus_restores(&self) -> u64 {
        self.focus_restores
    }

    /// Currently armed idle timer threshold, if any.
    pub fn armed_timer(&self) -> Option<Duration> {
        self.armed
    }

    /// Total arm / cancel operations.
    pub fn arm_count(&self) -> u64 {
        self.arms
    }

    pub fn cancel_count(&self) -> u64 {
        self.cancels
    }

    /// Snapshot the current layout without going through [`Host`].
    pub fn layout_snapshot(&self) -> MockLayout {
        MockLayout {
            viewports: self
                .viewports
                .iter()
                .map(|(id, vp)| (*id, vp.lines.clone(), vp.scroll))
                .collect(),
        }
    }

    fn viewport(&self, id: ViewportId) -> Option<&MockViewport> {
        self.viewports.iter().find(|(vid, _)| *vid == id).map(|(_, vp)| vp)
    }

    fn viewport_mut(&mut self, id: ViewportId) -> Option<&mut MockViewport> {
        self.viewports
            .iter_mut()
            .find(|(vid, _)| *vid == id)
            .map(|(_, vp)| vp)
    }
}

impl Host for MockHost {
    type Layout = MockLayout;

    fn viewports(&mut self) -> Vec<ViewportId> {
        self.viewports.iter().map(|(id, _)| *id).collect()
    }

    fn is_dedicated(&self, id: ViewportId) -> bool {
        self.viewport(id).is_some_and(|vp| vp.dedicated)
    }

    fn visible_height(&self, id: ViewportId) -> usize {
        self.viewport(id).map_or(0, |vp| vp.height)
    }

    fn read_region(&mut self, id: ViewportId) -> Result<Region, HostError> {
        let vp = self.viewport(id).ok_or(HostError::InvalidViewport(id))?;
        let visible = vp.height.min(vp.lines.len());
        let text = vp.lines[..visible].join("\n");
        Ok(Region::from_text(
            &text,
            GlyphAttrs::empty(),
            &ScanConfig::default(),
        ))
    }

    fn write_region(&mut self, id: ViewportId, region: Region) -> Result<(), HostError> {
        if let Some(n) = self.fail_write_after
            && self.writes >= n
        {
            return Err(HostError::Io(std::io::Error::other(
                "injected write failure",
            )));
        }
        let vp = self
            .viewport_mut(id)
            .ok_or(HostError::InvalidViewport(id))?;
        // Replace the visible window with the new region, keep what lies
        // below it, and reset scroll to the top.
        let visible = vp.height.min(vp.lines.len());
        let mut lines: Vec<String> = region.to_text().lines().map(str::to_owned).collect();
        lines.extend(vp.lines[visible..].iter().cloned());
        vp.lines = lines;
        vp.scroll = 0;
        vp.writes += 1;
        self.writes += 1;
        Ok(())
    }

    fn capture_layout(&mut self) -> Result<Self::Layout, HostError> {
        Ok(self.layout_snapshot())
    }

    fn restore_layout(&mut self, layout: Self::Layout) -> Result<(), HostError> {
        if self.fail_restore {
            return Err(HostError::Layout("injected restore failure".into()));
        }
        if self.restore_disabled {
            return Ok(());
        }
        for (id, lines, scroll) in layout.viewports {
            if let Some(vp) = self.viewport_mut(id) {
                vp.lines = lines;
                vp.scroll = scroll;
            }
        }
        Ok(())
    }

    fn restore_focus(&mut self) {
        self.focus_restores += 1;
    }

    fn input_pending(&mut self) -> bool {
        self.input_at.is_some_and(|n| self.sleeps >= n)
    }

    fn sleep(&mut self, _duration: Duration) {
        self.sleeps += 1;
    }

    fn arm_idle_timer(&mut self, threshold: Duration) {
        self.armed = Some(threshold);
        self.arms += 1;
    }

    fn cancel_idle_timer(&mut self) {
        self.armed = None;
        self.cancels += 1;
    }
}
