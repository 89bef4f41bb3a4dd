//! Demo data source answering reveal events with new pages
//!
//! Loads run on the tokio runtime; results come back over an unbounded
//! channel and are applied on the UI thread.

use std::time::Duration;

use tokio::sync::mpsc;

use pullreveal_core::{Direction, PageWindow, PagingConfig};

/// Result of an async page load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub direction: Direction,
    pub window: PageWindow,
}

#[derive(Debug, Clone)]
pub struct PageList {
    window: PageWindow,
    older_delay: Duration,
    newer_delay: Duration,
    in_flight: Option<Direction>,
}

impl PageList {
    pub fn new(config: &PagingConfig) -> Self {
        Self {
            window: PageWindow::new(config),
            older_delay: Duration::from_millis(config.older_delay_ms),
            newer_delay: Duration::from_millis(config.newer_delay_ms),
            in_flight: None,
        }
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    pub fn items(&self) -> Vec<String> {
        self.window.items()
    }

    pub fn in_flight(&self) -> Option<Direction> {
        self.in_flight
    }

    /// Start loading one page toward `direction`
    ///
    /// Returns `false` when a load is already running.
    pub fn request(&mut self, direction: Direction, tx: mpsc::UnboundedSender<PageResult>) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        self.in_flight = Some(direction);

        let window = self.window.expanded(direction);
        let delay = match direction {
            Direction::Top => self.older_delay,
            Direction::Bottom => self.newer_delay,
        };
        tracing::debug!(%direction, delay_ms = delay.as_millis() as u64, "Loading page");

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(PageResult { direction, window });
        });
        true
    }

    /// Adopt a finished load; returns the window that was replaced
    pub fn finish(&mut self, result: &PageResult) -> PageWindow {
        self.in_flight = None;
        std::mem::replace(&mut self.window, result.window)
    }
}
