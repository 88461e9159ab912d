// Instantaneous frame-rate readout drawn into the top-left corner.

use std::time::Instant;

use crate::canvas::{Canvas, pack};
use crate::font;

// Pen position of the overlay baseline.
const OVERLAY_X: i32 = 10;
const OVERLAY_Y: i32 = 20;
const OVERLAY_COLOR: u32 = pack(255, 0, 255);

pub struct FpsMonitor {
    last: Option<Instant>,
}

impl FpsMonitor {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Record a frame boundary and return the rate since the previous one.
    /// Returns None on the first frame and whenever the clock has not moved,
    /// so a degenerate delta never turns into a division by zero.
    pub fn tick(&mut self) -> Option<f64> {
        let now = Instant::now();
        let rate = self
            .last
            .and_then(|prev| rate_from_elapsed(now.duration_since(prev).as_secs_f64()));
        self.last = Some(now);
        rate
    }
}

/// 1 / elapsed, or None when the elapsed time is zero (rate undefined).
pub fn rate_from_elapsed(elapsed_secs: f64) -> Option<f64> {
    (elapsed_secs > 0.0).then(|| 1.0 / elapsed_secs)
}

pub fn format_rate(rate: f64) -> String {
    format!("FPS: {rate:.1}")
}

/// Draw the readout, or nothing for a frame whose rate is unavailable.
pub fn overlay(canvas: &mut Canvas, rate: Option<f64>) {
    if let Some(rate) = rate {
        font::draw_text_5x7(canvas, OVERLAY_X, OVERLAY_Y, &format_rate(rate), OVERLAY_COLOR);
    }
}
