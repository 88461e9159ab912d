// The falling-binary background behind the subject.
//
// One scroll counter is shared by every rain cell in a frame: each off cell
// draws its glyph `scroll` pixels below its cell origin, so the whole curtain
// of digits slides down together, one pixel per frame. When a cell's glyph
// would land past the bottom edge the curtain wraps back to the top. The
// reset is applied once at end-of-frame (in `advance`) rather than mid-pass,
// so every cell in a single frame sees the same counter value.

use rand::Rng;

use crate::canvas::{Canvas, pack};
use crate::config::MatrixConfig;
use crate::font;

pub struct Rain {
    scroll: u32,
    overflowed: bool,
}

impl Rain {
    pub fn new() -> Self {
        Self { scroll: 0, overflowed: false }
    }

    /// Current scroll offset in pixels.
    pub fn scroll(&self) -> u32 {
        self.scroll
    }

    /// Draw the rain glyph for one off cell, or record an overflow if the
    /// glyph has scrolled past the bottom of the canvas.
    pub fn draw_cell(
        &mut self,
        canvas: &mut Canvas,
        cfg: &MatrixConfig,
        rng: &mut impl Rng,
        row: u32,
        col: u32,
    ) {
        let y = row * cfg.cell_height + self.scroll;
        if (y as usize) < canvas.height {
            let digit = if rng.random_range(0..2u8) == 0 { '0' } else { '1' };
            font::draw_char_5x7(
                canvas,
                (col * cfg.cell_width) as i32,
                y as i32,
                digit,
                rain_color(cfg, row),
            );
        } else {
            self.overflowed = true;
        }
    }

    /// Advance the animation by one frame: wrap to the top if any cell
    /// overflowed this frame, otherwise fall one more pixel.
    pub fn advance(&mut self) {
        if self.overflowed {
            self.scroll = 0;
            self.overflowed = false;
        } else {
            self.scroll += 1;
        }
    }
}

/// Rain glyph color for a grid row: dim green that fades as the row descends.
fn rain_color(cfg: &MatrixConfig, row: u32) -> u32 {
    let (r, g, b) = cfg.rain_color_base;
    let g = (g as u32).saturating_sub(row * cfg.rain_color_fade as u32);
    pack(r, g.min(255) as u8, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup() -> (Canvas, MatrixConfig, StdRng) {
        (
            Canvas::new(800, 600),
            MatrixConfig::default(),
            StdRng::seed_from_u64(7),
        )
    }

    fn row_has_ink(canvas: &Canvas, y: usize) -> bool {
        canvas.pixels[y * canvas.width..(y + 1) * canvas.width]
            .iter()
            .any(|&p| p != 0)
    }

    #[test]
    fn counter_climbs_by_one_until_reset() {
        let (mut canvas, cfg, mut rng) = setup();
        let mut rain = Rain::new();
        for expected in 0..10 {
            assert_eq!(rain.scroll(), expected);
            rain.draw_cell(&mut canvas, &cfg, &mut rng, 0, 0);
            rain.advance();
        }
    }

    #[test]
    fn glyph_on_the_last_canvas_row_is_still_drawn() {
        let (mut canvas, cfg, mut rng) = setup();
        let mut rain = Rain::new();
        // Row 39 baseline starts at 585; scroll 14 puts it at 599 = height-1.
        for _ in 0..14 {
            rain.advance();
        }
        rain.draw_cell(&mut canvas, &cfg, &mut rng, 39, 5);
        assert!(row_has_ink(&canvas, 599));
        rain.advance();
        assert_eq!(rain.scroll(), 15, "in-bounds draw must not reset");
    }

    #[test]
    fn glyph_past_the_bottom_resets_instead_of_drawing() {
        let (mut canvas, cfg, mut rng) = setup();
        let mut rain = Rain::new();
        for _ in 0..15 {
            rain.advance();
        }
        // Row 39 at scroll 15 lands on y=600, one past the edge.
        rain.draw_cell(&mut canvas, &cfg, &mut rng, 39, 5);
        assert!(canvas.pixels.iter().all(|&p| p == 0), "overflow must not draw");
        rain.advance();
        assert_eq!(rain.scroll(), 0);
        // And the next frame climbs again from zero.
        rain.advance();
        assert_eq!(rain.scroll(), 1);
    }

    #[test]
    fn rain_color_fades_with_row_and_never_underflows() {
        let cfg = MatrixConfig::default();
        assert_eq!(rain_color(&cfg, 0), pack(80, 120, 0));
        assert_eq!(rain_color(&cfg, 10), pack(80, 90, 0));
        // Far past the reachable row range the green floor is zero, not a wrap.
        assert_eq!(rain_color(&cfg, 1000), pack(80, 0, 0));
    }

    #[test]
    fn rain_glyphs_are_binary_digits_in_row_color() {
        let (mut canvas, cfg, mut rng) = setup();
        let mut rain = Rain::new();
        rain.draw_cell(&mut canvas, &cfg, &mut rng, 2, 3);
        let expected = rain_color(&cfg, 2);
        let lit: Vec<u32> = canvas.pixels.iter().copied().filter(|&p| p != 0).collect();
        assert!(!lit.is_empty());
        assert!(lit.iter().all(|&p| p == expected));
    }
}
