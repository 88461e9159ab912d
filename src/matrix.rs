// Frame compositor: one camera frame in, one finished canvas out.
//
// Per frame: clear the canvas, downsample to the cell grid, then walk the
// grid in row-major order. A cell whose green sample is zero belongs to the
// rain background; anything else renders as a density glyph in pure green at
// the brightness the camera saw. The scroll state advances once per frame,
// after the full grid pass.

use image::RgbImage;
use rand::rngs::ThreadRng;

use crate::canvas::{Canvas, pack};
use crate::config::MatrixConfig;
use crate::error::Error;
use crate::font;
use crate::grid::CellGrid;
use crate::rain::Rain;
use crate::ramp;

// Pen offset of a density glyph inside its 10x15 cell.
const GLYPH_OFFSET_X: u32 = 5;
const GLYPH_OFFSET_Y: u32 = 12;

pub struct Matrix {
    cfg: MatrixConfig,
    rain: Rain,
    rng: ThreadRng,
}

impl Matrix {
    pub fn new(cfg: MatrixConfig) -> Self {
        Self {
            cfg,
            rain: Rain::new(),
            rng: rand::rng(),
        }
    }

    /// Render one frame into the canvas. The canvas is mutated in place; the
    /// only other side effect is the scroll counter advancing by one frame.
    pub fn compose(&mut self, frame: &RgbImage, canvas: &mut Canvas) -> Result<(), Error> {
        canvas.clear();
        let grid = CellGrid::from_frame(frame, &self.cfg)?;

        for row in 0..grid.rows {
            for col in 0..grid.cols {
                let sample = grid.color(row, col);
                let green = sample[self.cfg.glyph_color_channel];
                if green == 0 {
                    self.rain
                        .draw_cell(canvas, &self.cfg, &mut self.rng, row, col);
                } else {
                    let glyph = ramp::glyph_for(self.cfg.glyph_ramp, grid.gray(row, col));
                    font::draw_char_5x7(
                        canvas,
                        (col * self.cfg.cell_width + GLYPH_OFFSET_X) as i32,
                        (row * self.cfg.cell_height + GLYPH_OFFSET_Y) as i32,
                        glyph,
                        pack(0, green, 0),
                    );
                }
            }
        }

        self.rain.advance();
        Ok(())
    }

    /// Current rain scroll offset (pixels).
    pub fn scroll(&self) -> u32 {
        self.rain.scroll()
    }
}
