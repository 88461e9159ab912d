// Frame downsampler: full-resolution camera frame -> one sample per cell.
//
// The frame is shrunk to grid resolution with bilinear interpolation, so each
// small-image pixel is the blended content of one cell. The grayscale plane
// drives the density glyph choice; the color plane keeps the raw RGB sample
// whose green channel classifies the cell as foreground or rain background.

use image::RgbImage;
use image::imageops::{self, FilterType};

use crate::config::MatrixConfig;
use crate::error::Error;

pub struct CellGrid {
    pub cols: u32,
    pub rows: u32,
    gray: Vec<u8>,
    color: Vec<[u8; 3]>,
}

impl CellGrid {
    /// Downsample one frame. Deterministic for a given frame; fails only on
    /// a frame too small to hold a single cell.
    pub fn from_frame(frame: &RgbImage, cfg: &MatrixConfig) -> Result<Self, Error> {
        let cols = cfg.cols_for(frame.width());
        let rows = cfg.rows_for(frame.height());
        if cols == 0 || rows == 0 {
            return Err(Error::EmptyFrame);
        }

        let small = imageops::resize(frame, cols, rows, FilterType::Triangle);
        let gray_img = imageops::grayscale(&small);

        let mut gray = Vec::with_capacity((cols * rows) as usize);
        let mut color = Vec::with_capacity((cols * rows) as usize);
        for y in 0..rows {
            for x in 0..cols {
                gray.push(gray_img.get_pixel(x, y).0[0]);
                color.push(small.get_pixel(x, y).0);
            }
        }

        Ok(Self { cols, rows, gray, color })
    }

    /// Grayscale intensity of the cell at (row, col).
    #[inline]
    pub fn gray(&self, row: u32, col: u32) -> u8 {
        self.gray[(row * self.cols + col) as usize]
    }

    /// Raw RGB sample of the cell at (row, col).
    #[inline]
    pub fn color(&self, row: u32, col: u32) -> [u8; 3] {
        self.color[(row * self.cols + col) as usize]
    }
}
