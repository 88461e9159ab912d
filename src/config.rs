// All tunables in one place. Nothing here is read from flags, env vars or
// files; the defaults are the whole configuration surface.

/// The 13-step density ramp, lightest to heaviest.
/// Visual: a dark cell renders as ' ', a bright one as '@'.
pub const GLYPH_RAMP: &[char] = &[
    ' ', '.', ',', '-', '~', ':', ';', '=', '!', '*', '#', '$', '@',
];

#[derive(Clone)]
pub struct MatrixConfig {
    pub frame_width: u32,  // requested camera frame width (pixels)
    pub frame_height: u32, // requested camera frame height (pixels)
    pub cell_width: u32,   // width of one character cell (pixels)
    pub cell_height: u32,  // height of one character cell (pixels)
    pub glyph_ramp: &'static [char],
    pub rain_color_base: (u8, u8, u8), // rain glyph color at row 0
    pub rain_color_fade: u8,           // green lost per row descended
    pub glyph_color_channel: usize,    // channel sampled for the on/off test (1 = green)
}

impl MatrixConfig {
    /// Grid width for a frame of the given pixel width (integer division,
    /// a partial trailing cell is dropped).
    pub fn cols_for(&self, frame_width: u32) -> u32 {
        frame_width / self.cell_width
    }

    pub fn rows_for(&self, frame_height: u32) -> u32 {
        frame_height / self.cell_height
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            frame_width: 800,
            frame_height: 600,
            cell_width: 10,
            cell_height: 15,
            glyph_ramp: GLYPH_RAMP,
            rain_color_base: (80, 120, 0),
            rain_color_fade: 3,
            glyph_color_channel: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_80_by_40() {
        let cfg = MatrixConfig::default();
        assert_eq!(cfg.cols_for(cfg.frame_width), 80);
        assert_eq!(cfg.rows_for(cfg.frame_height), 40);
    }

    #[test]
    fn partial_cells_are_dropped() {
        let cfg = MatrixConfig::default();
        assert_eq!(cfg.cols_for(799), 79);
        assert_eq!(cfg.rows_for(14), 0);
    }

    #[test]
    fn ramp_is_ordered_and_distinct() {
        let cfg = MatrixConfig::default();
        assert_eq!(cfg.glyph_ramp.len(), 13);
        assert_eq!(cfg.glyph_ramp[0], ' ');
        assert_eq!(cfg.glyph_ramp[12], '@');
        for (i, a) in cfg.glyph_ramp.iter().enumerate() {
            assert!(!cfg.glyph_ramp[i + 1..].contains(a));
        }
    }
}
