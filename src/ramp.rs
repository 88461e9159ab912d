// Brightness -> density glyph mapping.

/// Map a brightness in [0,255] to a ramp index in [0, len-1].
///
/// The bucket width is 256/len so a full 255 still lands inside the heaviest
/// bucket; the clamp makes an out-of-bounds index impossible even if the
/// arithmetic is ever handed a degenerate ramp length.
pub fn index_for(brightness: u8, len: usize) -> usize {
    debug_assert!(len >= 2, "ramp needs at least two glyphs");
    let bucket = 256.0 / len as f32;
    ((brightness as f32 / bucket) as usize).min(len - 1)
}

/// Look up the glyph for a brightness value.
pub fn glyph_for(ramp: &[char], brightness: u8) -> char {
    ramp[index_for(brightness, ramp.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GLYPH_RAMP;

    #[test]
    fn index_stays_in_bounds_for_every_brightness() {
        for len in [2usize, 5, 13, 64] {
            for b in 0..=255u8 {
                assert!(index_for(b, len) < len, "b={b} len={len}");
            }
        }
    }

    #[test]
    fn extremes_hit_the_ramp_ends() {
        assert_eq!(index_for(0, 13), 0);
        assert_eq!(index_for(255, 13), 12);
    }

    #[test]
    fn mid_gray_maps_to_semicolon() {
        // floor(128 / (256/13)) = 6
        assert_eq!(index_for(128, 13), 6);
        assert_eq!(glyph_for(GLYPH_RAMP, 128), ';');
    }
}
