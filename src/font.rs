// Software glyph rasterization: a tiny 5x7 bitmap font covering the density
// ramp, the binary rain digits and the FPS overlay alphabet.
//
// Glyphs are anchored at the BASELINE: a call with position (x, y) paints the
// bottom row of the bitmap on row y, the top row on y-6. That keeps the cell
// offsets in matrix.rs expressed the same way the rest of the pipeline thinks
// about them (pen position, not bounding box).

use crate::canvas::Canvas;

pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 7;
/// Horizontal advance between characters in a string (glyph + 1px spacing).
pub const GLYPH_ADVANCE: i32 = GLYPH_WIDTH + 1;

/// Return a 5x7 glyph bitmap for the character set we render.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
pub fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9 (rain glyphs + FPS readout)
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase letters for the overlay: F P S
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),

        // Density ramp, lightest to heaviest
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        ',' => g!(0b00000,0b00000,0b00000,0b00000,0b00100,0b00100,0b01000),
        '-' => g!(0b00000,0b00000,0b00000,0b01110,0b00000,0b00000,0b00000),
        '~' => g!(0b00000,0b00000,0b01000,0b10101,0b00010,0b00000,0b00000),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        ';' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00100,0b01000),
        '=' => g!(0b00000,0b00000,0b11111,0b00000,0b11111,0b00000,0b00000),
        '!' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00000,0b00100),
        '*' => g!(0b00000,0b00100,0b10101,0b01110,0b10101,0b00100,0b00000),
        '#' => g!(0b01010,0b01010,0b11111,0b01010,0b11111,0b01010,0b01010),
        '$' => g!(0b00100,0b01111,0b10100,0b01110,0b00101,0b11110,0b00100),
        '@' => g!(0b01110,0b10001,0b10111,0b10101,0b10110,0b10000,0b01111),

        _ => None,
    }
}

/// Draw a single 5x7 character with its baseline at (x, y).
/// Visual: the glyph appears in the given color; unknown chars draw nothing.
pub fn draw_char_5x7(canvas: &mut Canvas, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..GLYPH_WIDTH {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    canvas.put_pixel(x + rx, y - (GLYPH_HEIGHT - 1) + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs, baseline at y.
pub fn draw_text_5x7(canvas: &mut Canvas, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(canvas, x, y, ch, color);
        x += GLYPH_ADVANCE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GLYPH_RAMP;

    #[test]
    fn whole_alphabet_has_bitmaps() {
        for ch in GLYPH_RAMP {
            assert!(glyph5x7(*ch).is_some(), "ramp char {ch:?} missing");
        }
        for ch in "0123456789FPS: .".chars() {
            assert!(glyph5x7(ch).is_some(), "overlay char {ch:?} missing");
        }
    }

    #[test]
    fn space_is_blank_everything_else_is_not() {
        assert!(glyph5x7(' ').unwrap().iter().all(|&r| r == 0));
        for ch in GLYPH_RAMP.iter().skip(1) {
            assert!(glyph5x7(*ch).unwrap().iter().any(|&r| r != 0));
        }
    }

    #[test]
    fn glyphs_are_baseline_anchored() {
        let mut c = Canvas::new(16, 16);
        draw_char_5x7(&mut c, 2, 10, '#', 0xFF);
        // Nothing below the baseline row, nothing above the 7-row box.
        for y in 0..16i32 {
            let row_lit = (0..16).any(|x| c.pixels[(y as usize) * 16 + x] != 0);
            if y < 4 || y > 10 {
                assert!(!row_lit, "row {y} lit outside glyph box");
            }
        }
        // '#' has ink on its bottom row, which must land exactly on y=10.
        assert!((0..16).any(|x| c.pixels[10 * 16 + x] != 0));
    }

    #[test]
    fn text_advances_six_pixels_per_char() {
        let mut c = Canvas::new(32, 8);
        draw_text_5x7(&mut c, 0, 7, "11", 0xFF);
        // Second '1' starts at x=6; its stem column is x+2.
        assert!(c.pixels[1 * 32 + 2] != 0);
        assert!(c.pixels[1 * 32 + 8] != 0);
    }
}
