// The output buffer the viewer actually sees. One u32 per pixel, packed
// 0x00RRGGBB the way minifb expects it.

#[derive(Clone)]
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>, // length = width * height
}

/// Pack three 8-bit channels into the window pixel format.
#[inline]
pub const fn pack(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u32; width * height],
        }
    }

    /// Reset every pixel to black. Runs once at the top of each frame.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Put a pixel if (x,y) is inside bounds; out-of-bounds writes are dropped.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[y * self.width + x] = color;
    }
}
