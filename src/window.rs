// Window presentation + the single keystroke we care about.

use crate::canvas::Canvas;
use crate::error::Error;
use minifb::{Key, Window, WindowOptions};

pub struct Display {
    window: Window, // the on-screen window you see
}

impl Display {
    /// Create a window sized to the camera feed.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the canvas pixels to the screen.
    /// Visual: the window immediately displays the new frame.
    pub fn present(&mut self, canvas: &Canvas) -> Result<(), Error> {
        self.window
            .update_with_buffer(&canvas.pixels, canvas.width, canvas.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down; the loop exits on it.
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }
}
