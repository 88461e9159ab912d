// What you SEE:
// • The live camera feed rendered as green ASCII density glyphs.
// • Dark areas filled with a falling curtain of random binary digits.
// • An FPS readout in magenta, top-left. ESC (or closing the window) quits.

mod camera;
mod canvas;
mod config;
mod error;
mod font;
mod fps;
mod grid;
mod matrix;
mod rain;
mod ramp;
mod window;

use camera::CameraCapture;
use canvas::Canvas;
use config::MatrixConfig;
use error::Error;
use fps::FpsMonitor;
use matrix::Matrix;
use window::Display;

fn main() -> Result<(), Error> {
    env_logger::init();

    let cfg = MatrixConfig::default();

    /* --- Camera + window setup ---
       Visual: window opens and immediately starts showing the effect. */
    let mut cam = CameraCapture::new(0, cfg.frame_width, cfg.frame_height)?;
    let (w, h) = cam.resolution();
    log::info!(
        "camera open at {w}x{h}, {}x{} character grid",
        cfg.cols_for(w),
        cfg.rows_for(h)
    );
    let mut display = Display::new("Matrix Cam", w as usize, h as usize)?;

    /* --- Reusable output canvas + per-frame state --- */
    let mut canvas = Canvas::new(w as usize, h as usize);
    let mut matrix = Matrix::new(cfg);
    let mut fps = FpsMonitor::new();

    /* ------------------------------ Main loop ------------------------------ */
    while display.is_open() && !display.esc_pressed() {
        // 1) Grab a fresh live frame; an empty buffer means the stream ended.
        let Some(frame) = cam.next_frame()? else {
            log::info!("camera signalled end of stream");
            break;
        };

        // 2) Full compositor pass: glyphs, rain, scroll advance.
        matrix.compose(&frame, &mut canvas)?;
        log::trace!("frame composed, rain scroll at {}", matrix.scroll());

        // 3) FPS readout on top (skipped on the first frame; no rate yet).
        let rate = fps.tick();
        if rate.is_none() {
            log::debug!("no frame rate available this frame");
        }
        fps::overlay(&mut canvas, rate);

        // 4) Present; this is when the on-screen image updates.
        display.present(&canvas)?;
    }

    log::info!("shutting down");
    Ok(())
}
