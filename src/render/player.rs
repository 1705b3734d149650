//! Plays a dataset frame by frame on a writer (normally stdout).

use std::{
    io::{self, Write, stdout},
    thread,
    time::{Duration, Instant},
};

use terminal_size::{Width, terminal_size};

use crate::{
    core::{config::Config, constants::FRAME_WIDTH, dataset::Dataset},
    render::frame::compose_frame,
};

/// Clear screen + cursor home, written between two frames.
const CLEAR_SEQ: &[u8] = b"\x1b[2J\x1b[1;1H";

// --- Helpers ---

/// Hides the cursor on construction and shows it again on Drop
struct CursorGuard;
impl CursorGuard {
    fn new() -> Self {
        let _ = write!(stdout(), "\x1b[?25l");
        CursorGuard
    }
}
impl Drop for CursorGuard {
    fn drop(&mut self) {
        let _ = write!(stdout(), "\x1b[?25h");
        let _ = stdout().flush();
    }
}

/// Width of the attached terminal, `None` when stdout is not a terminal.
#[inline]
#[must_use]
pub fn terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| usize::from(w))
}

pub struct Player<W: Write> {
    out: W,
    delay: Duration,
    hide_cursor: bool,
}

impl Player<io::Stdout> {
    /// Player on stdout. The cursor is hidden only on a real terminal.
    #[must_use]
    pub fn stdout(config: &Config) -> Self {
        let width = terminal_width();
        if let Some(w) = width.filter(|&w| w < FRAME_WIDTH) {
            tracing::warn!(
                width = w,
                needed = FRAME_WIDTH,
                "terminal is narrower than a frame, lines will wrap"
            );
        }
        Self {
            out: stdout(),
            delay: config.frame_delay(),
            hide_cursor: width.is_some(),
        }
    }
}

impl<W: Write> Player<W> {
    #[must_use]
    pub fn new(out: W, delay: Duration) -> Self {
        Self {
            out,
            delay,
            hide_cursor: false,
        }
    }

    #[inline]
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print every snapshot in file order, pausing between frames and
    /// clearing the screen before the next one.
    pub fn play(&mut self, dataset: &Dataset) -> io::Result<()> {
        let _cursor = self.hide_cursor.then(CursorGuard::new);
        let total = dataset.len();

        for (i, snapshot) in dataset.snapshots().iter().enumerate() {
            let t0 = Instant::now();
            let frame = compose_frame(&dataset.header, snapshot, dataset.palette());
            self.out.write_all(frame.as_bytes())?;
            self.out.flush()?;
            tracing::debug!(
                frame = i + 1,
                total,
                timestamp = snapshot.timestamp(),
                compose_us = t0.elapsed().as_micros() as u64,
                "frame written"
            );

            if i + 1 < total {
                thread::sleep(self.delay);
                self.out.write_all(CLEAR_SEQ)?;
            }
        }
        self.out.flush()
    }
}
