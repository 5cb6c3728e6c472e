//! Scoped progress spinner for blocking operations.
//!
//! The spinner is a best-effort visual: with no terminal features enabled it
//! draws nothing at all. Release happens on `Drop`, so every exit path —
//! including error returns mid-operation — restores the cursor.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use colored::Colorize;

use crate::features::TermFeatures;

const GLYPHS: [char; 7] = ['|', '/', '-', '\\', '|', '/', '-'];
const FRAME_DELAY: Duration = Duration::from_millis(100);
/// Operations faster than this still show the spinner for the full duration,
/// so quick commands don't flash an unreadable glyph.
const MIN_VISIBLE: Duration = Duration::from_millis(500);

/// Shared between the animation thread and the owning guard. Every terminal
/// write goes through the screen mutex so draw and erase never interleave.
struct Shared {
    busy: AtomicBool,
    screen: Mutex<Screen>,
    color: bool,
}

struct Screen {
    glyph_visible: bool,
}

impl Shared {
    fn write_next(&self, glyph: char) {
        let mut screen = match self.screen.lock() {
            Ok(guard) => guard,
            Err(_) => return,
        };
        if screen.glyph_visible {
            return;
        }
        let mut stdout = io::stdout();
        if self.color {
            let _ = write!(stdout, "{}", glyph.to_string().bright_black());
        } else {
            let _ = write!(stdout, "{glyph}");
        }
        let _ = stdout.flush();
        screen.glyph_visible = true;
    }

    fn remove(&self, cleanup: bool) {
        let mut screen = match self.screen.lock() {
            Ok(guard) => guard,
            Err(_) => return,
        };
        if !screen.glyph_visible {
            return;
        }
        let mut stdout = io::stdout();
        let _ = write!(stdout, "\u{8}");
        screen.glyph_visible = false;
        if cleanup {
            // overwrite the glyph, return to column 0, clear to end of line
            let _ = write!(stdout, " \r\x1b[K");
        }
        let _ = stdout.flush();
    }
}

/// RAII spinner guard. Construct with [`Spinner::start`]; dropping it stops
/// the animation, erases the glyph, and restores the cursor.
pub struct Spinner {
    features: TermFeatures,
    started: Instant,
    shared: Option<Arc<Shared>>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    pub fn start(message: &str, features: TermFeatures) -> Self {
        let started = Instant::now();
        if !features.any_enabled() {
            return Self {
                features,
                started,
                shared: None,
                handle: None,
            };
        }

        let label = message
            .trim_end()
            .trim_end_matches('.')
            .trim_end_matches(':')
            .trim_end();
        let mut stdout = io::stdout();
        if features.color {
            let _ = write!(stdout, "{} ", format!("{label}:").bright_black());
        } else {
            let _ = write!(stdout, "{label}: ");
        }
        // hide the cursor for the duration of the animation
        let _ = write!(stdout, "\x1b[?25l");
        let _ = stdout.flush();

        let shared = Arc::new(Shared {
            busy: AtomicBool::new(true),
            screen: Mutex::new(Screen {
                glyph_visible: false,
            }),
            color: features.color,
        });
        let worker = Arc::clone(&shared);
        let handle = thread::spawn(move || {
            let mut glyphs = GLYPHS.iter().cycle();
            while worker.busy.load(Ordering::SeqCst) {
                if let Some(glyph) = glyphs.next() {
                    worker.write_next(*glyph);
                }
                thread::sleep(FRAME_DELAY);
                worker.remove(false);
            }
        });

        Self {
            features,
            started,
            shared: Some(shared),
            handle: Some(handle),
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.features.any_enabled() {
            return;
        }

        let elapsed = self.started.elapsed();
        if elapsed < MIN_VISIBLE {
            thread::sleep(MIN_VISIBLE - elapsed);
        }

        if let Some(shared) = self.shared.take() {
            shared.busy.store(false, Ordering::SeqCst);
            if let Some(handle) = self.handle.take() {
                let _ = handle.join();
            }
            shared.remove(true);
        }

        let mut stdout = io::stdout();
        let _ = write!(stdout, "\x1b[?25h");
        let _ = stdout.flush();
    }
}
