//! Progress indicator shown while the quote request is in flight.
//!
//! A background thread rewrites the current terminal line with
//! `Processing <glyph>`, cycling `| / - \`. [`Spinner::stop`] sends a one-shot
//! signal over a crossbeam channel and joins the thread, so once it returns the
//! line has been cleared and nothing else will be written.
use crossbeam_channel::{Sender, bounded, select};
use log::{debug, warn};
use std::io::Write;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How long each glyph stays on screen.
pub const FRAME_DELAY: Duration = Duration::from_millis(100);

const LABEL: &str = "Processing";
const FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Handle to the indicator thread.
pub struct Spinner {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// Spawns the indicator thread writing to `out`.
    pub fn start<W>(mut out: W, frame_delay: Duration) -> Self
    where
        W: Write + Send + 'static,
    {
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let handle = thread::spawn(move || {
            for frame in FRAMES.iter().cycle() {
                if let Err(e) = write!(out, "\r{} {}", LABEL, frame).and_then(|_| out.flush()) {
                    debug!("Progress indicator stopped writing: {}", e);
                    break;
                }
                select! {
                    recv(stop_rx) -> _ => break,
                    default(frame_delay) => {},
                }
            }
            let blank = " ".repeat(LABEL.len() + 2);
            let _ = write!(out, "\r{}\r", blank).and_then(|_| out.flush());
        });

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// An indicator that draws nothing, for non-interactive output.
    pub fn disabled() -> Self {
        Self {
            stop_tx: None,
            handle: None,
        }
    }

    /// Signals the thread to stop and waits until the line is cleared.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Progress indicator thread panicked");
            }
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.shutdown();
    }
}
