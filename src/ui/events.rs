use crossterm::event::{self, Event, KeyEvent};
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// OS signal received (SIGTERM, SIGINT, SIGHUP)
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    /// Spawn the reader thread. It stops once the handler is dropped.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let terminate = Arc::new(AtomicBool::new(false));
            for signal in [SIGTERM, SIGINT, SIGHUP] {
                if let Err(err) = signal_hook::flag::register(signal, Arc::clone(&terminate)) {
                    tracing::warn!(signal, error = %err, "Failed to register signal handler");
                }
            }

            let mut last_tick = Instant::now();
            loop {
                if terminate.swap(false, Ordering::Relaxed) && !forward(&tx, AppEvent::Shutdown) {
                    break;
                }

                // Use short poll timeout to check the signal flag frequently
                let timeout =
                    tick_rate.saturating_sub(last_tick.elapsed()).min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => forward(&tx, AppEvent::Key(key)),
                            Ok(Event::Resize(cols, rows)) => {
                                forward(&tx, AppEvent::Resize(cols, rows))
                            }
                            Ok(_) => true,
                            Err(err) => {
                                tracing::error!(error = %err, "Terminal read failed");
                                false
                            }
                        };
                        if !forwarded {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if !forward(&tx, AppEvent::Tick) {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Returns false once the UI loop has gone away.
fn forward(tx: &Sender<AppEvent>, event: AppEvent) -> bool {
    tx.send(event).is_ok()
}
