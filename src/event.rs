use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

use crate::config::Config;

pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    SpawnObstacle,
    SpawnPickup,
}

/// A fixed-interval timer that never drifts: each deadline is the previous
/// one plus the interval, not "now" plus the interval.
#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    interval: Duration,
    next: Instant,
}

impl Cadence {
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            next: start + interval,
        }
    }

    /// Time left until the next deadline, zero if already due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Returns true and arms the next deadline if this cadence is due.
    /// After a long stall the missed deadlines are skipped, not replayed.
    pub fn fire(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
        true
    }
}

/// Terminal events the game reacts to. Releases, drags and moves are
/// dropped here so they never cost a redraw.
fn forward(ev: crossterm::event::Event) -> Option<Event> {
    match ev {
        crossterm::event::Event::Key(key) if key.kind == KeyEventKind::Press => {
            Some(Event::Key(key))
        }
        crossterm::event::Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
            Some(Event::Mouse(mouse))
        }
        _ => None,
    }
}

pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(config: &Config) -> Self {
        let (tx, rx) = mpsc::channel();
        let now = Instant::now();
        let mut frame = Cadence::new(Duration::from_millis(config.game.frame_ms), now);
        let mut obstacles = Cadence::new(
            Duration::from_millis(config.obstacles.spawn_interval_ms),
            now,
        );
        let mut pickups = Cadence::new(Duration::from_millis(config.fuel.spawn_interval_ms), now);

        thread::spawn(move || loop {
            let now = Instant::now();
            let timeout = frame
                .remaining(now)
                .min(obstacles.remaining(now))
                .min(pickups.remaining(now));

            if event::poll(timeout).unwrap_or(false) {
                if let Some(ev) = event::read().ok().and_then(forward) {
                    if tx.send(ev).is_err() {
                        return;
                    }
                }
            }

            let now = Instant::now();
            if obstacles.fire(now) && tx.send(Event::SpawnObstacle).is_err() {
                return;
            }
            if pickups.fire(now) && tx.send(Event::SpawnPickup).is_err() {
                return;
            }
            if frame.fire(now) && tx.send(Event::Tick).is_err() {
                return;
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}
