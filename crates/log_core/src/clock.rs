use std::{
    sync::{Arc, Mutex},
    thread,
    time::Duration,
};

use chrono::{DateTime, Datelike, Local, Timelike};
use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use tracing::warn;

/// Source of wall-clock time. The state machine reads time through this
/// seam so tests can pin the clock.
pub trait WallClock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Time-of-day stamp recorded on visitor entries, e.g. "3:04:05 PM".
pub fn time_of_day(now: &DateTime<Local>) -> String {
    now.format("%-I:%M:%S %p").to_string()
}

/// Calendar-date stamp recorded on visitor entries, e.g. "8/31/2026".
pub fn short_date(now: &DateTime<Local>) -> String {
    now.format("%-m/%-d/%Y").to_string()
}

/// Snapshot of the wall clock as the display widget shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    /// 12-hour form, zero-padded ("12" at midnight and noon).
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    /// "AM" or "PM".
    pub meridiem: String,
    /// Day-of-week index, 0 = Sunday.
    pub weekday: usize,
    /// Long-form date, e.g. "August 31, 2026".
    pub date: String,
}

impl ClockReading {
    pub fn from_datetime(now: DateTime<Local>) -> Self {
        let (is_pm, hour12) = now.hour12();
        Self {
            hours: format!("{hour12:02}"),
            minutes: format!("{:02}", now.minute()),
            seconds: format!("{:02}", now.second()),
            meridiem: if is_pm { "PM" } else { "AM" }.to_string(),
            weekday: now.weekday().num_days_from_sunday() as usize,
            date: now.format("%B %-d, %Y").to_string(),
        }
    }
}

/// Free-running one-second sampler feeding the clock widget.
///
/// A background thread re-samples the wall clock once per period and
/// publishes the latest reading; readers poll [`ClockSampler::latest`].
/// Ticks are not drift-corrected and missed ticks are not caught up.
/// Dropping the sampler signals the thread and joins it, so the periodic
/// work never outlives its owner.
pub struct ClockSampler {
    latest: Arc<Mutex<ClockReading>>,
    stop: Option<Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ClockSampler {
    pub fn start() -> Self {
        Self::with_period(Duration::from_secs(1))
    }

    pub fn with_period(period: Duration) -> Self {
        let latest = Arc::new(Mutex::new(ClockReading::from_datetime(Local::now())));
        let (stop_tx, stop_rx) = bounded::<()>(0);

        let shared = Arc::clone(&latest);
        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {
                    let reading = ClockReading::from_datetime(Local::now());
                    if let Ok(mut slot) = shared.lock() {
                        *slot = reading;
                    }
                }
                // Stop signal, or the owner dropped the sender.
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        Self {
            latest,
            stop: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Most recent reading published by the sampler thread.
    pub fn latest(&self) -> ClockReading {
        match self.latest.lock() {
            Ok(reading) => reading.clone(),
            // A panicked sampler thread leaves the last good reading behind.
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Drop for ClockSampler {
    fn drop(&mut self) {
        drop(self.stop.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("clock sampler thread panicked before shutdown");
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/clock_tests.rs"]
mod tests;
