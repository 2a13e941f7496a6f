// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::time::{Duration, Instant};

pub const DEFAULT_LABEL: &str = "Elapsed time";

/// Stopwatch reporting the time spent in a scope.
///
/// The report `"<label>: <elapsed>"` is handed to the reporter exactly
/// once, either by [`Timer::finish`] or when the timer is dropped.
///
/// ```
/// use projkit_core::timer::Timer;
///
/// let mut lines = vec![];
/// {
///     let _timer = Timer::with_reporter("Scan", |line| lines.push(line.to_string()));
///     // ... timed work ...
/// }
/// assert!(lines[0].starts_with("Scan: "));
/// ```
pub struct Timer<'a> {
    label: String,
    start: Instant,
    reporter: Box<dyn FnMut(&str) + 'a>,
    finished: bool,
}

impl Timer<'static> {
    /// Timer reporting on standard output.
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self::with_reporter(label, |line| println!("{line}"))
    }
}

impl Default for Timer<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL)
    }
}

impl<'a> Timer<'a> {
    pub fn with_reporter<S, F>(label: S, reporter: F) -> Self
    where
        S: Into<String>,
        F: FnMut(&str) + 'a,
    {
        Self {
            label: label.into(),
            start: Instant::now(),
            reporter: Box::new(reporter),
            finished: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer, report and return the elapsed time.
    pub fn finish(mut self) -> Duration {
        self.report()
    }

    fn report(&mut self) -> Duration {
        let elapsed = self.start.elapsed();
        if !self.finished {
            self.finished = true;
            let line = format!("{}: {}", self.label, format_elapsed(elapsed));
            (self.reporter)(&line);
        }
        elapsed
    }
}

impl Drop for Timer<'_> {
    fn drop(&mut self) {
        self.report();
    }
}

/// Format as seconds, minutes and seconds, or hours, minutes and seconds,
/// seconds always with two decimals.
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs_f64();
    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let secs = seconds % 60.0;

    if hours > 0 {
        format!("{hours} h, {minutes} min and {secs:.2} sec")
    } else if minutes > 0 {
        format!("{minutes} min and {secs:.2} sec")
    } else {
        format!("{secs:.2} sec")
    }
}
