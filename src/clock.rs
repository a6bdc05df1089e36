//! The animation clock driving the simulated day.
//!
//! One wrapping progress value in [0, 1) stands for the whole day; every
//! tick advances it by a fixed increment and maps it to a wall-clock
//! instant. A second accumulator advances the film-grain phase, unrelated
//! to the day cycle, so the grain keeps moving even if the day is paused.

use crate::{Error, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Minutes in the simulated day.
const MINUTES_PER_DAY: f64 = 1440.0;

/// Which calendar date the simulated times fall on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateMode {
    /// Use the host's current UTC date, re-read on every mapping
    Today,
    /// Pin the simulation to one fixed date
    Fixed(NaiveDate),
}

/// Cyclic day clock: progress in [0, 1), advanced per tick, wrapping at 1.
///
/// # Example
/// ```
/// # use lightwell::clock::{AnimationClock, DateMode};
/// # use chrono::NaiveDate;
/// let date = NaiveDate::from_ymd_opt(2026, 3, 21).unwrap();
/// let mut clock = AnimationClock::new(0.25, 0.1, DateMode::Fixed(date)).unwrap();
/// clock.advance();
/// clock.advance();
/// assert_eq!(clock.progress(), 0.5);
/// assert_eq!(clock.instant().to_string(), "2026-03-21 12:00:00 UTC");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClock {
    progress: f64,
    speed: f64,
    grain_time: f64,
    grain_speed: f64,
    date_mode: DateMode,
}

impl AnimationClock {
    /// Creates a clock at progress zero.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` for a speed outside [0, 1) or a
    /// negative or non-finite grain speed.
    pub fn new(speed: f64, grain_speed: f64, date_mode: DateMode) -> Result<Self> {
        if !speed.is_finite() || !(0.0..1.0).contains(&speed) {
            return Err(Error::invalid_configuration(
                "animation speed must be at least 0 and below 1",
            ));
        }
        if !grain_speed.is_finite() || grain_speed < 0.0 {
            return Err(Error::invalid_configuration(
                "grain speed must be non-negative",
            ));
        }
        Ok(Self {
            progress: 0.0,
            speed,
            grain_time: 0.0,
            grain_speed,
            date_mode,
        })
    }

    /// Advances one tick: day progress wraps at 1, grain time grows
    /// without bound.
    pub fn advance(&mut self) {
        self.progress += self.speed;
        if self.progress >= 1.0 {
            self.progress -= 1.0;
        }
        self.grain_time += self.grain_speed;
    }

    /// Gets the day progress in [0, 1).
    #[must_use]
    pub const fn progress(&self) -> f64 {
        self.progress
    }

    /// Jumps the day progress to a value in [0, 1).
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` for values outside [0, 1).
    pub fn set_progress(&mut self, progress: f64) -> Result<()> {
        if !progress.is_finite() || !(0.0..1.0).contains(&progress) {
            return Err(Error::invalid_configuration(
                "progress must be at least 0 and below 1",
            ));
        }
        self.progress = progress;
        Ok(())
    }

    /// Gets the grain phase accumulated so far.
    #[must_use]
    pub const fn grain_time(&self) -> f64 {
        self.grain_time
    }

    /// Gets the calendar date the simulated times fall on.
    #[must_use]
    pub fn current_date(&self) -> NaiveDate {
        match self.date_mode {
            DateMode::Today => Utc::now().date_naive(),
            DateMode::Fixed(date) => date,
        }
    }

    /// Gets the simulated instant for the current progress and date.
    #[must_use]
    pub fn instant(&self) -> DateTime<Utc> {
        Self::instant_at(self.progress, self.current_date())
    }

    /// Maps a progress value onto a date: progress spans the day's minutes
    /// [0, 1440), split into whole hours, minutes and seconds (fractional
    /// minutes become seconds, truncated).
    ///
    /// Values outside [0, 1) spill into the adjacent days.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn instant_at(progress: f64, date: NaiveDate) -> DateTime<Utc> {
        let minutes = progress * MINUTES_PER_DAY;
        let hour = (minutes / 60.0).floor();
        let minute = (minutes % 60.0).floor();
        let second = ((minutes - minutes.floor()) * 60.0).floor();

        let seconds_from_midnight = (hour * 3600.0 + minute * 60.0 + second) as i64;
        date.and_time(NaiveTime::MIN).and_utc() + Duration::seconds(seconds_from_midnight)
    }
}
