use chrono::{DateTime, FixedOffset, Local, TimeZone, Timelike, Utc};
use serde::Deserialize;
use tracing::warn;

/// Inclusive range of hours of the day, `[8, 10]` covers 08:00 up to 10:59.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(from = "(u32, u32)")]
pub struct PeakWindow {
    start: u32,
    end: u32,
}

impl PeakWindow {
    pub fn new(start: u32, end: u32) -> Self {
        PeakWindow { start, end }
    }

    pub fn contains(&self, hour: u32) -> bool {
        (self.start..=self.end).contains(&hour)
    }
}

impl From<(u32, u32)> for PeakWindow {
    fn from((start, end): (u32, u32)) -> Self {
        PeakWindow::new(start, end)
    }
}

/// Local ETA estimate used when no live route is available.
#[derive(Clone, PartialEq, Debug)]
pub struct TravelTimeHeuristic {
    minutes_per_km: f64,
    peak_multiplier: f64,
    peak_hours: Vec<PeakWindow>,
    utc_offset_minutes: Option<i32>,
}

impl TravelTimeHeuristic {
    pub fn new(minutes_per_km: f64, peak_multiplier: f64, peak_hours: Vec<PeakWindow>, utc_offset_minutes: Option<i32>) -> Self {
        TravelTimeHeuristic {
            minutes_per_km,
            peak_multiplier,
            peak_hours,
            utc_offset_minutes,
        }
    }

    /// Minutes needed to cover `distance_km` at `at`. The hour is read in the timezone `at` carries.
    pub fn estimate<Tz: TimeZone>(&self, distance_km: f64, at: &DateTime<Tz>) -> u32 {
        let baseline = distance_km.max(0.0) * self.minutes_per_km;
        let minutes = if self.is_peak_hour(at.hour()) {
            baseline * self.peak_multiplier
        } else {
            baseline
        };

        minutes.round() as u32
    }

    /// Same as [`TravelTimeHeuristic::estimate`] for the current time in the configured timezone.
    pub fn estimate_now(&self, distance_km: f64) -> u32 {
        self.estimate(distance_km, &self.now())
    }

    pub fn is_peak_hour(&self, hour: u32) -> bool {
        self.peak_hours.iter().any(|window| window.contains(hour))
    }

    /// Current time at the configured UTC offset, or server-local time when none is configured.
    fn now(&self) -> DateTime<FixedOffset> {
        let Some(offset_minutes) = self.utc_offset_minutes else {
            return Local::now().fixed_offset();
        };

        match FixedOffset::east_opt(offset_minutes * 60) {
            Some(offset) => Utc::now().with_timezone(&offset),
            None => {
                warn!("⚠️ Invalid UTC offset of {} minutes, falling back to local time", offset_minutes);
                Local::now().fixed_offset()
            }
        }
    }
}

impl Default for TravelTimeHeuristic {
    fn default() -> Self {
        TravelTimeHeuristic::new(2.0, 1.5, vec![PeakWindow::new(8, 10), PeakWindow::new(17, 19)], None)
    }
}
