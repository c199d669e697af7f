//! Splash screen timing and the tyre animation path.
//!
//! The splash is a single-shot transition: it starts in [`SplashPhase::Showing`],
//! moves to [`SplashPhase::Hidden`] once, and reports that moment exactly once
//! through [`Splash::poll`]. The first list load waits for that report.

use std::time::{Duration, Instant};

use log::{debug, info};

/// Number of frames in the animation path.
pub const PATH_FRAMES: usize = 1001;
/// Frames the tyre sits still before rolling.
pub const HOLD_FRAMES: usize = 200;
/// Horizontal travel per frame once rolling.
pub const X_STEP: f32 = 2.0;
/// Pixels of travel per full turn.
pub const PIXELS_PER_TURN: f32 = 170.0;
/// Frames spent falling into place.
pub const FALL_FRAMES: usize = 150;
pub const FALL_START_Y: f32 = -750.0;
pub const FALL_DISTANCE: f32 = 420.0;

/// Default time the splash stays up.
pub const DEFAULT_SPLASH_DURATION: Duration = Duration::from_millis(1500);

/// Pre-computed position and rotation arrays for the rolling tyre.
#[derive(Debug, Clone, PartialEq)]
pub struct SplashPath {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub rotation: Vec<f32>,
}

/// Tyre pose for one frame: offsets in pixels, rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplashFrame {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}

impl SplashPath {
    pub fn compute() -> Self {
        let x: Vec<f32> = (0..PATH_FRAMES)
            .map(|i| {
                if i < HOLD_FRAMES {
                    0.0
                } else {
                    (i - HOLD_FRAMES) as f32 * X_STEP
                }
            })
            .collect();

        let rotation = x.iter().map(|x| x / PIXELS_PER_TURN * 360.0).collect();

        let rest_y = FALL_START_Y + FALL_DISTANCE;
        let y = (0..PATH_FRAMES)
            .map(|i| {
                if i < FALL_FRAMES {
                    let t = i as f32 / (FALL_FRAMES - 1) as f32;
                    FALL_START_Y + t * t * FALL_DISTANCE
                } else {
                    rest_y
                }
            })
            .collect();

        Self { x, y, rotation }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Frame for `progress` in `0.0..=1.0`; values outside are clamped.
    pub fn frame_at(&self, progress: f32) -> SplashFrame {
        if self.is_empty() {
            return SplashFrame {
                x: 0.0,
                y: 0.0,
                rotation: 0.0,
            };
        }
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let index = (progress * (self.len() - 1) as f32).round() as usize;
        SplashFrame {
            x: self.x[index],
            y: self.y[index],
            rotation: self.rotation[index],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    Showing,
    Hidden,
}

/// Time-boxed splash screen.
#[derive(Debug)]
pub struct Splash {
    phase: SplashPhase,
    started: Instant,
    duration: Duration,
    path: SplashPath,
}

impl Splash {
    /// Starts a splash at `now` that hides after `duration`.
    ///
    /// A zero duration hides on the first poll.
    pub fn new(duration: Duration, now: Instant) -> Self {
        debug!("Splash started for {duration:?}");
        Self {
            phase: SplashPhase::Showing,
            started: now,
            duration,
            path: SplashPath::compute(),
        }
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn is_showing(&self) -> bool {
        self.phase == SplashPhase::Showing
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Advances the timer. Returns `true` exactly once, on the call that
    /// hides the splash because its time ran out.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.phase == SplashPhase::Hidden {
            return false;
        }
        if now.saturating_duration_since(self.started) < self.duration {
            return false;
        }

        info!("Splash finished");
        self.phase = SplashPhase::Hidden;
        true
    }

    /// Hides the splash without signalling completion.
    pub fn cancel(&mut self) {
        if self.phase == SplashPhase::Showing {
            debug!("Splash cancelled");
            self.phase = SplashPhase::Hidden;
        }
    }

    /// Elapsed share of the duration, `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn frame(&self, now: Instant) -> SplashFrame {
        self.path.frame_at(self.progress(now))
    }
}

#[cfg(test)]
#[path = "splash_tests.rs"]
mod tests;
