//! Horizontal swipe recognition from touch start/end samples.
//!
//! A swipe needs enough horizontal travel, horizontal travel that dominates
//! vertical travel, and enough speed. Everything else (taps, scrolls, slow
//! drags) is ignored.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::state::drawer::SwipeDirection;

pub const SWIPE_MIN_DISTANCE_PX: f64 = 30.0;
/// Pixels per millisecond.
pub const SWIPE_MIN_VELOCITY: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSample {
    pub x: f64,
    pub y: f64,
    pub t_ms: f64,
}

/// Classify a completed touch.
#[must_use]
pub fn classify(start: TouchSample, end: TouchSample) -> Option<SwipeDirection> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx.abs() < SWIPE_MIN_DISTANCE_PX || dx.abs() <= dy.abs() {
        return None;
    }
    let elapsed = (end.t_ms - start.t_ms).max(1.0);
    if dx.abs() / elapsed < SWIPE_MIN_VELOCITY {
        return None;
    }
    Some(if dx > 0.0 { SwipeDirection::Right } else { SwipeDirection::Left })
}

/// Pairs touchstart with touchend for one hit region.
#[derive(Clone, Debug, Default)]
pub struct SwipeTracker {
    start: Option<TouchSample>,
}

impl SwipeTracker {
    pub fn begin(&mut self, sample: TouchSample) {
        self.start = Some(sample);
    }

    pub fn finish(&mut self, sample: TouchSample) -> Option<SwipeDirection> {
        classify(self.start.take()?, sample)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

/// First touch point of `ev`. `ended` reads the touches that just lifted.
#[cfg(feature = "hydrate")]
pub fn sample_from_event(ev: &web_sys::TouchEvent, ended: bool) -> Option<TouchSample> {
    let list = if ended { ev.changed_touches() } else { ev.touches() };
    let touch = list.get(0)?;
    Some(TouchSample { x: f64::from(touch.client_x()), y: f64::from(touch.client_y()), t_ms: ev.time_stamp() })
}
