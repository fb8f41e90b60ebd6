// File: crates/barchart-core/src/animation.rs
// Summary: Easing functions and the frame-driven interpolation scheduler.

use std::time::Duration;

/// Easing curves recognized by the animation configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    CubicIn,
    #[default]
    CubicOut,
    CubicInOut,
}

impl Easing {
    /// Parse a configured easing name. Unrecognized names fall back to
    /// `cubicOut`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "linear" => Easing::Linear,
            "cubicIn" => Easing::CubicIn,
            "cubicOut" => Easing::CubicOut,
            "cubicInOut" => Easing::CubicInOut,
            _ => Easing::CubicOut,
        }
    }

    /// Map linear progress in [0, 1] to eased progress. Input is clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 * t - 2.0;
                    0.5 * u * u * u + 1.0
                }
            }
        }
    }
}

/// Cancellation handle for an in-flight animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

/// One interpolated value produced by [`AnimationScheduler::advance`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    pub id: AnimationId,
    pub value: f64,
    pub done: bool,
}

#[derive(Clone, Debug)]
struct Tween {
    id: AnimationId,
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

/// Time-based interpolation loop. The embedder calls [`advance`] once per
/// display frame; between frames control returns to the caller, so component
/// state is either idle or mid-animation with pending tweens.
///
/// [`advance`]: AnimationScheduler::advance
#[derive(Default)]
pub struct AnimationScheduler {
    tweens: Vec<Tween>,
    next_id: u64,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tween from `from` to `to`. A zero duration completes on the
    /// first advance.
    pub fn animate(&mut self, from: f64, to: f64, duration: Duration, easing: Easing) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        self.tweens.push(Tween {
            id,
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        });
        id
    }

    /// Advance every tween by `dt` and return one frame per live tween.
    /// Finished tweens report `done` and are dropped.
    pub fn advance(&mut self, dt: Duration) -> Vec<AnimationFrame> {
        let mut frames = Vec::with_capacity(self.tweens.len());
        for tween in &mut self.tweens {
            tween.elapsed += dt;
            let progress = if tween.duration.is_zero() {
                1.0
            } else {
                (tween.elapsed.as_secs_f64() / tween.duration.as_secs_f64()).min(1.0)
            };
            let value = tween.from + (tween.to - tween.from) * tween.easing.apply(progress);
            frames.push(AnimationFrame {
                id: tween.id,
                value,
                done: progress >= 1.0,
            });
        }
        self.tweens.retain(|t| {
            !t.duration.is_zero() && t.elapsed.as_secs_f64() / t.duration.as_secs_f64() < 1.0
        });
        frames
    }

    /// Cancel one tween; no further frames are produced for it.
    pub fn cancel(&mut self, id: AnimationId) -> bool {
        let before = self.tweens.len();
        self.tweens.retain(|t| t.id != id);
        self.tweens.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tweens.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty()
    }
}
