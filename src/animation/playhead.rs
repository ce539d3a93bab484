/// How the playhead is moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Idle,
    Forward,
    Backward,
    /// Eases toward `target`; `lag` is the smoothing time in seconds
    /// (zero jumps straight there).
    Seek { target: f64, lag: f64 },
    /// Repeats forever, bouncing back when `yoyo` is set.
    Loop { yoyo: bool, reversed: bool },
}

const SETTLE: f64 = 1e-3;

/// Time cursor over a timeline of fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playhead {
    time: f64,
    duration: f64,
    motion: Motion,
}

impl Playhead {
    pub fn new(duration: f64) -> Self {
        Playhead {
            time: 0.0,
            duration: duration.max(0.0),
            motion: Motion::Idle,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn progress(&self) -> f64 {
        if self.duration == 0.0 {
            return if self.time > 0.0 { 1.0 } else { 0.0 };
        }
        self.time / self.duration
    }

    pub fn is_moving(&self) -> bool {
        self.motion != Motion::Idle
    }

    pub fn play(&mut self) {
        self.motion = Motion::Forward;
    }

    pub fn reverse(&mut self) {
        self.motion = Motion::Backward;
    }

    pub fn repeat(&mut self, yoyo: bool) {
        self.motion = Motion::Loop { yoyo, reversed: false };
    }

    pub fn pause(&mut self) {
        self.motion = Motion::Idle;
    }

    /// Seeks to `progress` (0..1) of the duration, smoothed over `lag`.
    pub fn scrub(&mut self, progress: f64, lag: f64) {
        let target = progress.clamp(0.0, 1.0) * self.duration;
        if lag <= 0.0 {
            self.time = target;
            self.motion = Motion::Idle;
        } else {
            self.motion = Motion::Seek { target, lag };
        }
    }

    /// Moves time forward by `dt` seconds. Returns whether the playhead
    /// still has somewhere to go.
    pub fn advance(&mut self, dt: f64) -> bool {
        let dt = dt.max(0.0);
        match self.motion {
            Motion::Idle => {}
            Motion::Forward => {
                self.time = (self.time + dt).min(self.duration);
                if self.time >= self.duration {
                    self.motion = Motion::Idle;
                }
            }
            Motion::Backward => {
                self.time = (self.time - dt).max(0.0);
                if self.time <= 0.0 {
                    self.motion = Motion::Idle;
                }
            }
            Motion::Seek { target, lag } => {
                let step = (dt / lag).min(1.0);
                self.time += (target - self.time) * step;
                if (target - self.time).abs() < SETTLE {
                    self.time = target;
                    self.motion = Motion::Idle;
                }
            }
            Motion::Loop { yoyo, reversed } => {
                if self.duration == 0.0 {
                    return true;
                }
                let d = self.duration;
                if yoyo {
                    // Position within one there-and-back cycle of 2d.
                    let phase = if reversed { 2.0 * d - self.time } else { self.time };
                    let phase = (phase + dt).rem_euclid(2.0 * d);
                    let reversed = phase > d;
                    self.time = if reversed { 2.0 * d - phase } else { phase };
                    self.motion = Motion::Loop { yoyo, reversed };
                } else {
                    let t = if reversed { self.time - dt } else { self.time + dt };
                    self.time = t.rem_euclid(d);
                }
            }
        }
        self.is_moving()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_to_the_end_and_stops() {
        let mut head = Playhead::new(1.0);
        head.play();
        assert!(head.advance(0.6));
        assert!(!head.advance(0.6));
        assert_eq!(head.time(), 1.0);
        assert_eq!(head.motion(), Motion::Idle);
    }

    #[test]
    fn reverse_continues_from_current_time() {
        let mut head = Playhead::new(1.0);
        head.play();
        head.advance(0.4);
        head.reverse();
        head.advance(0.1);
        assert!((head.time() - 0.3).abs() < 1e-9);
        head.advance(5.0);
        assert_eq!(head.time(), 0.0);
        assert!(!head.is_moving());
    }

    #[test]
    fn scrub_without_lag_jumps() {
        let mut head = Playhead::new(2.0);
        head.scrub(0.25, 0.0);
        assert_eq!(head.time(), 0.5);
        assert!(!head.is_moving());
        head.scrub(3.0, 0.0);
        assert_eq!(head.time(), 2.0);
    }

    #[test]
    fn scrub_with_lag_converges() {
        let mut head = Playhead::new(2.0);
        head.scrub(1.0, 1.0);
        head.advance(0.1);
        assert!(head.time() > 0.0 && head.time() < 2.0);
        for _ in 0..1000 {
            head.advance(0.016);
        }
        assert_eq!(head.time(), 2.0);
        assert!(!head.is_moving());
    }

    #[test]
    fn yoyo_loop_bounces() {
        let mut head = Playhead::new(1.0);
        head.repeat(true);
        head.advance(1.25);
        assert!((head.time() - 0.75).abs() < 1e-9);
        head.advance(1.0);
        assert!((head.time() - 0.25).abs() < 1e-9);
        assert!(head.is_moving());
    }

    #[test]
    fn plain_loop_wraps() {
        let mut head = Playhead::new(1.0);
        head.repeat(false);
        head.advance(2.5);
        assert!((head.time() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn a_long_pause_wraps_in_one_step() {
        let mut head = Playhead::new(0.5);
        head.repeat(true);
        // an hour in a background tab
        head.advance(3600.2);
        assert!((head.time() - 0.2).abs() < 1e-6);
        assert_eq!(head.motion(), Motion::Loop { yoyo: true, reversed: false });

        let mut head = Playhead::new(0.3);
        head.repeat(false);
        head.advance(1e9 + 0.1);
        assert!(head.time() >= 0.0 && head.time() < 0.3);
    }
}
