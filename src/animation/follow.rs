use super::easing::Ease;
use super::trigger::Bounds;

pub const FOLLOW_DURATION: f64 = 0.3;
pub const FOLLOW_EASE: Ease = Ease::Power2Out;
pub const MAGNETIC_RETURN_DURATION: f64 = 0.5;
pub const MAGNETIC_RETURN_EASE: Ease = Ease::elastic_out(1.0, 0.3);
pub const DEFAULT_STRENGTH: f64 = 0.3;

/// A 2D value tweening toward a target that can change at any time. A
/// new target restarts the tween from wherever the value currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Follower {
    current: (f64, f64),
    from: (f64, f64),
    to: (f64, f64),
    elapsed: f64,
    duration: f64,
    ease: Ease,
}

impl Default for Follower {
    fn default() -> Self {
        Follower {
            current: (0.0, 0.0),
            from: (0.0, 0.0),
            to: (0.0, 0.0),
            elapsed: 0.0,
            duration: 0.0,
            ease: Ease::Linear,
        }
    }
}

impl Follower {
    pub fn current(&self) -> (f64, f64) {
        self.current
    }

    pub fn target(&self) -> (f64, f64) {
        self.to
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn retarget(&mut self, to: (f64, f64), duration: f64, ease: Ease) {
        self.from = self.current;
        self.to = to;
        self.elapsed = 0.0;
        self.duration = duration.max(0.0);
        self.ease = ease;
        if self.duration == 0.0 {
            self.current = to;
        }
    }

    /// Steps the tween by `dt` seconds; returns whether it is still moving.
    pub fn advance(&mut self, dt: f64) -> bool {
        if self.is_settled() {
            return false;
        }
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        if self.is_settled() {
            self.current = self.to;
            return false;
        }
        let k = self.ease.apply(self.elapsed / self.duration);
        self.current = (
            self.from.0 + (self.to.0 - self.from.0) * k,
            self.from.1 + (self.to.1 - self.from.1) * k,
        );
        true
    }
}

/// Pulls an element toward the pointer; springs back on leave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnetic {
    pub strength: f64,
    follower: Follower,
}

impl Magnetic {
    pub fn new(strength: f64) -> Self {
        Magnetic {
            strength,
            follower: Follower::default(),
        }
    }

    /// Offset the element should head for with the pointer at
    /// `pointer` (client coordinates) over `bounds`.
    pub fn target_for(&self, pointer: (f64, f64), bounds: &Bounds) -> (f64, f64) {
        let (cx, cy) = bounds.center();
        ((pointer.0 - cx) * self.strength, (pointer.1 - cy) * self.strength)
    }

    pub fn pointer_move(&mut self, pointer: (f64, f64), bounds: &Bounds) {
        let target = self.target_for(pointer, bounds);
        self.follower.retarget(target, FOLLOW_DURATION, FOLLOW_EASE);
    }

    pub fn pointer_leave(&mut self) {
        self.follower
            .retarget((0.0, 0.0), MAGNETIC_RETURN_DURATION, MAGNETIC_RETURN_EASE);
    }

    pub fn advance(&mut self, dt: f64) -> bool {
        self.follower.advance(dt)
    }

    pub fn offset(&self) -> (f64, f64) {
        self.follower.current()
    }
}

impl Default for Magnetic {
    fn default() -> Self {
        Magnetic::new(DEFAULT_STRENGTH)
    }
}

/// Tilts an element in 3D toward the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub max_tilt: f64,
    /// Scale applied while hovered.
    pub lift: f64,
    follower: Follower,
    hovered: bool,
}

impl Tilt {
    pub fn new(max_tilt: f64) -> Self {
        Tilt {
            max_tilt,
            lift: 1.0,
            follower: Follower::default(),
            hovered: false,
        }
    }

    pub fn lift(mut self, lift: f64) -> Self {
        self.lift = lift;
        self
    }

    /// `(rotate_x, rotate_y)` in degrees for a pointer over `bounds`.
    pub fn target_for(&self, pointer: (f64, f64), bounds: &Bounds) -> (f64, f64) {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return (0.0, 0.0);
        }
        let x = (pointer.0 - bounds.left) / bounds.width - 0.5;
        let y = (pointer.1 - bounds.top) / bounds.height - 0.5;
        (-y * self.max_tilt, x * self.max_tilt)
    }

    pub fn pointer_move(&mut self, pointer: (f64, f64), bounds: &Bounds) {
        self.hovered = true;
        let target = self.target_for(pointer, bounds);
        self.follower.retarget(target, FOLLOW_DURATION, FOLLOW_EASE);
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        self.follower
            .retarget((0.0, 0.0), MAGNETIC_RETURN_DURATION, FOLLOW_EASE);
    }

    pub fn advance(&mut self, dt: f64) -> bool {
        self.follower.advance(dt)
    }

    pub fn rotation(&self) -> (f64, f64) {
        self.follower.current()
    }

    pub fn scale(&self) -> f64 {
        if self.hovered {
            self.lift
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Bounds {
        Bounds::new(100.0, 100.0, 200.0, 60.0)
    }

    fn run(m: &mut Magnetic, seconds: f64) -> Vec<(f64, f64)> {
        let mut seen = Vec::new();
        let mut t = 0.0;
        while t < seconds {
            m.advance(0.016);
            seen.push(m.offset());
            t += 0.016;
        }
        seen
    }

    #[test]
    fn pulls_toward_pointer_by_strength() {
        let mut m = Magnetic::new(0.3);
        m.pointer_move((300.0, 160.0), &button());
        run(&mut m, 1.0);
        let (x, y) = m.offset();
        assert!((x - 30.0).abs() < 1e-9);
        assert!((y - 9.0).abs() < 1e-9);
    }

    #[test]
    fn offset_stays_bounded_and_returns_home() {
        let bounds = button();
        let strength = 0.3;
        // farthest the pointer can be from the centre inside the box
        let max_reach = (100.0f64.powi(2) + 30.0f64.powi(2)).sqrt() * strength;
        let mut m = Magnetic::new(strength);

        let corners = [(100.0, 100.0), (300.0, 160.0), (100.0, 160.0), (300.0, 100.0)];
        for corner in corners {
            m.pointer_move(corner, &bounds);
            for (x, y) in run(&mut m, 0.1) {
                assert!((x * x + y * y).sqrt() <= max_reach + 1e-9);
            }
        }

        m.pointer_leave();
        for (x, y) in run(&mut m, 1.0) {
            assert!((x * x + y * y).sqrt() <= max_reach + 1e-9);
        }
        assert_eq!(m.offset(), (0.0, 0.0));
        assert!(!m.advance(0.016));
    }

    #[test]
    fn reentry_overrides_the_return_tween() {
        let mut m = Magnetic::new(0.5);
        m.pointer_move((300.0, 130.0), &button());
        run(&mut m, 1.0);
        m.pointer_leave();
        m.advance(0.1);
        let mid_return = m.offset();
        assert_ne!(mid_return, (0.0, 0.0));

        m.pointer_move((100.0, 130.0), &button());
        run(&mut m, 1.0);
        assert!((m.offset().0 + 50.0).abs() < 1e-9);
    }

    #[test]
    fn tilt_follows_pointer_quadrant() {
        let mut tilt = Tilt::new(10.0).lift(1.02);
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(tilt.target_for((100.0, 0.0), &bounds), (5.0, 5.0));
        assert_eq!(tilt.target_for((50.0, 50.0), &bounds), (-0.0, 0.0));

        tilt.pointer_move((0.0, 100.0), &bounds);
        assert_eq!(tilt.scale(), 1.02);
        while tilt.advance(0.016) {}
        assert_eq!(tilt.rotation(), (-5.0, -5.0));

        tilt.pointer_leave();
        while tilt.advance(0.016) {}
        assert_eq!(tilt.rotation(), (0.0, 0.0));
        assert_eq!(tilt.scale(), 1.0);
    }

    #[test]
    fn degenerate_bounds_do_not_tilt() {
        let tilt = Tilt::new(10.0);
        assert_eq!(tilt.target_for((5.0, 5.0), &Bounds::default()), (0.0, 0.0));
    }
}
