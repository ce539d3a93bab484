/// The animatable subset of an element's inline style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub scale_y: f64,
    pub rotate: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    /// Right inset of `clip-path: inset(...)`, in percent.
    pub clip_right: f64,
    pub blur: f64,
}

impl StyleState {
    /// Identity state: fully visible, untransformed.
    pub const REST: StyleState = StyleState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        scale_y: 1.0,
        rotate: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        clip_right: 0.0,
        blur: 0.0,
    };

    pub const fn hidden() -> Self {
        StyleState { opacity: 0.0, ..Self::REST }
    }

    pub const fn opacity(self, opacity: f64) -> Self {
        StyleState { opacity, ..self }
    }

    pub const fn x(self, x: f64) -> Self {
        StyleState { x, ..self }
    }

    pub const fn y(self, y: f64) -> Self {
        StyleState { y, ..self }
    }

    pub const fn scale(self, scale: f64) -> Self {
        StyleState { scale, ..self }
    }

    pub const fn scale_y(self, scale_y: f64) -> Self {
        StyleState { scale_y, ..self }
    }

    pub const fn rotate(self, rotate: f64) -> Self {
        StyleState { rotate, ..self }
    }

    pub const fn rotate_x(self, rotate_x: f64) -> Self {
        StyleState { rotate_x, ..self }
    }

    pub const fn rotate_y(self, rotate_y: f64) -> Self {
        StyleState { rotate_y, ..self }
    }

    pub const fn clip_right(self, clip_right: f64) -> Self {
        StyleState { clip_right, ..self }
    }

    pub const fn blur(self, blur: f64) -> Self {
        StyleState { blur, ..self }
    }

    pub fn lerp(from: &StyleState, to: &StyleState, t: f64) -> StyleState {
        if t == 0.0 {
            return *from;
        }
        if t == 1.0 {
            return *to;
        }
        let mix = |a: f64, b: f64| a + (b - a) * t;
        StyleState {
            opacity: mix(from.opacity, to.opacity),
            x: mix(from.x, to.x),
            y: mix(from.y, to.y),
            scale: mix(from.scale, to.scale),
            scale_y: mix(from.scale_y, to.scale_y),
            rotate: mix(from.rotate, to.rotate),
            rotate_x: mix(from.rotate_x, to.rotate_x),
            rotate_y: mix(from.rotate_y, to.rotate_y),
            clip_right: mix(from.clip_right, to.clip_right),
            blur: mix(from.blur, to.blur),
        }
    }

    pub fn transform(&self) -> String {
        let mut parts = Vec::new();
        if self.rotate_x != 0.0 || self.rotate_y != 0.0 {
            parts.push("perspective(1000px)".to_string());
        }
        parts.push(format!("translate3d({:.3}px, {:.3}px, 0)", self.x, self.y));
        if self.rotate_x != 0.0 {
            parts.push(format!("rotateX({:.3}deg)", self.rotate_x));
        }
        if self.rotate_y != 0.0 {
            parts.push(format!("rotateY({:.3}deg)", self.rotate_y));
        }
        if self.rotate != 0.0 {
            parts.push(format!("rotate({:.3}deg)", self.rotate));
        }
        parts.push(format!("scale({:.4}, {:.4})", self.scale, self.scale * self.scale_y));
        parts.join(" ")
    }

    /// CSS declarations, as `(property, value)` pairs, for inline styling.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            ("opacity", format!("{:.4}", self.opacity.clamp(0.0, 1.0))),
            ("transform", self.transform()),
        ];
        if self.clip_right != 0.0 {
            out.push(("clip-path", format!("inset(0 {:.3}% 0 0)", self.clip_right)));
        } else {
            out.push(("clip-path", "none".to_string()));
        }
        if self.blur > 0.0 {
            out.push(("filter", format!("blur({:.3}px)", self.blur)));
        } else {
            out.push(("filter", "none".to_string()));
        }
        out
    }
}

impl Default for StyleState {
    fn default() -> Self {
        Self::REST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_both_ends() {
        let from = StyleState::hidden().y(60.0).blur(10.0);
        assert_eq!(StyleState::lerp(&from, &StyleState::REST, 0.0), from);
        assert_eq!(StyleState::lerp(&from, &StyleState::REST, 1.0), StyleState::REST);
        let mid = StyleState::lerp(&from, &StyleState::REST, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.y, 30.0);
    }

    #[test]
    fn rest_renders_without_clip_or_filter() {
        let decls = StyleState::REST.declarations();
        assert!(decls.contains(&("clip-path", "none".to_string())));
        assert!(decls.contains(&("filter", "none".to_string())));
        assert!(!StyleState::REST.transform().contains("perspective"));
    }

    #[test]
    fn tilt_adds_perspective() {
        let tilted = StyleState::REST.rotate_x(-5.0);
        assert!(tilted.transform().starts_with("perspective(1000px)"));
        assert!(tilted.transform().contains("rotateX(-5.000deg)"));
    }
}
