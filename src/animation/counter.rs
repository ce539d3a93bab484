use super::easing::Ease;

pub const DEFAULT_COUNTER_DURATION: f64 = 2.0;

/// Counts a displayed number up from zero.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTween {
    pub target: i64,
    pub duration: f64,
    pub ease: Ease,
    pub prefix: String,
    pub suffix: String,
}

impl CounterTween {
    pub fn new(target: i64) -> Self {
        CounterTween {
            target,
            duration: DEFAULT_COUNTER_DURATION,
            ease: Ease::Power2Out,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn is_done(&self, elapsed: f64) -> bool {
        elapsed >= self.duration
    }

    pub fn value_at(&self, elapsed: f64) -> i64 {
        if self.is_done(elapsed) {
            return self.target;
        }
        if elapsed <= 0.0 {
            return 0;
        }
        let k = self.ease.apply(elapsed / self.duration);
        (self.target as f64 * k).round() as i64
    }

    pub fn text_at(&self, elapsed: f64) -> String {
        format!("{}{}{}", self.prefix, self.value_at(elapsed), self.suffix)
    }
}

/// Reads a counter target out of display text such as `"200+"`.
pub fn parse_target(text: &str) -> i64 {
    text.chars()
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_lands_on_the_target() {
        for target in [0, 1, 6, 15, 50, 200, 9_999] {
            let counter = CounterTween::new(target);
            let mut last = 0;
            let mut t = 0.0;
            while !counter.is_done(t) {
                let v = counter.value_at(t);
                assert!(v >= last, "counter went backwards");
                assert!(v <= target);
                last = v;
                t += 1.0 / 60.0;
            }
            assert_eq!(counter.value_at(t), target);
            assert_eq!(counter.value_at(t + 5.0), target);
        }
    }

    #[test]
    fn formats_prefix_and_suffix() {
        let counter = CounterTween::new(50).suffix("+").prefix("~");
        assert_eq!(counter.text_at(0.0), "~0+");
        assert_eq!(counter.text_at(2.0), "~50+");
    }

    #[test]
    fn zero_duration_shows_target_at_once() {
        let counter = CounterTween::new(7).duration(0.0);
        assert_eq!(counter.value_at(0.0), 7);
    }

    #[test]
    fn parses_targets_from_text() {
        assert_eq!(parse_target("200+"), 200);
        assert_eq!(parse_target("  50+ awards"), 50);
        assert_eq!(parse_target("none"), 0);
    }
}
