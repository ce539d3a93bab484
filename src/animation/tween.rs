use std::str::FromStr;

use super::easing::Ease;
use super::presets::DEFAULT_EASE;
use super::style::StyleState;

/// One from/to interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: StyleState,
    pub to: StyleState,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: StyleState, to: StyleState, duration: f64) -> Self {
        Tween {
            from,
            to,
            duration: duration.max(0.0),
            delay: 0.0,
            ease: DEFAULT_EASE,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn end(&self) -> f64 {
        self.delay + self.duration
    }

    /// Eased progress at `time` seconds after the tween was scheduled.
    pub fn progress(&self, time: f64) -> f64 {
        let local = time - self.delay;
        if local <= 0.0 {
            return 0.0;
        }
        // tolerance absorbs rounding in timeline start + duration sums
        if self.duration == 0.0 || local >= self.duration - 1e-9 {
            return 1.0;
        }
        self.ease.apply(local / self.duration)
    }

    pub fn sample(&self, time: f64) -> StyleState {
        StyleState::lerp(&self.from, &self.to, self.progress(time))
    }
}

/// Where a timeline entry starts, in GSAP's position grammar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Absolute time in seconds.
    At(f64),
    /// `"<"`: together with the previous entry.
    WithPrevious,
    /// `"+=x"` / `"-=x"`: relative to the end of the previous entry.
    AfterPrevious(f64),
}

impl Default for Position {
    fn default() -> Self {
        Position::AfterPrevious(0.0)
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| format!("bad timeline position {:?}: {}", s, e))
        };
        if s == "<" {
            Ok(Position::WithPrevious)
        } else if let Some(rest) = s.strip_prefix("+=") {
            Ok(Position::AfterPrevious(parse(rest)?))
        } else if let Some(rest) = s.strip_prefix("-=") {
            Ok(Position::AfterPrevious(-parse(rest)?))
        } else {
            Ok(Position::At(parse(s)?))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub target: usize,
    pub start: f64,
    pub tween: Tween,
}

/// An ordered set of tweens over numbered targets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    entries: Vec<Entry>,
    previous: Option<(f64, f64)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// A timeline with one tween on target 0.
    pub fn single(tween: Tween) -> Self {
        let mut timeline = Timeline::new();
        timeline.add(0, tween, Position::At(0.0));
        timeline
    }

    fn resolve(&self, position: Position) -> f64 {
        let (prev_start, prev_end) = self.previous.unwrap_or((0.0, 0.0));
        match position {
            Position::At(t) => t.max(0.0),
            Position::WithPrevious => prev_start,
            Position::AfterPrevious(offset) => (prev_end + offset).max(0.0),
        }
    }

    pub fn add(&mut self, target: usize, tween: Tween, position: Position) -> &mut Self {
        self.stagger([target], tween, 0.0, position)
    }

    /// Adds `tween` once per target, each starting `each` seconds after
    /// the one before.
    pub fn stagger<I>(&mut self, targets: I, tween: Tween, each: f64, position: Position) -> &mut Self
    where
        I: IntoIterator<Item = usize>,
    {
        let start = self.resolve(position);
        let mut end = start;
        let mut any = false;
        for (i, target) in targets.into_iter().enumerate() {
            let entry_start = start + each * i as f64;
            end = end.max(entry_start + tween.end());
            self.entries.push(Entry {
                target,
                start: entry_start,
                tween,
            });
            any = true;
        }
        if any {
            self.previous = Some((start, end));
        }
        self
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn duration(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.start + e.tween.end())
            .fold(0.0, f64::max)
    }

    /// Style of every target at `time`, in order of first appearance.
    pub fn sample(&self, time: f64) -> Vec<(usize, StyleState)> {
        let mut out: Vec<(usize, StyleState)> = Vec::new();
        for entry in &self.entries {
            let slot = out.iter().position(|(t, _)| *t == entry.target);
            let started = time >= entry.start;
            match (slot, started) {
                (None, _) => out.push((entry.target, entry.tween.sample(time - entry.start))),
                (Some(i), true) => out[i].1 = entry.tween.sample(time - entry.start),
                (Some(_), false) => {}
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade() -> Tween {
        Tween::new(StyleState::hidden().y(50.0), StyleState::REST, 0.8)
    }

    #[test]
    fn tween_respects_delay() {
        let tween = fade().delay(0.5);
        assert_eq!(tween.progress(0.4), 0.0);
        assert_eq!(tween.progress(1.4), 1.0);
        assert!((tween.end() - 1.3).abs() < 1e-9);
        assert_eq!(tween.sample(10.0), StyleState::REST);
    }

    #[test]
    fn zero_duration_jumps() {
        let tween = Tween::new(StyleState::hidden(), StyleState::REST, 0.0);
        assert_eq!(tween.sample(0.0), StyleState::hidden());
        assert_eq!(tween.sample(0.01), StyleState::REST);
    }

    #[test]
    fn parses_positions() {
        assert_eq!("<".parse::<Position>(), Ok(Position::WithPrevious));
        assert_eq!("-=0.5".parse::<Position>(), Ok(Position::AfterPrevious(-0.5)));
        assert_eq!("+=1".parse::<Position>(), Ok(Position::AfterPrevious(1.0)));
        assert_eq!("0.4".parse::<Position>(), Ok(Position::At(0.4)));
        assert!("soon".parse::<Position>().is_err());
    }

    #[test]
    fn places_entries_like_a_gsap_timeline() {
        // header, two counters alongside it, cards overlapping the tail
        let mut tl = Timeline::new();
        tl.add(0, fade(), Position::default())
            .add(1, Tween::new(StyleState::REST, StyleState::REST, 2.0), Position::WithPrevious)
            .add(2, Tween::new(StyleState::REST, StyleState::REST, 2.0), Position::WithPrevious)
            .stagger(3..6, fade(), 0.1, "-=0.5".parse().unwrap());

        let starts: Vec<f64> = tl.entries().iter().map(|e| e.start).collect();
        assert_eq!(starts[0], 0.0);
        assert_eq!(starts[1], 0.0);
        assert_eq!(starts[2], 0.0);
        assert!((starts[3] - 1.5).abs() < 1e-9);
        assert!((starts[5] - 1.7).abs() < 1e-9);
        assert!((tl.duration() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn unstarted_targets_render_their_from_state() {
        let mut tl = Timeline::new();
        tl.stagger(0..3, fade(), 0.5, Position::At(0.0));

        let at_start = tl.sample(0.0);
        assert_eq!(at_start.len(), 3);
        assert!(at_start.iter().all(|(_, s)| s.opacity == 0.0));

        let done = tl.sample(tl.duration());
        assert!(done.iter().all(|(_, s)| *s == StyleState::REST));
    }

    #[test]
    fn later_entries_override_once_started() {
        let mut tl = Timeline::new();
        tl.add(0, fade(), Position::At(0.0)).add(
            0,
            Tween::new(StyleState::REST, StyleState::REST.scale(1.1), 0.5),
            Position::At(2.0),
        );
        assert_eq!(tl.sample(1.0)[0].1, StyleState::REST);
        assert_eq!(tl.sample(3.0)[0].1.scale, 1.1);
    }
}
