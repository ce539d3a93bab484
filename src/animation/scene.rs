use super::playhead::Playhead;
use super::style::StyleState;
use super::trigger::{Bounds, ScrollTrigger, ScrubRange, TriggerAction};
use super::tween::Timeline;

/// What sets a scene's timeline in motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cue {
    /// Plays once, as soon as the scene is mounted.
    Mount,
    /// Plays and reverses as a scroll trigger decides.
    Scroll(ScrollTrigger),
    /// Follows scroll progress through a range, smoothed by `lag` seconds.
    Scrub { range: ScrubRange, lag: f64 },
    /// Repeats from mount onward.
    Loop { yoyo: bool },
}

impl Cue {
    pub fn needs_trigger(&self) -> bool {
        matches!(self, Cue::Scroll(_) | Cue::Scrub { .. })
    }
}

/// A timeline bound to its cue and playhead.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    timeline: Timeline,
    cue: Cue,
    playhead: Playhead,
}

impl Scene {
    pub fn new(timeline: Timeline, cue: Cue) -> Self {
        let playhead = Playhead::new(timeline.duration());
        Scene { timeline, cue, playhead }
    }

    pub fn cue(&self) -> &Cue {
        &self.cue
    }

    pub fn playhead(&self) -> &Playhead {
        &self.playhead
    }

    /// Called once after mount. Returns whether frames are needed.
    pub fn on_mount(&mut self) -> bool {
        match self.cue {
            Cue::Mount => self.playhead.play(),
            Cue::Loop { yoyo } => self.playhead.repeat(yoyo),
            Cue::Scroll(_) | Cue::Scrub { .. } => {}
        }
        self.playhead.is_moving()
    }

    /// Feeds the trigger element's box after a scroll. Returns whether
    /// frames are needed.
    pub fn on_scroll(&mut self, bounds: &Bounds, viewport_height: f64) -> bool {
        match &mut self.cue {
            Cue::Scroll(trigger) => match trigger.update(bounds, viewport_height) {
                Some(TriggerAction::Play) => self.playhead.play(),
                Some(TriggerAction::Reverse) => self.playhead.reverse(),
                None => {}
            },
            Cue::Scrub { range, lag } => {
                let progress = range.progress(bounds, viewport_height);
                self.playhead.scrub(progress, *lag);
            }
            Cue::Mount | Cue::Loop { .. } => {}
        }
        self.playhead.is_moving()
    }

    pub fn advance(&mut self, dt: f64) -> bool {
        self.playhead.advance(dt)
    }

    /// Styles for every target at the current playhead time.
    pub fn frame(&self) -> Vec<(usize, StyleState)> {
        self.timeline.sample(self.playhead.time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::presets::Preset;
    use crate::animation::tween::{Position, Tween};

    const VH: f64 = 900.0;

    fn at(top: f64) -> Bounds {
        Bounds::new(0.0, top, 600.0, 400.0)
    }

    fn settle(scene: &mut Scene) {
        while scene.advance(1.0 / 60.0) {}
    }

    fn cards() -> Timeline {
        let mut tl = Timeline::new();
        tl.add(0, Preset::FadeUp.tween(), Position::default())
            .stagger(1..4, Preset::ScaleUp.tween(), 0.1, "-=0.5".parse().unwrap());
        tl
    }

    #[test]
    fn mount_cue_plays_to_rest() {
        let mut scene = Scene::new(cards(), Cue::Mount);
        assert!(scene.frame().iter().all(|(_, s)| s.opacity == 0.0));
        assert!(scene.on_mount());
        settle(&mut scene);
        assert!(scene.frame().iter().all(|(_, s)| *s == StyleState::REST));
    }

    #[test]
    fn once_scene_never_restarts() {
        let mut scene = Scene::new(cards(), Cue::Scroll(ScrollTrigger::once("top 80%")));
        assert!(!scene.on_mount());
        assert!(scene.on_scroll(&at(500.0), VH));
        settle(&mut scene);
        let end = scene.frame();

        // leave above and come back
        assert!(!scene.on_scroll(&at(2000.0), VH));
        assert!(!scene.on_scroll(&at(500.0), VH));
        assert_eq!(scene.frame(), end);
        assert_eq!(scene.playhead().time(), scene.playhead().duration());
    }

    #[test]
    fn reversible_scene_is_idempotent_over_cycles() {
        let mut scene = Scene::new(cards(), Cue::Scroll(ScrollTrigger::reversible("top 80%")));
        let initial = scene.frame();

        scene.on_scroll(&at(500.0), VH);
        settle(&mut scene);
        let first_entry = scene.frame();
        assert_ne!(first_entry, initial);

        for _ in 0..3 {
            scene.on_scroll(&at(1200.0), VH);
            settle(&mut scene);
            assert_eq!(scene.frame(), initial);

            scene.on_scroll(&at(500.0), VH);
            settle(&mut scene);
            assert_eq!(scene.frame(), first_entry);
        }
    }

    #[test]
    fn leaving_mid_play_reverses_from_where_it_was() {
        let mut scene = Scene::new(cards(), Cue::Scroll(ScrollTrigger::reversible("top 80%")));
        scene.on_scroll(&at(500.0), VH);
        scene.advance(0.3);
        scene.on_scroll(&at(1200.0), VH);
        scene.advance(0.1);
        assert!((scene.playhead().time() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn scrub_follows_scroll_without_lag() {
        let tween = Tween::new(StyleState::REST, StyleState::REST.y(-450.0), 1.0)
            .ease(crate::animation::easing::Ease::Linear);
        let range = ScrubRange::new("top bottom", "bottom top");
        let mut scene = Scene::new(Timeline::single(tween), Cue::Scrub { range, lag: 0.0 });

        // element top at 900 is the start, bottom at 0 the end (400px tall)
        assert!(!scene.on_scroll(&at(900.0), VH));
        assert_eq!(scene.frame()[0].1.y, 0.0);
        scene.on_scroll(&at(250.0), VH);
        assert!((scene.frame()[0].1.y + 225.0).abs() < 1e-6);
        scene.on_scroll(&at(-400.0), VH);
        assert_eq!(scene.frame()[0].1.y, -450.0);
    }

    #[test]
    fn loop_cue_keeps_running() {
        let pulse = Tween::new(StyleState::REST, StyleState::REST.scale(1.02), 1.5);
        let mut scene = Scene::new(Timeline::single(pulse), Cue::Loop { yoyo: true });
        assert!(scene.on_mount());
        for _ in 0..500 {
            assert!(scene.advance(1.0 / 60.0));
        }
        let s = scene.frame()[0].1.scale;
        assert!((1.0..=1.02).contains(&s));
    }
}
