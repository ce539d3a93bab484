use std::str::FromStr;

/// A box in viewport coordinates, as `getBoundingClientRect` reports it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Bounds { left, top, width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    fn edge(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Center => self.top + self.height / 2.0,
            Edge::Bottom => self.top + self.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
        }
    }

    fn parse(word: &str) -> Option<Edge> {
        match word {
            "top" => Some(Edge::Top),
            "center" => Some(Edge::Center),
            "bottom" => Some(Edge::Bottom),
            _ => None,
        }
    }
}

/// `"top 80%"`: the element's top edge meets the line 80% down the
/// viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPoint {
    pub element: Edge,
    pub viewport: f64,
}

impl TriggerPoint {
    pub const fn new(element: Edge, viewport: f64) -> Self {
        TriggerPoint { element, viewport }
    }

    /// Pixels of scrolling left before this point is reached; zero or
    /// negative once it has been passed.
    pub fn distance(&self, bounds: &Bounds, viewport_height: f64) -> f64 {
        bounds.edge(self.element) - self.viewport * viewport_height
    }

    /// Parses the GSAP grammar, falling back to `top 80%`.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|e| {
            log::warn!("{}, using \"top 80%\"", e);
            DEFAULT_START
        })
    }
}

impl FromStr for TriggerPoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let (Some(element), Some(viewport), None) = (words.next(), words.next(), words.next()) else {
            return Err(format!("trigger position {:?} needs two words", s));
        };
        let element = Edge::parse(element)
            .ok_or_else(|| format!("unknown element edge {:?} in {:?}", element, s))?;
        let viewport = match Edge::parse(viewport) {
            Some(edge) => edge.fraction(),
            None => viewport
                .strip_suffix('%')
                .and_then(|p| p.parse::<f64>().ok())
                .map(|p| p / 100.0)
                .ok_or_else(|| format!("unknown viewport position {:?} in {:?}", viewport, s))?,
        };
        Ok(TriggerPoint { element, viewport })
    }
}

pub const DEFAULT_START: TriggerPoint = TriggerPoint::new(Edge::Top, 0.8);
pub const DEFAULT_END: TriggerPoint = TriggerPoint::new(Edge::Bottom, 0.2);

/// What happens when the trigger region is entered again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TogglePolicy {
    /// Play on first entry; never again.
    #[default]
    Once,
    /// Play on enter, reverse on leave, in either scroll direction.
    Reversible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerAction {
    Play,
    Reverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TriggerState {
    Outside,
    Inside,
    Spent,
}

/// Turns successive scroll positions into play/reverse decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrigger {
    pub start: TriggerPoint,
    pub end: TriggerPoint,
    pub policy: TogglePolicy,
    state: TriggerState,
    warned: bool,
}

impl ScrollTrigger {
    pub fn new(start: TriggerPoint, policy: TogglePolicy) -> Self {
        let trigger = ScrollTrigger {
            start,
            end: DEFAULT_END,
            policy,
            state: TriggerState::Outside,
            warned: false,
        };
        trigger.check_region();
        trigger
    }

    pub fn once(start: &str) -> Self {
        Self::new(TriggerPoint::parse_or_default(start), TogglePolicy::Once)
    }

    pub fn reversible(start: &str) -> Self {
        Self::new(TriggerPoint::parse_or_default(start), TogglePolicy::Reversible)
    }

    pub fn end(mut self, end: TriggerPoint) -> Self {
        self.end = end;
        self.check_region();
        self
    }

    /// True when the end is reached no later than the start for every
    /// box height, so a reversible trigger could never be inside.
    pub fn never_opens(&self) -> bool {
        self.end.element.fraction() <= self.start.element.fraction()
            && self.end.viewport >= self.start.viewport
    }

    /// Scroll pixels between reaching the start and reaching the end for
    /// a box of this size.
    pub fn region_length(&self, bounds: &Bounds, viewport_height: f64) -> f64 {
        self.end.distance(bounds, viewport_height) - self.start.distance(bounds, viewport_height)
    }

    fn check_region(&self) {
        if self.policy == TogglePolicy::Reversible && self.never_opens() {
            log::warn!(
                "scroll trigger end {:?} is not after its start {:?}; it will never play",
                self.end,
                self.start
            );
        }
    }

    pub fn is_spent(&self) -> bool {
        self.state == TriggerState::Spent
    }

    /// Feeds the trigger element's current box. Returns the action to
    /// take, if the region boundary was crossed.
    pub fn update(&mut self, bounds: &Bounds, viewport_height: f64) -> Option<TriggerAction> {
        let started = self.start.distance(bounds, viewport_height) <= 0.0;
        let ended = self.end.distance(bounds, viewport_height) <= 0.0;

        match (self.policy, self.state) {
            (_, TriggerState::Spent) => None,
            (TogglePolicy::Once, _) => {
                if started {
                    self.state = TriggerState::Spent;
                    Some(TriggerAction::Play)
                } else {
                    None
                }
            }
            (TogglePolicy::Reversible, state) => {
                if !self.warned && self.region_length(bounds, viewport_height) <= 0.0 {
                    self.warned = true;
                    log::warn!(
                        "scroll trigger region is empty for a {}px tall element; it will never play",
                        bounds.height
                    );
                }
                let inside = started && !ended;
                match (state, inside) {
                    (TriggerState::Outside, true) => {
                        self.state = TriggerState::Inside;
                        Some(TriggerAction::Play)
                    }
                    (TriggerState::Inside, false) => {
                        self.state = TriggerState::Outside;
                        Some(TriggerAction::Reverse)
                    }
                    _ => None,
                }
            }
        }
    }
}

/// Where a scrubbed range ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrubEnd {
    Point(TriggerPoint),
    /// `end: "+=1200"`: a fixed scroll distance past the start.
    Pixels(f64),
}

/// Maps scroll position between a start and an end onto `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubRange {
    pub start: TriggerPoint,
    pub end: ScrubEnd,
}

impl ScrubRange {
    pub fn new(start: &str, end: &str) -> Self {
        ScrubRange {
            start: TriggerPoint::parse_or_default(start),
            end: ScrubEnd::Point(end.parse().unwrap_or(TriggerPoint::new(Edge::Bottom, 0.0))),
        }
    }

    pub fn span(start: &str, pixels: f64) -> Self {
        ScrubRange {
            start: TriggerPoint::parse_or_default(start),
            end: ScrubEnd::Pixels(pixels),
        }
    }

    pub fn progress(&self, bounds: &Bounds, viewport_height: f64) -> f64 {
        let a = self.start.distance(bounds, viewport_height);
        let b = match self.end {
            ScrubEnd::Point(point) => point.distance(bounds, viewport_height),
            ScrubEnd::Pixels(pixels) => a + pixels,
        };
        ratio(a, b)
    }
}

fn ratio(a: f64, b: f64) -> f64 {
    if (b - a).abs() < f64::EPSILON {
        return if a <= 0.0 { 1.0 } else { 0.0 };
    }
    (-a / (b - a)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    fn at(top: f64) -> Bounds {
        Bounds::new(0.0, top, 400.0, 300.0)
    }

    #[test]
    fn parses_trigger_positions() {
        assert_eq!("top 80%".parse(), Ok(TriggerPoint::new(Edge::Top, 0.8)));
        assert_eq!("bottom top".parse(), Ok(TriggerPoint::new(Edge::Bottom, 0.0)));
        assert_eq!("center center".parse(), Ok(TriggerPoint::new(Edge::Center, 0.5)));
        assert!("top".parse::<TriggerPoint>().is_err());
        assert!("left 80%".parse::<TriggerPoint>().is_err());
        assert!("top eighty".parse::<TriggerPoint>().is_err());
        assert_eq!(TriggerPoint::parse_or_default("nonsense"), DEFAULT_START);
    }

    #[test]
    fn once_plays_a_single_time() {
        let mut trigger = ScrollTrigger::once("top 80%");
        assert_eq!(trigger.update(&at(900.0), VH), None);
        assert_eq!(trigger.update(&at(790.0), VH), Some(TriggerAction::Play));
        assert!(trigger.is_spent());
        // scroll back above, then re-enter
        assert_eq!(trigger.update(&at(1200.0), VH), None);
        assert_eq!(trigger.update(&at(500.0), VH), None);
        assert_eq!(trigger.update(&at(-800.0), VH), None);
    }

    #[test]
    fn once_fires_when_loaded_past_the_start() {
        let mut trigger = ScrollTrigger::once("top 80%");
        assert_eq!(trigger.update(&at(-2000.0), VH), Some(TriggerAction::Play));
    }

    #[test]
    fn reversible_toggles_on_every_crossing() {
        let mut trigger = ScrollTrigger::reversible("top 80%");
        let mut actions = Vec::new();
        // enter, leave back, enter, leave forward past the end, enter back
        for top in [900.0, 700.0, 900.0, 700.0, -200.0, 100.0] {
            if let Some(a) = trigger.update(&at(top), VH) {
                actions.push(a);
            }
        }
        use TriggerAction::*;
        assert_eq!(actions, vec![Play, Reverse, Play, Reverse, Play]);
    }

    #[test]
    fn reversible_ignores_jumps_over_the_region() {
        let mut trigger = ScrollTrigger::reversible("top 80%");
        assert_eq!(trigger.update(&at(-5000.0), VH), None);
    }

    fn actions_over_scroll(trigger: &mut ScrollTrigger, height: f64, vh: f64) -> Vec<TriggerAction> {
        let mut actions = Vec::new();
        // down the page and back up again, in 5px steps
        let down = (0..=800).map(|i| 2000.0 - i as f64 * 5.0);
        let up = (0..=800).map(|i| -2000.0 + i as f64 * 5.0);
        for top in down.chain(up) {
            if let Some(a) = trigger.update(&Bounds::new(0.0, top, 1.0, height), vh) {
                actions.push(a);
            }
        }
        actions
    }

    #[test]
    fn a_one_pixel_box_never_opens_the_default_region() {
        let mut trigger = ScrollTrigger::reversible("top top");
        assert!(!trigger.never_opens());
        assert!(trigger.region_length(&Bounds::new(0.0, 0.0, 1.0, 1.0), 900.0) <= 0.0);
        assert_eq!(actions_over_scroll(&mut trigger, 1.0, 900.0), vec![]);
    }

    #[test]
    fn a_box_with_a_region_plays_and_reverses_both_ways() {
        let mut trigger = ScrollTrigger::reversible("top top").end(TriggerPoint::new(Edge::Bottom, 0.0));
        assert!(trigger.region_length(&Bounds::new(0.0, 0.0, 1.0, 1440.0), 900.0) > 0.0);
        use TriggerAction::*;
        assert_eq!(
            actions_over_scroll(&mut trigger, 1440.0, 900.0),
            vec![Play, Reverse, Play, Reverse]
        );
    }

    #[test]
    fn same_edge_with_a_lower_end_never_opens() {
        let trigger = ScrollTrigger::reversible("top 50%").end(TriggerPoint::new(Edge::Top, 0.6));
        assert!(trigger.never_opens());
        let trigger = ScrollTrigger::reversible("top 80%");
        assert!(!trigger.never_opens());
    }

    #[test]
    fn scrub_progress_is_clamped_and_linear() {
        // from the top meeting the viewport bottom to the bottom meeting the top
        let range = ScrubRange::new("top bottom", "bottom top");
        assert_eq!(range.progress(&at(1500.0), VH), 0.0);
        assert_eq!(range.progress(&at(1000.0), VH), 0.0);
        assert_eq!(range.progress(&at(-300.0), VH), 1.0);
        let mid = range.progress(&at(350.0), VH);
        assert!((mid - 0.5).abs() < 1e-9);
    }

    #[test]
    fn scrub_span_covers_a_fixed_distance() {
        let span = ScrubRange::span("top top", 2000.0);
        assert_eq!(span.progress(&at(0.0), VH), 0.0);
        assert!((span.progress(&at(-1000.0), VH) - 0.5).abs() < 1e-9);
        assert_eq!(span.progress(&at(-4000.0), VH), 1.0);
    }
}
