use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::counter::CounterTween;
use super::dom::{apply_style, bounds_of, clear_style, query_all, set_property, viewport_height};
use super::easing::Ease;
use super::follow::{Magnetic, Tilt};
use super::frame::FrameLoop;
use super::playhead::Playhead;
use super::presets::Preset;
use super::scene::{Cue, Scene};
use super::style::StyleState;
use super::trigger::{Bounds, ScrollTrigger, ScrubRange, TogglePolicy, TriggerAction, TriggerPoint};
use super::tween::{Position, Timeline, Tween};

/// Something the scroll/frame driver can run against the DOM.
trait Stage: 'static {
    fn trigger(&self) -> Option<Element>;
    fn needs_trigger(&self) -> bool;
    fn on_mount(&mut self) -> bool;
    fn on_scroll(&mut self, bounds: &Bounds, viewport_height: f64) -> bool;
    fn advance(&mut self, dt: f64) -> bool;
    fn render(&self);
    fn reset(&self);
}

/// A scene and the elements its timeline targets, by index.
pub struct Staged {
    scene: Scene,
    targets: Vec<HtmlElement>,
    trigger: Option<Element>,
}

impl Staged {
    pub fn new(scene: Scene, targets: Vec<HtmlElement>) -> Self {
        Staged {
            scene,
            targets,
            trigger: None,
        }
    }

    pub fn triggered_by(mut self, trigger: impl Into<Element>) -> Self {
        self.trigger = Some(trigger.into());
        self
    }
}

/// Collects elements and their tweens into one timeline, numbering
/// targets in the order they are added.
#[derive(Default)]
pub struct SceneBuilder {
    timeline: Timeline,
    targets: Vec<HtmlElement>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one element; a missing element is skipped.
    pub fn add(mut self, element: Option<HtmlElement>, tween: Tween, position: Position) -> Self {
        if let Some(element) = element {
            self.timeline.add(self.targets.len(), tween, position);
            self.targets.push(element);
        }
        self
    }

    pub fn stagger(mut self, elements: Vec<HtmlElement>, tween: Tween, each: f64, position: Position) -> Self {
        let first = self.targets.len();
        self.timeline
            .stagger(first..first + elements.len(), tween, each, position);
        self.targets.extend(elements);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn build(self, cue: Cue) -> Staged {
        Staged::new(Scene::new(self.timeline, cue), self.targets)
    }
}

impl Stage for Staged {
    fn trigger(&self) -> Option<Element> {
        self.trigger.clone()
    }

    fn needs_trigger(&self) -> bool {
        self.scene.cue().needs_trigger()
    }

    fn on_mount(&mut self) -> bool {
        self.scene.on_mount()
    }

    fn on_scroll(&mut self, bounds: &Bounds, viewport_height: f64) -> bool {
        self.scene.on_scroll(bounds, viewport_height)
    }

    fn advance(&mut self, dt: f64) -> bool {
        self.scene.advance(dt)
    }

    fn render(&self) {
        for (index, style) in self.scene.frame() {
            if let Some(element) = self.targets.get(index) {
                apply_style(element, &style);
            }
        }
    }

    fn reset(&self) {
        for element in &self.targets {
            clear_style(element);
        }
    }
}

struct CounterStage {
    counter: CounterTween,
    trigger: ScrollTrigger,
    node: HtmlElement,
    elapsed: f64,
    playing: bool,
}

impl Stage for CounterStage {
    fn trigger(&self) -> Option<Element> {
        Some(Element::from(self.node.clone()))
    }

    fn needs_trigger(&self) -> bool {
        true
    }

    fn on_mount(&mut self) -> bool {
        false
    }

    fn on_scroll(&mut self, bounds: &Bounds, viewport_height: f64) -> bool {
        if let Some(TriggerAction::Play) = self.trigger.update(bounds, viewport_height) {
            self.playing = true;
        }
        self.playing && !self.counter.is_done(self.elapsed)
    }

    fn advance(&mut self, dt: f64) -> bool {
        self.elapsed += dt;
        !self.counter.is_done(self.elapsed)
    }

    fn render(&self) {
        self.node
            .set_text_content(Some(&self.counter.text_at(self.elapsed)));
    }

    fn reset(&self) {}
}

/// Draws an SVG stroke in as its trigger scrolls through `range`.
///
/// The path should carry `pathLength="1"` so the dash offset runs from
/// 1 (hidden) to 0 (fully drawn).
pub struct PathDraw {
    path: Element,
    trigger: Element,
    range: ScrubRange,
    lag: f64,
    playhead: Playhead,
}

impl PathDraw {
    pub fn new(path: Element, trigger: Element, range: ScrubRange, lag: f64) -> Self {
        PathDraw {
            path,
            trigger,
            range,
            lag,
            playhead: Playhead::new(1.0),
        }
    }
}

impl Stage for PathDraw {
    fn trigger(&self) -> Option<Element> {
        Some(self.trigger.clone())
    }

    fn needs_trigger(&self) -> bool {
        true
    }

    fn on_mount(&mut self) -> bool {
        false
    }

    fn on_scroll(&mut self, bounds: &Bounds, viewport_height: f64) -> bool {
        let progress = self.range.progress(bounds, viewport_height);
        self.playhead.scrub(progress, self.lag);
        self.playhead.is_moving()
    }

    fn advance(&mut self, dt: f64) -> bool {
        self.playhead.advance(dt)
    }

    fn render(&self) {
        let _ = self.path.set_attribute("stroke-dasharray", "1");
        let offset = format!("{:.4}", 1.0 - self.playhead.progress());
        let _ = self.path.set_attribute("stroke-dashoffset", &offset);
    }

    fn reset(&self) {
        let _ = self.path.remove_attribute("stroke-dashoffset");
    }
}

/// Keeps a stage wired to the window until dropped.
struct Runner {
    frames: FrameLoop,
    scroll: Option<Closure<dyn FnMut()>>,
    reset: Box<dyn Fn()>,
}

fn drive<S: Stage>(stage: &Rc<RefCell<S>>, frames: &FrameLoop) {
    let stage = stage.clone();
    frames.start(move |dt| {
        let mut stage = stage.borrow_mut();
        let moving = stage.advance(dt);
        stage.render();
        moving
    });
}

fn run<S: Stage>(stage: S) -> Option<Runner> {
    // A scroll cue without a trigger element is skipped.
    if stage.needs_trigger() && stage.trigger().is_none() {
        return None;
    }
    stage.render();

    let stage = Rc::new(RefCell::new(stage));
    let frames = FrameLoop::default();
    if stage.borrow_mut().on_mount() {
        drive(&stage, &frames);
    }

    let has_trigger = stage.borrow().trigger().is_some();
    let scroll = match (has_trigger, web_sys::window()) {
        (true, Some(window)) => {
            let scroll_callback = {
                let stage = stage.clone();
                let frames = frames.clone();
                Closure::wrap(Box::new(move || {
                    let moving = {
                        let mut stage = stage.borrow_mut();
                        let Some(trigger) = stage.trigger() else {
                            return;
                        };
                        let moving = stage.on_scroll(&bounds_of(&trigger), viewport_height());
                        if !moving {
                            stage.render();
                        }
                        moving
                    };
                    if moving {
                        drive(&stage, &frames);
                    }
                }) as Box<dyn FnMut()>)
            };
            let _ = window
                .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            // Initial check
            let _ = scroll_callback
                .as_ref()
                .unchecked_ref::<web_sys::js_sys::Function>()
                .call0(&JsValue::NULL);
            Some(scroll_callback)
        }
        _ => None,
    };

    let reset = {
        let stage = stage.clone();
        Box::new(move || stage.borrow().reset())
    };
    Some(Runner { frames, scroll, reset })
}

impl Drop for Runner {
    fn drop(&mut self) {
        self.frames.stop();
        if let (Some(scroll_callback), Some(window)) = (self.scroll.take(), web_sys::window()) {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                scroll_callback.as_ref().unchecked_ref(),
            );
        }
        (self.reset)();
    }
}

/// Builds scenes from the container's subtree whenever `deps` change,
/// and tears them down on change or unmount.
#[hook]
pub fn use_scenes<D, F>(container: NodeRef, deps: D, build: F)
where
    D: PartialEq + 'static,
    F: FnOnce(&Element) -> Vec<Staged> + 'static,
{
    use_effect_with_deps(
        move |_| {
            let runners: Vec<Runner> = container
                .cast::<Element>()
                .map(|root| build(&root).into_iter().filter_map(run).collect())
                .unwrap_or_default();
            move || drop(runners)
        },
        deps,
    );
}

/// Runs the [`PathDraw`] that `build` finds under the container.
#[hook]
pub fn use_path_draw<D, F>(container: NodeRef, deps: D, build: F)
where
    D: PartialEq + 'static,
    F: FnOnce(&Element) -> Option<PathDraw> + 'static,
{
    use_effect_with_deps(
        move |_| {
            let runner = container
                .cast::<Element>()
                .and_then(|root| build(&root))
                .and_then(run);
            move || drop(runner)
        },
        deps,
    );
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub start: &'static str,
    pub policy: TogglePolicy,
}

impl Default for RevealOptions {
    fn default() -> Self {
        RevealOptions {
            start: "top 80%",
            policy: TogglePolicy::Once,
        }
    }
}

/// One scene per `[data-animate]` descendant, each triggered by itself.
/// The preset comes from `data-animate`; `data-delay` adds to a 0.1s
/// per-element cascade.
pub fn data_animate_scenes(root: &Element, options: RevealOptions) -> Vec<Staged> {
    query_all(root, "[data-animate]")
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            let preset = Preset::from_name(&element.get_attribute("data-animate").unwrap_or_default());
            let delay = element
                .get_attribute("data-delay")
                .and_then(|d| d.parse::<f64>().ok())
                .unwrap_or(0.0)
                + index as f64 * 0.1;
            let trigger = ScrollTrigger::new(TriggerPoint::parse_or_default(options.start), options.policy);
            let scene = Scene::new(Timeline::single(preset.tween().delay(delay)), Cue::Scroll(trigger));
            Staged::new(scene, vec![element.clone()]).triggered_by(element)
        })
        .collect()
}

#[hook]
pub fn use_scroll_animation<D>(container: NodeRef, options: RevealOptions, deps: D)
where
    D: PartialEq + 'static,
{
    use_scenes(container, deps, move |root| data_animate_scenes(root, options));
}

/// Staggers every `[data-stagger]` descendant in once the container
/// scrolls into view.
#[hook]
pub fn use_stagger_animation<D>(container: NodeRef, each: f64, deps: D)
where
    D: PartialEq + 'static,
{
    use_scenes(container, deps, move |root| {
        let items = query_all(root, "[data-stagger]");
        if items.is_empty() {
            return Vec::new();
        }
        let tween = Tween::new(StyleState::hidden().y(40.0), StyleState::REST, 0.6);
        let mut timeline = Timeline::new();
        timeline.stagger(0..items.len(), tween, each, Position::At(0.0));
        let scene = Scene::new(timeline, Cue::Scroll(ScrollTrigger::once("top 80%")));
        vec![Staged::new(scene, items).triggered_by(root.clone())]
    });
}

/// Renders `text` as one span per character for [`use_text_reveal`].
pub fn split_text(text: &str) -> Html {
    super::text::split_chars(text)
        .into_iter()
        .map(|c| html! { <span class="split-char">{c}</span> })
        .collect()
}

/// Reveals the `.split-char` spans under `node` one after another.
#[hook]
pub fn use_text_reveal(node: NodeRef) {
    use_scenes(node, (), |root| {
        let chars = query_all(root, ".split-char");
        let tween = Tween::new(StyleState::hidden().y(40.0), StyleState::REST, 0.5);
        let mut timeline = Timeline::new();
        timeline.stagger(0..chars.len(), tween, 0.02, Position::At(0.0));
        let scene = Scene::new(timeline, Cue::Scroll(ScrollTrigger::once("top 85%")));
        vec![Staged::new(scene, chars).triggered_by(root.clone())]
    });
}

/// Drifts the element upward by `speed` viewport heights as it crosses
/// the screen.
#[hook]
pub fn use_parallax(node: NodeRef, speed: f64) {
    use_scenes(node, (), move |root| {
        let Ok(element) = root.clone().dyn_into::<HtmlElement>() else {
            return Vec::new();
        };
        let drift = Tween::new(StyleState::REST, StyleState::REST.y(-viewport_height() * speed), 1.0)
            .ease(Ease::Linear);
        let range = ScrubRange::new("top bottom", "bottom top");
        let scene = Scene::new(Timeline::single(drift), Cue::Scrub { range, lag: 0.0 });
        vec![Staged::new(scene, vec![element]).triggered_by(root.clone())]
    });
}

/// Counts the node's text up to `counter.target` the first time it
/// scrolls into view.
#[hook]
pub fn use_counter(node: NodeRef, counter: CounterTween, start: &'static str) {
    use_effect_with_deps(
        move |_| {
            let runner = node.cast::<HtmlElement>().and_then(|node| {
                run(CounterStage {
                    counter,
                    trigger: ScrollTrigger::once(start),
                    node,
                    elapsed: 0.0,
                    playing: false,
                })
            });
            move || drop(runner)
        },
        (),
    );
}

fn pointer(e: &MouseEvent) -> (f64, f64) {
    (e.client_x() as f64, e.client_y() as f64)
}

fn drive_magnet(magnet: Rc<RefCell<Magnetic>>, frames: &FrameLoop, element: HtmlElement) {
    frames.start(move |dt| {
        let mut magnet = magnet.borrow_mut();
        let moving = magnet.advance(dt);
        let (x, y) = magnet.offset();
        set_property(&element, "translate", &format!("{:.2}px {:.2}px", x, y));
        moving
    });
}

/// Pulls the element toward the pointer, springing back when it leaves.
///
/// Writes the standalone `translate` property so it composes with
/// scenes animating `transform` on the same element.
#[hook]
pub fn use_magnetic(node: NodeRef, strength: f64) {
    let magnet = use_mut_ref(|| Magnetic::new(strength));
    let frames = (*use_state(FrameLoop::default)).clone();

    {
        let magnet = magnet.clone();
        let frames = frames.clone();
        let target = node.clone();
        use_event(node.clone(), "mousemove", move |e: MouseEvent| {
            let Some(element) = target.cast::<HtmlElement>() else {
                return;
            };
            magnet.borrow_mut().pointer_move(pointer(&e), &bounds_of(&element));
            drive_magnet(magnet.clone(), &frames, element);
        });
    }
    {
        let magnet = magnet.clone();
        let frames = frames.clone();
        let target = node.clone();
        use_event(node, "mouseleave", move |_: MouseEvent| {
            let Some(element) = target.cast::<HtmlElement>() else {
                return;
            };
            magnet.borrow_mut().pointer_leave();
            drive_magnet(magnet.clone(), &frames, element);
        });
    }
    use_effect_with_deps(move |_| move || frames.stop(), ());
}

fn drive_tilt(tilt: Rc<RefCell<Tilt>>, frames: &FrameLoop, element: HtmlElement) {
    frames.start(move |dt| {
        let mut tilt = tilt.borrow_mut();
        let moving = tilt.advance(dt);
        let (rx, ry) = tilt.rotation();
        let style = StyleState::REST.rotate_x(rx).rotate_y(ry).scale(tilt.scale());
        set_property(&element, "transform", &style.transform());
        moving
    });
}

/// Tilts the element toward the pointer by up to `max_tilt` degrees.
#[hook]
pub fn use_tilt(node: NodeRef, max_tilt: f64, lift: f64) {
    let tilt = use_mut_ref(|| Tilt::new(max_tilt).lift(lift));
    let frames = (*use_state(FrameLoop::default)).clone();

    {
        let tilt = tilt.clone();
        let frames = frames.clone();
        let target = node.clone();
        use_event(node.clone(), "mousemove", move |e: MouseEvent| {
            let Some(element) = target.cast::<HtmlElement>() else {
                return;
            };
            tilt.borrow_mut().pointer_move(pointer(&e), &bounds_of(&element));
            drive_tilt(tilt.clone(), &frames, element);
        });
    }
    {
        let tilt = tilt.clone();
        let frames = frames.clone();
        let target = node.clone();
        use_event(node, "mouseleave", move |_: MouseEvent| {
            let Some(element) = target.cast::<HtmlElement>() else {
                return;
            };
            tilt.borrow_mut().pointer_leave();
            drive_tilt(tilt.clone(), &frames, element);
        });
    }
    use_effect_with_deps(move |_| move || frames.stop(), ());
}
