//! Scroll- and pointer-driven animation.
//!
//! Everything except [`dom`], [`frame`] and [`hooks`] is plain data and
//! arithmetic with no browser dependency: presets, easing, tweens and
//! timelines, scroll triggers, the playhead, pointer followers and
//! counters. The three browser modules bind that core to elements and
//! to the page's scroll and pointer events.

pub mod counter;
pub mod dom;
pub mod easing;
pub mod follow;
pub mod frame;
pub mod hooks;
pub mod playhead;
pub mod presets;
pub mod scene;
pub mod style;
pub mod text;
pub mod trigger;
pub mod tween;

pub use counter::CounterTween;
pub use easing::Ease;
pub use scene::{Cue, Scene};
pub use style::StyleState;
pub use trigger::{Edge, ScrollTrigger, ScrubRange, TriggerPoint};
pub use tween::{Position, Timeline, Tween};
