use std::rc::Rc;

use yew::Reducible;

pub const STICKY_THRESHOLD: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderState {
    pub sticky: bool,
    pub menu_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderAction {
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
}

impl HeaderState {
    pub fn apply(self, action: HeaderAction) -> Self {
        match action {
            HeaderAction::Scrolled(y) => HeaderState {
                sticky: y >= STICKY_THRESHOLD,
                ..self
            },
            HeaderAction::ToggleMenu => HeaderState {
                menu_open: !self.menu_open,
                ..self
            },
            HeaderAction::CloseMenu => HeaderState {
                menu_open: false,
                ..self
            },
        }
    }

    /// On the home page the header waits until the hero is scrolled past.
    pub fn visible(&self, on_home: bool) -> bool {
        !on_home || self.sticky
    }
}

impl Reducible for HeaderState {
    type Action = HeaderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoState {
    #[default]
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoAction {
    /// The element fired `canplay`.
    CanPlay,
    /// `readyState` observed at mount.
    Observed(u16),
}

/// `HAVE_FUTURE_DATA`: enough is buffered to start playing.
const HAVE_FUTURE_DATA: u16 = 3;

impl VideoState {
    pub fn apply(self, action: VideoAction) -> Self {
        match action {
            VideoAction::CanPlay => VideoState::Ready,
            VideoAction::Observed(ready_state) if ready_state >= HAVE_FUTURE_DATA => VideoState::Ready,
            VideoAction::Observed(_) => self,
        }
    }

    pub fn is_ready(&self) -> bool {
        *self == VideoState::Ready
    }
}

impl Reducible for VideoState {
    type Action = VideoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

/// A single, collapsible accordion: at most one entry open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    pub open: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionAction {
    Toggle(usize),
    Collapse,
}

impl Accordion {
    pub fn apply(self, action: AccordionAction) -> Self {
        match action {
            AccordionAction::Toggle(index) if self.open == Some(index) => Accordion { open: None },
            AccordionAction::Toggle(index) => Accordion { open: Some(index) },
            AccordionAction::Collapse => Accordion { open: None },
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

impl Reducible for Accordion {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_sticks_past_threshold() {
        let state = HeaderState::default();
        assert!(!state.apply(HeaderAction::Scrolled(79.9)).sticky);
        assert!(state.apply(HeaderAction::Scrolled(80.0)).sticky);
        let stuck = state.apply(HeaderAction::Scrolled(500.0));
        assert!(!stuck.apply(HeaderAction::Scrolled(0.0)).sticky);
    }

    #[test]
    fn header_hidden_on_home_until_sticky() {
        let top = HeaderState::default();
        assert!(!top.visible(true));
        assert!(top.visible(false));
        assert!(top.apply(HeaderAction::Scrolled(120.0)).visible(true));
    }

    #[test]
    fn menu_toggles_and_closes() {
        let state = HeaderState::default().apply(HeaderAction::ToggleMenu);
        assert!(state.menu_open);
        assert!(!state.apply(HeaderAction::ToggleMenu).menu_open);
        assert!(!state.apply(HeaderAction::CloseMenu).menu_open);
        assert!(!HeaderState::default().apply(HeaderAction::CloseMenu).menu_open);
        // scrolling leaves the menu alone
        assert!(state.apply(HeaderAction::Scrolled(300.0)).menu_open);
    }

    #[test]
    fn unchanged_header_keeps_the_same_rc() {
        let state = Rc::new(HeaderState::default());
        let next = state.clone().reduce(HeaderAction::Scrolled(10.0));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn video_becomes_ready() {
        let loading = VideoState::default();
        assert_eq!(loading.apply(VideoAction::Observed(1)), VideoState::Loading);
        assert_eq!(loading.apply(VideoAction::Observed(3)), VideoState::Ready);
        assert!(loading.apply(VideoAction::CanPlay).is_ready());
        assert!(VideoState::Ready.apply(VideoAction::Observed(0)).is_ready());
    }

    #[test]
    fn faq_entries_start_collapsed_and_open_one_at_a_time() {
        let faq = Accordion::default();
        assert!(!faq.is_open(0));

        let faq = faq.apply(AccordionAction::Toggle(0));
        assert!(faq.is_open(0));

        let faq = faq.apply(AccordionAction::Toggle(2));
        assert!(!faq.is_open(0));
        assert!(faq.is_open(2));

        let faq = faq.apply(AccordionAction::Toggle(2));
        assert_eq!(faq.open, None);
        assert_eq!(faq.apply(AccordionAction::Toggle(1)).apply(AccordionAction::Collapse).open, None);
    }
}
