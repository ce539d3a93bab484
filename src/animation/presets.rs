use super::easing::Ease;
use super::style::StyleState;
use super::tween::Tween;

pub const DEFAULT_EASE: Ease = Ease::Power3Out;
pub const DEFAULT_DURATION: f64 = 0.8;

const TRAVEL: f64 = 60.0;

/// Named entry animations used across the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    ScaleUp,
    Reveal,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::FadeUp,
        Preset::FadeDown,
        Preset::FadeLeft,
        Preset::FadeRight,
        Preset::ScaleUp,
        Preset::Reveal,
    ];

    /// Looks a preset up by its `data-animate` name. Unknown names get
    /// [`Preset::FadeUp`].
    pub fn from_name(name: &str) -> Preset {
        match name.trim() {
            "fadeUp" | "fade-up" => Preset::FadeUp,
            "fadeDown" | "fade-down" => Preset::FadeDown,
            "fadeLeft" | "fade-left" => Preset::FadeLeft,
            "fadeRight" | "fade-right" => Preset::FadeRight,
            "scaleUp" | "scale-up" => Preset::ScaleUp,
            "reveal" => Preset::Reveal,
            _ => Preset::FadeUp,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::FadeUp => "fadeUp",
            Preset::FadeDown => "fadeDown",
            Preset::FadeLeft => "fadeLeft",
            Preset::FadeRight => "fadeRight",
            Preset::ScaleUp => "scaleUp",
            Preset::Reveal => "reveal",
        }
    }

    pub fn from_state(self) -> StyleState {
        match self {
            Preset::FadeUp => StyleState::hidden().y(TRAVEL),
            Preset::FadeDown => StyleState::hidden().y(-TRAVEL),
            Preset::FadeLeft => StyleState::hidden().x(-TRAVEL),
            Preset::FadeRight => StyleState::hidden().x(TRAVEL),
            Preset::ScaleUp => StyleState::hidden().scale(0.8),
            Preset::Reveal => StyleState::REST.clip_right(100.0),
        }
    }

    pub fn to_state(self) -> StyleState {
        StyleState::REST
    }

    pub fn duration(self) -> f64 {
        match self {
            Preset::Reveal => 1.0,
            _ => DEFAULT_DURATION,
        }
    }

    pub fn ease(self) -> Ease {
        match self {
            Preset::ScaleUp => Ease::back_out(1.5),
            Preset::Reveal => Ease::Power4InOut,
            _ => DEFAULT_EASE,
        }
    }

    pub fn tween(self) -> Tween {
        Tween::new(self.from_state(), self.to_state(), self.duration()).ease(self.ease())
    }
}

impl Default for Preset {
    fn default() -> Self {
        Preset::FadeUp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_and_unknown_falls_back() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_name(preset.name()), preset);
        }
        assert_eq!(Preset::from_name("fade-left"), Preset::FadeLeft);
        assert_eq!(Preset::from_name("spin"), Preset::FadeUp);
        assert_eq!(Preset::from_name(""), Preset::FadeUp);
    }

    #[test]
    fn every_preset_lands_at_rest() {
        for preset in Preset::ALL {
            let tween = preset.tween();
            assert_eq!(tween.sample(tween.duration), StyleState::REST, "{:?}", preset);
            assert_ne!(tween.sample(0.0), StyleState::REST, "{:?}", preset);
        }
    }

    #[test]
    fn reveal_keeps_opacity_and_clips() {
        let from = Preset::Reveal.from_state();
        assert_eq!(from.opacity, 1.0);
        assert_eq!(from.clip_right, 100.0);
        assert_eq!(Preset::Reveal.duration(), 1.0);
        assert_eq!(Preset::ScaleUp.ease(), Ease::back_out(1.5));
    }
}
