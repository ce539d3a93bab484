use std::f64::consts::PI;
use std::str::FromStr;

const BACK_OVERSHOOT: f64 = 1.70158;

/// Easing curves, named after the GSAP eases the site was designed with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    Power2Out,
    Power3Out,
    Power4InOut,
    SineInOut,
    BackOut { overshoot: f64 },
    ElasticOut { amplitude: f64, period: f64 },
}

impl Ease {
    pub const fn back_out(overshoot: f64) -> Self {
        Ease::BackOut { overshoot }
    }

    pub const fn elastic_out(amplitude: f64, period: f64) -> Self {
        Ease::ElasticOut { amplitude, period }
    }

    /// Maps linear progress in `0..=1` onto eased progress. Input outside
    /// the range is clamped; output may overshoot for back and elastic.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Ease::Linear => t,
            // GSAP's powerN is an (N+1)-degree polynomial.
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power4InOut => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
                }
            }
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::BackOut { overshoot } => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
            Ease::ElasticOut { amplitude, period } => {
                let p1 = amplitude.max(1.0);
                let scaled = period / amplitude.min(1.0);
                let shift = scaled / (2.0 * PI) * (1.0 / p1).asin();
                let freq = 2.0 * PI / scaled;
                p1 * 2f64.powf(-10.0 * t) * ((t - shift) * freq).sin() + 1.0
            }
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power3Out
    }
}

/// Reads GSAP ease strings: `"power3.out"`, `"back.out(1.5)"`,
/// `"elastic.out(1, 0.3)"`, `"none"`.
impl FromStr for Ease {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, args) = match s.find('(') {
            Some(open) => {
                let inner = s[open + 1..].trim_end_matches(')');
                let args = inner
                    .split(',')
                    .map(|a| a.trim().parse::<f64>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| format!("bad ease argument in {:?}: {}", s, e))?;
                (&s[..open], args)
            }
            None => (s, Vec::new()),
        };

        match name {
            "none" | "linear" => Ok(Ease::Linear),
            "power2.out" => Ok(Ease::Power2Out),
            "power3.out" => Ok(Ease::Power3Out),
            "power4.inOut" => Ok(Ease::Power4InOut),
            "sine.inOut" => Ok(Ease::SineInOut),
            "back.out" => Ok(Ease::back_out(args.first().copied().unwrap_or(BACK_OVERSHOOT))),
            "elastic.out" => Ok(Ease::elastic_out(
                args.first().copied().unwrap_or(1.0),
                args.get(1).copied().unwrap_or(0.3),
            )),
            other => Err(format!("unknown ease {:?}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> Vec<Ease> {
        vec![
            Ease::Linear,
            Ease::Power2Out,
            Ease::Power3Out,
            Ease::Power4InOut,
            Ease::SineInOut,
            Ease::back_out(1.5),
            Ease::elastic_out(1.0, 0.3),
            Ease::elastic_out(1.0, 0.5),
        ]
    }

    #[test]
    fn endpoints_are_fixed() {
        for ease in all() {
            assert_eq!(ease.apply(0.0), 0.0, "{:?}", ease);
            assert_eq!(ease.apply(1.0), 1.0, "{:?}", ease);
            assert_eq!(ease.apply(-3.0), 0.0, "{:?}", ease);
            assert_eq!(ease.apply(7.0), 1.0, "{:?}", ease);
        }
    }

    #[test]
    fn out_curves_lead_linear() {
        for ease in [Ease::Power2Out, Ease::Power3Out] {
            assert!(ease.apply(0.5) > 0.5);
        }
        assert!((Ease::SineInOut.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((Ease::Power4InOut.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn back_and_elastic_overshoot() {
        let back = Ease::back_out(1.5);
        assert!((0..100).any(|i| back.apply(i as f64 / 100.0) > 1.0));

        let elastic = Ease::elastic_out(1.0, 0.3);
        assert!((0..100).any(|i| elastic.apply(i as f64 / 100.0) > 1.0));
        assert!(elastic.apply(0.001).abs() < 0.1);
    }

    #[test]
    fn parses_gsap_names() {
        assert_eq!("power3.out".parse::<Ease>(), Ok(Ease::Power3Out));
        assert_eq!("none".parse::<Ease>(), Ok(Ease::Linear));
        assert_eq!("back.out(1.2)".parse::<Ease>(), Ok(Ease::back_out(1.2)));
        assert_eq!(
            "elastic.out(1, 0.5)".parse::<Ease>(),
            Ok(Ease::elastic_out(1.0, 0.5))
        );
        assert_eq!("back.out".parse::<Ease>(), Ok(Ease::back_out(BACK_OVERSHOOT)));
        assert!("bounce.in".parse::<Ease>().is_err());
        assert!("back.out(x)".parse::<Ease>().is_err());
    }
}
