use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

const DEFAULT_OVERSHOOT: f64 = 1.70158;
const DEFAULT_AMPLITUDE: f64 = 1.0;
const DEFAULT_PERIOD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaseDirection {
    In,
    Out,
    InOut,
}

/// Interpolation curves, named the way the section timelines name them
/// (`"power3.out"`, `"back.out(1.7)"`, `"elastic.out(1, 0.5)"`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    Linear,
    /// `power1` is quadratic, `power4` quintic.
    Power(u8, EaseDirection),
    Sine(EaseDirection),
    Back(EaseDirection, f64),
    ElasticOut { amplitude: f64, period: f64 },
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power(1, EaseDirection::Out)
    }
}

impl Ease {
    pub const POWER2_OUT: Ease = Ease::Power(2, EaseDirection::Out);
    pub const POWER3_OUT: Ease = Ease::Power(3, EaseDirection::Out);
    pub const POWER3_IN: Ease = Ease::Power(3, EaseDirection::In);
    pub const BACK_OUT: Ease = Ease::Back(EaseDirection::Out, 1.7);

    /// Maps linear progress in `[0, 1]` to eased progress. The end points are
    /// always exact.
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Ease::Linear => t,
            Ease::Power(power, direction) => {
                let exponent = i32::from(power) + 1;
                match direction {
                    EaseDirection::In => t.powi(exponent),
                    EaseDirection::Out => 1.0 - (1.0 - t).powi(exponent),
                    EaseDirection::InOut => {
                        if t < 0.5 {
                            (2.0 * t).powi(exponent) / 2.0
                        } else {
                            1.0 - (2.0 * (1.0 - t)).powi(exponent) / 2.0
                        }
                    }
                }
            }
            Ease::Sine(direction) => match direction {
                EaseDirection::In => 1.0 - (t * FRAC_PI_2).cos(),
                EaseDirection::Out => (t * FRAC_PI_2).sin(),
                EaseDirection::InOut => -((PI * t).cos() - 1.0) / 2.0,
            },
            Ease::Back(direction, overshoot) => match direction {
                EaseDirection::In => t * t * ((overshoot + 1.0) * t - overshoot),
                EaseDirection::Out => {
                    let u = t - 1.0;
                    u * u * ((overshoot + 1.0) * u + overshoot) + 1.0
                }
                EaseDirection::InOut => {
                    let s = overshoot * 1.525;
                    let u = 2.0 * t;
                    if u < 1.0 {
                        u * u * ((s + 1.0) * u - s) / 2.0
                    } else {
                        let u = u - 2.0;
                        (u * u * ((s + 1.0) * u + s) + 2.0) / 2.0
                    }
                }
            },
            Ease::ElasticOut { amplitude, period } => {
                let amplitude = amplitude.max(1.0);
                let shift = period / (2.0 * PI) * (1.0 / amplitude).asin();
                amplitude * 2f64.powf(-10.0 * t) * ((t - shift) * (2.0 * PI) / period).sin() + 1.0
            }
        }
    }

    /// Whether the curve stays inside `[0, 1]` and never turns back.
    pub fn is_monotonic(self) -> bool {
        matches!(self, Ease::Linear | Ease::Power(..) | Ease::Sine(_))
    }
}

fn parse_direction(raw: &str, name: &str) -> Result<EaseDirection, Error> {
    match raw {
        "" | "out" => Ok(EaseDirection::Out),
        "in" => Ok(EaseDirection::In),
        "inOut" => Ok(EaseDirection::InOut),
        _ => Err(Error::UnknownEase(name.to_string())),
    }
}

fn parse_params(raw: &str, name: &str) -> Result<Vec<f64>, Error> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(|param| {
            param
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::InvalidEaseParams(name.to_string()))
        })
        .collect()
}

impl FromStr for Ease {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let (head, params) = match name.find('(') {
            Some(open) => {
                let close = name
                    .strip_suffix(')')
                    .ok_or_else(|| Error::InvalidEaseParams(name.to_string()))?;
                (&name[..open], parse_params(&close[open + 1..], name)?)
            }
            None => (name, Vec::new()),
        };
        let (family, direction) = head.split_once('.').unwrap_or((head, ""));

        match family {
            "none" | "linear" | "power0" => Ok(Ease::Linear),
            "easeIn" => Ok(Ease::Power(1, EaseDirection::In)),
            "easeOut" => Ok(Ease::Power(1, EaseDirection::Out)),
            "easeInOut" => Ok(Ease::Power(1, EaseDirection::InOut)),
            "power1" | "power2" | "power3" | "power4" => {
                let power = family[5..]
                    .parse::<u8>()
                    .map_err(|_| Error::UnknownEase(name.to_string()))?;
                Ok(Ease::Power(power, parse_direction(direction, name)?))
            }
            "sine" => Ok(Ease::Sine(parse_direction(direction, name)?)),
            "back" => {
                let overshoot = params.first().copied().unwrap_or(DEFAULT_OVERSHOOT);
                Ok(Ease::Back(parse_direction(direction, name)?, overshoot))
            }
            "elastic" => {
                if parse_direction(direction, name)? != EaseDirection::Out {
                    return Err(Error::UnknownEase(name.to_string()));
                }
                Ok(Ease::ElasticOut {
                    amplitude: params.first().copied().unwrap_or(DEFAULT_AMPLITUDE),
                    period: params.get(1).copied().unwrap_or(DEFAULT_PERIOD),
                })
            }
            _ => Err(Error::UnknownEase(name.to_string())),
        }
    }
}

impl TryFrom<String> for Ease {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn direction_name(direction: EaseDirection) -> &'static str {
    match direction {
        EaseDirection::In => "in",
        EaseDirection::Out => "out",
        EaseDirection::InOut => "inOut",
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Ease::Linear => f.write_str("none"),
            Ease::Power(power, direction) => write!(f, "power{power}.{}", direction_name(direction)),
            Ease::Sine(direction) => write!(f, "sine.{}", direction_name(direction)),
            Ease::Back(direction, overshoot) => {
                write!(f, "back.{}({overshoot})", direction_name(direction))
            }
            Ease::ElasticOut { amplitude, period } => {
                write!(f, "elastic.out({amplitude}, {period})")
            }
        }
    }
}

impl From<Ease> for String {
    fn from(ease: Ease) -> Self {
        ease.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[&str] = &[
        "none",
        "power1.inOut",
        "power2.out",
        "power3.out",
        "power3.in",
        "power4.out",
        "sine.inOut",
        "back.out(1.7)",
        "back.out(2)",
        "elastic.out(1, 0.5)",
    ];

    #[test]
    fn end_points_are_exact() {
        for name in ALL {
            let ease: Ease = name.parse().unwrap();
            assert_eq!(ease.apply(0.0), 0.0, "{name}");
            assert_eq!(ease.apply(1.0), 1.0, "{name}");
        }
    }

    #[test]
    fn parses_section_eases() {
        assert_eq!("power3.out".parse::<Ease>().unwrap(), Ease::Power(3, EaseDirection::Out));
        assert_eq!("power2".parse::<Ease>().unwrap(), Ease::Power(2, EaseDirection::Out));
        assert_eq!(
            "back.out(1.7)".parse::<Ease>().unwrap(),
            Ease::Back(EaseDirection::Out, 1.7)
        );
        assert_eq!(
            "elastic.out(1, 0.5)".parse::<Ease>().unwrap(),
            Ease::ElasticOut { amplitude: 1.0, period: 0.5 }
        );
        assert_eq!("easeOut".parse::<Ease>().unwrap(), Ease::Power(1, EaseDirection::Out));
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(matches!("bounce.out".parse::<Ease>(), Err(Error::UnknownEase(_))));
        assert!(matches!("power3.sideways".parse::<Ease>(), Err(Error::UnknownEase(_))));
        assert!(matches!("back.out(x)".parse::<Ease>(), Err(Error::InvalidEaseParams(_))));
        assert!(matches!("back.out(1.7".parse::<Ease>(), Err(Error::InvalidEaseParams(_))));
    }

    #[test]
    fn display_parses_back() {
        for name in ALL {
            let ease: Ease = name.parse().unwrap();
            assert_eq!(ease.to_string().parse::<Ease>().unwrap(), ease);
        }
    }

    #[test]
    fn monotonic_eases_stay_in_range() {
        for name in ["none", "power1.inOut", "power2.out", "power4.out", "sine.inOut"] {
            let ease: Ease = name.parse().unwrap();
            assert!(ease.is_monotonic());
            let mut previous = 0.0;
            for step in 0..=100 {
                let value = ease.apply(f64::from(step) / 100.0);
                assert!((0.0..=1.0).contains(&value), "{name} left range at {step}");
                assert!(value >= previous, "{name} turned back at {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn back_out_overshoots() {
        let ease: Ease = "back.out(1.7)".parse().unwrap();
        assert!(!ease.is_monotonic());
        assert!((1..100).any(|step| ease.apply(f64::from(step) / 100.0) > 1.0));
    }

    #[test]
    fn deserializes_from_json_string() {
        let ease: Ease = serde_json::from_str("\"power4.out\"").unwrap();
        assert_eq!(ease, Ease::Power(4, EaseDirection::Out));
        assert_eq!(serde_json::to_string(&ease).unwrap(), "\"power4.out\"");
    }
}
