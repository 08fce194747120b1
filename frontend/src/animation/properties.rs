use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Transform shared by every animated element. Each component reads its own
/// custom property, so independent timelines touching different components of
/// the same element (a scroll reveal on `y`, a hover on `scale`) compose
/// instead of overwriting each other.
pub const TRANSFORM_TEMPLATE: &str = "translateY(var(--wp-y-percent, 0%)) \
translate3d(var(--wp-x, 0px), var(--wp-y, 0px), 0) \
scale(var(--wp-scale, 1)) \
rotate(var(--wp-rotation, 0deg)) \
rotateX(var(--wp-rotation-x, 0deg)) \
skewY(var(--wp-skew-y, 0deg))";

pub const SHADOW_TEMPLATE: &str = "0 var(--wp-shadow-y, 0px) var(--wp-shadow-blur, 0px) \
rgba(0, 0, 0, var(--wp-shadow-alpha, 0))";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    Opacity,
    X,
    Y,
    YPercent,
    Scale,
    Rotation,
    RotationX,
    SkewY,
    ShadowY,
    ShadowBlur,
    ShadowAlpha,
    BackgroundColor,
}

impl Property {
    /// Value an element has when nothing animates it.
    pub fn rest_value(self) -> Value {
        match self {
            Property::Opacity | Property::Scale => Value::Number(1.0),
            Property::BackgroundColor => Value::Color(Rgba::WHITE),
            _ => Value::Number(0.0),
        }
    }

    fn custom_property(self) -> Option<(&'static str, &'static str)> {
        let entry = match self {
            Property::X => ("--wp-x", "px"),
            Property::Y => ("--wp-y", "px"),
            Property::YPercent => ("--wp-y-percent", "%"),
            Property::Scale => ("--wp-scale", ""),
            Property::Rotation => ("--wp-rotation", "deg"),
            Property::RotationX => ("--wp-rotation-x", "deg"),
            Property::SkewY => ("--wp-skew-y", "deg"),
            Property::ShadowY => ("--wp-shadow-y", "px"),
            Property::ShadowBlur => ("--wp-shadow-blur", "px"),
            Property::ShadowAlpha => ("--wp-shadow-alpha", ""),
            Property::Opacity | Property::BackgroundColor => return None,
        };
        Some(entry)
    }

    fn is_transform(self) -> bool {
        matches!(
            self,
            Property::X
                | Property::Y
                | Property::YPercent
                | Property::Scale
                | Property::Rotation
                | Property::RotationX
                | Property::SkewY
        )
    }

    fn is_shadow(self) -> bool {
        matches!(self, Property::ShadowY | Property::ShadowBlur | Property::ShadowAlpha)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba { r: 255.0, g: 255.0, b: 255.0, a: 1.0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
        Rgba { r: r as f64, g: g as f64, b: b as f64, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f64) -> Rgba {
        Rgba { a, ..self }
    }

    fn lerp(self, other: Rgba, t: f64) -> Rgba {
        Rgba {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
            a: lerp(self.a, other.a, t),
        }
    }
}

impl FromStr for Rgba {
    type Err = Error;

    /// Accepts `#rgb` and `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return Err(invalid()),
        };
        let channel = |range: std::ops::Range<usize>| {
            expanded
                .get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .map(f64::from)
                .ok_or_else(invalid)
        };
        Ok(Rgba {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
            a: 1.0,
        })
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.r.round(),
            self.g.round(),
            self.b.round(),
            self.a
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Color(Rgba),
}

impl Value {
    pub fn lerp(self, to: Value, t: f64) -> Value {
        match (self, to) {
            (Value::Number(a), Value::Number(b)) => Value::Number(lerp(a, b, t)),
            (Value::Color(a), Value::Color(b)) => Value::Color(a.lerp(b, t)),
            // Mismatched kinds cannot blend; hold the start until the end.
            _ if t < 1.0 => self,
            _ => to,
        }
    }

    #[cfg(test)]
    pub fn as_number(self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n),
            Value::Color(_) => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<Rgba> for Value {
    fn from(value: Rgba) -> Self {
        Value::Color(value)
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Snapshot of animatable property values for one element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertySet(BTreeMap<Property, Value>);

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: Property, value: impl Into<Value>) -> Self {
        self.0.insert(property, value.into());
        self
    }

    pub fn opacity(self, value: f64) -> Self {
        self.with(Property::Opacity, value)
    }

    pub fn x(self, value: f64) -> Self {
        self.with(Property::X, value)
    }

    pub fn y(self, value: f64) -> Self {
        self.with(Property::Y, value)
    }

    pub fn scale(self, value: f64) -> Self {
        self.with(Property::Scale, value)
    }

    pub fn rotation(self, degrees: f64) -> Self {
        self.with(Property::Rotation, degrees)
    }

    pub fn rotation_x(self, degrees: f64) -> Self {
        self.with(Property::RotationX, degrees)
    }

    pub fn skew_y(self, degrees: f64) -> Self {
        self.with(Property::SkewY, degrees)
    }

    pub fn y_percent(self, value: f64) -> Self {
        self.with(Property::YPercent, value)
    }

    pub fn background(self, color: Rgba) -> Self {
        self.with(Property::BackgroundColor, color)
    }

    /// Drop shadow as used by the button hovers: `0 {y}px {blur}px rgba(0,0,0,{alpha})`.
    pub fn shadow(self, y: f64, blur: f64, alpha: f64) -> Self {
        self.with(Property::ShadowY, y)
            .with(Property::ShadowBlur, blur)
            .with(Property::ShadowAlpha, alpha)
    }

    pub fn get(&self, property: Property) -> Option<Value> {
        self.0.get(&property).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, Value)> + '_ {
        self.0.iter().map(|(property, value)| (*property, *value))
    }

    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        self.0.keys().copied()
    }

    /// Overwrites the properties present in `other`, keeping the rest.
    #[cfg(test)]
    pub fn merge(&mut self, other: &PropertySet) {
        for (property, value) in other.iter() {
            self.0.insert(property, value);
        }
    }

    /// Inline style declarations for these values. Transform and shadow
    /// components are written as custom properties plus the shared template.
    pub fn style_declarations(&self) -> Vec<(&'static str, String)> {
        let mut declarations = Vec::new();
        let mut transform = false;
        let mut shadow = false;

        for (property, value) in self.iter() {
            transform |= property.is_transform();
            shadow |= property.is_shadow();
            match (property, value) {
                (Property::Opacity, Value::Number(n)) => declarations.push(("opacity", n.to_string())),
                (Property::BackgroundColor, Value::Color(color)) => {
                    declarations.push(("background-color", color.to_string()))
                }
                (_, Value::Number(n)) => {
                    if let Some((name, unit)) = property.custom_property() {
                        declarations.push((name, format!("{n}{unit}")));
                    }
                }
                (_, Value::Color(_)) => {}
            }
        }

        if transform {
            declarations.push(("transform", TRANSFORM_TEMPLATE.to_string()));
        }
        if shadow {
            declarations.push(("box-shadow", SHADOW_TEMPLATE.to_string()));
        }
        declarations
    }

    #[cfg(test)]
    pub fn to_css(&self) -> String {
        self.style_declarations()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
