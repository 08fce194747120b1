use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ease::Ease;
use super::properties::PropertySet;
use crate::error::Error;

/// Where a step starts, relative to the step declared before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub enum Offset {
    /// Right after the previous step ends.
    #[default]
    Sequential,
    /// Previous step's end plus this many seconds; negative values overlap.
    Relative(f64),
    /// Seconds from the start of the timeline.
    Absolute(f64),
    /// Together with the previous step (`"<"`).
    WithPrevious,
}

impl FromStr for Offset {
    type Err = Error;

    /// Accepts `""`, `"<"`, `"-=0.5"`, `"+=0.2"`, `"-0.5s"`, `"1.2"` and `"1.2s"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let invalid = || Error::InvalidOffset(s.to_string());
        let seconds = |digits: &str| {
            digits
                .trim()
                .trim_end_matches('s')
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(invalid)
        };

        if raw.is_empty() {
            return Ok(Offset::Sequential);
        }
        if raw == "<" {
            return Ok(Offset::WithPrevious);
        }
        if let Some(rest) = raw.strip_prefix("-=") {
            return Ok(Offset::Relative(-seconds(rest)?));
        }
        if let Some(rest) = raw.strip_prefix("+=") {
            return Ok(Offset::Relative(seconds(rest)?));
        }
        if raw.starts_with('-') || raw.starts_with('+') {
            return Ok(Offset::Relative(seconds(raw)?));
        }
        Ok(Offset::Absolute(seconds(raw)?))
    }
}

impl TryFrom<String> for Offset {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Per-unit delay across the targets of one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stagger {
    /// Each unit starts this many seconds after the one before it.
    Each(f64),
    /// The whole batch is spread over this many seconds.
    Amount(f64),
}

impl Stagger {
    pub fn delay(self, index: usize, count: usize) -> f64 {
        match self {
            Stagger::Each(each) => each * index as f64,
            Stagger::Amount(_) if count <= 1 => 0.0,
            Stagger::Amount(amount) => amount * index as f64 / (count - 1) as f64,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Targets<T> {
    /// CSS selector, resolved inside the section root.
    Selector(String),
    Nodes(Vec<T>),
}

/// One declarative entry of a section timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationStep<T> {
    pub targets: Targets<T>,
    pub from: PropertySet,
    pub to: PropertySet,
    pub duration: f64,
    pub ease: Ease,
    pub offset: Offset,
    pub stagger: Option<Stagger>,
}

impl<T> AnimationStep<T> {
    pub fn new(targets: Targets<T>) -> Self {
        Self {
            targets,
            from: PropertySet::new(),
            to: PropertySet::new(),
            duration: 0.5,
            ease: Ease::default(),
            offset: Offset::Sequential,
            stagger: None,
        }
    }

    pub fn selector(selector: impl Into<String>) -> Self {
        Self::new(Targets::Selector(selector.into()))
    }

    pub fn nodes(nodes: Vec<T>) -> Self {
        Self::new(Targets::Nodes(nodes))
    }

    /// A single optional node; a missing node makes the step a no-op.
    pub fn node(node: Option<T>) -> Self {
        Self::nodes(node.into_iter().collect())
    }

    pub fn from(mut self, from: PropertySet) -> Self {
        self.from = from;
        self
    }

    pub fn to(mut self, to: PropertySet) -> Self {
        self.to = to;
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    /// Shorthand for `Offset::Relative(-seconds)`, the `"-=seconds"` form.
    pub fn overlap(self, seconds: f64) -> Self {
        self.offset(Offset::Relative(-seconds))
    }

    pub fn stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = Some(stagger);
        self
    }
}
