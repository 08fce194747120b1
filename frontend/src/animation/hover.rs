use super::ease::{Ease, EaseDirection};
use super::properties::PropertySet;
use super::step::AnimationStep;
use super::timeline::{compose, Advance, Animatable, Timeline};

#[derive(Debug, Clone, PartialEq)]
pub struct HoverConfig {
    pub duration: f64,
    pub ease: Ease,
    /// Rest values for properties whose resting state is not the default
    /// (background colours, mostly).
    pub rest: PropertySet,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            duration: 0.3,
            ease: Ease::Power(2, EaseDirection::Out),
            rest: PropertySet::new(),
        }
    }
}

impl HoverConfig {
    /// Short press feedback, as used for tap scaling on buttons.
    pub fn press() -> Self {
        Self { duration: 0.1, ..Self::default() }
    }

    pub fn with_rest(mut self, rest: PropertySet) -> Self {
        self.rest = rest;
        self
    }
}

/// A paused single-step timeline toggled by pointer state. Enter plays it
/// forward, leave plays it back from wherever it is.
pub struct HoverInteraction<T> {
    timeline: Timeline<T>,
    disposed: bool,
}

impl<T> HoverInteraction<T>
where
    T: Animatable + PartialEq,
{
    pub fn attach(element: T, to: PropertySet, config: &HoverConfig) -> Self {
        let from = to.properties().fold(PropertySet::new(), |from, property| {
            let rest = config.rest.get(property).unwrap_or_else(|| property.rest_value());
            from.with(property, rest)
        });
        let step = AnimationStep::nodes(vec![element])
            .from(from)
            .to(to)
            .duration(config.duration)
            .ease(config.ease);
        let resolver = |_: &str| Vec::<T>::new();

        Self {
            timeline: compose(vec![step], &resolver),
            disposed: false,
        }
    }

    pub fn pointer_enter(&mut self) {
        if self.disposed {
            return;
        }
        self.timeline.play();
    }

    pub fn pointer_leave(&mut self) {
        if self.disposed {
            return;
        }
        self.timeline.reverse();
    }

    /// Returns whether more frames are needed.
    pub fn advance(&mut self, dt: f64) -> bool {
        matches!(self.timeline.advance(dt), Advance::Running)
    }

    /// Stops the interaction and puts the element back at rest.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.timeline.seek(0.0);
    }
}
