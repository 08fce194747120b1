use log::debug;

use super::ease::Ease;
use super::properties::{Property, PropertySet, Value};
use super::step::{AnimationStep, Offset, Targets};

/// Something a timeline can write property values to.
pub trait Animatable {
    fn apply(&self, values: &PropertySet);
}

/// Resolves a step's selector to the elements it animates.
pub trait TargetResolver<T> {
    fn resolve(&self, selector: &str) -> Vec<T>;
}

impl<T, F> TargetResolver<T> for F
where
    F: Fn(&str) -> Vec<T>,
{
    fn resolve(&self, selector: &str) -> Vec<T> {
        self(selector)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Paused,
    Playing(Direction),
}

/// Result of advancing a timeline by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Paused, nothing changed.
    Idle,
    Running,
    /// Reached the end (forward) or the start (reverse) and paused there.
    Completed(Direction),
}

#[derive(Debug, Clone)]
struct Tween {
    target: usize,
    property: Property,
    from: Value,
    to: Value,
    start: f64,
    duration: f64,
    ease: Ease,
    order: usize,
}

impl Tween {
    fn end(&self) -> f64 {
        self.start + self.duration
    }

    fn value_at(&self, time: f64) -> Value {
        if time <= self.start {
            return self.from;
        }
        if time >= self.end() {
            return self.to;
        }
        let progress = (time - self.start) / self.duration;
        self.from.lerp(self.to, self.ease.apply(progress))
    }

    /// Later start wins; on a tie the later declaration does.
    fn supersedes(&self, other: &Tween) -> bool {
        (self.start, self.order) > (other.start, other.order)
    }
}

/// The tween that decides a property's value at `time`: the latest one that
/// has started, or the earliest one if none has.
fn deciding<'a>(tweens: impl IntoIterator<Item = &'a Tween>, time: f64) -> Option<&'a Tween> {
    tweens.into_iter().fold(None, |current, tween| match current {
        None => Some(tween),
        Some(current) => {
            let replace = match (current.start <= time, tween.start <= time) {
                (true, true) => tween.supersedes(current),
                (false, true) => true,
                (true, false) => false,
                (false, false) => current.supersedes(tween),
            };
            Some(if replace { tween } else { current })
        }
    })
}

/// Ordered, possibly overlapping set of tweens over a fixed list of targets.
///
/// Time only moves through [`Timeline::advance`], [`Timeline::seek`] and
/// [`Timeline::complete`]; every change of time writes the resulting values to
/// all targets.
pub struct Timeline<T> {
    targets: Vec<T>,
    tweens: Vec<Tween>,
    duration: f64,
    time: f64,
    /// Set once the playhead has run off the end, so tweens ending exactly at
    /// the last instant (zero-length ones included) show their end values.
    at_end: bool,
    playback: Playback,
}

impl<T> Timeline<T>
where
    T: Animatable + PartialEq,
{
    fn empty() -> Self {
        Self {
            targets: Vec::new(),
            tweens: Vec::new(),
            duration: 0.0,
            time: 0.0,
            at_end: false,
            playback: Playback::Paused,
        }
    }

    fn intern(&mut self, target: T) -> usize {
        match self.targets.iter().position(|known| *known == target) {
            Some(index) => index,
            None => {
                self.targets.push(target);
                self.targets.len() - 1
            }
        }
    }

    #[cfg(test)]
    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Playhead position in `0.0..=1.0`; zero-length timelines count as done.
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.time / self.duration
    }

    #[cfg(test)]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[cfg(test)]
    pub fn is_playing(&self) -> bool {
        matches!(self.playback, Playback::Playing(_))
    }

    /// Plays forward from the current time. Calling it while already playing
    /// forward changes nothing.
    pub fn play(&mut self) {
        self.playback = Playback::Playing(Direction::Forward);
    }

    /// Plays backwards from the current time, so a reversal mid-play eases back
    /// from wherever the playhead is.
    pub fn reverse(&mut self) {
        self.playback = Playback::Playing(Direction::Reverse);
    }

    pub fn pause(&mut self) {
        self.playback = Playback::Paused;
    }

    /// Jumps to `time` (clamped), pauses and renders. `seek(0.0)` restores the
    /// declared start state.
    pub fn seek(&mut self, time: f64) {
        self.time = time.clamp(0.0, self.duration);
        self.at_end = self.duration > 0.0 && self.time >= self.duration;
        self.playback = Playback::Paused;
        self.render();
    }

    /// Jumps to the end state and pauses, also for timelines of zero length.
    pub fn complete(&mut self) {
        self.time = self.duration;
        self.at_end = true;
        self.playback = Playback::Paused;
        self.render();
    }

    pub fn advance(&mut self, dt: f64) -> Advance {
        let direction = match self.playback {
            Playback::Paused => return Advance::Idle,
            Playback::Playing(direction) => direction,
        };

        let dt = dt.max(0.0);
        let finished = match direction {
            Direction::Forward => {
                self.time = (self.time + dt).min(self.duration);
                self.time >= self.duration
            }
            Direction::Reverse => {
                self.time = (self.time - dt).max(0.0);
                self.time <= 0.0
            }
        };
        self.at_end = finished && direction == Direction::Forward;
        self.render();

        if finished {
            self.playback = Playback::Paused;
            Advance::Completed(direction)
        } else {
            Advance::Running
        }
    }

    fn sample_time(&self) -> f64 {
        if self.at_end {
            f64::INFINITY
        } else {
            self.time
        }
    }

    /// Current values of every property animated on the target at `index`.
    pub fn values_for(&self, index: usize) -> PropertySet {
        let time = self.sample_time();
        let mut properties: Vec<Property> = self
            .tweens
            .iter()
            .filter(|tween| tween.target == index)
            .map(|tween| tween.property)
            .collect();
        properties.sort();
        properties.dedup();

        properties.into_iter().fold(PropertySet::new(), |set, property| {
            let tweens = self
                .tweens
                .iter()
                .filter(|tween| tween.target == index && tween.property == property);
            match deciding(tweens, time) {
                Some(tween) => set.with(property, tween.value_at(time)),
                None => set,
            }
        })
    }

    fn render(&self) {
        for (index, target) in self.targets.iter().enumerate() {
            target.apply(&self.values_for(index));
        }
    }
}

/// Builds a paused timeline from `steps` and immediately writes every
/// target's start values, so callers must compose before the first paint.
///
/// A property a step only names in `to` starts from wherever earlier steps
/// leave it on that target at the step's start, or from its rest value if no
/// earlier step animates it. Declared `from` values always apply.
///
/// Steps whose targets resolve to nothing are skipped without moving the
/// anchor for the step after them.
pub fn compose<T, R>(steps: Vec<AnimationStep<T>>, resolver: &R) -> Timeline<T>
where
    T: Animatable + PartialEq,
    R: TargetResolver<T> + ?Sized,
{
    let mut timeline = Timeline::empty();
    let mut previous_start = 0.0_f64;
    let mut previous_end = 0.0_f64;
    let mut order = 0;

    for step in steps {
        let nodes = match step.targets {
            Targets::Selector(selector) => {
                let nodes = resolver.resolve(&selector);
                if nodes.is_empty() {
                    debug!("timeline step skipped, `{selector}` matched nothing");
                }
                nodes
            }
            Targets::Nodes(nodes) => nodes,
        };
        if nodes.is_empty() {
            continue;
        }

        let anchor = match step.offset {
            Offset::Sequential => previous_end,
            Offset::Relative(delta) => previous_end + delta,
            Offset::Absolute(at) => at,
            Offset::WithPrevious => previous_start,
        }
        .max(0.0);

        let duration = step.duration.max(0.0);
        let properties: Vec<Property> = {
            let mut all: Vec<Property> = step.from.properties().chain(step.to.properties()).collect();
            all.sort();
            all.dedup();
            all
        };

        let count = nodes.len();
        let mut step_end = anchor;
        for (index, node) in nodes.into_iter().enumerate() {
            let target = timeline.intern(node);
            let start = anchor + step.stagger.map_or(0.0, |stagger| stagger.delay(index, count));

            for &property in &properties {
                let from = match step.from.get(property) {
                    Some(from) => from,
                    None => {
                        let earlier = timeline
                            .tweens
                            .iter()
                            .filter(|tween| tween.target == target && tween.property == property);
                        deciding(earlier, start)
                            .map_or_else(|| property.rest_value(), |tween| tween.value_at(start))
                    }
                };
                let to = step.to.get(property).unwrap_or(from);
                timeline.tweens.push(Tween {
                    target,
                    property,
                    from,
                    to,
                    start,
                    duration,
                    ease: step.ease,
                    order,
                });
                order += 1;
            }
            step_end = step_end.max(start + duration);
        }

        previous_start = anchor;
        previous_end = step_end;
        timeline.duration = timeline.duration.max(step_end);
    }

    timeline.render();
    timeline
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::animation::step::Stagger;

    /// Records whatever a timeline writes to it.
    #[derive(Clone, Debug)]
    pub(crate) struct Recorder {
        pub name: &'static str,
        pub state: Rc<RefCell<PropertySet>>,
    }

    impl Recorder {
        pub fn new(name: &'static str) -> Self {
            Self { name, state: Rc::new(RefCell::new(PropertySet::new())) }
        }

        pub fn get(&self, property: Property) -> Option<f64> {
            self.state.borrow().get(property).and_then(Value::as_number)
        }
    }

    impl PartialEq for Recorder {
        fn eq(&self, other: &Self) -> bool {
            self.name == other.name
        }
    }

    impl Animatable for Recorder {
        fn apply(&self, values: &PropertySet) {
            self.state.borrow_mut().merge(values);
        }
    }

    fn no_selectors(_: &str) -> Vec<Recorder> {
        Vec::new()
    }

    fn run_to_end(timeline: &mut Timeline<Recorder>) {
        timeline.play();
        for _ in 0..10_000 {
            if let Advance::Completed(_) = timeline.advance(1.0 / 60.0) {
                return;
            }
        }
        panic!("timeline never completed");
    }

    /// The hero reveal: overlapping steps, staggered words.
    fn hero_steps(hero: &Recorder, content: &Recorder, words: &[Recorder]) -> Vec<AnimationStep<Recorder>> {
        vec![
            AnimationStep::nodes(vec![hero.clone()])
                .from(PropertySet::new().opacity(0.0).scale(1.1))
                .to(PropertySet::new().opacity(1.0).scale(1.0))
                .duration(1.2)
                .ease("power3.out".parse().unwrap()),
            AnimationStep::nodes(vec![content.clone()])
                .from(PropertySet::new().opacity(0.0).y(50.0))
                .to(PropertySet::new().opacity(1.0).y(0.0))
                .duration(0.8)
                .overlap(0.8),
            AnimationStep::nodes(words.to_vec())
                .from(PropertySet::new().opacity(0.0).y(50.0).with(Property::RotationX, -90.0))
                .to(PropertySet::new().opacity(1.0).y(0.0).with(Property::RotationX, 0.0))
                .duration(0.8)
                .ease("back.out(1.7)".parse().unwrap())
                .stagger(Stagger::Each(0.1))
                .overlap(0.6),
        ]
    }

    #[test]
    fn compose_applies_from_state_immediately() {
        let hero = Recorder::new("hero");
        let content = Recorder::new("content");
        let words = [Recorder::new("w1"), Recorder::new("w2")];
        let _timeline = compose(hero_steps(&hero, &content, &words), &no_selectors);

        assert_eq!(hero.get(Property::Opacity), Some(0.0));
        assert_eq!(hero.get(Property::Scale), Some(1.1));
        assert_eq!(content.get(Property::Y), Some(50.0));
        assert_eq!(words[1].get(Property::RotationX), Some(-90.0));
    }

    #[test]
    fn completion_reaches_declared_to_state() {
        let hero = Recorder::new("hero");
        let content = Recorder::new("content");
        let words = [Recorder::new("w1"), Recorder::new("w2"), Recorder::new("w3")];
        let mut timeline = compose(hero_steps(&hero, &content, &words), &no_selectors);
        run_to_end(&mut timeline);

        assert_eq!(hero.get(Property::Opacity), Some(1.0));
        assert_eq!(hero.get(Property::Scale), Some(1.0));
        assert_eq!(content.get(Property::Y), Some(0.0));
        for word in &words {
            assert_eq!(word.get(Property::Opacity), Some(1.0));
            assert_eq!(word.get(Property::RotationX), Some(0.0));
        }
        assert_eq!(timeline.progress(), 1.0);
    }

    #[test]
    fn seek_zero_restores_from_state() {
        let hero = Recorder::new("hero");
        let content = Recorder::new("content");
        let words = [Recorder::new("w1")];
        let mut timeline = compose(hero_steps(&hero, &content, &words), &no_selectors);
        run_to_end(&mut timeline);
        timeline.seek(0.0);

        assert_eq!(hero.get(Property::Scale), Some(1.1));
        assert_eq!(content.get(Property::Opacity), Some(0.0));
        assert_eq!(words[0].get(Property::Y), Some(50.0));
        assert!(!timeline.is_playing());
    }

    #[test]
    fn negative_offsets_overlap_previous_step() {
        let hero = Recorder::new("hero");
        let content = Recorder::new("content");
        let words = [Recorder::new("w1"), Recorder::new("w2"), Recorder::new("w3")];
        let timeline = compose(hero_steps(&hero, &content, &words), &no_selectors);

        // hero 0..1.2, content 0.4..1.2, words from 0.6 with 0.1 stagger.
        let last_word_end = 0.6 + 0.2 + 0.8;
        assert!((timeline.duration() - last_word_end).abs() < 1e-9);
    }

    #[test]
    fn start_times_never_go_negative() {
        let a = Recorder::new("a");
        let b = Recorder::new("b");
        let steps = vec![
            AnimationStep::nodes(vec![a.clone()])
                .from(PropertySet::new().opacity(0.0))
                .to(PropertySet::new().opacity(1.0))
                .duration(0.5),
            AnimationStep::nodes(vec![b.clone()])
                .from(PropertySet::new().opacity(0.0))
                .to(PropertySet::new().opacity(1.0))
                .duration(0.5)
                .overlap(3.0),
        ];
        let mut timeline = compose(steps, &no_selectors);
        assert_eq!(timeline.duration(), 0.5);

        timeline.play();
        timeline.advance(0.25);
        assert_eq!(a.get(Property::Opacity), b.get(Property::Opacity));
    }

    #[test]
    fn missing_selector_is_a_no_op() {
        let a = Recorder::new("a");
        let b = Recorder::new("b");
        let steps = vec![
            AnimationStep::nodes(vec![a.clone()])
                .from(PropertySet::new().opacity(0.0))
                .to(PropertySet::new().opacity(1.0))
                .duration(1.0),
            AnimationStep::selector(".mobile-only")
                .from(PropertySet::new().opacity(0.0))
                .to(PropertySet::new().opacity(1.0))
                .duration(5.0),
            AnimationStep::nodes(vec![b.clone()])
                .from(PropertySet::new().y(20.0))
                .to(PropertySet::new().y(0.0))
                .duration(1.0),
        ];
        let timeline = compose(steps, &no_selectors);
        assert_eq!(timeline.duration(), 2.0);
        assert_eq!(timeline.targets().len(), 2);
    }

    #[test]
    fn selectors_go_through_the_resolver() {
        let words = vec![Recorder::new("w1"), Recorder::new("w2")];
        let resolver = {
            let words = words.clone();
            move |selector: &str| if selector == ".word" { words.clone() } else { Vec::new() }
        };
        let steps = vec![AnimationStep::selector(".word")
            .from(PropertySet::new().opacity(0.0))
            .to(PropertySet::new().opacity(1.0))
            .duration(0.6)
            .stagger(Stagger::Amount(0.6))];
        let mut timeline = compose(steps, &resolver);
        assert_eq!(timeline.duration(), 1.2);

        timeline.play();
        timeline.advance(0.6);
        assert_eq!(words[0].get(Property::Opacity), Some(1.0));
        assert_eq!(words[1].get(Property::Opacity), Some(0.0));
    }

    #[test]
    fn with_previous_starts_together() {
        let a = Recorder::new("a");
        let b = Recorder::new("b");
        let steps = vec![
            AnimationStep::nodes(vec![a.clone()]).to(PropertySet::new().x(100.0)).duration(1.0),
            AnimationStep::nodes(vec![b.clone()])
                .to(PropertySet::new().x(100.0))
                .duration(1.0)
                .offset(Offset::WithPrevious),
        ];
        let mut timeline = compose(steps, &no_selectors);
        assert_eq!(timeline.duration(), 1.0);
        timeline.play();
        timeline.advance(0.5);
        assert_eq!(a.get(Property::X), b.get(Property::X));
    }

    #[test]
    fn reverse_mid_play_inverts_from_current_time() {
        let a = Recorder::new("a");
        let steps = vec![AnimationStep::nodes(vec![a.clone()])
            .from(PropertySet::new().opacity(0.0))
            .to(PropertySet::new().opacity(1.0))
            .duration(1.0)
            .ease(Ease::Linear)];
        let mut timeline = compose(steps, &no_selectors);

        timeline.play();
        timeline.advance(0.6);
        let at_reversal = a.get(Property::Opacity).unwrap();
        timeline.reverse();
        timeline.advance(0.1);
        let after = a.get(Property::Opacity).unwrap();

        assert!((at_reversal - 0.6).abs() < 1e-9);
        assert!((after - 0.5).abs() < 1e-9);
        assert_eq!(timeline.advance(1.0), Advance::Completed(Direction::Reverse));
        assert_eq!(a.get(Property::Opacity), Some(0.0));
    }

    #[test]
    fn play_is_idempotent() {
        let a = Recorder::new("a");
        let steps = vec![AnimationStep::nodes(vec![a.clone()])
            .from(PropertySet::new().opacity(0.0))
            .to(PropertySet::new().opacity(1.0))
            .duration(1.0)
            .ease(Ease::Linear)];
        let mut timeline = compose(steps, &no_selectors);
        timeline.play();
        timeline.advance(0.5);
        timeline.play();
        assert_eq!(timeline.time(), 0.5);
        assert_eq!(timeline.advance(0.5), Advance::Completed(Direction::Forward));
        assert_eq!(timeline.advance(0.5), Advance::Idle);
    }

    #[test]
    fn empty_timeline_completes_on_first_frame() {
        let mut timeline = compose(Vec::<AnimationStep<Recorder>>::new(), &no_selectors);
        timeline.play();
        assert_eq!(timeline.advance(0.016), Advance::Completed(Direction::Forward));
    }

    #[test]
    fn later_step_on_same_property_takes_over() {
        let a = Recorder::new("a");
        let steps = vec![
            AnimationStep::nodes(vec![a.clone()])
                .from(PropertySet::new().y(0.0))
                .to(PropertySet::new().y(-10.0))
                .duration(1.0),
            AnimationStep::nodes(vec![a.clone()])
                .from(PropertySet::new().y(-10.0))
                .to(PropertySet::new().y(0.0))
                .duration(1.0),
        ];
        let mut timeline = compose(steps, &no_selectors);
        assert_eq!(timeline.targets().len(), 1);
        assert_eq!(a.get(Property::Y), Some(0.0));

        timeline.play();
        timeline.advance(1.0);
        assert_eq!(a.get(Property::Y), Some(-10.0));
        timeline.advance(1.0);
        assert_eq!(a.get(Property::Y), Some(0.0));
    }

    #[test]
    fn to_only_properties_start_from_rest() {
        let a = Recorder::new("a");
        let steps = vec![AnimationStep::nodes(vec![a.clone()])
            .to(PropertySet::new().scale(1.05))
            .duration(0.3)];
        let mut timeline = compose(steps, &no_selectors);
        assert_eq!(a.get(Property::Scale), Some(1.0));
        timeline.play();
        timeline.advance(1.0);
        assert_eq!(a.get(Property::Scale), Some(1.05));
    }

    #[test]
    fn zero_length_step_at_start_shows_from_until_played() {
        let a = Recorder::new("a");
        let steps = vec![
            AnimationStep::nodes(vec![a.clone()])
                .from(PropertySet::new().opacity(0.0))
                .to(PropertySet::new().opacity(1.0))
                .duration(0.0),
            AnimationStep::nodes(vec![a.clone()])
                .from(PropertySet::new().y(20.0))
                .to(PropertySet::new().y(0.0))
                .duration(1.0),
        ];
        let mut timeline = compose(steps, &no_selectors);
        assert_eq!(a.get(Property::Opacity), Some(0.0));

        timeline.play();
        timeline.advance(0.1);
        assert_eq!(a.get(Property::Opacity), Some(1.0));

        timeline.seek(0.0);
        assert_eq!(a.get(Property::Opacity), Some(0.0));
        assert_eq!(a.get(Property::Y), Some(20.0));

        run_to_end(&mut timeline);
        assert_eq!(a.get(Property::Opacity), Some(1.0));
        assert_eq!(a.get(Property::Y), Some(0.0));
    }

    #[test]
    fn zero_length_timeline_jumps_to_end_when_played() {
        let a = Recorder::new("a");
        let steps = vec![AnimationStep::nodes(vec![a.clone()])
            .from(PropertySet::new().scale(0.0))
            .to(PropertySet::new().scale(1.0))
            .duration(0.0)];
        let mut timeline = compose(steps, &no_selectors);
        assert_eq!(a.get(Property::Scale), Some(0.0));

        timeline.play();
        assert_eq!(timeline.advance(0.016), Advance::Completed(Direction::Forward));
        assert_eq!(a.get(Property::Scale), Some(1.0));

        timeline.seek(0.0);
        assert_eq!(a.get(Property::Scale), Some(0.0));
        timeline.complete();
        assert_eq!(a.get(Property::Scale), Some(1.0));
    }

    #[test]
    fn to_only_follow_up_continues_from_current_value() {
        let a = Recorder::new("a");
        let steps = vec![
            AnimationStep::nodes(vec![a.clone()])
                .from(PropertySet::new().opacity(0.0))
                .to(PropertySet::new().opacity(0.8))
                .duration(1.0)
                .ease(Ease::Linear),
            AnimationStep::nodes(vec![a.clone()])
                .to(PropertySet::new().opacity(1.0))
                .duration(1.0)
                .ease(Ease::Linear)
                .overlap(0.5),
        ];
        let mut timeline = compose(steps, &no_selectors);
        assert_eq!(a.get(Property::Opacity), Some(0.0));

        timeline.play();
        let mut previous = 0.0;
        while timeline.advance(0.05) == Advance::Running {
            let opacity = a.get(Property::Opacity).unwrap();
            assert!(opacity >= previous - 1e-9, "opacity fell from {previous} to {opacity}");
            assert!(opacity - previous < 0.05, "opacity jumped from {previous} to {opacity}");
            previous = opacity;
        }
        assert_eq!(a.get(Property::Opacity), Some(1.0));
    }

    mod invariants {
        use proptest::prelude::*;

        use super::*;

        const POOL: [&str; 3] = ["a", "b", "c"];

        #[derive(Debug, Clone)]
        struct StepSpec {
            targets: Vec<usize>,
            offset: Offset,
            stagger: Option<Stagger>,
            duration: f64,
            from: (f64, f64),
            to: (f64, f64),
        }

        /// One tween per (node, step) as the timeline should schedule it.
        struct Scheduled {
            target: usize,
            start: f64,
            from: (f64, f64),
            to: (f64, f64),
        }

        fn offset() -> impl Strategy<Value = Offset> {
            prop_oneof![
                Just(Offset::Sequential),
                (-2.0..2.0_f64).prop_map(Offset::Relative),
                (0.0..3.0_f64).prop_map(Offset::Absolute),
                Just(Offset::WithPrevious),
            ]
        }

        fn stagger() -> impl Strategy<Value = Option<Stagger>> {
            prop::option::of(prop_oneof![
                (0.0..0.5_f64).prop_map(Stagger::Each),
                (0.0..1.0_f64).prop_map(Stagger::Amount),
            ])
        }

        fn pair() -> impl Strategy<Value = (f64, f64)> {
            (-100..100_i32, 0..=10_i32).prop_map(|(x, tenths)| (f64::from(x), f64::from(tenths) / 10.0))
        }

        fn step_spec() -> impl Strategy<Value = StepSpec> {
            (prop::collection::vec(0..POOL.len(), 1..4), offset(), stagger(), 0.05..2.0_f64, pair(), pair())
                .prop_map(|(targets, offset, stagger, duration, from, to)| StepSpec {
                    targets,
                    offset,
                    stagger,
                    duration,
                    from,
                    to,
                })
        }

        fn build(specs: &[StepSpec], pool: &[Recorder]) -> Vec<AnimationStep<Recorder>> {
            specs
                .iter()
                .map(|spec| {
                    let step = AnimationStep::nodes(spec.targets.iter().map(|&i| pool[i].clone()).collect())
                        .from(PropertySet::new().x(spec.from.0).opacity(spec.from.1))
                        .to(PropertySet::new().x(spec.to.0).opacity(spec.to.1))
                        .duration(spec.duration)
                        .offset(spec.offset);
                    match spec.stagger {
                        Some(stagger) => step.stagger(stagger),
                        None => step,
                    }
                })
                .collect()
        }

        fn schedule(specs: &[StepSpec]) -> Vec<Scheduled> {
            let mut scheduled = Vec::new();
            let (mut previous_start, mut previous_end) = (0.0_f64, 0.0_f64);
            for spec in specs {
                let anchor = match spec.offset {
                    Offset::Sequential => previous_end,
                    Offset::Relative(delta) => previous_end + delta,
                    Offset::Absolute(at) => at,
                    Offset::WithPrevious => previous_start,
                }
                .max(0.0);
                let count = spec.targets.len();
                let mut end = anchor;
                for (index, &target) in spec.targets.iter().enumerate() {
                    let start = anchor + spec.stagger.map_or(0.0, |stagger| stagger.delay(index, count));
                    scheduled.push(Scheduled { target, start, from: spec.from, to: spec.to });
                    end = end.max(start + spec.duration);
                }
                previous_start = anchor;
                previous_end = end;
            }
            scheduled
        }

        /// Latest-started tween at time zero, else the earliest pending one.
        fn initial(scheduled: &[Scheduled], target: usize) -> (f64, f64) {
            let on_target = || scheduled.iter().filter(move |tween| tween.target == target);
            on_target()
                .filter(|tween| tween.start <= 0.0)
                .last()
                .or_else(|| {
                    on_target().fold(None, |earliest: Option<&Scheduled>, tween| match earliest {
                        Some(earliest) if earliest.start <= tween.start => Some(earliest),
                        _ => Some(tween),
                    })
                })
                .map(|tween| tween.from)
                .unwrap_or_default()
        }

        /// Latest start wins, ties going to the later declaration.
        fn last(scheduled: &[Scheduled], target: usize) -> (f64, f64) {
            scheduled
                .iter()
                .filter(|tween| tween.target == target)
                .fold(None, |latest: Option<&Scheduled>, tween| match latest {
                    Some(latest) if latest.start > tween.start => Some(latest),
                    _ => Some(tween),
                })
                .map(|tween| tween.to)
                .unwrap_or_default()
        }

        fn observed(recorder: &Recorder) -> (f64, f64) {
            (
                recorder.get(Property::X).unwrap_or(f64::NAN),
                recorder.get(Property::Opacity).unwrap_or(f64::NAN),
            )
        }

        fn used_targets(specs: &[StepSpec]) -> Vec<usize> {
            let mut used: Vec<usize> = specs.iter().flat_map(|spec| spec.targets.iter().copied()).collect();
            used.sort();
            used.dedup();
            used
        }

        proptest! {
            #[test]
            fn seek_zero_restores_initial_values(
                specs in prop::collection::vec(step_spec(), 1..6),
                frames in 0..240_usize,
                reverse_after in prop::option::of(0..120_usize),
            ) {
                let pool: Vec<Recorder> = POOL.iter().map(|&name| Recorder::new(name)).collect();
                let scheduled = schedule(&specs);
                let mut timeline = compose(build(&specs, &pool), &no_selectors);

                for &target in &used_targets(&specs) {
                    prop_assert_eq!(observed(&pool[target]), initial(&scheduled, target));
                }

                timeline.play();
                for frame in 0..frames {
                    if reverse_after == Some(frame) {
                        timeline.reverse();
                    }
                    timeline.advance(1.0 / 60.0);
                }
                timeline.seek(0.0);

                for &target in &used_targets(&specs) {
                    prop_assert_eq!(observed(&pool[target]), initial(&scheduled, target));
                }
            }

            #[test]
            fn completion_lands_on_latest_to_values(specs in prop::collection::vec(step_spec(), 1..6)) {
                let pool: Vec<Recorder> = POOL.iter().map(|&name| Recorder::new(name)).collect();
                let scheduled = schedule(&specs);
                let mut timeline = compose(build(&specs, &pool), &no_selectors);
                run_to_end(&mut timeline);

                for &target in &used_targets(&specs) {
                    prop_assert_eq!(observed(&pool[target]), last(&scheduled, target));
                }
            }
        }
    }
}
