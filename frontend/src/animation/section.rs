use super::timeline::{Advance, Animatable, Timeline};
use super::trigger::{TriggerConfig, TriggerEvent, ViewportTrigger};

/// A section's timeline bound to its viewport trigger: entering plays, leaving
/// (when replay is on) reverses, completions feed back into the trigger.
pub struct SectionController<T> {
    timeline: Timeline<T>,
    trigger: ViewportTrigger,
}

impl<T> SectionController<T>
where
    T: Animatable + PartialEq,
{
    pub fn new(timeline: Timeline<T>, config: TriggerConfig) -> Self {
        Self {
            timeline,
            trigger: ViewportTrigger::new(config),
        }
    }

    pub fn arm(&mut self) {
        self.trigger.arm();
    }

    #[cfg(test)]
    pub fn state(&self) -> super::trigger::TriggerState {
        self.trigger.state()
    }

    /// Feeds one visibility report. Returns the event it caused, if any; the
    /// caller has to keep frames coming while [`Self::advance`] says so.
    pub fn on_intersection(&mut self, visible_fraction: f64) -> Option<TriggerEvent> {
        let event = self.trigger.observe(visible_fraction)?;
        match event {
            TriggerEvent::Enter => self.timeline.play(),
            TriggerEvent::Exit => self.timeline.reverse(),
        }
        Some(event)
    }

    /// Returns whether another frame is needed.
    pub fn advance(&mut self, dt: f64) -> bool {
        match self.timeline.advance(dt) {
            Advance::Running => true,
            Advance::Completed(direction) => {
                self.trigger.timeline_completed(direction);
                false
            }
            Advance::Idle => false,
        }
    }

    /// Jumps straight to the end state. Used when no observer could be set up,
    /// so the section is never left invisible.
    pub fn finish(&mut self) {
        self.timeline.complete();
    }

    pub fn progress(&self) -> f64 {
        self.timeline.progress()
    }

    pub fn teardown(&mut self) {
        self.timeline.pause();
        self.trigger.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::properties::{Property, PropertySet};
    use crate::animation::step::AnimationStep;
    use crate::animation::timeline::compose;
    use crate::animation::timeline::tests::Recorder;
    use crate::animation::trigger::TriggerState;

    fn section(replay: bool) -> (Recorder, SectionController<Recorder>) {
        let heading = Recorder::new("heading");
        let steps = vec![AnimationStep::nodes(vec![heading.clone()])
            .from(PropertySet::new().opacity(0.0).y(50.0))
            .to(PropertySet::new().opacity(1.0).y(0.0))
            .duration(1.0)];
        let timeline = compose(steps, &|_: &str| Vec::<Recorder>::new());
        let mut controller = SectionController::new(
            timeline,
            TriggerConfig { enter_threshold: 0.2, exit_threshold: 0.0, replay_on_reenter: replay },
        );
        controller.arm();
        (heading, controller)
    }

    fn settle(controller: &mut SectionController<Recorder>) {
        while controller.advance(1.0 / 60.0) {}
    }

    #[test]
    fn hidden_until_entered() {
        let (heading, mut controller) = section(false);
        assert_eq!(controller.state(), TriggerState::Armed);
        assert_eq!(heading.get(Property::Opacity), Some(0.0));
        assert!(!controller.advance(0.5));
        assert_eq!(heading.get(Property::Opacity), Some(0.0));
    }

    #[test]
    fn full_replay_cycle() {
        let (heading, mut controller) = section(true);

        assert_eq!(controller.on_intersection(0.5), Some(TriggerEvent::Enter));
        settle(&mut controller);
        assert_eq!(controller.state(), TriggerState::Played);
        assert_eq!(heading.get(Property::Y), Some(0.0));

        assert_eq!(controller.on_intersection(0.0), Some(TriggerEvent::Exit));
        settle(&mut controller);
        assert_eq!(controller.state(), TriggerState::Armed);
        assert_eq!(heading.get(Property::Y), Some(50.0));

        assert_eq!(controller.on_intersection(0.9), Some(TriggerEvent::Enter));
        assert_eq!(controller.state(), TriggerState::Playing);
    }

    #[test]
    fn one_shot_section_stays_played() {
        let (heading, mut controller) = section(false);
        controller.on_intersection(1.0);
        settle(&mut controller);
        assert_eq!(controller.on_intersection(0.0), None);
        assert!(!controller.advance(0.1));
        assert_eq!(controller.state(), TriggerState::Played);
        assert_eq!(heading.get(Property::Opacity), Some(1.0));
    }

    #[test]
    fn leaving_mid_play_reverses_from_current_point() {
        let (heading, mut controller) = section(true);
        controller.on_intersection(1.0);
        controller.advance(0.5);
        let midway = heading.get(Property::Y).unwrap();
        controller.on_intersection(0.0);
        controller.advance(0.1);
        let after = heading.get(Property::Y).unwrap();
        assert!(after > midway && after < 50.0);
        assert_eq!(controller.state(), TriggerState::Reversing);
    }

    #[test]
    fn teardown_stops_everything() {
        let (heading, mut controller) = section(true);
        controller.on_intersection(1.0);
        controller.advance(0.2);
        let frozen = heading.get(Property::Y);
        controller.teardown();

        assert_eq!(controller.state(), TriggerState::Idle);
        assert!(!controller.advance(0.5));
        assert_eq!(controller.on_intersection(0.0), None);
        assert_eq!(heading.get(Property::Y), frozen);
    }

    #[test]
    fn finish_shows_end_state() {
        let (heading, mut controller) = section(false);
        controller.finish();
        assert_eq!(heading.get(Property::Opacity), Some(1.0));
        assert_eq!(heading.get(Property::Y), Some(0.0));
        assert_eq!(controller.progress(), 1.0);
    }
}
