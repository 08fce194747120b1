use log::debug;
use serde::{Deserialize, Serialize};

use super::timeline::Direction;

/// When a section counts as entered or left, in terms of its visible fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TriggerConfig {
    pub enter_threshold: f64,
    /// The section has left once its visible fraction drops below this, or
    /// once it is fully out of view.
    pub exit_threshold: f64,
    pub replay_on_reenter: bool,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            enter_threshold: 0.2,
            exit_threshold: 0.0,
            replay_on_reenter: false,
        }
    }
}

impl TriggerConfig {
    /// Visibility fractions the observer has to report so that every crossing
    /// this config cares about is seen.
    pub fn observer_thresholds(&self) -> Vec<f64> {
        let mut thresholds: Vec<f64> = (0..=10).map(|step| f64::from(step) / 10.0).collect();
        thresholds.push(self.enter_threshold.clamp(0.0, 1.0));
        thresholds.push(self.exit_threshold.clamp(0.0, 1.0));
        thresholds.sort_by(f64::total_cmp);
        thresholds.dedup();
        thresholds
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Idle,
    Armed,
    Playing,
    Played,
    Reversing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    Enter,
    Exit,
}

/// Turns a stream of visible-fraction reports into enter/exit signals.
#[derive(Debug, Clone)]
pub struct ViewportTrigger {
    config: TriggerConfig,
    state: TriggerState,
    inside: bool,
    enters: u32,
}

impl ViewportTrigger {
    pub fn new(config: TriggerConfig) -> Self {
        Self {
            config,
            state: TriggerState::Idle,
            inside: false,
            enters: 0,
        }
    }

    pub fn config(&self) -> TriggerConfig {
        self.config
    }

    #[cfg(test)]
    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn enter_count(&self) -> u32 {
        self.enters
    }

    pub fn arm(&mut self) {
        if self.state == TriggerState::Idle {
            self.set_state(TriggerState::Armed);
        }
    }

    /// Back to `Idle`; later reports are ignored until armed again.
    pub fn disarm(&mut self) {
        self.inside = false;
        self.set_state(TriggerState::Idle);
    }

    pub fn observe(&mut self, visible_fraction: f64) -> Option<TriggerEvent> {
        if self.state == TriggerState::Idle {
            return None;
        }
        if !self.config.replay_on_reenter && self.enters > 0 {
            return None;
        }

        let entered = visible_fraction > 0.0 && visible_fraction >= self.config.enter_threshold;
        let left = visible_fraction <= 0.0 || visible_fraction < self.config.exit_threshold;

        if !self.inside && entered {
            self.inside = true;
            if matches!(self.state, TriggerState::Armed | TriggerState::Reversing) {
                self.enters += 1;
                self.set_state(TriggerState::Playing);
                return Some(TriggerEvent::Enter);
            }
        } else if self.inside && left {
            self.inside = false;
            if matches!(self.state, TriggerState::Playing | TriggerState::Played) {
                self.set_state(TriggerState::Reversing);
                return Some(TriggerEvent::Exit);
            }
        }
        None
    }

    /// Reports that the driven timeline finished running in `direction`.
    pub fn timeline_completed(&mut self, direction: Direction) {
        match (self.state, direction) {
            (TriggerState::Playing, Direction::Forward) => self.set_state(TriggerState::Played),
            (TriggerState::Reversing, Direction::Reverse) => self.set_state(TriggerState::Armed),
            _ => {}
        }
    }

    fn set_state(&mut self, state: TriggerState) {
        if self.state != state {
            debug!("viewport trigger {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed(replay: bool) -> ViewportTrigger {
        let mut trigger = ViewportTrigger::new(TriggerConfig {
            enter_threshold: 0.3,
            exit_threshold: 0.0,
            replay_on_reenter: replay,
        });
        trigger.arm();
        trigger
    }

    #[test]
    fn starts_idle_and_ignores_reports_until_armed() {
        let mut trigger = ViewportTrigger::new(TriggerConfig::default());
        assert_eq!(trigger.state(), TriggerState::Idle);
        assert_eq!(trigger.observe(1.0), None);
        trigger.arm();
        assert_eq!(trigger.state(), TriggerState::Armed);
        assert_eq!(trigger.observe(1.0), Some(TriggerEvent::Enter));
    }

    #[test]
    fn enters_only_past_threshold() {
        let mut trigger = armed(false);
        assert_eq!(trigger.observe(0.1), None);
        assert_eq!(trigger.observe(0.29), None);
        assert_eq!(trigger.observe(0.3), Some(TriggerEvent::Enter));
        assert_eq!(trigger.state(), TriggerState::Playing);
    }

    #[test]
    fn one_shot_fires_enter_at_most_once() {
        let mut trigger = armed(false);
        let fractions = [0.0, 0.5, 1.0, 0.0, 0.6, 0.0, 0.9, 0.2, 1.0, 0.0];
        let enters = fractions
            .iter()
            .filter_map(|fraction| trigger.observe(*fraction))
            .filter(|event| *event == TriggerEvent::Enter)
            .count();
        assert_eq!(enters, 1);

        trigger.timeline_completed(Direction::Forward);
        assert_eq!(trigger.state(), TriggerState::Played);
        assert_eq!(trigger.observe(0.0), None);
        assert_eq!(trigger.observe(1.0), None);
        assert_eq!(trigger.state(), TriggerState::Played);
    }

    #[test]
    fn replay_fires_enter_on_every_reentry() {
        let mut trigger = armed(true);
        assert_eq!(trigger.observe(0.5), Some(TriggerEvent::Enter));
        trigger.timeline_completed(Direction::Forward);
        assert_eq!(trigger.observe(0.0), Some(TriggerEvent::Exit));
        assert_eq!(trigger.state(), TriggerState::Reversing);
        trigger.timeline_completed(Direction::Reverse);
        assert_eq!(trigger.state(), TriggerState::Armed);
        assert_eq!(trigger.observe(0.5), Some(TriggerEvent::Enter));
        assert_eq!(trigger.enter_count(), 2);
    }

    #[test]
    fn one_enter_per_continuous_visible_period() {
        let mut trigger = armed(true);
        assert_eq!(trigger.observe(0.4), Some(TriggerEvent::Enter));
        assert_eq!(trigger.observe(0.8), None);
        assert_eq!(trigger.observe(0.1), None);
        assert_eq!(trigger.observe(0.9), None);
        assert_eq!(trigger.enter_count(), 1);
    }

    #[test]
    fn reentering_while_reversing_plays_again() {
        let mut trigger = armed(true);
        trigger.observe(1.0);
        assert_eq!(trigger.observe(0.0), Some(TriggerEvent::Exit));
        assert_eq!(trigger.observe(0.7), Some(TriggerEvent::Enter));
        assert_eq!(trigger.state(), TriggerState::Playing);
    }

    #[test]
    fn exit_threshold_above_zero() {
        let mut trigger = ViewportTrigger::new(TriggerConfig {
            enter_threshold: 0.5,
            exit_threshold: 0.2,
            replay_on_reenter: true,
        });
        trigger.arm();
        trigger.observe(0.6);
        assert_eq!(trigger.observe(0.3), None);
        assert_eq!(trigger.observe(0.1), Some(TriggerEvent::Exit));
    }

    #[test]
    fn disarm_silences_reports() {
        let mut trigger = armed(true);
        trigger.disarm();
        assert_eq!(trigger.state(), TriggerState::Idle);
        assert_eq!(trigger.observe(1.0), None);
        assert_eq!(trigger.observe(0.0), None);
    }

    #[test]
    fn observer_thresholds_include_config_values() {
        let config = TriggerConfig { enter_threshold: 0.25, ..TriggerConfig::default() };
        let thresholds = config.observer_thresholds();
        assert!(thresholds.contains(&0.25));
        assert_eq!(thresholds.first(), Some(&0.0));
        assert_eq!(thresholds.last(), Some(&1.0));
        assert!(thresholds.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn config_reads_camel_case_json() {
        let config: TriggerConfig =
            serde_json::from_str(r#"{"enterThreshold": 0.3, "replayOnReenter": true}"#).unwrap();
        assert_eq!(config.enter_threshold, 0.3);
        assert_eq!(config.exit_threshold, 0.0);
        assert!(config.replay_on_reenter);
    }
}
