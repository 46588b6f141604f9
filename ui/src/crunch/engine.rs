//! Day-stepper state machine and the five day actions.
//!
//! The engine is a plain value: every user interaction maps to one
//! [`Action`], which is applied synchronously and reports a [`Transition`].
//! Invalid or repeated input is never an error, it comes back as
//! [`Transition::Ignored`] with the state untouched.

use dioxus::logger::tracing::{debug, info};

use super::days::Day;
use super::metrics::Metrics;
use super::quality::Quality;

/// Completion flags, one per day. Flags only ever go from `false` to `true`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskState {
    pub analysis_run: bool,
    pub parasitics_found: bool,
    pub circuit_fixed: bool,
    pub layout_fixed: bool,
    pub signed_off: bool,
}

impl TaskState {
    pub fn is_done(&self, day: Day) -> bool {
        match day {
            Day::Mon => self.analysis_run,
            Day::Tue => self.parasitics_found,
            Day::Wed => self.circuit_fixed,
            Day::Thu => self.layout_fixed,
            Day::Fri => self.signed_off,
        }
    }

    pub fn completed_count(&self) -> usize {
        Day::ALL.iter().filter(|day| self.is_done(**day)).count()
    }

    fn mark(&mut self, day: Day) {
        let flag = match day {
            Day::Mon => &mut self.analysis_run,
            Day::Tue => &mut self.parasitics_found,
            Day::Wed => &mut self.circuit_fixed,
            Day::Thu => &mut self.layout_fixed,
            Day::Fri => &mut self.signed_off,
        };
        *flag = true;
    }
}

/// Everything the user can ask the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RunAnalysis,
    RunExtraction,
    ApplyCircuitFix,
    ApplyLayoutEco,
    SignOff,
    GoToDay(Day),
    Advance,
}

impl Action {
    /// The day whose flag this action sets, if it is a day action.
    pub fn owner(self) -> Option<Day> {
        match self {
            Action::RunAnalysis => Some(Day::Mon),
            Action::RunExtraction => Some(Day::Tue),
            Action::ApplyCircuitFix => Some(Day::Wed),
            Action::ApplyLayoutEco => Some(Day::Thu),
            Action::SignOff => Some(Day::Fri),
            Action::GoToDay(_) | Action::Advance => None,
        }
    }
}

/// Why an action left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The day's action already ran.
    AlreadyDone(Day),
    /// Forward navigation past the gate.
    Locked { from: Day, to: Day },
    /// `advance` on Friday.
    AtLastDay,
    /// Raw index outside the five-day range.
    OutOfRange(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Navigated { from: Day, to: Day },
    Completed(Day),
    Ignored(Rejection),
}

impl Transition {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored(_))
    }
}

/// One crunch session: current day, completion flags and live metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct CrunchEngine {
    day: Day,
    flags: TaskState,
    metrics: Metrics,
    celebrate: bool,
}

impl Default for CrunchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CrunchEngine {
    pub fn new() -> Self {
        Self {
            day: Day::FIRST,
            flags: TaskState::default(),
            metrics: Metrics::baseline(),
            celebrate: false,
        }
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn flags(&self) -> TaskState {
        self.flags
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn quality(&self) -> Quality {
        Quality::from_eye_height(self.metrics.eye_height)
    }

    /// One-shot celebration after sign-off, until dismissed.
    pub fn celebrating(&self) -> bool {
        self.celebrate
    }

    /// Friday reached and signed off. Nothing else can change after this.
    pub fn is_complete(&self) -> bool {
        self.day.is_last() && self.flags.signed_off
    }

    pub fn current_done(&self) -> bool {
        self.flags.is_done(self.day)
    }

    /// Navigation rule: any earlier (or the current) day, the next day once
    /// today's action is done, or anything after sign-off.
    pub fn can_go_to(&self, target: Day) -> bool {
        if self.flags.signed_off || target <= self.day {
            return true;
        }
        self.day.next() == Some(target) && self.current_done()
    }

    pub fn can_advance(&self) -> bool {
        self.day.next().is_some_and(|next| self.can_go_to(next))
    }

    pub fn go_to_day(&mut self, target: Day) -> Transition {
        let from = self.day;
        if !self.can_go_to(target) {
            debug!(%from, to = %target, "navigation locked");
            return Transition::Ignored(Rejection::Locked { from, to: target });
        }
        self.day = target;
        debug!(%from, to = %target, "navigated");
        Transition::Navigated { from, to: target }
    }

    pub fn go_to_index(&mut self, index: usize) -> Transition {
        match Day::from_index(index) {
            Some(day) => self.go_to_day(day),
            None => {
                debug!(index, "day index out of range");
                Transition::Ignored(Rejection::OutOfRange(index))
            }
        }
    }

    pub fn advance(&mut self) -> Transition {
        match self.day.next() {
            Some(next) => self.go_to_day(next),
            None => Transition::Ignored(Rejection::AtLastDay),
        }
    }

    pub fn run_analysis(&mut self) -> Transition {
        self.complete(Day::Mon, |metrics| metrics)
    }

    pub fn run_extraction(&mut self) -> Transition {
        self.complete(Day::Tue, Metrics::with_extraction)
    }

    pub fn apply_circuit_fix(&mut self) -> Transition {
        self.complete(Day::Wed, Metrics::with_circuit_fix)
    }

    pub fn apply_layout_eco(&mut self) -> Transition {
        self.complete(Day::Thu, Metrics::with_layout_eco)
    }

    pub fn sign_off(&mut self) -> Transition {
        let outcome = self.complete(Day::Fri, |metrics| metrics);
        if outcome == Transition::Completed(Day::Fri) {
            self.celebrate = true;
        }
        outcome
    }

    pub fn dismiss_celebration(&mut self) {
        self.celebrate = false;
    }

    pub fn apply(&mut self, action: Action) -> Transition {
        match action {
            Action::RunAnalysis => self.run_analysis(),
            Action::RunExtraction => self.run_extraction(),
            Action::ApplyCircuitFix => self.apply_circuit_fix(),
            Action::ApplyLayoutEco => self.apply_layout_eco(),
            Action::SignOff => self.sign_off(),
            Action::GoToDay(day) => self.go_to_day(day),
            Action::Advance => self.advance(),
        }
    }

    /// Reducer form of [`CrunchEngine::apply`].
    pub fn reduce(mut self, action: Action) -> Self {
        self.apply(action);
        self
    }

    fn complete(&mut self, day: Day, effect: fn(Metrics) -> Metrics) -> Transition {
        if self.flags.is_done(day) {
            debug!(%day, "action already completed");
            return Transition::Ignored(Rejection::AlreadyDone(day));
        }
        self.flags.mark(day);
        self.metrics = effect(self.metrics);
        info!(
            %day,
            gain = self.metrics.gain,
            bandwidth = self.metrics.bandwidth,
            eye_height = self.metrics.eye_height,
            power = self.metrics.power,
            "day action completed"
        );
        Transition::Completed(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crunch::metrics::METRICS_BASE;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const DAY_ACTIONS: [Action; 5] = [
        Action::RunAnalysis,
        Action::RunExtraction,
        Action::ApplyCircuitFix,
        Action::ApplyLayoutEco,
        Action::SignOff,
    ];

    fn random_action(rng: &mut StdRng) -> Action {
        match rng.gen_range(0..8) {
            0..=4 => DAY_ACTIONS[rng.gen_range(0..5)],
            5 => Action::Advance,
            _ => Action::GoToDay(Day::ALL[rng.gen_range(0..5)]),
        }
    }

    #[test]
    fn starts_on_monday_with_baseline() {
        let engine = CrunchEngine::new();
        assert_eq!(engine.day(), Day::Mon);
        assert_eq!(engine.flags(), TaskState::default());
        assert_eq!(engine.metrics(), METRICS_BASE);
        assert!(!engine.celebrating());
        assert!(!engine.can_advance());
    }

    #[test]
    fn advance_is_gated_on_current_flag() {
        let mut engine = CrunchEngine::new();
        assert!(engine.advance().is_ignored());
        assert_eq!(engine.day(), Day::Mon);

        assert_eq!(engine.run_analysis(), Transition::Completed(Day::Mon));
        assert_eq!(
            engine.advance(),
            Transition::Navigated {
                from: Day::Mon,
                to: Day::Tue
            }
        );
        assert_eq!(engine.day(), Day::Tue);
        assert!(engine.flags().analysis_run);
    }

    #[test]
    fn far_jumps_are_locked_before_sign_off() {
        let mut engine = CrunchEngine::new();
        engine.run_analysis();
        let before = engine.clone();
        assert_eq!(
            engine.go_to_day(Day::Wed),
            Transition::Ignored(Rejection::Locked {
                from: Day::Mon,
                to: Day::Wed
            })
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut engine = CrunchEngine::new();
        assert_eq!(
            engine.go_to_index(5),
            Transition::Ignored(Rejection::OutOfRange(5))
        );
        assert_eq!(engine.day(), Day::Mon);
    }

    #[test]
    fn actions_ignore_current_day() {
        let mut engine = CrunchEngine::new();
        assert_eq!(engine.run_extraction(), Transition::Completed(Day::Tue));
        assert_eq!(engine.day(), Day::Mon);
        assert_eq!(engine.metrics().bandwidth, 9.8);
        assert_eq!(engine.metrics().eye_height, 25.0);
    }

    #[test]
    fn repeated_actions_are_idempotent() {
        for action in DAY_ACTIONS {
            let mut engine = CrunchEngine::new();
            engine.apply(action);
            let once = engine.clone();
            let second = engine.apply(action);
            assert!(second.is_ignored(), "{action:?} ran twice");
            assert_eq!(engine, once, "{action:?} changed state on repeat");
        }
    }

    #[test]
    fn circuit_fix_on_wednesday_applies_once() {
        let mut engine = CrunchEngine::new();
        engine.run_analysis();
        engine.advance();
        engine.run_extraction();
        engine.advance();
        assert_eq!(engine.day(), Day::Wed);

        assert_eq!(engine.apply_circuit_fix(), Transition::Completed(Day::Wed));
        let fixed = engine.clone();
        assert_eq!(
            engine.apply_circuit_fix(),
            Transition::Ignored(Rejection::AlreadyDone(Day::Wed))
        );
        assert_eq!(engine, fixed);

        let m = engine.metrics();
        assert!((m.gain - 10.8).abs() < 1e-9, "gain {}", m.gain);
        assert!((m.power - 4.8).abs() < 1e-9, "power {}", m.power);
        assert!(engine.can_advance());
    }

    #[test]
    fn backward_navigation_is_pure() {
        let mut engine = CrunchEngine::new();
        for action in [
            Action::RunAnalysis,
            Action::Advance,
            Action::RunExtraction,
            Action::Advance,
            Action::ApplyCircuitFix,
        ] {
            engine.apply(action);
        }
        let flags = engine.flags();
        let metrics = engine.metrics();
        engine.go_to_day(Day::Mon);
        assert_eq!(engine.day(), Day::Mon);
        assert_eq!(engine.flags(), flags);
        assert_eq!(engine.metrics(), metrics);
    }

    #[test]
    fn sign_off_unlocks_every_day_and_celebrates_once() {
        let mut engine = CrunchEngine::new();
        for action in DAY_ACTIONS {
            engine.apply(action);
            engine.advance();
        }
        assert!(engine.is_complete());
        assert!(engine.celebrating());

        engine.dismiss_celebration();
        assert!(engine.sign_off().is_ignored());
        assert!(!engine.celebrating());

        for day in Day::ALL {
            assert!(engine.can_go_to(day));
        }
        engine.go_to_day(Day::Tue);
        assert_eq!(
            engine.go_to_day(Day::Fri),
            Transition::Navigated {
                from: Day::Tue,
                to: Day::Fri
            }
        );
    }

    #[test]
    fn advance_on_friday_is_ignored() {
        let mut engine = CrunchEngine::new();
        for action in DAY_ACTIONS {
            engine.apply(action);
            engine.advance();
        }
        assert_eq!(engine.day(), Day::Fri);
        assert_eq!(engine.advance(), Transition::Ignored(Rejection::AtLastDay));
    }

    #[test]
    fn reducer_matches_apply() {
        let reduced = CrunchEngine::new()
            .reduce(Action::RunAnalysis)
            .reduce(Action::Advance);
        let mut applied = CrunchEngine::new();
        applied.run_analysis();
        applied.advance();
        assert_eq!(reduced, applied);
    }

    #[test]
    fn random_sequences_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(0x7a9e);
        for _ in 0..200 {
            let mut engine = CrunchEngine::new();
            for _ in 0..40 {
                let before = engine.clone();
                let action = random_action(&mut rng);
                let outcome = engine.apply(action);

                assert!(engine.day().index() < 5);

                // Flags never go back to false.
                for day in Day::ALL {
                    if before.flags().is_done(day) {
                        assert!(engine.flags().is_done(day));
                    }
                }

                if let Action::GoToDay(target) = action {
                    if target.index() > before.day().index() + 1 && !before.flags().signed_off {
                        assert_eq!(engine.day(), before.day());
                    }
                    assert_eq!(engine.flags(), before.flags());
                    assert_eq!(engine.metrics(), before.metrics());
                }

                if outcome.is_ignored() {
                    assert_eq!(engine, before);
                }

                let m = engine.metrics();
                assert!(m.gain >= 0.0 && m.bandwidth >= 0.0);
                assert!(m.eye_height >= 0.0 && m.power >= 0.0);
            }
        }
    }
}
