//! Termination controller: drives a [`TurnStep`] until it is done.

use herdcats_core::{ReunionEvent, TurnStep};
use herdcats_types::Turn;
use std::convert::Infallible;
use tracing::{info, warn};

/// Hard cap on the number of turns in a run.
pub const MAX_TURNS: u64 = 100_000;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every pair was reunited.
    AllReunited,
    /// The turn cap was reached with pairs still apart.
    TurnCapReached,
}

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Stopped(StopReason),
}

/// Statistics from a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationStats {
    /// Turns executed.
    pub turns: Turn,
    /// Reunions observed.
    pub reunions: usize,
    /// Why the run ended.
    pub stop_reason: StopReason,
}

/// Runs turns until every pair is reunited or the turn cap is hit.
///
/// The reunion check happens before the cap check, so a run whose last
/// allowed turn reunites everyone stops with [`StopReason::AllReunited`].
#[derive(Debug, Clone)]
pub struct SimulationRunner {
    max_turns: u64,
    state: RunState,
}

impl Default for SimulationRunner {
    fn default() -> Self {
        Self::new(MAX_TURNS)
    }
}

impl SimulationRunner {
    /// Create a runner that stops after at most `max_turns` turns.
    pub fn new(max_turns: u64) -> Self {
        Self {
            max_turns,
            state: RunState::Running,
        }
    }

    /// Current controller state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Run to completion, discarding events.
    pub fn run<S: TurnStep>(&mut self, sim: &mut S) -> SimulationStats {
        match self.run_with(sim, |_| Ok::<(), Infallible>(())) {
            Ok(stats) => stats,
            Err(never) => match never {},
        }
    }

    /// Run to completion, handing every reunion to `on_reunion` as it happens.
    ///
    /// Stops early with the callback's error if it fails.
    pub fn run_with<S, F, E>(&mut self, sim: &mut S, mut on_reunion: F) -> Result<SimulationStats, E>
    where
        S: TurnStep,
        F: FnMut(&ReunionEvent) -> Result<(), E>,
    {
        self.state = RunState::Running;
        let mut reunions = 0;

        let stop_reason = loop {
            if sim.all_reunited() {
                break StopReason::AllReunited;
            }
            if sim.turn().0 >= self.max_turns {
                warn!(
                    turns = self.max_turns,
                    "Turn cap reached with pairs still apart"
                );
                break StopReason::TurnCapReached;
            }

            for event in sim.step() {
                reunions += 1;
                on_reunion(&event)?;
            }
        };

        self.state = RunState::Stopped(stop_reason);
        let stats = SimulationStats {
            turns: sim.turn(),
            reunions,
            stop_reason,
        };
        info!(
            turns = %stats.turns,
            reunions = stats.reunions,
            reason = ?stats.stop_reason,
            "Run finished"
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeededSimulation;
    use herdcats_test_helpers::{four_station_network, line_network};
    use herdcats_types::{PairId, StationId};
    use tracing_test::traced_test;

    /// Never reunites anyone.
    #[derive(Default)]
    struct Endless {
        turn: Turn,
        steps: u64,
    }

    impl TurnStep for Endless {
        fn step(&mut self) -> Vec<ReunionEvent> {
            self.turn = self.turn.next();
            self.steps += 1;
            Vec::new()
        }

        fn all_reunited(&self) -> bool {
            false
        }

        fn turn(&self) -> Turn {
            self.turn
        }
    }

    /// Reports everyone reunited once `done_after` turns have run,
    /// emitting one event per turn.
    struct Scripted {
        turn: Turn,
        done_after: u64,
    }

    impl TurnStep for Scripted {
        fn step(&mut self) -> Vec<ReunionEvent> {
            self.turn = self.turn.next();
            vec![ReunionEvent {
                pair: PairId(self.turn.0 as usize),
                station: StationId(1),
                turn: self.turn,
            }]
        }

        fn all_reunited(&self) -> bool {
            self.turn.0 >= self.done_after
        }

        fn turn(&self) -> Turn {
            self.turn
        }
    }

    #[traced_test]
    #[test]
    fn test_stops_at_turn_cap() {
        let mut sim = Endless::default();
        let mut runner = SimulationRunner::new(5);

        let stats = runner.run(&mut sim);

        assert_eq!(sim.steps, 5);
        assert_eq!(stats.turns, Turn(5));
        assert_eq!(stats.stop_reason, StopReason::TurnCapReached);
        assert_eq!(runner.state(), RunState::Stopped(StopReason::TurnCapReached));
        assert!(logs_contain("Turn cap reached"));
    }

    #[test]
    fn test_stops_once_all_reunited() {
        let mut sim = Scripted {
            turn: Turn::START,
            done_after: 2,
        };
        let mut runner = SimulationRunner::default();

        let stats = runner.run(&mut sim);

        assert_eq!(stats.turns, Turn(2));
        assert_eq!(stats.reunions, 2);
        assert_eq!(stats.stop_reason, StopReason::AllReunited);
    }

    #[test]
    fn test_reunion_wins_over_cap() {
        let mut sim = Scripted {
            turn: Turn::START,
            done_after: 3,
        };

        let stats = SimulationRunner::new(3).run(&mut sim);

        assert_eq!(stats.stop_reason, StopReason::AllReunited);
    }

    #[test]
    fn test_nothing_to_do_runs_no_turns() {
        let mut sim = Scripted {
            turn: Turn::START,
            done_after: 0,
        };

        let stats = SimulationRunner::default().run(&mut sim);

        assert_eq!(stats.turns, Turn::START);
        assert_eq!(stats.reunions, 0);
        assert_eq!(stats.stop_reason, StopReason::AllReunited);
    }

    #[test]
    fn test_callback_sees_events_in_order() {
        let mut sim = Scripted {
            turn: Turn::START,
            done_after: 3,
        };
        let mut seen = Vec::new();

        SimulationRunner::default()
            .run_with(&mut sim, |event| {
                seen.push(event.turn);
                Ok::<(), ()>(())
            })
            .unwrap();

        assert_eq!(seen, vec![Turn(1), Turn(2), Turn(3)]);
    }

    #[test]
    fn test_callback_error_stops_run() {
        let mut sim = Scripted {
            turn: Turn::START,
            done_after: 10,
        };
        let mut runner = SimulationRunner::default();

        let result = runner.run_with(&mut sim, |event| {
            if event.turn == Turn(2) {
                Err("sink closed")
            } else {
                Ok(())
            }
        });

        assert_eq!(result, Err("sink closed"));
        assert_eq!(sim.turn(), Turn(2));
        assert_eq!(runner.state(), RunState::Running);
    }

    #[test]
    fn test_seeded_run_terminates() {
        let mut sim = SeededSimulation::seeded(four_station_network(), 2, 31).unwrap();
        let stats = SimulationRunner::default().run(&mut sim);

        assert!(stats.turns.0 <= MAX_TURNS);
        assert_eq!(stats.reunions, sim.reunited_count());
        match stats.stop_reason {
            StopReason::AllReunited => assert!(sim.all_reunited()),
            StopReason::TurnCapReached => assert_eq!(stats.turns, Turn(MAX_TURNS)),
        }
    }

    #[test]
    fn test_small_cap_on_line() {
        let mut sim = SeededSimulation::seeded(line_network(30), 5, 8).unwrap();
        let stats = SimulationRunner::new(1).run(&mut sim);

        assert!(stats.turns.0 <= 1);
    }
}
