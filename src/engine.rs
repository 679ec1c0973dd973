//! Timekeeping engine: the timer/stopwatch state machine.
//!
//! Time is kept in whole centiseconds so that a tick always moves the value
//! by exactly 0.01 s. Every user-facing action returns the sound cue it
//! should trigger; the caller decides whether it is actually played.

use crate::audio::SoundCue;
use crate::config::{CENTIS_PER_TICK, MAX_DURATION_SEC, MIN_DURATION_SEC};
use crate::laps::{Lap, LapLog};
use log::debug;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Timer,
    #[default]
    Stopwatch,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Timer => "TIMER",
            Mode::Stopwatch => "STOPWATCH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EngineState::Idle => "idle",
            EngineState::Running => "running",
            EngineState::Paused => "paused",
            EngineState::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// Bound a requested countdown length to the supported range.
pub fn clamp_duration(seconds: i64) -> u32 {
    seconds.clamp(MIN_DURATION_SEC as i64, MAX_DURATION_SEC as i64) as u32
}

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    mode: Mode,
    state: EngineState,
    value_cs: u64,
    duration: u32,
    laps: LapLog,
}

impl Engine {
    /// A stopwatch at rest, with the countdown length preset to `duration`.
    pub fn new(duration: u32) -> Self {
        Self {
            mode: Mode::default(),
            state: EngineState::Idle,
            value_cs: 0,
            duration: clamp_duration(duration as i64),
            laps: LapLog::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    /// Configured countdown length in whole seconds.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Elapsed (stopwatch) or remaining (timer) time in centiseconds.
    pub fn centis(&self) -> u64 {
        self.value_cs
    }

    pub fn laps(&self) -> &LapLog {
        &self.laps
    }

    /// Value shown in the main display.
    pub fn display(&self) -> String {
        crate::format_centis(self.value_cs)
    }

    fn baseline_cs(&self) -> u64 {
        match self.mode {
            Mode::Timer => self.duration as u64 * 100,
            Mode::Stopwatch => 0,
        }
    }

    fn transition(&mut self, next: EngineState) {
        if self.state != next {
            debug!("{} engine: {} -> {}", self.mode.label(), self.state, next);
            self.state = next;
        }
    }

    fn go_idle(&mut self) {
        self.transition(EngineState::Idle);
        self.value_cs = self.baseline_cs();
        self.laps.clear();
    }

    /// Switch between timer and stopwatch. Selecting the active mode does nothing.
    pub fn switch_mode(&mut self, mode: Mode) -> Option<SoundCue> {
        if self.mode == mode {
            return None;
        }
        self.mode = mode;
        self.go_idle();
        Some(SoundCue::Click)
    }

    /// The single play/pause control.
    pub fn toggle_play_pause(&mut self) -> SoundCue {
        match self.state {
            EngineState::Idle | EngineState::Completed => {
                if self.mode == Mode::Timer && self.value_cs == 0 {
                    self.value_cs = self.baseline_cs();
                }
                self.transition(EngineState::Running);
            }
            EngineState::Running => self.transition(EngineState::Paused),
            EngineState::Paused => self.transition(EngineState::Running),
        }
        SoundCue::Click
    }

    /// Stop and reset to the mode's baseline, discarding laps.
    pub fn stop_reset(&mut self) -> SoundCue {
        self.go_idle();
        SoundCue::Click
    }

    /// Record a split. Only a running stopwatch accepts laps.
    pub fn record_lap(&mut self) -> Option<SoundCue> {
        if self.mode != Mode::Stopwatch || self.state != EngineState::Running {
            return None;
        }
        let lap: Lap = self.laps.push(self.value_cs);
        debug!("Lap {} at {}", lap.number(), crate::format_centis(lap.centis()));
        Some(SoundCue::Lap)
    }

    /// Bounded setter behind every duration control. While idle the display
    /// follows the new baseline.
    pub fn set_duration(&mut self, seconds: i64) -> u32 {
        self.duration = clamp_duration(seconds);
        if self.state == EngineState::Idle {
            self.value_cs = self.baseline_cs();
        }
        self.duration
    }

    pub fn adjust_duration(&mut self, delta: i32) -> SoundCue {
        self.set_duration(self.duration as i64 + delta as i64);
        SoundCue::Click
    }

    pub fn apply_preset(&mut self, seconds: u32) -> SoundCue {
        self.set_duration(seconds as i64);
        SoundCue::Click
    }

    /// Advance one engine tick. Returns the completion cue when a countdown
    /// reaches zero; ticks outside the running state are ignored.
    pub fn tick(&mut self) -> Option<SoundCue> {
        if self.state != EngineState::Running {
            return None;
        }
        match self.mode {
            Mode::Stopwatch => {
                self.value_cs += CENTIS_PER_TICK;
                None
            }
            Mode::Timer => {
                if self.value_cs <= CENTIS_PER_TICK {
                    self.value_cs = 0;
                    self.transition(EngineState::Completed);
                    Some(SoundCue::Complete)
                } else {
                    self.value_cs -= CENTIS_PER_TICK;
                    None
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn set_centis(&mut self, centis: u64) {
        self.value_cs = centis;
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DURATION_SEC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer(duration: u32) -> Engine {
        let mut engine = Engine::new(duration);
        engine.switch_mode(Mode::Timer);
        engine
    }

    #[test]
    fn starts_as_idle_stopwatch_at_zero() {
        let engine = Engine::default();
        assert_eq!(engine.mode(), Mode::Stopwatch);
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.centis(), 0);
        assert_eq!(engine.duration(), 300);
        assert_eq!(engine.display(), "00:00.00");
    }

    #[test]
    fn play_pause_cycle() {
        let mut engine = Engine::default();
        assert_eq!(engine.toggle_play_pause(), SoundCue::Click);
        assert_eq!(engine.state(), EngineState::Running);
        engine.toggle_play_pause();
        assert_eq!(engine.state(), EngineState::Paused);
        engine.toggle_play_pause();
        assert_eq!(engine.state(), EngineState::Running);
    }

    #[test]
    fn stopwatch_tick_adds_one_centisecond() {
        let mut engine = Engine::default();
        engine.toggle_play_pause();
        for expected in 1..=250 {
            assert_eq!(engine.tick(), None);
            assert_eq!(engine.centis(), expected);
        }
        assert_eq!(engine.display(), "00:02.50");
    }

    #[test]
    fn timer_tick_subtracts_one_centisecond() {
        let mut engine = timer(10);
        engine.toggle_play_pause();
        engine.tick();
        engine.tick();
        assert_eq!(engine.centis(), 998);
        assert_eq!(engine.display(), "00:09.98");
    }

    #[test]
    fn ticks_are_ignored_unless_running() {
        let mut engine = Engine::default();
        assert_eq!(engine.tick(), None);
        assert_eq!(engine.centis(), 0);

        engine.toggle_play_pause();
        engine.tick();
        engine.toggle_play_pause();
        engine.tick();
        assert_eq!(engine.state(), EngineState::Paused);
        assert_eq!(engine.centis(), 1);
    }

    #[test]
    fn countdown_completes_once_at_zero() {
        let mut engine = timer(10);
        engine.toggle_play_pause();
        engine.set_centis(2);

        assert_eq!(engine.tick(), None);
        assert_eq!(engine.tick(), Some(SoundCue::Complete));
        assert_eq!(engine.state(), EngineState::Completed);
        assert_eq!(engine.centis(), 0);
        assert_eq!(engine.tick(), None);
        assert_eq!(engine.centis(), 0);
    }

    #[test]
    fn restart_after_completion_reloads_duration() {
        let mut engine = timer(60);
        engine.toggle_play_pause();
        engine.set_centis(1);
        engine.tick();
        assert_eq!(engine.state(), EngineState::Completed);

        engine.toggle_play_pause();
        assert_eq!(engine.state(), EngineState::Running);
        assert_eq!(engine.centis(), 6000);
    }

    #[test]
    fn stop_reset_returns_to_baseline() {
        let mut engine = timer(90);
        engine.toggle_play_pause();
        engine.tick();
        assert_eq!(engine.stop_reset(), SoundCue::Click);
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.centis(), 9000);

        let mut engine = Engine::default();
        engine.toggle_play_pause();
        engine.tick();
        engine.record_lap();
        engine.stop_reset();
        assert_eq!(engine.centis(), 0);
        assert!(engine.laps().is_empty());
    }

    #[test]
    fn laps_only_while_stopwatch_running() {
        let mut engine = Engine::default();
        assert_eq!(engine.record_lap(), None);

        engine.toggle_play_pause();
        engine.tick();
        assert_eq!(engine.record_lap(), Some(SoundCue::Lap));
        engine.toggle_play_pause();
        assert_eq!(engine.record_lap(), None);
        assert_eq!(engine.laps().len(), 1);

        let mut engine = timer(30);
        engine.toggle_play_pause();
        assert_eq!(engine.record_lap(), None);
        assert!(engine.laps().is_empty());
    }

    #[test]
    fn switching_mode_forces_idle_and_clears_laps() {
        let mut engine = Engine::default();
        engine.toggle_play_pause();
        engine.tick();
        engine.record_lap();

        assert_eq!(engine.switch_mode(Mode::Timer), Some(SoundCue::Click));
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.centis(), 30_000);
        assert!(engine.laps().is_empty());

        engine.toggle_play_pause();
        assert_eq!(engine.switch_mode(Mode::Stopwatch), Some(SoundCue::Click));
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.centis(), 0);
    }

    #[test]
    fn selecting_current_mode_is_a_no_op() {
        let mut engine = Engine::default();
        engine.toggle_play_pause();
        engine.tick();
        assert_eq!(engine.switch_mode(Mode::Stopwatch), None);
        assert_eq!(engine.state(), EngineState::Running);
        assert_eq!(engine.centis(), 1);
    }

    #[test]
    fn duration_is_clamped() {
        let mut engine = Engine::default();
        assert_eq!(engine.set_duration(3), 10);
        assert_eq!(engine.set_duration(-500), 10);
        assert_eq!(engine.set_duration(9000), 3600);
        assert_eq!(engine.set_duration(45), 45);
        engine.adjust_duration(-60);
        assert_eq!(engine.duration(), 10);
        engine.apply_preset(600);
        engine.adjust_duration(60);
        assert_eq!(engine.duration(), 660);
    }

    #[test]
    fn idle_display_tracks_duration_changes() {
        let mut engine = timer(300);
        engine.apply_preset(180);
        assert_eq!(engine.centis(), 18_000);
        engine.adjust_duration(10);
        assert_eq!(engine.display(), "03:10.00");
    }

    #[test]
    fn duration_change_while_running_keeps_value() {
        let mut engine = timer(300);
        engine.toggle_play_pause();
        engine.tick();
        engine.apply_preset(60);
        assert_eq!(engine.duration(), 60);
        assert_eq!(engine.centis(), 29_999);
    }
}
