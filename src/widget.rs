//! The widget's state object and its reducer.
//!
//! [`Widget`] is owned by the root component through `use_reducer`. Every
//! change goes through [`WidgetAction`]; cues emitted by the engine are kept
//! as numbered [`CueEvent`]s so an effect can play each one exactly once.

use crate::audio::SoundCue;
use crate::engine::{Engine, EngineState, Mode};
use log::debug;
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAction {
    SwitchMode(Mode),
    TogglePlayPause,
    StopReset,
    RecordLap,
    AdjustDuration(i32),
    ApplyPreset(u32),
    /// Direct value from the slider or text entry. Plays no cue.
    SetDuration(i64),
    ToggleSettings,
    Tick,
}

/// A cue emitted by an action, tagged with its emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueEvent {
    pub seq: u64,
    pub cue: SoundCue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub engine: Engine,
    settings_open: bool,
    last_cue: Option<CueEvent>,
    cues_emitted: u64,
}

impl Widget {
    pub fn new(duration: u32) -> Self {
        Self {
            engine: Engine::new(duration),
            settings_open: false,
            last_cue: None,
            cues_emitted: 0,
        }
    }

    pub fn last_cue(&self) -> Option<CueEvent> {
        self.last_cue
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    /// Timer settings show while an idle timer is being configured, or when
    /// explicitly opened.
    pub fn settings_visible(&self) -> bool {
        self.engine.mode() == Mode::Timer
            && (self.settings_open || self.engine.state() == EngineState::Idle)
    }

    fn emit(&mut self, cue: Option<SoundCue>) {
        if let Some(cue) = cue {
            self.cues_emitted += 1;
            debug!("Cue #{}: {}", self.cues_emitted, cue.name());
            self.last_cue = Some(CueEvent {
                seq: self.cues_emitted,
                cue,
            });
        }
    }

    pub fn apply(&mut self, action: WidgetAction) {
        let cue = match action {
            WidgetAction::SwitchMode(mode) => {
                let cue = self.engine.switch_mode(mode);
                if cue.is_some() {
                    self.settings_open = false;
                }
                cue
            }
            WidgetAction::TogglePlayPause => Some(self.engine.toggle_play_pause()),
            WidgetAction::StopReset => Some(self.engine.stop_reset()),
            WidgetAction::RecordLap => self.engine.record_lap(),
            WidgetAction::AdjustDuration(delta) => Some(self.engine.adjust_duration(delta)),
            WidgetAction::ApplyPreset(seconds) => Some(self.engine.apply_preset(seconds)),
            WidgetAction::SetDuration(seconds) => {
                self.engine.set_duration(seconds);
                None
            }
            WidgetAction::ToggleSettings => {
                self.settings_open = !self.settings_open;
                None
            }
            WidgetAction::Tick => self.engine.tick(),
        };
        self.emit(cue);
    }
}

impl Reducible for Widget {
    type Action = WidgetAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        // A stray tick after leaving `running` must not re-render.
        if action == WidgetAction::Tick && !self.engine.is_running() {
            return self;
        }
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
