//! Pure Yew view components for the retro timer.
//!
//! Everything here renders from props; state and side effects stay in
//! `main.rs` and the hooks.

use crate::hooks::ValidatedInput;
use retro_timer::config::{Preset, MAX_DURATION_SEC, MIN_DURATION_SEC, NUDGE_DELTA, SLIDER_STEP_SEC, STEP_DELTAS};
use retro_timer::{format_centis, format_duration, EngineState, Lap, LapLog, Mode};
use yew::prelude::*;

/// Label for a fine-adjustment button, e.g. `-1m` or `+10s`.
fn step_label(delta: i32) -> String {
    let sign = if delta < 0 { '-' } else { '+' };
    let magnitude = delta.unsigned_abs();
    if magnitude % 60 == 0 {
        format!("{}{}m", sign, magnitude / 60)
    } else {
        format!("{}{}s", sign, magnitude)
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBarProps {
    pub status_text: AttrValue,
    pub clock: AttrValue,
}

#[function_component(StatusBar)]
pub fn status_bar(props: &StatusBarProps) -> Html {
    html! {
        <div class="status-bar">
            <span class="status-text">{ props.status_text.clone() }</span>
            <span class="wall-clock">{ props.clock.clone() }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimeDisplayProps {
    pub mode: Mode,
    pub text: AttrValue,
    pub completed: bool,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    html! {
        <div class="display">
            <h1 class="mode-title">{ props.mode.label() }</h1>
            <div class={classes!("digital-display", props.completed.then_some("completed"))}>
                { props.text.clone() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModeButtonsProps {
    pub mode: Mode,
    pub on_select: Callback<Mode>,
}

#[function_component(ModeButtons)]
pub fn mode_buttons(props: &ModeButtonsProps) -> Html {
    let button = |mode: Mode| {
        let on_select = props.on_select.clone();
        html! {
            <button
                class={classes!("mode-button", (props.mode == mode).then_some("active"))}
                onclick={Callback::from(move |_: MouseEvent| on_select.emit(mode))}
            >
                { mode.label() }
            </button>
        }
    };

    html! {
        <div class="mode-buttons">
            { button(Mode::Stopwatch) }
            { button(Mode::Timer) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimerSettingsProps {
    pub duration: u32,
    pub presets: Vec<Preset>,
    pub entry: ValidatedInput,
    pub on_preset: Callback<u32>,
    pub on_adjust: Callback<i32>,
    pub on_slider: Callback<InputEvent>,
}

/// Duration panel: presets, step buttons, slider and a typed entry.
#[function_component(TimerSettings)]
pub fn timer_settings(props: &TimerSettingsProps) -> Html {
    let adjust_button = |delta: i32, label: String| {
        let on_adjust = props.on_adjust.clone();
        html! {
            <button class="adjust-button"
                onclick={Callback::from(move |_: MouseEvent| on_adjust.emit(delta))}>
                { label }
            </button>
        }
    };

    let on_entry_change = props.entry.on_commit.reform(|_: Event| ());
    let on_entry_keydown = {
        let on_commit = props.entry.on_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_commit.emit(());
            }
        })
    };

    html! {
        <div class="timer-settings">
            <div class="set-time">
                <span class="set-time-label">{ "SET TIME:" }</span>
                <span class="set-time-value">{ format_duration(props.duration) }</span>
            </div>

            <div class="presets">
                { props.presets.iter().map(|preset| {
                    let on_preset = props.on_preset.clone();
                    let seconds = preset.seconds;
                    html! {
                        <button
                            key={preset.label.clone()}
                            class={classes!("preset-button", (props.duration == seconds).then_some("active"))}
                            onclick={Callback::from(move |_: MouseEvent| on_preset.emit(seconds))}
                        >
                            { preset.label.clone() }
                        </button>
                    }
                }).collect::<Html>() }
            </div>

            <div class="fine-adjust">
                { STEP_DELTAS.iter().map(|&d| adjust_button(d, step_label(d))).collect::<Html>() }
            </div>

            <div class="slider-with-value">
                { adjust_button(-NUDGE_DELTA, "−".to_string()) }
                <input type="range"
                    min={MIN_DURATION_SEC.to_string()}
                    max={MAX_DURATION_SEC.to_string()}
                    step={SLIDER_STEP_SEC.to_string()}
                    value={props.duration.to_string()}
                    oninput={props.on_slider.clone()}
                />
                { adjust_button(NUDGE_DELTA, "+".to_string()) }
            </div>

            <div class="duration-entry">
                <input type="text"
                    value={props.entry.text.clone()}
                    oninput={props.entry.on_text_input.clone()}
                    onchange={on_entry_change}
                    onkeydown={on_entry_keydown}
                />
                if let Some(err) = &props.entry.error {
                    <div class="error-message">{ err }</div>
                }
            </div>
        </div>
    }
}

/// Renders a single lap row
fn render_lap_row(lap: &Lap) -> Html {
    html! {
        <div class="lap-row" key={lap.number()}>
            <span class="lap-number">{ format!("Lap {}", lap.number()) }</span>
            <span class="lap-time">{ format_centis(lap.centis()) }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LapListProps {
    pub laps: LapLog,
}

#[function_component(LapList)]
pub fn lap_list(props: &LapListProps) -> Html {
    html! {
        <div class="laps">
            <div class="laps-header">
                <span>{ "LAP" }</span>
                <span>{ "TIME" }</span>
            </div>
            if props.laps.is_empty() {
                <div class="no-laps">{ "No laps recorded" }</div>
            } else {
                { props.laps.newest_first().map(render_lap_row).collect::<Html>() }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ControlBarProps {
    pub mode: Mode,
    pub state: EngineState,
    pub settings_open: bool,
    pub on_stop: Callback<MouseEvent>,
    pub on_play_pause: Callback<MouseEvent>,
    pub on_lap: Callback<MouseEvent>,
    pub on_toggle_settings: Callback<MouseEvent>,
}

/// Stop, play/pause, and either lap (stopwatch) or settings (timer).
#[function_component(ControlBar)]
pub fn control_bar(props: &ControlBarProps) -> Html {
    let running = props.state == EngineState::Running;

    html! {
        <div class="controls">
            <button class="control stop" onclick={props.on_stop.clone()}>{ "■" }</button>
            <button
                class={classes!("control", if running { "pause" } else { "play" })}
                onclick={props.on_play_pause.clone()}
            >
                { if running { "❚❚" } else { "▶" } }
            </button>
            if props.mode == Mode::Stopwatch {
                <button class="control lap" disabled={!running} onclick={props.on_lap.clone()}>
                    { "⚑" }
                </button>
            } else {
                <button
                    class={classes!("control", "settings", props.settings_open.then_some("open"))}
                    onclick={props.on_toggle_settings.clone()}
                >
                    { "⏲" }
                </button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SoundToggleProps {
    pub enabled: bool,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(SoundToggle)]
pub fn sound_toggle(props: &SoundToggleProps) -> Html {
    html! {
        <button class="sound-toggle" onclick={props.on_toggle.clone()}>
            { if props.enabled { "🔊" } else { "🔇" } }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_labels() {
        let labels: Vec<String> = STEP_DELTAS.iter().map(|&d| step_label(d)).collect();
        assert_eq!(labels, vec!["-1m", "-10s", "+10s", "+1m"]);
        assert_eq!(step_label(NUDGE_DELTA), "+1s");
    }
}
