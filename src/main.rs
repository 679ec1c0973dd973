//! Main module for the retro timer application using Yew.
//! Wires UI components, state hooks, and side-effect logic.

use retro_timer::config::CONFIG;
use retro_timer::utils::{parse_duration_input, validate_slider_value};
use retro_timer::config::log_level;
use retro_timer::{format_duration, toggle_sound, EngineState, Mode, Widget, WidgetAction};
use log::{info, warn};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod hooks;

use components::{ControlBar, LapList, ModeButtons, SoundToggle, StatusBar, TimeDisplay, TimerSettings};
use hooks::{use_audio_deck, use_engine_tick, use_validated_input, use_wall_clock};

/// Build a click handler that dispatches a fixed action.
fn dispatch_on_click(
    dispatcher: &UseReducerDispatcher<Widget>,
    action: WidgetAction,
) -> Callback<MouseEvent> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
}

/// Primary widget component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let widget = use_reducer(|| Widget::new(CONFIG.default_duration));
    let dispatcher = widget.dispatcher();
    let sound_enabled = use_state(|| true);
    let audio = use_audio_deck(CONFIG.sounds.clone());
    let clock = use_wall_clock();

    let engine = &widget.engine;
    let mode = engine.mode();
    let state = engine.state();

    // Engine tick, armed only while running
    {
        let dispatcher = dispatcher.clone();
        use_engine_tick(
            engine.is_running(),
            Callback::from(move |_: ()| dispatcher.dispatch(WidgetAction::Tick)),
        );
    }

    // Play each emitted cue once
    {
        let audio = audio.clone();
        let enabled = *sound_enabled;
        use_effect_with(widget.last_cue(), move |cue| {
            if let Some(event) = cue {
                audio.play(event.cue, enabled);
            }
            || ()
        });
    }

    let on_select_mode = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |mode: Mode| dispatcher.dispatch(WidgetAction::SwitchMode(mode)))
    };
    let on_preset = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |seconds: u32| dispatcher.dispatch(WidgetAction::ApplyPreset(seconds)))
    };
    let on_adjust = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |delta: i32| dispatcher.dispatch(WidgetAction::AdjustDuration(delta)))
    };
    let on_slider = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match validate_slider_value(&input.value()) {
                Ok(seconds) => dispatcher.dispatch(WidgetAction::SetDuration(seconds)),
                Err(err) => warn!("Ignoring slider value: {}", err),
            }
        })
    };

    let duration_entry = {
        let dispatcher = dispatcher.clone();
        let parse: Rc<dyn Fn(&str) -> Result<u32, String>> =
            Rc::new(|text: &str| parse_duration_input(text).map_err(|e| e.to_string()));
        use_validated_input(
            format_duration(engine.duration()),
            parse,
            Callback::from(move |seconds: u32| {
                dispatcher.dispatch(WidgetAction::SetDuration(seconds as i64))
            }),
        )
    };

    let on_toggle_sound = {
        let sound_enabled = sound_enabled.clone();
        let audio = audio.clone();
        Callback::from(move |_: MouseEvent| {
            let (enabled, cue) = toggle_sound(*sound_enabled);
            sound_enabled.set(enabled);
            if let Some(cue) = cue {
                audio.play(cue, enabled);
            }
        })
    };

    html! {
        <div class="retro-device">
            <div class="screen">
                <StatusBar status_text={CONFIG.status_text.clone()} clock={clock} />
                <SoundToggle enabled={*sound_enabled} on_toggle={on_toggle_sound} />

                <div class="main-display">
                    <TimeDisplay
                        mode={mode}
                        text={engine.display()}
                        completed={state == EngineState::Completed}
                    />

                    <ModeButtons mode={mode} on_select={on_select_mode} />

                    if widget.settings_visible() {
                        <TimerSettings
                            duration={engine.duration()}
                            presets={CONFIG.presets.clone()}
                            entry={duration_entry}
                            on_preset={on_preset}
                            on_adjust={on_adjust}
                            on_slider={on_slider}
                        />
                    }

                    if mode == Mode::Stopwatch {
                        <LapList laps={engine.laps().clone()} />
                    }
                </div>

                <ControlBar
                    mode={mode}
                    state={state}
                    settings_open={widget.settings_open()}
                    on_stop={dispatch_on_click(&dispatcher, WidgetAction::StopReset)}
                    on_play_pause={dispatch_on_click(&dispatcher, WidgetAction::TogglePlayPause)}
                    on_lap={dispatch_on_click(&dispatcher, WidgetAction::RecordLap)}
                    on_toggle_settings={dispatch_on_click(&dispatcher, WidgetAction::ToggleSettings)}
                />
            </div>
        </div>
    }
}

#[function_component]
pub fn App() -> Html {
    html! { <Main /> }
}

/// Entry point: installs the panic hook and logger, then mounts the widget.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log_level()));
    info!("Mounting retro timer");
    yew::Renderer::<App>::new().render();
}
