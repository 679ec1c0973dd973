use gloo_timers::callback::Interval;
use retro_timer::clock::current_wall_clock;
use retro_timer::config::{SoundPaths, CLOCK_REFRESH_MS, TICK_MS};
use retro_timer::{AudioDeck, SoundCue};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the state and callbacks for a validated text field bound to an
/// externally owned value.
#[derive(Clone, PartialEq)]
pub struct ValidatedInput {
    /// The current text content of the input field.
    pub text: String,
    /// An optional error message if validation failed.
    pub error: Option<String>,
    /// Callback for the text input's `oninput` event.
    pub on_text_input: Callback<InputEvent>,
    /// Parse the current text and hand a valid value to the owner.
    pub on_commit: Callback<()>,
}

/// Field text and error after a commit. An accepted entry snaps back to
/// `canonical`, since a clamped value may leave the owned value unchanged and
/// the reset effect would never fire. A rejected entry keeps the typed text.
fn committed_field<T>(
    typed: &str,
    canonical: &str,
    parsed: &Result<T, String>,
) -> (String, Option<String>) {
    match parsed {
        Ok(_) => (canonical.to_string(), None),
        Err(err_msg) => (typed.to_string(), Some(err_msg.clone())),
    }
}

/// Text entry that commits parsed values through `on_valid`. The field resets
/// to `canonical` whenever the owned value changes.
#[hook]
pub fn use_validated_input<T: 'static>(
    canonical: String,
    parse_and_validate: Rc<dyn Fn(&str) -> Result<T, String>>,
    on_valid: Callback<T>,
) -> ValidatedInput {
    let text_state_handle = use_state(|| canonical.clone());
    let error_state_handle = use_state(|| None::<String>);

    let on_text_input = {
        let text_setter = text_state_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    let on_commit = {
        let current_text_handle = text_state_handle.clone();
        let error_setter = error_state_handle.clone();
        let canonical = canonical.clone();
        Callback::from(move |_: ()| {
            let parsed = parse_and_validate(&current_text_handle);
            let (text, error) = committed_field(&current_text_handle, &canonical, &parsed);
            current_text_handle.set(text);
            error_setter.set(error);
            if let Ok(parsed_val) = parsed {
                on_valid.emit(parsed_val);
            }
        })
    };

    {
        let text_setter = text_state_handle.clone();
        let error_setter = error_state_handle.clone();
        use_effect_with(canonical, move |canonical| {
            text_setter.set(canonical.clone());
            error_setter.set(None);
            || ()
        });
    }

    ValidatedInput {
        text: (*text_state_handle).clone(),
        error: (*error_state_handle).clone(),
        on_text_input,
        on_commit,
    }
}

/// Fire `on_tick` every engine tick while `running`. The interval is dropped,
/// and so cancelled, as soon as `running` turns false or the component unmounts.
#[hook]
pub fn use_engine_tick(running: bool, on_tick: Callback<()>) {
    use_effect_with(running, move |&running| {
        let interval = running.then(|| Interval::new(TICK_MS, move || on_tick.emit(())));
        move || drop(interval)
    });
}

/// Local time for the status bar, refreshed every minute.
#[hook]
pub fn use_wall_clock() -> String {
    let now = use_state(current_wall_clock);
    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(CLOCK_REFRESH_MS, move || now.set(current_wall_clock()));
            move || drop(interval)
        });
    }
    (*now).clone()
}

/// Shared handle to the mounted audio deck.
#[derive(Clone)]
pub struct AudioHandle(Rc<RefCell<Option<AudioDeck>>>);

impl AudioHandle {
    pub fn play(&self, cue: SoundCue, enabled: bool) {
        if let Some(deck) = self.0.borrow().as_ref() {
            deck.play(cue, enabled);
        }
    }
}

/// Start loading the cue sounds on mount and release them on unmount.
#[hook]
pub fn use_audio_deck(paths: SoundPaths) -> AudioHandle {
    let deck = use_mut_ref(|| None::<AudioDeck>);
    {
        let deck = deck.clone();
        use_effect_with((), move |_| {
            *deck.borrow_mut() = Some(AudioDeck::load(&paths));
            move || {
                deck.borrow_mut().take();
            }
        });
    }
    AudioHandle(deck)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_entry_shows_canonical_value() {
        // "7200" clamps to the 60:00 maximum that is already set.
        let (text, error) = committed_field("7200", "60:00", &Ok::<u32, String>(3600));
        assert_eq!(text, "60:00");
        assert_eq!(error, None);
    }

    #[test]
    fn rejected_entry_keeps_typed_text() {
        let parsed: Result<u32, String> = Err("Invalid duration".to_string());
        let (text, error) = committed_field("abc", "5:00", &parsed);
        assert_eq!(text, "abc");
        assert_eq!(error.as_deref(), Some("Invalid duration"));
    }
}
