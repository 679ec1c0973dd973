//! Best-effort sound cues.
//!
//! Each cue owns one `<audio>` element that starts loading at mount. Whether a
//! cue can play is tracked in [`SoundReadiness`], which the element's load
//! listeners update asynchronously. Nothing here ever returns an error to
//! the UI: failures are logged and the cue is skipped.

use crate::config::SoundPaths;
use crate::error::AudioError;
use log::{debug, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, HtmlAudioElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Click,
    Complete,
    Lap,
}

impl SoundCue {
    pub const ALL: [SoundCue; 3] = [SoundCue::Click, SoundCue::Complete, SoundCue::Lap];

    pub fn name(self) -> &'static str {
        match self {
            SoundCue::Click => "click",
            SoundCue::Complete => "complete",
            SoundCue::Lap => "lap",
        }
    }

    fn index(self) -> usize {
        match self {
            SoundCue::Click => 0,
            SoundCue::Complete => 1,
            SoundCue::Lap => 2,
        }
    }

    fn source(self, paths: &SoundPaths) -> &str {
        match self {
            SoundCue::Click => &paths.click,
            SoundCue::Complete => &paths.complete,
            SoundCue::Lap => &paths.lap,
        }
    }
}

/// Per-cue "can play through" flags. Everything starts not ready.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoundReadiness {
    ready: [bool; 3],
}

impl SoundReadiness {
    pub fn mark_ready(&mut self, cue: SoundCue) {
        self.ready[cue.index()] = true;
    }

    pub fn mark_failed(&mut self, cue: SoundCue) {
        self.ready[cue.index()] = false;
    }

    pub fn is_ready(&self, cue: SoundCue) -> bool {
        self.ready[cue.index()]
    }

    /// Playback guard: sound must be enabled and the cue loaded.
    pub fn should_play(&self, cue: SoundCue, enabled: bool) -> bool {
        enabled && self.is_ready(cue)
    }
}

/// Flip the global sound toggle. Returns the new state and the cue to play:
/// a click when sound comes back on, nothing when muting.
pub fn toggle_sound(enabled: bool) -> (bool, Option<SoundCue>) {
    let next = !enabled;
    (next, next.then_some(SoundCue::Click))
}

type Listener = Closure<dyn FnMut(Event)>;

// "none" would stop loading at `suspend`, so `canplaythrough` never fires.
const PRELOAD: &str = "auto";
const READY_EVENT: &str = "canplaythrough";
const ERROR_EVENT: &str = "error";

/// One loaded (or loading) audio element and the listeners feeding readiness.
struct SoundSlot {
    cue: SoundCue,
    element: HtmlAudioElement,
    on_ready: Listener,
    on_error: Listener,
}

impl SoundSlot {
    fn load(
        cue: SoundCue,
        src: &str,
        readiness: Rc<RefCell<SoundReadiness>>,
    ) -> Result<Self, AudioError> {
        let create_err = |e: JsValue| AudioError::Create {
            cue: cue.name(),
            reason: format!("{:?}", e),
        };

        let element = HtmlAudioElement::new().map_err(create_err)?;
        element.set_preload(PRELOAD);

        let on_ready: Listener = {
            let readiness = readiness.clone();
            Closure::new(move |_: Event| {
                debug!("Sound {} ready", cue.name());
                readiness.borrow_mut().mark_ready(cue);
            })
        };
        let on_error: Listener = Closure::new(move |_: Event| {
            warn!("{}", AudioError::Load { cue: cue.name() });
            readiness.borrow_mut().mark_failed(cue);
        });

        element
            .add_event_listener_with_callback(READY_EVENT, on_ready.as_ref().unchecked_ref())
            .map_err(create_err)?;
        element
            .add_event_listener_with_callback(ERROR_EVENT, on_error.as_ref().unchecked_ref())
            .map_err(create_err)?;

        element.set_src(src);
        element.load();

        Ok(Self {
            cue,
            element,
            on_ready,
            on_error,
        })
    }

    /// Rewind and play. A rejected play promise is only logged.
    fn play(&self) -> Result<(), AudioError> {
        let cue = self.cue.name();
        self.element.set_current_time(0.0);
        let promise = self.element.play().map_err(|e| AudioError::Play {
            cue,
            reason: format!("{:?}", e),
        })?;

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                warn!(
                    "{}",
                    AudioError::Play {
                        cue,
                        reason: format!("{:?}", e),
                    }
                );
            }
        });
        Ok(())
    }
}

impl Drop for SoundSlot {
    fn drop(&mut self) {
        let _ = self
            .element
            .remove_event_listener_with_callback(READY_EVENT, self.on_ready.as_ref().unchecked_ref());
        let _ = self
            .element
            .remove_event_listener_with_callback(ERROR_EVENT, self.on_error.as_ref().unchecked_ref());
        let _ = self.element.pause();
        self.element.set_src("");
    }
}

/// The three cue slots. Dropping the deck releases every element.
pub struct AudioDeck {
    slots: Vec<SoundSlot>,
    readiness: Rc<RefCell<SoundReadiness>>,
}

impl AudioDeck {
    /// Start loading every cue. Slots that cannot even be created stay not-ready.
    pub fn load(paths: &SoundPaths) -> Self {
        let readiness = Rc::new(RefCell::new(SoundReadiness::default()));
        let mut slots = Vec::with_capacity(SoundCue::ALL.len());

        for cue in SoundCue::ALL {
            match SoundSlot::load(cue, cue.source(paths), readiness.clone()) {
                Ok(slot) => slots.push(slot),
                Err(e) => {
                    warn!("{}", e);
                    readiness.borrow_mut().mark_failed(cue);
                }
            }
        }

        Self { slots, readiness }
    }

    /// Play `cue` if sound is enabled and the cue finished loading.
    pub fn play(&self, cue: SoundCue, enabled: bool) {
        if !self.readiness.borrow().should_play(cue, enabled) {
            debug!("Skipping {} sound", cue.name());
            return;
        }
        if let Some(slot) = self.slots.iter().find(|s| s.cue == cue) {
            if let Err(e) = slot.play() {
                warn!("{}", e);
            }
        }
    }
}
