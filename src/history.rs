//! Browser History Bridge
//!
//! Stores the wizard position in `history.state` so the platform back action
//! returns to the previous step instead of leaving the form.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::wizard::NavigationStack;

/// Payload written with each history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepState {
    pub step: usize,
}

/// `window.history` as a [`NavigationStack`]
#[derive(Default)]
pub struct BrowserHistory {
    history: Option<web_sys::History>,
}

impl BrowserHistory {
    pub fn new() -> Self {
        let history = web_sys::window().and_then(|w| w.history().ok());
        if history.is_none() {
            log::warn!("[History] window.history unavailable; back navigation disabled");
        }
        Self { history }
    }

    fn state(index: usize) -> Option<JsValue> {
        serde_wasm_bindgen::to_value(&StepState { step: index })
            .map_err(|e| log::error!("[History] Could not encode state: {}", e))
            .ok()
    }
}

impl NavigationStack for BrowserHistory {
    fn push(&mut self, index: usize) {
        let (Some(history), Some(state)) = (&self.history, Self::state(index)) else {
            return;
        };
        if let Err(e) = history.push_state(&state, "") {
            log::warn!("[History] pushState failed: {:?}", e);
        }
    }

    fn replace(&mut self, index: usize) {
        let (Some(history), Some(state)) = (&self.history, Self::state(index)) else {
            return;
        };
        if let Err(e) = history.replace_state(&state, "") {
            log::warn!("[History] replaceState failed: {:?}", e);
        }
    }
}

/// Step index carried by a `popstate` event, if it was written by us
pub fn popped_step(event: &web_sys::PopStateEvent) -> Option<usize> {
    let state = event.state();
    if state.is_null() || state.is_undefined() {
        return None;
    }
    serde_wasm_bindgen::from_value::<StepState>(state)
        .ok()
        .map(|s| s.step)
}
