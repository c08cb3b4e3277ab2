//! Application Context
//!
//! Wizard navigation shared via the Leptos Context API.

use leptos::prelude::*;

use crate::error::WizardError;
use crate::history::BrowserHistory;
use crate::wizard::{Sections, Step, WizardController};

/// Wizard handle provided to every step view.
///
/// The controller itself is not reactive; each transition copies the current
/// step and position into signals the views can track.
#[derive(Clone, Copy)]
pub struct WizardContext {
    controller: StoredValue<WizardController<BrowserHistory>, LocalStorage>,
    /// Step being shown - read
    pub step: ReadSignal<Step>,
    /// Step being shown - write
    set_step: WriteSignal<Step>,
    /// (index, total steps) - read
    pub position: ReadSignal<(usize, usize)>,
    /// (index, total steps) - write
    set_position: WriteSignal<(usize, usize)>,
}

impl WizardContext {
    pub fn new() -> Self {
        let controller = WizardController::new(BrowserHistory::new());
        let (step, set_step) = signal(controller.current());
        let (position, set_position) = signal((controller.index(), controller.steps().len()));
        Self {
            controller: StoredValue::new_local(controller),
            step,
            set_step,
            position,
            set_position,
        }
    }

    fn transition(&self, f: impl FnOnce(&mut WizardController<BrowserHistory>)) {
        let snapshot = self.controller.try_update_value(|c| {
            f(c);
            (c.current(), c.index(), c.steps().len())
        });
        if let Some((step, index, total)) = snapshot {
            log::debug!("[Wizard] Step {}/{}: {:?}", index + 1, total, step);
            self.set_step.set(step);
            self.set_position.set((index, total));
        }
    }

    /// Called by a step after its backend write succeeded
    pub fn advance(&self) {
        self.transition(|c| c.advance());
    }

    pub fn retreat(&self) {
        self.transition(|c| c.retreat());
    }

    pub fn jump_to(&self, index: usize) {
        self.transition(|c| c.jump_to(index));
    }

    /// Fix the remaining steps once the report sections are known
    pub fn apply_sections(&self, sections: Sections) -> Result<(), WizardError> {
        let mut result = Ok(());
        self.transition(|c| result = c.apply_sections(sections));
        result
    }

    /// Platform back action
    pub fn on_history_pop(&self, state: Option<usize>) {
        self.transition(|c| c.on_history_pop(state));
    }
}
