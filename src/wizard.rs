//! Report Wizard
//!
//! Step sequencing for the report form. The sequence starts as
//! `[User, ClientInfo]` and is fixed once Client Info is saved, based on which
//! report sections were chosen. Position changes are mirrored into a
//! [`NavigationStack`] so the platform back action lands on the right step.

use crate::error::WizardError;

/// One screen of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    User,
    ClientInfo,
    Stations,
    Rodent,
    Service,
    Signature,
    Success,
}

impl Step {
    pub fn title(self) -> &'static str {
        match self {
            Step::User => "Operator Info",
            Step::ClientInfo => "Client Info",
            Step::Stations => "Stations",
            Step::Rodent => "Rodent Control",
            Step::Service => "Fumigation Service",
            Step::Signature => "Client Signature",
            Step::Success => "Done",
        }
    }
}

/// Optional report sections chosen on Client Info
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sections {
    pub inspection: bool,
    pub fumigation: bool,
}

pub fn initial_sequence() -> Vec<Step> {
    vec![Step::User, Step::ClientInfo]
}

/// Full step sequence for a section selection.
///
/// Inspection contributes Stations and Rodent, fumigation contributes
/// Service; Signature and Success always close the report.
pub fn sequence_for(sections: Sections) -> Result<Vec<Step>, WizardError> {
    if !sections.inspection && !sections.fumigation {
        return Err(WizardError::NoSections);
    }

    let mut steps = initial_sequence();
    if sections.inspection {
        steps.extend([Step::Stations, Step::Rodent]);
    }
    if sections.fumigation {
        steps.push(Step::Service);
    }
    steps.extend([Step::Signature, Step::Success]);
    Ok(steps)
}

/// History-like storage of step positions
pub trait NavigationStack {
    /// Add an entry the back action can return to
    fn push(&mut self, index: usize);
    /// Overwrite the current entry
    fn replace(&mut self, index: usize);
}

/// Current step plus the ordered step list
#[derive(Debug)]
pub struct WizardController<N: NavigationStack> {
    steps: Vec<Step>,
    index: usize,
    nav: N,
}

impl<N: NavigationStack> WizardController<N> {
    /// Start at the first step and record it as the base history entry
    pub fn new(mut nav: N) -> Self {
        nav.push(0);
        Self {
            steps: initial_sequence(),
            index: 0,
            nav,
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Step {
        self.steps[self.index]
    }

    pub fn nav(&self) -> &N {
        &self.nav
    }

    /// Fix the sequence for the chosen sections; the position is kept
    pub fn apply_sections(&mut self, sections: Sections) -> Result<(), WizardError> {
        self.steps = sequence_for(sections)?;
        self.index = self.clamp(self.index);
        Ok(())
    }

    /// Move forward one step and push a history entry. No-op on the last step.
    pub fn advance(&mut self) {
        if self.index + 1 >= self.steps.len() {
            return;
        }
        self.index += 1;
        self.nav.push(self.index);
    }

    /// Move back one step, overwriting the current history entry
    pub fn retreat(&mut self) {
        self.index = self.index.saturating_sub(1);
        self.nav.replace(self.index);
    }

    /// Jump directly to `index`, overwriting the current history entry
    pub fn jump_to(&mut self, index: usize) {
        self.index = self.clamp(index);
        self.nav.replace(self.index);
    }

    /// Platform back action; `state` is the index stored with the entry
    pub fn on_history_pop(&mut self, state: Option<usize>) {
        self.index = match state {
            Some(index) => self.clamp(index),
            None => self.index.saturating_sub(1),
        };
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.steps.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Entry {
        Push(usize),
        Replace(usize),
    }

    /// Records calls instead of touching browser history
    #[derive(Debug, Default)]
    pub struct RecordingStack {
        pub calls: Vec<Entry>,
    }

    impl RecordingStack {
        fn pushes(&self) -> usize {
            self.calls.iter().filter(|c| matches!(c, Entry::Push(_))).count()
        }
    }

    impl NavigationStack for RecordingStack {
        fn push(&mut self, index: usize) {
            self.calls.push(Entry::Push(index));
        }

        fn replace(&mut self, index: usize) {
            self.calls.push(Entry::Replace(index));
        }
    }

    fn controller() -> WizardController<RecordingStack> {
        WizardController::new(RecordingStack::default())
    }

    const INSPECTION: Sections = Sections { inspection: true, fumigation: false };
    const FUMIGATION: Sections = Sections { inspection: false, fumigation: true };
    const BOTH: Sections = Sections { inspection: true, fumigation: true };

    #[test]
    fn test_initial_sequence() {
        let wizard = controller();
        assert_eq!(wizard.steps(), &[Step::User, Step::ClientInfo]);
        assert_eq!(wizard.current(), Step::User);
        assert_eq!(wizard.nav().calls, vec![Entry::Push(0)]);
    }

    #[test]
    fn test_no_sections_rejected() {
        assert_eq!(sequence_for(Sections::default()), Err(WizardError::NoSections));

        let mut wizard = controller();
        wizard.advance();
        assert!(wizard.apply_sections(Sections::default()).is_err());
        assert_eq!(wizard.steps(), &[Step::User, Step::ClientInfo]);
        assert_eq!(wizard.current(), Step::ClientInfo);
    }

    #[test]
    fn test_inspection_only_sequence() {
        assert_eq!(
            sequence_for(INSPECTION).unwrap(),
            vec![Step::User, Step::ClientInfo, Step::Stations, Step::Rodent, Step::Signature, Step::Success]
        );
    }

    #[test]
    fn test_fumigation_only_sequence() {
        assert_eq!(
            sequence_for(FUMIGATION).unwrap(),
            vec![Step::User, Step::ClientInfo, Step::Service, Step::Signature, Step::Success]
        );
    }

    #[test]
    fn test_both_sections_sequence() {
        assert_eq!(
            sequence_for(BOTH).unwrap(),
            vec![
                Step::User,
                Step::ClientInfo,
                Step::Stations,
                Step::Rodent,
                Step::Service,
                Step::Signature,
                Step::Success
            ]
        );
    }

    #[test]
    fn test_walk_through_full_report() {
        let mut wizard = controller();
        wizard.advance();
        wizard.apply_sections(BOTH).unwrap();

        let mut visited = vec![wizard.current()];
        while wizard.current() != Step::Success {
            wizard.advance();
            visited.push(wizard.current());
        }
        assert_eq!(visited, sequence_for(BOTH).unwrap()[1..].to_vec());
    }

    #[test]
    fn test_advance_pushes_history() {
        let mut wizard = controller();
        wizard.advance();
        assert_eq!(wizard.nav().calls, vec![Entry::Push(0), Entry::Push(1)]);
    }

    #[test]
    fn test_advance_stops_at_success() {
        let mut wizard = controller();
        wizard.advance();
        wizard.apply_sections(FUMIGATION).unwrap();
        for _ in 0..10 {
            wizard.advance();
        }
        assert_eq!(wizard.current(), Step::Success);
        assert_eq!(wizard.nav().pushes(), 5);
    }

    #[test]
    fn test_repeated_retreat_floors_at_zero_without_pushing() {
        let mut wizard = controller();
        wizard.advance();
        wizard.apply_sections(INSPECTION).unwrap();
        wizard.advance();
        assert_eq!(wizard.index(), 2);
        let pushes_before = wizard.nav().pushes();

        wizard.retreat();
        wizard.retreat();
        wizard.retreat();
        wizard.retreat();

        assert_eq!(wizard.index(), 0);
        assert_eq!(wizard.nav().pushes(), pushes_before);
        assert_eq!(
            &wizard.nav().calls[pushes_before..],
            &[Entry::Replace(1), Entry::Replace(0), Entry::Replace(0), Entry::Replace(0)]
        );
    }

    #[test]
    fn test_jump_to_replaces_entry() {
        let mut wizard = controller();
        wizard.advance();
        wizard.apply_sections(INSPECTION).unwrap();
        wizard.advance();
        wizard.advance();
        wizard.jump_to(1);

        assert_eq!(wizard.current(), Step::ClientInfo);
        assert_eq!(wizard.nav().calls.last(), Some(&Entry::Replace(1)));
    }

    #[test]
    fn test_restart_from_success() {
        let mut wizard = controller();
        wizard.advance();
        wizard.apply_sections(FUMIGATION).unwrap();
        while wizard.current() != Step::Success {
            wizard.advance();
        }
        wizard.jump_to(0);
        assert_eq!(wizard.current(), Step::User);
    }

    #[test]
    fn test_jump_past_end_is_clamped() {
        let mut wizard = controller();
        wizard.jump_to(9);
        assert_eq!(wizard.current(), Step::ClientInfo);
    }

    #[test]
    fn test_history_pop_uses_stored_index() {
        let mut wizard = controller();
        wizard.advance();
        wizard.apply_sections(BOTH).unwrap();
        wizard.advance();
        wizard.advance();
        let calls_before = wizard.nav().calls.len();

        wizard.on_history_pop(Some(2));
        assert_eq!(wizard.current(), Step::Stations);
        // The browser already moved; nothing is written back
        assert_eq!(wizard.nav().calls.len(), calls_before);
    }

    #[test]
    fn test_history_pop_without_state_steps_back() {
        let mut wizard = controller();
        wizard.advance();
        wizard.on_history_pop(None);
        assert_eq!(wizard.index(), 0);
        wizard.on_history_pop(None);
        assert_eq!(wizard.index(), 0);
    }

    #[test]
    fn test_history_pop_beyond_sequence_is_clamped() {
        let mut wizard = controller();
        wizard.on_history_pop(Some(5));
        assert_eq!(wizard.current(), Step::ClientInfo);
    }
}
