//! Debounced Lookups
//!
//! Delays a remote lookup until the input has been stable for a fixed interval.
//! A newer input cancels the pending timer, and every lookup carries a
//! generation ticket so a slow response for an older input can be ignored.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::ApiResult;

/// Quiet period before an autocomplete lookup fires
pub const LOOKUP_DELAY: Duration = Duration::from_millis(500);

/// Something that can run a task later. Dropping the handle cancels the task.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser `setTimeout` via gloo-timers
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}

/// Identifies one scheduled lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket(u64);

/// Shared counter; only the newest ticket is current
#[derive(Debug, Clone, Default)]
pub struct Generation(Rc<Cell<u64>>);

impl Generation {
    fn bump(&self) -> LookupTicket {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        LookupTicket(next)
    }

    pub fn is_current(&self, ticket: LookupTicket) -> bool {
        self.0.get() == ticket.0
    }
}

/// What an input change did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChange {
    /// A lookup will run after the quiet period
    Scheduled,
    /// Input is empty: previous results should be cleared now
    Cleared,
    /// Same value as last time; nothing was rescheduled
    Unchanged,
}

pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: Option<S::Handle>,
    generation: Generation,
    last: Option<String>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: None,
            generation: Generation::default(),
            last: None,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation.clone()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a value whose lookup result is already known, such as a
    /// field prefilled from saved data. Nothing is scheduled.
    pub fn seed(&mut self, value: &str) {
        self.last = Some(value.to_string());
    }

    /// Feed the latest input value.
    ///
    /// A value equal to the previous one is ignored. Otherwise any pending
    /// lookup is cancelled and any in-flight one becomes stale, and a
    /// non-empty value schedules `lookup(value, ticket)` after the delay.
    pub fn input<F>(&mut self, value: &str, lookup: F) -> InputChange
    where
        F: FnOnce(String, LookupTicket) + 'static,
    {
        if self.last.as_deref() == Some(value) {
            return InputChange::Unchanged;
        }
        self.last = Some(value.to_string());
        self.pending = None;
        let ticket = self.generation.bump();

        if value.is_empty() {
            return InputChange::Cleared;
        }

        let value = value.to_string();
        let task: Box<dyn FnOnce()> = Box::new(move || lookup(value, ticket));
        self.pending = Some(self.scheduler.schedule(self.delay, task));
        InputChange::Scheduled
    }

    /// Drop the pending lookup and invalidate in-flight results
    pub fn cancel(&mut self) {
        self.pending = None;
        self.last = None;
        self.generation.bump();
    }
}

// ========================
// Leptos Hook
// ========================

/// Run `lookup` for the debounced value of `input`.
///
/// `input` should only notify on real changes (a [`Memo`] over a form field).
/// Its value at mount is taken as already resolved, so a prefilled form is not
/// looked up again. `apply` receives the first match, or `None` when the input
/// is cleared, the lookup finds nothing, or it fails. Results for superseded
/// inputs are discarded. The timer is cancelled when the owning component
/// unmounts.
pub fn use_debounced_lookup<T, F, Fut>(
    input: Signal<String>,
    lookup: F,
    apply: impl Fn(Option<T>) + Copy + 'static,
    set_loading: WriteSignal<bool>,
) where
    T: 'static,
    F: Fn(String) -> Fut + Copy + 'static,
    Fut: Future<Output = ApiResult<Option<T>>> + 'static,
{
    let debouncer = StoredValue::new_local(Debouncer::new(TimeoutScheduler, LOOKUP_DELAY));

    Effect::new(move |prev: Option<()>| {
        let value = input.get();
        if prev.is_none() {
            debouncer.try_update_value(|d| d.seed(value.trim()));
            return;
        }
        let change = debouncer.try_update_value(|d| {
            let generation = d.generation();
            d.input(value.trim(), move |query, ticket| {
                set_loading.set(true);
                spawn_local(async move {
                    let result = lookup(query).await;
                    if !generation.is_current(ticket) {
                        log::debug!("[Lookup] Discarding stale response");
                        return;
                    }
                    set_loading.set(false);
                    match result {
                        Ok(found) => apply(found),
                        Err(e) => {
                            log::warn!("[Lookup] Failed: {}", e);
                            apply(None);
                        }
                    }
                });
            })
        });

        if change == Some(InputChange::Cleared) {
            set_loading.set(false);
            apply(None);
        }
    });

    on_cleanup(move || {
        debouncer.try_update_value(|d| d.cancel());
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Task {
        due: u64,
        cancelled: Rc<Cell<bool>>,
        run: Option<Box<dyn FnOnce()>>,
    }

    /// Deterministic clock; tasks run only when `advance` passes their due time
    #[derive(Clone, Default)]
    struct ManualClock {
        now: Rc<Cell<u64>>,
        tasks: Rc<RefCell<Vec<Task>>>,
    }

    struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl Scheduler for ManualClock {
        type Handle = ManualHandle;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.tasks.borrow_mut().push(Task {
                due: self.now.get() + delay.as_millis() as u64,
                cancelled: cancelled.clone(),
                run: Some(task),
            });
            ManualHandle(cancelled)
        }
    }

    impl ManualClock {
        fn advance(&self, millis: u64) {
            let now = self.now.get() + millis;
            self.now.set(now);
            let due: Vec<Box<dyn FnOnce()>> = self
                .tasks
                .borrow_mut()
                .iter_mut()
                .filter(|t| t.due <= now && !t.cancelled.get())
                .filter_map(|t| t.run.take())
                .collect();
            for run in due {
                run();
            }
        }
    }

    type Fired = Rc<RefCell<Vec<(String, LookupTicket)>>>;

    fn recorder(fired: &Fired) -> impl FnOnce(String, LookupTicket) + 'static {
        let fired = fired.clone();
        move |value, ticket| fired.borrow_mut().push((value, ticket))
    }

    fn setup() -> (ManualClock, Debouncer<ManualClock>, Fired) {
        let clock = ManualClock::default();
        let debouncer = Debouncer::new(clock.clone(), LOOKUP_DELAY);
        (clock, debouncer, Rc::new(RefCell::new(Vec::new())))
    }

    #[test]
    fn test_rapid_typing_fires_once_with_final_value() {
        let (clock, mut debouncer, fired) = setup();

        for value in ["1", "12", "123", "1234"] {
            assert_eq!(debouncer.input(value, recorder(&fired)), InputChange::Scheduled);
            clock.advance(100);
        }
        // 100ms since the last keystroke
        clock.advance(399);
        assert!(fired.borrow().is_empty());

        clock.advance(1);
        let fired = fired.borrow();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].0, "1234");
    }

    #[test]
    fn test_nothing_fires_before_delay() {
        let (clock, mut debouncer, fired) = setup();
        debouncer.input("client@example.com", recorder(&fired));
        clock.advance(499);
        assert!(fired.borrow().is_empty());
        clock.advance(1);
        assert_eq!(fired.borrow().len(), 1);
    }

    #[test]
    fn test_empty_input_clears_without_lookup() {
        let (clock, mut debouncer, fired) = setup();
        debouncer.input("55", recorder(&fired));
        clock.advance(200);

        assert_eq!(debouncer.input("", recorder(&fired)), InputChange::Cleared);
        assert!(!debouncer.has_pending());
        clock.advance(1_000);
        assert!(fired.borrow().is_empty());
    }

    #[test]
    fn test_cancel_prevents_pending_lookup() {
        let (clock, mut debouncer, fired) = setup();
        debouncer.input("55", recorder(&fired));
        debouncer.cancel();
        clock.advance(1_000);
        assert!(fired.borrow().is_empty());
    }

    #[test]
    fn test_superseded_ticket_is_stale() {
        let (clock, mut debouncer, fired) = setup();
        let generation = debouncer.generation();

        debouncer.input("10", recorder(&fired));
        clock.advance(500);
        let first = fired.borrow()[0].1;
        assert!(generation.is_current(first));

        // Response for "10" still in flight when the user keeps typing
        debouncer.input("101", recorder(&fired));
        assert!(!generation.is_current(first));

        clock.advance(500);
        let second = fired.borrow()[1].1;
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_separate_pauses_fire_separately() {
        let (clock, mut debouncer, fired) = setup();
        debouncer.input("a", recorder(&fired));
        clock.advance(600);
        debouncer.input("ab", recorder(&fired));
        clock.advance(600);

        let values: Vec<String> = fired.borrow().iter().map(|(v, _)| v.clone()).collect();
        assert_eq!(values, vec!["a", "ab"]);
    }

    #[test]
    fn test_seeded_value_is_not_looked_up() {
        let (clock, mut debouncer, fired) = setup();
        debouncer.seed("1042");

        assert_eq!(debouncer.input("1042", recorder(&fired)), InputChange::Unchanged);
        assert!(!debouncer.has_pending());
        clock.advance(1_000);
        assert!(fired.borrow().is_empty());

        assert_eq!(debouncer.input("104", recorder(&fired)), InputChange::Scheduled);
        clock.advance(500);
        assert_eq!(fired.borrow()[0].0, "104");
    }

    #[test]
    fn test_retyping_seeded_value_after_clear_looks_up() {
        let (clock, mut debouncer, fired) = setup();
        debouncer.seed("1042");
        assert_eq!(debouncer.input("", recorder(&fired)), InputChange::Cleared);
        assert_eq!(debouncer.input("1042", recorder(&fired)), InputChange::Scheduled);
        clock.advance(500);
        assert_eq!(fired.borrow().len(), 1);
    }
}
