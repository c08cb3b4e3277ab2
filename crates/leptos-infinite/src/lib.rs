//! Leptos Infinite List Utilities
//!
//! Offset-paginated list loading for Leptos, continued by a sentinel element
//! that is observed for viewport visibility.
//!
//! The bookkeeping lives in [`PageLoader`], which knows nothing about the DOM.
//! [`use_infinite_loader`] wires it to signals and an `IntersectionObserver`.

use std::collections::HashSet;
use std::future::Future;
use std::hash::Hash;

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Rows requested per page
pub const PAGE_SIZE: usize = 15;

/// Items that carry a stable identifier for de-duplication
pub trait Keyed {
    type Key: Eq + Hash + Clone;

    fn key(&self) -> Self::Key;
}

/// A `limit`/`offset` window to request from the backend
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

// ========================
// Loader State
// ========================

/// Accumulating page loader.
///
/// Items are appended in arrival order and never reordered. An item whose key
/// is already present is dropped, so overlapping pages cannot duplicate rows.
/// The loader stops for good once the backend returns a page shorter than
/// `page_size`.
#[derive(Debug)]
pub struct PageLoader<T: Keyed> {
    items: Vec<T>,
    seen: HashSet<T::Key>,
    page: usize,
    page_size: usize,
    has_more: bool,
    in_flight: bool,
    failed: bool,
}

impl<T: Keyed> Default for PageLoader<T> {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl<T: Keyed> PageLoader<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
            page: 0,
            page_size: page_size.max(1),
            has_more: true,
            in_flight: false,
            failed: false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Zero-based index of the next page to request
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// The last request failed and nothing has been retried since
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Start loading the next page.
    ///
    /// Returns `None` when the list is exhausted or a request is already out.
    pub fn begin(&mut self) -> Option<PageRequest> {
        if !self.has_more || self.in_flight {
            return None;
        }
        self.in_flight = true;
        self.failed = false;
        Some(PageRequest {
            limit: self.page_size,
            offset: self.page * self.page_size,
        })
    }

    /// Merge a fetched page, returning how many new items were kept
    pub fn finish(&mut self, batch: Vec<T>) -> usize {
        self.in_flight = false;
        if batch.len() < self.page_size {
            self.has_more = false;
        }
        self.page += 1;

        let before = self.items.len();
        for item in batch {
            if self.seen.insert(item.key()) {
                self.items.push(item);
            }
        }
        self.items.len() - before
    }

    /// Abandon the in-flight request; the same page is requested next time
    pub fn fail(&mut self) {
        self.in_flight = false;
        self.failed = true;
    }
}

// ========================
// Leptos Hook
// ========================

/// Signals exposed by [`use_infinite_loader`]
pub struct InfiniteLoader<T: Send + Sync + 'static> {
    pub items: ReadSignal<Vec<T>>,
    pub loading: ReadSignal<bool>,
    pub has_more: ReadSignal<bool>,
    /// Last page load failed; the sentinel will not fire again on its own
    pub failed: ReadSignal<bool>,
    /// Attach to an element rendered after the last row
    pub sentinel: NodeRef<Div>,
    retry_trigger: WriteSignal<u32>,
}

impl<T: Send + Sync + 'static> InfiniteLoader<T> {
    /// Request the page that failed again
    pub fn retry(&self) {
        self.retry_trigger.update(|n| *n = n.wrapping_add(1));
    }
}

// Handles only; copyable whatever the row type
impl<T: Send + Sync + 'static> Clone for InfiniteLoader<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for InfiniteLoader<T> {}

/// Observer plus the JS callback it calls; disconnects when dropped
struct Observation {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Load pages through `fetch` as the sentinel scrolls into view.
///
/// The first page is requested immediately. Failures are passed to
/// `on_error` and leave the loader ready to retry the same page.
pub fn use_infinite_loader<T, F, Fut>(fetch: F, on_error: Callback<String>) -> InfiniteLoader<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
    F: Fn(PageRequest) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<Vec<T>, String>> + 'static,
{
    let state = StoredValue::new_local(PageLoader::<T>::new(PAGE_SIZE));
    let observation = StoredValue::new_local(None::<Observation>);
    let (items, set_items) = signal(Vec::<T>::new());
    let (loading, set_loading) = signal(false);
    let (has_more, set_has_more) = signal(true);
    let (failed, set_failed) = signal(false);
    let (retry_requests, retry_trigger) = signal(0u32);
    let sentinel = NodeRef::<Div>::new();

    // Re-observing makes the browser report the sentinel's current visibility
    // again, so a sentinel that never left the viewport keeps loading.
    let rearm = move || {
        if let Some(el) = sentinel.get_untracked() {
            observation.with_value(|o| {
                if let Some(o) = o {
                    o.observer.unobserve(&el);
                    o.observer.observe(&el);
                }
            });
        }
    };

    let load_next = move || {
        let Some(request) = state.try_update_value(|s| s.begin()).flatten() else {
            return;
        };
        log::debug!("[Infinite] Requesting limit={} offset={}", request.limit, request.offset);
        set_loading.set(true);
        set_failed.set(false);

        spawn_local(async move {
            let loaded = match fetch(request).await {
                Ok(batch) => {
                    let received = batch.len();
                    let kept = state.try_update_value(|s| s.finish(batch)).unwrap_or(0);
                    log::debug!("[Infinite] Received {} rows, kept {}", received, kept);
                    true
                }
                Err(e) => {
                    log::warn!("[Infinite] Page load failed: {}", e);
                    state.try_update_value(|s| s.fail());
                    on_error.run(e);
                    false
                }
            };

            let Some((rows, more, page_failed)) =
                state.try_with_value(|s| (s.items().to_vec(), s.has_more(), s.failed()))
            else {
                return;
            };
            set_items.set(rows);
            set_has_more.set(more);
            set_failed.set(page_failed);
            set_loading.set(false);
            // After a failure the next attempt waits for `retry` or the sentinel re-entering view
            if loaded && more {
                rearm();
            }
        });
    };

    load_next();

    // Skips the initial run; only explicit retries reload
    Effect::new(move |initialized: Option<()>| {
        let _ = retry_requests.get();
        if initialized.is_some() {
            log::debug!("[Infinite] Retrying failed page");
            load_next();
        }
    });

    Effect::new(move |_| {
        let Some(el) = sentinel.get() else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _: web_sys::IntersectionObserver| {
                let visible = entries
                    .iter()
                    .any(|entry| entry.unchecked_into::<web_sys::IntersectionObserverEntry>().is_intersecting());
                if visible {
                    load_next();
                }
            },
        );

        match web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&el);
                observation.set_value(Some(Observation { observer, _callback: callback }));
            }
            Err(e) => log::error!("[Infinite] IntersectionObserver unavailable: {:?}", e),
        }
    });

    on_cleanup(move || {
        observation.try_update_value(|o| o.take());
    });

    InfiniteLoader {
        items,
        loading,
        has_more,
        failed,
        sentinel,
        retry_trigger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: u32,
    }

    impl Keyed for Row {
        type Key = u32;

        fn key(&self) -> u32 {
            self.id
        }
    }

    fn rows(ids: std::ops::Range<u32>) -> Vec<Row> {
        ids.map(|id| Row { id }).collect()
    }

    #[test]
    fn test_first_request_starts_at_offset_zero() {
        let mut loader = PageLoader::<Row>::default();
        assert_eq!(loader.begin(), Some(PageRequest { limit: 15, offset: 0 }));
    }

    #[test]
    fn test_offset_advances_by_page_size() {
        let mut loader = PageLoader::<Row>::default();
        loader.begin();
        loader.finish(rows(0..15));
        assert_eq!(loader.page(), 1);
        assert_eq!(loader.begin(), Some(PageRequest { limit: 15, offset: 15 }));
    }

    #[test]
    fn test_no_second_request_while_in_flight() {
        let mut loader = PageLoader::<Row>::default();
        assert!(loader.begin().is_some());
        assert!(loader.is_loading());
        assert_eq!(loader.begin(), None);
    }

    #[test]
    fn test_short_page_ends_loading() {
        let mut loader = PageLoader::<Row>::default();
        loader.begin();
        loader.finish(rows(0..15));
        loader.begin();
        loader.finish(rows(15..22));

        assert!(!loader.has_more());
        assert_eq!(loader.begin(), None);
        assert_eq!(loader.items().len(), 22);
    }

    #[test]
    fn test_empty_first_page_ends_loading() {
        let mut loader = PageLoader::<Row>::default();
        loader.begin();
        assert_eq!(loader.finish(Vec::new()), 0);
        assert!(!loader.has_more());
        assert!(loader.items().is_empty());
    }

    #[test]
    fn test_overlapping_pages_are_deduplicated() {
        let mut loader = PageLoader::<Row>::default();
        loader.begin();
        loader.finish(rows(0..15));
        loader.begin();
        // Backend shifted by five rows between requests
        let kept = loader.finish(rows(10..25));

        assert_eq!(kept, 10);
        let ids: Vec<u32> = loader.items().iter().map(|r| r.id).collect();
        assert_eq!(ids, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_duplicates_inside_one_page_are_dropped() {
        let mut loader = PageLoader::<Row>::new(3);
        loader.begin();
        loader.finish(vec![Row { id: 1 }, Row { id: 1 }, Row { id: 2 }]);
        assert_eq!(loader.items(), &[Row { id: 1 }, Row { id: 2 }]);
        // A full page (by count) keeps the loader open
        assert!(loader.has_more());
    }

    #[test]
    fn test_failure_retries_same_page() {
        let mut loader = PageLoader::<Row>::default();
        loader.begin();
        loader.finish(rows(0..15));
        loader.begin();
        loader.fail();

        assert!(!loader.is_loading());
        assert_eq!(loader.begin(), Some(PageRequest { limit: 15, offset: 15 }));
    }

    #[test]
    fn test_failed_flag_cleared_by_retry() {
        let mut loader = PageLoader::<Row>::default();
        loader.begin();
        loader.fail();
        assert!(loader.failed());
        assert!(loader.has_more());

        assert_eq!(loader.begin(), Some(PageRequest { limit: 15, offset: 0 }));
        assert!(!loader.failed());
        loader.finish(rows(0..15));
        assert!(!loader.failed());
        assert_eq!(loader.items().len(), 15);
    }
}
