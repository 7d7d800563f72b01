//! All reactive page state in one place.
//!
//! Browser signals (scroll, clicks, image loads) come in through the
//! [`PresentationController`]; views read a [`PresentationState`] snapshot
//! and the pure derivation functions below, and re-render when a
//! subscription callback fires. Execution is single-threaded (the browser
//! event loop delivers events serially), so interior mutability with
//! `RefCell` is all the synchronization this needs.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;

use crate::storage::PreferenceStore;

/// Discrete look of the fixed top header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Transparent,
    Solid,
}

/// Vertical displacement for a decorative layer, proportional to the
/// current scroll position. Pure: same inputs, same output.
pub fn parallax_offset(speed_factor: f64, scroll_offset: u32) -> f64 {
    speed_factor * scroll_offset as f64
}

/// Solid strictly past the threshold; the boundary value itself stays
/// transparent. No hysteresis, the style depends on the current offset
/// alone.
pub fn header_style(scroll_offset: u32, threshold: u32) -> HeaderStyle {
    if scroll_offset > threshold {
        HeaderStyle::Solid
    } else {
        HeaderStyle::Transparent
    }
}

/// Next carousel position, wrapping past the last slide.
pub fn next_index(current: usize, count: usize) -> usize {
    assert!(count > 0, "carousel needs at least one slide");
    (current + 1) % count
}

/// Previous carousel position, wrapping before the first slide.
pub fn prev_index(current: usize, count: usize) -> usize {
    assert!(count > 0, "carousel needs at least one slide");
    (current + count - 1) % count
}

/// Snapshot of everything the page derives its rendering from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PresentationState {
    pub scroll_offset: u32,
    pub menu_open: bool,
    pub dark_mode: bool,
    pub slide_index: usize,
    loading: HashMap<String, bool>,
}

impl PresentationState {
    /// True while the given image is registered and still waiting for its
    /// load event.
    pub fn is_image_loading(&self, id: &str) -> bool {
        self.loading.get(id).copied().unwrap_or(false)
    }
}

/// Token returned by [`PresentationController::subscribe`]; hand it back
/// to `unsubscribe` on view teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(usize);

type Listener = Box<dyn Fn(&PresentationState)>;

/// Owns the page state and pushes a fresh snapshot to every subscriber
/// after each mutation that actually changed something.
pub struct PresentationController {
    state: RefCell<PresentationState>,
    store: Rc<dyn PreferenceStore>,
    listeners: RefCell<Vec<(Subscription, Listener)>>,
    next_token: Cell<usize>,
}

impl PresentationController {
    pub fn new(store: Rc<dyn PreferenceStore>) -> Self {
        Self {
            state: RefCell::new(PresentationState::default()),
            store,
            listeners: RefCell::new(Vec::new()),
            next_token: Cell::new(0),
        }
    }

    pub fn snapshot(&self) -> PresentationState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self, listener: Listener) -> Subscription {
        let token = Subscription(self.next_token.get());
        self.next_token.set(token.0 + 1);
        self.listeners.borrow_mut().push((token, listener));
        token
    }

    pub fn unsubscribe(&self, token: Subscription) {
        self.listeners.borrow_mut().retain(|(t, _)| *t != token);
    }

    fn notify(&self) {
        let state = self.snapshot();
        for (_, listener) in self.listeners.borrow().iter() {
            listener(&state);
        }
    }

    /// Records the latest viewport offset. Last write wins, so coalescing
    /// or dropping intermediate scroll events cannot change the settled
    /// state. An unchanged offset does not notify.
    pub fn on_scroll(&self, offset: u32) {
        {
            let mut state = self.state.borrow_mut();
            if state.scroll_offset == offset {
                return;
            }
            state.scroll_offset = offset;
        }
        self.notify();
    }

    pub fn toggle_menu(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.menu_open = !state.menu_open;
        }
        self.notify();
    }

    /// Closes the mobile menu; used by overlay dismissal and nav-link
    /// taps. No-op while already closed.
    pub fn close_menu(&self) {
        {
            let mut state = self.state.borrow_mut();
            if !state.menu_open {
                return;
            }
            state.menu_open = false;
        }
        self.notify();
    }

    /// Applies the persisted preference, or the light default when none
    /// was stored. Called once when the page mounts.
    pub fn init_theme(&self, persisted: Option<bool>) {
        {
            self.state.borrow_mut().dark_mode = persisted.unwrap_or(false);
        }
        self.notify();
    }

    /// Flips the theme and writes the new preference back. The write is
    /// best-effort: the in-memory flag stays authoritative even when
    /// storage is unavailable.
    pub fn toggle_theme(&self) {
        let dark = {
            let mut state = self.state.borrow_mut();
            state.dark_mode = !state.dark_mode;
            state.dark_mode
        };
        if let Err(err) = self.store.write_dark_mode(dark) {
            warn!("could not persist theme preference: {err}");
        }
        self.notify();
    }

    /// Advances the carousel, wrapping past the last slide. `count` is
    /// the length of a static content table; zero is a programming error.
    pub fn next_slide(&self, count: usize) {
        {
            let mut state = self.state.borrow_mut();
            state.slide_index = next_index(state.slide_index, count);
        }
        self.notify();
    }

    /// Retreats the carousel, wrapping before the first slide.
    pub fn prev_slide(&self, count: usize) {
        {
            let mut state = self.state.borrow_mut();
            state.slide_index = prev_index(state.slide_index, count);
        }
        self.notify();
    }

    /// Starts tracking an image. Views call this on mount; an id that is
    /// already tracked keeps its current flag.
    pub fn register_image(&self, id: &str) {
        let inserted = {
            let mut state = self.state.borrow_mut();
            if state.loading.contains_key(id) {
                false
            } else {
                state.loading.insert(id.to_owned(), true);
                true
            }
        };
        if inserted {
            self.notify();
        }
    }

    /// Marks an image as finished loading. Duplicate load events and ids
    /// that were never registered are silently ignored.
    pub fn image_loaded(&self, id: &str) {
        let changed = {
            let mut state = self.state.borrow_mut();
            match state.loading.get_mut(id) {
                Some(flag) if *flag => {
                    *flag = false;
                    true
                }
                _ => false,
            }
        };
        if changed {
            self.notify();
        }
    }

    /// Stops tracking an image when its view unmounts.
    pub fn release_image(&self, id: &str) {
        let removed = self.state.borrow_mut().loading.remove(id).is_some();
        if removed {
            self.notify();
        }
    }
}

/// Context value handed to components: the shared controller plus the
/// snapshot the tree was rendered against. Equality compares controller
/// identity and snapshot, so context consumers re-render exactly when
/// state changed.
#[derive(Clone)]
pub struct PresentationHandle {
    pub controller: Rc<PresentationController>,
    pub state: PresentationState,
}

impl PartialEq for PresentationHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller) && self.state == other.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{PreferenceStore, StoreError};

    #[derive(Default)]
    struct MemoryStore {
        dark: RefCell<Option<bool>>,
    }

    impl PreferenceStore for MemoryStore {
        fn read_dark_mode(&self) -> Option<bool> {
            *self.dark.borrow()
        }

        fn write_dark_mode(&self, value: bool) -> Result<(), StoreError> {
            *self.dark.borrow_mut() = Some(value);
            Ok(())
        }
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn read_dark_mode(&self) -> Option<bool> {
            None
        }

        fn write_dark_mode(&self, _value: bool) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    fn controller() -> PresentationController {
        PresentationController::new(Rc::new(MemoryStore::default()))
    }

    #[test]
    fn parallax_matches_product_exactly() {
        let factors = [-2.0, -0.15, 0.0, 0.5, 1.0, 3.25];
        let offsets = [0u32, 1, 50, 600, 4000];
        for factor in factors {
            for offset in offsets {
                assert_eq!(parallax_offset(factor, offset), factor * offset as f64);
            }
        }
    }

    #[test]
    fn header_boundary_stays_transparent() {
        assert_eq!(header_style(0, 50), HeaderStyle::Transparent);
        assert_eq!(header_style(49, 50), HeaderStyle::Transparent);
        assert_eq!(header_style(50, 50), HeaderStyle::Transparent);
        assert_eq!(header_style(51, 50), HeaderStyle::Solid);
        assert_eq!(header_style(75, 50), HeaderStyle::Solid);
    }

    #[test]
    fn header_has_no_hysteresis() {
        let c = controller();
        assert_eq!(header_style(c.snapshot().scroll_offset, 50), HeaderStyle::Transparent);
        c.on_scroll(75);
        assert_eq!(header_style(c.snapshot().scroll_offset, 50), HeaderStyle::Solid);
        c.on_scroll(10);
        assert_eq!(header_style(c.snapshot().scroll_offset, 50), HeaderStyle::Transparent);
    }

    #[test]
    fn carousel_round_trips() {
        for count in 1..=6 {
            for start in 0..count {
                assert_eq!(prev_index(next_index(start, count), count), start);
                assert_eq!(next_index(prev_index(start, count), count), start);
            }
        }
    }

    #[test]
    fn carousel_full_cycle_returns_home() {
        for count in 1..=6 {
            let mut index = 0;
            for _ in 0..count {
                index = next_index(index, count);
            }
            assert_eq!(index, 0);
        }
    }

    #[test]
    fn carousel_wraps_at_four() {
        let c = controller();
        for expected in [1, 2, 3] {
            c.next_slide(4);
            assert_eq!(c.snapshot().slide_index, expected);
        }
        c.next_slide(4);
        assert_eq!(c.snapshot().slide_index, 0);
        c.prev_slide(4);
        assert_eq!(c.snapshot().slide_index, 3);
    }

    #[test]
    #[should_panic(expected = "at least one slide")]
    fn empty_carousel_next_panics() {
        next_index(0, 0);
    }

    #[test]
    #[should_panic(expected = "at least one slide")]
    fn empty_carousel_prev_panics() {
        prev_index(0, 0);
    }

    #[test]
    fn menu_double_toggle_returns_closed() {
        let c = controller();
        assert!(!c.snapshot().menu_open);
        c.toggle_menu();
        assert!(c.snapshot().menu_open);
        c.toggle_menu();
        assert!(!c.snapshot().menu_open);
    }

    #[test]
    fn closing_a_closed_menu_stays_silent() {
        let c = controller();
        let notified = Rc::new(Cell::new(0u32));
        let seen = notified.clone();
        c.subscribe(Box::new(move |_| seen.set(seen.get() + 1)));
        c.close_menu();
        assert_eq!(notified.get(), 0);
        c.toggle_menu();
        c.close_menu();
        assert_eq!(notified.get(), 2);
        assert!(!c.snapshot().menu_open);
    }

    #[test]
    fn theme_init_prefers_persisted_value() {
        let c = controller();
        c.init_theme(Some(true));
        assert!(c.snapshot().dark_mode);
    }

    #[test]
    fn theme_init_defaults_to_light() {
        let c = controller();
        c.init_theme(None);
        assert!(!c.snapshot().dark_mode);
    }

    #[test]
    fn theme_toggle_writes_preference_through() {
        let store = Rc::new(MemoryStore::default());
        let c = PresentationController::new(store.clone());
        c.toggle_theme();
        assert!(c.snapshot().dark_mode);
        assert_eq!(store.read_dark_mode(), Some(true));
        c.toggle_theme();
        assert!(!c.snapshot().dark_mode);
        assert_eq!(store.read_dark_mode(), Some(false));
    }

    #[test]
    fn theme_survives_storage_failure() {
        let c = PresentationController::new(Rc::new(FailingStore));
        c.toggle_theme();
        assert!(c.snapshot().dark_mode);
    }

    #[test]
    fn image_flag_lifecycle() {
        let c = controller();
        c.register_image("hero");
        assert!(c.snapshot().is_image_loading("hero"));
        c.image_loaded("hero");
        assert!(!c.snapshot().is_image_loading("hero"));
        // Duplicate load events have no further effect.
        c.image_loaded("hero");
        assert!(!c.snapshot().is_image_loading("hero"));
        c.release_image("hero");
        assert!(!c.snapshot().is_image_loading("hero"));
    }

    #[test]
    fn unknown_image_load_is_a_no_op() {
        let c = controller();
        let before = c.snapshot();
        c.image_loaded("hero");
        assert_eq!(c.snapshot(), before);
    }

    #[test]
    fn reregistering_a_loaded_image_keeps_its_flag() {
        let c = controller();
        c.register_image("about");
        c.image_loaded("about");
        c.register_image("about");
        assert!(!c.snapshot().is_image_loading("about"));
    }

    #[test]
    fn subscribers_see_each_mutation() {
        let c = controller();
        let last = Rc::new(RefCell::new(None::<PresentationState>));
        let sink = last.clone();
        let token = c.subscribe(Box::new(move |state| {
            *sink.borrow_mut() = Some(state.clone());
        }));

        c.toggle_menu();
        assert!(last.borrow().as_ref().unwrap().menu_open);
        c.on_scroll(120);
        assert_eq!(last.borrow().as_ref().unwrap().scroll_offset, 120);

        c.unsubscribe(token);
        c.on_scroll(500);
        assert_eq!(last.borrow().as_ref().unwrap().scroll_offset, 120);
    }

    #[test]
    fn repeated_scroll_offset_does_not_notify() {
        let c = controller();
        let notified = Rc::new(Cell::new(0u32));
        let seen = notified.clone();
        c.subscribe(Box::new(move |_| seen.set(seen.get() + 1)));
        c.on_scroll(10);
        c.on_scroll(10);
        assert_eq!(notified.get(), 1);
        c.on_scroll(12);
        assert_eq!(notified.get(), 2);
    }

    #[test]
    fn scroll_is_last_write_wins() {
        let every = controller();
        for offset in [5, 300, 120] {
            every.on_scroll(offset);
        }
        let coalesced = controller();
        coalesced.on_scroll(120);
        assert_eq!(every.snapshot().scroll_offset, coalesced.snapshot().scroll_offset);
    }
}
