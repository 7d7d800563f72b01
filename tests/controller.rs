//! End-to-end scenario for the presentation controller: a full page visit
//! from mount to theme toggle, driven the way the browser would drive it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use portfolio::config;
use portfolio::content::BLOG_POSTS;
use portfolio::state::{header_style, parallax_offset, HeaderStyle, PresentationController};
use portfolio::storage::{PreferenceStore, StoreError};

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

#[test]
fn full_page_visit() {
    // A previous visit left dark mode on.
    let store = Rc::new(MemoryStore::default());
    store.write_dark_mode(true).unwrap();

    let controller = PresentationController::new(store.clone());
    let renders = Rc::new(Cell::new(0u32));
    let seen = renders.clone();
    let token = controller.subscribe(Box::new(move |_| seen.set(seen.get() + 1)));

    // Mount: persisted theme wins, hero images start loading.
    controller.init_theme(store.read_dark_mode());
    assert!(controller.snapshot().dark_mode);
    controller.register_image("hero-portrait");
    controller.register_image("about-portrait");
    assert!(controller.snapshot().is_image_loading("hero-portrait"));

    // Scroll down past the header threshold and back up. The header style
    // is a pure function of the current offset, with no memory.
    let threshold = config::HEADER_SCROLL_THRESHOLD;
    assert_eq!(
        header_style(controller.snapshot().scroll_offset, threshold),
        HeaderStyle::Transparent
    );
    for offset in [20, 75, 340] {
        controller.on_scroll(offset);
    }
    let settled = controller.snapshot();
    assert_eq!(settled.scroll_offset, 340);
    assert_eq!(header_style(settled.scroll_offset, threshold), HeaderStyle::Solid);
    assert_eq!(
        parallax_offset(config::HERO_PARALLAX_SPEED, settled.scroll_offset),
        170.0
    );
    controller.on_scroll(10);
    assert_eq!(
        header_style(controller.snapshot().scroll_offset, threshold),
        HeaderStyle::Transparent
    );

    // Images finish loading; a stray duplicate event changes nothing.
    controller.image_loaded("hero-portrait");
    controller.image_loaded("hero-portrait");
    assert!(!controller.snapshot().is_image_loading("hero-portrait"));

    // Walk the blog carousel all the way around.
    let count = BLOG_POSTS.len();
    for _ in 0..count {
        controller.next_slide(count);
    }
    assert_eq!(controller.snapshot().slide_index, 0);
    controller.prev_slide(count);
    assert_eq!(controller.snapshot().slide_index, count - 1);

    // Open the mobile menu, tap a link (which closes it).
    controller.toggle_menu();
    assert!(controller.snapshot().menu_open);
    controller.close_menu();
    assert!(!controller.snapshot().menu_open);

    // Switch back to light mode; the preference is written through.
    controller.toggle_theme();
    assert!(!controller.snapshot().dark_mode);
    assert_eq!(store.read_dark_mode(), Some(false));

    // Every state change notified the view.
    assert!(renders.get() > 0);
    let before = renders.get();
    controller.unsubscribe(token);
    controller.toggle_menu();
    assert_eq!(renders.get(), before);
}
