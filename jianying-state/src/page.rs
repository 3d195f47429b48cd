use tracing::trace;

use crate::scroll::{past_threshold, NAV_SCROLL_THRESHOLD};
use crate::section::SectionHost;

/// Root UI state of the page. Both flags start out `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the flag actually changed.
    pub fn set_scrolled(&mut self, scrolled: bool) -> bool {
        if self.scrolled == scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }

    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.set_scrolled(past_threshold(offset, NAV_SCROLL_THRESHOLD))
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Closes the menu and smooth-scrolls to `anchor`. Unknown anchors are ignored.
    pub fn jump_to<H: SectionHost + ?Sized>(&mut self, host: &H, anchor: &str) {
        self.close_menu();
        match host.scroll_to_anchor(anchor) {
            Ok(()) => trace!("jump: scrolling to #{}", anchor),
            Err(err) => trace!("jump: ignored, {}", err),
        }
    }

    /// Smooth-scrolls to the top. The menu is left as it is.
    pub fn jump_to_top<H: SectionHost + ?Sized>(&self, host: &H) {
        host.scroll_to_top();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::PageState;
    use crate::scroll::{ScrollTracker, NAV_SCROLL_THRESHOLD};
    use crate::section::SectionId;
    use crate::testing::{FakeDocument, FakeWindow};

    #[test]
    fn fresh_state() {
        let state = PageState::new();
        assert!(!state.scrolled);
        assert!(!state.menu_open);
    }

    #[test]
    fn scrolled_follows_offset() {
        let mut state = PageState::new();
        for offset in [0.0, 10.0, 49.9, 50.0, 50.1, 100.0, 3000.0, 10.0] {
            state.on_scroll(offset);
            assert_eq!(state.scrolled, offset > 50.0, "offset {}", offset);
        }
    }

    #[test]
    fn repeated_offsets_are_noops() {
        let mut state = PageState::new();
        assert!(state.on_scroll(100.0));
        assert!(!state.on_scroll(100.0));
        assert!(!state.on_scroll(120.0));
        assert!(state.on_scroll(0.0));
        assert!(!state.on_scroll(0.0));
    }

    #[test]
    fn toggle_pair_restores() {
        for start in [false, true] {
            let mut state = PageState {
                menu_open: start,
                ..Default::default()
            };
            state.toggle_menu();
            assert_eq!(state.menu_open, !start);
            state.toggle_menu();
            assert_eq!(state.menu_open, start);
        }
    }

    #[test]
    fn jump_closes_menu() {
        crate::init_test_tracing();
        let document = FakeDocument::with_sections();
        for start in [false, true] {
            let mut state = PageState {
                menu_open: start,
                scrolled: true,
            };
            state.jump_to(&document, SectionId::Workshop.anchor());
            assert!(!state.menu_open);
            assert!(state.scrolled);
        }
        assert_eq!(document.scrolled_to(), vec!["workshop", "workshop"]);
    }

    #[test]
    fn unknown_anchor_is_silent() {
        let document = FakeDocument::with_sections();
        let mut state = PageState {
            menu_open: false,
            scrolled: true,
        };
        let before = state;
        state.jump_to(&document, "gallery");
        assert_eq!(state, before);
        assert!(document.scrolled_to().is_empty());

        let mut open = PageState {
            menu_open: true,
            scrolled: false,
        };
        open.jump_to(&document, "");
        assert!(!open.menu_open);
        assert!(!open.scrolled);
        assert!(document.scrolled_to().is_empty());
    }

    #[test]
    fn jump_to_top_keeps_menu() {
        let document = FakeDocument::with_sections();
        let state = PageState {
            menu_open: true,
            scrolled: true,
        };
        state.jump_to_top(&document);
        assert!(state.menu_open);
        assert!(state.scrolled);
        assert_eq!(document.top_requests(), 1);
        assert!(document.scrolled_to().is_empty());
    }

    #[test]
    fn scroll_then_scroll_back() {
        let window = FakeWindow::default();
        let state = Rc::new(RefCell::new(PageState::new()));
        let _tracker = {
            let state = state.clone();
            ScrollTracker::mount(&window, NAV_SCROLL_THRESHOLD, move |scrolled| {
                state.borrow_mut().set_scrolled(scrolled);
            })
        };

        window.dispatch(100.0);
        assert!(state.borrow().scrolled);
        window.dispatch(10.0);
        assert!(!state.borrow().scrolled);
    }

    #[test]
    fn menu_history_click() {
        let document = FakeDocument::with_sections();
        let mut state = PageState::new();
        state.toggle_menu();
        assert!(state.menu_open);

        state.jump_to(&document, SectionId::History.anchor());
        assert!(!state.menu_open);
        assert_eq!(document.scrolled_to(), vec!["history"]);
    }

    #[test]
    fn unmount_stops_updates() {
        let window = FakeWindow::default();
        let state = Rc::new(RefCell::new(PageState::new()));
        let tracker = {
            let state = state.clone();
            ScrollTracker::mount(&window, NAV_SCROLL_THRESHOLD, move |scrolled| {
                state.borrow_mut().set_scrolled(scrolled);
            })
        };

        window.dispatch(100.0);
        tracker.unmount();
        window.dispatch(10.0);

        assert!(state.borrow().scrolled);
        assert_eq!(window.listener_count(), 0);
    }
}
