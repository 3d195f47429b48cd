use jianying_state::{ScrollTracker, NAV_SCROLL_THRESHOLD};
use leptos::on_cleanup;

use crate::app::dom::WindowScroll;
use crate::app::global_state::GlobalState;

/// Keeps `GlobalState::scrolled` in sync with the window scroll offset
/// until the calling component is disposed.
pub fn use_scroll_tracker(global_state: GlobalState) {
    let tracker = ScrollTracker::mount(&WindowScroll, NAV_SCROLL_THRESHOLD, move |scrolled| {
        global_state.set_scrolled(scrolled);
    });

    on_cleanup(move || tracker.unmount());
}
