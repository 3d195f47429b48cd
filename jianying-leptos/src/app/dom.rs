use jianying_state::{NavError, ScrollListener, ScrollSource, SectionHost};
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::{document, ev, window, window_event_listener};
use tracing::{trace, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Scroll events of the browser window.
pub struct WindowScroll;

pub struct WindowScrollListener(WindowListenerHandle);

impl ScrollSource for WindowScroll {
    type Listener = WindowScrollListener;

    fn listen(&self, on_scroll: Box<dyn Fn(f64)>) -> Self::Listener {
        let handle = window_event_listener(ev::scroll, move |_| {
            let offset = match window().scroll_y() {
                Ok(offset) => offset,
                Err(err) => {
                    warn!("failed to read scroll offset: {:?}", err);
                    return;
                }
            };
            on_scroll(offset);
        });
        WindowScrollListener(handle)
    }
}

impl ScrollListener for WindowScrollListener {
    fn detach(self) {
        self.0.remove();
    }
}

/// Section anchors rendered into the current document.
pub struct DocumentSections;

impl SectionHost for DocumentSections {
    fn scroll_to_anchor(&self, anchor: &str) -> Result<(), NavError> {
        let Some(element) = document().get_element_by_id(anchor) else {
            return Err(NavError::AnchorNotFound(anchor.to_string()));
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    fn scroll_to_top(&self) {
        trace!("scrolling to top");
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}
