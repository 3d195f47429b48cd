use tracing::trace;

/// Offset in px past which the navigation bar switches to its compact look.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

pub fn past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub trait ScrollListener {
    fn detach(self);
}

/// A global scroll signal, e.g. the browser window.
pub trait ScrollSource {
    type Listener: ScrollListener;

    fn listen(&self, on_scroll: Box<dyn Fn(f64)>) -> Self::Listener;
}

/// Keeps a scroll listener attached for as long as it lives and reports
/// whether the offset is past `threshold` on every scroll event.
pub struct ScrollTracker<L: ScrollListener> {
    listener: Option<L>,
}

impl<L: ScrollListener> ScrollTracker<L> {
    pub fn mount<S, F>(source: &S, threshold: f64, on_change: F) -> Self
    where
        S: ScrollSource<Listener = L>,
        F: Fn(bool) + 'static,
    {
        trace!("scroll tracker: attaching listener, threshold {}", threshold);
        let listener = source.listen(Box::new(move |offset| {
            on_change(past_threshold(offset, threshold));
        }));

        Self {
            listener: Some(listener),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    pub fn unmount(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        let Some(listener) = self.listener.take() else {
            return;
        };
        trace!("scroll tracker: detaching listener");
        listener.detach();
    }
}

impl<L: ScrollListener> Drop for ScrollTracker<L> {
    fn drop(&mut self) {
        self.detach();
    }
}
