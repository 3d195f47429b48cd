pub mod history;
pub mod page;
pub mod scroll;
pub mod section;
pub mod story;
pub mod workshop;

pub use page::PageState;
pub use scroll::{ScrollListener, ScrollSource, ScrollTracker, NAV_SCROLL_THRESHOLD};
pub use section::{NavError, SectionHost, SectionId};

#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
pub(crate) mod testing;
