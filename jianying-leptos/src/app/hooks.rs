pub mod use_scroll_tracker;
