use jianying_state::{PageState, SectionId};
use leptos::{create_rw_signal, RwSignal, SignalUpdate, SignalWith, SignalWithUntracked};

use super::dom::DocumentSections;

#[derive(Copy, Clone, Debug)]
pub struct GlobalState {
    pub page: RwSignal<PageState>,
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            page: create_rw_signal(PageState::new()),
        }
    }

    pub fn menu_open(&self) -> bool {
        self.page.with(|page| page.menu_open)
    }

    pub fn scrolled(&self) -> bool {
        self.page.with(|page| page.scrolled)
    }

    pub fn toggle_menu(&self) {
        self.page.update(|page| page.toggle_menu());
    }

    /// Only writes when the flag changes, so scrolling does not re-render the nav.
    pub fn set_scrolled(&self, scrolled: bool) {
        if self.page.with_untracked(|page| page.scrolled == scrolled) {
            return;
        }
        self.page.update(|page| {
            page.set_scrolled(scrolled);
        });
    }

    pub fn jump_to(&self, section: SectionId) {
        self.jump_to_anchor(section.anchor());
    }

    pub fn jump_to_anchor(&self, anchor: &str) {
        self.page.update(|page| page.jump_to(&DocumentSections, anchor));
    }

    pub fn jump_to_top(&self) {
        self.page.with_untracked(|page| page.jump_to_top(&DocumentSections));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use leptos::{create_effect, create_runtime, SignalWith};

    use super::GlobalState;

    #[test]
    fn set_scrolled_skips_unchanged_writes() {
        let runtime = create_runtime();
        let global_state = GlobalState::new();
        let runs = Rc::new(Cell::new(0));

        create_effect({
            let runs = runs.clone();
            move |_| {
                global_state.page.with(|page| page.scrolled);
                runs.set(runs.get() + 1);
            }
        });
        assert_eq!(runs.get(), 1);

        global_state.set_scrolled(false);
        assert_eq!(runs.get(), 1);

        global_state.set_scrolled(true);
        assert_eq!(runs.get(), 2);
        assert!(global_state.scrolled());

        global_state.set_scrolled(true);
        assert_eq!(runs.get(), 2);

        global_state.set_scrolled(false);
        assert_eq!(runs.get(), 3);

        runtime.dispose();
    }
}
