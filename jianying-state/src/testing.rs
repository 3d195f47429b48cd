use std::cell::{Cell, RefCell};
use std::rc::Rc;

use strum::IntoEnumIterator;

use crate::scroll::{ScrollListener, ScrollSource};
use crate::section::{NavError, SectionHost, SectionId};

type Listeners = Rc<RefCell<Vec<(usize, Rc<dyn Fn(f64)>)>>>;

#[derive(Default, Clone)]
pub struct FakeWindow {
    listeners: Listeners,
    next_id: Rc<Cell<usize>>,
}

pub struct FakeListener {
    id: usize,
    listeners: Listeners,
}

impl FakeWindow {
    pub fn dispatch(&self, offset: f64) {
        let listeners: Vec<Rc<dyn Fn(f64)>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, f)| f.clone())
            .collect();
        for listener in listeners {
            listener(offset);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ScrollSource for FakeWindow {
    type Listener = FakeListener;

    fn listen(&self, on_scroll: Box<dyn Fn(f64)>) -> Self::Listener {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::from(on_scroll)));
        FakeListener {
            id,
            listeners: self.listeners.clone(),
        }
    }
}

impl ScrollListener for FakeListener {
    fn detach(self) {
        self.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
    }
}

#[derive(Default)]
pub struct FakeDocument {
    anchors: Vec<&'static str>,
    scrolled_to: RefCell<Vec<String>>,
    top_requests: Cell<usize>,
}

impl FakeDocument {
    pub fn with_sections() -> Self {
        Self {
            anchors: SectionId::iter().map(SectionId::anchor).collect(),
            ..Default::default()
        }
    }

    pub fn scrolled_to(&self) -> Vec<String> {
        self.scrolled_to.borrow().clone()
    }

    pub fn top_requests(&self) -> usize {
        self.top_requests.get()
    }
}

impl SectionHost for FakeDocument {
    fn scroll_to_anchor(&self, anchor: &str) -> Result<(), NavError> {
        if !self.anchors.contains(&anchor) {
            return Err(NavError::AnchorNotFound(anchor.to_string()));
        }
        self.scrolled_to.borrow_mut().push(anchor.to_string());
        Ok(())
    }

    fn scroll_to_top(&self) {
        self.top_requests.set(self.top_requests.get() + 1);
    }
}
