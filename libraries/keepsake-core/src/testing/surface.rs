//! Test doubles for the rendering surface
//!
//! [`RecordingSurface`] keeps an in-memory model of every element the
//! controllers write to. Clones share the same model, so a test can hand one
//! clone to a controller and inspect the other.

use crate::{ElementId, Rect, Surface};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

/// Recorded state of a single element
#[derive(Debug, Clone, Default)]
pub struct ElementState {
    pub text: Option<String>,
    pub value: Option<String>,
    pub classes: BTreeSet<String>,
    pub styles: HashMap<String, String>,
}

#[derive(Debug, Default)]
struct Model {
    elements: HashMap<ElementId, ElementState>,
    rects: HashMap<ElementId, Rect>,
    scroll_heights: HashMap<ElementId, f64>,
    writes: usize,
}

/// In-memory surface that records every write
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    model: Rc<RefCell<Model>>,
}

impl RecordingSurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Give an element a bounding box (e.g. the seek bar)
    pub fn set_rect(&self, id: &ElementId, rect: Rect) {
        self.model.borrow_mut().rects.insert(id.clone(), rect);
    }

    /// Give an element a content scroll height (e.g. the story box)
    pub fn set_scroll_height(&self, id: &ElementId, height: f64) {
        self.model
            .borrow_mut()
            .scroll_heights
            .insert(id.clone(), height);
    }

    /// Snapshot of an element's recorded state
    pub fn element(&self, id: &ElementId) -> Option<ElementState> {
        self.model.borrow().elements.get(id).cloned()
    }

    /// Text content of an element
    pub fn text(&self, id: &ElementId) -> Option<String> {
        self.element(id).and_then(|e| e.text)
    }

    /// Form value of an element
    pub fn value(&self, id: &ElementId) -> Option<String> {
        self.element(id).and_then(|e| e.value)
    }

    /// Inline style property of an element
    pub fn style(&self, id: &ElementId, property: &str) -> Option<String> {
        self.element(id)
            .and_then(|e| e.styles.get(property).cloned())
    }

    /// Whether an element currently carries a class
    pub fn has_class(&self, id: &ElementId, class: &str) -> bool {
        self.element(id)
            .map(|e| e.classes.contains(class))
            .unwrap_or(false)
    }

    /// Total number of mutating calls seen
    pub fn write_count(&self) -> usize {
        self.model.borrow().writes
    }

    fn with_element(&mut self, id: &ElementId, f: impl FnOnce(&mut ElementState)) {
        let mut model = self.model.borrow_mut();
        model.writes += 1;
        f(model.elements.entry(id.clone()).or_default());
    }
}

impl Surface for RecordingSurface {
    fn set_text(&mut self, id: &ElementId, text: &str) {
        self.with_element(id, |e| e.text = Some(text.to_string()));
    }

    fn set_value(&mut self, id: &ElementId, value: &str) {
        self.with_element(id, |e| e.value = Some(value.to_string()));
    }

    fn set_style(&mut self, id: &ElementId, property: &str, value: &str) {
        self.with_element(id, |e| {
            e.styles.insert(property.to_string(), value.to_string());
        });
    }

    fn toggle_class(&mut self, id: &ElementId, class: &str, on: bool) {
        self.with_element(id, |e| {
            if on {
                e.classes.insert(class.to_string());
            } else {
                e.classes.remove(class);
            }
        });
    }

    fn replace_class(&mut self, id: &ElementId, from: &str, to: &str) {
        self.with_element(id, |e| {
            if e.classes.remove(from) {
                e.classes.insert(to.to_string());
            }
        });
    }

    fn set_class_name(&mut self, id: &ElementId, class_name: &str) {
        self.with_element(id, |e| {
            e.classes = class_name.split_whitespace().map(str::to_string).collect();
        });
    }

    fn bounding_rect(&self, id: &ElementId) -> Option<Rect> {
        self.model.borrow().rects.get(id).copied()
    }

    fn scroll_height(&self, id: &ElementId) -> Option<f64> {
        self.model.borrow().scroll_heights.get(id).copied()
    }
}
