//! Document-backed rendering surface

use keepsake_core::{ElementId, Rect, Surface};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

/// Class shared by the thumbnail buttons, in slide order
const THUMBNAIL_CLASS: &str = ".thumbnail-btn";

/// [`Surface`] over a live document
///
/// Ids resolve through `getElementById`. Markup that identifies some
/// elements by class or tag instead (container, header, seek bar,
/// thumbnails) is found through a selector fallback.
#[derive(Clone)]
pub struct DocumentSurface {
    document: Document,
}

impl DocumentSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Look up an element, `None` when the markup does not have it
    pub fn element(&self, id: &ElementId) -> Option<Element> {
        if let Some(element) = self.document.get_element_by_id(id.as_str()) {
            return Some(element);
        }

        if let Some(index) = id.as_str().strip_prefix("thumbnail-") {
            let index: u32 = index.parse().ok()?;
            let node = self
                .document
                .query_selector_all(THUMBNAIL_CLASS)
                .ok()?
                .item(index)?;
            return node.dyn_into::<Element>().ok();
        }

        let selector = match id.as_str() {
            "gallery-container" => ".gallery-container",
            "gallery-header" => "header",
            "gallery-subtitle" => "header p",
            "progress-bar" => ".progress-bar",
            _ => return None,
        };
        self.document.query_selector(selector).ok().flatten()
    }

    fn html(&self, id: &ElementId) -> Option<HtmlElement> {
        self.element(id)?.dyn_into::<HtmlElement>().ok()
    }
}

impl Surface for DocumentSurface {
    fn set_text(&mut self, id: &ElementId, text: &str) {
        if let Some(element) = self.element(id) {
            element.set_text_content(Some(text));
        }
    }

    fn set_value(&mut self, id: &ElementId, value: &str) {
        let Some(element) = self.element(id) else {
            return;
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn set_style(&mut self, id: &ElementId, property: &str, value: &str) {
        if let Some(element) = self.html(id) {
            let _ = element.style().set_property(property, value);
        }
    }

    fn toggle_class(&mut self, id: &ElementId, class: &str, on: bool) {
        if let Some(element) = self.element(id) {
            let _ = element.class_list().toggle_with_force(class, on);
        }
    }

    fn replace_class(&mut self, id: &ElementId, from: &str, to: &str) {
        if let Some(element) = self.element(id) {
            let _ = element.class_list().replace(from, to);
        }
    }

    fn set_class_name(&mut self, id: &ElementId, class_name: &str) {
        if let Some(element) = self.element(id) {
            element.set_class_name(class_name);
        }
    }

    fn bounding_rect(&self, id: &ElementId) -> Option<Rect> {
        let rect = self.element(id)?.get_bounding_client_rect();
        Some(Rect::new(rect.left(), rect.width()))
    }

    fn scroll_height(&self, id: &ElementId) -> Option<f64> {
        Some(f64::from(self.element(id)?.scroll_height()))
    }
}
