//! Rendering surface trait and geometry

use crate::ids::ElementId;
use serde::{Deserialize, Serialize};

/// Platform-agnostic rendering surface
///
/// Implementors map element ids onto whatever actually draws the widget
/// (a browser document, a recording double in tests).
///
/// Every mutating call is an idempotent "set" command. Calls that name an
/// element the surface does not know are silently ignored.
pub trait Surface {
    /// Replace the text content of an element
    fn set_text(&mut self, id: &ElementId, text: &str);

    /// Replace the value of a form control (slider, text area)
    fn set_value(&mut self, id: &ElementId, value: &str);

    /// Set one inline style property
    fn set_style(&mut self, id: &ElementId, property: &str, value: &str);

    /// Add (`on = true`) or remove (`on = false`) a single class
    fn toggle_class(&mut self, id: &ElementId, class: &str, on: bool);

    /// Replace `from` with `to` in the class list
    ///
    /// Does nothing when `from` is not present.
    fn replace_class(&mut self, id: &ElementId, from: &str, to: &str);

    /// Overwrite the whole class attribute
    fn set_class_name(&mut self, id: &ElementId, class_name: &str);

    /// Bounding box of an element in pointer coordinates
    fn bounding_rect(&self, id: &ElementId) -> Option<Rect>;

    /// Full scroll height of an element's content, in pixels
    fn scroll_height(&self, id: &ElementId) -> Option<f64>;
}

/// Horizontal extent of an element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge in pointer coordinates
    pub left: f64,

    /// Width in pixels
    pub width: f64,
}

impl Rect {
    /// Create a new rect
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Map a pointer x coordinate onto a fraction of this rect
    ///
    /// Formula: fraction = clamp((x - left) / width, 0, 1)
    ///
    /// Returns `None` for a collapsed (zero width) or non-finite rect,
    /// or a non-finite pointer coordinate.
    pub fn fraction_at(&self, x: f64) -> Option<f64> {
        if !(self.width.is_finite() && self.left.is_finite() && x.is_finite()) {
            return None;
        }
        if self.width <= 0.0 {
            return None;
        }

        let offset = (x - self.left).clamp(0.0, self.width);
        Some(offset / self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fraction_inside_bar() {
        let bar = Rect::new(50.0, 200.0);
        assert_eq!(bar.fraction_at(50.0), Some(0.0));
        assert_eq!(bar.fraction_at(100.0), Some(0.25));
        assert_eq!(bar.fraction_at(250.0), Some(1.0));
    }

    #[test]
    fn fraction_clamps_outside_bar() {
        let bar = Rect::new(50.0, 200.0);
        assert_eq!(bar.fraction_at(-10.0), Some(0.0));
        assert_eq!(bar.fraction_at(1000.0), Some(1.0));
    }

    #[test]
    fn collapsed_bar_has_no_fraction() {
        assert_eq!(Rect::new(10.0, 0.0).fraction_at(10.0), None);
        assert_eq!(Rect::new(10.0, f64::NAN).fraction_at(10.0), None);
        assert_eq!(Rect::new(10.0, 100.0).fraction_at(f64::NAN), None);
    }

    proptest! {
        #[test]
        fn fraction_always_in_unit_range(
            left in -1000.0f64..1000.0,
            width in 0.5f64..2000.0,
            x in -5000.0f64..5000.0,
        ) {
            let fraction = Rect::new(left, width).fraction_at(x).unwrap();
            prop_assert!((0.0..=1.0).contains(&fraction));
        }
    }
}
