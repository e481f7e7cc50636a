//! Row bounding boxes and the layout policy that fills them in.

use serde::{Deserialize, Serialize};

/// A rectangle approximating a record's location on its page.
///
/// Coordinates use the page's top-left origin: `y0` is the top edge and `y1`
/// the bottom edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    /// Set when word matching failed and the box was synthesized instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BoundingBox {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            error: None,
        }
    }

    /// Attach a diagnostic message to this box.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// Decides where rows go on a page when text evidence is missing.
///
/// The horizontal extent is shared by every row of a document. The
/// synthetic box is a pure function of the row's ordinal within its table,
/// so rows without any matched word still get distinct, increasing
/// positions.
pub trait RowBoxPolicy {
    /// Left and right edge used for every row box.
    fn horizontal_extent(&self) -> (f64, f64);

    /// Box for a row that could not be located from its words.
    fn synthetic_box(&self, row_index: usize) -> BoundingBox;
}

impl<P: RowBoxPolicy + ?Sized> RowBoxPolicy for &P {
    fn horizontal_extent(&self) -> (f64, f64) {
        (**self).horizontal_extent()
    }

    fn synthetic_box(&self, row_index: usize) -> BoundingBox {
        (**self).synthetic_box(row_index)
    }
}

impl<P: RowBoxPolicy + ?Sized> RowBoxPolicy for Box<P> {
    fn horizontal_extent(&self) -> (f64, f64) {
        (**self).horizontal_extent()
    }

    fn synthetic_box(&self, row_index: usize) -> BoundingBox {
        (**self).synthetic_box(row_index)
    }
}

/// Fixed column width, fixed row height page template.
///
/// The defaults describe the university final-exam schedule layout. Other
/// templates can be loaded from TOML:
///
/// ```toml
/// x0 = 72.0
/// x1 = 540.0
/// base_offset = 120.0
/// row_pitch = 18.0
/// row_height = 12.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutTemplate {
    /// Left edge of the table body.
    pub x0: f64,
    /// Right edge of the table body.
    pub x1: f64,
    /// Top edge of row 0 when rows are synthesized.
    pub base_offset: f64,
    /// Vertical distance between consecutive synthesized rows.
    pub row_pitch: f64,
    /// Height of a synthesized row box.
    pub row_height: f64,
}

impl Default for LayoutTemplate {
    fn default() -> Self {
        Self {
            x0: 89.664,
            x1: 506.66304,
            base_offset: 100.0,
            row_pitch: 15.0,
            row_height: 10.0,
        }
    }
}

impl RowBoxPolicy for LayoutTemplate {
    fn horizontal_extent(&self) -> (f64, f64) {
        (self.x0, self.x1)
    }

    fn synthetic_box(&self, row_index: usize) -> BoundingBox {
        let y0 = self.base_offset + row_index as f64 * self.row_pitch;
        BoundingBox::new(self.x0, y0, self.x1, y0 + self.row_height)
    }
}
