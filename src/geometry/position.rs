use crate::foundation::core::{Canvas, Point, Rect, Size, Vec2};

/// Where a fitted logo is anchored on the base image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// Top-left corner of the fitted logo, used when unrotated.
    NorthWest { x: f64, y: f64 },
    /// Box center relative to the canvas center, used when rotated.
    ///
    /// The angle travels with the overlay (resize) directive, not with this anchor.
    Center { offset: Vec2 },
}

impl Anchor {
    /// Visual center of the fitted logo in canvas coordinates.
    pub fn visual_center(self, fit: Size, canvas: Canvas) -> Point {
        match self {
            Anchor::NorthWest { x, y } => Point::new(x + fit.width * 0.5, y + fit.height * 0.5),
            Anchor::Center { offset } => canvas.center() + offset,
        }
    }
}

/// Anchor a fitted logo inside its placement box.
///
/// Unrotated logos are centered in the box by their top-left corner. Rotated logos are
/// anchored by the box center so the rotated art stays centered on the box.
pub fn position(placement_box: Rect, fit: Size, canvas: Canvas, angle_deg: f64) -> Anchor {
    if angle_deg == 0.0 || !angle_deg.is_finite() {
        Anchor::NorthWest {
            x: placement_box.x0 + (placement_box.width() - fit.width) * 0.5,
            y: placement_box.y0 + (placement_box.height() - fit.height) * 0.5,
        }
    } else {
        Anchor::Center {
            offset: placement_box.center() - canvas.center(),
        }
    }
}
