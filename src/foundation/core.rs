pub use kurbo::{Point, Rect, Size, Vec2};

/// Pixel dimensions of the image a placement list is laid over.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A canvas is usable only when both sides are finite and positive.
    pub fn is_known(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn center(self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Coarse aspect-ratio class shared by placement boxes and logo art.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Square,
}

impl Orientation {
    pub const HORIZONTAL_MIN: f64 = 1.2;
    pub const VERTICAL_MAX: f64 = 0.8;

    /// Classify a width/height ratio.
    pub fn of_aspect(aspect: f64) -> Self {
        if aspect >= Self::HORIZONTAL_MIN {
            Self::Horizontal
        } else if aspect <= Self::VERTICAL_MAX {
            Self::Vertical
        } else {
            Self::Square
        }
    }

    pub fn of_size(size: Size) -> Self {
        Self::of_aspect(size.width / size.height)
    }
}

/// Whole-pixel rendering used by the absolute grammar.
pub(crate) fn fmt_px(v: f64) -> String {
    let r = v.round();
    // Avoid "-0".
    if r == 0.0 {
        "0".to_string()
    } else {
        format!("{r:.0}")
    }
}

/// Six-decimal rendering used by `fl_relative` segments.
pub(crate) fn fmt_rel(v: f64) -> String {
    let s = format!("{v:.6}");
    if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        "0.000000".to_string()
    } else {
        s
    }
}

/// Shortest decimal form of an angle in degrees (`45`, `-12.5`).
pub(crate) fn fmt_angle(deg: f64) -> String {
    format!("{deg}")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
