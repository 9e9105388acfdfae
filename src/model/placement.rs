use crate::{
    foundation::core::Rect,
    foundation::error::MockupResult,
    model::de::{default_true, null_as_default, null_as_true},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One logo slot on a base image.
///
/// The box is normalized to the base image's natural size. Defaults are applied once
/// here at ingestion: `extent` absent means `true`, `back` and `active` absent mean `false`.
pub struct Placement {
    /// Stable identifier, unique per product; keys UI state and overrides.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Left edge as a fraction of base width.
    #[serde(default)]
    pub x_percent: Option<f64>,
    /// Top edge as a fraction of base height.
    #[serde(default)]
    pub y_percent: Option<f64>,
    /// Box width as a fraction of base width.
    #[serde(default)]
    pub w_percent: Option<f64>,
    /// Box height as a fraction of base height.
    #[serde(default)]
    pub h_percent: Option<f64>,
    /// Clockwise rotation of the fitted logo around the box center, in degrees.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rotation: f64,
    /// Primary visibility switch.
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,
    /// Whether this slot may use a back logo variant.
    #[serde(default, deserialize_with = "null_as_default")]
    pub back: bool,
    /// Permission for the fitted logo to grow past the box.
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub extent: bool,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            name: String::new(),
            x_percent: None,
            y_percent: None,
            w_percent: None,
            h_percent: None,
            rotation: 0.0,
            active: false,
            back: false,
            extent: true,
        }
    }
}

impl Placement {
    /// Active placement covering the given normalized box.
    pub fn new(name: impl Into<String>, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            name: name.into(),
            x_percent: Some(x),
            y_percent: Some(y),
            w_percent: Some(w),
            h_percent: Some(h),
            active: true,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, deg: f64) -> Self {
        self.rotation = deg;
        self
    }

    pub fn with_back(mut self, back: bool) -> Self {
        self.back = back;
        self
    }

    pub fn with_extent(mut self, extent: bool) -> Self {
        self.extent = extent;
        self
    }

    /// Normalized box, or `None` when a coordinate is missing, non-finite, or the box is empty.
    pub fn normalized_rect(&self) -> Option<Rect> {
        let x = self.x_percent.filter(|v| v.is_finite())?;
        let y = self.y_percent.filter(|v| v.is_finite())?;
        let w = self.w_percent.filter(|v| v.is_finite())?;
        let h = self.h_percent.filter(|v| v.is_finite())?;
        if w <= 0.0 || h <= 0.0 {
            return None;
        }
        Some(Rect::new(x, y, x + w, y + h))
    }

    /// Rotation angle, with non-finite values treated as unrotated.
    pub fn angle(&self) -> f64 {
        if self.rotation.is_finite() {
            self.rotation
        } else {
            0.0
        }
    }

    pub fn is_rotated(&self) -> bool {
        self.angle() != 0.0
    }
}

/// Parse a `placement_coordinates` JSON array.
pub fn parse_placements(json: &str) -> MockupResult<Vec<Placement>> {
    Ok(serde_json::from_str(json)?)
}

/// Keep only placements whose `active` flag is set.
pub fn active_placements(placements: &[Placement]) -> Vec<&Placement> {
    placements.iter().filter(|p| p.active).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/model/placement.rs"]
mod tests;
