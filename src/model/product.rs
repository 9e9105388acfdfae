use std::collections::HashMap;

use crate::{
    foundation::color::Rgb8,
    foundation::core::Canvas,
    foundation::error::MockupResult,
    model::de::{id_string, null_as_default},
    model::placement::Placement,
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// The photographed or rendered image logos are composited onto.
pub struct BaseImage {
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub width: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub height: f64,
    /// Measured dominant background color, e.g. `#1f2a44`.
    #[serde(default, alias = "dominant_color_hex", alias = "dominantColor")]
    pub dominant_color_hex: Option<String>,
}

impl BaseImage {
    pub fn new(url: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            url: url.into(),
            width,
            height,
            dominant_color_hex: None,
        }
    }

    pub fn with_dominant_color(mut self, hex: impl Into<String>) -> Self {
        self.dominant_color_hex = Some(hex.into());
        self
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Dark when the dominant color parses and its luma is below mid-gray.
    pub fn is_dark(&self) -> bool {
        self.dominant_color_hex
            .as_deref()
            .and_then(Rgb8::parse_hex)
            .is_some_and(Rgb8::is_dark)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A color SKU of a product with its own base image.
pub struct ColorVariant {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub image: BaseImage,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Product data as exposed by the catalog.
pub struct Product {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub image: BaseImage,
    #[serde(default, deserialize_with = "null_as_default")]
    pub placement_coordinates: Vec<Placement>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color_variants: Vec<ColorVariant>,
}

impl Product {
    pub fn from_json_str(json: &str) -> MockupResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Base image for a color SKU, falling back to the product's own image.
    pub fn base_for(&self, color_index: Option<usize>) -> &BaseImage {
        color_index
            .and_then(|i| self.color_variants.get(i))
            .map(|v| &v.image)
            .filter(|img| !img.url.trim().is_empty())
            .unwrap_or(&self.image)
    }

    /// Placement list, preferring a page-level override for this product.
    pub fn placements<'a>(&'a self, page: Option<&'a PagePlacementOverrides>) -> &'a [Placement] {
        page.and_then(|p| p.get(&self.id))
            .unwrap_or(self.placement_coordinates.as_slice())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Frozen state of a cart row, captured when the item was added.
pub struct CartLine {
    #[serde(deserialize_with = "id_string")]
    pub product_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub placement_coordinates: Vec<Placement>,
    /// Resolved thumbnail at the time the line was created.
    pub thumbnail: BaseImage,
    #[serde(default)]
    pub color_index: Option<usize>,
}

impl CartLine {
    pub fn from_json_str(json: &str) -> MockupResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Page-level placement lists keyed by product id.
pub struct PagePlacementOverrides(pub HashMap<String, Vec<Placement>>);

impl PagePlacementOverrides {
    pub fn from_json_str(json: &str) -> MockupResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, product_id: impl Into<String>, placements: Vec<Placement>) {
        self.0.insert(product_id.into(), placements);
    }

    pub fn get(&self, product_id: &str) -> Option<&[Placement]> {
        self.0.get(product_id).map(Vec::as_slice)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/product.rs"]
mod tests;
