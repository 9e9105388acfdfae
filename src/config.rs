use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    color::Rgb8,
    error::{MockupError, MockupResult},
};

/// Image-CDN settings shared by every generator.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CdnConfig {
    /// Host of the image CDN; emitted URLs use it and only URLs on it are usable.
    pub host: String,
    /// Overlay id of the stretched one-pixel asset used for preview boxes.
    pub one_pixel_asset: String,
    /// Render width used by the relative builder when none is requested.
    pub default_max_width: u32,
    /// Render width of cart-row thumbnails.
    pub thumbnail_width: u32,
    /// Render width of cart-row hover previews.
    pub hover_width: u32,
    /// Preview box opacity, `0..=100`.
    pub overlay_opacity: u8,
    /// Preview box colors, cycled by placement index.
    pub overlay_palette: Vec<String>,
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            host: "res.cloudinary.com".to_string(),
            one_pixel_asset: "one_pixel".to_string(),
            default_max_width: 900,
            thumbnail_width: 300,
            hover_width: 900,
            overlay_opacity: 35,
            overlay_palette: ["#e4007c", "#00a3e0", "#ffb000", "#2dbe60"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl CdnConfig {
    pub fn from_json_str(json: &str) -> MockupResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> MockupResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> MockupResult<()> {
        if self.host.trim().is_empty() {
            return Err(MockupError::config("host must not be empty"));
        }
        if self.one_pixel_asset.trim().is_empty() {
            return Err(MockupError::config("one_pixel_asset must not be empty"));
        }
        if self.default_max_width == 0 || self.thumbnail_width == 0 || self.hover_width == 0 {
            return Err(MockupError::config("render widths must be > 0"));
        }
        if self.overlay_opacity > 100 {
            return Err(MockupError::config("overlay_opacity must be within 0..=100"));
        }
        if let Some(bad) = self
            .overlay_palette
            .iter()
            .find(|c| Rgb8::parse_hex(c).is_none())
        {
            return Err(MockupError::config(format!(
                "overlay_palette entry '{bad}' is not a hex color"
            )));
        }
        Ok(())
    }

    /// Preview color for the `idx`-th placement; `None` when the palette is empty.
    pub fn overlay_color(&self, idx: usize) -> Option<Rgb8> {
        if self.overlay_palette.is_empty() {
            return None;
        }
        Rgb8::parse_hex(&self.overlay_palette[idx % self.overlay_palette.len()])
    }
}
