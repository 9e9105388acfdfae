//! logomock compiles logo-placement mockups into image-CDN transform URLs.
//!
//! Given a base product image, normalized placement boxes on it, and a set of logo art
//! variants, it works out how every logo is resized, positioned and rotated, then writes
//! that geometry as an ordered list of CDN transform segments. It never touches pixels.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: filter active placements and decide back/front art per slot
//!    (explicit scoped override, else the slot's `back` flag gated on usable back art).
//! 2. **Select**: pick the logo variant contrasting with the base image.
//! 3. **Fit**: aspect-fit the art into the box, optionally enlarged when `extent` allows.
//! 4. **Position**: top-left anchoring when unrotated, center anchoring when rotated.
//! 5. **Emit**: absolute-pixel or relative segments joined into a single URL.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Fail soft**: generators always return a URL; unusable input yields the base URL
//!   and unusable placements are skipped.
//! - **No IO**: fetching, caching and asset existence checks belong to callers.
#![forbid(unsafe_code)]

mod assets;
mod config;
mod emit;
mod foundation;
mod generate;
mod geometry;
mod model;
mod overrides;
mod variant;

pub use assets::ident::{AssetIdentifier, is_cdn_image_url, parse_asset_url};
pub use config::CdnConfig;
pub use emit::builder::{
    BuildInput, RelativeOpts, ResolvedPlacement, build_absolute, build_relative,
};
pub use emit::segment::{Gravity, LayerPos, Segment, Units, render_url};
pub use foundation::color::Rgb8;
pub use foundation::core::{Canvas, Orientation, Point, Rect, Size, Vec2};
pub use foundation::error::{MockupError, MockupResult};
pub use generate::{
    CartImageOpts, OverlayImageOpts, ProductImageOpts, ScopedOverrides, cart_hover_url,
    cart_thumbnail_url, product_image_url, product_overlay_image_url, resolve_placements,
};
pub use geometry::fit::{aspect_fit, compute_fit};
pub use geometry::position::{Anchor, position};
pub use model::logo::{LogoAsset, LogoSet, Shade, Side};
pub use model::placement::{Placement, active_placements, parse_placements};
pub use model::product::{BaseImage, CartLine, ColorVariant, PagePlacementOverrides, Product};
pub use overrides::store::{OverrideChoice, OverrideScope, OverrideStore};
pub use variant::select::{has_valid_back, is_valid_asset, pick_logo_variant};
