//! Entry points for the four mockup call sites.
//!
//! Each generator picks a base image and a placement source, resolves back/front per
//! placement, and hands off to the absolute or relative builder. They never fail:
//! anything unusable yields the base image URL.

pub(crate) mod resolve;

use crate::{
    config::CdnConfig,
    emit::builder::{BuildInput, RelativeOpts, build_absolute, build_relative},
    model::{
        logo::{LogoSet, Shade},
        placement::Placement,
        product::{BaseImage, CartLine, PagePlacementOverrides, Product},
    },
};

pub use resolve::{ScopedOverrides, resolve_placements};

/// Options of [`product_image_url`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ProductImageOpts<'a> {
    /// Render width; `None` compiles in absolute pixels of the product image.
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    pub shade_override: Option<Shade>,
    pub overrides: Option<ScopedOverrides<'a>>,
    pub page_placements: Option<&'a PagePlacementOverrides>,
}

/// Options of [`product_overlay_image_url`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OverlayImageOpts<'a> {
    /// Render width; defaults to [`CdnConfig::default_max_width`].
    pub max_width: Option<u32>,
    /// Color SKU whose image is used as the base.
    pub color_index: Option<usize>,
    pub shade_override: Option<Shade>,
    pub overrides: Option<ScopedOverrides<'a>>,
    pub page_placements: Option<&'a PagePlacementOverrides>,
}

/// Options of the cart-row generators.
#[derive(Clone, Copy, Debug, Default)]
pub struct CartImageOpts<'a> {
    /// Render width; defaults to the configured thumbnail or hover width.
    pub max_width: Option<u32>,
    pub shade_override: Option<Shade>,
    pub overrides: Option<ScopedOverrides<'a>>,
}

struct Job<'a> {
    base: &'a BaseImage,
    placements: &'a [Placement],
    product_id: &'a str,
    shade_override: Option<Shade>,
    overrides: Option<ScopedOverrides<'a>>,
}

fn compile(cfg: &CdnConfig, job: &Job<'_>, logos: &LogoSet, relative: Option<RelativeOpts>) -> String {
    let resolved = resolve_placements(job.placements, job.product_id, logos, job.overrides, &cfg.host);
    let input = BuildInput {
        base_url: &job.base.url,
        placements: &resolved,
        logos,
        background_is_dark: job.base.is_dark(),
        shade_override: job.shade_override,
    };
    match relative {
        Some(opts) => build_relative(cfg, &input, &opts),
        None => build_absolute(cfg, &input, job.base.canvas()),
    }
}

fn relative_opts(max_width: u32, max_height: Option<u32>, base: &BaseImage, preview: bool) -> RelativeOpts {
    let canvas = base.canvas();
    RelativeOpts {
        max_width,
        max_height,
        base_size: canvas.is_known().then(|| canvas.size()),
        preview_boxes: preview,
    }
}

/// Full product image with every active logo placed.
pub fn product_image_url(
    cfg: &CdnConfig,
    product: &Product,
    logos: &LogoSet,
    opts: &ProductImageOpts<'_>,
) -> String {
    let job = Job {
        base: &product.image,
        placements: product.placements(opts.page_placements),
        product_id: &product.id,
        shade_override: opts.shade_override,
        overrides: opts.overrides,
    };
    // Absolute pixels need a known base size; otherwise the CDN scales relative segments.
    let relative = match opts.max_width {
        Some(w) => Some(relative_opts(w, opts.max_height, job.base, false)),
        None if !job.base.canvas().is_known() => Some(relative_opts(
            cfg.default_max_width,
            opts.max_height,
            job.base,
            false,
        )),
        None => None,
    };
    compile(cfg, &job, logos, relative)
}

/// Color-variant image with a tinted box per placement under the logos.
pub fn product_overlay_image_url(
    cfg: &CdnConfig,
    product: &Product,
    logos: &LogoSet,
    opts: &OverlayImageOpts<'_>,
) -> String {
    let job = Job {
        base: product.base_for(opts.color_index),
        placements: product.placements(opts.page_placements),
        product_id: &product.id,
        shade_override: opts.shade_override,
        overrides: opts.overrides,
    };
    let width = opts.max_width.unwrap_or(cfg.default_max_width);
    compile(cfg, &job, logos, Some(relative_opts(width, None, job.base, true)))
}

/// Cart-row thumbnail from the line's frozen snapshot.
pub fn cart_thumbnail_url(
    cfg: &CdnConfig,
    line: &CartLine,
    logos: &LogoSet,
    opts: &CartImageOpts<'_>,
) -> String {
    let job = Job {
        base: &line.thumbnail,
        placements: &line.placement_coordinates,
        product_id: &line.product_id,
        shade_override: opts.shade_override,
        overrides: opts.overrides,
    };
    let width = opts.max_width.unwrap_or(cfg.thumbnail_width);
    compile(cfg, &job, logos, Some(relative_opts(width, None, job.base, false)))
}

/// Larger cart-row preview; prefers the live product's color image over the snapshot.
///
/// Placements always come from the snapshot so the preview matches what was ordered.
pub fn cart_hover_url(
    cfg: &CdnConfig,
    line: &CartLine,
    live: Option<&Product>,
    logos: &LogoSet,
    opts: &CartImageOpts<'_>,
) -> String {
    let base = live
        .filter(|p| p.id == line.product_id)
        .map(|p| p.base_for(line.color_index))
        .filter(|img| !img.url.trim().is_empty())
        .unwrap_or(&line.thumbnail);
    let job = Job {
        base,
        placements: &line.placement_coordinates,
        product_id: &line.product_id,
        shade_override: opts.shade_override,
        overrides: opts.overrides,
    };
    let width = opts.max_width.unwrap_or(cfg.hover_width);
    compile(cfg, &job, logos, Some(relative_opts(width, None, job.base, false)))
}

#[cfg(test)]
#[path = "../../tests/unit/generate/mod.rs"]
mod tests;
