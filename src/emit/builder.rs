use crate::{
    assets::ident::{AssetIdentifier, is_cdn_image_url, parse_asset_url},
    config::CdnConfig,
    emit::segment::{Gravity, LayerPos, Segment, Units, render_url},
    foundation::core::{Canvas, Rect, Size},
    geometry::fit::compute_fit,
    geometry::position::{Anchor, position},
    model::logo::{LogoSet, Shade},
    model::placement::Placement,
    variant::select::{is_valid_asset, pick_logo_variant},
};

/// A placement together with its resolved back/front decision.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedPlacement<'a> {
    pub placement: &'a Placement,
    pub use_back: bool,
}

/// Everything both builders need besides the output units.
#[derive(Clone, Copy, Debug)]
pub struct BuildInput<'a> {
    pub base_url: &'a str,
    pub placements: &'a [ResolvedPlacement<'a>],
    pub logos: &'a LogoSet,
    pub background_is_dark: bool,
    pub shade_override: Option<Shade>,
}

/// Options of the relative builder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RelativeOpts {
    /// Target render width.
    pub max_width: u32,
    /// Optional render height bound.
    pub max_height: Option<u32>,
    /// Natural base size, when known; fixes the render aspect.
    pub base_size: Option<Size>,
    /// Emit a tinted box per placement before the logos.
    pub preview_boxes: bool,
}

impl Default for RelativeOpts {
    fn default() -> Self {
        Self {
            max_width: 900,
            max_height: None,
            base_size: None,
            preview_boxes: false,
        }
    }
}

/// Fitted and anchored logo, in pixels of some canvas.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PlacedLogo {
    pub overlay_id: String,
    pub fit: Size,
    pub anchor: Anchor,
    pub angle: Option<f64>,
}

impl PlacedLogo {
    /// Overlay/apply pair, scaled into `units` for `canvas`.
    fn segments(&self, canvas: Canvas, units: Units) -> [Segment; 2] {
        let (sx, sy) = match units {
            Units::Pixels => (1.0, 1.0),
            Units::Relative => (1.0 / canvas.width, 1.0 / canvas.height),
        };
        let pos = match self.anchor {
            Anchor::NorthWest { x, y } => LayerPos {
                gravity: Gravity::NorthWest,
                x: x * sx,
                y: y * sy,
            },
            Anchor::Center { offset } => LayerPos {
                gravity: Gravity::Center,
                x: offset.x * sx,
                y: offset.y * sy,
            },
        };
        [
            Segment::OverlayPad {
                overlay_id: self.overlay_id.clone(),
                width: self.fit.width * sx,
                height: self.fit.height * sy,
                angle: self.angle,
                units,
            },
            Segment::LayerApply { pos, units },
        ]
    }
}

/// Shared preconditions; `None` means the base URL must be returned untouched.
fn base_gate(cfg: &CdnConfig, input: &BuildInput<'_>) -> Option<AssetIdentifier> {
    if !is_cdn_image_url(input.base_url, &cfg.host) {
        tracing::debug!(url = input.base_url, "base is not a cdn image");
        return None;
    }
    if input.placements.is_empty() {
        return None;
    }
    if !is_valid_asset(input.logos.logo_darker.as_ref(), &cfg.host) {
        tracing::debug!("logo set has no usable default art");
        return None;
    }
    Some(parse_asset_url(input.base_url))
}

/// Resolve art, fit and anchor for one placement; `None` skips it.
pub(crate) fn place_logo(
    cfg: &CdnConfig,
    input: &BuildInput<'_>,
    resolved: &ResolvedPlacement<'_>,
    canvas: Canvas,
) -> Option<PlacedLogo> {
    let p = resolved.placement;
    let Some(rect) = p.normalized_rect() else {
        tracing::trace!(name = %p.name, "skip: incomplete box");
        return None;
    };
    let px = Rect::new(
        rect.x0 * canvas.width,
        rect.y0 * canvas.height,
        rect.x1 * canvas.width,
        rect.y1 * canvas.height,
    );

    let Some(asset) = pick_logo_variant(
        input.logos,
        resolved.use_back,
        input.background_is_dark,
        input.shade_override,
        &cfg.host,
    ) else {
        tracing::trace!(name = %p.name, "skip: no usable logo variant");
        return None;
    };
    let ident = parse_asset_url(&asset.url);
    if !ident.is_usable() {
        tracing::trace!(name = %p.name, url = %asset.url, "skip: unparseable logo url");
        return None;
    }
    let natural = asset.natural_size()?;
    let fit = compute_fit(px.size(), natural, p.extent)?;
    let angle = p.angle();

    Some(PlacedLogo {
        overlay_id: ident.overlay_id,
        fit,
        anchor: position(px, fit, canvas, angle),
        angle: p.is_rotated().then_some(angle),
    })
}

/// Compile placements into an absolute-pixel transform URL.
///
/// Returns `input.base_url` unchanged when nothing could be placed.
#[tracing::instrument(skip_all, fields(placements = input.placements.len()))]
pub fn build_absolute(cfg: &CdnConfig, input: &BuildInput<'_>, canvas: Canvas) -> String {
    if !canvas.is_known() {
        tracing::debug!("canvas size unknown");
        return input.base_url.to_string();
    }
    let Some(base) = base_gate(cfg, input) else {
        return input.base_url.to_string();
    };

    let segments: Vec<Segment> = input
        .placements
        .iter()
        .filter_map(|r| place_logo(cfg, input, r, canvas))
        .flat_map(|placed| placed.segments(canvas, Units::Pixels))
        .collect();

    if segments.is_empty() {
        return input.base_url.to_string();
    }
    render_url(&cfg.host, &base.cloud, &segments, &base.base_asset)
}

/// Render canvas of the relative builder: `max_width` wide with the base's aspect.
pub(crate) fn render_canvas(opts: &RelativeOpts) -> Canvas {
    let w = f64::from(opts.max_width.max(1));
    let h = match opts.base_size {
        Some(s) if s.width > 0.0 && s.height > 0.0 && s.width.is_finite() && s.height.is_finite() => {
            w * s.height / s.width
        }
        _ => opts.max_height.map(f64::from).unwrap_or(w),
    };
    Canvas::new(w, h)
}

fn preview_box(cfg: &CdnConfig, idx: usize, p: &Placement) -> Option<[Segment; 2]> {
    let rect = p.normalized_rect()?;
    let color = cfg.overlay_color(idx)?;
    let unit = Canvas::new(1.0, 1.0);
    let angle = p.angle();
    let pos = match position(rect, rect.size(), unit, angle) {
        Anchor::NorthWest { x, y } => LayerPos {
            gravity: Gravity::NorthWest,
            x,
            y,
        },
        Anchor::Center { offset } => LayerPos {
            gravity: Gravity::Center,
            x: offset.x,
            y: offset.y,
        },
    };
    Some([
        Segment::ColorBox {
            asset: cfg.one_pixel_asset.clone(),
            width: rect.width(),
            height: rect.height(),
            angle: p.is_rotated().then_some(angle),
        },
        Segment::Colorize {
            color,
            opacity: cfg.overlay_opacity,
            pos,
        },
    ])
}

/// Compile placements into a relative transform URL rendered `max_width` wide.
///
/// Returns `input.base_url` unchanged when nothing could be placed.
#[tracing::instrument(skip_all, fields(placements = input.placements.len(), max_width = opts.max_width))]
pub fn build_relative(cfg: &CdnConfig, input: &BuildInput<'_>, opts: &RelativeOpts) -> String {
    let Some(base) = base_gate(cfg, input) else {
        return input.base_url.to_string();
    };
    let canvas = render_canvas(opts);

    let mut body = Vec::<Segment>::new();
    if opts.preview_boxes {
        for (idx, r) in input.placements.iter().enumerate() {
            if let Some(pair) = preview_box(cfg, idx, r.placement) {
                body.extend(pair);
            }
        }
    }
    body.extend(
        input
            .placements
            .iter()
            .filter_map(|r| place_logo(cfg, input, r, canvas))
            .flat_map(|placed| placed.segments(canvas, Units::Relative)),
    );

    if body.is_empty() {
        return input.base_url.to_string();
    }

    let mut segments = Vec::with_capacity(body.len() + 1);
    segments.push(Segment::Resize {
        max_width: opts.max_width.max(1),
        max_height: opts.max_height,
    });
    segments.extend(body);
    render_url(&cfg.host, &base.cloud, &segments, &base.base_asset)
}

#[cfg(test)]
#[path = "../../tests/unit/emit/builder.rs"]
mod tests;
