//! Typed CDN transform segments.
//!
//! Geometry code only builds [`Segment`] values; the string grammar lives in the
//! `Display` impls below and nowhere else.

use std::fmt;

use crate::foundation::{
    color::Rgb8,
    core::{fmt_angle, fmt_px, fmt_rel},
};

const MIN_RELATIVE_EXTENT: f64 = 0.000_001;

/// Coordinate system of a segment's numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Units {
    /// Whole pixels of the base image.
    Pixels,
    /// Fractions of the base image, flagged with `fl_relative`.
    Relative,
}

impl Units {
    fn num(self, v: f64) -> String {
        match self {
            Units::Pixels => fmt_px(v),
            Units::Relative => fmt_rel(v),
        }
    }

    /// Layer dimension; never rounds down to an empty layer.
    fn extent(self, v: f64) -> String {
        match self {
            Units::Pixels => fmt_px(v.max(1.0)),
            Units::Relative => fmt_rel(v.max(MIN_RELATIVE_EXTENT)),
        }
    }

    fn flag(self) -> &'static str {
        match self {
            Units::Pixels => "",
            Units::Relative => ",fl_relative",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gravity {
    NorthWest,
    Center,
}

/// Layer position carried by an apply directive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerPos {
    pub gravity: Gravity,
    pub x: f64,
    pub y: f64,
}

impl LayerPos {
    fn render(&self, units: Units) -> String {
        let (x, y) = (units.num(self.x), units.num(self.y));
        match self.gravity {
            Gravity::NorthWest => format!("x_{x},y_{y},g_north_west"),
            Gravity::Center => format!("g_center,x_{x},y_{y}"),
        }
    }
}

/// One slash-delimited component of a transform URL.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    /// Fit the whole image within a render box.
    Resize {
        max_width: u32,
        max_height: Option<u32>,
    },
    /// Open a padded logo layer of the given size.
    OverlayPad {
        overlay_id: String,
        width: f64,
        height: f64,
        angle: Option<f64>,
        units: Units,
    },
    /// Close the current layer at a position.
    LayerApply { pos: LayerPos, units: Units },
    /// Open a stretched one-pixel layer used as a preview box.
    ColorBox {
        asset: String,
        width: f64,
        height: f64,
        angle: Option<f64>,
    },
    /// Tint the preview box and close it at a position.
    Colorize {
        color: Rgb8,
        opacity: u8,
        pos: LayerPos,
    },
}

fn angle_suffix(angle: Option<f64>) -> String {
    match angle {
        Some(a) if a != 0.0 => format!(",a_{}", fmt_angle(a)),
        _ => String::new(),
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Resize {
                max_width,
                max_height,
            } => {
                write!(f, "f_auto,q_auto,c_fit,w_{max_width}")?;
                if let Some(h) = max_height {
                    write!(f, ",h_{h}")?;
                }
                Ok(())
            }
            Segment::OverlayPad {
                overlay_id,
                width,
                height,
                angle,
                units,
            } => write!(
                f,
                "l_{overlay_id},c_pad{},w_{},h_{},g_center,b_auto{}",
                units.flag(),
                units.extent(*width),
                units.extent(*height),
                angle_suffix(*angle)
            ),
            Segment::LayerApply { pos, units } => {
                write!(f, "fl_layer_apply{},{}", units.flag(), pos.render(*units))
            }
            Segment::ColorBox {
                asset,
                width,
                height,
                angle,
            } => write!(
                f,
                "l_{asset},fl_relative,w_{},h_{}{}",
                Units::Relative.extent(*width),
                Units::Relative.extent(*height),
                angle_suffix(*angle)
            ),
            Segment::Colorize {
                color,
                opacity,
                pos,
            } => write!(
                f,
                "co_rgb:{},e_colorize:100,o_{},fl_layer_apply,fl_relative,{}",
                color.to_hex(),
                (*opacity).min(100),
                pos.render(Units::Relative)
            ),
        }
    }
}

/// Join segments into `https://<host>/<cloud>/image/upload/<seg>/.../<base_asset>`.
pub fn render_url(host: &str, cloud: &str, segments: &[Segment], base_asset: &str) -> String {
    let mut out = format!("https://{host}/{cloud}/image/upload/");
    for seg in segments {
        out.push_str(&seg.to_string());
        out.push('/');
    }
    out.push_str(base_asset);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/emit/segment.rs"]
mod tests;
