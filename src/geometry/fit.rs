//! Aspect-preserving logo fitting with enlargement heuristics.
//!
//! Plain aspect-fit makes extreme logos (a wide wordmark in a near-square box) look
//! too small, so when a placement allows `extent` the fit may grow past the box.
//! The thresholds below are fixed; URLs depend on them.

use crate::foundation::core::{Orientation, Size};

/// Relative aspect difference above which a cross-orientation fit is bumped.
const CROSS_ORIENTATION_DIFF: f64 = 0.3;
const CROSS_ORIENTATION_BUMP: f64 = 1.3;

/// Secondary-axis ratio at or below which a logo counts as strongly oriented.
const STRONG_ORIENTATION_RATIO: f64 = 0.8;
/// Share of the step enlargement kept for strongly oriented logos.
const STRONG_ORIENTATION_DAMPING: f64 = 0.8;

/// `(fit/box ratio below, multiplier)`, checked in order; later rows win.
const STEP_SCALES: [(f64, f64); 3] = [(0.8, 1.4), (0.6, 1.6), (0.4, 1.8)];

fn is_positive(s: Size) -> bool {
    s.width.is_finite() && s.height.is_finite() && s.width > 0.0 && s.height > 0.0
}

/// Largest size with the logo's aspect that fits inside the box without cropping.
pub fn aspect_fit(box_size: Size, logo: Size) -> Size {
    let logo_aspect = logo.width / logo.height;
    let box_aspect = box_size.width / box_size.height;
    if logo_aspect >= box_aspect {
        Size::new(box_size.width, box_size.width / logo_aspect)
    } else {
        Size::new(box_size.height * logo_aspect, box_size.height)
    }
}

/// Multiplier for a fit covering `ratio` of the box along its long axis.
///
/// Each threshold re-derives the multiplier from the same ratio; nothing compounds.
pub(crate) fn step_multiplier(ratio: f64) -> f64 {
    let mut m = 1.0;
    for (below, scale) in STEP_SCALES {
        if ratio < below {
            m = scale;
        }
    }
    m
}

fn cross_orientation_bump(box_size: Size, logo: Size) -> f64 {
    let box_aspect = box_size.width / box_size.height;
    let logo_aspect = logo.width / logo.height;
    let box_o = Orientation::of_aspect(box_aspect);
    let logo_o = Orientation::of_aspect(logo_aspect);
    let crossed = box_o != logo_o && box_o != Orientation::Square && logo_o != Orientation::Square;
    let diff = (logo_aspect - box_aspect).abs() / box_aspect;
    if crossed && diff > CROSS_ORIENTATION_DIFF {
        CROSS_ORIENTATION_BUMP
    } else {
        1.0
    }
}

fn orientation_step(box_size: Size, logo: Size, base: Size) -> f64 {
    let (ratio, strongly_oriented) = match Orientation::of_size(box_size) {
        Orientation::Horizontal => (
            base.width / box_size.width,
            logo.width > logo.height && logo.height / logo.width <= STRONG_ORIENTATION_RATIO,
        ),
        Orientation::Vertical => (
            base.height / box_size.height,
            logo.height > logo.width && logo.width / logo.height <= STRONG_ORIENTATION_RATIO,
        ),
        Orientation::Square => return 1.0,
    };
    let m = step_multiplier(ratio);
    if strongly_oriented {
        1.0 + (m - 1.0) * STRONG_ORIENTATION_DAMPING
    } else {
        m
    }
}

/// Fitted logo size for a placement box, both in pixels.
///
/// Returns `None` for empty or non-finite inputs. With `extent_allowed == false`
/// the result never exceeds the box.
pub fn compute_fit(box_size: Size, logo: Size, extent_allowed: bool) -> Option<Size> {
    if !is_positive(box_size) || !is_positive(logo) {
        return None;
    }

    let base = aspect_fit(box_size, logo);
    let mut fit = base;

    if extent_allowed {
        let bump = cross_orientation_bump(box_size, logo);
        let step = orientation_step(box_size, logo, base);
        fit = Size::new(fit.width * bump * step, fit.height * bump * step);
        tracing::trace!(bump, step, w = fit.width, h = fit.height, "extent fit");
    } else {
        fit = Size::new(fit.width.min(box_size.width), fit.height.min(box_size.height));
    }

    Some(fit)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/fit.rs"]
mod tests;
