use super::*;

const EPS: f64 = 1e-9;

fn fit(bw: f64, bh: f64, lw: f64, lh: f64, extent: bool) -> Size {
    compute_fit(Size::new(bw, bh), Size::new(lw, lh), extent).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn square_box_is_plain_aspect_fit() {
    let s = fit(160.0, 160.0, 300.0, 100.0, true);
    assert!(approx(s.width, 160.0));
    assert!(approx(s.height, 160.0 / 3.0));
    assert_eq!(s.height.round(), 53.0);
}

#[test]
fn no_extent_preserves_aspect_and_stays_inside() {
    let boxes = [(40.0, 40.0), (160.0, 60.0), (30.0, 200.0), (1.0, 1.0)];
    let logos = [(500.0, 10.0), (10.0, 500.0), (300.0, 100.0), (64.0, 64.0), (2000.0, 10.0)];
    for (bw, bh) in boxes {
        for (lw, lh) in logos {
            let s = fit(bw, bh, lw, lh, false);
            assert!(s.width <= bw + EPS && s.height <= bh + EPS, "{bw}x{bh} {lw}x{lh}");
            assert!((s.width / s.height - lw / lh).abs() / (lw / lh) < 1e-9);
        }
    }
}

#[test]
fn extreme_aspect_never_escapes_clamped_box() {
    let s = fit(40.0, 40.0, 500.0, 10.0, false);
    assert!(s.width <= 40.0 && s.height <= 40.0);
    let s = fit(160.0, 160.0, 2000.0, 10.0, false);
    assert!(s.width <= 160.0 && s.height <= 160.0);
}

#[test]
fn step_thresholds_are_strict_and_not_compounded() {
    assert_eq!(step_multiplier(0.9), 1.0);
    assert_eq!(step_multiplier(0.8), 1.0);
    assert_eq!(step_multiplier(0.79), 1.4);
    assert_eq!(step_multiplier(0.6), 1.4);
    assert_eq!(step_multiplier(0.59), 1.6);
    assert_eq!(step_multiplier(0.39), 1.8);
    assert_eq!(step_multiplier(0.0), 1.8);
}

#[test]
fn horizontal_box_enlarges_small_square_logo() {
    // Height-bound fit covers a third of the width: largest step.
    let s = fit(300.0, 100.0, 100.0, 100.0, true);
    assert!(approx(s.width, 180.0));
    assert!(approx(s.height, 180.0));
}

#[test]
fn strongly_horizontal_logo_gets_damped_step() {
    // 150x100 fit covers half the width (1.6x), damped to 1.48x.
    let s = fit(300.0, 100.0, 150.0, 100.0, true);
    assert!(approx(s.width, 222.0));
    assert!(approx(s.height, 148.0));
}

#[test]
fn vertical_box_mirrors_horizontal_case() {
    let s = fit(100.0, 300.0, 100.0, 100.0, true);
    assert!(approx(s.width, 180.0));
    assert!(approx(s.height, 180.0));

    let damped = fit(100.0, 300.0, 100.0, 150.0, true);
    assert!(approx(damped.width, 148.0));
    assert!(approx(damped.height, 222.0));
}

#[test]
fn cross_orientation_bump_stacks_with_step() {
    // Vertical logo in a horizontal box: 1.3x bump, then 1.8x from the 0.175 width ratio.
    let s = fit(400.0, 100.0, 70.0, 100.0, true);
    assert!(approx(s.width, 70.0 * 1.3 * 1.8));
    assert!(approx(s.height, 100.0 * 1.3 * 1.8));
}

#[test]
fn extent_disabled_discards_heuristics() {
    let s = fit(300.0, 100.0, 100.0, 100.0, false);
    assert!(approx(s.width, 100.0));
    assert!(approx(s.height, 100.0));
}

#[test]
fn degenerate_inputs_are_rejected() {
    assert!(compute_fit(Size::new(0.0, 10.0), Size::new(1.0, 1.0), true).is_none());
    assert!(compute_fit(Size::new(10.0, 10.0), Size::new(1.0, 0.0), true).is_none());
    assert!(compute_fit(Size::new(f64::NAN, 10.0), Size::new(1.0, 1.0), false).is_none());
}
