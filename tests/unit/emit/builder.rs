use super::*;
use crate::model::logo::LogoAsset;

const BASE: &str = "https://res.cloudinary.com/acme/image/upload/v7/tees/white.jpg";
const MARK: &str = "https://res.cloudinary.com/acme/image/upload/v1/logos/mark.png";

fn logos(w: f64, h: f64) -> LogoSet {
    LogoSet {
        logo_darker: Some(LogoAsset::new(MARK, w, h)),
        ..LogoSet::default()
    }
}

fn resolved(ps: &[Placement]) -> Vec<ResolvedPlacement<'_>> {
    ps.iter()
        .map(|p| ResolvedPlacement {
            placement: p,
            use_back: false,
        })
        .collect()
}

fn input<'a>(
    base_url: &'a str,
    placements: &'a [ResolvedPlacement<'a>],
    logos: &'a LogoSet,
) -> BuildInput<'a> {
    BuildInput {
        base_url,
        placements,
        logos,
        background_is_dark: false,
        shade_override: None,
    }
}

#[test]
fn absolute_single_placement_scenario() {
    let ps = [Placement::new("chest", 0.1, 0.1, 0.2, 0.2)];
    let rs = resolved(&ps);
    let set = logos(300.0, 100.0);
    let url = build_absolute(
        &CdnConfig::default(),
        &input(BASE, &rs, &set),
        Canvas::new(800.0, 800.0),
    );
    assert_eq!(
        url,
        "https://res.cloudinary.com/acme/image/upload/\
         l_logos:mark,c_pad,w_160,h_53,g_center,b_auto/\
         fl_layer_apply,x_80,y_133,g_north_west/tees/white.jpg"
    );
}

#[test]
fn absolute_rotated_placement_uses_center_offset() {
    let ps = [Placement::new("chest", 0.1, 0.1, 0.2, 0.1).with_rotation(45.0)];
    let rs = resolved(&ps);
    let set = logos(200.0, 100.0);
    let url = build_absolute(
        &CdnConfig::default(),
        &input(BASE, &rs, &set),
        Canvas::new(1000.0, 1000.0),
    );
    assert!(url.contains("/l_logos:mark,c_pad,w_200,h_100,g_center,b_auto,a_45/"));
    assert!(url.contains("/fl_layer_apply,g_center,x_-300,y_-350/"));
}

#[test]
fn extreme_logo_with_no_extent_stays_in_box() {
    let ps = [Placement::new("chest", 0.1, 0.1, 0.2, 0.2).with_extent(false)];
    let rs = resolved(&ps);
    let set = logos(2000.0, 10.0);
    let url = build_absolute(
        &CdnConfig::default(),
        &input(BASE, &rs, &set),
        Canvas::new(800.0, 800.0),
    );
    assert!(url.contains(",w_160,h_1,"));
}

#[test]
fn sub_pixel_dimensions_never_render_an_empty_layer() {
    let ps = [
        Placement::new("flat", 0.1, 0.1, 0.2, 0.2).with_extent(false),
        Placement::new("turned", 0.5, 0.5, 0.2, 0.2)
            .with_extent(false)
            .with_rotation(-30.0),
    ];
    let rs = resolved(&ps);
    let set = logos(5000.0, 10.0);
    let url = build_absolute(
        &CdnConfig::default(),
        &input(BASE, &rs, &set),
        Canvas::new(800.0, 800.0),
    );
    assert_eq!(url.matches("fl_layer_apply").count(), 2);
    assert!(!url.contains(",h_0,"));
    assert!(!url.contains(",w_0,"));
    assert!(url.contains("l_logos:mark,c_pad,w_160,h_1,g_center,b_auto/"));
    assert!(url.contains("l_logos:mark,c_pad,w_160,h_1,g_center,b_auto,a_-30/"));
}

#[test]
fn pairs_follow_placement_order_and_skip_broken_ones() {
    let mut missing = Placement::new("broken", 0.0, 0.0, 0.2, 0.2);
    missing.x_percent = None;
    let ps = [
        Placement::new("a", 0.0, 0.0, 0.5, 0.5),
        missing,
        Placement::new("b", 0.5, 0.5, 0.5, 0.5),
    ];
    let rs = resolved(&ps);
    let set = logos(100.0, 100.0);
    let url = build_absolute(
        &CdnConfig::default(),
        &input(BASE, &rs, &set),
        Canvas::new(100.0, 100.0),
    );
    assert_eq!(url.matches("fl_layer_apply").count(), 2);
    let a = url.find("x_0,y_0").unwrap();
    let b = url.find("x_50,y_50").unwrap();
    assert!(a < b);
}

#[test]
fn unusable_inputs_return_base_untouched() {
    let ps = [Placement::new("chest", 0.1, 0.1, 0.2, 0.2)];
    let rs = resolved(&ps);
    let cfg = CdnConfig::default();
    let set = logos(300.0, 100.0);
    let canvas = Canvas::new(800.0, 800.0);

    let foreign = "https://example.com/white.jpg";
    assert_eq!(build_absolute(&cfg, &input(foreign, &rs, &set), canvas), foreign);
    assert_eq!(build_absolute(&cfg, &input(BASE, &[], &set), canvas), BASE);
    assert_eq!(
        build_absolute(&cfg, &input(BASE, &rs, &set), Canvas::new(0.0, 800.0)),
        BASE
    );

    let no_default = LogoSet {
        logo_lighter: Some(LogoAsset::new(MARK, 10.0, 10.0)),
        ..LogoSet::default()
    };
    assert_eq!(build_absolute(&cfg, &input(BASE, &rs, &no_default), canvas), BASE);
    assert_eq!(
        build_relative(&cfg, &input(BASE, &rs, &no_default), &RelativeOpts::default()),
        BASE
    );
}

#[test]
fn no_pairs_means_no_wrapper() {
    let zero_size_art = logos(0.0, 0.0);
    let ps = [Placement::new("chest", 0.1, 0.1, 0.2, 0.2)];
    let rs = resolved(&ps);
    let cfg = CdnConfig::default();
    assert_eq!(
        build_relative(&cfg, &input(BASE, &rs, &zero_size_art), &RelativeOpts::default()),
        BASE
    );
}

#[test]
fn relative_builder_prefixes_resize_and_uses_fractions() {
    let ps = [Placement::new("chest", 0.1, 0.1, 0.2, 0.2)];
    let rs = resolved(&ps);
    let set = logos(300.0, 100.0);
    let opts = RelativeOpts {
        base_size: Some(Size::new(800.0, 800.0)),
        ..RelativeOpts::default()
    };
    let url = build_relative(&CdnConfig::default(), &input(BASE, &rs, &set), &opts);
    assert_eq!(
        url,
        "https://res.cloudinary.com/acme/image/upload/f_auto,q_auto,c_fit,w_900/\
         l_logos:mark,c_pad,fl_relative,w_0.200000,h_0.066667,g_center,b_auto/\
         fl_layer_apply,fl_relative,x_0.100000,y_0.166667,g_north_west/tees/white.jpg"
    );
}

#[test]
fn relative_rotation_offsets_are_fractions_of_render_canvas() {
    let ps = [Placement::new("chest", 0.1, 0.1, 0.2, 0.1).with_rotation(-30.0)];
    let rs = resolved(&ps);
    let set = logos(200.0, 100.0);
    let opts = RelativeOpts {
        max_width: 500,
        max_height: Some(700),
        base_size: Some(Size::new(1000.0, 1000.0)),
        preview_boxes: false,
    };
    let url = build_relative(&CdnConfig::default(), &input(BASE, &rs, &set), &opts);
    assert!(url.contains("/f_auto,q_auto,c_fit,w_500,h_700/"));
    assert!(url.contains(",a_-30/"));
    assert!(url.contains("/fl_layer_apply,fl_relative,g_center,x_-0.300000,y_-0.350000/"));
}

#[test]
fn render_canvas_follows_base_aspect() {
    let c = render_canvas(&RelativeOpts {
        max_width: 900,
        max_height: None,
        base_size: Some(Size::new(1200.0, 1600.0)),
        preview_boxes: false,
    });
    assert_eq!(c, Canvas::new(900.0, 1200.0));

    let unknown = render_canvas(&RelativeOpts {
        max_width: 300,
        ..RelativeOpts::default()
    });
    assert_eq!(unknown, Canvas::new(300.0, 300.0));
}

#[test]
fn preview_boxes_precede_logo_pairs() {
    let ps = [
        Placement::new("chest", 0.1, 0.1, 0.2, 0.2),
        Placement::new("sleeve", 0.6, 0.2, 0.1, 0.1).with_rotation(90.0),
    ];
    let rs = resolved(&ps);
    let set = logos(100.0, 100.0);
    let opts = RelativeOpts {
        preview_boxes: true,
        ..RelativeOpts::default()
    };
    let url = build_relative(&CdnConfig::default(), &input(BASE, &rs, &set), &opts);

    assert!(url.contains(
        "/l_one_pixel,fl_relative,w_0.200000,h_0.200000/\
         co_rgb:e4007c,e_colorize:100,o_35,fl_layer_apply,fl_relative,x_0.100000,y_0.100000,g_north_west/"
    ));
    assert!(url.contains(
        "/l_one_pixel,fl_relative,w_0.100000,h_0.100000,a_90/\
         co_rgb:00a3e0,e_colorize:100,o_35,fl_layer_apply,fl_relative,g_center,x_0.150000,y_-0.250000/"
    ));
    let last_box = url.rfind("co_rgb:").unwrap();
    let first_logo = url.find("l_logos:mark").unwrap();
    assert!(last_box < first_logo);
}
