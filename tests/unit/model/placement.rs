use super::*;

#[test]
fn ingestion_applies_defaults_once() {
    let ps = parse_placements(
        r#"[
            {"name":"chest","xPercent":0.1,"yPercent":0.2,"wPercent":0.3,"hPercent":0.4,"active":true},
            {"name":"sleeve","xPercent":0.5,"yPercent":0.5,"wPercent":0.1,"hPercent":0.1,
             "extent":false,"back":true,"rotation":-15,"active":null}
        ]"#,
    )
    .unwrap();

    assert!(ps[0].extent);
    assert!(!ps[0].back);
    assert!(ps[0].active);
    assert_eq!(ps[0].angle(), 0.0);
    assert!(!ps[0].is_rotated());

    assert!(!ps[1].extent);
    assert!(ps[1].back);
    assert!(!ps[1].active);
    assert_eq!(ps[1].angle(), -15.0);
}

#[test]
fn null_extent_means_allowed() {
    let ps = parse_placements(
        r#"[{"name":"a","xPercent":0,"yPercent":0,"wPercent":1,"hPercent":1,"extent":null}]"#,
    )
    .unwrap();
    assert!(ps[0].extent);
}

#[test]
fn normalized_rect_requires_all_coordinates() {
    let p = Placement::new("a", 0.1, 0.2, 0.3, 0.4);
    let r = p.normalized_rect().unwrap();
    assert!((r.x1 - 0.4).abs() < 1e-12);
    assert!((r.y1 - 0.6).abs() < 1e-12);

    let mut missing = p.clone();
    missing.h_percent = None;
    assert!(missing.normalized_rect().is_none());

    let empty = Placement::new("b", 0.1, 0.1, 0.0, 0.2);
    assert!(empty.normalized_rect().is_none());
}

#[test]
fn active_filter_drops_inactive() {
    let mut off = Placement::new("off", 0.0, 0.0, 0.5, 0.5);
    off.active = false;
    let list = vec![Placement::new("on", 0.0, 0.0, 0.5, 0.5), off];
    let active = active_placements(&list);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name, "on");
}
