use super::*;

const HOST: &str = "res.cloudinary.com";

#[test]
fn folders_join_with_colons() {
    let id = parse_asset_url(
        "https://res.cloudinary.com/acme/image/upload/v1712345678/logos/client-7/mark.png",
    );
    assert_eq!(id.cloud, "acme");
    assert_eq!(id.delivery, "image");
    assert_eq!(id.overlay_id, "logos:client-7:mark");
    assert_eq!(id.base_asset, "logos/client-7/mark.png");
    assert!(id.is_usable());
}

#[test]
fn strips_existing_transforms_and_version() {
    let id = parse_asset_url(
        "https://res.cloudinary.com/acme/image/upload/c_fit,w_400/e_trim,q_auto/v12/tees/white.jpg",
    );
    assert_eq!(id.overlay_id, "tees:white");
    assert_eq!(id.base_asset, "tees/white.jpg");
}

#[test]
fn flat_file_uses_bare_stem() {
    let id = parse_asset_url("https://res.cloudinary.com/acme/image/upload/v3/mark.svg");
    assert_eq!(id.overlay_id, "mark");
    assert_eq!(id.base_asset, "mark.svg");
}

#[test]
fn seo_short_form_uses_bare_stem() {
    let id = parse_asset_url("https://res.cloudinary.com/acme/images/upload/brand/shirt-logo.png");
    assert_eq!(id.delivery, "images");
    assert_eq!(id.overlay_id, "shirt-logo");
    assert_eq!(id.base_asset, "brand/shirt-logo.png");
}

#[test]
fn malformed_urls_yield_empty_fields() {
    for raw in [
        "",
        "not a url",
        "https://res.cloudinary.com/acme/raw/upload/x.png",
        "https://res.cloudinary.com/acme/image/fetch/x.png",
        "https://res.cloudinary.com/acme/image/upload/v12/",
        "https://res.cloudinary.com/acme/image/upload/c_fit,w_2",
    ] {
        let id = parse_asset_url(raw);
        assert_eq!(id, AssetIdentifier::default(), "input: {raw:?}");
        assert!(!id.is_usable());
    }
}

#[test]
fn cdn_image_check_requires_host_and_image_delivery() {
    assert!(is_cdn_image_url(
        "https://res.cloudinary.com/acme/image/upload/a/b.png",
        HOST
    ));
    assert!(!is_cdn_image_url(
        "https://example.com/acme/image/upload/a/b.png",
        HOST
    ));
    assert!(!is_cdn_image_url(
        "https://res.cloudinary.com/acme/video/upload/a/b.mp4",
        HOST
    ));
    assert!(!is_cdn_image_url(
        "ftp://res.cloudinary.com/acme/image/upload/a/b.png",
        HOST
    ));
}

#[test]
fn version_detection_is_strict() {
    assert!(is_version("v1"));
    assert!(is_version("v1712345678"));
    assert!(!is_version("v"));
    assert!(!is_version("vintage"));
}
