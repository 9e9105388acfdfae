use url::Url;

/// Resource-type path segments the CDN accepts.
const DELIVERY_KINDS: [&str; 3] = ["image", "images", "video"];
/// Delivery kind of the flat SEO-short URL form.
const SEO_SHORT_DELIVERY: &str = "images";

/// A CDN URL decomposed into the pieces the transform grammar needs.
///
/// Every field is empty when the URL does not have the
/// `/{cloud}/{image|images|video}/upload/...` shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct AssetIdentifier {
    /// Cloud account name (first path segment).
    pub cloud: String,
    /// Id usable inside an `l_` layer directive (`folder:sub:name`).
    pub overlay_id: String,
    /// Asset path with extension, transforms and version stripped.
    pub base_asset: String,
    /// Resource type segment (`image`, `images` or `video`).
    pub delivery: String,
}

impl AssetIdentifier {
    /// Usable as a transform input (overlay layer or base asset).
    pub fn is_usable(&self) -> bool {
        !self.cloud.is_empty() && !self.overlay_id.is_empty() && !self.base_asset.is_empty()
    }

    pub fn is_image(&self) -> bool {
        self.is_usable() && self.delivery != "video"
    }
}

/// Parse any string; malformed input yields an all-empty identifier.
pub fn parse_asset_url(raw: &str) -> AssetIdentifier {
    let Ok(url) = Url::parse(raw.trim()) else {
        return AssetIdentifier::default();
    };
    let Some(segments) = url.path_segments() else {
        return AssetIdentifier::default();
    };
    let segments: Vec<&str> = segments.filter(|s| !s.is_empty()).collect();
    if segments.len() < 4 {
        return AssetIdentifier::default();
    }

    let (cloud, delivery) = (segments[0], segments[1]);
    if !DELIVERY_KINDS.contains(&delivery) || segments[2] != "upload" {
        return AssetIdentifier::default();
    }

    let mut rest = &segments[3..];
    while let Some(first) = rest.first() {
        if is_transform_list(first) || is_version(first) {
            rest = &rest[1..];
        } else {
            break;
        }
    }
    let Some((file, folders)) = rest.split_last() else {
        return AssetIdentifier::default();
    };

    let stem = match file.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => file,
    };
    if stem.is_empty() {
        return AssetIdentifier::default();
    }

    let overlay_id = if delivery == SEO_SHORT_DELIVERY || folders.is_empty() {
        stem.to_string()
    } else {
        let mut parts: Vec<&str> = folders.to_vec();
        parts.push(stem);
        parts.join(":")
    };

    AssetIdentifier {
        cloud: cloud.to_string(),
        overlay_id,
        base_asset: rest.join("/"),
        delivery: delivery.to_string(),
    }
}

/// Image URL on the configured CDN host with a parseable asset path.
pub fn is_cdn_image_url(raw: &str, host: &str) -> bool {
    let Ok(url) = Url::parse(raw.trim()) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    let host_matches = url
        .host_str()
        .is_some_and(|h| h.eq_ignore_ascii_case(host));
    host_matches && parse_asset_url(raw).is_image()
}

fn is_transform_list(seg: &str) -> bool {
    seg.contains(',')
}

fn is_version(seg: &str) -> bool {
    seg.len() > 1
        && seg.starts_with('v')
        && seg[1..].bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/ident.rs"]
mod tests;
