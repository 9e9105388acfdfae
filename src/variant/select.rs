use crate::{
    assets::ident::is_cdn_image_url,
    model::logo::{LogoAsset, LogoSet, Shade, Side},
};

/// Asset is present and hosted as an image on the CDN.
pub fn is_valid_asset(asset: Option<&LogoAsset>, host: &str) -> bool {
    asset.is_some_and(|a| is_cdn_image_url(&a.url, host))
}

/// The back-logo gate: a slot may only switch to back art that actually exists.
pub fn has_valid_back(set: &LogoSet, host: &str) -> bool {
    is_valid_asset(set.back_darker.as_ref(), host) || is_valid_asset(set.back_lighter.as_ref(), host)
}

/// Ordered candidates tried by [`pick_logo_variant`].
pub(crate) fn candidate_chain(
    use_back: bool,
    background_is_dark: bool,
    shade_override: Option<Shade>,
) -> [(Side, Shade); 4] {
    let side = Side::from_use_back(use_back);
    match shade_override {
        Some(shade) => [
            (side, shade),
            (side, shade.opposite()),
            (Side::Front, Shade::Darker),
            (Side::Front, Shade::Lighter),
        ],
        None => {
            let shade = Shade::contrasting(background_is_dark);
            [
                (side, shade),
                (Side::Front, shade.opposite()),
                (Side::Front, Shade::Darker),
                (Side::Front, Shade::Lighter),
            ]
        }
    }
}

/// Choose the logo art for one placement.
///
/// With a shade override the requested shade is forced on the requested side, then the
/// other shade on that side, then the front darker and front lighter art. Without one, the
/// shade contrasting the background is tried on the requested side, then the opposite
/// front shade, then the front darker art. `None` means the placement must be skipped.
pub fn pick_logo_variant<'a>(
    set: &'a LogoSet,
    use_back: bool,
    background_is_dark: bool,
    shade_override: Option<Shade>,
    host: &str,
) -> Option<&'a LogoAsset> {
    candidate_chain(use_back, background_is_dark, shade_override)
        .into_iter()
        .map(|(side, shade)| set.get(side, shade))
        .find(|asset| is_valid_asset(*asset, host))
        .flatten()
}

#[cfg(test)]
#[path = "../../tests/unit/variant/select.rs"]
mod tests;
