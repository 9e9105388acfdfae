use crate::{
    emit::builder::ResolvedPlacement,
    model::{logo::LogoSet, placement::Placement},
    overrides::store::{OverrideScope, OverrideStore},
    variant::select::has_valid_back,
};

/// An override store viewed through one editing scope.
#[derive(Clone, Copy, Debug)]
pub struct ScopedOverrides<'a> {
    pub store: &'a OverrideStore,
    pub scope: &'a OverrideScope,
}

impl<'a> ScopedOverrides<'a> {
    pub fn new(store: &'a OverrideStore, scope: &'a OverrideScope) -> Self {
        Self { store, scope }
    }

    fn get(&self, product_id: &str, name: &str) -> Option<bool> {
        self.store.get_override_for(self.scope, product_id, name)
    }
}

/// Filter to active placements and decide back/front for each.
///
/// An explicit override wins; otherwise a slot uses back art only when it allows it
/// and the logo set carries usable back art.
pub fn resolve_placements<'a>(
    placements: &'a [Placement],
    product_id: &str,
    logos: &LogoSet,
    overrides: Option<ScopedOverrides<'_>>,
    host: &str,
) -> Vec<ResolvedPlacement<'a>> {
    let back_gate = has_valid_back(logos, host);
    placements
        .iter()
        .filter(|p| p.active)
        .map(|p| {
            let forced = overrides.and_then(|o| o.get(product_id, &p.name));
            ResolvedPlacement {
                placement: p,
                use_back: forced.unwrap_or(p.back && back_gate),
            }
        })
        .collect()
}
