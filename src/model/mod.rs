pub(crate) mod de;
pub(crate) mod logo;
pub(crate) mod placement;
pub(crate) mod product;
