pub(crate) mod ident;
